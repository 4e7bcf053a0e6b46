/// Backend tag shared by every descriptor

use std::fmt;

/// Native graphics API that owns the resource a descriptor refers to
///
/// The tag set is closed and does not depend on which backends are compiled
/// in: a build without the `vulkan` feature can still name `Backend::Vulkan`,
/// it just cannot construct a descriptor carrying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// OpenGL / OpenGL ES
    OpenGl,
    /// Vulkan
    Vulkan,
    /// Mock backend for tests (no GPU)
    Mock,
}

impl Backend {
    /// Every backend tag, in declaration order
    pub const ALL: [Backend; 3] = [Backend::OpenGl, Backend::Vulkan, Backend::Mock];

    /// Human-readable backend name
    pub fn name(self) -> &'static str {
        match self {
            Backend::OpenGl => "OpenGL",
            Backend::Vulkan => "Vulkan",
            Backend::Mock => "Mock",
        }
    }

    /// Returns true if descriptors for this backend can be built with the enabled features
    pub fn is_compiled_in(self) -> bool {
        match self {
            Backend::OpenGl => cfg!(feature = "gl"),
            Backend::Vulkan => cfg!(feature = "vulkan"),
            Backend::Mock => true,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a texture carries a full mip chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MipMapped {
    /// Single level
    #[default]
    No,
    /// Precomputed reduced-resolution levels are present
    Yes,
}

impl MipMapped {
    /// Derive the flag from a native level count (Vulkan `levelCount`)
    pub fn from_level_count(level_count: u32) -> Self {
        if level_count > 1 { MipMapped::Yes } else { MipMapped::No }
    }
}

impl From<bool> for MipMapped {
    fn from(mip_mapped: bool) -> Self {
        if mip_mapped { MipMapped::Yes } else { MipMapped::No }
    }
}
