/// BackendTexture - an externally created GPU texture

#[cfg(feature = "vulkan")]
use crate::vk::{self as vk_info, VkImageInfo};
#[cfg(feature = "gl")]
use crate::gl::{self, GlTextureInfo};
use crate::backend::{Backend, MipMapped};
use crate::error::Galaxy3dResult;
use crate::format::{check_backend, BackendFormat};
use crate::mock::MockTextureInfo;
use crate::pixel_config::PixelConfig;
use crate::surface_bail;

/// Native texture info, one variant per compiled-in backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TextureRepr {
    #[cfg(feature = "gl")]
    Gl(GlTextureInfo),
    #[cfg(feature = "vulkan")]
    Vulkan(VkImageInfo),
    Mock(MockTextureInfo),
}

/// Descriptor of a texture created and owned by a native backend
///
/// The descriptor only refers to the texture: dropping it never frees GPU
/// memory. Validity is the presence of the native payload; a
/// default-constructed texture is invalid and answers `None` to every backend
/// accessor.
///
/// # Example
///
/// ```
/// use galaxy_3d_backend_surface::galaxy3d::{Backend, BackendTexture, MipMapped, PixelConfig};
/// use galaxy_3d_backend_surface::galaxy3d::mock::MockTextureInfo;
///
/// let info = MockTextureInfo { config: PixelConfig::Rgba8888, id: 1 };
/// let texture = BackendTexture::new_mock(64, 64, MipMapped::No, info);
///
/// assert_eq!(texture.backend(), Some(Backend::Mock));
/// assert_eq!(texture.mock_texture_info(), Some(&info));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BackendTexture {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    mip_mapped: MipMapped,
    /// Legacy config, only reachable through `crate::privileged`
    config: PixelConfig,
    repr: Option<TextureRepr>,
}

impl BackendTexture {
    /// GL texture
    ///
    /// `gl_info.format` must be a valid sized internal format: it is the
    /// source of both `format()` and the legacy config.
    #[cfg(feature = "gl")]
    pub fn new_gl(width: u32, height: u32, mip_mapped: MipMapped, gl_info: GlTextureInfo) -> Self {
        Self {
            width,
            height,
            mip_mapped,
            config: gl::sized_format_to_config(gl_info.format),
            repr: Some(TextureRepr::Gl(gl_info)),
        }
    }

    /// GL texture described by an explicit pixel config
    ///
    /// Older call shape: `gl_info.format` is ignored and replaced by the sized
    /// format that stores `config`. Prefer [`BackendTexture::new_gl`].
    #[cfg(feature = "gl")]
    pub fn new_gl_with_config(
        width: u32,
        height: u32,
        config: PixelConfig,
        mip_mapped: MipMapped,
        gl_info: GlTextureInfo,
    ) -> Self {
        let gl_info = GlTextureInfo {
            format: gl::config_to_sized_format(config).unwrap_or(0),
            ..gl_info
        };
        Self {
            config,
            ..Self::new_gl(width, height, mip_mapped, gl_info)
        }
    }

    /// Vulkan image used as a texture
    ///
    /// Use [`MipMapped::from_level_count`] to derive `mip_mapped` from
    /// `vk_info.level_count`.
    #[cfg(feature = "vulkan")]
    pub fn new_vulkan(width: u32, height: u32, mip_mapped: MipMapped, vk_info: VkImageInfo) -> Self {
        Self {
            width,
            height,
            mip_mapped,
            config: vk_info::format_to_config(vk_info.format),
            repr: Some(TextureRepr::Vulkan(vk_info)),
        }
    }

    /// Mock texture
    pub fn new_mock(width: u32, height: u32, mip_mapped: MipMapped, mock_info: MockTextureInfo) -> Self {
        Self {
            width,
            height,
            mip_mapped,
            config: mock_info.config,
            repr: Some(TextureRepr::Mock(mock_info)),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn has_mip_maps(&self) -> bool {
        self.mip_mapped == MipMapped::Yes
    }

    pub fn mip_mapped(&self) -> MipMapped {
        self.mip_mapped
    }

    /// Backend owning the texture (`None` when invalid)
    pub fn backend(&self) -> Option<Backend> {
        self.repr.map(|repr| match repr {
            #[cfg(feature = "gl")]
            TextureRepr::Gl(_) => Backend::OpenGl,
            #[cfg(feature = "vulkan")]
            TextureRepr::Vulkan(_) => Backend::Vulkan,
            TextureRepr::Mock(_) => Backend::Mock,
        })
    }

    /// Returns true if the texture was built by one of the backend constructors
    pub fn is_valid(&self) -> bool {
        self.repr.is_some()
    }

    /// GL texture info, if this is a GL texture
    #[cfg(feature = "gl")]
    pub fn gl_texture_info(&self) -> Option<&GlTextureInfo> {
        match &self.repr {
            Some(TextureRepr::Gl(info)) => Some(info),
            _ => None,
        }
    }

    /// Vulkan image info, if this is a Vulkan texture
    #[cfg(feature = "vulkan")]
    pub fn vulkan_image_info(&self) -> Option<&VkImageInfo> {
        match &self.repr {
            Some(TextureRepr::Vulkan(info)) => Some(info),
            _ => None,
        }
    }

    /// Mock texture info, if this is a Mock texture
    pub fn mock_texture_info(&self) -> Option<&MockTextureInfo> {
        match &self.repr {
            Some(TextureRepr::Mock(info)) => Some(info),
            _ => None,
        }
    }

    /// Format matching this texture
    ///
    /// GL formats are built from the info's `(format, target)` pair. An
    /// invalid texture yields an invalid format.
    pub fn format(&self) -> BackendFormat {
        match self.repr {
            #[cfg(feature = "gl")]
            Some(TextureRepr::Gl(info)) => BackendFormat::make_gl(info.format, info.target),
            #[cfg(feature = "vulkan")]
            Some(TextureRepr::Vulkan(info)) => BackendFormat::make_vulkan(info.format),
            Some(TextureRepr::Mock(info)) => BackendFormat::make_mock(info.config),
            None => BackendFormat::default(),
        }
    }

    /// Fail with `BackendMismatch` unless this texture belongs to `expected`
    pub fn ensure_backend(&self, expected: Backend) -> Galaxy3dResult<()> {
        check_backend(self.backend(), expected)
    }

    /// Check the texture before a device wraps it
    ///
    /// # Errors
    ///
    /// - `InvalidDescriptor` if the texture is default-constructed or has a zero dimension
    /// - `InvalidInfo` if the native info fails its backend's checks
    pub fn validate(&self) -> Galaxy3dResult<()> {
        let Some(repr) = self.repr else {
            surface_bail!("galaxy3d::BackendTexture", InvalidDescriptor,
                "texture is not backed by any backend");
        };
        if self.width == 0 || self.height == 0 {
            surface_bail!("galaxy3d::BackendTexture", InvalidDescriptor,
                "texture has an empty size {}x{}", self.width, self.height);
        }
        match repr {
            #[cfg(feature = "gl")]
            TextureRepr::Gl(info) => info.validate(),
            #[cfg(feature = "vulkan")]
            TextureRepr::Vulkan(info) => info.validate(),
            TextureRepr::Mock(info) => info.validate(),
        }
    }

    /// Legacy pixel config, for the privileged bridge only
    pub(crate) fn config(&self) -> PixelConfig {
        self.config
    }

    /// Legacy pixel config, for tests of code that still matches on it
    #[cfg(any(test, feature = "test-utils"))]
    pub fn testing_only_pixel_config(&self) -> PixelConfig {
        self.config
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
