//! BackendFormat - a pixel format expressed in one backend's native terms

#[cfg(feature = "vulkan")]
use ash::vk;
use crate::backend::Backend;
use crate::error::{Galaxy3dError, Galaxy3dResult};
#[cfg(feature = "gl")]
use crate::gl::GlEnum;
use crate::pixel_config::PixelConfig;

/// Native format, one variant per compiled-in backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum FormatRepr {
    #[cfg(feature = "gl")]
    Gl {
        /// Sized internal format of the GL resource
        format: GlEnum,
        /// `GL_TEXTURE_2D`, `GL_TEXTURE_EXTERNAL_OES` or `GL_TEXTURE_RECTANGLE`
        target: GlEnum,
    },
    #[cfg(feature = "vulkan")]
    Vulkan(vk::Format),
    Mock(PixelConfig),
}

/// Backend-tagged pixel format
///
/// A default-constructed format is invalid: it has no backend and every
/// backend accessor returns `None`. The `make_*` constructors always produce
/// a valid format and do not check the native values they are given.
///
/// # Example
///
/// ```
/// use galaxy_3d_backend_surface::galaxy3d::{Backend, BackendFormat, PixelConfig};
///
/// let format = BackendFormat::make_mock(PixelConfig::Rgba8888);
/// assert_eq!(format.backend(), Some(Backend::Mock));
/// assert_eq!(format.mock_format(), Some(&PixelConfig::Rgba8888));
/// assert!(!BackendFormat::default().is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BackendFormat {
    repr: Option<FormatRepr>,
}

impl BackendFormat {
    /// GL format from a sized internal format and a texture target
    #[cfg(feature = "gl")]
    pub fn make_gl(format: GlEnum, target: GlEnum) -> Self {
        Self { repr: Some(FormatRepr::Gl { format, target }) }
    }

    /// Vulkan format
    #[cfg(feature = "vulkan")]
    pub fn make_vulkan(format: vk::Format) -> Self {
        Self { repr: Some(FormatRepr::Vulkan(format)) }
    }

    /// Mock format (the mock backend identifies formats by pixel config)
    pub fn make_mock(config: PixelConfig) -> Self {
        Self { repr: Some(FormatRepr::Mock(config)) }
    }

    /// Backend this format belongs to (`None` when invalid)
    pub fn backend(&self) -> Option<Backend> {
        self.repr.map(|repr| match repr {
            #[cfg(feature = "gl")]
            FormatRepr::Gl { .. } => Backend::OpenGl,
            #[cfg(feature = "vulkan")]
            FormatRepr::Vulkan(_) => Backend::Vulkan,
            FormatRepr::Mock(_) => Backend::Mock,
        })
    }

    /// Returns true if the format was built by one of the `make_*` constructors
    pub fn is_valid(&self) -> bool {
        self.repr.is_some()
    }

    /// Sized internal format, if this is a GL format
    #[cfg(feature = "gl")]
    pub fn gl_format(&self) -> Option<&GlEnum> {
        match &self.repr {
            Some(FormatRepr::Gl { format, .. }) => Some(format),
            _ => None,
        }
    }

    /// Texture target, if this is a GL format
    #[cfg(feature = "gl")]
    pub fn gl_target(&self) -> Option<&GlEnum> {
        match &self.repr {
            Some(FormatRepr::Gl { target, .. }) => Some(target),
            _ => None,
        }
    }

    /// Vulkan format, if this is a Vulkan format
    #[cfg(feature = "vulkan")]
    pub fn vulkan_format(&self) -> Option<&vk::Format> {
        match &self.repr {
            Some(FormatRepr::Vulkan(format)) => Some(format),
            _ => None,
        }
    }

    /// Pixel config, if this is a Mock format
    pub fn mock_format(&self) -> Option<&PixelConfig> {
        match &self.repr {
            Some(FormatRepr::Mock(config)) => Some(config),
            _ => None,
        }
    }

    /// Fail with `BackendMismatch` unless this format belongs to `expected`
    pub fn ensure_backend(&self, expected: Backend) -> Galaxy3dResult<()> {
        check_backend(self.backend(), expected)
    }
}

/// Shared by all descriptors: compare the active tag against the expected one
pub(crate) fn check_backend(actual: Option<Backend>, expected: Backend) -> Galaxy3dResult<()> {
    if actual == Some(expected) {
        Ok(())
    } else {
        Err(Galaxy3dError::BackendMismatch { expected, actual })
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
