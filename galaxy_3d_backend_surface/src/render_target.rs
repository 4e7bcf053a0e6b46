/// BackendRenderTarget - an externally created render target

#[cfg(feature = "vulkan")]
use crate::vk::{self as vk_info, VkImageInfo};
#[cfg(feature = "gl")]
use crate::gl::{self, GlFramebufferInfo};
use crate::backend::Backend;
use crate::error::Galaxy3dResult;
use crate::format::check_backend;
use crate::mock::MockRenderTargetInfo;
use crate::pixel_config::PixelConfig;
use crate::surface_bail;

/// Native render target info, one variant per compiled-in backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum RenderTargetRepr {
    #[cfg(feature = "gl")]
    Gl(GlFramebufferInfo),
    #[cfg(feature = "vulkan")]
    Vulkan(VkImageInfo),
    Mock(MockRenderTargetInfo),
}

/// Descriptor of a render target created and owned by a native backend
///
/// Consumers use it for sizing and sample-count negotiation, so unlike
/// [`crate::texture::BackendTexture`] it has no `format()`. Same validity
/// rule: the native payload is present or the descriptor is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BackendRenderTarget {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel (1 = no MSAA)
    sample_count: u32,
    stencil_bits: u32,
    /// Legacy config, only reachable through `crate::privileged`
    config: PixelConfig,
    repr: Option<RenderTargetRepr>,
}

impl BackendRenderTarget {
    /// GL framebuffer
    ///
    /// `gl_info.format` must be a valid sized internal format.
    #[cfg(feature = "gl")]
    pub fn new_gl(
        width: u32,
        height: u32,
        sample_count: u32,
        stencil_bits: u32,
        gl_info: GlFramebufferInfo,
    ) -> Self {
        Self {
            width,
            height,
            sample_count,
            stencil_bits,
            config: gl::sized_format_to_config(gl_info.format),
            repr: Some(RenderTargetRepr::Gl(gl_info)),
        }
    }

    /// GL framebuffer described by an explicit pixel config
    ///
    /// Older call shape: `gl_info.format` is ignored and replaced by the sized
    /// format that stores `config`. Prefer [`BackendRenderTarget::new_gl`].
    #[cfg(feature = "gl")]
    pub fn new_gl_with_config(
        width: u32,
        height: u32,
        sample_count: u32,
        stencil_bits: u32,
        config: PixelConfig,
        gl_info: GlFramebufferInfo,
    ) -> Self {
        let gl_info = GlFramebufferInfo {
            format: gl::config_to_sized_format(config).unwrap_or(0),
            ..gl_info
        };
        Self {
            config,
            ..Self::new_gl(width, height, sample_count, stencil_bits, gl_info)
        }
    }

    /// Vulkan image used as a render target
    ///
    /// Stencil bits are inferred from `vk_info.format`.
    #[cfg(feature = "vulkan")]
    pub fn new_vulkan(width: u32, height: u32, sample_count: u32, vk_info: VkImageInfo) -> Self {
        Self {
            width,
            height,
            sample_count,
            stencil_bits: vk_info::format_stencil_bits(vk_info.format),
            config: vk_info::format_to_config(vk_info.format),
            repr: Some(RenderTargetRepr::Vulkan(vk_info)),
        }
    }

    /// Vulkan image used as a render target, with a caller-supplied stencil count
    ///
    /// Older call shape: forwards to [`BackendRenderTarget::new_vulkan`]. The
    /// supplied count is ignored, the stored value always follows the image format.
    #[cfg(feature = "vulkan")]
    pub fn new_vulkan_with_stencil_bits(
        width: u32,
        height: u32,
        sample_count: u32,
        _stencil_bits: u32,
        vk_info: VkImageInfo,
    ) -> Self {
        Self::new_vulkan(width, height, sample_count, vk_info)
    }

    /// Mock render target
    pub fn new_mock(
        width: u32,
        height: u32,
        sample_count: u32,
        stencil_bits: u32,
        mock_info: MockRenderTargetInfo,
    ) -> Self {
        Self {
            width,
            height,
            sample_count,
            stencil_bits,
            config: mock_info.config,
            repr: Some(RenderTargetRepr::Mock(mock_info)),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn stencil_bits(&self) -> u32 {
        self.stencil_bits
    }

    /// Backend owning the render target (`None` when invalid)
    pub fn backend(&self) -> Option<Backend> {
        self.repr.map(|repr| match repr {
            #[cfg(feature = "gl")]
            RenderTargetRepr::Gl(_) => Backend::OpenGl,
            #[cfg(feature = "vulkan")]
            RenderTargetRepr::Vulkan(_) => Backend::Vulkan,
            RenderTargetRepr::Mock(_) => Backend::Mock,
        })
    }

    /// Returns true if the render target was built by one of the backend constructors
    pub fn is_valid(&self) -> bool {
        self.repr.is_some()
    }

    /// GL framebuffer info, if this is a GL render target
    #[cfg(feature = "gl")]
    pub fn gl_framebuffer_info(&self) -> Option<&GlFramebufferInfo> {
        match &self.repr {
            Some(RenderTargetRepr::Gl(info)) => Some(info),
            _ => None,
        }
    }

    /// Vulkan image info, if this is a Vulkan render target
    #[cfg(feature = "vulkan")]
    pub fn vulkan_image_info(&self) -> Option<&VkImageInfo> {
        match &self.repr {
            Some(RenderTargetRepr::Vulkan(info)) => Some(info),
            _ => None,
        }
    }

    /// Mock render target info, if this is a Mock render target
    pub fn mock_render_target_info(&self) -> Option<&MockRenderTargetInfo> {
        match &self.repr {
            Some(RenderTargetRepr::Mock(info)) => Some(info),
            _ => None,
        }
    }

    /// Fail with `BackendMismatch` unless this render target belongs to `expected`
    pub fn ensure_backend(&self, expected: Backend) -> Galaxy3dResult<()> {
        check_backend(self.backend(), expected)
    }

    /// Check the render target before a device wraps it
    ///
    /// # Errors
    ///
    /// - `InvalidDescriptor` if the render target is default-constructed, has a
    ///   zero dimension or a zero sample count
    /// - `InvalidInfo` if the native info fails its backend's checks
    pub fn validate(&self) -> Galaxy3dResult<()> {
        let Some(repr) = self.repr else {
            surface_bail!("galaxy3d::BackendRenderTarget", InvalidDescriptor,
                "render target is not backed by any backend");
        };
        if self.width == 0 || self.height == 0 {
            surface_bail!("galaxy3d::BackendRenderTarget", InvalidDescriptor,
                "render target has an empty size {}x{}", self.width, self.height);
        }
        if self.sample_count == 0 {
            surface_bail!("galaxy3d::BackendRenderTarget", InvalidDescriptor,
                "render target sample count is 0");
        }
        match repr {
            #[cfg(feature = "gl")]
            RenderTargetRepr::Gl(info) => info.validate(),
            #[cfg(feature = "vulkan")]
            RenderTargetRepr::Vulkan(info) => info.validate(),
            RenderTargetRepr::Mock(info) => info.validate(),
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
#[path = "render_target_tests.rs"]
mod tests;
