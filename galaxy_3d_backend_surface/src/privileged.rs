//! Privileged access to the legacy pixel config of textures and render targets
//!
//! The legacy [`PixelConfig`] carried by [`BackendTexture`] and
//! [`BackendRenderTarget`] is not part of their public contract. It is only
//! handed to the collaborators listed in this module, which still run
//! config-based format matching. New code uses [`BackendTexture::format`].
//!
//! Access is granted per descriptor kind through two sealed capability traits.
//! The marker types below are the complete list of readers: nothing outside
//! this module can implement the traits, so the set of call sites is fixed
//! here and every read is traced with the reader's name.
//!
//! ```
//! use galaxy_3d_backend_surface::galaxy3d::{BackendTexture, MipMapped, PixelConfig};
//! use galaxy_3d_backend_surface::galaxy3d::mock::MockTextureInfo;
//! use galaxy_3d_backend_surface::galaxy3d::privileged::{self, ProxyProvider};
//!
//! let info = MockTextureInfo { config: PixelConfig::Alpha8, id: 2 };
//! let texture = BackendTexture::new_mock(8, 8, MipMapped::No, info);
//!
//! assert_eq!(privileged::texture_config::<ProxyProvider>(&texture), PixelConfig::Alpha8);
//! ```

use crate::pixel_config::PixelConfig;
use crate::render_target::BackendRenderTarget;
use crate::texture::BackendTexture;

mod sealed {
    pub trait Sealed {}
}

/// Collaborator allowed to read the legacy config of a [`BackendTexture`]
pub trait TextureConfigReader: sealed::Sealed {
    /// Name used when tracing reads
    const NAME: &'static str;
}

/// Collaborator allowed to read the legacy config of a [`BackendRenderTarget`]
pub trait RenderTargetConfigReader: sealed::Sealed {
    /// Name used when tracing reads
    const NAME: &'static str;
}

// ===== COLLABORATORS =====

/// Image wrapper around a backend texture
pub struct ImageWrapper;
/// GPU-backed image wrapper
pub struct GpuImageWrapper;
/// Surface wrapper around a backend texture or render target
pub struct SurfaceWrapper;
/// GPU-backed surface wrapper
pub struct GpuSurfaceWrapper;
/// Lazy image generator over a backend texture
pub struct TextureImageGenerator;
/// Proxy / resource-cache provider
pub struct ProxyProvider;
/// Backend-independent device
pub struct GpuDevice;
/// GL device
pub struct GlDevice;
/// Vulkan device
pub struct VulkanDevice;
/// Deferred (promise) image helper
pub struct PromiseImageHelper;

macro_rules! grant {
    ($reader:ident: $($capability:ident),+) => {
        impl sealed::Sealed for $reader {}
        $(
            impl $capability for $reader {
                const NAME: &'static str = stringify!($reader);
            }
        )+
    };
}

grant!(ImageWrapper: TextureConfigReader);
grant!(GpuImageWrapper: TextureConfigReader, RenderTargetConfigReader);
grant!(SurfaceWrapper: TextureConfigReader, RenderTargetConfigReader);
grant!(GpuSurfaceWrapper: RenderTargetConfigReader);
grant!(TextureImageGenerator: TextureConfigReader);
grant!(ProxyProvider: TextureConfigReader, RenderTargetConfigReader);
grant!(GpuDevice: TextureConfigReader, RenderTargetConfigReader);
grant!(GlDevice: TextureConfigReader, RenderTargetConfigReader);
grant!(VulkanDevice: TextureConfigReader, RenderTargetConfigReader);
grant!(PromiseImageHelper: TextureConfigReader);

// ===== ACCESS =====

/// Legacy pixel config of a texture (`Unknown` for an invalid texture)
pub fn texture_config<R: TextureConfigReader>(texture: &BackendTexture) -> PixelConfig {
    let config = texture.config();
    crate::surface_trace!("galaxy3d::privileged",
        "{} read legacy texture config {:?}", R::NAME, config);
    config
}

/// Legacy pixel config of a render target (`Unknown` for an invalid render target)
pub fn render_target_config<R: RenderTargetConfigReader>(
    render_target: &BackendRenderTarget,
) -> PixelConfig {
    let config = render_target.config();
    crate::surface_trace!("galaxy3d::privileged",
        "{} read legacy render target config {:?}", R::NAME, config);
    config
}

#[cfg(test)]
#[path = "privileged_tests.rs"]
mod tests;
