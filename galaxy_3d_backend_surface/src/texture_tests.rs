//! Unit tests for texture.rs
//!
//! Covers every backend constructor, absent-on-mismatch accessors, format()
//! derivation, the legacy config channel and validation.

use crate::backend::{Backend, MipMapped};
use crate::error::Galaxy3dError;
use crate::mock::MockTextureInfo;
use crate::pixel_config::PixelConfig;
use crate::texture::BackendTexture;

fn mock_info() -> MockTextureInfo {
    MockTextureInfo { config: PixelConfig::Rgba8888, id: 12 }
}

// ============================================================================
// INVALID TEXTURE
// ============================================================================

#[test]
fn test_default_texture_is_invalid() {
    let texture = BackendTexture::default();

    assert!(!texture.is_valid());
    assert_eq!(texture.backend(), None);
    assert_eq!(texture.mock_texture_info(), None);
    #[cfg(feature = "gl")]
    assert_eq!(texture.gl_texture_info(), None);
    #[cfg(feature = "vulkan")]
    assert_eq!(texture.vulkan_image_info(), None);
    assert_eq!(texture.testing_only_pixel_config(), PixelConfig::Unknown);
}

#[test]
fn test_default_texture_format_is_invalid() {
    assert!(!BackendTexture::default().format().is_valid());
}

#[test]
fn test_default_texture_fails_validation() {
    let result = BackendTexture::default().validate();
    assert!(matches!(result, Err(Galaxy3dError::InvalidDescriptor(_))));
}

// ============================================================================
// MOCK
// ============================================================================

#[test]
fn test_new_mock() {
    let texture = BackendTexture::new_mock(128, 64, MipMapped::Yes, mock_info());

    assert!(texture.is_valid());
    assert_eq!(texture.backend(), Some(Backend::Mock));
    assert_eq!(texture.width(), 128);
    assert_eq!(texture.height(), 64);
    assert!(texture.has_mip_maps());
    assert_eq!(texture.mip_mapped(), MipMapped::Yes);
    assert_eq!(texture.mock_texture_info(), Some(&mock_info()));
    assert_eq!(texture.testing_only_pixel_config(), PixelConfig::Rgba8888);
    #[cfg(feature = "gl")]
    assert_eq!(texture.gl_texture_info(), None);
    #[cfg(feature = "vulkan")]
    assert_eq!(texture.vulkan_image_info(), None);
}

#[test]
fn test_mock_format() {
    let texture = BackendTexture::new_mock(16, 16, MipMapped::No, mock_info());
    let format = texture.format();

    assert_eq!(format.backend(), Some(Backend::Mock));
    assert_eq!(format.mock_format(), Some(&PixelConfig::Rgba8888));
}

#[test]
fn test_mock_validate() {
    let texture = BackendTexture::new_mock(16, 16, MipMapped::No, mock_info());
    assert_eq!(texture.validate(), Ok(()));

    let empty = BackendTexture::new_mock(0, 16, MipMapped::No, mock_info());
    assert!(matches!(empty.validate(), Err(Galaxy3dError::InvalidDescriptor(msg)) if msg.contains("0x16")));

    let unknown = BackendTexture::new_mock(
        16, 16, MipMapped::No,
        MockTextureInfo { config: PixelConfig::Unknown, id: 1 },
    );
    // Still a valid descriptor, the payload is what fails
    assert!(unknown.is_valid());
    assert!(matches!(unknown.validate(), Err(Galaxy3dError::InvalidInfo(_))));
}

// ============================================================================
// GL
// ============================================================================

#[cfg(feature = "gl")]
mod gl_textures {
    use super::*;
    use crate::gl::*;

    fn rgba8_info() -> GlTextureInfo {
        GlTextureInfo { target: GL_TEXTURE_2D, id: 5, format: GL_RGBA8 }
    }

    #[test]
    fn test_new_gl_256x256() {
        let info = GlTextureInfo { target: 0x0DE1, id: 5, format: 0x8058 };
        let texture = BackendTexture::new_gl(256, 256, MipMapped::No, info);

        assert_eq!(texture.width(), 256);
        assert_eq!(texture.height(), 256);
        assert!(!texture.has_mip_maps());
        assert_eq!(texture.backend(), Some(Backend::OpenGl));

        let retrieved = texture.gl_texture_info().copied();
        assert_eq!(retrieved.map(|i| (i.format, i.target)), Some((0x8058, 0x0DE1)));
        assert_eq!(texture.mock_texture_info(), None);
        #[cfg(feature = "vulkan")]
        assert_eq!(texture.vulkan_image_info(), None);
    }

    #[test]
    fn test_new_gl_derives_config_from_sized_format() {
        let texture = BackendTexture::new_gl(8, 8, MipMapped::No, rgba8_info());
        assert_eq!(texture.testing_only_pixel_config(), PixelConfig::Rgba8888);

        let bgra = GlTextureInfo { format: GL_BGRA8, ..rgba8_info() };
        let texture = BackendTexture::new_gl(8, 8, MipMapped::No, bgra);
        assert_eq!(texture.testing_only_pixel_config(), PixelConfig::Bgra8888);
    }

    #[test]
    fn test_gl_format_uses_format_and_target() {
        let info = GlTextureInfo { target: GL_TEXTURE_RECTANGLE, id: 9, format: GL_SRGB8_ALPHA8 };
        let format = BackendTexture::new_gl(32, 32, MipMapped::No, info).format();

        assert_eq!(format.backend(), Some(Backend::OpenGl));
        assert_eq!(format.gl_format(), Some(&GL_SRGB8_ALPHA8));
        assert_eq!(format.gl_target(), Some(&GL_TEXTURE_RECTANGLE));
    }

    #[test]
    fn test_new_gl_with_config_replaces_info_format() {
        // Format in the info is ignored by this call shape
        let stale = GlTextureInfo { format: 0, ..rgba8_info() };
        let texture = BackendTexture::new_gl_with_config(
            64, 32, PixelConfig::Bgra8888, MipMapped::Yes, stale,
        );

        assert_eq!(texture.backend(), Some(Backend::OpenGl));
        assert_eq!(texture.testing_only_pixel_config(), PixelConfig::Bgra8888);
        assert!(texture.has_mip_maps());

        let info = texture.gl_texture_info().copied().unwrap();
        assert_eq!(info.format, GL_BGRA8);
        assert_eq!(info.id, 5);
        assert_eq!(info.target, GL_TEXTURE_2D);
        assert_eq!(texture.format().gl_format(), Some(&GL_BGRA8));
    }

    #[test]
    fn test_new_gl_with_config_keeps_caller_config() {
        // sBGRA shares GL_SRGB8_ALPHA8 storage but the caller's config is kept
        let texture = BackendTexture::new_gl_with_config(
            4, 4, PixelConfig::Sbgra8888, MipMapped::No, rgba8_info(),
        );
        assert_eq!(texture.testing_only_pixel_config(), PixelConfig::Sbgra8888);
        assert_eq!(texture.format().gl_format(), Some(&GL_SRGB8_ALPHA8));
    }

    #[test]
    fn test_gl_validate() {
        let texture = BackendTexture::new_gl(8, 8, MipMapped::No, rgba8_info());
        assert_eq!(texture.validate(), Ok(()));

        let unsized_format = GlTextureInfo { format: 0x1908, ..rgba8_info() };
        let texture = BackendTexture::new_gl(8, 8, MipMapped::No, unsized_format);
        assert!(texture.is_valid());
        assert!(matches!(texture.validate(), Err(Galaxy3dError::InvalidInfo(_))));
    }

    #[test]
    fn test_gl_ensure_backend() {
        let texture = BackendTexture::new_gl(8, 8, MipMapped::No, rgba8_info());
        assert_eq!(texture.ensure_backend(Backend::OpenGl), Ok(()));
        assert_eq!(
            texture.ensure_backend(Backend::Vulkan),
            Err(Galaxy3dError::BackendMismatch { expected: Backend::Vulkan, actual: Some(Backend::OpenGl) })
        );
    }
}

// ============================================================================
// VULKAN
// ============================================================================

#[cfg(feature = "vulkan")]
mod vulkan_textures {
    use super::*;
    use ash::vk;
    use ash::vk::Handle;
    use crate::vk::{VkAlloc, VkImageInfo};

    fn image_info(format: vk::Format, level_count: u32) -> VkImageInfo {
        VkImageInfo {
            image: vk::Image::from_raw(0xBEEF),
            alloc: VkAlloc::default(),
            image_tiling: vk::ImageTiling::OPTIMAL,
            image_layout: vk::ImageLayout::SHADER_READ_ONLY_OPTIMAL,
            format,
            level_count,
        }
    }

    #[test]
    fn test_new_vulkan() {
        let info = image_info(vk::Format::B8G8R8A8_UNORM, 9);
        let texture = BackendTexture::new_vulkan(
            256, 256, MipMapped::from_level_count(info.level_count), info,
        );

        assert_eq!(texture.backend(), Some(Backend::Vulkan));
        assert!(texture.has_mip_maps());
        assert_eq!(texture.vulkan_image_info(), Some(&info));
        assert_eq!(texture.mock_texture_info(), None);
        #[cfg(feature = "gl")]
        assert_eq!(texture.gl_texture_info(), None);
        assert_eq!(texture.testing_only_pixel_config(), PixelConfig::Bgra8888);
        assert_eq!(texture.validate(), Ok(()));
    }

    #[test]
    fn test_vulkan_format() {
        let info = image_info(vk::Format::R16G16B16A16_SFLOAT, 1);
        let format = BackendTexture::new_vulkan(4, 4, MipMapped::No, info).format();

        assert_eq!(format.backend(), Some(Backend::Vulkan));
        assert_eq!(format.vulkan_format(), Some(&vk::Format::R16G16B16A16_SFLOAT));
    }

    #[test]
    fn test_vulkan_depth_image_has_unknown_legacy_config() {
        // No legacy config for depth, the descriptor is still valid
        let info = image_info(vk::Format::D32_SFLOAT, 1);
        let texture = BackendTexture::new_vulkan(4, 4, MipMapped::No, info);

        assert!(texture.is_valid());
        assert_eq!(texture.testing_only_pixel_config(), PixelConfig::Unknown);
    }
}

// ============================================================================
// VALUE SEMANTICS
// ============================================================================

#[test]
fn test_copies_are_independent_and_equal() {
    let original = BackendTexture::new_mock(32, 16, MipMapped::No, mock_info());
    let copy = original;

    assert_eq!(original, copy);
    assert_eq!(copy.width(), original.width());
    assert_eq!(copy.mock_texture_info(), original.mock_texture_info());

    let other = BackendTexture::new_mock(32, 16, MipMapped::Yes, mock_info());
    assert_ne!(original, other);
}

#[test]
fn test_texture_is_send_sync() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<BackendTexture>();
}
