//! Unit tests for vk.rs
//!
//! Pure format conversion and validation, no GPU required.
//! Image handles are fabricated with `Handle::from_raw`.

use ash::vk;
use ash::vk::Handle;
use crate::error::Galaxy3dError;
use crate::pixel_config::PixelConfig;
use crate::vk::*;

fn rgba8_image() -> VkImageInfo {
    VkImageInfo {
        image: vk::Image::from_raw(0x1000),
        alloc: VkAlloc {
            memory: vk::DeviceMemory::from_raw(0x2000),
            offset: 0,
            size: 256 * 256 * 4,
            flags: VkAllocFlags::MAPPABLE,
        },
        image_tiling: vk::ImageTiling::OPTIMAL,
        image_layout: vk::ImageLayout::SHADER_READ_ONLY_OPTIMAL,
        format: vk::Format::R8G8B8A8_UNORM,
        level_count: 1,
    }
}

// ============================================================================
// FORMAT CONVERSION TESTS
// ============================================================================

#[test]
fn test_format_to_config_color_formats() {
    assert_eq!(format_to_config(vk::Format::R8G8B8A8_UNORM), PixelConfig::Rgba8888);
    assert_eq!(format_to_config(vk::Format::B8G8R8A8_UNORM), PixelConfig::Bgra8888);
    assert_eq!(format_to_config(vk::Format::R8G8B8A8_SRGB), PixelConfig::Srgba8888);
    assert_eq!(format_to_config(vk::Format::B8G8R8A8_SRGB), PixelConfig::Sbgra8888);
    assert_eq!(format_to_config(vk::Format::R16G16B16A16_SFLOAT), PixelConfig::RgbaHalf);
}

#[test]
fn test_format_to_config_depth_formats_are_unknown() {
    assert_eq!(format_to_config(vk::Format::D32_SFLOAT), PixelConfig::Unknown);
    assert_eq!(format_to_config(vk::Format::D24_UNORM_S8_UINT), PixelConfig::Unknown);
    assert_eq!(format_to_config(vk::Format::UNDEFINED), PixelConfig::Unknown);
}

#[test]
fn test_format_to_config_packed_and_single_channel() {
    assert_eq!(format_to_config(vk::Format::R8_UNORM), PixelConfig::Alpha8);
    assert_eq!(format_to_config(vk::Format::R16_SFLOAT), PixelConfig::AlphaHalf);
    assert_eq!(format_to_config(vk::Format::R5G6B5_UNORM_PACK16), PixelConfig::Rgb565);
    assert_eq!(format_to_config(vk::Format::A2B10G10R10_UNORM_PACK32), PixelConfig::Rgba1010102);
}

// ============================================================================
// STENCIL BITS
// ============================================================================

#[test]
fn test_format_stencil_bits() {
    assert_eq!(format_stencil_bits(vk::Format::S8_UINT), 8);
    assert_eq!(format_stencil_bits(vk::Format::D24_UNORM_S8_UINT), 8);
    assert_eq!(format_stencil_bits(vk::Format::D32_SFLOAT_S8_UINT), 8);
    assert_eq!(format_stencil_bits(vk::Format::D32_SFLOAT), 0);
    assert_eq!(format_stencil_bits(vk::Format::B8G8R8A8_UNORM), 0);
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn test_image_info_validate_ok() {
    assert_eq!(rgba8_image().validate(), Ok(()));
}

#[test]
fn test_image_info_validate_null_image() {
    let info = VkImageInfo { image: vk::Image::null(), ..rgba8_image() };
    assert!(matches!(info.validate(), Err(Galaxy3dError::InvalidInfo(msg)) if msg.contains("null")));
}

#[test]
fn test_image_info_validate_undefined_format() {
    let info = VkImageInfo { format: vk::Format::UNDEFINED, ..rgba8_image() };
    assert!(matches!(info.validate(), Err(Galaxy3dError::InvalidInfo(msg)) if msg.contains("UNDEFINED")));
}

#[test]
fn test_image_info_validate_zero_levels() {
    let info = VkImageInfo { level_count: 0, ..rgba8_image() };
    assert!(matches!(info.validate(), Err(Galaxy3dError::InvalidInfo(_))));
}

#[test]
fn test_default_image_info_is_not_usable() {
    let info = VkImageInfo::default();
    assert_eq!(info.image, vk::Image::null());
    assert_eq!(info.alloc.flags, VkAllocFlags::empty());
    assert!(info.validate().is_err());
}

#[test]
fn test_alloc_flags_combine() {
    let flags = VkAllocFlags::NONCOHERENT | VkAllocFlags::MAPPABLE;
    assert!(flags.contains(VkAllocFlags::MAPPABLE));
    assert_eq!(flags.bits(), 0x3);
}
