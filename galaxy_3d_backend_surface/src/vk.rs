//! Vulkan native info structs
//!
//! Describes a `VkImage` created outside of the abstraction layer, using the
//! `ash` Vulkan types so no conversion is needed at the device boundary.

use ash::vk;
use bitflags::bitflags;
use crate::error::Galaxy3dResult;
use crate::pixel_config::PixelConfig;
use crate::surface_bail;

bitflags! {
    /// Properties of the memory bound to an image
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct VkAllocFlags: u32 {
        /// Memory is not host-coherent, mapped ranges need explicit flushes
        const NONCOHERENT = 0x1;
        /// Memory can be mapped for host access
        const MAPPABLE = 0x2;
    }
}

impl Default for VkAllocFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Device memory backing a `VkImage`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VkAlloc {
    /// Memory object
    pub memory: vk::DeviceMemory,
    /// Offset of the image inside `memory`
    pub offset: vk::DeviceSize,
    /// Size of the bound range
    pub size: vk::DeviceSize,
    /// Coherency / mappability of the memory
    pub flags: VkAllocFlags,
}

impl Default for VkAlloc {
    fn default() -> Self {
        Self {
            memory: vk::DeviceMemory::null(),
            offset: 0,
            size: 0,
            flags: VkAllocFlags::empty(),
        }
    }
}

/// Image created by a Vulkan device
///
/// Used by both textures and render targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VkImageInfo {
    /// Image handle
    pub image: vk::Image,
    /// Memory bound to the image
    pub alloc: VkAlloc,
    /// Tiling the image was created with
    pub image_tiling: vk::ImageTiling,
    /// Layout the image is in when handed over
    pub image_layout: vk::ImageLayout,
    /// Image format
    pub format: vk::Format,
    /// Number of mip levels
    pub level_count: u32,
}

impl Default for VkImageInfo {
    fn default() -> Self {
        Self {
            image: vk::Image::null(),
            alloc: VkAlloc::default(),
            image_tiling: vk::ImageTiling::OPTIMAL,
            image_layout: vk::ImageLayout::UNDEFINED,
            format: vk::Format::UNDEFINED,
            level_count: 0,
        }
    }
}

impl VkImageInfo {
    /// Check the preconditions a Vulkan device relies on before wrapping the image
    ///
    /// # Errors
    ///
    /// Returns `InvalidInfo` if the image handle is null, the format is
    /// `UNDEFINED`, or the level count is 0.
    pub fn validate(&self) -> Galaxy3dResult<()> {
        if self.image == vk::Image::null() {
            surface_bail!("galaxy3d::vk", InvalidInfo, "VkImage handle is null");
        }
        if self.format == vk::Format::UNDEFINED {
            surface_bail!("galaxy3d::vk", InvalidInfo, "VkImage format is UNDEFINED");
        }
        if self.level_count == 0 {
            surface_bail!("galaxy3d::vk", InvalidInfo, "VkImage level count is 0");
        }
        Ok(())
    }
}

/// Number of stencil bits stored by a format (0 for formats without stencil)
pub fn format_stencil_bits(format: vk::Format) -> u32 {
    match format {
        vk::Format::S8_UINT
        | vk::Format::D16_UNORM_S8_UINT
        | vk::Format::D24_UNORM_S8_UINT
        | vk::Format::D32_SFLOAT_S8_UINT => 8,
        _ => 0,
    }
}

/// Map a Vulkan format to the legacy pixel config
///
/// Formats without a legacy equivalent (depth, compressed, ...) map to `Unknown`.
pub fn format_to_config(format: vk::Format) -> PixelConfig {
    match format {
        vk::Format::R8_UNORM => PixelConfig::Alpha8,
        vk::Format::R5G6B5_UNORM_PACK16 => PixelConfig::Rgb565,
        vk::Format::B4G4R4A4_UNORM_PACK16 => PixelConfig::Rgba4444,
        vk::Format::R8G8B8A8_UNORM => PixelConfig::Rgba8888,
        vk::Format::B8G8R8A8_UNORM => PixelConfig::Bgra8888,
        vk::Format::R8G8B8A8_SRGB => PixelConfig::Srgba8888,
        vk::Format::B8G8R8A8_SRGB => PixelConfig::Sbgra8888,
        vk::Format::A2B10G10R10_UNORM_PACK32 => PixelConfig::Rgba1010102,
        vk::Format::R32G32B32A32_SFLOAT => PixelConfig::RgbaFloat,
        vk::Format::R32G32_SFLOAT => PixelConfig::RgFloat,
        vk::Format::R16_SFLOAT => PixelConfig::AlphaHalf,
        vk::Format::R16G16B16A16_SFLOAT => PixelConfig::RgbaHalf,
        _ => PixelConfig::Unknown,
    }
}

#[cfg(test)]
#[path = "vk_tests.rs"]
mod tests;
