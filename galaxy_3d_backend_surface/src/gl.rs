//! OpenGL native info structs
//!
//! Plain-old-data mirrors of what a GL context hands out for an externally
//! created texture or framebuffer, plus the sized-internal-format mapping to
//! the legacy [`PixelConfig`].

use bytemuck::{Pod, Zeroable};
use crate::error::Galaxy3dResult;
use crate::pixel_config::PixelConfig;
use crate::surface_bail;

/// GL enumerant (`GLenum`)
pub type GlEnum = u32;

/// GL object name (`GLuint`)
pub type GlUint = u32;

// ===== TEXTURE TARGETS =====

pub const GL_TEXTURE_2D: GlEnum = 0x0DE1;
pub const GL_TEXTURE_RECTANGLE: GlEnum = 0x84F5;
pub const GL_TEXTURE_EXTERNAL_OES: GlEnum = 0x8D65;

// ===== SIZED INTERNAL FORMATS =====

pub const GL_ALPHA8: GlEnum = 0x803C;
pub const GL_LUMINANCE8: GlEnum = 0x8040;
pub const GL_R8: GlEnum = 0x8229;
pub const GL_RGB565: GlEnum = 0x8D62;
pub const GL_RGBA4: GlEnum = 0x8056;
pub const GL_RGBA8: GlEnum = 0x8058;
pub const GL_BGRA8: GlEnum = 0x93A1;
pub const GL_SRGB8_ALPHA8: GlEnum = 0x8C43;
pub const GL_RGB10_A2: GlEnum = 0x8059;
pub const GL_RGBA32F: GlEnum = 0x8814;
pub const GL_RG32F: GlEnum = 0x8230;
pub const GL_R16F: GlEnum = 0x822D;
pub const GL_RGBA16F: GlEnum = 0x881A;

/// Texture created by a GL context
///
/// `format` must be the sized internal format of the texture (e.g. `GL_RGBA8`),
/// not an unsized one like `GL_RGBA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct GlTextureInfo {
    /// `GL_TEXTURE_2D`, `GL_TEXTURE_RECTANGLE` or `GL_TEXTURE_EXTERNAL_OES`
    pub target: GlEnum,
    /// Texture object name
    pub id: GlUint,
    /// Sized internal format
    pub format: GlEnum,
}

impl GlTextureInfo {
    /// Check the preconditions a GL device relies on before wrapping the texture
    ///
    /// # Errors
    ///
    /// Returns `InvalidInfo` if the id is 0, the target is not a texture
    /// target, or the format is not a recognized sized internal format.
    pub fn validate(&self) -> Galaxy3dResult<()> {
        if self.id == 0 {
            surface_bail!("galaxy3d::gl", InvalidInfo, "GL texture id is 0");
        }
        if !is_texture_target(self.target) {
            surface_bail!("galaxy3d::gl", InvalidInfo,
                "GL texture target 0x{:04X} is not a texture target", self.target);
        }
        if sized_format_to_config(self.format).is_unknown() {
            surface_bail!("galaxy3d::gl", InvalidInfo,
                "GL texture format 0x{:04X} is not a recognized sized internal format", self.format);
        }
        Ok(())
    }
}

/// Framebuffer object created by a GL context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct GlFramebufferInfo {
    /// Framebuffer object name (0 is the default framebuffer)
    pub fbo_id: GlUint,
    /// Sized internal format of the color attachment
    pub format: GlEnum,
}

impl GlFramebufferInfo {
    /// Check the preconditions a GL device relies on before wrapping the framebuffer
    ///
    /// # Errors
    ///
    /// Returns `InvalidInfo` if the format is not a recognized sized internal format.
    pub fn validate(&self) -> Galaxy3dResult<()> {
        if sized_format_to_config(self.format).is_unknown() {
            surface_bail!("galaxy3d::gl", InvalidInfo,
                "GL framebuffer format 0x{:04X} is not a recognized sized internal format", self.format);
        }
        Ok(())
    }
}

/// Returns true for the texture targets a descriptor may carry
pub fn is_texture_target(target: GlEnum) -> bool {
    matches!(target, GL_TEXTURE_2D | GL_TEXTURE_RECTANGLE | GL_TEXTURE_EXTERNAL_OES)
}

/// Map a sized internal format to the legacy pixel config
///
/// Unrecognized formats map to `PixelConfig::Unknown`.
pub fn sized_format_to_config(format: GlEnum) -> PixelConfig {
    match format {
        GL_ALPHA8 | GL_R8 => PixelConfig::Alpha8,
        GL_LUMINANCE8 => PixelConfig::Gray8,
        GL_RGB565 => PixelConfig::Rgb565,
        GL_RGBA4 => PixelConfig::Rgba4444,
        GL_RGBA8 => PixelConfig::Rgba8888,
        GL_BGRA8 => PixelConfig::Bgra8888,
        GL_SRGB8_ALPHA8 => PixelConfig::Srgba8888,
        GL_RGB10_A2 => PixelConfig::Rgba1010102,
        GL_RGBA32F => PixelConfig::RgbaFloat,
        GL_RG32F => PixelConfig::RgFloat,
        GL_R16F => PixelConfig::AlphaHalf,
        GL_RGBA16F => PixelConfig::RgbaHalf,
        _ => PixelConfig::Unknown,
    }
}

/// Map a legacy pixel config to the sized internal format used to store it
///
/// GL has no sized sBGRA format, so `Sbgra8888` shares `GL_SRGB8_ALPHA8`
/// with `Srgba8888`.
pub fn config_to_sized_format(config: PixelConfig) -> Option<GlEnum> {
    let format = match config {
        PixelConfig::Unknown => return None,
        PixelConfig::Alpha8 => GL_R8,
        PixelConfig::Gray8 => GL_LUMINANCE8,
        PixelConfig::Rgb565 => GL_RGB565,
        PixelConfig::Rgba4444 => GL_RGBA4,
        PixelConfig::Rgba8888 => GL_RGBA8,
        PixelConfig::Bgra8888 => GL_BGRA8,
        PixelConfig::Srgba8888 | PixelConfig::Sbgra8888 => GL_SRGB8_ALPHA8,
        PixelConfig::Rgba1010102 => GL_RGB10_A2,
        PixelConfig::RgbaFloat => GL_RGBA32F,
        PixelConfig::RgFloat => GL_RG32F,
        PixelConfig::AlphaHalf => GL_R16F,
        PixelConfig::RgbaHalf => GL_RGBA16F,
    };
    Some(format)
}

#[cfg(test)]
#[path = "gl_tests.rs"]
mod tests;
