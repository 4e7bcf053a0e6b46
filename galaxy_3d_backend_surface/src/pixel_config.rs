//! Legacy backend-neutral pixel configuration

/// Backend-neutral pixel layout used by legacy format-matching code
///
/// `BackendFormat` is the source of truth for format identity. This value only
/// survives on textures and render targets for the privileged bridge in
/// [`crate::privileged`] and for the Mock backend, whose native format *is* a
/// pixel config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelConfig {
    /// Sentinel: no known layout
    #[default]
    Unknown,
    Alpha8,
    Gray8,
    Rgb565,
    Rgba4444,
    Rgba8888,
    Bgra8888,
    Srgba8888,
    Sbgra8888,
    Rgba1010102,
    RgbaFloat,
    RgFloat,
    AlphaHalf,
    RgbaHalf,
}

impl PixelConfig {
    /// Every known (non-sentinel) config
    pub const KNOWN: [PixelConfig; 13] = [
        PixelConfig::Alpha8,
        PixelConfig::Gray8,
        PixelConfig::Rgb565,
        PixelConfig::Rgba4444,
        PixelConfig::Rgba8888,
        PixelConfig::Bgra8888,
        PixelConfig::Srgba8888,
        PixelConfig::Sbgra8888,
        PixelConfig::Rgba1010102,
        PixelConfig::RgbaFloat,
        PixelConfig::RgFloat,
        PixelConfig::AlphaHalf,
        PixelConfig::RgbaHalf,
    ];

    /// Returns true for the `Unknown` sentinel
    pub fn is_unknown(self) -> bool {
        self == PixelConfig::Unknown
    }
}
