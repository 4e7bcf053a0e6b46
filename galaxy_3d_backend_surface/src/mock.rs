/// Mock backend info structs (tests, no GPU)

use crate::error::Galaxy3dResult;
use crate::pixel_config::PixelConfig;
use crate::surface_bail;

/// Texture owned by the mock backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MockTextureInfo {
    /// Pixel layout (the mock backend's native format)
    pub config: PixelConfig,
    /// Mock object id
    pub id: i32,
}

impl MockTextureInfo {
    /// Check that the mock texture names a known pixel layout
    pub fn validate(&self) -> Galaxy3dResult<()> {
        if self.config.is_unknown() {
            surface_bail!("galaxy3d::mock", InvalidInfo,
                "mock texture {} has an unknown pixel config", self.id);
        }
        Ok(())
    }
}

/// Render target owned by the mock backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MockRenderTargetInfo {
    /// Pixel layout (the mock backend's native format)
    pub config: PixelConfig,
    /// Mock object id
    pub id: i32,
}

impl MockRenderTargetInfo {
    /// Check that the mock render target names a known pixel layout
    pub fn validate(&self) -> Galaxy3dResult<()> {
        if self.config.is_unknown() {
            surface_bail!("galaxy3d::mock", InvalidInfo,
                "mock render target {} has an unknown pixel config", self.id);
        }
        Ok(())
    }
}
