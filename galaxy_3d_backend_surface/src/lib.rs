/*!
# Galaxy 3D Backend Surface

Backend-agnostic descriptors for GPU resources created and owned by a native
graphics API (OpenGL, Vulkan, or the Mock test backend).

Each descriptor is a small `Copy` value that carries exactly one backend's
native info struct. The backend tag is derived from the payload, so the two
can never disagree, and asking for another backend's payload returns `None`.

## Architecture

- **BackendFormat**: pixel format in one backend's native terms
- **BackendTexture**: externally created texture (size, mip flag, native info)
- **BackendRenderTarget**: externally created render target (size, samples, stencil, native info)
- **privileged**: narrow bridge to the legacy `PixelConfig` for a fixed set of collaborators

Backends are selected at build time with the `gl` and `vulkan` features
(both enabled by default). The Mock backend is always available.
*/

// Internal modules
mod error;
mod backend;
mod pixel_config;
mod format;
mod texture;
mod render_target;
pub mod log;
pub mod mock;
pub mod privileged;

#[cfg(feature = "gl")]
pub mod gl;
#[cfg(feature = "vulkan")]
pub mod vk;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Galaxy3dError, Galaxy3dResult};

    // Backend tag and shared enums
    pub use crate::backend::{Backend, MipMapped};
    pub use crate::pixel_config::PixelConfig;

    // Descriptors
    pub use crate::format::BackendFormat;
    pub use crate::texture::BackendTexture;
    pub use crate::render_target::BackendRenderTarget;

    // Logging sub-module (types and configuration, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_min_severity, min_severity,
        };
    }

    // Native info structs per backend
    #[cfg(feature = "gl")]
    pub mod gl {
        pub use crate::gl::*;
    }

    #[cfg(feature = "vulkan")]
    pub mod vk {
        pub use crate::vk::*;
    }

    pub mod mock {
        pub use crate::mock::*;
    }

    // Legacy config bridge
    pub mod privileged {
        pub use crate::privileged::*;
    }
}

// Re-export the Vulkan bindings the vk info structs are built on
#[cfg(feature = "vulkan")]
pub use ash;
