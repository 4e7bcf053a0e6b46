//! Error types for the Galaxy3D backend surface layer
//!
//! Descriptor construction never fails and mismatched accessors return `None`,
//! so these errors only come out of the collaborator-side checks
//! (`validate()`, `ensure_backend()`).

use std::fmt;
use crate::backend::Backend;

/// Result type for backend surface operations
pub type Galaxy3dResult<T> = Result<T, Galaxy3dError>;

/// Backend surface errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Galaxy3dError {
    /// The descriptor was default-constructed or is otherwise unusable
    InvalidDescriptor(String),

    /// A native info struct does not satisfy its backend's preconditions
    InvalidInfo(String),

    /// The descriptor is tagged for a different backend than the caller expected
    BackendMismatch {
        /// Backend the caller asked for
        expected: Backend,
        /// Backend the descriptor carries (`None` for an invalid descriptor)
        actual: Option<Backend>,
    },
}

impl fmt::Display for Galaxy3dError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Galaxy3dError::InvalidDescriptor(msg) => write!(f, "Invalid descriptor: {}", msg),
            Galaxy3dError::InvalidInfo(msg) => write!(f, "Invalid backend info: {}", msg),
            Galaxy3dError::BackendMismatch { expected, actual: Some(actual) } => {
                write!(f, "Backend mismatch: expected {}, found {}", expected, actual)
            }
            Galaxy3dError::BackendMismatch { expected, actual: None } => {
                write!(f, "Backend mismatch: expected {}, found no backend", expected)
            }
        }
    }
}

impl std::error::Error for Galaxy3dError {}

/// Log an ERROR with file:line and return early with the given error
///
/// Two forms:
/// - `surface_bail!(source, Variant, "fmt", args..)` builds `Galaxy3dError::Variant(message)`
/// - `surface_bail!(source, error_expr)` returns a prebuilt error, logging its Display
///
/// # Example
///
/// ```ignore
/// surface_bail!("galaxy3d::gl", InvalidInfo, "texture id is 0");
/// ```
#[macro_export]
macro_rules! surface_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::surface_error!($source, "{}", message);
        return Err($crate::galaxy3d::Galaxy3dError::$variant(message));
    }};
    ($source:expr, $error:expr) => {{
        let error: $crate::galaxy3d::Galaxy3dError = $error;
        $crate::surface_error!($source, "{}", error);
        return Err(error);
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
