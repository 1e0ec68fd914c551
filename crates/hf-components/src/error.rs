//! Error types for component construction and operations.

use hf_core::ParamError;
use thiserror::Error;

/// Errors that can occur while building or operating a component.
///
/// Construction failures are recoverable at the build boundary: the loader
/// converts them into build warnings and keeps going with the remaining
/// components.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("{0}")]
    Param(#[from] ParamError),

    #[error("Invalid parameter '{key}': {reason}")]
    InvalidParam { key: String, reason: String },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ComponentError::InvalidParam {
            key: "vol_l".to_string(),
            reason: "must be non-negative and finite".to_string(),
        };
        assert!(err.to_string().contains("vol_l"));
    }

    #[test]
    fn param_error_converts() {
        let err: ComponentError = ParamError::Missing {
            key: "u_vol_l".to_string(),
        }
        .into();
        assert!(err.to_string().contains("u_vol_l"));
    }
}
