//! Error types for engine construction and runs.

use hf_project::DefinitionError;
use thiserror::Error;

/// Errors encountered while building or driving an engine.
///
/// Only fatal conditions live here. Recoverable build problems (an
/// unresolvable kind, a failing component constructor) are reported as
/// [`crate::BuildWarning`] values instead, and run-time volume deficits are
/// plain return values.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Definition error: {0}")]
    Definition(#[from] DefinitionError),

    #[error("Unknown component: {name}")]
    UnknownComponent { name: String },

    #[error("Component '{name}' is not a volume-holding reservoir")]
    NotAReservoir { name: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<hf_project::ValidationError> for SimError {
    fn from(e: hf_project::ValidationError) -> Self {
        SimError::Definition(DefinitionError::Validation(e))
    }
}
