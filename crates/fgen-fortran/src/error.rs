//! Emitter errors

use thiserror::Error;

/// Result type for emitter operations
pub type EmitResult<T> = Result<T, EmitError>;

/// Settings the emitter refuses to work with
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// The module name is not a valid Fortran identifier
    #[error("invalid Fortran module name '{name}'")]
    InvalidModuleName { name: String },

    /// Export lines cannot be wrapped this narrowly
    #[error("line budget {budget} is too small (minimum {minimum})")]
    LineBudgetTooSmall { budget: usize, minimum: usize },
}
