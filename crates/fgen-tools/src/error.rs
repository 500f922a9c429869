//! Tool errors

use thiserror::Error;

/// Result type for tool operations
pub type ToolResult<T> = Result<T, ToolError>;

#[derive(Error, Debug)]
pub enum ToolError {
    /// A user-supplied function prefix produced an unusable pattern
    #[error("invalid function prefix '{prefix}': {source}")]
    InvalidPrefix {
        prefix: String,
        #[source]
        source: regex::Error,
    },
}
