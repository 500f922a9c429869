//! Header scanning errors
//!
//! The scanner is lenient: malformed lines, excluded signatures and unterminated
//! enum blocks are skipped, not reported. The only failure is not being able to
//! read the header at all.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for header scanning operations
pub type HeaderResult<T> = Result<T, HeaderError>;

/// Header scanning error types
#[derive(Error, Debug)]
pub enum HeaderError {
    /// The header file could not be opened or read
    #[error("failed to read header '{}': {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}
