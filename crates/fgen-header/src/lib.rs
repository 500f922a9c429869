//! C Header Scanner for fgen
//!
//! Extracts the three kinds of items the Fortran interface generator exposes
//! from a C header, without a full C front end:
//! - Single-line function declarations (terminated by `);`)
//! - `#define NAME VALUE` constants
//! - `enum { A, B, C };` blocks, possibly spread over several lines
//!
//! ## Design Philosophy
//!
//! The scanner recognizes the restricted declaration style of a hand-maintained
//! API header. Anything it does not recognize is skipped rather than reported,
//! so a header can carry arbitrary documentation, includes and guards.
//!
//! ```
//! use fgen_header::parse_header;
//!
//! let header = parse_header("#define MAX_LEN 256\nenum Colour { RED, GREEN, BLUE };\n");
//! assert_eq!(header.defines[0].value, "256");
//! assert_eq!(header.enums[0].members[2].value, 2);
//! ```

pub mod error;
pub mod extract;
pub mod model;
pub mod preprocess;
pub mod session;
pub mod token;

use std::fs;
use std::path::Path;

pub use error::{HeaderError, HeaderResult};
pub use model::{Constant, EnumGroup, EnumMember, FunctionDecl, Param, ParsedHeader};
pub use preprocess::CommentTracker;
pub use session::{HeaderSession, ParseState};
pub use token::ParamToken;

/// Scan header text and collect its functions, defines and enums.
pub fn parse_header(text: &str) -> ParsedHeader {
    let mut session = HeaderSession::new();
    for line in text.lines() {
        session.feed_line(line);
    }
    session.finish()
}

/// Read and scan a header file.
///
/// Only file access can fail; content the scanner does not understand is skipped.
pub fn parse_header_file(path: impl AsRef<Path>) -> HeaderResult<ParsedHeader> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| HeaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "scanning header");
    Ok(parse_header(&text))
}
