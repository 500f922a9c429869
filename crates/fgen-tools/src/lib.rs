//! Header maintenance utilities
//!
//! Small text tools used alongside the interface generator when maintaining a
//! C API:
//! - [`check_api`]: cross-checks a source file's definitions against its header
//! - [`extract_strings`]: turns schema tag and attribute names into C string constants
//! - [`file_to_string`]: wraps a file's text as a multi-line C string literal
//!
//! All of them work on text already in memory; reading and writing files is
//! left to the caller.

pub mod check_api;
pub mod error;
pub mod extract_strings;
pub mod file_to_string;

pub use check_api::{ApiChecker, ApiReport, Signature, DEFAULT_PREFIX};
pub use error::{ToolError, ToolResult};
pub use extract_strings::{constant_name, SchemaStrings, StringTableMode};
pub use file_to_string::wrap_as_string_literal;
