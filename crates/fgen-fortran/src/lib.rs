//! Fortran interface generation for fgen.
//!
//! Turns the functions, defines and enums scanned from a C header into a
//! Fortran 2003 module that calls the C library through `ISO_C_BINDING`.
//!
//! # Architecture
//!
//! ```text
//! ParsedHeader → [ModuleGenerator] → declarations → INTERFACE block → PUBLIC lists
//!                        ↑
//!                 [FortranArg] per parameter
//! ```
//!
//! # Example
//!
//! ```
//! use fgen_fortran::{generate_module, EmitOptions};
//! use fgen_header::parse_header;
//!
//! let header = parse_header("int Widget_Count( int kind );");
//! let options = EmitOptions::new("WIDGET_API", "widget_api.h");
//! let module = generate_module(&header, &options).unwrap();
//! assert!(module.contains("BIND(C,NAME=\"Widget_Count\")"));
//! ```

pub mod emit;
pub mod error;
pub mod options;
pub mod types;

pub use emit::{generate_module, wrap_public, ModuleGenerator};
pub use error::{EmitError, EmitResult};
pub use options::{EmitOptions, DEFAULT_LINE_BUDGET, MIN_LINE_BUDGET};
pub use types::{FortranArg, Passing};
