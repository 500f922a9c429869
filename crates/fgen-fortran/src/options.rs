//! Emitter settings

use crate::error::{EmitError, EmitResult};
use std::path::Path;

/// Default width of a `PUBLIC` export line
pub const DEFAULT_LINE_BUDGET: usize = 120;

/// Narrowest budget that still leaves room for the `PUBLIC` prefix, a
/// reasonable name and the continuation marker
pub const MIN_LINE_BUDGET: usize = 40;

/// Fortran identifiers are limited to 63 characters
const MAX_NAME_LEN: usize = 63;

/// Settings for one generated module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// `MODULE` name
    pub module_name: String,
    /// Header file name quoted in the banner comment
    pub source_name: String,
    /// Maximum width of export-list lines
    pub line_budget: usize,
    /// Generation time for the banner; `None` keeps the output reproducible
    pub stamp: Option<String>,
}

impl EmitOptions {
    pub fn new(module_name: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            source_name: source_name.into(),
            line_budget: DEFAULT_LINE_BUDGET,
            stamp: None,
        }
    }

    /// Options for a header path: `src/fieldml_api.h` becomes module
    /// `FIELDML_API` with banner source `fieldml_api.h`.
    pub fn for_header(path: &Path) -> Self {
        let source_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(module_name_from_stem(&stem), source_name)
    }

    pub fn with_line_budget(mut self, line_budget: usize) -> Self {
        self.line_budget = line_budget;
        self
    }

    pub fn with_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.stamp = Some(stamp.into());
        self
    }

    /// Check that the settings can produce a valid module
    pub fn validate(&self) -> EmitResult<()> {
        if !is_fortran_identifier(&self.module_name) {
            return Err(EmitError::InvalidModuleName {
                name: self.module_name.clone(),
            });
        }
        if self.line_budget < MIN_LINE_BUDGET {
            return Err(EmitError::LineBudgetTooSmall {
                budget: self.line_budget,
                minimum: MIN_LINE_BUDGET,
            });
        }
        Ok(())
    }
}

/// Upper-case a file stem and replace anything Fortran would reject
fn module_name_from_stem(stem: &str) -> String {
    let mut name: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();
    if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        name.insert(0, 'M');
    }
    name
}

fn is_fortran_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    name.len() <= MAX_NAME_LEN && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
