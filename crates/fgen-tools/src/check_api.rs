//! API consistency checking
//!
//! Pairs the public functions defined in a C source file with the ones
//! declared in its header, by full signature first and by name second.
//! Anything left over on either side, and any pair whose signatures differ,
//! is reported.
//!
//! Only single-line signatures whose function name starts with the API
//! prefix, followed by at least two more characters, are considered.
//! Definitions are lines that start in column 0 and do
//! not end in `;`; declarations are lines that end in `);`.

use crate::error::{ToolError, ToolResult};
use indexmap::IndexSet;
use regex::Regex;

/// Function prefix of the FieldML API
pub const DEFAULT_PREFIX: &str = "Fieldml_";

/// A function signature as written, and the function name inside it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    /// Everything from the return type to the closing `)`
    pub text: String,
    pub name: String,
}

/// Outcome of a consistency check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiReport {
    /// Names declared and defined with different signatures
    pub mismatches: Vec<String>,
    /// Names defined in the source but not declared in the header
    pub undeclared: Vec<String>,
    /// Names declared in the header but not defined in the source
    pub undefined: Vec<String>,
}

impl ApiReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.undeclared.is_empty() && self.undefined.is_empty()
    }

    /// Human-readable report, one finding per line
    pub fn render(&self, source_label: &str, header_label: &str) -> String {
        let mut output = format!("Checking {} against {}.\n", source_label, header_label);
        for name in &self.mismatches {
            output.push_str(&format!("Mismatch for \"{}\"\n", name));
        }
        for name in &self.undeclared {
            output.push_str(&format!("Definition without declaration: \"{}\"\n", name));
        }
        for name in &self.undefined {
            output.push_str(&format!("Declaration without definition: \"{}\"\n", name));
        }
        output.push_str("Done.\n");
        output
    }
}

/// Matches declarations and definitions for one function prefix
#[derive(Debug, Clone)]
pub struct ApiChecker {
    declaration: Regex,
    definition: Regex,
}

impl ApiChecker {
    pub fn new(prefix: &str) -> ToolResult<Self> {
        let prefix_pattern = regex::escape(prefix);
        let build = |pattern: String| {
            Regex::new(&pattern).map_err(|source| ToolError::InvalidPrefix {
                prefix: prefix.to_string(),
                source,
            })
        };

        Ok(Self {
            declaration: build(format!(r"^(.* ({}[^(].+)\(.*\));$", prefix_pattern))?,
            definition: build(format!(r"^([^ ].* ({}[^(].+)\(.*\))$", prefix_pattern))?,
        })
    }

    /// Declarations in header order
    pub fn declarations(&self, header: &str) -> Vec<Signature> {
        collect_signatures(&self.declaration, header).collect()
    }

    /// Definitions in source order, each distinct signature once
    pub fn definitions(&self, source: &str) -> Vec<Signature> {
        collect_signatures(&self.definition, source)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Compare a source file against its header
    pub fn check(&self, source: &str, header: &str) -> ApiReport {
        let mut definitions = self.definitions(source);
        let declarations = self.declarations(header);
        tracing::debug!(
            definitions = definitions.len(),
            declarations = declarations.len(),
            "checking API"
        );

        let mut report = ApiReport::default();
        let mut undefined = Vec::new();

        for declaration in declarations.into_iter().rev() {
            if let Some(pos) = definitions.iter().position(|d| *d == declaration) {
                definitions.remove(pos);
            } else if let Some(pos) = definitions.iter().position(|d| d.name == declaration.name) {
                definitions.remove(pos);
                report.mismatches.push(declaration.name);
            } else {
                undefined.push(declaration.name);
            }
        }

        undefined.reverse();
        report.undefined = undefined;
        report.undeclared = definitions.into_iter().map(|d| d.name).collect();
        report
    }
}

fn collect_signatures<'a>(pattern: &'a Regex, text: &'a str) -> impl Iterator<Item = Signature> + 'a {
    text.lines().filter_map(move |line| {
        let caps = pattern.captures(line.trim_end())?;
        Some(Signature {
            text: caps[1].to_string(),
            name: caps[2].to_string(),
        })
    })
}
