//! Schema string-table extraction
//!
//! Pulls element and attribute names out of an XSD and prints C declarations
//! (for the header) or definitions (for the source file) of one string
//! constant per name, e.g. `ensembleType` becomes `ENSEMBLE_TYPE_TAG`.

use indexmap::IndexSet;

const ELEMENT_MARKER: &str = "xs:element name=\"";
const ATTRIBUTE_MARKER: &str = "xs:attribute name=\"";

/// Definitions are padded to this column before the initializer
const DEFINITION_COLUMN: usize = 56;

/// Which half of the string table to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringTableMode {
    /// `extern` declarations
    Header,
    /// Definitions with initializers
    Source,
}

/// Distinct element and attribute names, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaStrings {
    pub elements: IndexSet<String>,
    pub attributes: IndexSet<String>,
}

impl SchemaStrings {
    /// Scan schema text line by line
    pub fn collect(schema: &str) -> Self {
        let mut strings = Self::default();
        for line in schema.lines() {
            if let Some(name) = quoted_after(line, ELEMENT_MARKER) {
                strings.elements.insert(name.to_string());
            }
            if let Some(name) = quoted_after(line, ATTRIBUTE_MARKER) {
                strings.attributes.insert(name.to_string());
            }
        }
        tracing::debug!(
            elements = strings.elements.len(),
            attributes = strings.attributes.len(),
            "collected schema strings"
        );
        strings
    }

    /// Print the string table. The most recently discovered name comes first
    /// in each section.
    pub fn render(&self, mode: StringTableMode) -> String {
        let mut output = String::new();
        for entry in self.elements.iter().rev() {
            output.push_str(&render_entry(entry, "_TAG", mode));
        }
        output.push_str("\n\n");
        for entry in self.attributes.iter().rev() {
            output.push_str(&render_entry(entry, "_ATTRIB", mode));
        }
        output.push('\n');
        output
    }
}

fn quoted_after<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let start = line.find(marker)? + marker.len();
    let len = line[start..].find('"')?;
    Some(&line[start..start + len])
}

fn render_entry(entry: &str, suffix: &str, mode: StringTableMode) -> String {
    let declaration = format!("const xmlChar * const {}{}", constant_name(entry), suffix);
    match mode {
        StringTableMode::Header => format!("extern {};\n", declaration),
        StringTableMode::Source => format!(
            "{:<width$}= (const xmlChar* const)\"{}\";\n",
            declaration,
            entry,
            width = DEFINITION_COLUMN
        ),
    }
}

/// Upper-snake-case a schema name.
///
/// An underscore goes before any character that is not lower case when the
/// character after it is not upper case, so `ensembleType` gives
/// `ENSEMBLE_TYPE` while an acronym such as `DOF` stays together. Characters that
/// cannot appear in a C identifier become underscores.
pub fn constant_name(entry: &str) -> String {
    let chars: Vec<char> = entry.chars().collect();
    let mut name = String::with_capacity(entry.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !(c.is_alphanumeric() || c == '_') {
            name.push('_');
            continue;
        }
        let starts_word = i > 0
            && !c.is_lowercase()
            && chars.get(i + 1).is_some_and(|next| !next.is_uppercase());
        if starts_word {
            name.push('_');
        }
        name.extend(c.to_uppercase());
    }

    name
}
