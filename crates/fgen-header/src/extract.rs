//! Entity extractors
//!
//! One parser per construct kind. Each takes the text the classifier routed to
//! it and returns what it found; none of them touch session state directly
//! except the enum parser, which advances the caller's value counter.

use crate::model::{Constant, EnumMember, FunctionDecl, Param};
use crate::token::{tokenize, ParamToken};
use smol_str::SmolStr;

/// Return types with no by-value representation on the Fortran side.
/// Functions declared with them are dropped entirely.
pub const EXCLUDED_RETURN_PREFIXES: &[&str] = &[
    "char*",
    "char *",
    "const char *",
    "int*",
    "int *",
    "const int *",
];

/// Whether a declaration line starts with one of the excluded return types
pub fn has_excluded_return(line: &str) -> bool {
    EXCLUDED_RETURN_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

/// Parse a single-line function declaration such as
/// `FmlErrorNumber Fieldml_SetDebug( FmlSessionHandle handle, int debug );`.
///
/// Returns `None` for excluded return types and for lines that do not have the
/// `<type> <name>( ... )` shape.
pub fn parse_function(line: &str) -> Option<FunctionDecl> {
    if has_excluded_return(line) {
        tracing::debug!(line, "skipping function with pointer return type");
        return None;
    }

    let name_start = line.find(' ')?;
    let open = line.find('(')?;
    let close = line.find(')')?;
    if open <= name_start {
        tracing::trace!(line, "no return type before the parameter list");
        return None;
    }

    let name = line[name_start + 1..open].trim();
    if name.is_empty() {
        return None;
    }

    let inner = if close > open { &line[open + 1..close] } else { "" };

    Some(FunctionDecl {
        name: SmolStr::new(name),
        params: parse_params(drop_spacing_artifact(inner)),
    })
}

/// The header writes parameter lists as `( a, b )`; the space before `)` is
/// layout, not content.
fn drop_spacing_artifact(inner: &str) -> &str {
    let mut chars = inner.chars();
    match chars.next_back() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => inner,
    }
}

/// Pair up type and name tokens of a parameter list.
///
/// Words alternate between type and name. A `*` extends the type waiting for
/// its name, `const` is dropped, and a type left without a name (as in
/// `( void )`) produces no parameter.
pub fn parse_params(text: &str) -> Vec<Param> {
    let mut params = Vec::new();
    let mut pending_type: Option<String> = None;

    for token in tokenize(text) {
        match token {
            ParamToken::Const | ParamToken::Comma => {}
            ParamToken::Star => {
                if let Some(ty) = pending_type.as_mut() {
                    ty.push('*');
                }
            }
            ParamToken::Word(word) => match pending_type.take() {
                None => pending_type = Some(word.to_string()),
                Some(ty) => params.push(Param::new(ty, word)),
            },
        }
    }

    params
}

/// Parse the text after `#define `: the name up to the first whitespace and
/// the rest as the literal value.
///
/// Bare guards such as `#define H_FIELDML_API` have no value and are ignored.
pub fn parse_define(text: &str) -> Option<Constant> {
    let split = text.find(char::is_whitespace)?;
    let name = text[..split].trim();
    let value = text[split..].trim();
    if name.is_empty() || value.is_empty() {
        return None;
    }

    Some(Constant {
        name: SmolStr::new(name),
        value: value.to_string(),
    })
}

/// Parse a fragment of an enum body, numbering members from `next_value`.
///
/// The counter advances for every comma-delimited slot, blank or not, so
/// `A, , B` numbers `B` as 2. The slot after the last comma only counts when
/// it holds a name, which keeps a trailing comma from consuming a value.
pub fn parse_enum_fragment(fragment: &str, next_value: &mut i64) -> Vec<EnumMember> {
    let mut members = Vec::new();
    let mut slots = fragment.split(',').peekable();

    while let Some(slot) = slots.next() {
        let name = slot.trim();
        let is_last = slots.peek().is_none();

        if !name.is_empty() {
            members.push(EnumMember {
                name: SmolStr::new(name),
                value: *next_value,
            });
        }
        if !is_last || !name.is_empty() {
            *next_value += 1;
        }
    }

    members
}
