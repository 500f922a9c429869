//! Embeds a text file in C source as one string literal spread over lines
//! with backslash continuations. Used for built-in schema and library text.

/// Escape each line and end it with a ` \` continuation.
pub fn wrap_as_string_literal(text: &str) -> String {
    let mut output = String::with_capacity(text.len() + text.len() / 8);
    for line in text.lines() {
        let escaped = line.trim_end().replace('\\', "\\\\").replace('"', "\\\"");
        output.push_str(&escaped);
        output.push_str(" \\\n");
    }
    output
}
