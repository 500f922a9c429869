//! Parameter list tokenizer
//!
//! The grammar is deliberately small: a parameter list is a sequence of words,
//! pointer stars, `const` qualifiers and commas. Whitespace separates words but
//! carries no meaning, so `char *name`, `char* name` and `char * name` all
//! produce the same tokens.

use logos::Logos;
use smol_str::SmolStr;

/// Tokens of a parameter list
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum ParamToken {
    #[token("const")]
    Const,

    #[token("*")]
    Star,

    #[token(",")]
    Comma,

    /// Any other run of characters: a type name, a parameter name, or
    /// something exotic like `values[]` that is passed through untouched
    #[regex(r"[^\s,*]+", |lex| SmolStr::new(lex.slice()))]
    Word(SmolStr),
}

/// Tokenize parameter text.
///
/// Every non-whitespace character belongs to some token, so this never fails.
pub fn tokenize(text: &str) -> Vec<ParamToken> {
    ParamToken::lexer(text).filter_map(Result::ok).collect()
}
