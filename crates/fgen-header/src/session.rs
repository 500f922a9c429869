//! Declaration classifier
//!
//! A small state machine that decides what each active segment of a line is:
//! a function declaration, a `#define`, or part of an `enum` block. Enum
//! blocks may be spread over lines, so the state survives from one line to the
//! next:
//!
//! ```text
//! InHeader --"enum"--> InStartEnum --"{"--> InEnums --"}"--> InEndEnum --";"--> InHeader
//! ```
//!
//! When a transition happens part way through a segment, the rest of the
//! segment is dispatched again under the new state, so `enum A { X, Y };`
//! runs through every state on a single line.

use crate::extract::{parse_define, parse_enum_fragment, parse_function};
use crate::model::{Constant, EnumGroup, FunctionDecl, ParsedHeader};
use crate::preprocess::CommentTracker;

/// Where the classifier is relative to an enum block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    /// Top-level header text
    #[default]
    InHeader,
    /// Saw `enum`, waiting for `{`
    InStartEnum,
    /// Inside the member list
    InEnums,
    /// Saw `}`, waiting for the closing `;`
    InEndEnum,
}

const DEFINE_PREFIX: &str = "#define ";

/// State for scanning one header
///
/// Feed it lines in order, then call [`HeaderSession::finish`] to get the
/// collected items. Sessions are independent; nothing is shared between runs.
#[derive(Debug, Default)]
pub struct HeaderSession {
    state: ParseState,
    comments: CommentTracker,
    enum_counter: i64,
    functions: Vec<FunctionDecl>,
    defines: Vec<Constant>,
    enums: Vec<EnumGroup>,
}

impl HeaderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current classifier state
    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Scan one physical line of the header.
    pub fn feed_line(&mut self, line: &str) {
        for segment in self.comments.active_segments(line) {
            self.classify(segment);
        }
    }

    /// Dispatch one active segment, re-dispatching the remainder after each
    /// mid-segment transition until the segment is used up.
    fn classify(&mut self, segment: &str) {
        let mut rest = segment;

        loop {
            let text = rest.trim();
            if text.is_empty() {
                return;
            }

            match self.state {
                ParseState::InHeader => {
                    if text.contains(");") {
                        match parse_function(text) {
                            Some(function) => {
                                tracing::trace!(name = %function.name, params = function.params.len(), "function");
                                self.functions.push(function);
                            }
                            None => tracing::debug!(line = text, "function declaration not exported"),
                        }
                        return;
                    }

                    if let Some(body) = text.strip_prefix(DEFINE_PREFIX) {
                        if let Some(constant) = parse_define(body) {
                            tracing::trace!(name = %constant.name, "define");
                            self.defines.push(constant);
                        }
                        return;
                    }

                    if text.starts_with("enum") {
                        self.enum_counter = 0;
                        self.enums.push(EnumGroup::default());
                        self.transition(ParseState::InStartEnum);
                        rest = text;
                        continue;
                    }

                    tracing::trace!(line = text, "ignored");
                    return;
                }
                ParseState::InStartEnum => match text.find('{') {
                    Some(pos) => {
                        self.transition(ParseState::InEnums);
                        rest = &text[pos + 1..];
                    }
                    None => return,
                },
                ParseState::InEnums => match text.find('}') {
                    Some(pos) => {
                        self.push_enum_members(&text[..pos]);
                        self.transition(ParseState::InEndEnum);
                        rest = &text[pos + 1..];
                    }
                    None => {
                        self.push_enum_members(text);
                        return;
                    }
                },
                ParseState::InEndEnum => {
                    // Anything after the terminating `;` is dropped.
                    if text.contains(';') {
                        self.transition(ParseState::InHeader);
                    }
                    return;
                }
            }
        }
    }

    fn transition(&mut self, next: ParseState) {
        tracing::trace!(from = ?self.state, to = ?next, "state transition");
        self.state = next;
    }

    fn push_enum_members(&mut self, fragment: &str) {
        let members = parse_enum_fragment(fragment, &mut self.enum_counter);
        if let Some(group) = self.enums.last_mut() {
            group.members.extend(members);
        }
    }

    /// End the scan and hand over everything collected.
    ///
    /// An enum block still open at end of input is discarded.
    pub fn finish(mut self) -> ParsedHeader {
        if self.state != ParseState::InHeader {
            if let Some(group) = self.enums.pop() {
                tracing::debug!(
                    state = ?self.state,
                    members = group.members.len(),
                    "dropping unterminated enum block"
                );
            }
        }

        tracing::info!(
            functions = self.functions.len(),
            defines = self.defines.len(),
            enums = self.enums.len(),
            "header scanned"
        );

        ParsedHeader {
            functions: self.functions,
            defines: self.defines,
            enums: self.enums,
        }
    }
}
