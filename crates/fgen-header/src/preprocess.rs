//! Comment stripping
//!
//! Splits each physical line into the segments that lie outside comments.
//! Block comments may span lines, so the tracker carries an "inside `/*`" flag
//! from one line to the next.
//!
//! The scan is a plain left-to-right search for comment markers: nested block
//! comments and markers inside string literals are not understood.

/// Tracks block-comment state across lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentTracker {
    in_block: bool,
}

impl CommentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the previous line ended inside a `/* ... */` span
    pub fn in_block_comment(&self) -> bool {
        self.in_block
    }

    /// Return the active (uncommented) segments of `line`, left to right.
    ///
    /// Segments that are blank are not returned. A segment ends wherever a
    /// block comment starts, so text on both sides of `/* ... */` on one line
    /// comes back as two segments.
    pub fn active_segments<'a>(&mut self, line: &'a str) -> Vec<&'a str> {
        let mut segments = Vec::new();
        let mut rest = line;

        loop {
            if self.in_block {
                match rest.find("*/") {
                    Some(end) => {
                        self.in_block = false;
                        rest = &rest[end + 2..];
                    }
                    None => break,
                }
                continue;
            }

            let line_comment = rest.find("//");
            let block_start = rest.find("/*");

            match (line_comment, block_start) {
                (Some(lc), Some(bs)) if bs < lc => {
                    push_segment(&mut segments, &rest[..bs]);
                    self.in_block = true;
                    rest = &rest[bs + 2..];
                }
                (Some(lc), _) => {
                    push_segment(&mut segments, &rest[..lc]);
                    break;
                }
                (None, Some(bs)) => {
                    push_segment(&mut segments, &rest[..bs]);
                    self.in_block = true;
                    rest = &rest[bs + 2..];
                }
                (None, None) => {
                    push_segment(&mut segments, rest);
                    break;
                }
            }
        }

        segments
    }
}

fn push_segment<'a>(segments: &mut Vec<&'a str>, text: &'a str) {
    if !text.trim().is_empty() {
        segments.push(text);
    }
}
