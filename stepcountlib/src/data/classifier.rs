//! Line classification state machine.
//!
//! Lines are scanned one character position at a time while tracking whether
//! the scanner is inside a block comment or a literal. That state is carried
//! from one line to the next as an explicit [`ScanState`] value, so a single
//! line can be classified in isolation with [`scan_line`].
//!
//! A line is [`LineCategory::Executable`] as soon as it holds any code, even if
//! it also holds a comment. Literal contents count as code.

use serde::{Deserialize, Serialize};

use crate::data::pattern::{CommentPatternMatch, Literal};

/// Category of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineCategory {
    /// Whitespace only
    Blank,
    /// Comment content only
    Comment,
    /// At least one code token (literals included)
    Executable,
}

/// Scanner state carried across line boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    /// Plain code
    #[default]
    Normal,
    /// Inside a block comment; `depth` counts nested openers
    InBlockComment { depth: usize },
    /// Inside a literal that has not been closed yet
    InString(&'static Literal),
}

/// Tracks what kind of content has been seen on the current line.
#[derive(Default, Debug, Copy, Clone)]
struct LineContext {
    has_code: bool,
    has_comment: bool,
}

impl LineContext {
    fn category(&self) -> LineCategory {
        if self.has_code {
            LineCategory::Executable
        } else if self.has_comment {
            LineCategory::Comment
        } else {
            LineCategory::Blank
        }
    }
}

fn char_len_at(line: &str, pos: usize) -> usize {
    line[pos..].chars().next().map_or(1, char::len_utf8)
}

/// Classify one line given the state left by the previous line.
///
/// Returns the line's category and the state the next line starts in.
///
/// # Example
///
/// ```rust
/// use stepcountlib::{scan_line, Language, LineCategory, ScanState};
///
/// let (category, state) = scan_line(ScanState::Normal, "/* start", &Language::Java);
/// assert_eq!(category, LineCategory::Comment);
/// assert_eq!(state, ScanState::InBlockComment { depth: 1 });
///
/// let (category, state) = scan_line(state, "still in comment */ code();", &Language::Java);
/// assert_eq!(category, LineCategory::Executable);
/// assert_eq!(state, ScanState::Normal);
/// ```
pub fn scan_line<P>(state: ScanState, line: &str, pattern: &P) -> (LineCategory, ScanState)
where
    P: CommentPatternMatch + ?Sized,
{
    if state == ScanState::Normal && line.trim().is_empty() {
        return (LineCategory::Blank, state);
    }

    let mut ctx = LineContext {
        has_code: matches!(state, ScanState::InString(_)),
        has_comment: matches!(state, ScanState::InBlockComment { .. }),
    };
    let mut state = state;
    let mut pos = 0;

    while pos < line.len() {
        match state {
            ScanState::InString(literal) => {
                if pattern.is_escape(line, pos, literal) {
                    pos += char_len_at(line, pos);
                    pos += char_len_at(line, pos);
                } else if line[pos..].starts_with(literal.close) {
                    pos += literal.close.len();
                    state = ScanState::Normal;
                } else {
                    pos += char_len_at(line, pos);
                }
            }
            ScanState::InBlockComment { depth } => {
                if pattern.block_comment_end(line, pos) {
                    pos += pattern.block_comment_close_len();
                    state = match depth {
                        0 | 1 => ScanState::Normal,
                        _ => ScanState::InBlockComment { depth: depth - 1 },
                    };
                } else if pattern.block_comments_nest() && pattern.block_comment_start(line, pos)
                {
                    pos += pattern.block_comment_open_len();
                    state = ScanState::InBlockComment { depth: depth + 1 };
                } else {
                    pos += char_len_at(line, pos);
                }
            }
            ScanState::Normal => {
                if pattern.line_comment_start(line, pos) {
                    ctx.has_comment = true;
                    break;
                } else if pattern.block_comment_start(line, pos) {
                    ctx.has_comment = true;
                    pos += pattern.block_comment_open_len();
                    state = ScanState::InBlockComment { depth: 1 };
                } else if let Some(literal) = pattern.string_delimiter(line, pos) {
                    ctx.has_code = true;
                    pos += literal.open.len();
                    state = ScanState::InString(literal);
                } else {
                    let len = char_len_at(line, pos);
                    if !line[pos..pos + len].trim().is_empty() {
                        ctx.has_code = true;
                    }
                    pos += len;
                }
            }
        }
    }

    if let ScanState::InString(literal) = state {
        if !literal.multiline {
            state = ScanState::Normal;
        }
    }

    (ctx.category(), state)
}

/// Classifies the lines of one file in order.
///
/// A classifier starts in [`ScanState::Normal`] and must not be reused for
/// another file.
pub struct LineClassifier<'a, P: CommentPatternMatch + ?Sized> {
    pattern: &'a P,
    state: ScanState,
}

impl<'a, P: CommentPatternMatch + ?Sized> LineClassifier<'a, P> {
    /// Create a classifier for one file written in `pattern`'s language.
    pub fn new(pattern: &'a P) -> Self {
        Self {
            pattern,
            state: ScanState::Normal,
        }
    }

    /// Classify the next line of the file.
    pub fn classify(&mut self, line: &str) -> LineCategory {
        let (category, next) = scan_line(self.state, line, self.pattern);
        self.state = next;
        category
    }

    /// State the next line will start in.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Finish the file, returning the final state.
    ///
    /// A block comment or multi-line literal still open at end of file is
    /// simply left open; it never turns into an error.
    pub fn finish(self) -> ScanState {
        self.state
    }
}
