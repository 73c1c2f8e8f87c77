//! Comment pattern matching for the supported languages.
//!
//! Each language is described by a static [`Delimiters`] table: its line comment
//! token, its block comment pair, whether block comments nest, and the literal
//! forms whose contents must not be mistaken for comments. The
//! [`CommentPatternMatch`] trait turns such a table into the scanning
//! primitives used by the line classifier.
//!
//! The set of languages is closed. Adding one means adding a [`Language`]
//! variant and its table; the classifier does not change.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StepCountError;
use crate::Result;

/// One literal form of a language (string, char, raw or text block).
#[derive(Debug, PartialEq, Eq)]
pub struct Literal {
    /// Opening token, e.g. `"` or `@"`
    pub open: &'static str,
    /// Closing token
    pub close: &'static str,
    /// Escape character; the character following it never closes the literal
    pub escape: Option<char>,
    /// Whether an unterminated literal continues on the next line.
    /// Single-line literals are closed at end of line.
    pub multiline: bool,
}

impl Literal {
    /// A single-line literal delimited by `quote` with backslash escapes.
    pub const fn quoted(quote: &'static str) -> Self {
        Self {
            open: quote,
            close: quote,
            escape: Some('\\'),
            multiline: false,
        }
    }

    /// A literal that may span lines.
    pub const fn multiline(
        open: &'static str,
        close: &'static str,
        escape: Option<char>,
    ) -> Self {
        Self {
            open,
            close,
            escape,
            multiline: true,
        }
    }
}

/// Delimiter table for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct Delimiters {
    /// Line comment token
    pub line_comment: Option<&'static str>,
    /// Block comment open/close tokens
    pub block_comment: Option<(&'static str, &'static str)>,
    /// Whether a block comment opener inside a block comment nests
    pub nested_block_comments: bool,
    /// Literal forms, longest opener first
    pub literals: &'static [Literal],
}

const DOUBLE_QUOTED: Literal = Literal::quoted("\"");
const SINGLE_QUOTED: Literal = Literal::quoted("'");

static JAVA: Delimiters = Delimiters {
    line_comment: Some("//"),
    block_comment: Some(("/*", "*/")),
    nested_block_comments: false,
    literals: &[
        Literal::multiline("\"\"\"", "\"\"\"", Some('\\')),
        DOUBLE_QUOTED,
        SINGLE_QUOTED,
    ],
};

static CSHARP: Delimiters = Delimiters {
    line_comment: Some("//"),
    block_comment: Some(("/*", "*/")),
    nested_block_comments: false,
    literals: &[
        Literal::multiline("\"\"\"", "\"\"\"", None),
        // `$@"` needs no entry: `$` scans as code before `@"` opens
        Literal::multiline("@$\"", "\"", Some('"')),
        Literal::multiline("@\"", "\"", Some('"')),
        DOUBLE_QUOTED,
        SINGLE_QUOTED,
    ],
};

static C_FAMILY: Delimiters = Delimiters {
    line_comment: Some("//"),
    block_comment: Some(("/*", "*/")),
    nested_block_comments: false,
    literals: &[DOUBLE_QUOTED, SINGLE_QUOTED],
};

static JAVASCRIPT: Delimiters = Delimiters {
    line_comment: Some("//"),
    block_comment: Some(("/*", "*/")),
    nested_block_comments: false,
    literals: &[
        Literal::multiline("`", "`", Some('\\')),
        DOUBLE_QUOTED,
        SINGLE_QUOTED,
    ],
};

static GO: Delimiters = Delimiters {
    line_comment: Some("//"),
    block_comment: Some(("/*", "*/")),
    nested_block_comments: false,
    literals: &[
        Literal::multiline("`", "`", None),
        DOUBLE_QUOTED,
        SINGLE_QUOTED,
    ],
};

static KOTLIN: Delimiters = Delimiters {
    line_comment: Some("//"),
    block_comment: Some(("/*", "*/")),
    nested_block_comments: true,
    literals: &[
        Literal::multiline("\"\"\"", "\"\"\"", None),
        DOUBLE_QUOTED,
        SINGLE_QUOTED,
    ],
};

fn starts_at(text: &str, offset: usize, token: &str) -> bool {
    text.get(offset..)
        .is_some_and(|rest| rest.starts_with(token))
}

/// Scanning primitives over a language's delimiter table.
///
/// Offsets are byte offsets into `text` and must lie on a char boundary;
/// an offset past the end never matches.
pub trait CommentPatternMatch {
    /// The delimiter table backing this matcher.
    fn delimiters(&self) -> &'static Delimiters;

    /// True if the line comment token begins at `offset`.
    fn line_comment_start(&self, text: &str, offset: usize) -> bool {
        self.delimiters()
            .line_comment
            .is_some_and(|token| starts_at(text, offset, token))
    }

    /// True if a block comment opener begins at `offset`.
    fn block_comment_start(&self, text: &str, offset: usize) -> bool {
        self.delimiters()
            .block_comment
            .is_some_and(|(open, _)| starts_at(text, offset, open))
    }

    /// True if a block comment closer begins at `offset`.
    fn block_comment_end(&self, text: &str, offset: usize) -> bool {
        self.delimiters()
            .block_comment
            .is_some_and(|(_, close)| starts_at(text, offset, close))
    }

    fn block_comment_open_len(&self) -> usize {
        self.delimiters()
            .block_comment
            .map_or(0, |(open, _)| open.len())
    }

    fn block_comment_close_len(&self) -> usize {
        self.delimiters()
            .block_comment
            .map_or(0, |(_, close)| close.len())
    }

    /// Whether block comments nest.
    fn block_comments_nest(&self) -> bool {
        self.delimiters().nested_block_comments
    }

    /// The literal whose opening token begins at `offset`, if any.
    fn string_delimiter(&self, text: &str, offset: usize) -> Option<&'static Literal> {
        self.delimiters()
            .literals
            .iter()
            .find(|literal| starts_at(text, offset, literal.open))
    }

    /// True if the character at `offset` escapes the following character
    /// inside `literal`.
    ///
    /// When the escape character is the literal's own quote (C# verbatim
    /// strings), only a doubled quote counts as an escape.
    fn is_escape(&self, text: &str, offset: usize, literal: &Literal) -> bool {
        let Some(escape) = literal.escape else {
            return false;
        };
        let mut chars = match text.get(offset..) {
            Some(rest) => rest.chars(),
            None => return false,
        };
        if chars.next() != Some(escape) {
            return false;
        }
        match chars.next() {
            Some(next) if literal.close.starts_with(escape) => next == escape,
            Some(_) => true,
            None => false,
        }
    }
}

/// Supported languages.
///
/// Each variant is a stateless comment pattern matcher; two values for the
/// same language are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Java (`.java`)
    Java,
    /// C# (`.cs`)
    #[serde(rename = "cs")]
    CSharp,
    /// C and C++ sources and headers
    C,
    /// JavaScript and TypeScript
    JavaScript,
    /// Go (`.go`)
    Go,
    /// Kotlin (`.kt`, `.kts`); block comments nest
    Kotlin,
}

impl Language {
    /// Every supported language.
    pub fn all() -> &'static [Language] {
        &[
            Language::Java,
            Language::CSharp,
            Language::C,
            Language::JavaScript,
            Language::Go,
            Language::Kotlin,
        ]
    }

    /// Look up the language registered for a file extension.
    ///
    /// Matching is case-insensitive and a leading dot is ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepcountlib::Language;
    ///
    /// assert_eq!(Language::from_extension("java").unwrap(), Language::Java);
    /// assert_eq!(Language::from_extension(".CS").unwrap(), Language::CSharp);
    /// assert!(Language::from_extension("vb").is_err());
    /// ```
    pub fn from_extension(extension: &str) -> Result<Self> {
        let normalized = extension.trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "java" => Ok(Self::Java),
            "cs" => Ok(Self::CSharp),
            "c" | "h" | "cc" | "cpp" | "cxx" | "hpp" | "hh" | "hxx" => Ok(Self::C),
            "js" | "mjs" | "cjs" | "jsx" | "ts" | "tsx" | "mts" | "cts" => Ok(Self::JavaScript),
            "go" => Ok(Self::Go),
            "kt" | "kts" => Ok(Self::Kotlin),
            _ => Err(StepCountError::UnsupportedExtension(extension.to_string())),
        }
    }

    /// Look up the language for a path by its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension)
    }

    /// Check whether a path has a registered extension.
    pub fn is_supported(path: impl AsRef<Path>) -> bool {
        Self::from_path(path).is_ok()
    }

    /// Short language tag (`java`, `cs`, ...).
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::CSharp => "cs",
            Language::C => "c",
            Language::JavaScript => "javascript",
            Language::Go => "go",
            Language::Kotlin => "kotlin",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl CommentPatternMatch for Language {
    fn delimiters(&self) -> &'static Delimiters {
        match self {
            Language::Java => &JAVA,
            Language::CSharp => &CSHARP,
            Language::C => &C_FAMILY,
            Language::JavaScript => &JAVASCRIPT,
            Language::Go => &GO,
            Language::Kotlin => &KOTLIN,
        }
    }
}
