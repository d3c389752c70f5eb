//! Token scanner for build console output.
//!
//! Recognizes two token shapes in a single left-to-right pass:
//! - average: `" average: "` followed by `\d{1,3}\.\d{1,3}`
//! - identifier: a word of bounded length followed by `.test` and one digit
//!
//! Whichever shape matches earliest wins; scanning resumes right after the
//! match. Everything else is skipped.

use regex_lite::{CaptureMatches, Regex};
use std::fmt;

use crate::ExtractError;

/// Literal text that introduces an average token.
pub(crate) const AVERAGE_PREFIX: &str = " average: ";

/// Pattern for the numeric part of an average.
pub(crate) const AVERAGE_VALUE: &str = r"\d{1,3}\.\d{1,3}";

/// Length bound for the word part of an identifier token (e.g. `bz2` in
/// `bz2.test3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierWidth {
    pub min: usize,
    pub max: usize,
}

impl IdentifierWidth {
    /// Bound used by the per-line filter: 3 to 7 characters.
    pub const COMPACT: IdentifierWidth = IdentifierWidth { min: 3, max: 7 };

    /// Bound used by the report generator: 2 to 9 characters.
    pub const WIDE: IdentifierWidth = IdentifierWidth { min: 2, max: 9 };

    pub fn new(min: usize, max: usize) -> Result<Self, ExtractError> {
        let width = Self { min, max };
        width.validate()?;
        Ok(width)
    }

    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.min == 0 || self.min > self.max {
            return Err(ExtractError::InvalidWidth {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl fmt::Display for IdentifierWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Kind of a recognized token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Average,
}

/// A recognized token, borrowed from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'t> {
    pub kind: TokenKind,
    /// Literal matched text (`"bz2.test1"`, `" average: 1.234"`).
    pub text: &'t str,
    /// Byte offset of the match in the source text.
    pub offset: usize,
}

impl<'t> Token<'t> {
    /// Numeric literal of an average token (`"1.234"`). None for identifiers.
    pub fn value(&self) -> Option<&'t str> {
        match self.kind {
            TokenKind::Average => self.text.strip_prefix(AVERAGE_PREFIX),
            TokenKind::Identifier => None,
        }
    }

    /// Suite part of an identifier token (`"bz2"` for `"bz2.test1"`).
    pub fn suite(&self) -> Option<&'t str> {
        match self.kind {
            TokenKind::Identifier => self.text.rsplit_once(".test").map(|(suite, _)| suite),
            TokenKind::Average => None,
        }
    }

    /// Test index of an identifier token (`3` for `"bz2.test3"`).
    pub fn test_index(&self) -> Option<u8> {
        match self.kind {
            TokenKind::Identifier => self
                .text
                .bytes()
                .last()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0'),
            TokenKind::Average => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Compiled scanner for one identifier width.
#[derive(Debug, Clone)]
pub struct TokenScanner {
    width: IdentifierWidth,
    pattern: Regex,
}

impl TokenScanner {
    pub fn new(width: IdentifierWidth) -> Result<Self, ExtractError> {
        width.validate()?;
        // Group 1 is the average, group 2 the identifier.
        let pattern = Regex::new(&format!(
            r"({}{})|(\w{{{},{}}}\.test\d)",
            regex_lite::escape(AVERAGE_PREFIX),
            AVERAGE_VALUE,
            width.min,
            width.max
        ))?;
        Ok(Self { width, pattern })
    }

    pub fn width(&self) -> IdentifierWidth {
        self.width
    }

    /// Lazily scan `text` for tokens in document order.
    pub fn scan<'r, 't>(&'r self, text: &'t str) -> Tokens<'r, 't> {
        Tokens {
            matches: self.pattern.captures_iter(text),
        }
    }
}

/// Iterator over the tokens of one text, produced by [`TokenScanner::scan`].
pub struct Tokens<'r, 't> {
    matches: CaptureMatches<'r, 't>,
}

impl<'t> Iterator for Tokens<'_, 't> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        for caps in self.matches.by_ref() {
            if let Some(m) = caps.get(1) {
                return Some(Token {
                    kind: TokenKind::Average,
                    text: m.as_str(),
                    offset: m.start(),
                });
            }
            if let Some(m) = caps.get(2) {
                return Some(Token {
                    kind: TokenKind::Identifier,
                    text: m.as_str(),
                    offset: m.start(),
                });
            }
        }
        None
    }
}
