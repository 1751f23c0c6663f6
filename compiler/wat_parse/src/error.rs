//! Reader errors.

use std::fmt;
use std::ops::Range;

use thiserror::Error;

/// Byte range in the source text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Convert a byte range; offsets past `u32::MAX` saturate.
    pub fn from_range(range: Range<usize>) -> Self {
        let clamp = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        Span::new(clamp(range.start), clamp(range.end))
    }

    pub fn point(offset: usize) -> Self {
        Span::from_range(offset..offset)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("unexpected character `{text}` at {span}")]
    UnexpectedCharacter { text: String, span: Span },

    #[error("unterminated string starting at {span}")]
    UnterminatedString { span: Span },

    #[error("invalid escape `\\{escape}` in string at {span}")]
    InvalidEscape { escape: char, span: Span },

    #[error("invalid number `{text}` at {span}")]
    InvalidNumber { text: String, span: Span },

    #[error("unexpected `)` at {span}")]
    UnexpectedClose { span: Span },

    #[error("misplaced `.` at {span}")]
    MisplacedDot { span: Span },

    #[error("list opened at {span} is never closed")]
    UnclosedList { span: Span },

    #[error("unexpected end of input after {span}")]
    UnexpectedEof { span: Span },
}

impl ReadError {
    pub fn span(&self) -> Span {
        match self {
            ReadError::UnexpectedCharacter { span, .. }
            | ReadError::UnterminatedString { span }
            | ReadError::InvalidEscape { span, .. }
            | ReadError::InvalidNumber { span, .. }
            | ReadError::UnexpectedClose { span }
            | ReadError::MisplacedDot { span }
            | ReadError::UnclosedList { span }
            | ReadError::UnexpectedEof { span } => *span,
        }
    }
}
