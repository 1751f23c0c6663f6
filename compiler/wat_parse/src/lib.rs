//! Reader for Wat source text.
//!
//! Turns text into forms: symbols are interned, lists are allocated in the
//! caller's [`PairArena`] so the evaluator sees the same pair identities the
//! reader produced.

mod error;
mod lexer;
mod reader;

pub use error::{ReadError, Span};
pub use lexer::{tokenize, Token, TokenKind};
pub use reader::Reader;

use wat_ir::{PairArena, StringInterner, Value};

/// Read all forms in `source`.
pub fn parse(
    source: &str,
    arena: &mut PairArena,
    interner: &StringInterner,
) -> Result<Vec<Value>, ReadError> {
    Reader::new(source, arena, interner)?.read_all()
}
