//! Tokenizer built on logos.
//!
//! Whitespace and `;` line comments are skipped. Literal tokens (`#t`,
//! `#void`, `.`) outrank the identifier pattern, and numbers outrank it too,
//! so `-` and `...` are identifiers while `-5` and `.` are not.

use logos::Logos;

use crate::{ReadError, Span};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"([ \t\r\n\f]+|;[^\n]*)")]
pub enum TokenKind {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("'")]
    Quote,
    #[token(".", priority = 10)]
    Dot,

    #[token("#t", priority = 10)]
    True,
    #[token("#f", priority = 10)]
    False,
    #[token("#void", priority = 10)]
    Void,
    #[token("#ign", priority = 10)]
    Ign,

    #[regex(r"[+-]?[0-9]+", priority = 5)]
    Int,
    #[regex(r"[+-]?[0-9]+\.[0-9]+", priority = 5)]
    Float,

    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    String,
    #[regex(r#""([^"\\]|\\(.|\n))*"#)]
    UnterminatedString,

    #[regex(r"[a-zA-Z0-9\-&!:=><%+?/*#$_.][a-zA-Z0-9\-&!:=><%+?/*#$_.']*", priority = 2)]
    Ident,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Source text of the token.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.span.start as usize..self.span.end as usize]
    }
}

/// Lex the whole source, stopping at the first invalid character.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ReadError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        match result {
            Ok(TokenKind::UnterminatedString) => {
                return Err(ReadError::UnterminatedString { span });
            }
            Ok(kind) => tokens.push(Token { kind, span }),
            Err(()) => {
                return Err(ReadError::UnexpectedCharacter {
                    text: lexer.slice().to_owned(),
                    span,
                });
            }
        }
    }
    Ok(tokens)
}
