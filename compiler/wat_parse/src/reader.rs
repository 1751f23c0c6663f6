//! Recursive-descent reader from tokens to forms.

use wat_ir::{Name, PairArena, StringInterner, Value};
use wat_stack::ensure_sufficient_stack;

use crate::lexer::{tokenize, Token, TokenKind};
use crate::{ReadError, Span};

/// Reads forms into a pair arena, interning symbols as it goes.
pub struct Reader<'src, 'a> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    arena: &'a mut PairArena,
    interner: &'a StringInterner,
    quote: Name,
}

impl<'src, 'a> Reader<'src, 'a> {
    pub fn new(
        source: &'src str,
        arena: &'a mut PairArena,
        interner: &'a StringInterner,
    ) -> Result<Self, ReadError> {
        Ok(Reader {
            source,
            tokens: tokenize(source)?,
            pos: 0,
            arena,
            interner,
            quote: interner.intern("quote"),
        })
    }

    /// Read every form in the source.
    pub fn read_all(mut self) -> Result<Vec<Value>, ReadError> {
        let mut forms = Vec::new();
        while self.peek().is_some() {
            forms.push(self.read_form()?);
        }
        Ok(forms)
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn last_span(&self) -> Span {
        self.tokens
            .last()
            .map_or_else(|| Span::point(self.source.len()), |t| t.span)
    }

    /// Read one form. Nesting recurses through here, so the stack is
    /// grown on demand.
    fn read_form(&mut self) -> Result<Value, ReadError> {
        ensure_sufficient_stack(|| self.read_form_inner())
    }

    fn read_form_inner(&mut self) -> Result<Value, ReadError> {
        let Some(token) = self.advance() else {
            return Err(ReadError::UnexpectedEof {
                span: self.last_span(),
            });
        };
        match token.kind {
            TokenKind::LParen => self.read_list(token.span),
            TokenKind::RParen => Err(ReadError::UnexpectedClose { span: token.span }),
            TokenKind::Dot => Err(ReadError::MisplacedDot { span: token.span }),
            TokenKind::Quote => {
                let quoted = self.read_form()?;
                Ok(self.arena.list([Value::Symbol(self.quote), quoted]))
            }
            TokenKind::True => Ok(Value::Bool(true)),
            TokenKind::False => Ok(Value::Bool(false)),
            TokenKind::Void => Ok(Value::Void),
            TokenKind::Ign => Ok(Value::Ign),
            TokenKind::Int => self.read_int(token),
            TokenKind::Float => self.read_float(token),
            TokenKind::String => self.read_string(token),
            TokenKind::Ident => Ok(Value::Symbol(self.interner.intern(token.text(self.source)))),
            TokenKind::UnterminatedString => Err(ReadError::UnterminatedString { span: token.span }),
        }
    }

    fn read_list(&mut self, open: Span) -> Result<Value, ReadError> {
        let mut items = Vec::new();
        loop {
            let Some(token) = self.peek() else {
                return Err(ReadError::UnclosedList { span: open });
            };
            match token.kind {
                TokenKind::RParen => {
                    self.pos += 1;
                    return Ok(self.arena.list(items));
                }
                TokenKind::Dot => {
                    if items.is_empty() {
                        return Err(ReadError::MisplacedDot { span: token.span });
                    }
                    self.pos += 1;
                    let tail = self.read_form()?;
                    return match self.advance() {
                        Some(Token {
                            kind: TokenKind::RParen,
                            ..
                        }) => Ok(self.arena.list_star(items, tail)),
                        Some(other) => Err(ReadError::MisplacedDot { span: other.span }),
                        None => Err(ReadError::UnclosedList { span: open }),
                    };
                }
                _ => items.push(self.read_form()?),
            }
        }
    }

    fn read_int(&self, token: Token) -> Result<Value, ReadError> {
        let text = token.text(self.source);
        match text.parse::<i64>() {
            Ok(n) => Ok(Value::Int(n)),
            // Out of range integers read as floats.
            Err(_) => self.read_float(token),
        }
    }

    fn read_float(&self, token: Token) -> Result<Value, ReadError> {
        let text = token.text(self.source);
        text.parse::<f64>()
            .map(Value::Float)
            .map_err(|_| ReadError::InvalidNumber {
                text: text.to_owned(),
                span: token.span,
            })
    }

    fn read_string(&self, token: Token) -> Result<Value, ReadError> {
        let text = token.text(self.source);
        let body = &text[1..text.len() - 1];
        let mut out = String::with_capacity(body.len());
        let mut chars = body.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('"') => out.push('"'),
                Some('\\') => out.push('\\'),
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some(other) => {
                    return Err(ReadError::InvalidEscape {
                        escape: other,
                        span: token.span,
                    })
                }
                None => return Err(ReadError::UnterminatedString { span: token.span }),
            }
        }
        Ok(Value::string(&out))
    }
}
