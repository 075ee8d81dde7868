//! Hand-written tokenizer.
//!
//! Produces one token per call, so the set of registered operator symbols
//! can differ per compilation (hosts may register their own operators).
//! Unary minus is resolved here, context-sensitively: a `-` is folded into
//! the following numeric literal if and only if the next character is a
//! digit and the previous token was `(`, `,`, an operator, or nothing at
//! all. This is what distinguishes `3-2` from `MAX(1,-2)`.

use smallvec::SmallVec;

use super::error::{ParseError, ParseErrorKind};
use super::{Span, Token, TokenKind};

/// What the previously emitted token was, as far as unary-minus
/// disambiguation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Start,
    Open,
    Comma,
    Operator,
    Value,
}

pub struct Tokenizer<'src, 'sym> {
    source: &'src str,
    pos: usize,
    context: Context,
    /// Registered operator symbols, longest first for greedy matching.
    symbols: SmallVec<[&'sym str; 24]>,
}

impl<'src, 'sym> Tokenizer<'src, 'sym> {
    pub fn new(source: &'src str, symbols: &[&'sym str]) -> Self {
        let mut symbols: SmallVec<[&'sym str; 24]> = symbols.iter().copied().collect();
        symbols.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        Self {
            source,
            pos: 0,
            context: Context::Start,
            symbols,
        }
    }

    /// The next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token<'src>>, ParseError> {
        self.skip_whitespace();
        let Some(c) = self.peek() else {
            return Ok(None);
        };

        let token = if c.is_ascii_digit() {
            self.scan_number()?
        } else if c == '-' && self.minus_is_unary() {
            self.scan_number()?
        } else if c.is_ascii_alphabetic() || c == '_' {
            self.scan_ident()
        } else if c == '(' || c == ')' || c == ',' {
            self.scan_punct(c)
        } else if c == '\'' {
            self.scan_string()?
        } else {
            self.scan_operator()?
        };

        self.context = match token.kind {
            TokenKind::LParen => Context::Open,
            TokenKind::Comma => Context::Comma,
            TokenKind::Operator(_) => Context::Operator,
            TokenKind::Number(_)
            | TokenKind::Str(_)
            | TokenKind::Ident(_)
            | TokenKind::RParen => Context::Value,
        };
        Ok(Some(token))
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.source.as_bytes().get(pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// A `-` folds into the following literal only after `(`, `,`, an
    /// operator, or at the start of input, and only when a digit follows.
    fn minus_is_unary(&self) -> bool {
        let digit_follows = self
            .byte_at(self.pos + 1)
            .is_some_and(|b| b.is_ascii_digit());
        digit_follows && self.context != Context::Value
    }

    /// Digits, at most one decimal separator, optional signed exponent,
    /// scanned greedily.
    fn scan_number(&mut self) -> Result<Token<'src>, ParseError> {
        let begin = self.pos;
        if self.byte_at(self.pos) == Some(b'-') {
            self.pos += 1;
        }
        self.eat_digits();
        if self.byte_at(self.pos) == Some(b'.')
            && self.byte_at(self.pos + 1).is_some_and(|b| b.is_ascii_digit())
        {
            self.pos += 1;
            self.eat_digits();
        }
        if matches!(self.byte_at(self.pos), Some(b'e' | b'E')) {
            let mut after = self.pos + 1;
            if matches!(self.byte_at(after), Some(b'+' | b'-')) {
                after += 1;
            }
            if self.byte_at(after).is_some_and(|b| b.is_ascii_digit()) {
                self.pos = after;
                self.eat_digits();
            }
        }

        let text = &self.source[begin..self.pos];
        let span = Span(begin..self.pos);
        let value: f64 = text
            .parse()
            .map_err(|_| ParseError::new(ParseErrorKind::InvalidNumber(text.into()), span.clone()))?;
        Ok(Token {
            kind: TokenKind::Number(value),
            span,
        })
    }

    fn eat_digits(&mut self) {
        while self.byte_at(self.pos).is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn scan_ident(&mut self) -> Token<'src> {
        let begin = self.pos;
        while self
            .byte_at(self.pos)
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.')
        {
            self.pos += 1;
        }
        Token {
            kind: TokenKind::Ident(&self.source[begin..self.pos]),
            span: Span(begin..self.pos),
        }
    }

    fn scan_punct(&mut self, c: char) -> Token<'src> {
        let begin = self.pos;
        self.pos += 1;
        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            _ => TokenKind::Comma,
        };
        Token {
            kind,
            span: Span(begin..self.pos),
        }
    }

    /// Single-quoted literal; the inter-quote text is kept verbatim, with
    /// no escape decoding.
    fn scan_string(&mut self) -> Result<Token<'src>, ParseError> {
        let begin = self.pos;
        match self.source[self.pos + 1..].find('\'') {
            Some(len) => {
                let text = &self.source[self.pos + 1..self.pos + 1 + len];
                self.pos += len + 2;
                Ok(Token {
                    kind: TokenKind::Str(text),
                    span: Span(begin..self.pos),
                })
            }
            None => Err(ParseError::new(
                ParseErrorKind::UnterminatedString,
                Span(begin..self.source.len()),
            )),
        }
    }

    /// Greedy longest-first match against the registered operator symbols.
    fn scan_operator(&mut self) -> Result<Token<'src>, ParseError> {
        let rest = &self.source[self.pos..];
        for sym in &self.symbols {
            if rest.starts_with(sym) {
                let begin = self.pos;
                self.pos += sym.len();
                return Ok(Token {
                    kind: TokenKind::Operator(&self.source[begin..self.pos]),
                    span: Span(begin..self.pos),
                });
            }
        }
        // Report the single offending character at this offset.
        let c = rest.chars().next().unwrap_or_default();
        Err(ParseError::new(
            ParseErrorKind::UnknownSymbol(rest[..c.len_utf8()].into()),
            Span(self.pos..self.pos + c.len_utf8()),
        ))
    }
}

/// Tokenize a whole source string.
pub fn tokenize<'src>(
    source: &'src str,
    symbols: &[&str],
) -> Result<Vec<Token<'src>>, ParseError> {
    let mut tokenizer = Tokenizer::new(source, symbols);
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

#[cfg(test)]
#[path = "tokenizer_test.rs"]
mod tokenizer_test;
