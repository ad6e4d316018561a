pub mod error;
pub mod sign;
pub mod term;

use deriva_error::Error;
use error::MissingPrefix;
use sign::Sign;
use std::ops::Range;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use term::SignedTerm;

/// The text every function must begin with.
pub const PREFIX: &str = "f(x) =";

/// Splits a function of the form `f(x) = <terms>` into its [`SignedTerm`]s.
///
/// A term ends where the next `+` or `-` begins, unless that operator is inside parentheses or
/// directly follows a `^`. If the first term has no sign, it is positive.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The source code being parsed, including the prefix.
    source: &'source str,

    /// The tokens of the entire source.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.source.len()..self.source.len()
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Advances the cursor past any whitespace tokens.
    fn skip_whitespace(&mut self) {
        while self.current_token().is_some_and(Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Checks that the source begins with [`PREFIX`], and moves the cursor past it.
    fn parse_prefix(&mut self) -> Result<(), Error> {
        if !self.source.starts_with(PREFIX) {
            let end = self.source.len().min(PREFIX.len());
            return Err(Error::new(vec![0..end], MissingPrefix));
        }

        // the prefix ends with `=`, which is always a token of its own
        self.cursor = self.tokens
            .iter()
            .position(|token| token.span.start >= PREFIX.len())
            .unwrap_or(self.tokens.len());
        Ok(())
    }

    /// Parses the sign at the cursor, if there is one.
    fn parse_sign(&mut self) -> Result<Option<(Sign, Range<usize>)>, Error> {
        match self.current_token() {
            Some(token) if token.kind.is_sign() => {
                let sign = token.lexeme.parse::<Sign>()
                    .map_err(|err| Error::new(vec![token.span.clone()], err))?;
                let span = token.span.clone();
                self.cursor += 1;
                Ok(Some((sign, span)))
            },
            _ => Ok(None),
        }
    }

    /// Parses the next term. Returns [`None`] if there are no more terms.
    fn parse_term(&mut self) -> Result<Option<SignedTerm>, Error> {
        self.skip_whitespace();
        if self.current_token().is_none() {
            return Ok(None);
        }

        let (sign, sign_span) = match self.parse_sign()? {
            Some((sign, span)) => (sign, Some(span)),
            None => (Sign::Positive, None),
        };

        let start = self.cursor;
        let mut depth = 0usize;
        let mut after_exp = false;
        while let Some(token) = self.tokens.get(self.cursor) {
            match token.kind {
                TokenKind::Add | TokenKind::Sub if depth == 0 && !after_exp => break,
                TokenKind::OpenParen => depth += 1,
                TokenKind::CloseParen => depth = depth.saturating_sub(1),
                _ => (),
            }

            if !token.is_whitespace() {
                after_exp = token.kind == TokenKind::Exp;
            }
            self.cursor += 1;
        }

        let body = &self.tokens[start..self.cursor];
        let first = body.iter().find(|token| !token.is_whitespace());
        let last = body.iter().rev().find(|token| !token.is_whitespace());
        let term = match (first, last) {
            (Some(first), Some(last)) => {
                let span = first.span.start..last.span.end;
                SignedTerm::new(sign, &self.source[span.clone()], span)
            },
            // a sign with nothing after it; point at the sign
            _ => SignedTerm::new(sign, "", sign_span.unwrap_or_else(|| self.eof_span())),
        };

        Ok(Some(term))
    }

    /// Parses the entire source into its terms, in the order they appear.
    ///
    /// If there is nothing after the prefix, the returned list is empty.
    pub fn try_parse_full(&mut self) -> Result<Vec<SignedTerm>, Error> {
        self.cursor = 0;
        self.parse_prefix()?;

        let mut terms = Vec::new();
        while let Some(term) = self.parse_term()? {
            terms.push(term);
        }

        Ok(terms)
    }
}
