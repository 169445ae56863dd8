//! The "current token" state the emitter reads from.
//!
//! A cursor owns the token vector produced by `tokenize` and only ever moves
//! forward, one token per successful match. It never steps past the `Eof`
//! terminator, so once the input is exhausted every further query sees the
//! end-of-input location.

use log::trace;

use crate::error::{CompileResult, ExpectedNumberSnafu, ExpectedOperatorSnafu};
use crate::tokenizer::{Token, TokenKind, describe_token, token_text};

pub struct TokenCursor<'a> {
  tokens: Vec<Token>,
  source: &'a str,
  pos: usize,
}

impl<'a> TokenCursor<'a> {
  pub fn new(tokens: Vec<Token>, source: &'a str) -> Self {
    Self {
      tokens,
      source,
      pos: 0,
    }
  }

  fn current(&self) -> Option<&Token> {
    self.tokens.get(self.pos)
  }

  /// Offset of the current token, or the end of the source if the sequence
  /// was built without a terminator.
  fn loc(&self) -> usize {
    self.current().map_or(self.source.len(), |token| token.loc)
  }

  fn advance(&mut self) {
    trace!("consumed {:?}", describe_token(self.current(), self.source));
    self.pos += 1;
  }

  fn at_reserved(&self, op: char) -> bool {
    self.current().is_some_and(|token| {
      token.kind == TokenKind::Reserved && token_text(token, self.source).starts_with(op)
    })
  }

  /// Advance past `op` if it is the current token.
  pub fn consume(&mut self, op: char) -> bool {
    if !self.at_reserved(op) {
      return false;
    }
    self.advance();
    true
  }

  /// Advance past `op`, failing at the current token if it is anything else.
  pub fn expect(&mut self, op: char) -> CompileResult<()> {
    if !self.consume(op) {
      return ExpectedOperatorSnafu { loc: self.loc(), op }.fail();
    }
    Ok(())
  }

  /// Advance past an integer literal and return its value.
  pub fn expect_number(&mut self) -> CompileResult<i64> {
    match self.current() {
      Some(Token {
        kind: TokenKind::Num,
        value: Some(value),
        ..
      }) => {
        let value = *value;
        self.advance();
        Ok(value)
      }
      _ => ExpectedNumberSnafu { loc: self.loc() }.fail(),
    }
  }

  pub fn at_eof(&self) -> bool {
    self
      .current()
      .is_none_or(|token| token.kind == TokenKind::Eof)
  }
}
