//! Lexical analysis: turns the raw input string into a vector of tokens.
//!
//! The tokenizer only knows about the two reserved operators and decimal
//! literals. Signs are never folded into literals; a `-` is always its own
//! token and the emitter decides what it means.

use log::trace;
use snafu::ResultExt;

use crate::error::{CompileResult, InvalidNumberSnafu, TokenizeSnafu};

/// Kinds of tokens recognised by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  Reserved,
  Num,
  Eof,
}

/// A classified slice of the input. `loc` and `len` are byte offsets into
/// the source the token was produced from.
#[derive(Debug, Clone)]
pub struct Token {
  pub kind: TokenKind,
  pub value: Option<i64>,
  pub loc: usize,
  pub len: usize,
}

impl Token {
  pub fn new(kind: TokenKind, loc: usize, len: usize, value: Option<i64>) -> Self {
    Self {
      kind,
      value,
      loc,
      len,
    }
  }
}

fn is_space(c: u8) -> bool {
  matches!(c, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Lex the input into a flat vector of tokens terminated by an `Eof` marker.
///
/// Fails on the first character that is neither whitespace, a digit, nor a
/// reserved operator; no partial sequence is returned.
pub fn tokenize(input: &str) -> CompileResult<Vec<Token>> {
  let mut tokens = Vec::new();
  let bytes = input.as_bytes();
  let mut i = 0;

  while i < bytes.len() {
    let c = bytes[i];
    if is_space(c) {
      i += 1;
      continue;
    }

    if c == b'+' || c == b'-' {
      tokens.push(Token::new(TokenKind::Reserved, i, 1, None));
      i += 1;
      continue;
    }

    if c.is_ascii_digit() {
      let start = i;
      while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
      }
      // `add`/`sub` only take sign-extended 32-bit immediates.
      let value = input[start..i]
        .parse::<i32>()
        .context(InvalidNumberSnafu { loc: start })?;
      tokens.push(Token::new(
        TokenKind::Num,
        start,
        i - start,
        Some(i64::from(value)),
      ));
      continue;
    }

    // Anything else stops the scan here, at the offending character.
    return TokenizeSnafu { loc: i }.fail();
  }

  tokens.push(Token::new(TokenKind::Eof, input.len(), 0, None));
  trace!("tokenized {} token(s) from {input:?}", tokens.len());
  Ok(tokens)
}

/// Return the slice from the source that produced this token.
pub fn token_text<'a>(token: &Token, source: &'a str) -> &'a str {
  let end = token.loc + token.len;
  &source[token.loc..end]
}

/// Human-friendly description used in log output.
pub fn describe_token(token: Option<&Token>, source: &str) -> String {
  match token {
    Some(t) => match t.kind {
      TokenKind::Eof => "EOF".to_string(),
      _ => token_text(t, source).to_string(),
    },
    None => "EOF".to_string(),
  }
}

#[cfg(test)]
mod tests {
  use expect_test::{Expect, expect};

  use super::*;
  use crate::error::CompileError;

  fn check_tokens(input: &str, expect: Expect) {
    let tokens = tokenize(input).expect("input should tokenize");
    let dump = tokens
      .iter()
      .map(|t| format!("{:?} {:?} @{} {:?}", t.kind, token_text(t, input), t.loc, t.value))
      .collect::<Vec<_>>()
      .join("\n");
    expect.assert_eq(&dump);
  }

  #[test]
  fn lex_single_literal() {
    check_tokens(
      "42",
      expect![[r#"
Num "42" @0 Some(42)
Eof "" @2 None"#]],
    );
  }

  #[test]
  fn lex_operators_and_whitespace() {
    check_tokens(
      " 12 + 34\t-  5 ",
      expect![[r#"
Num "12" @1 Some(12)
Reserved "+" @4 None
Num "34" @6 Some(34)
Reserved "-" @9 None
Num "5" @12 Some(5)
Eof "" @14 None"#]],
    );
  }

  #[test]
  fn leading_zeros_are_decimal() {
    check_tokens(
      "007+1",
      expect![[r#"
Num "007" @0 Some(7)
Reserved "+" @3 None
Num "1" @4 Some(1)
Eof "" @5 None"#]],
    );
  }

  #[test]
  fn sign_is_never_folded_into_a_literal() {
    let tokens = tokenize("-5").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Reserved);
    assert_eq!(tokens[1].value, Some(5));
  }

  #[test]
  fn empty_input_is_just_eof() {
    let tokens = tokenize("").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].loc, 0);
  }

  #[test]
  fn whitespace_only_input_puts_eof_at_the_end() {
    let tokens = tokenize(" \t\n").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].loc, 3);
  }

  #[test]
  fn exactly_one_eof_terminates_the_sequence() {
    let tokens = tokenize("1+2-3").unwrap();
    let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
    assert_eq!(eofs, 1);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
  }

  #[test]
  fn unknown_character_is_reported_where_it_is() {
    let err = tokenize("1*2").unwrap_err();
    assert!(matches!(err, CompileError::Tokenize { loc: 1 }));
  }

  #[test]
  fn non_ascii_character_is_rejected() {
    let err = tokenize("1 + é").unwrap_err();
    assert!(matches!(err, CompileError::Tokenize { loc: 4 }));
  }

  #[test]
  fn overflowing_literal_points_at_its_first_digit() {
    let err = tokenize("1 + 99999999999999999999").unwrap_err();
    assert!(matches!(err, CompileError::InvalidNumber { loc: 4, .. }));
  }

  #[test]
  fn literals_must_fit_in_32_bits() {
    let tokens = tokenize("2147483647").unwrap();
    assert_eq!(tokens[0].value, Some(i64::from(i32::MAX)));
    let err = tokenize("2147483648").unwrap_err();
    assert!(matches!(err, CompileError::InvalidNumber { loc: 0, .. }));
  }

  #[test]
  fn replacement_character_is_rejected_at_its_offset() {
    let input = String::from_utf8_lossy(b"1+\xff").into_owned();
    let err = tokenize(&input).unwrap_err();
    assert!(matches!(err, CompileError::Tokenize { loc: 2 }));
  }

  #[test]
  fn token_text_round_trips_meaningful_characters() {
    for input in ["5+20-4", " 1 +  2 - 3 ", "007 - 0", "\t9\n"] {
      let tokens = tokenize(input).unwrap();
      let rebuilt: String = tokens.iter().map(|t| token_text(t, input)).collect();
      let expected: String = input.chars().filter(|c| !c.is_whitespace()).collect();
      assert_eq!(rebuilt, expected, "input {input:?}");
    }
  }

  #[test]
  fn describe_token_names_eof() {
    let tokens = tokenize("7").unwrap();
    assert_eq!(describe_token(tokens.first(), "7"), "7");
    assert_eq!(describe_token(tokens.last(), "7"), "EOF");
    assert_eq!(describe_token(None, "7"), "EOF");
  }
}
