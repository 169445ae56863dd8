//! Shared error utilities used across the compilation pipeline.
//!
//! Errors carry the byte offset they refer to instead of a pre-rendered
//! message, so the caller decides when (and whether) to format them. The
//! rendered form mirrors chibicc: the input line, then a caret under the
//! offending character followed by the message.

use std::num::ParseIntError;

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CompileError {
  #[snafu(display("wrong number of args (usage: {program} <expr>)"))]
  Usage { program: String },

  #[snafu(display("cannot tokenize"))]
  Tokenize { loc: usize },

  #[snafu(display("invalid number: {source}"))]
  InvalidNumber { loc: usize, source: ParseIntError },

  #[snafu(display("this is not a number"))]
  ExpectedNumber { loc: usize },

  #[snafu(display("it is not '{op}'"))]
  ExpectedOperator { loc: usize, op: char },
}

impl CompileError {
  /// Byte offset into the source this error points at, if any.
  pub fn loc(&self) -> Option<usize> {
    match self {
      Self::Usage { .. } => None,
      Self::Tokenize { loc }
      | Self::InvalidNumber { loc, .. }
      | Self::ExpectedNumber { loc }
      | Self::ExpectedOperator { loc, .. } => Some(*loc),
    }
  }

  /// Render the diagnostic against the source it was produced from.
  ///
  /// Positional errors span two lines: the source verbatim, then the caret
  /// and message. Everything else is a single line.
  pub fn render(&self, source: &str) -> String {
    match self.loc() {
      Some(loc) => {
        let safe_loc = loc.min(source.len());
        // The caret is placed by character, not byte, so multi-byte input
        // still lines up.
        let char_offset = source
          .get(..safe_loc)
          .map_or(safe_loc, |prefix| prefix.chars().count());
        format!("{source}\n{}^ {self}", " ".repeat(char_offset))
      }
      None => self.to_string(),
    }
  }
}
