//! Crate root: wires together the compilation pipeline.
//!
//! - `tokenizer` performs lexical analysis and produces a flat token stream.
//! - `cursor` tracks the current token and offers the consume/expect primitives.
//! - `codegen` parses and emits x86-64 Intel-syntax assembly in one pass.
//! - `error` holds the error taxonomy and diagnostic rendering.
//! - `config` reads the binary's environment settings.

pub mod config;
pub mod cursor;
pub mod error;
pub mod tokenizer;

mod codegen;

pub use error::{CompileError, CompileResult};

/// Compile a `+`/`-` expression into assembly that leaves its value in `rax`.
pub fn generate_assembly(expr: &str) -> CompileResult<String> {
  let tokens = tokenizer::tokenize(expr)?;
  let mut cursor = cursor::TokenCursor::new(tokens, expr);
  codegen::generate(&mut cursor)
}
