//! Code generation: parse and emit in a single pass.
//!
//! There is no tree in between. The emitter reads the cursor directly,
//! enforcing `NUMBER (('+' | '-') NUMBER)*`, and appends one Intel-syntax
//! instruction per recognised term. The running value lives in `rax`, which
//! is also the return register, so `main` simply returns it.

use log::debug;

use crate::cursor::TokenCursor;
use crate::error::CompileResult;

fn push_line(asm: &mut String, line: &str) {
  debug!("emit {}", line.trim_start());
  asm.push_str(line);
  asm.push('\n');
}

/// Emit assembly for the whole expression behind `cursor`.
pub fn generate(cursor: &mut TokenCursor<'_>) -> CompileResult<String> {
  let mut asm = String::new();
  push_line(&mut asm, ".intel_syntax noprefix");
  push_line(&mut asm, ".global main");
  push_line(&mut asm, "main:");

  let first = cursor.expect_number()?;
  push_line(&mut asm, &format!("    mov rax, {first}"));

  while !cursor.at_eof() {
    if cursor.consume('+') {
      let value = cursor.expect_number()?;
      push_line(&mut asm, &format!("    add rax, {value}"));
      continue;
    }

    cursor.expect('-')?;
    let value = cursor.expect_number()?;
    push_line(&mut asm, &format!("    sub rax, {value}"));
  }

  push_line(&mut asm, "    ret");
  Ok(asm)
}
