/*!

Parser and AST. An intermediate AST representation (`parser::ast`) is
necessary to separate "what the grammar produced" from "the internal term
representation the core consumes" — [`crate::core::driver::Command`] values
are produced only after a full parse succeeds.

The grammar itself lives in `grammar.lalrpop` and is generated in the source
tree by `build.rs` (so IDEs without LALRPOP support can still index
`grammar.rs`) rather than out of tree.

*/

pub mod ast;
mod grammar;

use crate::core::driver::Command;
use crate::error::ParseError;

/// Raised by the grammar's fallback `param` alternative when the key isn't
/// one of the three recognized parameters.
#[derive(Debug, Clone)]
pub struct UnknownParameter(pub String);

/// Parses a whole script into the ordered list of commands the driver
/// should run, converting any lexer/grammar/semantic failure into a
/// [`ParseError`] carrying a source excerpt, a caret, and a line/column.
pub fn parse_script(source: &str) -> Result<Vec<Command>, ParseError> {
  let ast_commands = grammar::ScriptParser::new()
      .parse(source)
      .map_err(|error| convert_lalrpop_error(source, error))?;

  ast_commands
      .iter()
      .map(|command_ast| command_ast.construct().map_err(|message| locate(source, 0, &message)))
      .collect()
}

fn convert_lalrpop_error(
  source: &str,
  error: lalrpop_util::ParseError<usize, grammar::Token<'_>, UnknownParameter>,
) -> ParseError {
  use lalrpop_util::ParseError::*;

  match error {
    InvalidToken { location } => locate(source, location, "unexpected character"),

    UnrecognizedEof { location, expected } => locate(
      source,
      location,
      &format!("unexpected end of input, expected one of: {}", expected.join(", ")),
    ),

    UnrecognizedToken { token: (start, token, _), expected } => locate(
      source,
      start,
      &format!("unexpected token `{}`, expected one of: {}", token, expected.join(", ")),
    ),

    ExtraToken { token: (start, token, _) } => locate(source, start, &format!("unexpected extra token `{}`", token)),

    User { error } => locate(source, 0, &format!("unknown parameter '{}'", error.0)),
  }
}

/// Converts a byte offset in `source` into a [`ParseError`] carrying the
/// 1-indexed line/column and the offending source line.
fn locate(source: &str, byte_offset: usize, message: &str) -> ParseError {
  let offset = byte_offset.min(source.len());
  let mut line = 1usize;
  let mut line_start = 0usize;

  for (index, ch) in source.char_indices() {
    if index >= offset {
      break;
    }
    if ch == '\n' {
      line += 1;
      line_start = index + 1;
    }
  }

  let line_end = source[line_start..].find('\n').map(|i| line_start + i).unwrap_or(source.len());
  let source_line = &source[line_start..line_end];
  let column = offset - line_start + 1;

  ParseError::new(message, line, column, source_line)
}
