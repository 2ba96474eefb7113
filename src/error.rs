/*!

A malformed script (unexpected character, unexpected token, an
arity/operator mismatch, a missing terminator, an unknown parameter, or a
wrong value type for a parameter) is reported as a [`ParseError`] carrying a
source excerpt and a caret. A genuine invariant violation inside the core
(an unreachable branch, a malformed internal term) is a bug rather than a
user error and is not given its own error type: it surfaces as a panic,
which the CLI catches and reports as a short diagnostic. Proof failure under
bounds is deliberately *not* an error: it is a normal
[`core::search::SearchOutcome`] reported on stdout like any other
obligation.

*/

use std::fmt;
use std::fmt::{Display, Formatter};

/// A malformed script: unexpected character, unexpected token, an
/// arity/operator mismatch, a missing terminator, an unknown parameter, or a
/// wrong value type for a parameter.
#[derive(Debug, Clone)]
pub struct ParseError {
  pub message: String,
  pub line: usize,
  pub column: usize,
  pub source_line: String,
}

impl ParseError {
  pub fn new(message: impl Into<String>, line: usize, column: usize, source_line: impl Into<String>) -> Self {
    ParseError {
      message: message.into(),
      line,
      column,
      source_line: source_line.into(),
    }
  }
}

impl Display for ParseError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", self.message)?;
    writeln!(f, "{}", self.source_line)?;
    // A caret under the offending column. Columns are 1-indexed.
    let caret_offset = self.column.saturating_sub(1);
    writeln!(f, "{}^", " ".repeat(caret_offset))?;
    write!(f, "at line {}, column {}", self.line, self.column)
  }
}

impl std::error::Error for ParseError {}
