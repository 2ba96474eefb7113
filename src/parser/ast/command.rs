/*!

AST representation of a `cmd` production: `axiom`, `prove`, and
`param` declarations, in the order the driver must consume them.

*/

use crate::abstractions::IString;
use crate::core::driver::{Command, ParamUpdate};
use crate::parser::ast::term::BxTermAST;

#[derive(Clone, Debug)]
pub enum ParamAST {
  MaxSearchDepth(u64),
  MaxTreeSize(u64),
  UseProofsAsAxioms(bool),
}

#[derive(Clone, Debug)]
pub enum CommandAST {
  Axiom { name: IString, lhs: BxTermAST, rhs: BxTermAST },
  Param(ParamAST),
  Prove { lhs: BxTermAST, rhs: BxTermAST },
}

impl CommandAST {
  /// Converts this AST node into the [`Command`] the driver consumes. The
  /// only remaining validation — that `max_search_depth`/`max_tree_size` are
  /// positive — is performed here, since the grammar itself only guarantees
  /// a nonnegative integer literal.
  pub fn construct(&self) -> Result<Command, String> {
    match self {
      CommandAST::Axiom { name, lhs, rhs } => Ok(Command::Axiom {
        name: *name,
        lhs: lhs.construct(),
        rhs: rhs.construct(),
      }),

      CommandAST::Prove { lhs, rhs } => Ok(Command::Prove {
        lhs: lhs.construct(),
        rhs: rhs.construct(),
      }),

      CommandAST::Param(ParamAST::MaxSearchDepth(value)) => {
        require_positive(*value, "max_search_depth")?;
        Ok(Command::Param(ParamUpdate::MaxSearchDepth(*value as u32)))
      }

      CommandAST::Param(ParamAST::MaxTreeSize(value)) => {
        require_positive(*value, "max_tree_size")?;
        Ok(Command::Param(ParamUpdate::MaxTreeSize(*value as usize)))
      }

      CommandAST::Param(ParamAST::UseProofsAsAxioms(value)) => {
        Ok(Command::Param(ParamUpdate::UseProofsAsAxioms(*value)))
      }
    }
  }
}

fn require_positive(value: u64, parameter: &str) -> Result<(), String> {
  if value == 0 {
    Err(format!("parameter '{}' requires a positive integer, got 0", parameter))
  } else {
    Ok(())
  }
}
