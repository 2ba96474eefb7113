/*!

AST representation of a `formula` production. `TermAST::construct`
turns the parsed tree into a [`core::term::TermRef`]; every identifier
written in a script becomes a `VAR` node — `UNRES` nodes are introduced only
by the prover itself, never by the parser.

*/

use crate::abstractions::IString;
use crate::core::term::{Op, Term, TermRef};

pub type BxTermAST = Box<TermAST>;

#[derive(Clone, Debug)]
pub enum TermAST {
  Prim(bool),
  Identifier(IString),
  Unary(BxTermAST),
  Binary(Op, BxTermAST, BxTermAST),
}

impl TermAST {
  pub fn construct(&self) -> TermRef {
    match self {
      TermAST::Prim(value) => Term::prim(*value),
      TermAST::Identifier(name) => Term::var(*name),
      TermAST::Unary(child) => Term::not(child.construct()),
      TermAST::Binary(op, left, right) => Term::binary(*op, left.construct(), right.construct()),
    }
  }
}
