/*!

An `Axiom` is a named, bidirectional rewrite rule between two term patterns. Installing an axiom installs two directed rewrite rules: `lhs ⇒ rhs`
and `rhs ⇒ lhs`. Variable names inside an axiom's patterns are pattern
variables — they bind during matching. There is no way to declare a symbol
as a constant: every identifier inside an axiom pattern
is a pattern variable.

*/

use crate::abstractions::IString;
use crate::core::term::TermRef;

#[derive(Clone, Debug)]
pub struct Axiom {
  pub name: IString,
  pub lhs: TermRef,
  pub rhs: TermRef,
}

impl Axiom {
  pub fn new(name: IString, lhs: TermRef, rhs: TermRef) -> Self {
    Axiom { name, lhs, rhs }
  }
}
