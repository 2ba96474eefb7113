/*!

The substituter instantiates a pattern template under a binding,
producing a new term by a post-order copy: `PRIM` nodes copy as-is, `OP`
nodes copy recursively (sharing unchanged children by `Rc`), and pattern
variables (`VAR`/`UNRES`) are replaced by the bound subterm when present.

A pattern variable that appears in the template but is absent from the
binding — the right-hand side of a rule mentions a variable its left-hand
side didn't constrain — is replaced by a fresh `UNRES` node from the
generator. This is how rules such as `a = a * 1` introduce new symbols on
rewrite.

*/

use crate::core::fresh::FreshNameGenerator;
use crate::core::matcher::Binding;
use crate::core::term::{Term, TermRef};

/// Instantiates `template` under `binding`, allocating fresh `UNRES` nodes
/// from `generator` for any template variable the binding doesn't cover.
pub fn substitute(template: &TermRef, binding: &Binding, generator: &mut FreshNameGenerator) -> TermRef {
  if let Some(name) = template.variable_name() {
    return match binding.get(&name) {
      Some(bound) => bound.clone(),
      None => Term::unres(generator.fresh()),
    };
  }

  match template.as_ref() {
    Term::Prim(_) => template.clone(),
    Term::Op(op, children) => {
      let new_children: Vec<TermRef> = children
          .iter()
          .map(|child| substitute(child, binding, generator))
          .collect();
      std::rc::Rc::new(Term::Op(*op, new_children))
    }
    // Unreachable: variable_name() above already handled Var/Unres.
    Term::Var(_) | Term::Unres(_) => unreachable!("pattern variable handled above"),
  }
}
