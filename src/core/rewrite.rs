/*!

The rewriter enumerates all single-step rewrites of a term:

- `step_at_root` attempts a single rule at the root of a subject.
- `steps_everywhere` yields every successor obtainable by applying one
  directed rule (`rule_from ⇒ rule_to`) at the root or at any subterm
  position, in a deterministic order: root first, then the child-0 subtree
  in pre-order, then the child-1 subtree.
- `all_steps` runs `steps_everywhere` for every axiom, in declaration order,
  first in the `lhs ⇒ rhs` direction and then `rhs ⇒ lhs`.

The resulting list may contain duplicate successor terms — distinct axioms
or positions producing the same canonical text; the search engine is
responsible for deduplicating via its visited set. Enumeration order must
stay deterministic so that the axiom name recorded for a deduplicated
successor, and the BFS transcript itself, are reproducible across runs.

*/

use std::rc::Rc;

use crate::abstractions::IString;
use crate::core::axiom::Axiom;
use crate::core::fresh::FreshNameGenerator;
use crate::core::matcher::match_term;
use crate::core::substitute::substitute;
use crate::core::term::{Term, TermRef};

/// Attempts to rewrite `subject` at its root using the directed rule
/// `rule_from ⇒ rule_to`. Fails if `rule_from` doesn't match the root.
pub fn step_at_root(
  subject: &TermRef,
  rule_from: &TermRef,
  rule_to: &TermRef,
  generator: &mut FreshNameGenerator,
) -> Option<TermRef> {
  let binding = match_term(subject, rule_from)?;
  Some(substitute(rule_to, &binding, generator))
}

/// Appends every successor of `subject` under the single directed rule
/// `name: rule_from ⇒ rule_to`, applied at every position, to `out`.
pub fn steps_everywhere(
  subject: &TermRef,
  name: IString,
  rule_from: &TermRef,
  rule_to: &TermRef,
  generator: &mut FreshNameGenerator,
  out: &mut Vec<(IString, TermRef)>,
) {
  if let Some(result) = step_at_root(subject, rule_from, rule_to, generator) {
    out.push((name, result));
  }

  if let Term::Op(op, children) = subject.as_ref() {
    for position in 0..children.len() {
      let mut child_successors = Vec::new();
      steps_everywhere(&children[position], name, rule_from, rule_to, generator, &mut child_successors);
      for (axiom_name, child_successor) in child_successors {
        let mut new_children = children.clone();
        new_children[position] = child_successor;
        out.push((axiom_name, Rc::new(Term::Op(*op, new_children))));
      }
    }
  }
}

/// Enumerates every single-step successor of `subject` under `axioms`,
/// applying each axiom's two directed rules in declaration order. The
/// returned list may contain duplicate canonical-text successors.
pub fn all_steps(subject: &TermRef, axioms: &[Axiom], generator: &mut FreshNameGenerator) -> Vec<(IString, TermRef)> {
  let mut out = Vec::new();
  for axiom in axioms {
    steps_everywhere(subject, axiom.name, &axiom.lhs, &axiom.rhs, generator, &mut out);
    steps_everywhere(subject, axiom.name, &axiom.rhs, &axiom.lhs, generator, &mut out);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::printer::canonical_text;
  use crate::core::term::Op;
  use ustr::Ustr;

  fn com_add() -> Axiom {
    // (+ a b) = (+ b a)
    let a = Ustr::from("a");
    let b = Ustr::from("b");
    Axiom::new(
      Ustr::from("com_add"),
      Term::binary(Op::Or, Term::var(a), Term::var(b)),
      Term::binary(Op::Or, Term::var(b), Term::var(a)),
    )
  }

  fn ide_add() -> Axiom {
    // (+ a 0) = a
    let a = Ustr::from("a");
    Axiom::new(
      Ustr::from("ide_add"),
      Term::binary(Op::Or, Term::var(a), Term::prim(false)),
      Term::var(a),
    )
  }

  #[test]
  fn root_application_both_directions() {
    let axiom = com_add();
    let mut generator = FreshNameGenerator::new();
    let subject = Term::binary(Op::Or, Term::prim(false), Term::prim(true));
    let mut out = Vec::new();
    steps_everywhere(&subject, axiom.name, &axiom.lhs, &axiom.rhs, &mut generator, &mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(canonical_text(&out[0].1), "(+ 1 0)");
  }

  #[test]
  fn applies_at_every_position() {
    // ((+ 0 1) + 1) under com_add rewrites at the root and inside the left child.
    let axiom = com_add();
    let mut generator = FreshNameGenerator::new();
    let inner = Term::binary(Op::Or, Term::prim(false), Term::prim(true));
    let subject = Term::binary(Op::Or, inner, Term::prim(true));
    let mut out = Vec::new();
    steps_everywhere(&subject, axiom.name, &axiom.lhs, &axiom.rhs, &mut generator, &mut out);
    let texts: Vec<String> = out.iter().map(|(_, t)| canonical_text(t)).collect();
    assert!(texts.contains(&"(+ 1 (+ 0 1))".to_string()));
    assert!(texts.contains(&"(+ (+ 1 0) 1)".to_string()));
  }

  #[test]
  fn all_steps_applies_each_axiom_in_both_directions() {
    let axioms = vec![ide_add(), com_add()];
    let mut generator = FreshNameGenerator::new();
    let subject = Term::binary(Op::Or, Term::prim(true), Term::prim(false));
    let successors = all_steps(&subject, &axioms, &mut generator);
    let texts: Vec<String> = successors.iter().map(|(_, t)| canonical_text(t)).collect();
    // ide_add (+ a 0) = a in the forward direction applied at root: a = 1.
    assert!(texts.contains(&"1".to_string()));
    // com_add applied at root.
    assert!(texts.contains(&"(+ 0 1)".to_string()));
  }

  #[test]
  fn degenerate_axiom_of_two_bare_variables_matches_anything() {
    // Edge case: both patterns a single variable.
    let axiom = Axiom::new(Ustr::from("triv"), Term::var(Ustr::from("x")), Term::var(Ustr::from("y")));
    let mut generator = FreshNameGenerator::new();
    let subject = Term::binary(Op::And, Term::prim(true), Term::prim(false));
    let mut out = Vec::new();
    steps_everywhere(&subject, axiom.name, &axiom.lhs, &axiom.rhs, &mut generator, &mut out);
    // The whole subject matches `x`, so the rewrite at the root replaces the
    // entire subject with a fresh UNRES node (rhs `y` is unbound).
    assert_eq!(out.len(), 1);
    assert!(canonical_text(&out[0].1).starts_with('?'));
  }
}
