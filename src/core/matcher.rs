/*!

First-order pattern matching. A pattern is matched against a subject
by a recursive structural walk: an `OP` pattern node requires the subject to
be an `OP` node with the same operator and arity, matching children pairwise;
a `PRIM` pattern node requires the subject to be the identical literal; and a
pattern variable (`VAR` or `UNRES` — the two are interchangeable at match
time) either binds the subject, or, if already bound, requires the subject
to be structurally equal (canonical text equal) to the existing binding.

Matching is strictly syntactic. There is no AC-matching: `(+ a b)` does not
match `(+ b a)` without an axiom that says so.

*/

use crate::abstractions::{HashMap, IString};
use crate::core::term::{Term, TermRef};

/// A finite mapping from pattern-variable name to the subterm it is bound
/// to. Created empty at the root of a match attempt, discarded on failure,
/// consumed by substitution on success.
pub type Binding = HashMap<IString, TermRef>;

/// Attempts to match `pattern` against `subject`, returning the binding on
/// success.
pub fn match_term(subject: &TermRef, pattern: &TermRef) -> Option<Binding> {
  let mut binding = Binding::new();
  if match_into(subject, pattern, &mut binding) {
    Some(binding)
  } else {
    None
  }
}

fn match_into(subject: &TermRef, pattern: &TermRef, binding: &mut Binding) -> bool {
  if let Some(name) = pattern.variable_name() {
    return match binding.get(&name) {
      Some(bound) => bound == subject,
      None => {
        binding.insert(name, subject.clone());
        true
      }
    };
  }

  match (subject.as_ref(), pattern.as_ref()) {
    (Term::Prim(a), Term::Prim(b)) => a == b,

    (Term::Op(subject_op, subject_children), Term::Op(pattern_op, pattern_children)) => {
      subject_op == pattern_op
          && subject_children.len() == pattern_children.len()
          && subject_children
              .iter()
              .zip(pattern_children.iter())
              .all(|(s, p)| match_into(s, p, binding))
    }

    // The pattern is PRIM/OP but the subject's top symbol doesn't agree, or
    // the subject is itself a pattern variable appearing where the pattern
    // demands a concrete shape: no match.
    _ => false,
  }
}
