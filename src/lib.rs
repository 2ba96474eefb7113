#![allow(unused)]
/*!

An automated equational theorem prover for a small Boolean-algebra-style term
language. A script declares named rewrite axioms (equalities between terms
containing free variables) and proof obligations (equalities to be derived).
The prover searches for a finite sequence of axiom-directed rewrites that
transforms the left-hand side of an obligation into the right-hand side.

The crate is organized leaves-first, following the data flow

```text
Driver -> (per `prove`) Search Engine -> Rewriter -> Matcher + Substituter -> Term
```

with the [`core::printer`] module used both by the search engine (as the
identity of a state) and by the driver (for transcript display).

*/

pub mod abstractions;
pub mod core;
pub mod error;
pub mod parser;

// Re-exported so the `critical!`/`error!`/`warning!`/`info!`/`debug!`/`trace!`
// macros can find `$crate::abstractions::log::init_logger` under the shorter
// `$crate::log` path.
pub use abstractions::log;

pub use error::ParseError;
