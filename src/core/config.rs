/*!

`RuntimeConfig` is process-scoped state, mutated only by the driver when it
encounters a `param` command. The search engine receives a snapshot by
value and treats it as read-only for the duration of a
proof.

*/

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
  pub max_search_depth: u32,
  pub max_tree_size: usize,
  pub use_proofs_as_axioms: bool,
}

impl Default for RuntimeConfig {
  fn default() -> Self {
    RuntimeConfig {
      max_search_depth: 8,
      max_tree_size: 20,
      use_proofs_as_axioms: false,
    }
  }
}
