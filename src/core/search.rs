/*!

The search engine runs a breadth-first search from a start term to a target
term under depth/size bounds, producing a step-labeled path.

Search state — frontier, visited set, parent links, and per-node depth — is
modeled here as a single map keyed by canonical text, each entry holding the
state's own term, its BFS depth, and (unless it is the start node) the axiom
name and predecessor key that produced it. Frontier, visited set, and parent
map are naturally separate concerns, but collapsing them into one map avoids
keeping three structures in lockstep, and both shapes discard the same
information at the end of a proof obligation.

*/

use std::collections::VecDeque;

use crate::abstractions::{HashMap, IString};
use crate::core::axiom::Axiom;
use crate::core::config::RuntimeConfig;
use crate::core::fresh::FreshNameGenerator;
use crate::core::printer::canonical_text;
use crate::core::rewrite::all_steps;
use crate::core::term::TermRef;

struct NodeInfo {
  term: TermRef,
  depth: u32,
  /// `(axiom name, predecessor's canonical key)`, absent for the start node.
  parent: Option<(IString, String)>,
}

/// The result of a single `find_path` search. `states_checked` is the
/// number of distinct canonical states the engine ever marked visited.
pub enum SearchOutcome {
  Found {
    /// Ordered `(axiom name, resulting term)` pairs; entry `i`'s term is the
    /// state after applying entry `i`'s axiom to entry `i - 1`'s term (or to
    /// `start`, for `i == 0`).
    steps: Vec<(IString, TermRef)>,
    states_checked: usize,
  },
  NotFound {
    states_checked: usize,
  },
}

/// Breadth-first search for a shortest rewrite path from `start` to `target`
/// under `axioms` and the bounds in `config`.
///
/// Algorithm: initialize the frontier with `start`; repeatedly dequeue
/// the oldest frontier node; if its key matches the target's key, reconstruct
/// and return the path; otherwise, unless its size or depth already exceeds
/// the configured bound, enumerate its successors via [`all_steps`] and
/// enqueue every one whose key is not yet visited. Fails when the frontier
/// empties.
pub fn find_path(axioms: &[Axiom], start: &TermRef, target: &TermRef, config: RuntimeConfig) -> SearchOutcome {
  let mut nodes: HashMap<String, NodeInfo> = HashMap::new();
  let mut frontier: VecDeque<String> = VecDeque::new();
  let mut generator = FreshNameGenerator::new();

  let start_key = canonical_text(start);
  let target_key = canonical_text(target);

  nodes.insert(
    start_key.clone(),
    NodeInfo {
      term: start.clone(),
      depth: 0,
      parent: None,
    },
  );
  frontier.push_back(start_key);

  while let Some(key) = frontier.pop_front() {
    let depth = nodes[&key].depth;
    crate::trace!(0, "dequeued state {:?} at depth {}", key, depth);

    if key == target_key {
      return SearchOutcome::Found {
        steps: reconstruct_path(&nodes, &key),
        states_checked: nodes.len(),
      };
    }

    if key.len() > config.max_tree_size || depth >= config.max_search_depth {
      // Abandoned: the node remains visited, but is never expanded.
      continue;
    }

    let subject = nodes[&key].term.clone();
    for (axiom_name, successor) in all_steps(&subject, axioms, &mut generator) {
      let successor_key = canonical_text(&successor);
      if !nodes.contains_key(&successor_key) {
        nodes.insert(
          successor_key.clone(),
          NodeInfo {
            term: successor,
            depth: depth + 1,
            parent: Some((axiom_name, key.clone())),
          },
        );
        frontier.push_back(successor_key);
      }
    }
  }

  crate::info!(1, "no path found after checking {} states", nodes.len());
  SearchOutcome::NotFound {
    states_checked: nodes.len(),
  }
}

fn reconstruct_path(nodes: &HashMap<String, NodeInfo>, matched_key: &str) -> Vec<(IString, TermRef)> {
  let mut steps = Vec::new();
  let mut current = matched_key.to_string();

  loop {
    let info = &nodes[&current];
    match &info.parent {
      Some((axiom_name, predecessor_key)) => {
        steps.push((*axiom_name, info.term.clone()));
        current = predecessor_key.clone();
      }
      None => break,
    }
  }

  steps.reverse();
  steps
}
