/*!

The driver consumes parsed commands in source order: `axiom`
declarations are appended to the axiom list, `param` commands update the
shared [`RuntimeConfig`], and `prove` obligations are handed to the search
engine, with the resulting transcript rendered line by line as it is found.

*/

use std::time::{Duration, Instant};

use crate::abstractions::IString;
use crate::core::axiom::Axiom;
use crate::core::config::RuntimeConfig;
use crate::core::printer::canonical_text;
use crate::core::search::{find_path, SearchOutcome};
use crate::core::term::TermRef;

/// A single parsed command, in the order the driver must apply them.
#[derive(Clone, Debug)]
pub enum Command {
  Axiom { name: IString, lhs: TermRef, rhs: TermRef },
  Param(ParamUpdate),
  Prove { lhs: TermRef, rhs: TermRef },
}

/// A `param` command's effect on [`RuntimeConfig`]. Parameter updates take
/// effect for subsequent commands only.
#[derive(Copy, Clone, Debug)]
pub enum ParamUpdate {
  MaxSearchDepth(u32),
  MaxTreeSize(usize),
  UseProofsAsAxioms(bool),
}

/// Owns the axiom list and the current `RuntimeConfig` across a script run.
/// Duplicate axiom names are permitted; the search uses every entry
/// regardless of name collisions.
#[derive(Default)]
pub struct Driver {
  pub axioms: Vec<Axiom>,
  pub config: RuntimeConfig,
}

impl Driver {
  pub fn new() -> Self {
    Driver::default()
  }

  /// Applies a single command, returning the rendered transcript for `prove`
  /// commands (`None` for `axiom`/`param`, which produce no transcript).
  pub fn run_command(&mut self, command: Command) -> Option<String> {
    match command {
      Command::Axiom { name, lhs, rhs } => {
        crate::debug!(1, "installed axiom {} : {} = {}", name, canonical_text(&lhs), canonical_text(&rhs));
        self.axioms.push(Axiom::new(name, lhs, rhs));
        None
      }

      Command::Param(update) => {
        crate::debug!(1, "param update: {:?}", update);
        match update {
          ParamUpdate::MaxSearchDepth(depth) => self.config.max_search_depth = depth,
          ParamUpdate::MaxTreeSize(size) => self.config.max_tree_size = size,
          ParamUpdate::UseProofsAsAxioms(flag) => self.config.use_proofs_as_axioms = flag,
        }
        None
      }

      Command::Prove { lhs, rhs } => Some(self.prove(&lhs, &rhs)),
    }
  }

  /// Runs every command of a parsed script in order, returning the
  /// transcript of each `prove` obligation encountered.
  pub fn run_script(&mut self, commands: Vec<Command>) -> Vec<String> {
    commands.into_iter().filter_map(|command| self.run_command(command)).collect()
  }

  fn prove(&mut self, lhs: &TermRef, rhs: &TermRef) -> String {
    let header = format!("Prove {} = {}...", canonical_text(lhs), canonical_text(rhs));
    let lhs_key = canonical_text(lhs);
    let rhs_key = canonical_text(rhs);

    if lhs_key == rhs_key {
      crate::info!(1, "proof trivial: endpoints already canonically equal");
      return format!("{}\nStatements are the same.", header);
    }

    let clock = Instant::now();
    let outcome = find_path(&self.axioms, lhs, rhs, self.config);
    let elapsed = clock.elapsed();

    let transcript = render_outcome(&header, &lhs_key, &outcome, self.config, elapsed);

    if let SearchOutcome::Found { .. } = &outcome {
      if self.config.use_proofs_as_axioms {
        let synthetic_name = IString::from(format!("proof of {} = {}", lhs_key, rhs_key));
        crate::info!(1, "promoting successful proof to axiom {}", synthetic_name);
        self.axioms.push(Axiom::new(synthetic_name, lhs.clone(), rhs.clone()));
      }
    }

    transcript
  }
}

fn render_outcome(header: &str, start_text: &str, outcome: &SearchOutcome, config: RuntimeConfig, elapsed: Duration) -> String {
  let mut lines = vec![header.to_string(), start_text.to_string()];

  let summary = match outcome {
    SearchOutcome::Found { steps, states_checked } => {
      for (name, term) in steps {
        lines.push(format!(" = {}  w/ {}", canonical_text(term), name));
      }
      format!("Done in {:.3} seconds after checking {} states.", elapsed.as_secs_f64(), states_checked)
    }
    SearchOutcome::NotFound { states_checked } => format!(
      "No path found within {} steps after checking {} states in {:.3} seconds.",
      config.max_search_depth,
      states_checked,
      elapsed.as_secs_f64()
    ),
  };

  lines.push(summary);
  lines.join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::term::{Op, Term};
  use ustr::Ustr;

  fn com_add() -> Axiom {
    let a = Ustr::from("a");
    let b = Ustr::from("b");
    Axiom::new(
      Ustr::from("com_add"),
      Term::binary(Op::Or, Term::var(a), Term::var(b)),
      Term::binary(Op::Or, Term::var(b), Term::var(a)),
    )
  }

  fn ide_add() -> Axiom {
    let a = Ustr::from("a");
    Axiom::new(
      Ustr::from("ide_add"),
      Term::binary(Op::Or, Term::var(a), Term::prim(false)),
      Term::var(a),
    )
  }

  #[test]
  fn identity_statement_reports_same() {
    let mut driver = Driver::new();
    let one = Term::prim(true);
    let transcript = driver.run_command(Command::Prove { lhs: one.clone(), rhs: one }).unwrap();
    assert_eq!(transcript, "Prove 1 = 1...\nStatements are the same.");
  }

  #[test]
  fn commutative_then_identity_two_step_transcript() {
    let mut driver = Driver::new();
    driver.axioms.push(com_add());
    driver.axioms.push(ide_add());
    let start = Term::binary(Op::Or, Term::prim(false), Term::prim(true));
    let target = Term::prim(true);
    let transcript = driver.run_command(Command::Prove { lhs: start, rhs: target }).unwrap();
    let mut lines = transcript.lines();
    assert_eq!(lines.next().unwrap(), "Prove (+ 0 1) = 1...");
    assert_eq!(lines.next().unwrap(), "(+ 0 1)");
    assert_eq!(lines.next().unwrap(), " = (+ 1 0)  w/ com_add");
    assert_eq!(lines.next().unwrap(), " = 1  w/ ide_add");
    assert!(lines.next().unwrap().starts_with("Done in "));
  }

  #[test]
  fn param_command_updates_config_for_subsequent_commands() {
    let mut driver = Driver::new();
    assert!(driver.run_command(Command::Param(ParamUpdate::MaxSearchDepth(3))).is_none());
    assert_eq!(driver.config.max_search_depth, 3);
  }

  #[test]
  fn unreachable_under_tight_bound_reports_failure() {
    let mut driver = Driver::new();
    driver.run_command(Command::Param(ParamUpdate::MaxSearchDepth(3)));
    driver.axioms.push(com_add());
    let x = Ustr::from("x");
    let start = Term::prim(true);
    let target = Term::binary(Op::Or, Term::var(x), Term::not(Term::var(x)));
    let transcript = driver.run_command(Command::Prove { lhs: start, rhs: target }).unwrap();
    assert!(transcript.contains("No path found within 3 steps after checking"));
  }

  #[test]
  fn proofs_promoted_to_axioms_solve_in_one_step() {
    let mut driver = Driver::new();
    driver.run_command(Command::Param(ParamUpdate::UseProofsAsAxioms(true)));
    driver.axioms.push(com_add());
    driver.axioms.push(ide_add());

    // The first run takes the two-step com_add/ide_add path.
    let start = Term::binary(Op::Or, Term::prim(false), Term::prim(true));
    let target = Term::prim(true);
    let first = driver.run_command(Command::Prove { lhs: start.clone(), rhs: target.clone() }).unwrap();
    assert_eq!(first.lines().filter(|l| l.starts_with(" = ")).count(), 2);

    // Re-proving the identical obligation now resolves in a single step,
    // via the synthetic axiom the first proof installed: that one-step path
    // is strictly shorter than any path through the original axioms, so
    // BFS reaches it before exploring deeper.
    let second = driver.run_command(Command::Prove { lhs: start, rhs: target }).unwrap();
    assert!(second.contains("w/ proof of (+ 0 1) = 1"));
    assert_eq!(second.lines().filter(|l| l.starts_with(" = ")).count(), 1);
  }
}
