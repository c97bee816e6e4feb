//! Single-state walk for deterministic automata.

use crate::automaton::{Symbol, ValidAutomaton};
use crate::simulation::Termination;

/// One transition taken during a deterministic run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfaStep {
    pub from: String,
    pub symbol: char,
    pub to: String,
}

/// Verdict and trace of a deterministic run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfaRun {
    pub accepted: bool,
    pub start: String,
    /// Transitions taken, one per consumed symbol.
    pub trace: Vec<DfaStep>,
    pub termination: Termination,
}

impl DfaRun {
    /// Visited states in order, beginning with the start state.
    pub fn path(&self) -> Vec<&str> {
        std::iter::once(self.start.as_str())
            .chain(self.trace.iter().map(|step| step.to.as_str()))
            .collect()
    }

    /// The state the run ended in (where it died, for a dead run).
    pub fn final_state(&self) -> &str {
        self.trace.last().map_or(self.start.as_str(), |step| step.to.as_str())
    }
}

/// Walk `input` from the start state. The first matching transition is
/// followed; a missing transition ends the run as a rejection.
pub(crate) fn run(automaton: &ValidAutomaton, input: &[char]) -> DfaRun {
    let mut current = automaton.start();
    let mut trace = Vec::with_capacity(input.len());

    for (position, &symbol) in input.iter().enumerate() {
        let Some(&next) = automaton.destinations(current, Symbol::Input(symbol)).first() else {
            tracing::trace!(
                position,
                %symbol,
                state = automaton.state_name(current),
                "no transition, run is dead"
            );
            return DfaRun {
                accepted: false,
                start: automaton.state_name(automaton.start()).to_string(),
                trace,
                termination: Termination::Dead { position, symbol },
            };
        };

        tracing::trace!(
            position,
            %symbol,
            from = automaton.state_name(current),
            to = automaton.state_name(next),
            "step"
        );
        trace.push(DfaStep {
            from: automaton.state_name(current).to_string(),
            symbol,
            to: automaton.state_name(next).to_string(),
        });
        current = next;
    }

    DfaRun {
        accepted: automaton.is_accepting(current),
        start: automaton.state_name(automaton.start()).to_string(),
        trace,
        termination: Termination::Exhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{Automaton, State};

    fn ends_in_b() -> ValidAutomaton {
        let mut automaton = Automaton::deterministic();
        automaton
            .add_state(State::new("q0").start())
            .add_state(State::new("q1").accepting())
            .add_transition("q0", 'a', "q0")
            .add_transition("q0", 'b', "q1");
        automaton.validate().unwrap()
    }

    fn chars(input: &str) -> Vec<char> {
        input.chars().collect()
    }

    #[test]
    fn test_accepting_walk() {
        let run = run(&ends_in_b(), &chars("aab"));
        assert!(run.accepted);
        assert_eq!(run.termination, Termination::Exhausted);
        assert_eq!(run.path(), vec!["q0", "q0", "q0", "q1"]);
        assert_eq!(run.final_state(), "q1");
    }

    #[test]
    fn test_dead_on_missing_transition() {
        let run = run(&ends_in_b(), &chars("abab"));
        assert!(!run.accepted);
        assert_eq!(run.trace.len(), 2);
        assert_eq!(
            run.termination,
            Termination::Dead {
                position: 2,
                symbol: 'a'
            }
        );
        assert_eq!(run.final_state(), "q1");
    }

    #[test]
    fn test_empty_input() {
        let run = run(&ends_in_b(), &[]);
        assert!(!run.accepted);
        assert!(run.trace.is_empty());
        assert_eq!(run.path(), vec!["q0"]);
    }
}
