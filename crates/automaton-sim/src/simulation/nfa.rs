//! Set-of-states execution for nondeterministic automata with epsilon moves.

use crate::automaton::{StateSet, Symbol, ValidAutomaton};
use crate::simulation::Termination;

/// The set of possible states after `index` symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfaStep {
    pub index: usize,
    /// The symbol consumed to reach this step; `None` for step 0.
    pub symbol: Option<char>,
    pub states: Vec<String>,
}

/// Verdict and per-symbol state sets of a nondeterministic run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfaRun {
    pub accepted: bool,
    /// Step 0 is the epsilon closure of the start state.
    pub trace: Vec<NfaStep>,
    pub termination: Termination,
}

impl NfaRun {
    /// States possible at the end of the run.
    pub fn final_states(&self) -> &[String] {
        self.trace
            .last()
            .map(|step| step.states.as_slice())
            .unwrap_or_default()
    }
}

/// Track every state the automaton could be in, closing over epsilon moves
/// after each symbol.
///
/// Once the set is empty no later symbol can revive it, so with
/// `halt_on_empty` the run stops there. Otherwise the trace records one
/// empty step per remaining symbol.
pub(crate) fn run(automaton: &ValidAutomaton, input: &[char], halt_on_empty: bool) -> NfaRun {
    let start = StateSet::singleton(automaton.start(), automaton.num_states());
    let mut current = automaton.epsilon_closure(&start);
    let mut trace = Vec::with_capacity(input.len() + 1);
    let mut termination = Termination::Exhausted;

    trace.push(NfaStep {
        index: 0,
        symbol: None,
        states: automaton.names_of(&current),
    });

    for (position, &symbol) in input.iter().enumerate() {
        let reached = automaton.step(&current, Symbol::Input(symbol));
        current = automaton.epsilon_closure(&reached);
        tracing::trace!(position, %symbol, states = ?current, "step");

        trace.push(NfaStep {
            index: position + 1,
            symbol: Some(symbol),
            states: automaton.names_of(&current),
        });

        if current.is_empty() {
            if termination == Termination::Exhausted {
                termination = Termination::Dead { position, symbol };
            }
            if halt_on_empty {
                break;
            }
        }
    }

    NfaRun {
        accepted: current.intersects(automaton.accepting()),
        trace,
        termination,
    }
}
