//! Powerset construction: an equivalent deterministic automaton for any
//! validated automaton.

use indexmap::IndexMap;

use crate::automaton::{Automaton, State, StateSet, Symbol, ValidAutomaton};

/// Convert `automaton` into a deterministic automaton accepting the same
/// language.
///
/// Each resulting state stands for the epsilon-closed set of original states
/// it is named after (`{p0,p2}`). Only sets reachable from the start closure
/// are built, and the empty set is left out: where it would appear the
/// result simply has no transition.
pub fn subset_construction(automaton: &ValidAutomaton) -> Automaton {
    let mut names: IndexMap<StateSet, String> = IndexMap::new();
    let mut dfa = Automaton::deterministic();
    for &symbol in automaton.alphabet() {
        dfa.declare_symbol(symbol);
    }

    let start = StateSet::singleton(automaton.start(), automaton.num_states());
    let initial = automaton.epsilon_closure(&start);
    add_subset(&mut dfa, &mut names, automaton, &initial, true);

    let mut worklist = vec![initial];
    while let Some(current) = worklist.pop() {
        let from = names[&current].clone();

        for &symbol in automaton.alphabet() {
            let reached = automaton.step(&current, Symbol::Input(symbol));
            let next = automaton.epsilon_closure(&reached);
            if next.is_empty() {
                continue;
            }

            let to = match names.get(&next) {
                Some(existing) => existing.clone(),
                None => {
                    let name = add_subset(&mut dfa, &mut names, automaton, &next, false);
                    worklist.push(next);
                    name
                }
            };
            dfa.add_transition(from.clone(), symbol, to);
        }
    }

    tracing::debug!(
        source_states = automaton.num_states(),
        subset_states = names.len(),
        "subset construction finished"
    );
    dfa
}

fn add_subset(
    dfa: &mut Automaton,
    names: &mut IndexMap<StateSet, String>,
    automaton: &ValidAutomaton,
    subset: &StateSet,
    is_start: bool,
) -> String {
    let name = format!("{{{}}}", automaton.names_of(subset).join(","));
    let mut state = State::new(name.clone());
    state.is_start = is_start;
    state.is_accepting = subset.intersects(automaton.accepting());
    dfa.add_state(state);
    names.insert(subset.clone(), name.clone());
    name
}
