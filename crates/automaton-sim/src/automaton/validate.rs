//! Structural validation and the indexed automaton it produces.

use indexmap::IndexSet;
use std::collections::HashMap;

use crate::automaton::model::{Automaton, Kind};
use crate::automaton::state::{StateId, StateSet};
use crate::automaton::symbol::{EPSILON, Symbol};
use crate::error::ValidationError;

/// An automaton whose invariants have been checked, with its transition
/// relation indexed by `(source, symbol)`.
///
/// States are renumbered densely in the order they were added, so state sets
/// iterate in that order too. A `ValidAutomaton` is never mutated; it can be
/// shared by any number of concurrent simulations.
#[derive(Debug, Clone)]
pub struct ValidAutomaton {
    kind: Kind,
    names: IndexSet<String>,
    start: StateId,
    accepting: StateSet,
    /// (source, symbol) -> destinations, in transition insertion order
    transitions: HashMap<(StateId, Symbol), Vec<StateId>>,
    /// Epsilon closure of each single state, indexed by `StateId`
    epsilon_closures: Vec<StateSet>,
    alphabet: IndexSet<char>,
}

/// Check every structural invariant of `automaton`.
///
/// Returns the first violation found, or the indexed automaton.
pub fn validate(automaton: &Automaton) -> Result<ValidAutomaton, ValidationError> {
    automaton.validate()
}

impl Automaton {
    /// Check every structural invariant and build the lookup index.
    ///
    /// Checks run in a fixed order (duplicate ids, start state, alphabet,
    /// then each transition in insertion order) and the first violation is
    /// returned.
    pub fn validate(&self) -> Result<ValidAutomaton, ValidationError> {
        let result = self.build_index();
        if let Err(err) = &result {
            tracing::debug!(kind = %self.kind, error = %err, "automaton rejected by validation");
        }
        result
    }

    fn build_index(&self) -> Result<ValidAutomaton, ValidationError> {
        let mut names: IndexSet<String> = IndexSet::with_capacity(self.states.len());
        for state in &self.states {
            if !names.insert(state.id.clone()) {
                return Err(ValidationError::DuplicateState {
                    id: state.id.clone(),
                });
            }
        }

        let start = self.resolve_start(&names)?;

        if self.alphabet.contains(&EPSILON) {
            return Err(ValidationError::EpsilonInAlphabet);
        }

        let capacity = names.len();
        let mut transitions: HashMap<(StateId, Symbol), Vec<StateId>> = HashMap::new();
        // For deterministic automata: first destination seen per (source, symbol)
        let mut first_seen: HashMap<(StateId, Symbol), StateId> = HashMap::new();
        let mut alphabet: IndexSet<char> =
            self.alphabet.iter().filter_map(|s| s.as_char()).collect();

        for (index, transition) in self.transitions.iter().enumerate() {
            let resolve = |id: &str| {
                names
                    .get_index_of(id)
                    .map(|idx| idx as StateId)
                    .ok_or_else(|| ValidationError::DanglingTransition {
                        index,
                        from: transition.from.clone(),
                        to: transition.to.clone(),
                        missing: id.to_string(),
                    })
            };
            let source = resolve(&transition.from)?;
            let destination = resolve(&transition.to)?;

            if self.kind == Kind::Deterministic {
                if transition.symbol.is_epsilon() {
                    return Err(ValidationError::EpsilonInDfa {
                        index,
                        from: transition.from.clone(),
                        to: transition.to.clone(),
                    });
                }
                if let Some(&previous) = first_seen.get(&(source, transition.symbol)) {
                    return Err(ValidationError::NonDeterministicConflict {
                        state: transition.from.clone(),
                        symbol: transition.symbol,
                        first: names[previous as usize].clone(),
                        second: transition.to.clone(),
                    });
                }
                first_seen.insert((source, transition.symbol), destination);
            }

            if let Some(c) = transition.symbol.as_char() {
                alphabet.insert(c);
            }
            let destinations = transitions.entry((source, transition.symbol)).or_default();
            if !destinations.contains(&destination) {
                destinations.push(destination);
            }
        }

        let mut accepting = StateSet::empty(capacity);
        for (idx, state) in self.states.iter().enumerate() {
            if state.is_accepting {
                accepting.insert(idx as StateId);
            }
        }

        let mut valid = ValidAutomaton {
            kind: self.kind,
            names,
            start,
            accepting,
            transitions,
            epsilon_closures: Vec::new(),
            alphabet,
        };
        let closures: Vec<StateSet> = (0..capacity as StateId)
            .map(|state| valid.closure_from(state))
            .collect();
        valid.epsilon_closures = closures;
        Ok(valid)
    }

    /// Exactly one start state, agreeing with the declared one if any.
    ///
    /// A declared start with no flagged state is accepted as the start; saved
    /// diagrams record the start only by name.
    fn resolve_start(&self, names: &IndexSet<String>) -> Result<StateId, ValidationError> {
        let mut flagged = self.states.iter().filter(|state| state.is_start);
        let first = flagged.next();
        if let (Some(first), Some(second)) = (first, flagged.next()) {
            return Err(ValidationError::MultipleStartStates {
                first: first.id.clone(),
                second: second.id.clone(),
            });
        }

        let start_name = match (first, self.declared_start.as_deref()) {
            (Some(flagged), Some(declared)) if flagged.id != declared => {
                return Err(ValidationError::StartStateMismatch {
                    declared: declared.to_string(),
                    flagged: flagged.id.clone(),
                });
            }
            (Some(flagged), _) => flagged.id.as_str(),
            (None, Some(declared)) => declared,
            (None, None) => return Err(ValidationError::NoStartState),
        };

        names
            .get_index_of(start_name)
            .map(|idx| idx as StateId)
            .ok_or(ValidationError::NoStartState)
    }
}

impl ValidAutomaton {
    /// Whether this automaton runs deterministically or over state sets.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Number of states; ids run from `0` to `num_states() - 1`.
    pub fn num_states(&self) -> usize {
        self.names.len()
    }

    /// The unique start state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// The set of accepting states.
    pub fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    /// Check if `state` is accepting.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(state)
    }

    /// Input symbols declared or used by any transition, declared ones first.
    pub fn alphabet(&self) -> &IndexSet<char> {
        &self.alphabet
    }

    /// Resolve a state name to its id.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.names.get_index_of(name).map(|idx| idx as StateId)
    }

    /// The name of `state`.
    ///
    /// # Panics
    /// If `state` does not belong to this automaton.
    pub fn state_name(&self, state: StateId) -> &str {
        &self.names[state as usize]
    }

    /// Build a set from state names; `None` if any name is unknown.
    pub fn state_set<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Option<StateSet> {
        let mut set = StateSet::empty(self.num_states());
        for name in names {
            set.insert(self.state_id(name)?);
        }
        Some(set)
    }

    /// Names of the members of `set`, in state order.
    pub fn names_of(&self, set: &StateSet) -> Vec<String> {
        set.iter().map(|s| self.state_name(s).to_string()).collect()
    }

    /// Destinations of `state` on exactly `symbol`, in insertion order.
    pub fn destinations(&self, state: StateId, symbol: Symbol) -> &[StateId] {
        self.transitions
            .get(&(state, symbol))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Destinations of the state named `state` on `symbol`, in insertion
    /// order. Unknown states have no transitions.
    pub fn transitions_from(&self, state: &str, symbol: Symbol) -> Vec<&str> {
        self.state_id(state)
            .map(|id| {
                self.destinations(id, symbol)
                    .iter()
                    .map(|&dest| self.state_name(dest))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The smallest superset of `states` closed under epsilon moves.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = StateSet::empty(self.num_states());
        for state in states.iter() {
            if let Some(cached) = self.epsilon_closures.get(state as usize) {
                closure.union_with(cached);
            }
        }
        closure
    }

    /// States reachable from `states` on `symbol`, without closing over epsilon.
    pub fn step(&self, states: &StateSet, symbol: Symbol) -> StateSet {
        let mut reached = StateSet::empty(self.num_states());
        for state in states.iter() {
            for &dest in self.destinations(state, symbol) {
                reached.insert(dest);
            }
        }
        reached
    }

    /// Epsilon closure of a single state by depth-first search. The visited
    /// check makes epsilon cycles terminate.
    fn closure_from(&self, state: StateId) -> StateSet {
        let mut closure = StateSet::empty(self.num_states());
        let mut stack = vec![state];

        while let Some(s) = stack.pop() {
            if !closure.insert(s) {
                continue;
            }
            for &dest in self.destinations(s, EPSILON) {
                if !closure.contains(dest) {
                    stack.push(dest);
                }
            }
        }

        closure
    }
}
