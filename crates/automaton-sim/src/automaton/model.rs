//! The editable automaton: states, labeled transitions and an alphabet.
//!
//! An [`Automaton`] is what a builder UI or a loader assembles. It may be
//! malformed; [`Automaton::validate`](crate::Automaton::validate) checks the
//! structural invariants and produces the indexed form used for simulation.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::automaton::state::State;
use crate::automaton::symbol::{EPSILON, Symbol};

/// Which simulation algorithm (and which invariants) apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    #[default]
    #[serde(alias = "dfa")]
    Deterministic,
    #[serde(alias = "nfa")]
    Nondeterministic,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Deterministic => f.write_str("deterministic"),
            Kind::Nondeterministic => f.write_str("nondeterministic"),
        }
    }
}

/// A labeled edge between two states, referenced by state id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition {
    pub from: String,
    pub to: String,
    pub symbol: Symbol,
}

/// An editable automaton. Nothing is checked until [`Automaton::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Automaton {
    pub(crate) kind: Kind,
    pub(crate) states: Vec<State>,
    /// Insertion order is kept so lookups resolve ties the same way every run.
    pub(crate) transitions: Vec<Transition>,
    /// Start state named separately from the per-state flags, as saved diagrams do.
    pub(crate) declared_start: Option<String>,
    /// Symbols declared up front. Symbols used by transitions are added on validation.
    pub(crate) alphabet: IndexSet<Symbol>,
}

impl Automaton {
    /// Create an empty automaton of the given kind.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Create an empty deterministic automaton.
    pub fn deterministic() -> Self {
        Self::new(Kind::Deterministic)
    }

    /// Create an empty nondeterministic automaton.
    pub fn nondeterministic() -> Self {
        Self::new(Kind::Nondeterministic)
    }

    /// Add a state. Duplicate ids are accepted here and rejected by validation.
    pub fn add_state(&mut self, state: State) -> &mut Self {
        self.states.push(state);
        self
    }

    /// Add a transition from `from` to `to` on `symbol`.
    pub fn add_transition(
        &mut self,
        from: impl Into<String>,
        symbol: impl Into<Symbol>,
        to: impl Into<String>,
    ) -> &mut Self {
        self.transitions.push(Transition {
            from: from.into(),
            to: to.into(),
            symbol: symbol.into(),
        });
        self
    }

    /// Add an epsilon transition from `from` to `to`.
    pub fn add_epsilon_transition(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> &mut Self {
        self.add_transition(from, EPSILON, to)
    }

    /// Add a symbol to the declared alphabet.
    pub fn declare_symbol(&mut self, symbol: impl Into<Symbol>) -> &mut Self {
        self.alphabet.insert(symbol.into());
        self
    }

    /// Name the start state independently of the per-state `is_start` flags.
    pub fn set_declared_start(&mut self, id: impl Into<String>) -> &mut Self {
        self.declared_start = Some(id.into());
        self
    }

    /// The same states and transitions re-typed as `kind`.
    pub fn with_kind(&self, kind: Kind) -> Self {
        Self {
            kind,
            ..self.clone()
        }
    }

    /// Which simulator this automaton is meant for.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// States in insertion order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Transitions in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// The start state named apart from the state flags, if any.
    pub fn declared_start(&self) -> Option<&str> {
        self.declared_start.as_deref()
    }

    /// Symbols declared with [`Automaton::declare_symbol`].
    pub fn alphabet(&self) -> &IndexSet<Symbol> {
        &self.alphabet
    }

    /// Look up a state by id.
    pub fn state(&self, id: &str) -> Option<&State> {
        self.states.iter().find(|state| state.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_insertion_order() {
        let mut automaton = Automaton::nondeterministic();
        automaton
            .add_state(State::new("p0").start())
            .add_state(State::new("p1").accepting())
            .add_transition("p0", 'b', "p1")
            .add_transition("p0", 'a', "p1")
            .add_epsilon_transition("p1", "p0");

        let symbols: Vec<Symbol> = automaton.transitions().iter().map(|t| t.symbol).collect();
        assert_eq!(
            symbols,
            vec![Symbol::Input('b'), Symbol::Input('a'), Symbol::Epsilon]
        );
        assert_eq!(automaton.states().len(), 2);
        assert!(automaton.state("p1").is_some_and(|s| s.is_accepting));
        assert!(automaton.state("p9").is_none());
    }

    #[test]
    fn test_with_kind_retypes_only() {
        let mut automaton = Automaton::nondeterministic();
        automaton
            .add_state(State::new("q0").start())
            .add_transition("q0", 'a', "q0");

        let retyped = automaton.with_kind(Kind::Deterministic);
        assert_eq!(retyped.kind(), Kind::Deterministic);
        assert_eq!(retyped.transitions(), automaton.transitions());
        assert_eq!(automaton.kind(), Kind::Nondeterministic);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Kind::default(), Kind::Deterministic);
        assert_eq!(Kind::Nondeterministic.to_string(), "nondeterministic");
    }
}
