//! Finite automaton validation and simulation.
//!
//! Build an [`Automaton`] (or load one from its JSON record), then hand it to
//! [`simulate_dfa`], [`simulate_nfa`] or the kind-dispatching [`simulate`].
//! Automata are validated before every run; a [`ValidAutomaton`] can also be
//! obtained once and reused through a [`Simulator`].
//!
//! ```
//! use automaton_sim::{Automaton, State, simulate_dfa};
//!
//! let mut dfa = Automaton::deterministic();
//! dfa.add_state(State::new("q0").start())
//!     .add_state(State::new("q1").accepting())
//!     .add_transition("q0", 'a', "q1");
//!
//! assert!(simulate_dfa(&dfa, "a").unwrap().accepted);
//! assert!(!simulate_dfa(&dfa, "b").unwrap().accepted);
//! ```

pub mod automaton;
pub mod config;
pub mod error;
pub mod simulation;

pub use automaton::{
    Automaton, AutomatonRecord, EPSILON, Kind, State, StateId, StateSet, Symbol, Transition,
    ValidAutomaton, validate,
};
pub use config::SimulationConfig;
pub use error::{ConfigError, FormatError, SimulationError, ValidationError, WrongSimulatorError};
pub use simulation::{
    BatchResult, DfaRun, DfaStep, NfaRun, NfaStep, Run, Simulator, Termination, simulate,
    simulate_batch, simulate_dfa, simulate_nfa, subset_construction,
};
