//! Finite automaton data model.
//!
//! This module provides:
//! - The editable [`Automaton`] with its states, transitions and alphabet
//! - Structural validation producing an indexed [`ValidAutomaton`]
//! - Epsilon closure over the validated transition index
//! - The JSON record used to persist automata

mod model;
mod serialization;
mod state;
mod symbol;
mod validate;

pub use model::{Automaton, Kind, Transition};
pub use serialization::{AutomatonRecord, StateRecord, TransitionRecord};
pub use state::{State, StateId, StateSet};
pub use symbol::{EPSILON, Symbol};
pub use validate::{ValidAutomaton, validate};
