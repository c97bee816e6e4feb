//! Error types for validation, simulation, loading and configuration.
//!
//! Rejections are not errors: a run that dies on a missing transition or ends
//! in a non-accepting state is reported through the run result. These types
//! cover malformed automata, misuse of the API and bad external input.

use crate::automaton::{Kind, Symbol};

/// A structural invariant violated by an automaton.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("automaton has no start state")]
    NoStartState,

    #[error("multiple start states: `{first}` and `{second}`")]
    MultipleStartStates { first: String, second: String },

    #[error("declared start state `{declared}` does not match the state marked as start (`{flagged}`)")]
    StartStateMismatch { declared: String, flagged: String },

    #[error("state id `{id}` is used more than once")]
    DuplicateState { id: String },

    /// `missing` is whichever endpoint could not be resolved.
    #[error("transition #{index} (`{from}` -> `{to}`) references unknown state `{missing}`")]
    DanglingTransition {
        index: usize,
        from: String,
        to: String,
        missing: String,
    },

    #[error("state `{state}` has two transitions on `{symbol}` (to `{first}` and `{second}`)")]
    NonDeterministicConflict {
        state: String,
        symbol: Symbol,
        first: String,
        second: String,
    },

    #[error("transition #{index} (`{from}` -> `{to}`) is an epsilon move in a deterministic automaton")]
    EpsilonInDfa {
        index: usize,
        from: String,
        to: String,
    },

    #[error("the alphabet must not contain epsilon")]
    EpsilonInAlphabet,
}

/// A simulator was handed an automaton of the other kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{expected} simulator cannot run a {found} automaton")]
pub struct WrongSimulatorError {
    pub expected: Kind,
    pub found: Kind,
}

/// Reasons a simulation refuses to start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid automaton: {0}")]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    WrongSimulator(#[from] WrongSimulatorError),

    #[error("input of {len} symbols exceeds the limit of {limit}")]
    InputTooLong { len: usize, limit: usize },
}

/// Failures reading or writing the persisted automaton record.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("failed to read automaton record: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed automaton record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("transition label `{label}` is neither empty nor a single symbol")]
    InvalidSymbol { label: String },
}

/// Failures loading or validating a [`SimulationConfig`](crate::SimulationConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value `{value}` for {key}")]
    InvalidValue { key: String, value: String },

    #[error("max_input_len must be at least 1")]
    ZeroInputLimit,
}
