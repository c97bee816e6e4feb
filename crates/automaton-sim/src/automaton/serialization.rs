//! Persisted form of an automaton, as saved by the diagram editor.
//!
//! ```json
//! {
//!   "kind": "nfa",
//!   "states": [{ "id": "p0", "isStart": true, "isAccepting": false, "x": 100, "y": 100 }],
//!   "transitions": [{ "from": "p0", "to": "p0", "symbol": "" }],
//!   "startState": "p0"
//! }
//! ```
//!
//! An empty `symbol` is epsilon. Presentation attributes such as `x`/`y` are
//! ignored on load and not written back.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::automaton::model::{Automaton, Kind, Transition};
use crate::automaton::state::State;
use crate::automaton::symbol::Symbol;
use crate::error::FormatError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRecord {
    pub id: String,
    #[serde(default)]
    pub is_start: bool,
    #[serde(default, alias = "isAccept", alias = "isFinal")]
    pub is_accepting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub from: String,
    pub to: String,
    pub symbol: Symbol,
}

/// The record exchanged with external storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomatonRecord {
    #[serde(default, alias = "type")]
    pub kind: Kind,
    pub states: Vec<StateRecord>,
    #[serde(default)]
    pub transitions: Vec<TransitionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_state: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alphabet: Vec<Symbol>,
}

impl From<AutomatonRecord> for Automaton {
    fn from(record: AutomatonRecord) -> Self {
        Automaton {
            kind: record.kind,
            states: record
                .states
                .into_iter()
                .map(|s| State {
                    id: s.id,
                    is_start: s.is_start,
                    is_accepting: s.is_accepting,
                })
                .collect(),
            transitions: record
                .transitions
                .into_iter()
                .map(|t| Transition {
                    from: t.from,
                    to: t.to,
                    symbol: t.symbol,
                })
                .collect(),
            declared_start: record.start_state,
            alphabet: record.alphabet.into_iter().collect(),
        }
    }
}

impl From<&Automaton> for AutomatonRecord {
    fn from(automaton: &Automaton) -> Self {
        // Fall back to the flagged state so the record always names its start.
        let start_state = automaton.declared_start.clone().or_else(|| {
            automaton
                .states
                .iter()
                .find(|s| s.is_start)
                .map(|s| s.id.clone())
        });
        AutomatonRecord {
            kind: automaton.kind,
            states: automaton
                .states
                .iter()
                .map(|s| StateRecord {
                    id: s.id.clone(),
                    is_start: s.is_start,
                    is_accepting: s.is_accepting,
                })
                .collect(),
            transitions: automaton
                .transitions
                .iter()
                .map(|t| TransitionRecord {
                    from: t.from.clone(),
                    to: t.to.clone(),
                    symbol: t.symbol,
                })
                .collect(),
            start_state,
            alphabet: automaton.alphabet.iter().copied().collect(),
        }
    }
}

impl Automaton {
    /// Parse an automaton from its JSON record. The result is not validated.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        let record: AutomatonRecord = serde_json::from_str(json)?;
        Ok(record.into())
    }

    /// Read an automaton record from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, FormatError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(&AutomatonRecord::from(self))?)
    }
}
