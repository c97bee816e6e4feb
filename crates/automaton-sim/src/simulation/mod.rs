//! Running automata against input strings.
//!
//! Each input character is one symbol. Simulation never mutates the
//! automaton, and a rejected input is a normal result rather than an error.
//! Errors are reserved for automata that fail validation, for handing an
//! automaton to the simulator of the other kind, and for inputs over the
//! configured length limit.

mod dfa;
mod nfa;
mod subset_construction;

pub use dfa::{DfaRun, DfaStep};
pub use nfa::{NfaRun, NfaStep};
pub use subset_construction::subset_construction;

use crate::automaton::{Automaton, Kind, ValidAutomaton};
use crate::config::SimulationConfig;
use crate::error::{SimulationError, WrongSimulatorError};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The whole input was read; the verdict depends on the final state(s).
    Exhausted,
    /// Reading `symbol` at `position` left no state to continue from: a
    /// missing transition for a deterministic run, an empty state set for a
    /// nondeterministic one. Always a rejection.
    Dead { position: usize, symbol: char },
}

/// Result of [`simulate`], shaped by the automaton's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    Deterministic(DfaRun),
    Nondeterministic(NfaRun),
}

impl Run {
    /// Whether the input was accepted.
    pub fn accepted(&self) -> bool {
        match self {
            Run::Deterministic(run) => run.accepted,
            Run::Nondeterministic(run) => run.accepted,
        }
    }

    /// How the run ended.
    pub fn termination(&self) -> Termination {
        match self {
            Run::Deterministic(run) => run.termination,
            Run::Nondeterministic(run) => run.termination,
        }
    }
}

/// Verdict for one input of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub input: String,
    pub accepted: bool,
}

/// Simulation entry point carrying the host's [`SimulationConfig`].
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// A simulator applying `config` to every run.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The settings this simulator runs with.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Validate a deterministic automaton and run it on `input`.
    pub fn simulate_dfa(
        &self,
        automaton: &Automaton,
        input: &str,
    ) -> Result<DfaRun, SimulationError> {
        expect_kind(Kind::Deterministic, automaton.kind())?;
        self.run_dfa(&automaton.validate()?, input)
    }

    /// Validate a nondeterministic automaton and run it on `input`.
    pub fn simulate_nfa(
        &self,
        automaton: &Automaton,
        input: &str,
    ) -> Result<NfaRun, SimulationError> {
        expect_kind(Kind::Nondeterministic, automaton.kind())?;
        self.run_nfa(&automaton.validate()?, input)
    }

    /// Validate `automaton` and run the simulator matching its kind.
    pub fn simulate(&self, automaton: &Automaton, input: &str) -> Result<Run, SimulationError> {
        self.run(&automaton.validate()?, input)
    }

    /// Validate once, then run every input in order.
    pub fn simulate_batch<I, S>(
        &self,
        automaton: &Automaton,
        inputs: I,
    ) -> Result<Vec<BatchResult>, SimulationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let valid = automaton.validate()?;
        inputs
            .into_iter()
            .map(|input| {
                let input = input.as_ref();
                Ok::<_, SimulationError>(BatchResult {
                    input: input.to_string(),
                    accepted: self.run(&valid, input)?.accepted(),
                })
            })
            .collect()
    }

    /// Run an already validated deterministic automaton.
    pub fn run_dfa(
        &self,
        automaton: &ValidAutomaton,
        input: &str,
    ) -> Result<DfaRun, SimulationError> {
        expect_kind(Kind::Deterministic, automaton.kind())?;
        let symbols = self.symbols(input)?;
        tracing::debug!(kind = %automaton.kind(), len = symbols.len(), "simulation started");
        let run = dfa::run(automaton, &symbols);
        tracing::debug!(
            accepted = run.accepted,
            steps = run.trace.len(),
            termination = ?run.termination,
            "simulation finished"
        );
        Ok(run)
    }

    /// Run an already validated nondeterministic automaton.
    pub fn run_nfa(
        &self,
        automaton: &ValidAutomaton,
        input: &str,
    ) -> Result<NfaRun, SimulationError> {
        expect_kind(Kind::Nondeterministic, automaton.kind())?;
        let symbols = self.symbols(input)?;
        tracing::debug!(kind = %automaton.kind(), len = symbols.len(), "simulation started");
        let run = nfa::run(automaton, &symbols, self.config.halt_on_empty);
        tracing::debug!(
            accepted = run.accepted,
            steps = run.trace.len(),
            termination = ?run.termination,
            "simulation finished"
        );
        Ok(run)
    }

    /// Run an already validated automaton with the simulator for its kind.
    pub fn run(&self, automaton: &ValidAutomaton, input: &str) -> Result<Run, SimulationError> {
        match automaton.kind() {
            Kind::Deterministic => self.run_dfa(automaton, input).map(Run::Deterministic),
            Kind::Nondeterministic => self.run_nfa(automaton, input).map(Run::Nondeterministic),
        }
    }

    fn symbols(&self, input: &str) -> Result<Vec<char>, SimulationError> {
        let symbols: Vec<char> = input.chars().collect();
        match self.config.max_input_len {
            Some(limit) if symbols.len() > limit => Err(SimulationError::InputTooLong {
                len: symbols.len(),
                limit,
            }),
            _ => Ok(symbols),
        }
    }
}

fn expect_kind(expected: Kind, found: Kind) -> Result<(), WrongSimulatorError> {
    if expected == found {
        Ok(())
    } else {
        Err(WrongSimulatorError { expected, found })
    }
}

/// [`Simulator::simulate_dfa`] with the default configuration.
pub fn simulate_dfa(automaton: &Automaton, input: &str) -> Result<DfaRun, SimulationError> {
    Simulator::default().simulate_dfa(automaton, input)
}

/// [`Simulator::simulate_nfa`] with the default configuration.
pub fn simulate_nfa(automaton: &Automaton, input: &str) -> Result<NfaRun, SimulationError> {
    Simulator::default().simulate_nfa(automaton, input)
}

/// [`Simulator::simulate`] with the default configuration.
pub fn simulate(automaton: &Automaton, input: &str) -> Result<Run, SimulationError> {
    Simulator::default().simulate(automaton, input)
}

/// [`Simulator::simulate_batch`] with the default configuration.
pub fn simulate_batch<I, S>(
    automaton: &Automaton,
    inputs: I,
) -> Result<Vec<BatchResult>, SimulationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Simulator::default().simulate_batch(automaton, inputs)
}
