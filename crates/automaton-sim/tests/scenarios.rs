//! End-to-end runs over small hand-drawn automata.

use automaton_sim::{
    Automaton, DfaStep, Kind, SimulationConfig, SimulationError, Simulator, State, StateSet,
    Termination, ValidationError, simulate, simulate_batch, simulate_dfa, simulate_nfa,
    subset_construction,
};

fn step(from: &str, symbol: char, to: &str) -> DfaStep {
    DfaStep {
        from: from.to_string(),
        symbol,
        to: to.to_string(),
    }
}

#[test]
fn single_transition_dfa() {
    let mut dfa = Automaton::deterministic();
    dfa.add_state(State::new("q0").start())
        .add_state(State::new("q1").accepting())
        .add_transition("q0", 'a', "q1");

    let run = simulate_dfa(&dfa, "a").unwrap();
    assert!(run.accepted);
    assert_eq!(run.trace, vec![step("q0", 'a', "q1")]);

    let run = simulate_dfa(&dfa, "b").unwrap();
    assert!(!run.accepted);
    assert!(run.trace.is_empty());
    assert_eq!(
        run.termination,
        Termination::Dead {
            position: 0,
            symbol: 'b'
        }
    );

    let run = simulate_dfa(&dfa, "").unwrap();
    assert!(!run.accepted);
    assert_eq!(run.termination, Termination::Exhausted);
}

#[test]
fn self_loop_dfa() {
    let mut dfa = Automaton::deterministic();
    dfa.add_state(State::new("q0").start())
        .add_state(State::new("q1").accepting())
        .add_transition("q0", 'a', "q0")
        .add_transition("q0", 'b', "q1");

    let run = simulate_dfa(&dfa, "aaab").unwrap();
    assert!(run.accepted);
    assert_eq!(run.trace.len(), 4);
    assert_eq!(run.path(), vec!["q0", "q0", "q0", "q0", "q1"]);

    let run = simulate_dfa(&dfa, "aaa").unwrap();
    assert!(!run.accepted);
    assert_eq!(run.termination, Termination::Exhausted);
    assert_eq!(run.final_state(), "q0");
}

#[test]
fn epsilon_nfa() {
    let mut nfa = Automaton::nondeterministic();
    nfa.add_state(State::new("p0").start())
        .add_state(State::new("p1"))
        .add_state(State::new("p2").accepting())
        .add_transition("p0", 'a', "p1")
        .add_epsilon_transition("p0", "p2");

    let run = simulate_nfa(&nfa, "").unwrap();
    assert!(run.accepted);
    assert_eq!(run.trace[0].states, vec!["p0", "p2"]);

    let run = simulate_nfa(&nfa, "a").unwrap();
    assert!(!run.accepted);
    assert_eq!(run.final_states(), ["p1"]);
}

#[test]
fn branching_nfa() {
    let mut nfa = Automaton::nondeterministic();
    nfa.add_state(State::new("p0").start())
        .add_state(State::new("p1").accepting())
        .add_transition("p0", 'a', "p0")
        .add_transition("p0", 'a', "p1");

    let run = simulate_nfa(&nfa, "a").unwrap();
    assert!(run.accepted);

    let run = simulate_nfa(&nfa, "aa").unwrap();
    assert!(run.accepted);
    let sets: Vec<Vec<String>> = run.trace.iter().map(|s| s.states.clone()).collect();
    assert_eq!(sets, vec![vec!["p0"], vec!["p0", "p1"], vec!["p0", "p1"]]);
    assert_eq!(
        run.trace.iter().map(|s| s.index).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
}

#[test]
fn conflicting_dfa_is_rejected() {
    let mut dfa = Automaton::deterministic();
    dfa.add_state(State::new("q0").start())
        .add_state(State::new("q1"))
        .add_state(State::new("q2"))
        .add_transition("q0", 'a', "q1")
        .add_transition("q0", 'a', "q2");

    assert!(matches!(
        dfa.validate(),
        Err(ValidationError::NonDeterministicConflict { ref first, ref second, .. })
            if first == "q1" && second == "q2"
    ));
    assert!(matches!(
        simulate_dfa(&dfa, "a"),
        Err(SimulationError::Invalid(ValidationError::NonDeterministicConflict { .. }))
    ));
}

#[test]
fn epsilon_cycle_terminates() {
    let mut nfa = Automaton::nondeterministic();
    nfa.add_state(State::new("p0").start())
        .add_state(State::new("p1"))
        .add_epsilon_transition("p0", "p1")
        .add_epsilon_transition("p1", "p0");

    let valid = nfa.validate().unwrap();
    let start = StateSet::singleton(valid.start(), valid.num_states());
    assert_eq!(valid.names_of(&valid.epsilon_closure(&start)), vec!["p0", "p1"]);

    let run = simulate_nfa(&nfa, "").unwrap();
    assert!(!run.accepted);
}

#[test]
fn two_start_states_are_rejected() {
    let mut nfa = Automaton::nondeterministic();
    nfa.add_state(State::new("p0").start())
        .add_state(State::new("p1").start());
    assert_eq!(
        nfa.validate().unwrap_err(),
        ValidationError::MultipleStartStates {
            first: "p0".into(),
            second: "p1".into(),
        }
    );
}

#[test]
fn saved_diagram_runs_through_dispatch() {
    let json = r#"{
        "kind": "nfa",
        "states": [
            { "id": "q0", "isStart": true, "isAccepting": false },
            { "id": "q1", "isStart": false, "isAccepting": true }
        ],
        "transitions": [
            { "from": "q0", "to": "q1", "symbol": "a" },
            { "from": "q0", "to": "q1", "symbol": "" }
        ],
        "startState": "q0"
    }"#;
    let automaton = Automaton::from_json(json).unwrap();
    assert_eq!(automaton.kind(), Kind::Nondeterministic);

    let run = simulate(&automaton, "").unwrap();
    assert!(run.accepted());

    let results = simulate_batch(&automaton, ["", "a", "aa", "b"]).unwrap();
    let accepted: Vec<bool> = results.iter().map(|r| r.accepted).collect();
    assert_eq!(accepted, vec![true, true, false, false]);
}

#[test]
fn configured_simulator_keeps_full_trace() {
    let mut nfa = Automaton::nondeterministic();
    nfa.add_state(State::new("p0").start().accepting())
        .add_transition("p0", 'a', "p0");

    let simulator = Simulator::new(SimulationConfig {
        max_input_len: Some(4),
        halt_on_empty: false,
    });
    let run = simulator.simulate_nfa(&nfa, "bab").unwrap();
    assert!(!run.accepted);
    assert_eq!(run.trace.len(), 4);
    assert!(matches!(
        simulator.simulate_nfa(&nfa, "aaaaa"),
        Err(SimulationError::InputTooLong { len: 5, limit: 4 })
    ));
}

#[test]
fn determinized_nfa_accepts_same_strings() {
    // strings over {a, b} ending in "ab"
    let mut nfa = Automaton::nondeterministic();
    nfa.add_state(State::new("p0").start())
        .add_state(State::new("p1"))
        .add_state(State::new("p2").accepting())
        .add_transition("p0", 'a', "p0")
        .add_transition("p0", 'b', "p0")
        .add_transition("p0", 'a', "p1")
        .add_transition("p1", 'b', "p2");

    let dfa = subset_construction(&nfa.validate().unwrap());
    for input in ["", "a", "ab", "bab", "abb", "aab", "abab", "ba"] {
        assert_eq!(
            simulate_dfa(&dfa, input).unwrap().accepted,
            simulate_nfa(&nfa, input).unwrap().accepted,
            "disagreement on {input:?}"
        );
    }
    assert!(simulate_dfa(&dfa, "bbab").unwrap().accepted);
}
