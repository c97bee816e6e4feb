//! State types for automata.

use fixedbitset::FixedBitSet;
use std::fmt;

/// Dense index of a state inside a validated automaton.
pub type StateId = u32;

/// A state as drawn by the user: a unique name plus its start/accepting flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub id: String,
    pub is_start: bool,
    pub is_accepting: bool,
}

impl State {
    /// A plain state that is neither start nor accepting.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_start: false,
            is_accepting: false,
        }
    }

    /// Mark this state as the start state.
    pub fn start(mut self) -> Self {
        self.is_start = true;
        self
    }

    /// Mark this state as accepting.
    pub fn accepting(mut self) -> Self {
        self.is_accepting = true;
        self
    }
}

/// A set of states over a fixed universe of `0..capacity` state ids.
///
/// Every set built for one automaton shares the same capacity, so equality
/// and hashing depend only on membership.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StateSet {
    bits: FixedBitSet,
}

impl StateSet {
    /// An empty set sized for `capacity` states.
    pub fn empty(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// A set holding only `state`.
    pub fn singleton(state: StateId, capacity: usize) -> Self {
        let mut set = Self::empty(capacity);
        set.insert(state);
        set
    }

    /// Insert a state, returning `true` if it was not already present.
    pub fn insert(&mut self, state: StateId) -> bool {
        let idx = state as usize;
        if idx >= self.bits.len() {
            self.bits.grow(idx + 1);
        }
        !self.bits.put(idx)
    }

    /// Check if `state` is a member.
    pub fn contains(&self, state: StateId) -> bool {
        self.bits.contains(state as usize)
    }

    /// Check if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Members in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.ones().map(|i| i as StateId)
    }

    /// Union `other` into this set.
    pub fn union_with(&mut self, other: &StateSet) {
        if other.bits.len() > self.bits.len() {
            self.bits.grow(other.bits.len());
        }
        self.bits.union_with(&other.bits);
    }

    /// Whether the two sets share at least one state.
    pub fn intersects(&self, other: &StateSet) -> bool {
        self.bits.intersection(&other.bits).next().is_some()
    }

    /// Whether every member of this set is also in `other`.
    pub fn is_subset(&self, other: &StateSet) -> bool {
        self.iter().all(|state| other.contains(state))
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_builder() {
        let state = State::new("q0").start().accepting();
        assert_eq!(state.id, "q0");
        assert!(state.is_start);
        assert!(state.is_accepting);
        assert!(!State::new("q1").is_start);
    }

    #[test]
    fn test_insert_reports_novelty() {
        let mut set = StateSet::empty(4);
        assert!(set.is_empty());
        assert!(set.insert(2));
        assert!(!set.insert(2));
        assert_eq!(set.len(), 1);
        assert!(set.contains(2));
        assert!(!set.contains(3));
        assert!(!set.contains(40));
    }

    #[test]
    fn test_union_and_intersects() {
        let mut left = StateSet::singleton(0, 4);
        let right = StateSet::singleton(3, 4);
        assert!(!left.intersects(&right));

        left.union_with(&right);
        assert_eq!(left.iter().collect::<Vec<_>>(), vec![0, 3]);
        assert!(left.intersects(&right));
        assert!(right.is_subset(&left));
        assert!(!left.is_subset(&right));
    }

    #[test]
    fn test_equal_sets_compare_equal() {
        let mut a = StateSet::empty(5);
        a.insert(1);
        a.insert(4);
        let mut b = StateSet::empty(5);
        b.insert(4);
        b.insert(1);
        assert_eq!(a, b);
        assert_eq!(format!("{a:?}"), "{1, 4}");
    }
}
