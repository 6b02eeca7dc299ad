//! Duplicate detection. [`ExploredSet`] remembers which states have been
//! expanded, [`CostMap`] remembers the best key under which each state has
//! been pushed onto a priority frontier.

use crate::search::HeuristicValue;
use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

/// The set of expanded (closed) states. A state is inserted once, when it is
/// expanded, and is never expanded again afterwards.
#[derive(Debug)]
pub struct ExploredSet<S> {
    states: HashSet<S>,
}

impl<S: Eq + Hash> Default for ExploredSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash> ExploredSet<S> {
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
        }
    }

    /// Mark `state` as expanded. Returns `false` if it already was.
    pub fn insert(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Best key seen so far for each generated state. Depending on the engine
/// the key is the path cost (uniform cost), the path cost plus heuristic (A*)
/// or the heuristic alone (greedy best-first).
#[derive(Debug)]
pub struct CostMap<S> {
    best: HashMap<S, HeuristicValue>,
}

impl<S: Eq + Hash + Clone> Default for CostMap<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash + Clone> CostMap<S> {
    pub fn new() -> Self {
        Self {
            best: HashMap::new(),
        }
    }

    /// Record `key` for `state` if the state has not been seen before or
    /// `key` is strictly better than the recorded one. Returns whether the
    /// key was recorded; equal keys are rejected.
    pub fn record_if_better(&mut self, state: &S, key: HeuristicValue) -> bool {
        match self.best.get_mut(state) {
            Some(best) if key >= *best => false,
            Some(best) => {
                *best = key;
                true
            }
            None => {
                self.best.insert(state.clone(), key);
                true
            }
        }
    }

    pub fn get(&self, state: &S) -> Option<HeuristicValue> {
        self.best.get(state).copied()
    }

    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
