//! The [`Problem`] trait is the only thing a search engine knows about the
//! transition system it is searching. States and actions are opaque to the
//! engines; all they require is that states can be used as hash keys.

use std::{fmt::Debug, hash::Hash};

/// A state-space search problem.
///
/// Implementations must be pure: calling any of these methods twice with the
/// same arguments has to give the same answer, and no method may mutate
/// shared state. Engines call [`Problem::is_goal`] and [`Problem::actions`]
/// as often as they like, so expensive computations should be memoised by
/// the problem itself (see
/// [`DungeonProblem`](crate::problems::DungeonProblem) for an example).
pub trait Problem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// The actions applicable in `state`. The order is part of the contract:
    /// engines break ties between equally good nodes by the order in which
    /// they were generated, which follows this enumeration.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` in `state`. Only called with
    /// actions returned by [`Problem::actions`] for the same state.
    fn successor(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// The non-negative cost of applying `action` in `state`. Only used by
    /// cost-aware engines.
    fn cost(&self, _state: &Self::State, _action: &Self::Action) -> f64 {
        1.
    }
}
