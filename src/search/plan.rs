//! A plan is a sequence of actions that can be executed to achieve a goal. This
//! module provides the [`Plan`] struct, which represents a plan.

use crate::search::Problem;
use itertools::Itertools;
use std::{
    fmt::Debug,
    ops::{Deref, DerefMut},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    steps: Vec<A>,
}

impl<A> Plan<A> {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<A>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[A] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<A> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total cost of executing the plan from `initial_state`. The plan is
    /// replayed through [`Problem::successor`], so the states along the way
    /// are recomputed rather than trusted.
    pub fn total_cost<P>(&self, problem: &P, initial_state: &P::State) -> f64
    where
        P: Problem<Action = A>,
    {
        let mut state = initial_state.clone();
        let mut cost = 0.;
        for action in &self.steps {
            cost += problem.cost(&state, action);
            state = problem.successor(&state, action);
        }
        cost
    }

    /// One-line rendering of the steps, using their debug representation.
    pub fn describe(&self) -> String
    where
        A: Debug,
    {
        self.steps
            .iter()
            .map(|action| format!("{:?}", action))
            .join(" ")
    }
}

impl<A> From<Vec<A>> for Plan<A> {
    fn from(steps: Vec<A>) -> Self {
        Self::new(steps)
    }
}

impl<A> IntoIterator for Plan<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<A> Deref for Plan<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl<A> DerefMut for Plan<A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.steps
    }
}
