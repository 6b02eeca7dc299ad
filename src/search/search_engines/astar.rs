use crate::search::{
    search_engines::{
        best_first::{best_first_search, PriorityKey},
        SearchEngine, SearchResult,
    },
    Heuristic, Problem, SearchStatistics, TerminationCondition,
};
use std::fmt;

/// A* search, ordered by g + h. Returns a cheapest plan when the heuristic
/// is admissible.
///
/// The heuristic is evaluated once per generated successor, so a cache
/// belongs on the problem rather than in the heuristic.
pub struct AStar<'h, P>
where
    P: Problem + ?Sized,
{
    heuristic: &'h dyn Heuristic<P>,
}

impl<'h, P> AStar<'h, P>
where
    P: Problem,
{
    pub fn new(heuristic: &'h dyn Heuristic<P>) -> Self {
        Self { heuristic }
    }
}

impl<P> fmt::Debug for AStar<'_, P>
where
    P: Problem + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AStar").finish_non_exhaustive()
    }
}

impl<'h, P> SearchEngine<P> for AStar<'h, P>
where
    P: Problem,
{
    fn search_from(
        &mut self,
        problem: &P,
        initial_state: P::State,
        termination: &mut TerminationCondition,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        best_first_search(
            problem,
            initial_state,
            self.heuristic,
            PriorityKey::PathCostPlusHeuristic,
            termination,
        )
    }
}
