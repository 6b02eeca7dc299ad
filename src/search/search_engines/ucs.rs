//! Uniform cost search

use crate::search::{
    search_engines::{
        best_first::{best_first_search, PriorityKey},
        SearchEngine, SearchResult,
    },
    Problem, SearchStatistics, TerminationCondition, ZeroHeuristic,
};

/// Uniform cost search. Expands nodes in order of accumulated path cost and
/// returns a cheapest plan, provided all action costs are non-negative.
#[derive(Debug, Default)]
pub struct UCS {}

impl UCS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P> SearchEngine<P> for UCS
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
            &ZeroHeuristic::new(),
            PriorityKey::PathCost,
            termination,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        problems::{GraphProblem, ParkingProblem},
        search::validate,
        test_utils::*,
    };

    fn ucs<P: Problem>(problem: &P) -> (SearchResult<P::Action>, SearchStatistics) {
        UCS::new().search(problem, &mut TerminationCondition::unbounded())
    }

    #[test]
    fn ucs_takes_the_cheap_side_of_the_diamond() {
        init_tracing();
        let problem = GraphProblem::from_text(DIAMOND_GRAPH_TEXT).unwrap();
        let (result, _) = ucs(&problem);
        assert_eq!(
            result.into_solution().unwrap(),
            vec!["B".to_string(), "G".to_string()]
        );
    }

    #[test]
    fn ucs_breaks_ties_by_generation_order() {
        let problem = GraphProblem::from_text(TIE_BREAK_GRAPH_TEXT).unwrap();
        let (result, statistics) = ucs(&problem);
        assert_eq!(
            result.into_solution().unwrap(),
            vec!["A".to_string(), "G".to_string()]
        );
        // The second route to G costs the same and is discarded.
        assert_eq!(statistics.pruned_nodes(), 1);

        let problem = GraphProblem::from_text(TIE_BREAK_REVERSED_GRAPH_TEXT).unwrap();
        let (result, _) = ucs(&problem);
        assert_eq!(
            result.into_solution().unwrap(),
            vec!["B".to_string(), "G".to_string()]
        );
    }

    #[test]
    fn ucs_replaces_dominated_frontier_entries() {
        let problem = GraphProblem::from_text(DETOUR_GRAPH_TEXT).unwrap();
        let (result, statistics) = ucs(&problem);
        assert_eq!(
            result.into_solution().unwrap(),
            vec!["A".to_string(), "B".to_string(), "G".to_string()]
        );
        // The expensive direct edge to B leaves a stale entry behind.
        assert_eq!(statistics.skipped_nodes(), 1);
    }

    #[test]
    fn ucs_parks_cars_at_minimum_cost() {
        let problem = ParkingProblem::from_text(PARKING_TWO_LANES_TEXT).unwrap();
        let start = problem.initial_state();
        let (result, _) = ucs(&problem);
        let plan = result.plan().unwrap();
        assert_eq!(plan.total_cost(&problem, &start), 8.);
        assert_eq!(validate(&problem, &start, plan), Ok(()));
    }

    #[test]
    fn ucs_expands_each_reachable_state_once() {
        let problem = GraphProblem::from_text(DISCONNECTED_GRAPH_TEXT).unwrap();
        let (result, statistics) = ucs(&problem);
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        assert_eq!(statistics.expanded_nodes(), 4);
        assert_eq!(statistics.evaluated_nodes(), 0);
    }
}
