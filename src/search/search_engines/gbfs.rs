use crate::search::{
    search_engines::{
        best_first::{best_first_search, PriorityKey},
        SearchEngine, SearchResult,
    },
    Heuristic, Problem, SearchStatistics, TerminationCondition,
};
use std::fmt;

/// Greedy best first search, ordered by the heuristic value alone. Fast but
/// gives no guarantee on plan cost.
pub struct GBFS<'h, P>
where
    P: Problem + ?Sized,
{
    heuristic: &'h dyn Heuristic<P>,
}

impl<'h, P> GBFS<'h, P>
where
    P: Problem,
{
    pub fn new(heuristic: &'h dyn Heuristic<P>) -> Self {
        Self { heuristic }
    }
}

impl<P> fmt::Debug for GBFS<'_, P>
where
    P: Problem + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GBFS").finish_non_exhaustive()
    }
}

impl<'h, P> SearchEngine<P> for GBFS<'h, P>
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
            PriorityKey::Heuristic,
            termination,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        problems::{strong_heuristic, DungeonProblem, GraphProblem},
        search::{validate, ZeroHeuristic},
        test_utils::*,
    };

    #[test]
    fn gbfs_follows_the_heuristic_into_the_trap() {
        init_tracing();
        let problem = GraphProblem::from_text(GREEDY_TRAP_GRAPH_TEXT).unwrap();
        let heuristic = GraphProblem::table_heuristic;
        let start = problem.initial_state();
        let (result, statistics) = GBFS::<GraphProblem>::new(&heuristic)
            .search(&problem, &mut TerminationCondition::unbounded());
        let plan = result.plan().unwrap();
        assert_eq!(plan.steps(), &["A".to_string(), "G".to_string()]);
        assert_eq!(plan.total_cost(&problem, &start), 11.);
        assert_eq!(statistics.expanded_nodes(), 2);
        assert_eq!(statistics.best_heuristic_value().into_inner(), 1.);
    }

    #[test]
    fn gbfs_with_zero_heuristic_prefers_earlier_generation() {
        let problem = GraphProblem::from_text(TIE_BREAK_GRAPH_TEXT).unwrap();
        let heuristic = ZeroHeuristic::new();
        let (result, _) = GBFS::<GraphProblem>::new(&heuristic)
            .search(&problem, &mut TerminationCondition::unbounded());
        assert_eq!(
            result.into_solution().unwrap(),
            vec!["A".to_string(), "G".to_string()]
        );
    }

    #[test]
    fn gbfs_collects_every_coin() {
        let problem = DungeonProblem::from_text(DUNGEON_SMALL_TEXT).unwrap();
        let start = problem.initial_state();
        let (result, _) = GBFS::<DungeonProblem>::new(&strong_heuristic)
            .search(&problem, &mut TerminationCondition::unbounded());
        assert_eq!(validate(&problem, &start, result.plan().unwrap()), Ok(()));
    }

    #[test]
    fn debug_output_skips_the_heuristic() {
        let heuristic = ZeroHeuristic::new();
        let engine = GBFS::<GraphProblem>::new(&heuristic);
        assert_eq!(format!("{:?}", engine), "GBFS { .. }");
    }
}
