//! Depth first search

use crate::search::{
    search_engines::{SearchEngine, SearchResult},
    ExploredSet, Frontier, HeuristicValue, LifoFrontier, Problem, SearchSpace, SearchStatistics,
    TerminationCondition,
};
use tracing::{info, trace};

/// Depth first search. Returns the first plan found; no optimality guarantee.
///
/// Successors are pushed in enumeration order, so the last enumerated action
/// is explored first. A state may sit in the frontier several times; only
/// the first copy popped is expanded.
#[derive(Debug, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P> SearchEngine<P> for DFS
where
    P: Problem,
{
    fn search_from(
        &mut self,
        problem: &P,
        initial_state: P::State,
        termination: &mut TerminationCondition,
    ) -> (SearchResult<P::Action>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut frontier = LifoFrontier::new();
        let mut explored = ExploredSet::new();
        let mut search_space = SearchSpace::new();

        let root_node = search_space.insert_root_node(initial_state);
        root_node.open((0.).into(), (0.).into());
        frontier.push(root_node.get_node_id(), HeuristicValue::from(0.));
        statistics.increment_generated_nodes();

        while let Some(node_id) = frontier.pop() {
            let node = search_space.get_node(node_id);
            if explored.contains(node.get_state()) {
                statistics.increment_skipped_nodes();
                continue;
            }
            let state = node.get_state().clone();
            let g_value = node.get_g();

            if problem.is_goal(&state) {
                let plan = search_space.extract_plan(node_id);
                info!(plan_length = plan.len(), "goal found");
                statistics.finalise_search();
                termination.finalise();
                return (SearchResult::Success(plan), statistics);
            }

            termination.log_if_needed();
            if let Some(result) = termination.should_terminate(statistics.expanded_nodes()) {
                info!(?result, "search terminated early");
                statistics.finalise_search();
                termination.finalise();
                return (result, statistics);
            }

            trace!(?state, "expanding");
            explored.insert(state.clone());
            statistics.increment_expanded_nodes();

            let actions = problem.actions(&state);
            statistics.increment_generated_actions(actions.len());
            for action in actions {
                let successor = problem.successor(&state, &action);
                // Would be skipped when popped anyway.
                if explored.contains(&successor) {
                    statistics.increment_pruned_nodes();
                    continue;
                }

                let child_g = g_value + problem.cost(&state, &action);
                let child_node = search_space.insert_node(successor, action, node_id);
                child_node.open(child_g, (0.).into());
                frontier.push(child_node.get_node_id(), child_g);
                statistics.increment_generated_nodes();
            }
            statistics.observe_frontier_size(frontier.len());
        }

        info!("frontier exhausted, no plan exists");
        statistics.finalise_search();
        termination.finalise();
        (SearchResult::ProvablyUnsolvable, statistics)
    }
}
