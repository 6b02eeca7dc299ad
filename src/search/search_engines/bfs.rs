//! Breadth first search

use crate::search::{
    search_engines::{SearchEngine, SearchResult},
    ExploredSet, FifoFrontier, Frontier, HeuristicValue, Problem, SearchSpace, SearchStatistics,
    TerminationCondition,
};
use std::collections::HashSet;
use tracing::{info, trace};

/// Breadth first search. Returns a plan with the fewest actions.
///
/// A successor is only pushed if its state is neither expanded nor already
/// waiting in the frontier, so every state enters the frontier at most once.
/// Frontier membership is tracked with a hash set next to the queue.
#[derive(Debug, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P> SearchEngine<P> for BFS
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
        let mut frontier = FifoFrontier::new();
        let mut in_frontier: HashSet<P::State> = HashSet::new();
        let mut explored = ExploredSet::new();
        let mut search_space = SearchSpace::new();

        in_frontier.insert(initial_state.clone());
        let root_node = search_space.insert_root_node(initial_state);
        root_node.open((0.).into(), (0.).into());
        frontier.push(root_node.get_node_id(), HeuristicValue::from(0.));
        statistics.increment_generated_nodes();

        while let Some(node_id) = frontier.pop() {
            let node = search_space.get_node(node_id);
            let state = node.get_state().clone();
            let g_value = node.get_g();
            in_frontier.remove(&state);

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
                if explored.contains(&successor) || in_frontier.contains(&successor) {
                    statistics.increment_pruned_nodes();
                    continue;
                }

                let child_g = g_value + problem.cost(&state, &action);
                in_frontier.insert(successor.clone());
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{problems::GraphProblem, test_utils::*};
    use petgraph::algo::dijkstra;

    fn bfs(problem: &GraphProblem) -> (SearchResult<String>, SearchStatistics) {
        BFS::new().search(problem, &mut TerminationCondition::unbounded())
    }

    #[test]
    fn bfs_finds_fewest_actions() {
        init_tracing();
        let problem = GraphProblem::from_text(UNIT_MAZE_GRAPH_TEXT).unwrap();
        let (result, _) = bfs(&problem);
        assert_eq!(
            result.into_solution().unwrap(),
            vec!["E".to_string(), "F".to_string(), "G".to_string()]
        );
    }

    #[test]
    fn bfs_matches_reference_layer_distance() {
        let problem = GraphProblem::from_text(UNIT_MAZE_GRAPH_TEXT).unwrap();
        let goal = problem.node("G").unwrap();
        let distances = dijkstra(
            problem.graph(),
            problem.initial_state(),
            Some(goal),
            |_| 1usize,
        );

        let (result, _) = bfs(&problem);
        assert_eq!(result.plan().unwrap().len(), distances[&goal]);
    }

    #[test]
    fn bfs_never_expands_a_state_twice() {
        let problem = GraphProblem::from_text(DISCONNECTED_GRAPH_TEXT).unwrap();
        let (result, statistics) = bfs(&problem);
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        assert_eq!(statistics.expanded_nodes(), 4);
        assert_eq!(statistics.generated_nodes(), 4);
        assert_eq!(statistics.skipped_nodes(), 0);
    }

    #[test]
    fn bfs_does_not_queue_a_state_twice() {
        let problem = GraphProblem::new(
            "S",
            &["Z"],
            &[
                ("S", "A", 1.),
                ("S", "B", 1.),
                ("A", "C", 1.),
                ("B", "C", 1.),
                ("C", "D", 1.),
            ],
        )
        .unwrap();
        let (result, statistics) = bfs(&problem);
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        // C is still queued when B reaches it.
        assert_eq!(statistics.expanded_nodes(), 5);
        assert_eq!(statistics.generated_nodes(), 5);
        assert_eq!(statistics.pruned_nodes(), 1);
    }

    #[test]
    fn bfs_stops_at_expansion_limit() {
        let problem = GraphProblem::from_text(UNIT_MAZE_GRAPH_TEXT).unwrap();
        let (result, statistics) = BFS::new().search(
            &problem,
            &mut TerminationCondition::with_max_expansions(2),
        );
        assert_eq!(result, SearchResult::ExpansionLimitExceeded);
        assert_eq!(statistics.expanded_nodes(), 2);
    }
}
