//! The expansion loop shared by the engines that order their frontier by a
//! numeric key: uniform cost search, A* and greedy best-first search.

use crate::search::{
    search_engines::SearchResult, CostMap, ExploredSet, Frontier, Heuristic, HeuristicValue,
    PriorityFrontier, Problem, SearchSpace, SearchStatistics, TerminationCondition,
};
use tracing::{info, trace};

/// What a node is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PriorityKey {
    /// g, the accumulated path cost
    PathCost,
    /// g + h
    PathCostPlusHeuristic,
    /// h alone
    Heuristic,
}

impl PriorityKey {
    fn uses_heuristic(&self) -> bool {
        !matches!(self, PriorityKey::PathCost)
    }

    fn key(&self, g: HeuristicValue, h: HeuristicValue) -> HeuristicValue {
        match self {
            PriorityKey::PathCost => g,
            PriorityKey::PathCostPlusHeuristic => g + h,
            PriorityKey::Heuristic => h,
        }
    }
}

/// Run a best-first search ordered by `priority_key`.
///
/// Every generated successor whose state has not been expanded yet is keyed
/// and compared against the best key recorded for its state; it is only
/// pushed if the new key is strictly lower. Popped nodes whose state has
/// been expanded in the meantime are stale and skipped.
pub(crate) fn best_first_search<P>(
    problem: &P,
    initial_state: P::State,
    heuristic: &dyn Heuristic<P>,
    priority_key: PriorityKey,
    termination: &mut TerminationCondition,
) -> (SearchResult<P::Action>, SearchStatistics)
where
    P: Problem,
{
    let mut statistics = SearchStatistics::new();
    let mut frontier = PriorityFrontier::new();
    let mut explored = ExploredSet::new();
    let mut best_keys = CostMap::new();
    let mut search_space = SearchSpace::new();

    let evaluate = |state: &P::State, statistics: &mut SearchStatistics| {
        if priority_key.uses_heuristic() {
            statistics.increment_evaluated_nodes();
            heuristic.evaluate(problem, state)
        } else {
            HeuristicValue::from(0.)
        }
    };

    let initial_h = evaluate(&initial_state, &mut statistics);
    let initial_key = priority_key.key((0.).into(), initial_h);
    if priority_key.uses_heuristic() {
        info!(initial_heuristic_value = initial_h.into_inner());
    }
    best_keys.record_if_better(&initial_state, initial_key);
    let root_node = search_space.insert_root_node(initial_state);
    root_node.open((0.).into(), initial_h);
    frontier.push(root_node.get_node_id(), initial_key);
    statistics.increment_generated_nodes();

    while let Some(node_id) = frontier.pop() {
        let node = search_space.get_node(node_id);
        if explored.contains(node.get_state()) {
            statistics.increment_skipped_nodes();
            continue;
        }
        let state = node.get_state().clone();
        let g_value = node.get_g();
        let h_value = node.get_h();

        if problem.is_goal(&state) {
            let plan = search_space.extract_plan(node_id);
            info!(
                plan_length = plan.len(),
                plan_cost = g_value.into_inner(),
                "goal found"
            );
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

        trace!(
            ?state,
            g = g_value.into_inner(),
            h = h_value.into_inner(),
            "expanding"
        );
        explored.insert(state.clone());
        statistics.increment_expanded_nodes();
        if priority_key.uses_heuristic() {
            statistics.register_heuristic_value(h_value);
        }

        let actions = problem.actions(&state);
        statistics.increment_generated_actions(actions.len());
        for action in actions {
            let successor = problem.successor(&state, &action);
            if explored.contains(&successor) {
                statistics.increment_pruned_nodes();
                continue;
            }

            let child_g = g_value + problem.cost(&state, &action);
            let child_h = evaluate(&successor, &mut statistics);
            let child_key = priority_key.key(child_g, child_h);
            if !best_keys.record_if_better(&successor, child_key) {
                statistics.increment_pruned_nodes();
                continue;
            }

            let child_node = search_space.insert_node(successor, action, node_id);
            child_node.open(child_g, child_h);
            frontier.push(child_node.get_node_id(), child_key);
            statistics.increment_generated_nodes();
        }
        statistics.observe_frontier_size(frontier.len());
    }

    info!("frontier exhausted, no plan exists");
    statistics.finalise_search();
    termination.finalise();
    (SearchResult::ProvablyUnsolvable, statistics)
}
