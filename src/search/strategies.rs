//! Plain entry points for the five strategies. Each call owns its own
//! frontier, explored set and node arena, and returns the actions of the
//! plan found or `None` when no goal was reached.

use crate::search::{
    search_engines::{AStar, SearchEngine, BFS, DFS, GBFS, UCS},
    Heuristic, Problem, TerminationCondition,
};

/// The actions leading from the initial state to a goal, empty when the
/// initial state is already one, or `None` when no goal is reachable.
pub type Solution<A> = Option<Vec<A>>;

fn run<P, E>(mut engine: E, problem: &P, initial_state: P::State) -> Solution<P::Action>
where
    P: Problem,
    E: SearchEngine<P>,
{
    let (result, _) =
        engine.search_from(problem, initial_state, &mut TerminationCondition::unbounded());
    result.into_solution()
}

pub fn breadth_first_search<P: Problem>(
    problem: &P,
    initial_state: P::State,
) -> Solution<P::Action> {
    run(BFS::new(), problem, initial_state)
}

pub fn depth_first_search<P: Problem>(
    problem: &P,
    initial_state: P::State,
) -> Solution<P::Action> {
    run(DFS::new(), problem, initial_state)
}

pub fn uniform_cost_search<P: Problem>(
    problem: &P,
    initial_state: P::State,
) -> Solution<P::Action> {
    run(UCS::new(), problem, initial_state)
}

/// Optimal as long as `heuristic` never overestimates.
pub fn a_star_search<P, H>(
    problem: &P,
    initial_state: P::State,
    heuristic: &H,
) -> Solution<P::Action>
where
    P: Problem,
    H: Heuristic<P>,
{
    run(AStar::new(heuristic), problem, initial_state)
}

pub fn greedy_best_first_search<P, H>(
    problem: &P,
    initial_state: P::State,
    heuristic: &H,
) -> Solution<P::Action>
where
    P: Problem,
    H: Heuristic<P>,
{
    run(GBFS::new(heuristic), problem, initial_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        problems::{maze_distance_heuristic, DungeonProblem, GraphProblem, ParkingProblem},
        search::{validate, Plan, ZeroHeuristic},
        test_utils::*,
    };
    use itertools::Itertools;
    use std::thread;

    type GraphSolution = Solution<String>;

    fn all_strategies(problem: &GraphProblem) -> Vec<GraphSolution> {
        let start = problem.initial_state();
        let heuristic = GraphProblem::table_heuristic;
        vec![
            breadth_first_search(problem, start),
            depth_first_search(problem, start),
            uniform_cost_search(problem, start),
            a_star_search(problem, start, &heuristic),
            greedy_best_first_search(problem, start, &heuristic),
        ]
    }

    fn names(actions: &[&str]) -> GraphSolution {
        Some(actions.iter().map(|name| name.to_string()).collect())
    }

    #[test]
    fn every_strategy_reports_unreachable_goals() {
        init_tracing();
        let problem = GraphProblem::from_text(DISCONNECTED_GRAPH_TEXT).unwrap();
        assert!(all_strategies(&problem).iter().all(Option::is_none));
    }

    #[test]
    fn every_strategy_expands_reachable_states_once() {
        let problem = GraphProblem::from_text(DISCONNECTED_GRAPH_TEXT).unwrap();
        let heuristic = ZeroHeuristic::new();
        let mut engines: Vec<Box<dyn SearchEngine<GraphProblem> + '_>> = vec![
            Box::new(BFS::new()),
            Box::new(DFS::new()),
            Box::new(UCS::new()),
            Box::new(AStar::<GraphProblem>::new(&heuristic)),
            Box::new(GBFS::<GraphProblem>::new(&heuristic)),
        ];
        for engine in engines.iter_mut() {
            let (result, statistics) =
                engine.search(&problem, &mut TerminationCondition::unbounded());
            assert!(!result.is_success());
            assert_eq!(statistics.expanded_nodes(), 4);
        }
    }

    #[test]
    fn initial_goal_gives_empty_plan() {
        let problem = GraphProblem::from_text(DIAMOND_GRAPH_TEXT).unwrap();
        let goal = problem.node("G").unwrap();
        for solution in [
            breadth_first_search(&problem, goal),
            depth_first_search(&problem, goal),
            uniform_cost_search(&problem, goal),
            a_star_search(&problem, goal, &ZeroHeuristic::new()),
            greedy_best_first_search(&problem, goal, &ZeroHeuristic::new()),
        ] {
            assert_eq!(solution, Some(vec![]));
        }
    }

    #[test]
    fn repeated_searches_are_identical() {
        for text in [
            DIAMOND_GRAPH_TEXT,
            TIE_BREAK_GRAPH_TEXT,
            GREEDY_TRAP_GRAPH_TEXT,
            UNIT_MAZE_GRAPH_TEXT,
        ] {
            let problem = GraphProblem::from_text(text).unwrap();
            assert_eq!(all_strategies(&problem), all_strategies(&problem));
        }
    }

    #[test]
    fn uniform_cost_keeps_the_earlier_of_two_equal_paths() {
        let problem = GraphProblem::from_text(TIE_BREAK_GRAPH_TEXT).unwrap();
        assert_eq!(
            uniform_cost_search(&problem, problem.initial_state()),
            names(&["A", "G"])
        );
        let problem = GraphProblem::from_text(TIE_BREAK_REVERSED_GRAPH_TEXT).unwrap();
        assert_eq!(
            uniform_cost_search(&problem, problem.initial_state()),
            names(&["B", "G"])
        );
    }

    #[test]
    fn cost_aware_strategies_find_the_cheap_route() {
        let problem = GraphProblem::from_text(DIAMOND_GRAPH_TEXT).unwrap();
        let start = problem.initial_state();
        assert_eq!(uniform_cost_search(&problem, start), names(&["B", "G"]));
        assert_eq!(
            a_star_search(&problem, start, &ZeroHeuristic::new()),
            names(&["B", "G"])
        );
    }

    #[test]
    fn greedy_and_a_star_diverge_on_a_misleading_estimate() {
        let problem = GraphProblem::from_text(GREEDY_TRAP_GRAPH_TEXT).unwrap();
        let start = problem.initial_state();
        let heuristic = GraphProblem::table_heuristic;

        let greedy = greedy_best_first_search(&problem, start, &heuristic).unwrap();
        let optimal = a_star_search(&problem, start, &heuristic).unwrap();
        assert_eq!(greedy, names(&["A", "G"]).unwrap());
        assert_eq!(optimal, names(&["B", "C", "G"]).unwrap());
        assert!(
            Plan::new(optimal).total_cost(&problem, &start)
                < Plan::new(greedy).total_cost(&problem, &start)
        );
    }

    #[test]
    fn breadth_first_is_never_longer_than_depth_first() {
        let problem = GraphProblem::from_text(UNIT_MAZE_GRAPH_TEXT).unwrap();
        let start = problem.initial_state();
        let bfs = breadth_first_search(&problem, start).unwrap();
        let dfs = depth_first_search(&problem, start).unwrap();
        assert!(bfs.len() <= dfs.len());
        assert_eq!(bfs.iter().join(" "), "E F G");
    }

    #[test]
    fn solutions_replay_to_a_goal() {
        let problem = ParkingProblem::from_text(PARKING_TWO_LANES_TEXT).unwrap();
        let start = problem.initial_state();
        for solution in [
            breadth_first_search(&problem, start.clone()),
            depth_first_search(&problem, start.clone()),
            uniform_cost_search(&problem, start.clone()),
        ] {
            let plan = Plan::new(solution.unwrap());
            assert_eq!(validate(&problem, &start, &plan), Ok(()));
        }

        let problem = DungeonProblem::from_text(DUNGEON_SMALL_TEXT).unwrap();
        let start = problem.initial_state();
        let solution = a_star_search(&problem, start.clone(), &maze_distance_heuristic).unwrap();
        assert_eq!(solution.len(), 10);
        assert_eq!(validate(&problem, &start, &Plan::new(solution)), Ok(()));
    }

    #[test]
    fn searches_run_in_parallel_without_interference() {
        let problem = GraphProblem::from_text(GREEDY_TRAP_GRAPH_TEXT).unwrap();
        let sequential = all_strategies(&problem);
        let parallel = thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| scope.spawn(|| all_strategies(&problem)))
                .collect_vec();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect_vec()
        });
        for solutions in parallel {
            assert_eq!(solutions, sequential);
        }
    }
}
