mod error;
mod explored;
mod frontier;
pub mod heuristics;
mod plan;
mod problem;
mod search_config;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
pub mod strategies;
mod termination_condition;
mod validate;

pub use error::{SearchError, ValidationError};
pub use explored::{CostMap, ExploredSet};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
pub use heuristics::{Heuristic, HeuristicValue, ZeroHeuristic};
pub use plan::Plan;
pub use problem::Problem;
pub use search_config::SearchConfig;
pub use search_engines::{SearchEngine, SearchEngineName, SearchResult};
pub use search_node::{NodeId, SearchNode, NO_NODE};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use strategies::{
    a_star_search, breadth_first_search, depth_first_search, greedy_best_first_search,
    uniform_cost_search, Solution,
};
pub use termination_condition::TerminationCondition;
pub use validate::validate;
