#![warn(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

pub mod problems;
pub mod search;

#[cfg(test)]
mod test_utils;

pub use search::{
    a_star_search, breadth_first_search, depth_first_search, greedy_best_first_search,
    uniform_cost_search, Heuristic, Plan, Problem, SearchConfig, SearchEngine, SearchEngineName,
    SearchResult, Solution, TerminationCondition,
};
