mod astar;
mod best_first;
mod bfs;
mod dfs;
mod gbfs;
mod search_engine;
mod ucs;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use gbfs::GBFS;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use ucs::UCS;
