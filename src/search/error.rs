use crate::search::search_engines::SearchEngineName;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up a search. Running out of frontier is not
/// one of them: an unsolvable problem is reported through
/// [`SearchResult`](crate::search::SearchResult).
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("the {0} search engine requires a heuristic")]
    MissingHeuristic(SearchEngineName),
    #[error("failed to read search config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse search config: {0}")]
    ParseConfig(#[from] toml::de::Error),
    #[error("invalid time limit {value:?}: {source}")]
    InvalidTimeLimit {
        value: String,
        #[source]
        source: humantime::DurationError,
    },
}

/// Reasons a plan fails [`validate`](crate::search::validate).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("action {action} at step {step} is not applicable in state {state}")]
    NotApplicable {
        step: usize,
        action: String,
        state: String,
    },
    #[error("plan does not reach a goal state, final state is {state}")]
    GoalNotReached { state: String },
}
