use crate::search::{
    search_engines::{SearchEngine, SearchEngineName},
    Heuristic, Problem, SearchError, TerminationCondition,
};
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

/// Which engine to run and how far it may go, as read from a TOML file:
///
/// ```toml
/// engine = "astar"
/// max-expansions = 100000
/// time-limit = "30s"
/// memory-limit-mb = 2048
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SearchConfig {
    pub engine: SearchEngineName,
    #[serde(default)]
    pub max_expansions: Option<usize>,
    /// Human readable duration such as `"1m 30s"`.
    #[serde(default)]
    pub time_limit: Option<String>,
    #[serde(default)]
    pub memory_limit_mb: Option<usize>,
}

impl SearchConfig {
    pub fn new(engine: SearchEngineName) -> Self {
        Self {
            engine,
            max_expansions: None,
            time_limit: None,
            memory_limit_mb: None,
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, SearchError> {
        let config: SearchConfig = toml::from_str(text)?;
        // Reject a bad duration now rather than when the search starts.
        config.time_limit()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, SearchError> {
        let text = std::fs::read_to_string(path).map_err(|source| SearchError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn time_limit(&self) -> Result<Option<Duration>, SearchError> {
        self.time_limit
            .as_deref()
            .map(|value| {
                humantime::parse_duration(value).map_err(|source| SearchError::InvalidTimeLimit {
                    value: value.to_string(),
                    source,
                })
            })
            .transpose()
    }

    pub fn termination_condition(&self) -> Result<TerminationCondition, SearchError> {
        Ok(TerminationCondition::new(
            self.max_expansions,
            self.time_limit()?,
            self.memory_limit_mb,
        ))
    }

    /// Create the configured engine. Informed engines fail without a
    /// heuristic.
    pub fn create_engine<'h, P>(
        &self,
        heuristic: Option<&'h dyn Heuristic<P>>,
    ) -> Result<Box<dyn SearchEngine<P> + 'h>, SearchError>
    where
        P: Problem + 'h,
    {
        self.engine.create(heuristic)
    }
}
