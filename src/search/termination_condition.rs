use crate::search::SearchResult;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// External bounds on a search. The engines themselves never give up; a
/// caller that needs a deadline hands one of these to the engine, which
/// checks it before every expansion.
#[derive(Debug)]
pub struct TerminationCondition {
    max_expansions: Option<usize>,
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_log_time: Instant,
}

impl Default for TerminationCondition {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl TerminationCondition {
    pub fn new(
        max_expansions: Option<usize>,
        time_limit: Option<Duration>,
        memory_limit_mb: Option<usize>,
    ) -> Self {
        info!(
            max_expansions = max_expansions,
            time_limit = time_limit.map(|d| d.as_secs_f64()),
            memory_limit_mb = memory_limit_mb,
        );
        let mut condition = Self {
            max_expansions,
            time_limit,
            memory_limit_mb,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        };
        if memory_limit_mb.is_some() {
            condition.sample_memory_usage();
        }
        condition
    }

    /// No limits at all, the search runs until it finds a goal or exhausts
    /// the frontier.
    pub fn unbounded() -> Self {
        Self {
            max_expansions: None,
            time_limit: None,
            memory_limit_mb: None,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_log_time: Instant::now(),
        }
    }

    pub fn with_max_expansions(max_expansions: usize) -> Self {
        Self::new(Some(max_expansions), None, None)
    }

    pub fn with_time_limit(time_limit: Duration) -> Self {
        Self::new(None, Some(time_limit), None)
    }

    pub fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    pub fn memory_limit_mb(&self) -> Option<usize> {
        self.memory_limit_mb
    }

    pub fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed() > Duration::from_secs(10) {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn sample_memory_usage(&mut self) -> Option<usize> {
        let memory_usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(memory_usage);
        memory_usage
    }

    pub fn log(&mut self) {
        let memory_usage = self.sample_memory_usage();
        let time_elapsed = self.start_time.elapsed();
        info!(
            memory_usage_mb = memory_usage,
            time_elapsed = time_elapsed.as_secs_f64(),
        );
    }

    pub fn finalise(&mut self) {
        let time_elapsed = self.start_time.elapsed();
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = time_elapsed.as_secs_f64(),
        );
    }

    /// Check the limits given the number of nodes expanded so far. Returns
    /// the result the search should stop with, if any.
    pub fn should_terminate<A>(&self, expanded_nodes: usize) -> Option<SearchResult<A>> {
        if let Some(max_expansions) = self.max_expansions {
            if expanded_nodes >= max_expansions {
                return Some(SearchResult::ExpansionLimitExceeded);
            }
        }
        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() >= time_limit {
                return Some(SearchResult::TimeLimitExceeded);
            }
        }
        if let Some(memory_limit_mb) = self.memory_limit_mb {
            if let Some(peak_usage) = self.peak_memory_usage_mb {
                if peak_usage > memory_limit_mb {
                    return Some(SearchResult::MemoryLimitExceeded);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_never_terminates() {
        let condition = TerminationCondition::unbounded();
        assert_eq!(condition.should_terminate::<()>(usize::MAX - 1), None);
    }

    #[test]
    fn expansion_limit_is_inclusive() {
        let condition = TerminationCondition::with_max_expansions(3);
        assert_eq!(condition.should_terminate::<()>(2), None);
        assert_eq!(
            condition.should_terminate::<()>(3),
            Some(SearchResult::ExpansionLimitExceeded)
        );
    }

    #[test]
    fn zero_time_limit_terminates_immediately() {
        let condition = TerminationCondition::with_time_limit(Duration::ZERO);
        assert_eq!(
            condition.should_terminate::<()>(0),
            Some(SearchResult::TimeLimitExceeded)
        );
    }

    #[test]
    fn generous_memory_limit_does_not_terminate() {
        let mut condition = TerminationCondition::new(None, None, Some(usize::MAX));
        condition.log();
        assert_eq!(condition.should_terminate::<()>(0), None);
        condition.finalise();
    }
}
