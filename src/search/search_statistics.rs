use crate::search::HeuristicValue;
use ordered_float::Float;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of nodes pushed onto the frontier, including the root
    generated_nodes: usize,
    /// Number of successors discarded as duplicates or dominated
    pruned_nodes: usize,
    /// Number of popped nodes skipped because their state was already
    /// expanded
    skipped_nodes: usize,
    /// Number of heuristic evaluations
    evaluated_nodes: usize,
    /// Number of applicable actions generated
    generated_actions: usize,
    /// Largest frontier size observed after an expansion
    peak_frontier_size: usize,
    /// Best heuristic value found so far
    best_heuristic_value: HeuristicValue,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            pruned_nodes: 0,
            skipped_nodes: 0,
            evaluated_nodes: 0,
            generated_actions: 0,
            peak_frontier_size: 0,
            best_heuristic_value: HeuristicValue::infinity(),
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn register_heuristic_value(&mut self, heuristic_value: HeuristicValue) {
        if heuristic_value < self.best_heuristic_value {
            self.best_heuristic_value = heuristic_value;
            debug!(best_heuristic_value = self.best_heuristic_value.into_inner());
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
    }

    pub fn increment_skipped_nodes(&mut self) {
        self.skipped_nodes += 1;
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
    }

    pub fn increment_generated_actions(&mut self, num_actions: usize) {
        self.generated_actions += num_actions;
    }

    pub fn observe_frontier_size(&mut self, frontier_size: usize) {
        self.peak_frontier_size = self.peak_frontier_size.max(frontier_size);
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn pruned_nodes(&self) -> usize {
        self.pruned_nodes
    }

    pub fn skipped_nodes(&self) -> usize {
        self.skipped_nodes
    }

    pub fn evaluated_nodes(&self) -> usize {
        self.evaluated_nodes
    }

    pub fn generated_actions(&self) -> usize {
        self.generated_actions
    }

    pub fn peak_frontier_size(&self) -> usize {
        self.peak_frontier_size
    }

    pub fn best_heuristic_value(&self) -> HeuristicValue {
        self.best_heuristic_value
    }

    pub fn search_duration(&self) -> Duration {
        self.search_start_time.elapsed()
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            pruned_nodes = self.pruned_nodes,
            skipped_nodes = self.skipped_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_actions = self.generated_actions,
            peak_frontier_size = self.peak_frontier_size,
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        // Whole microseconds keep the humantime output short.
        let duration = Duration::from_micros(self.search_duration().as_micros() as u64);
        info!(search_duration = %humantime::format_duration(duration));
    }
}
