//! Frontiers hold the ids of generated but not yet expanded nodes. The three
//! implementations differ only in the order in which they hand nodes back.

use crate::search::{HeuristicValue, NodeId};
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, collections::VecDeque};

pub trait Frontier {
    /// Add a node. `key` is ignored by frontiers that are not ordered by
    /// priority.
    fn push(&mut self, node_id: NodeId, key: HeuristicValue);

    /// Remove the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out. Used by breadth first search.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node_id: NodeId, _key: HeuristicValue) {
        self.queue.push_back(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out. Used by depth first search.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node_id: NodeId, _key: HeuristicValue) {
        self.stack.push(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Lowest key first. Nodes with equal keys come out in the order they were
/// pushed: every push is stamped with a strictly increasing insertion index
/// which takes part in the ordering, so the result never depends on how the
/// underlying heap happens to arrange equal elements.
#[derive(Debug)]
pub struct PriorityFrontier {
    queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, u64)>>,
    next_insertion_index: u64,
}

impl Default for PriorityFrontier {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_insertion_index: 0,
        }
    }

    /// Key and insertion index of the node that would be popped next.
    pub fn peek_key(&self) -> Option<(HeuristicValue, u64)> {
        self.queue
            .peek()
            .map(|(_, Reverse((key, index)))| (*key, *index))
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node_id: NodeId, key: HeuristicValue) {
        let insertion_index = self.next_insertion_index;
        self.next_insertion_index += 1;
        self.queue.push(node_id, Reverse((key, insertion_index)));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(frontier: &mut dyn Frontier) -> Vec<usize> {
        std::iter::from_fn(|| frontier.pop())
            .map(|node_id| node_id.id())
            .collect()
    }

    fn fill(frontier: &mut dyn Frontier, keys: &[f64]) {
        for (index, key) in keys.iter().enumerate() {
            frontier.push(NodeId::new(index), (*key).into());
        }
    }

    #[test]
    fn fifo_returns_in_insertion_order() {
        let mut frontier = FifoFrontier::new();
        fill(&mut frontier, &[3., 1., 2.]);
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(&mut frontier), vec![0, 1, 2]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn lifo_returns_most_recent_first() {
        let mut frontier = LifoFrontier::new();
        fill(&mut frontier, &[3., 1., 2.]);
        assert_eq!(drain(&mut frontier), vec![2, 1, 0]);
    }

    #[test]
    fn priority_returns_lowest_key_first() {
        let mut frontier = PriorityFrontier::new();
        fill(&mut frontier, &[3., 1., 2.]);
        assert_eq!(frontier.peek_key(), Some((1.0.into(), 1)));
        assert_eq!(drain(&mut frontier), vec![1, 2, 0]);
    }

    #[test]
    fn priority_breaks_ties_by_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        fill(&mut frontier, &[5., 2., 5., 2., 5., 2., 1.]);
        assert_eq!(drain(&mut frontier), vec![6, 1, 3, 5, 0, 2, 4]);
    }

    #[test]
    fn priority_ties_survive_interleaved_pops() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(NodeId::new(0), 1.0.into());
        frontier.push(NodeId::new(1), 1.0.into());
        assert_eq!(frontier.pop(), Some(NodeId::new(0)));
        frontier.push(NodeId::new(2), 1.0.into());
        frontier.push(NodeId::new(3), 0.5.into());
        assert_eq!(drain(&mut frontier), vec![3, 1, 2]);
    }
}
