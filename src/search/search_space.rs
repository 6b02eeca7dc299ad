use crate::search::{NodeId, Plan, SearchNode};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] owns every node created during one search. Nodes refer
/// to their parents by [`NodeId`], so the path to any node can be recovered
/// without storing a copy of it in each node.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    nodes: SegVec<SearchNode<S, A>, Linear>,
}

impl<S, A> Default for SearchSpace<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> SearchSpace<S, A> {
    pub fn new() -> Self {
        Self {
            nodes: SegVec::new(),
        }
    }

    /// Insert the root node for `initial_state`.
    pub fn insert_root_node(&mut self, initial_state: S) -> &mut SearchNode<S, A> {
        debug_assert!(self.nodes.len() == 0, "Root node must be inserted first");
        let node_id = NodeId::new(self.nodes.len());
        self.nodes
            .push(SearchNode::new_without_parent(node_id, initial_state));
        self.get_node_mut(node_id)
    }

    /// Insert a child of `parent_id` reached through `transition`.
    pub fn insert_node(
        &mut self,
        state: S,
        transition: A,
        parent_id: NodeId,
    ) -> &mut SearchNode<S, A> {
        let depth = self.get_node(parent_id).get_depth() + 1;
        let node_id = NodeId::new(self.nodes.len());
        self.nodes.push(SearchNode::new_with_parent(
            node_id, state, parent_id, transition, depth,
        ));
        self.get_node_mut(node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<S, A> {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &S {
        self.get_node(node_id).get_state()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }
}

impl<S, A: Clone> SearchSpace<S, A> {
    /// Walk the parent links from `goal_id` back to the root and return the
    /// actions along the way in execution order.
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan<A> {
        let mut steps = Vec::with_capacity(self.get_node(goal_id).get_depth());
        let mut current_node = self.get_node(goal_id);
        while let Some(transition) = current_node.get_transition() {
            steps.push(transition.clone());
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        Plan::new(steps)
    }
}
