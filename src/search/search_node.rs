use crate::search::HeuristicValue;
use ordered_float::Float;

/// Index of a [`SearchNode`] inside its [`SearchSpace`](crate::search::SearchSpace).
/// Ids are handed out by the search space in creation order and are only
/// meaningful within the search that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// Parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchNode`] is a node in the search tree. It owns the state it was
/// generated for, and remembers the action and parent that led to it so the
/// path can be reconstructed once a goal is popped. Several nodes may share
/// the same state, for example when a cheaper path to a state is found while
/// an older node for it still sits in the frontier.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// Unique identifier of the node
    node_id: NodeId,
    /// State of the node
    state: S,
    /// F-value of the node, i.e. g + h.
    f: HeuristicValue,
    /// G-value of the node, i.e. the accumulated cost to reach this node.
    g: HeuristicValue,
    /// H-value of the node, i.e. the heuristic estimate of the cost to reach
    /// the goal. Uninformed searches leave this at zero.
    h: HeuristicValue,
    /// Number of actions from the root to this node
    depth: usize,
    /// Action that led to this node, `None` for the root
    transition: Option<A>,
    /// Parent node
    parent_id: NodeId,
}

impl<S, A> SearchNode<S, A> {
    /// Create a new search node with no parent. This should only be used for
    /// the root node of the search space. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(node_id: NodeId, state: S) -> Self {
        Self {
            node_id,
            state,
            f: HeuristicValue::infinity(),
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            depth: 0,
            transition: None,
            parent_id: NO_NODE,
        }
    }

    /// Create a new search node with a parent. This should be used for all
    /// nodes that are not the root node.
    pub fn new_with_parent(
        node_id: NodeId,
        state: S,
        parent_id: NodeId,
        transition: A,
        depth: usize,
    ) -> Self {
        Self {
            node_id,
            state,
            f: HeuristicValue::infinity(),
            g: HeuristicValue::infinity(),
            h: HeuristicValue::infinity(),
            depth,
            transition: Some(transition),
            parent_id,
        }
    }

    pub fn open(&mut self, g: HeuristicValue, h: HeuristicValue) {
        self.g = g;
        self.h = h;
        self.f = g + h;
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    pub fn get_transition(&self) -> Option<&A> {
        self.transition.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == NO_NODE
    }
}
