//! An explicit weighted directed graph, where states are nodes and the
//! action for an edge is the name of the node it leads to.
//!
//! The text format has one item per line; `#` starts a comment:
//!
//! ```text
//! start S
//! goal G
//! S A 1      # edge from S to A with cost 1
//! h S 6      # optional heuristic estimate for S
//! ```
//!
//! `start`, `goal` and `h` are keywords, so no node may carry one of those
//! names. Nodes named on `start` and `goal` lines exist even without edges.
//! Each ordered pair of nodes has at most one edge.

use crate::{problems::ParseError, search::Problem};
use itertools::Itertools;
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use std::collections::{HashMap, HashSet};

const KEYWORDS: [&str; 3] = ["start", "goal", "h"];

#[derive(Debug, Clone)]
pub struct GraphProblem {
    graph: DiGraph<String, f64>,
    nodes: HashMap<String, NodeIndex>,
    start: NodeIndex,
    goals: HashSet<NodeIndex>,
    /// Heuristic table read by [`GraphProblem::table_heuristic`]
    estimates: HashMap<NodeIndex, f64>,
}

#[derive(Debug, Default)]
struct GraphBuilder {
    graph: DiGraph<String, f64>,
    nodes: HashMap<String, NodeIndex>,
}

impl GraphBuilder {
    fn node(&mut self, name: &str) -> NodeIndex {
        if let Some(&node) = self.nodes.get(name) {
            return node;
        }
        let node = self.graph.add_node(name.to_string());
        self.nodes.insert(name.to_string(), node);
        node
    }

    fn add_edge(&mut self, from: &str, to: &str, cost: f64) -> Result<(), ParseError> {
        if cost.is_nan() || cost < 0. {
            return Err(ParseError::NegativeCost {
                from: from.to_string(),
                to: to.to_string(),
                cost,
            });
        }
        let (from_node, to_node) = (self.node(from), self.node(to));
        if self.graph.contains_edge(from_node, to_node) {
            return Err(ParseError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        self.graph.add_edge(from_node, to_node, cost);
        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<NodeIndex, ParseError> {
        self.nodes
            .get(name)
            .copied()
            .ok_or_else(|| ParseError::UnknownNode(name.to_string()))
    }

    fn build<'a>(
        mut self,
        start: &str,
        goals: impl IntoIterator<Item = &'a str>,
        estimates: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> Result<GraphProblem, ParseError> {
        let start = self.node(start);
        let goals = goals
            .into_iter()
            .map(|name| self.node(name))
            .collect::<HashSet<_>>();
        if goals.is_empty() {
            return Err(ParseError::MissingDirective("goal"));
        }
        let estimates = estimates
            .into_iter()
            .map(|(name, value)| self.lookup(name).map(|node| (node, value)))
            .collect::<Result<HashMap<_, _>, _>>()?;
        Ok(GraphProblem {
            graph: self.graph,
            nodes: self.nodes,
            start,
            goals,
            estimates,
        })
    }
}

impl GraphProblem {
    /// Build a graph from `(from, to, cost)` edges. Nodes are created by the
    /// edges that mention them, then by `start` and `goals`.
    pub fn new(
        start: &str,
        goals: &[&str],
        edges: &[(&str, &str, f64)],
    ) -> Result<Self, ParseError> {
        let mut builder = GraphBuilder::default();
        for &(from, to, cost) in edges {
            builder.add_edge(from, to, cost)?;
        }
        builder.build(start, goals.iter().copied(), std::iter::empty())
    }

    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        let mut builder = GraphBuilder::default();
        let mut start = None;
        let mut goals = Vec::new();
        let mut estimates = Vec::new();

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.split('#').next().unwrap_or_default();
            let tokens = line.split_whitespace().collect_vec();
            let malformed = || ParseError::MalformedLine {
                line: index + 1,
                content: raw_line.trim().to_string(),
            };
            match tokens.as_slice() {
                [] => {}
                ["start", name] => start = Some(not_keyword(*name)?),
                ["goal", names @ ..] if !names.is_empty() => {
                    for name in names {
                        goals.push(not_keyword(*name)?);
                    }
                }
                ["h", name, value] => {
                    let value = value.parse::<f64>().map_err(|_| malformed())?;
                    estimates.push((*name, value));
                }
                [from, to, cost] => {
                    let cost = cost.parse::<f64>().map_err(|_| malformed())?;
                    builder.add_edge(not_keyword(*from)?, not_keyword(*to)?, cost)?;
                }
                _ => return Err(malformed()),
            }
        }

        let start = start.ok_or(ParseError::MissingDirective("start"))?;
        builder.build(start, goals, estimates)
    }

    /// Attach heuristic estimates. Nodes without one are estimated at zero.
    pub fn with_estimates(mut self, estimates: &[(&str, f64)]) -> Result<Self, ParseError> {
        for &(name, value) in estimates {
            let node = self
                .node(name)
                .ok_or_else(|| ParseError::UnknownNode(name.to_string()))?;
            self.estimates.insert(node, value);
        }
        Ok(self)
    }

    pub fn node(&self, name: &str) -> Option<NodeIndex> {
        self.nodes.get(name).copied()
    }

    pub fn name(&self, node: NodeIndex) -> &str {
        &self.graph[node]
    }

    pub fn graph(&self) -> &DiGraph<String, f64> {
        &self.graph
    }

    /// Look the state up in the attached estimates.
    pub fn table_heuristic(&self, state: &NodeIndex) -> f64 {
        self.estimates.get(state).copied().unwrap_or(0.)
    }
}

fn not_keyword(name: &str) -> Result<&str, ParseError> {
    if KEYWORDS.contains(&name) {
        return Err(ParseError::ReservedName(name.to_string()));
    }
    Ok(name)
}

impl Problem for GraphProblem {
    type State = NodeIndex;
    type Action = String;

    fn initial_state(&self) -> Self::State {
        self.start
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.goals.contains(state)
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        // petgraph walks outgoing edges newest first.
        self.graph
            .edges(*state)
            .sorted_by_key(|edge| edge.id())
            .map(|edge| self.graph[edge.target()].clone())
            .collect()
    }

    fn successor(&self, _state: &Self::State, action: &Self::Action) -> Self::State {
        self.nodes[action]
    }

    fn cost(&self, state: &Self::State, action: &Self::Action) -> f64 {
        self.node(action)
            .and_then(|target| self.graph.find_edge(*state, target))
            .map_or(f64::INFINITY, |edge| self.graph[edge])
    }
}
