//! Rule graphs: states connected by action-guarded edges.
//!
//! A [`RuleGraph`] is pure data plus lookup. Edge insertion order is the
//! dispatch precedence: when several edges out of one state accept the same
//! action, the one added first wins.

mod table;

pub use table::{TableError, TableTransition, TransitionTable};

use crate::core::{Action, Rule, State};
use crate::machine::{dispatch, TransitionError};
use petgraph::graph::{DiGraph, EdgeIndex, EdgeReference, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A potential transition `from -> to`, triggered by any action its rule
/// accepts. Immutable once added to a graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Edge<S: State, A: Action> {
    pub from: S,
    pub to: S,
    pub rule: Rule<A>,
}

impl<S: State, A: Action> Edge<S, A> {
    pub fn new(from: S, to: S, rule: impl Into<Rule<A>>) -> Self {
        Self {
            from,
            to,
            rule: rule.into(),
        }
    }

    /// Check if this edge fires for `action` (pure).
    pub fn matches(&self, action: &A) -> bool {
        self.rule.matches(action)
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Directed graph of states and ordered, rule-guarded edges.
///
/// Construction never fails and performs no validation; see
/// [`crate::analysis::validate`] for an explicit check of the rule set.
/// Once built, share it read-only (typically behind `Arc`).
///
/// # Example
///
/// ```rust
/// use rulegraph::graph::RuleGraph;
/// use rulegraph::core::Rule;
/// use rulegraph::{action_enum, state_enum};
///
/// state_enum! {
///     enum Door { Open, Closed }
/// }
/// action_enum! {
///     enum Hand { Push, Pull }
/// }
///
/// let mut graph = RuleGraph::new();
/// graph.add_edge(Door::Closed, Door::Open, Rule::on(Hand::Push));
/// graph.add_edge(Door::Open, Door::Closed, Rule::on(Hand::Pull));
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.next_state(&Door::Closed, &Hand::Push).unwrap(), Door::Open);
/// ```
#[derive(Clone, Debug)]
pub struct RuleGraph<S: State, A: Action> {
    graph: DiGraph<S, Edge<S, A>>,
    indices: HashMap<S, NodeIndex>,
}

impl<S: State, A: Action> Default for RuleGraph<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action> RuleGraph<S, A> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            indices: HashMap::new(),
        }
    }

    /// Build a graph from `(from, to, rule)` triples, keeping their order.
    pub fn from_transitions<I, R>(transitions: I) -> Self
    where
        I: IntoIterator<Item = (S, S, R)>,
        R: Into<Rule<A>>,
    {
        let mut graph = Self::new();
        for (from, to, rule) in transitions {
            graph.add_edge(from, to, rule);
        }
        graph
    }

    /// Add a state. Idempotent; isolated nodes are legal.
    pub fn add_node(&mut self, state: S) -> NodeIndex {
        if let Some(&index) = self.indices.get(&state) {
            return index;
        }
        let index = self.graph.add_node(state.clone());
        self.indices.insert(state, index);
        index
    }

    /// Append an edge, adding both endpoints to the node set if missing.
    pub fn add_edge(&mut self, from: S, to: S, rule: impl Into<Rule<A>>) -> EdgeIndex {
        let source = self.add_node(from.clone());
        let target = self.add_node(to.clone());
        self.graph.add_edge(source, target, Edge::new(from, to, rule))
    }

    /// Edges leaving `state`, in insertion order.
    pub fn edges_from<'a>(&'a self, state: &S) -> impl Iterator<Item = &'a Edge<S, A>> + 'a {
        let outgoing = match self.node_index(state) {
            Some(node) => self.outgoing(node),
            None => Vec::new(),
        };
        outgoing.into_iter().map(|edge| edge.weight())
    }

    /// Indices of the edges leaving `state`, in insertion order. Each one
    /// resolves through [`RuleGraph::edge`].
    pub fn edge_indices_from(&self, state: &S) -> Vec<usize> {
        match self.node_index(state) {
            Some(node) => self
                .outgoing(node)
                .into_iter()
                .map(|edge| edge.id().index())
                .collect(),
            None => Vec::new(),
        }
    }

    /// The edge added `index`-th, if any.
    pub fn edge(&self, index: usize) -> Option<&Edge<S, A>> {
        self.graph.edge_weight(EdgeIndex::new(index))
    }

    /// All states, in the order they were first added.
    pub fn nodes(&self) -> impl Iterator<Item = &S> + '_ {
        self.graph.raw_nodes().iter().map(|node| &node.weight)
    }

    /// All edges, in insertion (precedence) order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<S, A>> + '_ {
        self.graph.raw_edges().iter().map(|edge| &edge.weight)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.indices.contains_key(state)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn node_index(&self, state: &S) -> Option<NodeIndex> {
        self.indices.get(state).copied()
    }

    pub(crate) fn as_digraph(&self) -> &DiGraph<S, Edge<S, A>> {
        &self.graph
    }

    /// Outgoing edges of `node` sorted by edge index. petgraph walks a node's
    /// adjacency list newest first, so precedence needs the sort.
    pub(crate) fn outgoing(&self, node: NodeIndex) -> Vec<EdgeReference<'_, Edge<S, A>>> {
        let mut edges: Vec<_> = self.graph.edges(node).collect();
        edges.sort_by_key(|edge| edge.id());
        edges
    }

    /// Resolve `(state, action)` with first-match-wins precedence.
    ///
    /// Shorthand for [`dispatch::next_state`].
    pub fn next_state(&self, state: &S, action: &A) -> Result<S, TransitionError> {
        dispatch::next_state(self, state, action)
    }

    /// Export to a serializable transition table.
    pub fn to_table(&self) -> TransitionTable<S, A> {
        TransitionTable::from_graph(self)
    }

    /// Build a graph from a transition table.
    pub fn from_table(table: TransitionTable<S, A>) -> Self {
        table.into_graph()
    }
}

impl<S: State, A: Action, R: Into<Rule<A>>> FromIterator<(S, S, R)> for RuleGraph<S, A> {
    fn from_iter<I: IntoIterator<Item = (S, S, R)>>(iter: I) -> Self {
        Self::from_transitions(iter)
    }
}
