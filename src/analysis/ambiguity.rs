//! Rule-set checks: ambiguous and shadowed edges.
//!
//! Dispatch silently applies first-match-wins. These checks make the
//! consequences visible, accumulating every violation in one pass instead
//! of stopping at the first.

use crate::core::{Action, State};
use crate::graph::RuleGraph;
use petgraph::visit::EdgeRef;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;
use tracing::trace;

/// Several edges out of `state` accept `action`.
///
/// `edges` holds edge indices (see [`RuleGraph::edge`]) in precedence order;
/// the first one is the edge dispatch actually takes.
#[derive(Clone, Debug, PartialEq)]
pub struct Ambiguity<S: State, A: Action> {
    pub state: S,
    pub action: A,
    pub edges: Vec<usize>,
}

impl<S: State, A: Action> Ambiguity<S, A> {
    /// The edge dispatch takes, or `None` when `edges` is empty.
    pub fn winner(&self) -> Option<usize> {
        self.edges.first().copied()
    }
}

/// Problems found in a rule set.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RuleViolation {
    #[error("State '{state}' has {count} edges accepting '{action}' (edge #{winner} wins)")]
    Ambiguous {
        state: String,
        action: String,
        winner: usize,
        count: usize,
    },

    #[error("Edge #{edge} ('{from}' -> '{to}') never fires for any action")]
    Shadowed {
        edge: usize,
        from: String,
        to: String,
    },
}

/// Every `(state, action)` pair accepted by more than one edge, checked
/// against the full action alphabet.
pub fn find_ambiguities<S: State, A: Action>(graph: &RuleGraph<S, A>) -> Vec<Ambiguity<S, A>> {
    let alphabet = A::alphabet();
    let mut found = Vec::new();

    let digraph = graph.as_digraph();

    for node in digraph.node_indices() {
        let outgoing = graph.outgoing(node);
        for action in &alphabet {
            let edges: Vec<usize> = outgoing
                .iter()
                .filter(|edge| edge.weight().matches(action))
                .map(|edge| edge.id().index())
                .collect();

            if edges.len() > 1 {
                found.push(Ambiguity {
                    state: digraph[node].clone(),
                    action: action.clone(),
                    edges,
                });
            }
        }
    }

    found
}

/// Indices of edges that dispatch can never select: each action they accept
/// is taken by an earlier edge, or they accept no action at all.
pub fn shadowed_edges<S: State, A: Action>(graph: &RuleGraph<S, A>) -> Vec<usize> {
    let alphabet = A::alphabet();
    let mut shadowed = Vec::new();

    for node in graph.as_digraph().node_indices() {
        let outgoing = graph.outgoing(node);
        let winners: HashSet<usize> = alphabet
            .iter()
            .filter_map(|action| {
                outgoing
                    .iter()
                    .find(|edge| edge.weight().matches(action))
                    .map(|edge| edge.id().index())
            })
            .collect();

        shadowed.extend(
            outgoing
                .iter()
                .map(|edge| edge.id().index())
                .filter(|index| !winners.contains(index)),
        );
    }

    shadowed.sort_unstable();
    shadowed
}

/// Validate the rule set, accumulating ALL violations.
///
/// # Example
///
/// ```rust
/// use rulegraph::analysis::{validate, RuleViolation};
/// use rulegraph::graph::RuleGraph;
/// use rulegraph::{action_enum, state_enum};
/// use stillwater::validation::Validation;
///
/// state_enum! {
///     enum Turnstile { Locked, Unlocked }
/// }
/// action_enum! {
///     enum Input { Coin, Pass }
/// }
///
/// let graph: RuleGraph<Turnstile, Input> = RuleGraph::from_transitions([
///     (Turnstile::Locked, Turnstile::Unlocked, Input::Coin),
///     (Turnstile::Locked, Turnstile::Locked, Input::Coin),
/// ]);
///
/// match validate(&graph) {
///     Validation::Failure(violations) => assert_eq!(violations.len(), 2),
///     Validation::Success(_) => panic!("expected violations"),
/// }
/// ```
pub fn validate<S: State, A: Action>(
    graph: &RuleGraph<S, A>,
) -> Validation<(), NonEmptyVec<RuleViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<RuleViolation>>> = Vec::new();

    for ambiguity in find_ambiguities(graph) {
        let Some(winner) = ambiguity.winner() else {
            continue;
        };
        trace!(
            state = ambiguity.state.name(),
            action = ambiguity.action.name(),
            edges = ambiguity.edges.len(),
            "ambiguous rule"
        );
        checks.push(Validation::fail(RuleViolation::Ambiguous {
            state: ambiguity.state.name().to_string(),
            action: ambiguity.action.name().to_string(),
            winner,
            count: ambiguity.edges.len(),
        }));
    }

    for index in shadowed_edges(graph) {
        let Some(edge) = graph.edge(index) else {
            continue;
        };
        trace!(edge = index, from = edge.from.name(), to = edge.to.name(), "shadowed edge");
        checks.push(Validation::fail(RuleViolation::Shadowed {
            edge: index,
            from: edge.from.name().to_string(),
            to: edge.to.name().to_string(),
        }));
    }

    if checks.is_empty() {
        return Validation::success(());
    }

    Validation::all_vec(checks).map(|_| ())
}
