//! Label-blind reachability over a rule graph.

use crate::core::{Action, State};
use crate::graph::RuleGraph;
use petgraph::visit::Dfs;
use std::collections::HashSet;

/// Every state reachable from `start` by zero or more edges, whatever their
/// rules. Always contains `start`, even if it is not a node of `graph`.
///
/// # Example
///
/// ```rust
/// use rulegraph::analysis::reachable_from;
/// use rulegraph::graph::RuleGraph;
/// use rulegraph::{action_enum, state_enum};
///
/// state_enum! {
///     enum Stage { A, B, C, Island }
/// }
/// action_enum! {
///     enum Step { Next }
/// }
///
/// let mut graph: RuleGraph<Stage, Step> = RuleGraph::from_transitions([
///     (Stage::A, Stage::B, Step::Next),
///     (Stage::B, Stage::C, Step::Next),
///     (Stage::C, Stage::A, Step::Next),
/// ]);
/// graph.add_node(Stage::Island);
///
/// let reachable = reachable_from(&graph, &Stage::B);
/// assert_eq!(reachable.len(), 3);
/// assert!(!reachable.contains(&Stage::Island));
/// ```
pub fn reachable_from<S: State, A: Action>(graph: &RuleGraph<S, A>, start: &S) -> HashSet<S> {
    let Some(origin) = graph.node_index(start) else {
        return HashSet::from([start.clone()]);
    };

    let digraph = graph.as_digraph();
    let mut dfs = Dfs::new(digraph, origin);
    let mut reached = HashSet::new();
    while let Some(node) = dfs.next(digraph) {
        reached.insert(digraph[node].clone());
    }
    reached
}

/// Check if `to` is reachable from `from` (pure).
pub fn is_reachable<S: State, A: Action>(graph: &RuleGraph<S, A>, from: &S, to: &S) -> bool {
    from == to || reachable_from(graph, from).contains(to)
}
