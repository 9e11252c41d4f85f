//! Action planning: the shortest action sequence between two states.
//!
//! Breadth-first search over graph nodes, expanding each node's actions in
//! alphabet order with first-match-wins dispatch. Each state is visited at most once, so
//! the search is bounded by `states x actions` and always terminates, even
//! when the target cannot be reached.

mod error;
mod plan;

pub use error::PlanError;
pub use plan::Plan;

use crate::analysis::reachable_from;
use crate::core::{Action, State};
use crate::graph::RuleGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::{EdgeRef, VisitMap, Visitable};
use std::collections::VecDeque;
use tracing::debug;

/// Shortest plan from `start` to `target` over the full action alphabet.
///
/// Among equally short plans the one whose first differing action comes
/// earlier in [`Action::alphabet`] is returned.
///
/// # Example
///
/// ```rust
/// use rulegraph::graph::RuleGraph;
/// use rulegraph::planner::{plan, PlanError};
/// use rulegraph::{action_enum, state_enum};
///
/// state_enum! {
///     enum Turnstile { Locked, Unlocked, Alarm }
/// }
/// action_enum! {
///     enum Input { Coin, Pass }
/// }
///
/// let mut graph: RuleGraph<Turnstile, Input> = RuleGraph::from_transitions([
///     (Turnstile::Locked, Turnstile::Unlocked, Input::Coin),
///     (Turnstile::Unlocked, Turnstile::Locked, Input::Pass),
/// ]);
/// graph.add_node(Turnstile::Alarm);
///
/// let unlock = plan(&graph, &Turnstile::Locked, &Turnstile::Unlocked).unwrap();
/// assert_eq!(unlock.actions(), &[Input::Coin]);
///
/// assert!(plan(&graph, &Turnstile::Locked, &Turnstile::Locked).unwrap().is_empty());
/// assert!(matches!(
///     plan(&graph, &Turnstile::Locked, &Turnstile::Alarm),
///     Err(PlanError::Unreachable { .. })
/// ));
/// ```
pub fn plan<S: State, A: Action>(
    graph: &RuleGraph<S, A>,
    start: &S,
    target: &S,
) -> Result<Plan<A>, PlanError> {
    plan_with(graph, start, target, &A::alphabet())
}

/// Shortest plan using only the actions of `alphabet`, tried in the given
/// priority order.
pub fn plan_with<S: State, A: Action>(
    graph: &RuleGraph<S, A>,
    start: &S,
    target: &S,
    alphabet: &[A],
) -> Result<Plan<A>, PlanError> {
    if start == target {
        return Ok(Plan::empty());
    }

    if !reachable_from(graph, start).contains(target) {
        debug!(
            from = start.name(),
            to = target.name(),
            "target not reachable, skipping search"
        );
        return Err(unreachable(start, target));
    }

    let (Some(origin), Some(goal)) = (graph.node_index(start), graph.node_index(target)) else {
        return Err(unreachable(start, target));
    };

    // petgraph's Bfs walks neighbors without edge labels, so the frontier is
    // kept here: expansion follows dispatch, one action at a time.
    let mut discovered = graph.as_digraph().visit_map();
    discovered.visit(origin);
    let mut parents: Vec<Option<(NodeIndex, A)>> = vec![None; graph.node_count()];
    let mut frontier = VecDeque::from([origin]);
    let mut explored = 1usize;

    while let Some(node) = frontier.pop_front() {
        let outgoing = graph.outgoing(node);
        for action in alphabet {
            let Some(edge) = outgoing.iter().find(|edge| edge.weight().matches(action)) else {
                continue;
            };
            let next = edge.target();
            if !discovered.visit(next) {
                continue;
            }
            explored += 1;
            parents[next.index()] = Some((node, action.clone()));

            if next == goal {
                let plan = trace_back(&parents, origin, goal);
                debug!(
                    from = start.name(),
                    to = target.name(),
                    steps = plan.len(),
                    explored,
                    "plan found"
                );
                return Ok(plan);
            }
            frontier.push_back(next);
        }
    }

    debug!(
        from = start.name(),
        to = target.name(),
        explored,
        "no action sequence reaches target"
    );
    Err(unreachable(start, target))
}

fn trace_back<A: Action>(
    parents: &[Option<(NodeIndex, A)>],
    origin: NodeIndex,
    goal: NodeIndex,
) -> Plan<A> {
    let mut actions = Vec::new();
    let mut cursor = goal;

    while cursor != origin {
        let Some((previous, action)) = &parents[cursor.index()] else {
            break;
        };
        actions.push(action.clone());
        cursor = *previous;
    }

    actions.reverse();
    Plan::from(actions)
}

fn unreachable<S: State>(from: &S, to: &S) -> PlanError {
    PlanError::Unreachable {
        from: from.name().to_string(),
        to: to.name().to_string(),
    }
}
