//! Transition dispatch: resolve `(state, action)` to the next state.
//!
//! Precedence is first-match-wins over edges in insertion order. A later
//! edge accepting the same action as an earlier one is shadowed, never
//! reported here; use [`crate::analysis::validate`] to surface it.

use crate::core::{Action, State};
use crate::graph::{Edge, RuleGraph};

/// Errors that can occur during dispatch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("No transition from state '{state}' on action '{action}'")]
    NoTransition { state: String, action: String },
}

impl TransitionError {
    pub(crate) fn no_transition<S: State, A: Action>(state: &S, action: &A) -> Self {
        TransitionError::NoTransition {
            state: state.name().to_string(),
            action: action.name().to_string(),
        }
    }
}

/// The edge that fires for `action` out of `state`, if any (pure).
pub fn edge_for<'a, S: State, A: Action>(
    graph: &'a RuleGraph<S, A>,
    state: &S,
    action: &A,
) -> Option<&'a Edge<S, A>> {
    graph.edges_from(state).find(|edge| edge.matches(action))
}

/// Next state after applying `action` in `state` (pure).
///
/// A self-loop is a successful transition back to `state`; only the absence
/// of any matching edge yields [`TransitionError::NoTransition`].
///
/// # Example
///
/// ```rust
/// use rulegraph::graph::RuleGraph;
/// use rulegraph::machine::{next_state, TransitionError};
/// use rulegraph::{action_enum, state_enum};
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
///     (Turnstile::Locked, Turnstile::Locked, Input::Pass),
/// ]);
///
/// assert_eq!(next_state(&graph, &Turnstile::Locked, &Input::Pass).unwrap(), Turnstile::Locked);
/// assert!(matches!(
///     next_state(&graph, &Turnstile::Unlocked, &Input::Pass),
///     Err(TransitionError::NoTransition { .. })
/// ));
/// ```
pub fn next_state<S: State, A: Action>(
    graph: &RuleGraph<S, A>,
    state: &S,
    action: &A,
) -> Result<S, TransitionError> {
    edge_for(graph, state, action)
        .map(|edge| edge.to.clone())
        .ok_or_else(|| TransitionError::no_transition(state, action))
}
