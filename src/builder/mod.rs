//! Builder API for ergonomic rule graph construction.
//!
//! This module provides a fluent builder and macros for declaring states,
//! actions and their rules with minimal boilerplate.

pub mod error;
pub mod graph;
pub mod macros;

pub use error::BuildError;
pub use graph::RuleGraphBuilder;

use crate::core::{Action, State};
use crate::graph::RuleGraph;

/// Build a graph where each `(from, to, action)` row is a single-action edge,
/// the shape of a classic transition table.
///
/// # Example
///
/// ```
/// use rulegraph::builder::table_graph;
/// use rulegraph::{action_enum, state_enum};
///
/// state_enum! {
///     enum Light { Red, Green, Yellow }
/// }
/// action_enum! {
///     enum Timer { Tick }
/// }
///
/// let graph = table_graph(&[
///     (Light::Red, Light::Green, Timer::Tick),
///     (Light::Green, Light::Yellow, Timer::Tick),
///     (Light::Yellow, Light::Red, Timer::Tick),
/// ]);
/// assert_eq!(graph.next_state(&Light::Yellow, &Timer::Tick).unwrap(), Light::Red);
/// ```
pub fn table_graph<S: State, A: Action>(rows: &[(S, S, A)]) -> RuleGraph<S, A> {
    RuleGraphBuilder::new()
        .transitions(rows.iter().cloned())
        .build()
}
