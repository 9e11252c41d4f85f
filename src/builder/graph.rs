//! Builder for constructing rule graphs.

use crate::analysis;
use crate::builder::error::BuildError;
use crate::core::{Action, Rule, State};
use crate::graph::RuleGraph;
use stillwater::validation::Validation;
use tracing::debug;

/// Builder for rule graphs with a fluent API.
///
/// Extending an existing graph copies it; the original value is never
/// touched, so machines already sharing it keep their rules.
///
/// # Example
///
/// ```rust
/// use rulegraph::builder::RuleGraphBuilder;
/// use rulegraph::{action_enum, state_enum};
///
/// state_enum! {
///     enum Turnstile { Locked, Unlocked, Alarm }
/// }
/// action_enum! {
///     enum Input { Coin, Pass, Cheat }
/// }
///
/// let base = RuleGraphBuilder::new()
///     .on(Turnstile::Locked, Turnstile::Unlocked, Input::Coin)
///     .on(Turnstile::Unlocked, Turnstile::Locked, Input::Pass)
///     .build();
///
/// let with_alarm = RuleGraphBuilder::extend(&base)
///     .on(Turnstile::Locked, Turnstile::Alarm, Input::Cheat)
///     .build_strict()
///     .unwrap();
///
/// assert_eq!(base.edge_count(), 2);
/// assert_eq!(with_alarm.edge_count(), 3);
/// ```
pub struct RuleGraphBuilder<S: State, A: Action> {
    graph: RuleGraph<S, A>,
}

impl<S: State, A: Action> RuleGraphBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            graph: RuleGraph::new(),
        }
    }

    /// Start from a copy of `base`; its edges keep their precedence ahead of
    /// anything added here.
    pub fn extend(base: &RuleGraph<S, A>) -> Self {
        Self {
            graph: base.clone(),
        }
    }

    /// Register a state, possibly isolated.
    pub fn state(mut self, state: S) -> Self {
        self.graph.add_node(state);
        self
    }

    /// Add an edge guarded by `rule`.
    pub fn transition(mut self, from: S, to: S, rule: impl Into<Rule<A>>) -> Self {
        self.graph.add_edge(from, to, rule);
        self
    }

    /// Add an edge triggered by a single action.
    pub fn on(self, from: S, to: S, action: A) -> Self {
        self.transition(from, to, Rule::On(action))
    }

    /// Add multiple edges at once.
    pub fn transitions<I, R>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (S, S, R)>,
        R: Into<Rule<A>>,
    {
        for (from, to, rule) in transitions {
            self.graph.add_edge(from, to, rule);
        }
        self
    }

    /// Build the graph. Never fails; ambiguous rules resolve first-match-wins
    /// at dispatch.
    pub fn build(self) -> RuleGraph<S, A> {
        self.graph
    }

    /// Build the graph, rejecting ambiguous or shadowed rules.
    pub fn build_strict(self) -> Result<RuleGraph<S, A>, BuildError> {
        match analysis::validate(&self.graph) {
            Validation::Success(_) => Ok(self.graph),
            Validation::Failure(errors) => {
                let violations: Vec<_> = errors.iter().cloned().collect();
                debug!(violations = violations.len(), "rejecting rule set");
                Err(BuildError::InvalidRules(violations))
            }
        }
    }
}

impl<S: State, A: Action> Default for RuleGraphBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
