//! Mutable state machine over a shared rule graph.

use super::dispatch::{self, TransitionError};
use crate::core::{Action, State};
use crate::graph::RuleGraph;
use crate::planner::{self, Plan, PlanError};
use std::sync::Arc;

/// A machine instance: a shared, read-only [`RuleGraph`] plus the current
/// state.
///
/// `current` is the only mutable field and only a successful
/// [`StateMachine::act`] changes it. Any number of instances may share one
/// graph; each owns its own `current`.
///
/// # Example
///
/// ```rust
/// use rulegraph::graph::RuleGraph;
/// use rulegraph::machine::StateMachine;
/// use rulegraph::{action_enum, state_enum};
/// use std::sync::Arc;
///
/// state_enum! {
///     enum Turnstile { Locked, Unlocked }
/// }
/// action_enum! {
///     enum Input { Coin, Pass }
/// }
///
/// let graph: Arc<RuleGraph<Turnstile, Input>> = Arc::new(RuleGraph::from_transitions([
///     (Turnstile::Locked, Turnstile::Unlocked, Input::Coin),
///     (Turnstile::Unlocked, Turnstile::Locked, Input::Pass),
/// ]));
///
/// let mut machine = StateMachine::new(Arc::clone(&graph), Turnstile::Locked);
/// machine.act(&Input::Coin).unwrap();
/// assert_eq!(machine.state(), &Turnstile::Unlocked);
///
/// // Rejected actions leave the state untouched.
/// assert!(machine.act(&Input::Coin).is_err());
/// assert_eq!(machine.state(), &Turnstile::Unlocked);
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: State, A: Action> {
    graph: Arc<RuleGraph<S, A>>,
    current: S,
}

impl<S: State, A: Action> StateMachine<S, A> {
    /// Create a machine in `initial`.
    pub fn new(graph: Arc<RuleGraph<S, A>>, initial: S) -> Self {
        Self {
            graph,
            current: initial,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &S {
        &self.current
    }

    /// Get the shared graph (pure)
    pub fn graph(&self) -> &Arc<RuleGraph<S, A>> {
        &self.graph
    }

    /// Check whether `action` would be accepted from the current state (pure)
    pub fn can_act(&self, action: &A) -> bool {
        dispatch::edge_for(&self.graph, &self.current, action).is_some()
    }

    /// Apply `action`. On success the machine moves and the new state is
    /// returned; on [`TransitionError::NoTransition`] nothing changes.
    pub fn act(&mut self, action: &A) -> Result<&S, TransitionError> {
        let next = dispatch::next_state(&self.graph, &self.current, action)?;
        self.current = next;
        Ok(&self.current)
    }

    /// Plan the shortest action sequence from the current state to `target`.
    /// The machine is not moved; replay the plan to get there.
    pub fn plan_to(&self, target: &S) -> Result<Plan<A>, PlanError> {
        planner::plan(&self.graph, &self.current, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rule;

    crate::state_enum! {
        enum TestState {
            Locked,
            Unlocked,
            Alarm,
        }
    }

    crate::action_enum! {
        enum TestAction {
            Coin,
            Pass,
            Cheat,
        }
    }

    fn turnstile_with_alarm() -> Arc<RuleGraph<TestState, TestAction>> {
        let mut graph = RuleGraph::from_transitions([
            (TestState::Locked, TestState::Unlocked, TestAction::Coin),
            (TestState::Unlocked, TestState::Locked, TestAction::Pass),
            (TestState::Unlocked, TestState::Unlocked, TestAction::Coin),
            (TestState::Locked, TestState::Locked, TestAction::Pass),
        ]);
        graph.add_edge(TestState::Locked, TestState::Alarm, Rule::on(TestAction::Cheat));
        graph.add_edge(TestState::Unlocked, TestState::Alarm, Rule::on(TestAction::Cheat));
        Arc::new(graph)
    }

    #[test]
    fn starts_in_initial_state() {
        let machine = StateMachine::new(turnstile_with_alarm(), TestState::Unlocked);
        assert_eq!(machine.state(), &TestState::Unlocked);
    }

    #[test]
    fn act_follows_rules() {
        let mut machine = StateMachine::new(turnstile_with_alarm(), TestState::Locked);

        assert_eq!(machine.act(&TestAction::Coin).unwrap(), &TestState::Unlocked);
        assert_eq!(machine.act(&TestAction::Pass).unwrap(), &TestState::Locked);
        assert_eq!(machine.act(&TestAction::Pass).unwrap(), &TestState::Locked);
        assert_eq!(machine.act(&TestAction::Coin).unwrap(), &TestState::Unlocked);
        assert_eq!(machine.act(&TestAction::Coin).unwrap(), &TestState::Unlocked);
        assert_eq!(machine.act(&TestAction::Cheat).unwrap(), &TestState::Alarm);
    }

    #[test]
    fn rejected_action_keeps_state() {
        let mut machine = StateMachine::new(turnstile_with_alarm(), TestState::Alarm);

        let result = machine.act(&TestAction::Coin);

        assert!(matches!(result, Err(TransitionError::NoTransition { .. })));
        assert_eq!(machine.state(), &TestState::Alarm);
    }

    #[test]
    fn can_act_reports_without_moving() {
        let machine = StateMachine::new(turnstile_with_alarm(), TestState::Locked);

        assert!(machine.can_act(&TestAction::Cheat));
        assert_eq!(machine.state(), &TestState::Locked);

        let stuck = StateMachine::new(turnstile_with_alarm(), TestState::Alarm);
        assert!(!stuck.can_act(&TestAction::Pass));
    }

    #[test]
    fn instances_share_graph_but_not_state() {
        let graph = turnstile_with_alarm();
        let mut first = StateMachine::new(Arc::clone(&graph), TestState::Locked);
        let second = StateMachine::new(Arc::clone(&graph), TestState::Locked);

        first.act(&TestAction::Coin).unwrap();

        assert_eq!(first.state(), &TestState::Unlocked);
        assert_eq!(second.state(), &TestState::Locked);
        assert!(Arc::ptr_eq(first.graph(), second.graph()));
    }

    #[test]
    fn plan_to_does_not_move_machine() {
        let machine = StateMachine::new(turnstile_with_alarm(), TestState::Locked);
        let plan = machine.plan_to(&TestState::Alarm).unwrap();

        assert_eq!(plan.actions(), &[TestAction::Cheat]);
        assert_eq!(machine.state(), &TestState::Locked);
    }
}
