//! Replay a plan against a machine, recording what happened.

use super::dispatch::TransitionError;
use super::instance::StateMachine;
use crate::core::{Action, State, StateHistory, StateTransition};
use crate::planner::Plan;
use chrono::Utc;
use thiserror::Error;

/// A plan step that the machine rejected.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Replay rejected at step {step}: {source}")]
pub struct ReplayError {
    /// Zero-based index of the rejected action
    pub step: usize,
    #[source]
    pub source: TransitionError,
}

/// Apply every action of `plan` in order.
///
/// Returns one [`StateTransition`] per action. On failure the machine stays
/// in the state reached before the rejected step.
pub fn replay<S: State, A: Action>(
    machine: &mut StateMachine<S, A>,
    plan: &Plan<A>,
) -> Result<StateHistory<S, A>, ReplayError> {
    let mut history = StateHistory::new();

    for (step, action) in plan.iter().enumerate() {
        let from = machine.state().clone();
        let to = machine
            .act(action)
            .map_err(|source| ReplayError { step, source })?
            .clone();

        history = history.record(StateTransition {
            from,
            to,
            action: action.clone(),
            timestamp: Utc::now(),
        });
    }

    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RuleGraph;
    use std::sync::Arc;

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

    fn graph() -> Arc<RuleGraph<TestState, TestAction>> {
        Arc::new(RuleGraph::from_transitions([
            (TestState::Locked, TestState::Unlocked, TestAction::Coin),
            (TestState::Unlocked, TestState::Locked, TestAction::Pass),
            (TestState::Unlocked, TestState::Alarm, TestAction::Cheat),
        ]))
    }

    #[test]
    fn replay_records_each_step() {
        let mut machine = StateMachine::new(graph(), TestState::Locked);
        let plan = Plan::from(vec![TestAction::Coin, TestAction::Pass, TestAction::Coin]);

        let history = replay(&mut machine, &plan).unwrap();

        assert_eq!(history.len(), 3);
        assert_eq!(
            history.get_path(),
            vec![
                &TestState::Locked,
                &TestState::Unlocked,
                &TestState::Locked,
                &TestState::Unlocked
            ]
        );
        assert_eq!(machine.state(), &TestState::Unlocked);
    }

    #[test]
    fn empty_plan_records_nothing() {
        let mut machine = StateMachine::new(graph(), TestState::Alarm);
        let history = replay(&mut machine, &Plan::empty()).unwrap();

        assert!(history.is_empty());
        assert_eq!(machine.state(), &TestState::Alarm);
    }

    #[test]
    fn rejected_step_stops_replay() {
        let mut machine = StateMachine::new(graph(), TestState::Locked);
        let plan = Plan::from(vec![TestAction::Coin, TestAction::Cheat, TestAction::Pass]);

        let err = replay(&mut machine, &plan).unwrap_err();

        assert_eq!(err.step, 2);
        assert!(matches!(err.source, TransitionError::NoTransition { .. }));
        assert_eq!(machine.state(), &TestState::Alarm);
    }
}
