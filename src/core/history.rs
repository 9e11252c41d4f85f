//! Transition history recorded while driving a state machine.
//!
//! History is immutable: [`StateHistory::record`] returns a new history with
//! the transition appended.

use super::action::Action;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single dispatched transition.
///
/// # Example
///
/// ```rust
/// use rulegraph::core::StateTransition;
/// use rulegraph::{action_enum, state_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum Light { Off, On }
/// }
/// action_enum! {
///     enum Switch { Flip }
/// }
///
/// let transition = StateTransition {
///     from: Light::Off,
///     to: Light::On,
///     action: Switch::Flip,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, Light::On);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, A: Action> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The action that triggered the transition
    pub action: A,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, A: Action> {
    transitions: Vec<StateTransition<S, A>>,
}

impl<S: State, A: Action> Default for StateHistory<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action> StateHistory<S, A> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S, A>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: initial state, then
    /// the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Actions applied, in order.
    pub fn actions(&self) -> Vec<&A> {
        self.transitions.iter().map(|t| &t.action).collect()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S, A>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Locked,
        Unlocked,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Locked => "Locked",
                Self::Unlocked => "Unlocked",
            }
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestAction {
        Coin,
        Pass,
    }

    impl Action for TestAction {
        fn name(&self) -> &str {
            match self {
                Self::Coin => "Coin",
                Self::Pass => "Pass",
            }
        }

        fn alphabet() -> Vec<Self> {
            vec![Self::Coin, Self::Pass]
        }
    }

    fn unlock_at(timestamp: DateTime<Utc>) -> StateTransition<TestState, TestAction> {
        StateTransition {
            from: TestState::Locked,
            to: TestState::Unlocked,
            action: TestAction::Coin,
            timestamp,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState, TestAction> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.actions().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(unlock_at(Utc::now()));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(unlock_at(Utc::now()))
            .record(StateTransition {
                from: TestState::Unlocked,
                to: TestState::Locked,
                action: TestAction::Pass,
                timestamp: Utc::now(),
            });

        let path = history.get_path();
        assert_eq!(
            path,
            vec![&TestState::Locked, &TestState::Unlocked, &TestState::Locked]
        );
        assert_eq!(history.actions(), vec![&TestAction::Coin, &TestAction::Pass]);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(unlock_at(start))
            .record(unlock_at(start + chrono::Duration::milliseconds(250)));

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(unlock_at(Utc::now()));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(unlock_at(Utc::now()));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState, TestAction> =
            serde_json::from_str(&json).unwrap();

        assert_eq!(history.transitions(), deserialized.transitions());
    }
}
