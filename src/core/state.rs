//! Core State trait for rule graph nodes.
//!
//! States are plain values: any component may hold a copy, none owns them.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for rule graph states.
///
/// All methods are pure - no side effects. States are immutable values that
/// identify a node of a [`RuleGraph`](crate::graph::RuleGraph).
///
/// # Required Traits
///
/// - `Clone`: States are copied freely between graph, machine and planner
/// - `Eq` + `Hash`: States key the visited sets of traversal and planning
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: Transition tables are serializable
///
/// # Example
///
/// ```rust
/// use rulegraph::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Open.name(), "Open");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Locked,
        Unlocked,
        Alarm,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Locked => "Locked",
                Self::Unlocked => "Unlocked",
                Self::Alarm => "Alarm",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Locked.name(), "Locked");
        assert_eq!(TestState::Unlocked.name(), "Unlocked");
        assert_eq!(TestState::Alarm.name(), "Alarm");
    }

    #[test]
    fn states_are_hashable_values() {
        let mut seen = HashSet::new();
        assert!(seen.insert(TestState::Locked));
        assert!(!seen.insert(TestState::Locked.clone()));
        assert!(seen.insert(TestState::Alarm));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Unlocked;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
