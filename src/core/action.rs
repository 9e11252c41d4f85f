//! Action trait for the closed alphabet that triggers transitions.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for the actions that drive a state machine.
///
/// The alphabet is closed and known in advance. [`Action::alphabet`] lists
/// every action in priority order; the planner expands its frontier in that
/// order, so it also decides ties between equally short plans.
///
/// # Example
///
/// ```rust
/// use rulegraph::core::Action;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorAction {
///     Push,
///     Pull,
/// }
///
/// impl Action for DoorAction {
///     fn name(&self) -> &str {
///         match self {
///             Self::Push => "Push",
///             Self::Pull => "Pull",
///         }
///     }
///
///     fn alphabet() -> Vec<Self> {
///         vec![Self::Push, Self::Pull]
///     }
/// }
///
/// assert_eq!(DoorAction::alphabet().first(), Some(&DoorAction::Push));
/// ```
pub trait Action:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the action's name for display/logging.
    fn name(&self) -> &str;

    /// Every action of the alphabet, highest priority first.
    fn alphabet() -> Vec<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestAction {
        Coin,
        Pass,
        Cheat,
    }

    impl Action for TestAction {
        fn name(&self) -> &str {
            match self {
                Self::Coin => "Coin",
                Self::Pass => "Pass",
                Self::Cheat => "Cheat",
            }
        }

        fn alphabet() -> Vec<Self> {
            vec![Self::Coin, Self::Pass, Self::Cheat]
        }
    }

    #[test]
    fn alphabet_preserves_declared_order() {
        assert_eq!(
            TestAction::alphabet(),
            vec![TestAction::Coin, TestAction::Pass, TestAction::Cheat]
        );
    }
}
