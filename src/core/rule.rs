//! Closed transition rules over the action alphabet.
//!
//! A rule decides which actions trigger an edge. Rules are data, not
//! closures, so rule sets stay serializable and can be enumerated against
//! the alphabet by the analysis pass.

use super::action::Action;
use serde::{Deserialize, Serialize};

/// Condition attached to an edge.
///
/// # Example
///
/// ```rust
/// use rulegraph::action_enum;
/// use rulegraph::core::Rule;
///
/// action_enum! {
///     enum Key {
///         Up,
///         Down,
///         Enter,
///     }
/// }
///
/// let arrows = Rule::AnyOf(vec![Key::Up, Key::Down]);
/// assert!(arrows.matches(&Key::Down));
/// assert!(!arrows.matches(&Key::Enter));
///
/// assert!(Rule::on(Key::Enter).matches(&Key::Enter));
/// assert!(Rule::<Key>::Any.matches(&Key::Up));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "", rename_all = "snake_case")]
pub enum Rule<A: Action> {
    /// Matches exactly one action.
    On(A),

    /// Matches any of the listed actions.
    AnyOf(Vec<A>),

    /// Matches every action except the listed ones.
    AnyExcept(Vec<A>),

    /// Matches every action.
    Any,
}

impl<A: Action> Rule<A> {
    /// Rule triggered by a single action.
    pub fn on(action: A) -> Self {
        Rule::On(action)
    }

    /// Check whether `action` triggers this rule (pure).
    pub fn matches(&self, action: &A) -> bool {
        match self {
            Rule::On(expected) => expected == action,
            Rule::AnyOf(actions) => actions.contains(action),
            Rule::AnyExcept(actions) => !actions.contains(action),
            Rule::Any => true,
        }
    }

    /// Actions of `alphabet` accepted by this rule, in alphabet order.
    pub fn accepted<'a>(&self, alphabet: &'a [A]) -> Vec<&'a A> {
        alphabet.iter().filter(|a| self.matches(a)).collect()
    }
}

impl<A: Action> From<A> for Rule<A> {
    fn from(action: A) -> Self {
        Rule::On(action)
    }
}
