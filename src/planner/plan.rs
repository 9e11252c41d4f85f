//! The plan value produced by the planner.

use crate::core::Action;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of actions that drives a machine from one state to
/// another. A plain value: clone it, store it, replay it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "", transparent)]
pub struct Plan<A: Action> {
    actions: Vec<A>,
}

impl<A: Action> Plan<A> {
    pub fn empty() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.actions.iter()
    }

    pub fn into_actions(self) -> Vec<A> {
        self.actions
    }
}

impl<A: Action> Default for Plan<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A: Action> From<Vec<A>> for Plan<A> {
    fn from(actions: Vec<A>) -> Self {
        Self { actions }
    }
}

impl<A: Action> IntoIterator for Plan<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl<'a, A: Action> IntoIterator for &'a Plan<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

impl<A: Action> fmt::Display for Plan<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, action) in self.actions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(action.name())?;
        }
        f.write_str("]")
    }
}
