//! Core value types of the rule graph engine.
//!
//! - States and actions via the `State` and `Action` traits
//! - Closed transition rules (`Rule`)
//! - Immutable transition history
//!
//! Everything in this module is pure data.

mod action;
mod history;
mod rule;
mod state;

pub use action::Action;
pub use history::{StateHistory, StateTransition};
pub use rule::Rule;
pub use state::State;
