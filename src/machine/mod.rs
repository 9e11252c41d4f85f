//! Dispatch and the mutable machine instance.
//!
//! - [`next_state`]: first-match-wins resolution of `(state, action)`
//! - [`StateMachine`]: shared graph plus the single mutable `current`
//! - [`replay`]: drive a machine through a [`Plan`](crate::planner::Plan)

pub mod dispatch;
mod instance;
mod replay;

pub use dispatch::{edge_for, next_state, TransitionError};
pub use instance::StateMachine;
pub use replay::{replay, ReplayError};
