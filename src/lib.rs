//! Rulegraph: action-guarded rule graphs with deterministic dispatch and
//! shortest action planning.
//!
//! A [`RuleGraph`] connects states with edges guarded by closed [`Rule`]s
//! over a finite action alphabet. On top of it:
//!
//! - **Reachability**: label-blind traversal ([`analysis::reachable_from`])
//! - **Dispatch**: first-match-wins resolution of `(state, action)`
//!   ([`machine::next_state`])
//! - **Machines**: a shared graph plus one mutable current state
//!   ([`StateMachine`])
//! - **Planning**: the shortest action sequence between two states
//!   ([`planner::plan`])
//!
//! Everything is synchronous and pure except [`StateMachine::act`], which
//! only moves its own machine. A built graph is never mutated again and can
//! be shared behind `Arc` by any number of machines and planners.
//!
//! # Example
//!
//! ```rust
//! use rulegraph::builder::RuleGraphBuilder;
//! use rulegraph::machine::{replay, StateMachine};
//! use rulegraph::{action_enum, state_enum};
//! use std::sync::Arc;
//!
//! state_enum! {
//!     enum Turnstile { Locked, Unlocked, Alarm }
//! }
//! action_enum! {
//!     enum Input { Coin, Pass, Cheat }
//! }
//!
//! let graph = Arc::new(
//!     RuleGraphBuilder::new()
//!         .on(Turnstile::Locked, Turnstile::Unlocked, Input::Coin)
//!         .on(Turnstile::Unlocked, Turnstile::Locked, Input::Pass)
//!         .on(Turnstile::Unlocked, Turnstile::Alarm, Input::Cheat)
//!         .build(),
//! );
//!
//! let mut machine = StateMachine::new(Arc::clone(&graph), Turnstile::Locked);
//! let plan = machine.plan_to(&Turnstile::Alarm).unwrap();
//! assert_eq!(plan.actions(), &[Input::Coin, Input::Cheat]);
//!
//! let history = replay(&mut machine, &plan).unwrap();
//! assert_eq!(history.len(), 2);
//! assert_eq!(machine.state(), &Turnstile::Alarm);
//! ```

pub mod analysis;
pub mod builder;
pub mod core;
pub mod graph;
pub mod machine;
pub mod planner;

// Re-export commonly used types
pub use self::core::{Action, Rule, State, StateHistory, StateTransition};
pub use graph::{Edge, RuleGraph};
pub use machine::{StateMachine, TransitionError};
pub use planner::{Plan, PlanError};
