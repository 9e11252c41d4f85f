//! Read-only analyses of a rule graph.
//!
//! - [`reachable_from`]: label-blind reachability, used by the planner as a
//!   feasibility pre-check
//! - [`validate`]: accumulate ambiguous and shadowed rules

mod ambiguity;
mod reachability;

pub use ambiguity::{find_ambiguities, shadowed_edges, validate, Ambiguity, RuleViolation};
pub use reachability::{is_reachable, reachable_from};
