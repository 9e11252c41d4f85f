//! Build errors for the strict graph builder.

use crate::analysis::RuleViolation;
use thiserror::Error;

/// Errors that can occur when building a rule graph strictly.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Rule set has {} violation(s)", .0.len())]
    InvalidRules(Vec<RuleViolation>),
}

impl BuildError {
    pub fn violations(&self) -> &[RuleViolation] {
        match self {
            BuildError::InvalidRules(violations) => violations,
        }
    }
}
