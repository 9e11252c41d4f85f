//! Planning errors.

use thiserror::Error;

/// Errors that can occur while planning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("State '{to}' is unreachable from '{from}'")]
    Unreachable { from: String, to: String },
}
