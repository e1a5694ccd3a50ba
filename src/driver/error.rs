//! Errors raised while driving a machine.

use crate::core::StateError;
use thiserror::Error;

/// Errors that can occur while stepping or running a machine
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RunError {
    #[error("Tick limit ({limit}) reached while in state '{state}'")]
    TickLimitExceeded { limit: usize, state: String },

    #[error("Machine already reached terminal state '{state}'")]
    AlreadyTerminated { state: String },

    #[error("Machine has neither a terminal state nor a tick limit")]
    Unbounded,

    #[error(transparent)]
    State(#[from] StateError),
}
