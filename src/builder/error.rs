//! Build errors for state, transition and machine builders.

use crate::core::StateError;
use thiserror::Error;

/// Errors that can occur when building states, transitions and machines.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("State id not specified. Call .id(name) before .build()")]
    MissingId,

    #[error("Transition destination not specified. Call .to(state)")]
    MissingDestination,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Invalid parent: {0}")]
    InvalidParent(#[from] StateError),
}
