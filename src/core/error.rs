//! Errors raised by the state graph itself.

use thiserror::Error;

/// Errors that can occur while configuring or evaluating state nodes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StateError {
    /// A transition fired but was never given a destination.
    #[error("Transition out of state '{state}' fired but has no destination")]
    UnsetDestination { state: String },

    /// The parent chain loops back onto itself.
    #[error("Parent chain of state '{state}' contains a cycle")]
    ParentCycle { state: String },
}
