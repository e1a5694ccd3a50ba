//! Core state machine types and logic.
//!
//! This module contains the hierarchical state graph:
//! - Shared state nodes via [`State`]
//! - Guarded edges via [`Transition`] and [`Guard`]
//! - Update and exit callbacks via [`Action`]
//! - Run history tracking
//!
//! Nothing here drives a machine; see [`crate::driver`] for the run loop.

mod action;
mod error;
mod guard;
mod history;
mod state;
mod transition;

pub use action::{noop, Action};
pub use error::StateError;
pub use guard::{is_false, is_true, Guard};
pub use history::{StateHistory, StateTransition};
pub use state::State;
pub use transition::Transition;
