//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::core::{Guard, State, Transition};

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<C> {
    guard: Option<Guard<C>>,
    destination: Option<State<C>>,
}

impl<C: 'static> TransitionBuilder<C> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            guard: None,
            destination: None,
        }
    }

    /// Set the destination state (required).
    pub fn to(mut self, destination: &State<C>) -> Self {
        self.destination = Some(destination.clone());
        self
    }

    /// Set a pre-built guard (optional, defaults to always-true).
    pub fn guard(mut self, guard: Guard<C>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Set the guard from a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<C>, BuildError> {
        let destination = self.destination.ok_or(BuildError::MissingDestination)?;
        let guard = self.guard.unwrap_or_default();

        Ok(Transition::new(guard, &destination))
    }
}

impl<C: 'static> Default for TransitionBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
