//! Guarded edges between states.

use super::guard::Guard;
use super::state::State;
use std::fmt;

/// A transition to a destination state, taken when its guard passes.
///
/// The default transition has an always-true guard and no destination.
/// A transition without a destination is legal to build, but evaluating it
/// through [`State::next_state`] reports
/// [`StateError::UnsetDestination`](super::StateError::UnsetDestination).
pub struct Transition<C> {
    pub guard: Guard<C>,
    pub destination: Option<State<C>>,
}

impl<C: 'static> Transition<C> {
    /// Transition to `destination` when `guard` passes.
    pub fn new(guard: Guard<C>, destination: &State<C>) -> Self {
        Self {
            guard,
            destination: Some(destination.clone()),
        }
    }

    /// Unconditional transition to `destination`.
    pub fn to(destination: &State<C>) -> Self {
        Self::new(Guard::always(), destination)
    }

    /// Replace the guard, keeping the destination.
    pub fn with_guard(mut self, guard: Guard<C>) -> Self {
        self.guard = guard;
        self
    }
}

impl<C> Transition<C> {
    /// True once a destination has been assigned.
    pub fn has_destination(&self) -> bool {
        self.destination.is_some()
    }

    /// Evaluate the guard against `context`.
    pub fn is_satisfied_by(&self, context: &C) -> bool {
        self.guard.check(context)
    }
}

impl<C: 'static> Default for Transition<C> {
    fn default() -> Self {
        Self {
            guard: Guard::always(),
            destination: None,
        }
    }
}

impl<C> Clone for Transition<C> {
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            destination: self.destination.clone(),
        }
    }
}

impl<C> fmt::Debug for Transition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("destination", &self.destination)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unconditional_without_destination() {
        let transition = Transition::<u8>::default();

        assert!(transition.is_satisfied_by(&0));
        assert!(!transition.has_destination());
    }

    #[test]
    fn to_targets_destination() {
        let done = State::<u8>::new("done");
        let transition = Transition::to(&done);

        assert!(transition.has_destination());
        assert_eq!(transition.destination.as_ref(), Some(&done));
        assert!(transition.is_satisfied_by(&1));
    }

    #[test]
    fn with_guard_replaces_predicate() {
        let done = State::<u8>::new("done");
        let transition = Transition::to(&done).with_guard(Guard::new(|n: &u8| *n > 10));

        assert!(!transition.is_satisfied_by(&3));
        assert!(transition.is_satisfied_by(&11));
        assert_eq!(transition.destination, Some(done));
    }

    #[test]
    fn clone_aliases_destination() {
        let done = State::<u8>::new("done");
        let transition = Transition::to(&done);
        let copy = transition.clone();

        assert_eq!(transition.destination, copy.destination);
    }
}
