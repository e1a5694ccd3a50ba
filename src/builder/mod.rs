//! Builder API for ergonomic state graph construction.
//!
//! The [`State`] setters are enough to wire a graph imperatively. The
//! builders here validate required pieces up front and let a state be
//! declared in one expression.

pub mod error;
pub mod machine;
pub mod state;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use state::StateBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Guard, State, Transition};

/// Create an unconditional transition to `to`.
///
/// # Example
///
/// ```
/// use hsm::builder::simple_transition;
/// use hsm::core::State;
///
/// let end: State<()> = State::new("end");
/// let start: State<()> = State::new("start");
/// start.push_transition(simple_transition(&end));
///
/// assert_eq!(start.next_state(&()).unwrap(), end);
/// ```
pub fn simple_transition<C: 'static>(to: &State<C>) -> Transition<C> {
    Transition::to(to)
}

/// Create a transition to `to` with a guard predicate.
///
/// # Example
///
/// ```
/// use hsm::builder::guarded_transition;
/// use hsm::core::State;
///
/// let overflow: State<u32> = State::new("overflow");
/// let filling: State<u32> = State::new("filling");
/// filling.push_transition(guarded_transition(&overflow, |level: &u32| *level > 100));
///
/// assert_eq!(filling.next_state(&50).unwrap(), filling);
/// assert_eq!(filling.next_state(&150).unwrap(), overflow);
/// ```
pub fn guarded_transition<C, F>(to: &State<C>, guard: F) -> Transition<C>
where
    C: 'static,
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    Transition::new(Guard::new(guard), to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_transition_always_fires() {
        let end = State::<i32>::new("end");
        let transition = simple_transition(&end);

        assert!(transition.is_satisfied_by(&-1));
        assert_eq!(transition.destination, Some(end));
    }

    #[test]
    fn guarded_transition_respects_guard() {
        let end = State::<i32>::new("end");
        let transition = guarded_transition(&end, |n: &i32| *n < 0);

        assert!(transition.is_satisfied_by(&-1));
        assert!(!transition.is_satisfied_by(&1));
    }
}
