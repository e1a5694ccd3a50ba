//! Builder for constructing state nodes in one expression.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Action, Guard, State, Transition};

/// Builder for configuring a [`State`] before it is shared.
///
/// # Example
///
/// ```rust
/// use hsm::builder::StateBuilder;
///
/// let done = StateBuilder::<u32>::new().id("done").build().unwrap();
/// let counting = StateBuilder::new()
///     .id("counting")
///     .on_update(|n: &u32| println!("tick {n}"))
///     .when(|n: &u32| *n >= 3, &done)
///     .build()
///     .unwrap();
///
/// assert_eq!(counting.next_state(&3).unwrap(), done);
/// ```
pub struct StateBuilder<C> {
    id: Option<String>,
    parent: Option<State<C>>,
    on_update: Option<Action<C>>,
    on_exit: Option<Action<C>>,
    transitions: Vec<Transition<C>>,
}

impl<C: 'static> StateBuilder<C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            id: None,
            parent: None,
            on_update: None,
            on_exit: None,
            transitions: Vec::new(),
        }
    }

    /// Set the state id (required).
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the parent state (optional).
    pub fn parent(mut self, parent: &State<C>) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    /// Set the update action (optional).
    pub fn on_update<F>(mut self, action: F) -> Self
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.on_update = Some(Action::new(action));
        self
    }

    /// Set the exit action (optional).
    pub fn on_exit<F>(mut self, action: F) -> Self
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.on_exit = Some(Action::new(action));
        self
    }

    /// Add a guarded transition to `destination`.
    pub fn when<F>(mut self, guard: F, destination: &State<C>) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.transitions
            .push(Transition::new(Guard::new(guard), destination));
        self
    }

    /// Add an unconditional transition to `destination`.
    pub fn always(mut self, destination: &State<C>) -> Self {
        self.transitions.push(Transition::to(destination));
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<C>) -> Result<Self, BuildError> {
        self.transitions.push(builder.build()?);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<C>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Build the state.
    pub fn build(self) -> Result<State<C>, BuildError> {
        let id = self.id.ok_or(BuildError::MissingId)?;
        let state = State::new(id);

        if let Some(parent) = &self.parent {
            state.set_parent(parent)?;
        }
        if let Some(action) = self.on_update {
            state.replace_update(action);
        }
        if let Some(action) = self.on_exit {
            state.replace_exit(action);
        }
        for transition in self.transitions {
            state.push_transition(transition);
        }

        Ok(state)
    }
}

impl<C: 'static> Default for StateBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct Flags {
        go: bool,
    }

    #[test]
    fn builder_requires_id() {
        let result = StateBuilder::<Flags>::new().build();

        assert!(matches!(result, Err(BuildError::MissingId)));
    }

    #[test]
    fn builder_wires_everything() {
        let exits = Arc::new(AtomicUsize::new(0));
        let updates = Arc::new(AtomicUsize::new(0));
        let (exit_sink, update_sink) = (Arc::clone(&exits), Arc::clone(&updates));

        let root = State::<Flags>::new("root");
        let target = State::new("target");
        let state = StateBuilder::new()
            .id("leaf")
            .parent(&root)
            .on_update(move |_: &Flags| {
                update_sink.fetch_add(1, Ordering::SeqCst);
            })
            .on_exit(move |_: &Flags| {
                exit_sink.fetch_add(1, Ordering::SeqCst);
            })
            .when(|f: &Flags| f.go, &target)
            .build()
            .unwrap();

        assert_eq!(state.id(), "leaf");
        assert_eq!(state.parent(), Some(root));

        state.update(&Flags::default());
        assert_eq!(state.next_state(&Flags::default()).unwrap(), state);
        assert_eq!(state.next_state(&Flags { go: true }).unwrap(), target);

        assert_eq!(updates.load(Ordering::SeqCst), 1);
        assert_eq!(exits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn transitions_keep_declaration_order() {
        let first = State::<Flags>::new("first");
        let second = State::new("second");
        let state = StateBuilder::new()
            .id("source")
            .always(&first)
            .transition(TransitionBuilder::new().to(&second))
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(state.transition_count(), 2);
        assert_eq!(state.next_state(&Flags::default()).unwrap(), first);
    }

    #[test]
    fn invalid_transition_builder_is_reported() {
        let result = StateBuilder::<Flags>::new()
            .id("source")
            .transition(TransitionBuilder::new());

        assert!(matches!(result, Err(BuildError::MissingDestination)));
    }
}
