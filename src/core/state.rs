//! Shared state nodes and hierarchical transition lookup.
//!
//! A [`State`] is a handle to a node record. Cloning the handle aliases the
//! record: configuration made through any clone is seen through every other
//! clone, including clones already stored as transition destinations or
//! parent links. Equality is record identity, never the id string.

use super::action::Action;
use super::error::StateError;
use super::guard::Guard;
use super::transition::Transition;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::trace;

struct Node<C> {
    id: String,
    parent: Option<State<C>>,
    on_update: Action<C>,
    on_exit: Action<C>,
    transitions: Vec<Transition<C>>,
}

/// Handle to a state in a hierarchical state machine.
///
/// `C` is the embedder's context type. The core never inspects it; it is
/// only handed by reference to actions and guards.
///
/// # Example
///
/// ```rust
/// use hsm::core::State;
///
/// struct Job {
///     finished: bool,
/// }
///
/// let running: State<Job> = State::new("running");
/// let done: State<Job> = State::new("done");
/// running.add_transition(|job: &Job| job.finished, &done);
///
/// let next = running.next_state(&Job { finished: false }).unwrap();
/// assert_eq!(next, running);
///
/// let next = running.next_state(&Job { finished: true }).unwrap();
/// assert_eq!(next, done);
/// ```
pub struct State<C> {
    node: Arc<RwLock<Node<C>>>,
}

impl<C: 'static> State<C> {
    /// Create a root state with no-op update and exit actions and no
    /// transitions.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            node: Arc::new(RwLock::new(Node {
                id: id.into(),
                parent: None,
                on_update: Action::noop(),
                on_exit: Action::noop(),
                transitions: Vec::new(),
            })),
        }
    }

    /// Replace the action run on every tick while this state is current.
    pub fn set_update<F>(&self, action: F)
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.replace_update(Action::new(action));
    }

    /// Replace the action run when one of this state's transitions fires.
    pub fn set_exit<F>(&self, action: F)
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        self.replace_exit(Action::new(action));
    }

    /// Append a transition to `destination` guarded by `guard`.
    ///
    /// Transitions are evaluated in the order they were added.
    pub fn add_transition<F>(&self, guard: F, destination: &State<C>)
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.push_transition(Transition::new(Guard::new(guard), destination));
    }
}

impl<C> State<C> {
    fn read(&self) -> RwLockReadGuard<'_, Node<C>> {
        self.node.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Node<C>> {
        self.node.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Informational name of this state.
    pub fn id(&self) -> String {
        self.read().id.clone()
    }

    /// The parent state, if any.
    pub fn parent(&self) -> Option<State<C>> {
        self.read().parent.clone()
    }

    /// Number of outgoing transitions declared directly on this state.
    pub fn transition_count(&self) -> usize {
        self.read().transitions.len()
    }

    /// Snapshot of the transitions declared directly on this state.
    pub fn transitions(&self) -> Vec<Transition<C>> {
        self.read().transitions.clone()
    }

    /// Parent chain, nearest ancestor first.
    pub fn ancestors(&self) -> Vec<State<C>> {
        let mut chain: Vec<State<C>> = Vec::new();
        let mut cursor = self.parent();
        while let Some(ancestor) = cursor {
            if ancestor == *self || chain.contains(&ancestor) {
                break;
            }
            cursor = ancestor.parent();
            chain.push(ancestor);
        }
        chain
    }

    /// True if `other` appears in this state's parent chain.
    pub fn is_descendant_of(&self, other: &State<C>) -> bool {
        self.ancestors().contains(other)
    }

    pub(crate) fn replace_update(&self, action: Action<C>) {
        self.write().on_update = action;
    }

    pub(crate) fn replace_exit(&self, action: Action<C>) {
        self.write().on_exit = action;
    }

    /// Make `parent` this state's parent.
    ///
    /// Fails with [`StateError::ParentCycle`] if `parent` is this state or
    /// already descends from it; the existing parent is kept in that case.
    pub fn set_parent(&self, parent: &State<C>) -> Result<(), StateError> {
        if parent == self || parent.is_descendant_of(self) {
            return Err(StateError::ParentCycle { state: self.id() });
        }
        self.write().parent = Some(parent.clone());
        Ok(())
    }

    /// Turn this state back into a root.
    pub fn clear_parent(&self) {
        self.write().parent = None;
    }

    /// Append a pre-built transition.
    pub fn push_transition(&self, transition: Transition<C>) {
        self.write().transitions.push(transition);
    }

    /// Drop all transitions and the parent link.
    ///
    /// Graphs with cycles keep their nodes alive through their own handles;
    /// disconnecting every node releases them.
    pub fn disconnect(&self) {
        let mut node = self.write();
        node.transitions.clear();
        node.parent = None;
    }

    /// Run this state's update action. Transitions are not consulted.
    pub fn update(&self, context: &C) {
        let action = self.read().on_update.clone();
        action.run(context);
    }

    /// Compute the state that follows this one for `context`.
    ///
    /// This state's transitions are checked in declaration order and the
    /// first passing guard wins: the exit action of this state runs and the
    /// transition's destination is returned. Later guards are not evaluated.
    ///
    /// When nothing fires locally the parent is asked the same question,
    /// and so on up the chain. The exit action that runs is the one of the
    /// state whose transition fired; states that only delegated are not
    /// exited. If the winning destination is one of the ancestors walked
    /// through (the parent answered with itself), or nothing fires anywhere,
    /// this state is returned unchanged.
    pub fn next_state(&self, context: &C) -> Result<State<C>, StateError> {
        let mut walked: Vec<State<C>> = Vec::new();
        let mut current = self.clone();

        loop {
            let (transitions, on_exit, parent) = {
                let node = current.read();
                (
                    node.transitions.clone(),
                    node.on_exit.clone(),
                    node.parent.clone(),
                )
            };

            if let Some(fired) = transitions.iter().find(|t| t.is_satisfied_by(context)) {
                trace!(state = %current, "transition guard passed");
                on_exit.run(context);

                let destination = fired.destination.clone().ok_or_else(|| {
                    StateError::UnsetDestination {
                        state: current.id(),
                    }
                })?;

                if walked.contains(&destination) {
                    return Ok(self.clone());
                }
                return Ok(destination);
            }

            let Some(parent) = parent else {
                return Ok(self.clone());
            };

            if parent == *self || walked.contains(&parent) {
                return Err(StateError::ParentCycle { state: self.id() });
            }

            trace!(state = %current, parent = %parent, "no transition fired, delegating to parent");
            walked.push(parent.clone());
            current = parent;
        }
    }
}

impl<C> Clone for State<C> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

impl<C> PartialEq for State<C> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl<C> Eq for State<C> {}

impl<C> Hash for State<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.node), state)
    }
}

impl<C> fmt::Display for State<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.read().id)
    }
}

impl<C> fmt::Debug for State<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.read();
        f.debug_struct("State")
            .field("id", &node.id)
            .field("parent", &node.parent.as_ref().map(State::id))
            .field("transitions", &node.transitions.len())
            .finish()
    }
}
