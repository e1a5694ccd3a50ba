//! Side-effecting callbacks run on update and exit.

use std::fmt;
use std::sync::Arc;

/// No-op action. Usable anywhere a plain `fn(&C)` is accepted.
///
/// ```rust
/// use hsm::core::{noop, State};
///
/// let idle: State<u32> = State::new("idle");
/// idle.set_update(noop::<u32>);
/// idle.update(&7);
/// ```
pub fn noop<C>(_context: &C) {}

/// Procedure invoked with the current context.
///
/// Cloning an action is cheap; clones share the same closure.
pub struct Action<C> {
    callback: Arc<dyn Fn(&C) + Send + Sync>,
}

impl<C: 'static> Action<C> {
    /// Wrap a closure or function item.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&C) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Action that does nothing.
    pub fn noop() -> Self {
        Self::new(noop::<C>)
    }
}

impl<C> Action<C> {
    /// Run the action.
    pub fn run(&self, context: &C) {
        (self.callback)(context)
    }
}

impl<C> Clone for Action<C> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<C: 'static> Default for Action<C> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<C> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn action_runs_callback_with_context() {
        let seen = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&seen);
        let action = Action::new(move |value: &usize| {
            sink.fetch_add(*value, Ordering::SeqCst);
        });

        action.run(&3);
        action.run(&4);

        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn clones_share_the_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&calls);
        let action = Action::new(move |_: &()| {
            sink.fetch_add(1, Ordering::SeqCst);
        });
        let copy = action.clone();

        action.run(&());
        copy.run(&());

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn noop_accepts_any_context() {
        Action::<String>::noop().run(&"ignored".to_string());
        Action::<Vec<u8>>::default().run(&vec![1, 2, 3]);
        noop(&42);
    }
}
