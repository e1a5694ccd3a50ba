//! Guard predicates for controlling state transitions.
//!
//! Guards decide whether a transition fires for a given context. They
//! receive the context read-only and should not reconfigure the state graph.

use std::fmt;
use std::sync::Arc;

/// Guard that always passes.
pub fn is_true<C>(_context: &C) -> bool {
    true
}

/// Guard that never passes.
pub fn is_false<C>(_context: &C) -> bool {
    false
}

/// Predicate over the context that determines if a transition can fire.
///
/// # Example
///
/// ```rust
/// use hsm::core::Guard;
///
/// struct Sensor {
///     reading: u32,
/// }
///
/// let overheated = Guard::new(|s: &Sensor| s.reading > 90);
///
/// assert!(overheated.check(&Sensor { reading: 95 }));
/// assert!(!overheated.check(&Sensor { reading: 20 }));
/// ```
pub struct Guard<C> {
    predicate: Arc<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C: 'static> Guard<C> {
    /// Create a guard from a predicate function.
    ///
    /// The predicate should be deterministic for a given context; the
    /// machine may evaluate it once per tick.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Guard that passes for every context.
    pub fn always() -> Self {
        Self::new(is_true::<C>)
    }

    /// Guard that rejects every context.
    pub fn never() -> Self {
        Self::new(is_false::<C>)
    }
}

impl<C> Guard<C> {
    /// Check if the guard allows the transition for this context.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}

impl<C> Clone for Guard<C> {
    fn clone(&self) -> Self {
        Guard {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<C: 'static> Default for Guard<C> {
    fn default() -> Self {
        Self::always()
    }
}

impl<C> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Door {
        open: bool,
        locked: bool,
    }

    #[test]
    fn guard_checks_context_fields() {
        let guard = Guard::new(|d: &Door| d.open && !d.locked);

        assert!(guard.check(&Door {
            open: true,
            locked: false
        }));
        assert!(!guard.check(&Door {
            open: true,
            locked: true
        }));
        assert!(!guard.check(&Door {
            open: false,
            locked: false
        }));
    }

    #[test]
    fn constant_guards() {
        let door = Door {
            open: false,
            locked: true,
        };

        assert!(Guard::<Door>::always().check(&door));
        assert!(!Guard::<Door>::never().check(&door));
        assert!(Guard::<Door>::default().check(&door));
        assert!(is_true(&door));
        assert!(!is_false(&door));
    }

    #[test]
    fn guard_is_deterministic() {
        let door = Door {
            open: true,
            locked: false,
        };
        let guard = Guard::new(|d: &Door| d.open);

        let result1 = guard.check(&door);
        let result2 = guard.clone().check(&door);

        assert_eq!(result1, result2);
    }
}
