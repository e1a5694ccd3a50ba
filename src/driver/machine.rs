//! Run loop that drives a state graph to a terminal state.

use crate::core::{State, StateHistory, StateTransition};
use crate::driver::config::MachineConfig;
use crate::driver::error::RunError;
use chrono::Utc;
use std::fmt;
use tracing::{debug, warn};

/// Result of executing a single tick
pub enum StepResult<C> {
    /// No transition fired; the state is still current
    Stayed(State<C>),

    /// Moved to a new state
    Transitioned { from: State<C>, to: State<C> },

    /// Moved into the terminal state; the machine is finished
    Terminated { from: State<C>, terminal: State<C> },
}

impl<C> StepResult<C> {
    /// The state that is current after the tick.
    pub fn state(&self) -> &State<C> {
        match self {
            Self::Stayed(state) => state,
            Self::Transitioned { to, .. } => to,
            Self::Terminated { terminal, .. } => terminal,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, Self::Terminated { .. })
    }
}

impl<C> Clone for StepResult<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Stayed(state) => Self::Stayed(state.clone()),
            Self::Transitioned { from, to } => Self::Transitioned {
                from: from.clone(),
                to: to.clone(),
            },
            Self::Terminated { from, terminal } => Self::Terminated {
                from: from.clone(),
                terminal: terminal.clone(),
            },
        }
    }
}

impl<C> PartialEq for StepResult<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Stayed(a), Self::Stayed(b)) => a == b,
            (
                Self::Transitioned { from: f1, to: t1 },
                Self::Transitioned { from: f2, to: t2 },
            ) => f1 == f2 && t1 == t2,
            (
                Self::Terminated {
                    from: f1,
                    terminal: t1,
                },
                Self::Terminated {
                    from: f2,
                    terminal: t2,
                },
            ) => f1 == f2 && t1 == t2,
            _ => false,
        }
    }
}

impl<C> fmt::Debug for StepResult<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stayed(state) => f.debug_tuple("Stayed").field(state).finish(),
            Self::Transitioned { from, to } => f
                .debug_struct("Transitioned")
                .field("from", from)
                .field("to", to)
                .finish(),
            Self::Terminated { from, terminal } => f
                .debug_struct("Terminated")
                .field("from", from)
                .field("terminal", terminal)
                .finish(),
        }
    }
}

/// Drives a state graph: update the current state, then replace it with
/// its next state, until the terminal state becomes current.
///
/// The terminal state's update action is never run.
pub struct Machine<C> {
    current: State<C>,
    terminal: Option<State<C>>,
    config: MachineConfig,
    history: StateHistory,
    ticks: usize,
}

impl<C> Machine<C> {
    /// Create a machine starting in `initial` with no terminal state.
    pub fn new(initial: State<C>) -> Self {
        Self {
            current: initial,
            terminal: None,
            config: MachineConfig::default(),
            history: StateHistory::new(),
            ticks: 0,
        }
    }

    /// Create a machine that stops once `terminal` becomes current.
    pub fn with_terminal(initial: State<C>, terminal: State<C>) -> Self {
        Self {
            terminal: Some(terminal),
            ..Self::new(initial)
        }
    }

    /// Replace the run configuration.
    pub fn with_config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Get current state
    pub fn current(&self) -> &State<C> {
        &self.current
    }

    pub fn terminal(&self) -> Option<&State<C>> {
        self.terminal.as_ref()
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Number of ticks executed so far
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// Get state history
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Check if the terminal state is current
    pub fn is_terminated(&self) -> bool {
        self.terminal.as_ref() == Some(&self.current)
    }

    /// Execute one tick: run the current state's update action, then move
    /// to its next state.
    pub fn step(&mut self, context: &C) -> Result<StepResult<C>, RunError> {
        if self.is_terminated() {
            return Err(RunError::AlreadyTerminated {
                state: self.current.id(),
            });
        }

        if let Some(limit) = self.config.max_ticks {
            if self.ticks >= limit {
                warn!(limit, state = %self.current, "tick limit reached");
                return Err(RunError::TickLimitExceeded {
                    limit,
                    state: self.current.id(),
                });
            }
        }

        self.ticks += 1;
        debug!(tick = self.ticks, state = %self.current, "updating state");
        self.current.update(context);

        let next = self.current.next_state(context)?;
        if next == self.current {
            return Ok(StepResult::Stayed(next));
        }

        if self.config.record_history {
            self.history = self.history.record(StateTransition {
                from: self.current.id(),
                to: next.id(),
                tick: self.ticks,
                timestamp: Utc::now(),
            });
        }

        let from = std::mem::replace(&mut self.current, next.clone());
        if self.is_terminated() {
            debug!(tick = self.ticks, state = %next, "reached terminal state");
            Ok(StepResult::Terminated {
                from,
                terminal: next,
            })
        } else {
            debug!(tick = self.ticks, from = %from, to = %next, "transitioned");
            Ok(StepResult::Transitioned { from, to: next })
        }
    }

    /// Step with the same context until the terminal state is current.
    ///
    /// Returns the number of ticks this call executed.
    pub fn run(&mut self, context: &C) -> Result<usize, RunError> {
        self.run_with(|_| context)
    }

    /// Step until the terminal state is current, asking `next_context` for
    /// the context of each tick. The closure receives the tick number about
    /// to run, starting at 1.
    ///
    /// Returns the number of ticks this call executed.
    pub fn run_with<F, B>(&mut self, mut next_context: F) -> Result<usize, RunError>
    where
        F: FnMut(usize) -> B,
        B: std::borrow::Borrow<C>,
    {
        if self.terminal.is_none() && self.config.max_ticks.is_none() {
            return Err(RunError::Unbounded);
        }

        let start = self.ticks;
        while !self.is_terminated() {
            let context = next_context(self.ticks + 1);
            self.step(context.borrow())?;
        }
        Ok(self.ticks - start)
    }
}

impl<C> fmt::Debug for Machine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("terminal", &self.terminal)
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}
