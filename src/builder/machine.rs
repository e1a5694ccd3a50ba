//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::driver::{Machine, MachineConfig};

/// Builder for constructing a [`Machine`] with a fluent API.
pub struct MachineBuilder<C> {
    initial: Option<State<C>>,
    terminal: Option<State<C>>,
    config: MachineConfig,
}

impl<C> MachineBuilder<C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            terminal: None,
            config: MachineConfig::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: &State<C>) -> Self {
        self.initial = Some(state.clone());
        self
    }

    /// Set the terminal state (optional).
    pub fn terminal(mut self, state: &State<C>) -> Self {
        self.terminal = Some(state.clone());
        self
    }

    /// Limit the number of ticks the machine may run.
    pub fn max_ticks(mut self, n: usize) -> Self {
        self.config.max_ticks = Some(n);
        self
    }

    /// Enable or disable transition history.
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    /// Replace the whole configuration, e.g. one loaded from a file.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Machine<C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let machine = match self.terminal {
            Some(terminal) => Machine::with_terminal(initial, terminal),
            None => Machine::new(initial),
        };

        Ok(machine.with_config(self.config))
    }
}

impl<C> Default for MachineBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
