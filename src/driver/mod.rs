//! Run loop around the state graph.
//!
//! The core only answers "what comes next"; this module repeatedly asks
//! that question, runs update actions, records a history and enforces
//! configured limits.
//!
//! # Example
//!
//! ```rust
//! use hsm::core::{is_true, State};
//! use hsm::driver::Machine;
//!
//! let start: State<()> = State::new("start");
//! let end: State<()> = State::new("end");
//! start.add_transition(is_true::<()>, &end);
//!
//! let mut machine = Machine::with_terminal(start, end);
//! let ticks = machine.run(&()).unwrap();
//!
//! assert_eq!(ticks, 1);
//! assert_eq!(machine.history().get_path(), vec!["start", "end"]);
//! ```

mod config;
mod error;
mod machine;

pub use config::MachineConfig;
pub use error::RunError;
pub use machine::{Machine, StepResult};
