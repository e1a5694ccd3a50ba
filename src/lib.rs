//! hsm: hierarchical state machine building blocks
//!
//! States are shared nodes in a graph. Each node owns an update action, an
//! exit action, an optional parent and an ordered list of guarded
//! transitions. When none of a node's own transitions fire, its ancestors
//! are consulted, so common edges (errors, aborts) can be declared once on a
//! shared parent instead of on every leaf.
//!
//! # Core Concepts
//!
//! - **State**: Cheap, cloneable handle to a shared node; equality is identity
//! - **Transition**: A guard paired with a destination, first match wins
//! - **Guard / Action**: Callbacks over an application-defined context type
//! - **Machine**: Optional run loop that drives a graph to a terminal state
//!
//! # Example
//!
//! ```rust
//! use hsm::core::{is_true, State};
//! use hsm::driver::Machine;
//!
//! #[derive(Default)]
//! struct Context {
//!     fault: bool,
//! }
//!
//! let operating: State<Context> = State::new("operating");
//! let warming = State::new("warming");
//! let running = State::new("running");
//! let failed = State::new("failed");
//! let terminal = State::new("terminal");
//!
//! // Both children inherit the fault edge from their parent.
//! warming.set_parent(&operating).unwrap();
//! running.set_parent(&operating).unwrap();
//! operating.add_transition(|c: &Context| c.fault, &failed);
//!
//! warming.add_transition(is_true::<Context>, &running);
//! failed.add_transition(is_true::<Context>, &terminal);
//!
//! assert_eq!(running.next_state(&Context::default()).unwrap(), running);
//! assert_eq!(running.next_state(&Context { fault: true }).unwrap(), failed);
//!
//! let mut machine = Machine::with_terminal(warming, terminal);
//! machine.step(&Context::default()).unwrap();
//! machine.run(&Context { fault: true }).unwrap();
//! assert_eq!(
//!     machine.history().get_path(),
//!     vec!["warming", "running", "failed", "terminal"]
//! );
//! ```

pub mod builder;
pub mod core;
pub mod driver;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder, StateBuilder, TransitionBuilder};
pub use crate::core::{Action, Guard, State, StateError, StateHistory, StateTransition, Transition};
pub use driver::{Machine, MachineConfig, RunError, StepResult};
