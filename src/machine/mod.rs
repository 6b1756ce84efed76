//! The state machine engine.
//!
//! A [`MachineDefinition`] holds the declared transitions and handlers. A
//! [`StateMachine`] is one live instance of it:
//!
//! - `state()` reads the current state
//! - `can(&descriptor)` evaluates the source-state guard
//! - `action(name)` binds a declared transition, `None` otherwise
//!
//! Firing is synchronous. The state is updated before the handler runs, and
//! a handler may fire further transitions on the machine it is given.

mod definition;
mod error;
mod instance;

pub use definition::{Handler, MachineDefinition};
pub use error::TransitionError;
pub use instance::{Action, StateMachine};
