//! Tabstate: a small named-transition state machine engine.
//!
//! A machine is declared as an initial state, a table of named transitions
//! (each allowing one or several source states and exactly one target), and
//! optional handlers. Handlers are found by name: transition `inject` runs
//! the handler registered as `onInject`, right after the state changes.
//!
//! # Core Concepts
//!
//! - **State**: Any comparable value implementing the `State` trait
//! - **Transitions**: Immutable `{from, to}` descriptors declared under a name
//! - **Handlers**: Optional side effects run after a transition commits
//! - **Registry**: One machine per entity key, created on demand
//!
//! # Example
//!
//! ```rust
//! use tabstate::builder::{create_transition, StateMachineBuilder};
//!
//! let mut water = StateMachineBuilder::<String>::new()
//!     .initial("solid")
//!     .transition("melt", create_transition("solid", "liquid"))
//!     .transition("freeze", create_transition("liquid", "solid"))
//!     .build()
//!     .unwrap()
//!     .into_machine();
//!
//! water.fire("melt", ()).unwrap().unwrap();
//! assert_eq!(water.state(), "liquid");
//!
//! water.fire("freeze", ()).unwrap().unwrap();
//! assert!(water.fire("freeze", ()).unwrap().is_err());
//! assert!(water.fire("sublimate", ()).is_none());
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod registry;

// Re-export commonly used types
pub use builder::{create_transition, BuildError, MachineConfig, StateMachineBuilder};
pub use crate::core::{
    handler_name, Source, State, StateHistory, StateTransition, TransitionDescriptor,
};
pub use machine::{Action, Handler, MachineDefinition, StateMachine, TransitionError};
pub use registry::MachineRegistry;
