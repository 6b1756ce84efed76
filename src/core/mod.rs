//! Core state machine types.
//!
//! This module contains the value types everything else is built from:
//! - State definitions via the `State` trait
//! - Transition descriptors and their source sets
//! - The handler naming convention
//! - In-memory history of committed transitions

mod history;
mod naming;
mod state;
mod transition;

pub use history::{StateHistory, StateTransition};
pub use naming::{handler_name, HANDLER_PREFIX};
pub use state::State;
pub use transition::{Source, TransitionDescriptor};
