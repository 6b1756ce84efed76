//! Builder API for machine definitions.
//!
//! This module provides the transition factory, a fluent definition
//! builder, JSON configuration loading, and the `state_enum!` macro.

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;

pub use config::MachineConfig;
pub use error::BuildError;
pub use machine::StateMachineBuilder;

use crate::core::{Source, State, TransitionDescriptor};

/// Create a transition descriptor.
///
/// `from` is one state or a collection of states, `to` is one state. The
/// values are stored exactly as given; no validation happens here.
///
/// # Example
///
/// ```
/// use tabstate::builder::create_transition;
/// use tabstate::core::TransitionDescriptor;
///
/// let play: TransitionDescriptor<String> = create_transition(["bought", "stopped"], "playing");
///
/// assert!(play.allows(&"stopped".to_string()));
/// assert_eq!(play.to, "playing");
/// ```
pub fn create_transition<S: State>(
    from: impl Into<Source<S>>,
    to: impl Into<S>,
) -> TransitionDescriptor<S> {
    TransitionDescriptor::new(from, to)
}
