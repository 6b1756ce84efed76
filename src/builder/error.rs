//! Build errors for machine definitions.

use thiserror::Error;

/// Errors that can occur when building a machine definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition names must not be empty")]
    EmptyTransitionName,

    #[error("Transition '{name}' is declared more than once")]
    DuplicateTransition { name: String },

    #[error("Transition '{transition}' has no source states")]
    EmptySource { transition: String },

    #[error("Transitions '{first}' and '{second}' both map to handler '{handler}'")]
    HandlerCollision {
        handler: String,
        first: String,
        second: String,
    },

    #[error("Handler '{handler}' is registered more than once")]
    DuplicateHandler { handler: String },

    #[error("Handler '{handler}' does not match any transition")]
    UnknownHandler { handler: String },

    #[error("Invalid machine configuration: {0}")]
    InvalidConfig(String),
}
