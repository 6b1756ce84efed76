//! Errors raised while firing transitions.

use crate::core::{handler_name, State};
use thiserror::Error;

/// Errors that can occur when a transition is fired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The current state is not among the transition's source states.
    /// The machine is left untouched.
    ///
    /// `state` holds the current state's [`State::name`], not the state
    /// value; read [`StateMachine::state`](crate::machine::StateMachine::state)
    /// for the value itself.
    #[error("Cannot call '{transition}' on '{state}'")]
    InvalidTransition { transition: String, state: String },

    /// A handler reported a failure of its own. The transition that
    /// triggered it has already committed.
    #[error("Handler '{handler}' failed: {reason}")]
    HandlerFailed { handler: String, reason: String },
}

impl TransitionError {
    pub(crate) fn invalid<S: State>(transition: &str, state: &S) -> Self {
        Self::InvalidTransition {
            transition: transition.to_owned(),
            state: state.name().to_owned(),
        }
    }

    /// Build a `HandlerFailed` for the handler bound to `transition`.
    pub fn handler_failed(transition: &str, reason: impl Into<String>) -> Self {
        Self::HandlerFailed {
            handler: handler_name(transition),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Upload {
        Sending { bytes: u64 },
    }

    impl State for Upload {
        fn name(&self) -> &str {
            "Sending"
        }
    }

    #[test]
    fn invalid_transition_message_names_transition_and_state() {
        let err = TransitionError::invalid("freeze", &"solid".to_string());
        assert_eq!(err.to_string(), "Cannot call 'freeze' on 'solid'");
        assert!(err.is_invalid_transition());
    }

    #[test]
    fn invalid_transition_carries_state_name_not_value() {
        let err = TransitionError::invalid("finish", &Upload::Sending { bytes: 512 });
        assert_eq!(
            err,
            TransitionError::InvalidTransition {
                transition: "finish".to_string(),
                state: "Sending".to_string(),
            }
        );
    }

    #[test]
    fn handler_failed_uses_derived_handler_name() {
        let err = TransitionError::handler_failed("inject", "tab closed");
        assert_eq!(
            err,
            TransitionError::HandlerFailed {
                handler: "onInject".to_string(),
                reason: "tab closed".to_string(),
            }
        );
        assert!(!err.is_invalid_transition());
    }
}
