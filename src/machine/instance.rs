//! Live state machine instances and their bound actions.

use crate::core::{State, StateHistory, StateTransition, TransitionDescriptor};
use crate::machine::definition::MachineDefinition;
use crate::machine::error::TransitionError;
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// A running state machine.
///
/// The current state only changes through the transitions declared in its
/// definition. Each declared name is reachable as an [`Action`] via
/// [`StateMachine::action`]; any other name yields `None`.
pub struct StateMachine<S: State, A = ()> {
    id: Uuid,
    current: S,
    definition: Arc<MachineDefinition<S, A>>,
    history: StateHistory<S>,
}

impl<S: State, A> StateMachine<S, A> {
    /// Create a machine in the definition's initial state.
    pub fn new(definition: Arc<MachineDefinition<S, A>>) -> Self {
        let machine = Self {
            id: Uuid::new_v4(),
            current: definition.initial().clone(),
            definition,
            history: StateHistory::new(),
        };
        debug!(
            machine = %machine.id,
            initial = machine.current.name(),
            "state machine created"
        );
        machine
    }

    /// Identifier used to correlate log events.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &S {
        &self.current
    }

    pub fn definition(&self) -> &Arc<MachineDefinition<S, A>> {
        &self.definition
    }

    /// Transitions committed since creation or the last [`reset`](Self::reset).
    ///
    /// Unbounded: one record is kept per committed transition. Long-lived
    /// machines should be reset or dropped to release it.
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Check whether `descriptor` could fire from the current state.
    ///
    /// Works with any descriptor, not just the ones this machine declares.
    pub fn can(&self, descriptor: &TransitionDescriptor<S>) -> bool {
        descriptor.allows(&self.current)
    }

    /// Check the guard of a declared transition. Undeclared names are `false`.
    pub fn can_fire(&self, name: &str) -> bool {
        self.definition
            .transition(name)
            .is_some_and(|descriptor| self.can(descriptor))
    }

    /// Declared transitions whose guard passes right now, sorted by name.
    pub fn available_transitions(&self) -> Vec<&str> {
        self.definition
            .transitions()
            .filter(|(_, descriptor)| self.can(descriptor))
            .map(|(name, _)| name)
            .collect()
    }

    /// Bind the transition declared under `name`.
    ///
    /// Returns `None` when no such transition exists.
    pub fn action(&mut self, name: &str) -> Option<Action<'_, S, A>> {
        let descriptor = Arc::clone(self.definition.transition(name)?);
        Some(Action {
            machine: self,
            name: name.to_owned(),
            descriptor,
        })
    }

    /// Shorthand for `action(name).map(|action| action.call(args))`.
    pub fn fire(&mut self, name: &str, args: A) -> Option<Result<(), TransitionError>> {
        self.action(name).map(|action| action.call(args))
    }

    /// Return to the initial state and forget history. No handler runs.
    pub fn reset(&mut self) {
        self.current = self.definition.initial().clone();
        self.history.clear();
        debug!(machine = %self.id, state = self.current.name(), "state machine reset");
    }

    fn commit(
        &mut self,
        name: &str,
        descriptor: &TransitionDescriptor<S>,
        args: A,
    ) -> Result<(), TransitionError> {
        if !self.can(descriptor) {
            warn!(
                machine = %self.id,
                transition = name,
                state = self.current.name(),
                "transition rejected"
            );
            return Err(TransitionError::invalid(name, &self.current));
        }

        // The new state is visible before the handler runs so that handlers
        // can chain further transitions.
        let from = std::mem::replace(&mut self.current, descriptor.to.clone());
        debug!(
            machine = %self.id,
            transition = name,
            from = from.name(),
            to = self.current.name(),
            "transition committed"
        );
        self.history.push(StateTransition {
            transition: name.to_owned(),
            from,
            to: self.current.clone(),
            timestamp: Utc::now(),
        });

        let Some(handler) = self.definition.handler_for(name).cloned() else {
            trace!(machine = %self.id, transition = name, "no handler registered");
            return Ok(());
        };
        let id = self.id;
        handler(&mut *self, args).inspect_err(|err| {
            warn!(machine = %id, transition = name, error = %err, "handler failed");
        })
    }
}

impl<S: State, A> fmt::Debug for StateMachine<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("id", &self.id)
            .field("state", &self.current)
            .field("history", &self.history.len())
            .finish_non_exhaustive()
    }
}

/// A declared transition bound to one machine.
pub struct Action<'m, S: State, A = ()> {
    machine: &'m mut StateMachine<S, A>,
    name: String,
    descriptor: Arc<TransitionDescriptor<S>>,
}

impl<'m, S: State, A> Action<'m, S, A> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &TransitionDescriptor<S> {
        &self.descriptor
    }

    /// Check the guard without firing.
    pub fn can(&self) -> bool {
        self.machine.can(&self.descriptor)
    }

    /// Fire the transition, forwarding `args` to its handler if one exists.
    ///
    /// Fails with [`TransitionError::InvalidTransition`] when the current
    /// state is not a source of this transition; the machine is unchanged
    /// in that case. Errors returned by the handler are passed through after
    /// the transition has committed.
    pub fn call(self, args: A) -> Result<(), TransitionError> {
        let Self {
            machine,
            name,
            descriptor,
        } = self;
        machine.commit(&name, &descriptor, args)
    }
}

impl<'m, S: State> Action<'m, S, ()> {
    /// Fire a transition that takes no arguments.
    pub fn fire(self) -> Result<(), TransitionError> {
        self.call(())
    }
}
