//! Validated machine definitions.

use crate::core::{handler_name, State, TransitionDescriptor};
use crate::machine::error::TransitionError;
use crate::machine::instance::StateMachine;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

/// Side effect run after a transition commits.
///
/// Receives the machine (already in the new state) and the arguments the
/// action was called with. It may fire further transitions on the machine.
pub type Handler<S, A> =
    Arc<dyn Fn(&mut StateMachine<S, A>, A) -> Result<(), TransitionError> + Send + Sync>;

/// Initial state, named transitions and handlers shared by every machine
/// created from it.
///
/// Built by [`StateMachineBuilder`](crate::builder::StateMachineBuilder),
/// which validates it. A definition is immutable; wrap it in an `Arc` to
/// create many machines from it.
pub struct MachineDefinition<S: State, A = ()> {
    initial: S,
    transitions: BTreeMap<String, Arc<TransitionDescriptor<S>>>,
    methods: HashMap<String, Handler<S, A>>,
}

impl<S: State, A> MachineDefinition<S, A> {
    pub(crate) fn from_parts(
        initial: S,
        transitions: BTreeMap<String, Arc<TransitionDescriptor<S>>>,
        methods: HashMap<String, Handler<S, A>>,
    ) -> Self {
        Self {
            initial,
            transitions,
            methods,
        }
    }

    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// Descriptor declared under `name`.
    pub fn transition(&self, name: &str) -> Option<&Arc<TransitionDescriptor<S>>> {
        self.transitions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.transitions.contains_key(name)
    }

    /// Declared transitions, sorted by name.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, &TransitionDescriptor<S>)> {
        self.transitions
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor.as_ref()))
    }

    pub fn transition_names(&self) -> impl Iterator<Item = &str> {
        self.transitions.keys().map(String::as_str)
    }

    /// Handler registered under a handler name such as `onInject`.
    pub fn method(&self, handler: &str) -> Option<&Handler<S, A>> {
        self.methods.get(handler)
    }

    /// Handler bound to a transition through the naming convention.
    pub fn handler_for(&self, transition: &str) -> Option<&Handler<S, A>> {
        self.methods.get(&handler_name(transition))
    }

    /// Create another machine from a shared definition.
    ///
    /// Every call yields an independent instance in the initial state.
    pub fn machine(self: &Arc<Self>) -> StateMachine<S, A> {
        StateMachine::new(Arc::clone(self))
    }

    /// Create a single machine, giving up the definition.
    pub fn into_machine(self) -> StateMachine<S, A> {
        StateMachine::new(Arc::new(self))
    }
}

impl<S: State, A> fmt::Debug for MachineDefinition<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        methods.sort_unstable();
        f.debug_struct("MachineDefinition")
            .field("initial", &self.initial)
            .field("transitions", &self.transitions)
            .field("methods", &methods)
            .finish()
    }
}
