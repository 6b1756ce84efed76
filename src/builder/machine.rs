//! Builder for constructing machine definitions.

use crate::builder::config::MachineConfig;
use crate::builder::error::BuildError;
use crate::core::{handler_name, State, TransitionDescriptor};
use crate::machine::{Handler, MachineDefinition, StateMachine, TransitionError};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::warn;

/// Builder for machine definitions with a fluent API.
///
/// `build()` validates the definition eagerly: every transition needs a
/// non-empty name and source set, names must be unique, no two names may
/// derive the same handler name, and every registered handler must belong
/// to a transition.
pub struct StateMachineBuilder<S: State, A = ()> {
    initial: Option<S>,
    transitions: Vec<(String, TransitionDescriptor<S>)>,
    methods: Vec<(String, Handler<S, A>)>,
}

impl<S: State, A> StateMachineBuilder<S, A> {
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: MachineConfig<S>) -> Self {
        Self::new()
            .initial(config.initial)
            .transitions(config.transitions)
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<S>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a named transition.
    pub fn transition(
        mut self,
        name: impl Into<String>,
        descriptor: TransitionDescriptor<S>,
    ) -> Self {
        self.transitions.push((name.into(), descriptor));
        self
    }

    /// Declare several named transitions at once.
    pub fn transitions<I, N>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (N, TransitionDescriptor<S>)>,
        N: Into<String>,
    {
        self.transitions
            .extend(transitions.into_iter().map(|(name, d)| (name.into(), d)));
        self
    }

    /// Register a handler under its handler name, e.g. `onInject`.
    pub fn method<F>(mut self, handler: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut StateMachine<S, A>, A) -> Result<(), TransitionError> + Send + Sync + 'static,
    {
        self.methods.push((handler.into(), Arc::new(f)));
        self
    }

    /// Register the handler for `transition`, deriving its handler name.
    pub fn on<F>(self, transition: &str, f: F) -> Self
    where
        F: Fn(&mut StateMachine<S, A>, A) -> Result<(), TransitionError> + Send + Sync + 'static,
    {
        self.method(handler_name(transition), f)
    }

    /// Validate and build the definition.
    pub fn build(self) -> Result<MachineDefinition<S, A>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut transitions = BTreeMap::new();
        let mut derived: HashMap<String, String> = HashMap::new();
        for (name, descriptor) in self.transitions {
            if name.is_empty() {
                return Err(BuildError::EmptyTransitionName);
            }
            if transitions.contains_key(&name) {
                return Err(BuildError::DuplicateTransition { name });
            }
            if descriptor.from.is_empty() {
                return Err(BuildError::EmptySource { transition: name });
            }
            let handler = handler_name(&name);
            if let Some(first) = derived.get(&handler) {
                return Err(BuildError::HandlerCollision {
                    handler,
                    first: first.clone(),
                    second: name,
                });
            }
            derived.insert(handler, name.clone());
            transitions.insert(name, Arc::new(descriptor));
        }

        let mut methods = HashMap::new();
        for (handler, f) in self.methods {
            if !derived.contains_key(&handler) {
                return Err(BuildError::UnknownHandler { handler });
            }
            if methods.contains_key(&handler) {
                return Err(BuildError::DuplicateHandler { handler });
            }
            methods.insert(handler, f);
        }

        if !transitions.is_empty() && !is_mentioned(&initial, transitions.values()) {
            warn!(initial = initial.name(), "initial state is not used by any transition");
        }

        Ok(MachineDefinition::from_parts(initial, transitions, methods))
    }
}

/// True when `state` is a source or target of any descriptor. Compares by
/// equality only.
fn is_mentioned<'a, S, I>(state: &S, descriptors: I) -> bool
where
    S: State + 'a,
    I: IntoIterator<Item = &'a Arc<TransitionDescriptor<S>>>,
{
    descriptors
        .into_iter()
        .any(|d| d.from.contains(state) || d.to == *state)
}

impl<S: State, A> Default for StateMachineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::create_transition;
    use crate::core::Source;

    fn builder() -> StateMachineBuilder<String> {
        StateMachineBuilder::<String>::new()
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = builder().build();
        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn empty_transition_table_is_allowed() {
        let definition = builder().initial("idle").build().unwrap();
        assert_eq!(definition.transition_names().count(), 0);
    }

    #[test]
    fn unreachable_initial_state_is_allowed() {
        let machine = builder()
            .initial("nowhere")
            .transition("go", create_transition("a", "b"))
            .build()
            .unwrap()
            .into_machine();
        assert_eq!(machine.state(), "nowhere");
    }

    #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
    enum Job {
        Queued(u8),
        Done,
    }

    impl State for Job {
        fn name(&self) -> &str {
            match self {
                Self::Queued(_) => "Queued",
                Self::Done => "Done",
            }
        }
    }

    #[test]
    fn initial_reachability_compares_states_not_names() {
        let descriptors = [Arc::new(TransitionDescriptor::<Job>::new(
            Source::One(Job::Queued(2)),
            Job::Done,
        ))];

        assert!(!is_mentioned(&Job::Queued(1), &descriptors));
        assert!(is_mentioned(&Job::Queued(2), &descriptors));
        assert!(is_mentioned(&Job::Done, &descriptors));
    }

    #[test]
    fn rejects_empty_transition_name() {
        let result = builder()
            .initial("a")
            .transition("", create_transition("a", "b"))
            .build();
        assert_eq!(result.unwrap_err(), BuildError::EmptyTransitionName);
    }

    #[test]
    fn rejects_duplicate_transition() {
        let result = builder()
            .initial("a")
            .transition("go", create_transition("a", "b"))
            .transition("go", create_transition("b", "a"))
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateTransition {
                name: "go".to_string()
            }
        );
    }

    #[test]
    fn rejects_empty_source_set() {
        let result = builder()
            .initial("a")
            .transition("go", create_transition(Vec::<String>::new(), "b"))
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::EmptySource {
                transition: "go".to_string()
            }
        );
    }

    #[test]
    fn rejects_names_deriving_the_same_handler() {
        let result = builder()
            .initial("unloaded")
            .transition("load", create_transition("unloaded", "loaded"))
            .transition("Load", create_transition("unloaded", "loaded"))
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::HandlerCollision {
                handler: "onLoad".to_string(),
                first: "load".to_string(),
                second: "Load".to_string(),
            }
        );
    }

    #[test]
    fn rejects_handler_without_transition() {
        let result = builder()
            .initial("a")
            .transition("go", create_transition("a", "b"))
            .method("onStop", |_, ()| Ok(()))
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::UnknownHandler {
                handler: "onStop".to_string()
            }
        );
    }

    #[test]
    fn rejects_handler_registered_twice() {
        let result = builder()
            .initial("a")
            .transition("go", create_transition("a", "b"))
            .on("go", |_, ()| Ok(()))
            .method("onGo", |_, ()| Ok(()))
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateHandler {
                handler: "onGo".to_string()
            }
        );
    }

    #[test]
    fn method_and_on_register_the_same_slot() {
        let definition = builder()
            .initial("a")
            .transition("loadAndExecute", create_transition("a", "b"))
            .method("onLoadAndExecute", |_, ()| Ok(()))
            .build()
            .unwrap();

        assert!(definition.handler_for("loadAndExecute").is_some());
        assert!(definition.method("onLoadAndExecute").is_some());
    }

    #[test]
    fn from_config_carries_initial_and_transitions() {
        let config = MachineConfig::<String>::from_json(
            r#"{"initial": "solid", "transitions": {"melt": {"from": "solid", "to": "liquid"}}}"#,
        )
        .unwrap();

        let definition = StateMachineBuilder::<String>::from_config(config)
            .build()
            .unwrap();

        assert_eq!(definition.initial(), "solid");
        assert_eq!(definition.transition_names().collect::<Vec<_>>(), ["melt"]);
    }
}
