//! Per-entity machine registry.
//!
//! Owns one machine per key (a tab id, a connection id, ...), all created
//! from the same definition. Machines are created on first reference and
//! live until removed or the registry is dropped.

use crate::core::State;
use crate::machine::{MachineDefinition, StateMachine, TransitionError};
use std::collections::hash_map::{Entry, HashMap};
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use tracing::debug;

/// Owned map from entity key to state machine.
///
/// # Example
///
/// ```rust
/// use tabstate::builder::{create_transition, StateMachineBuilder};
/// use tabstate::registry::MachineRegistry;
///
/// let definition = StateMachineBuilder::<String>::new()
///     .initial("unloaded")
///     .transition("load", create_transition("unloaded", "loaded"))
///     .transition("unload", create_transition("loaded", "unloaded"))
///     .build()
///     .unwrap();
///
/// let mut tabs = MachineRegistry::new(definition);
/// tabs.fire(7u32, "load", ()).unwrap().unwrap();
///
/// assert_eq!(tabs.get(&7).unwrap().state(), "loaded");
/// assert!(tabs.get(&8).is_none());
/// ```
pub struct MachineRegistry<K, S: State, A = ()> {
    definition: Arc<MachineDefinition<S, A>>,
    machines: HashMap<K, StateMachine<S, A>>,
}

impl<K, S, A> MachineRegistry<K, S, A>
where
    K: Eq + Hash + Debug,
    S: State,
{
    pub fn new(definition: impl Into<Arc<MachineDefinition<S, A>>>) -> Self {
        Self {
            definition: definition.into(),
            machines: HashMap::new(),
        }
    }

    pub fn definition(&self) -> &Arc<MachineDefinition<S, A>> {
        &self.definition
    }

    /// Machine for `key`, created in the initial state on first reference.
    pub fn entry(&mut self, key: K) -> &mut StateMachine<S, A> {
        match self.machines.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                debug!(key = ?entry.key(), "registering machine");
                entry.insert(self.definition.machine())
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&StateMachine<S, A>> {
        self.machines.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut StateMachine<S, A>> {
        self.machines.get_mut(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.machines.contains_key(key)
    }

    /// Fire `name` on the machine for `key`, creating the machine if needed.
    ///
    /// `None` when `name` is not a declared transition.
    pub fn fire(&mut self, key: K, name: &str, args: A) -> Option<Result<(), TransitionError>> {
        self.entry(key).fire(name, args)
    }

    /// Drop the machine for `key`.
    pub fn remove(&mut self, key: &K) -> Option<StateMachine<S, A>> {
        let removed = self.machines.remove(key);
        if removed.is_some() {
            debug!(key = ?key, "machine removed");
        }
        removed
    }

    /// Put the machine for `key` back into the initial state without running
    /// handlers. Returns `false` when no machine exists for `key`.
    pub fn reset(&mut self, key: &K) -> bool {
        match self.machines.get_mut(key) {
            Some(machine) => {
                machine.reset();
                true
            }
            None => false,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.machines.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &StateMachine<S, A>)> {
        self.machines.iter()
    }

    pub fn len(&self) -> usize {
        self.machines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }
}

impl<K: Debug, S: State, A> Debug for MachineRegistry<K, S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MachineRegistry")
            .field("definition", &self.definition)
            .field("machines", &self.machines)
            .finish()
    }
}
