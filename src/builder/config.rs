//! Declarative machine configuration.
//!
//! The serializable half of a definition: initial state and transition
//! table. Handlers are code and get attached on the builder afterwards.

use crate::builder::error::BuildError;
use crate::core::{State, TransitionDescriptor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Initial state plus named transitions, as read from configuration.
///
/// ```rust
/// use tabstate::builder::{MachineConfig, StateMachineBuilder};
///
/// let config = MachineConfig::<String>::from_json(r#"{
///     "initial": "on_sale",
///     "transitions": {
///         "buy":  { "from": "on_sale", "to": "bought" },
///         "play": { "from": ["bought", "stopped"], "to": "playing" },
///         "stop": { "from": "playing", "to": "stopped" }
///     }
/// }"#).unwrap();
///
/// let mut disc = StateMachineBuilder::<String>::from_config(config)
///     .build()
///     .unwrap()
///     .into_machine();
/// disc.fire("buy", ()).unwrap().unwrap();
/// assert_eq!(disc.state(), "bought");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", deny_unknown_fields)]
pub struct MachineConfig<S: State> {
    pub initial: S,
    #[serde(default)]
    pub transitions: BTreeMap<String, TransitionDescriptor<S>>,
}

impl<S: State> MachineConfig<S> {
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, BuildError> {
        serde_json::from_value(value).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, BuildError> {
        serde_json::to_string_pretty(self).map_err(|e| BuildError::InvalidConfig(e.to_string()))
    }
}
