//! Core State trait for state machine states.
//!
//! The engine never looks inside a state. It only compares states for
//! equality and asks for a name when reporting errors and logging.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: States are copied into the current-state cell and history
/// - `PartialEq`: Guards compare the current state against transition sources
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States can be loaded from configuration
///
/// # Example
///
/// ```rust
/// use tabstate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DiscState {
///     OnSale,
///     Bought,
///     Playing,
/// }
///
/// impl State for DiscState {
///     fn name(&self) -> &str {
///         match self {
///             Self::OnSale => "OnSale",
///             Self::Bought => "Bought",
///             Self::Playing => "Playing",
///         }
///     }
/// }
///
/// assert_eq!(DiscState::Bought.name(), "Bought");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Plain string states, the most common form in loaded configuration.
impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
