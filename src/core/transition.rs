//! Transition descriptors.
//!
//! A descriptor is the immutable `{from, to}` record behind every named
//! transition. `from` is one state or a set of states, `to` is always one.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Allowed source states of a transition.
///
/// Deserializes from either a single state or a list of states, so
/// `"from": "loaded"` and `"from": ["loaded", "ejected"]` both work.
///
/// `One` is tried first. A state type that itself deserializes from a JSON
/// array (a tuple struct, say) therefore reads a list as a single state;
/// build `Source::Many` in code for such types.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged, bound = "")]
pub enum Source<S: State> {
    One(S),
    Many(Vec<S>),
}

impl<S: State> Source<S> {
    /// Membership test used by the guard.
    pub fn contains(&self, state: &S) -> bool {
        match self {
            Self::One(only) => only == state,
            Self::Many(states) => states.contains(state),
        }
    }

    /// Source states in declaration order.
    pub fn states(&self) -> &[S] {
        match self {
            Self::One(only) => std::slice::from_ref(only),
            Self::Many(states) => states,
        }
    }

    /// True for a `Many` with no members. Such a source can never match.
    pub fn is_empty(&self) -> bool {
        self.states().is_empty()
    }
}

impl<S: State> From<Vec<S>> for Source<S> {
    fn from(states: Vec<S>) -> Self {
        Self::Many(states)
    }
}

impl<S: State, const N: usize> From<[S; N]> for Source<S> {
    fn from(states: [S; N]) -> Self {
        Self::Many(states.into())
    }
}

impl From<String> for Source<String> {
    fn from(state: String) -> Self {
        Self::One(state)
    }
}

impl From<&str> for Source<String> {
    fn from(state: &str) -> Self {
        Self::One(state.to_owned())
    }
}

impl From<Vec<&str>> for Source<String> {
    fn from(states: Vec<&str>) -> Self {
        Self::Many(states.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Source<String> {
    fn from(states: [&str; N]) -> Self {
        Self::Many(states.iter().map(|s| (*s).to_owned()).collect())
    }
}

/// Immutable `{from, to}` record for one named transition.
///
/// Descriptors carry no name and no behavior; the same descriptor can be
/// checked against any machine with [`StateMachine::can`](crate::machine::StateMachine::can).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionDescriptor<S: State> {
    pub from: Source<S>,
    pub to: S,
}

impl<S: State> TransitionDescriptor<S> {
    pub fn new(from: impl Into<Source<S>>, to: impl Into<S>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Check whether `current` is among the allowed source states.
    pub fn allows(&self, current: &S) -> bool {
        self.from.contains(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_source_matches_only_itself() {
        let descriptor = TransitionDescriptor::<String>::new("solid", "liquid");

        assert!(descriptor.allows(&"solid".to_string()));
        assert!(!descriptor.allows(&"liquid".to_string()));
        assert_eq!(descriptor.to, "liquid");
    }

    #[test]
    fn many_sources_match_any_member() {
        let descriptor = TransitionDescriptor::<String>::new(["bought", "stopped"], "playing");

        assert!(descriptor.allows(&"bought".to_string()));
        assert!(descriptor.allows(&"stopped".to_string()));
        assert!(!descriptor.allows(&"on_sale".to_string()));
        assert!(!descriptor.allows(&"playing".to_string()));
    }

    #[test]
    fn states_preserve_declaration_order() {
        let source: Source<String> = vec!["b", "a", "c"].into();
        let names: Vec<&str> = source.states().iter().map(String::as_str).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn empty_many_never_matches() {
        let source: Source<String> = Vec::<String>::new().into();
        assert!(source.is_empty());
        assert!(!source.contains(&String::new()));
    }

    #[test]
    fn source_deserializes_from_scalar_or_list() {
        let one: Source<String> = serde_json::from_str(r#""loaded""#).unwrap();
        assert_eq!(one, Source::One("loaded".to_string()));

        let many: Source<String> = serde_json::from_str(r#"["loaded", "ejected"]"#).unwrap();
        assert_eq!(
            many,
            Source::Many(vec!["loaded".to_string(), "ejected".to_string()])
        );
    }

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Cell(u8, u8);

    impl State for Cell {
        fn name(&self) -> &str {
            "Cell"
        }
    }

    #[test]
    fn array_shaped_state_reads_list_as_one_source() {
        let source: Source<Cell> = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(source, Source::One(Cell(1, 2)));

        let many: Source<Cell> = serde_json::from_str("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(many, Source::Many(vec![Cell(1, 2), Cell(3, 4)]));
    }

    #[test]
    fn descriptor_serializes_from_as_given() {
        let descriptor = TransitionDescriptor::<String>::new(["a", "b"], "c");
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json, serde_json::json!({"from": ["a", "b"], "to": "c"}));
    }
}
