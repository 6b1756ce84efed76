//! Macros for ergonomic state machine construction.

/// Generate a `State` implementation for a plain enum.
///
/// Also lets a variant, or an array or `Vec` of variants, be passed
/// directly as the `from` of [`create_transition`](crate::builder::create_transition).
///
/// The enum derives `Serialize`/`Deserialize`, so the calling crate needs
/// `serde` as a dependency.
///
/// # Example
///
/// ```
/// use tabstate::builder::{create_transition, StateMachineBuilder};
/// use tabstate::state_enum;
///
/// state_enum! {
///     pub enum Water {
///         Solid,
///         Liquid,
///         Gas,
///     }
/// }
///
/// let mut water = StateMachineBuilder::<Water>::new()
///     .initial(Water::Solid)
///     .transition("melt", create_transition(Water::Solid, Water::Liquid))
///     .transition("boil", create_transition([Water::Solid, Water::Liquid], Water::Gas))
///     .build()
///     .unwrap()
///     .into_machine();
///
/// water.fire("boil", ()).unwrap().unwrap();
/// assert_eq!(water.state(), &Water::Gas);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::convert::From<$name> for $crate::core::Source<$name> {
            fn from(state: $name) -> Self {
                $crate::core::Source::One(state)
            }
        }
    };
}
