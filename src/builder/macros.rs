//! Macros for declaring state and action enums.

/// Generate a state enum together with its `State` implementation.
///
/// # Example
///
/// ```
/// use rulegraph::core::State;
/// use rulegraph::state_enum;
///
/// state_enum! {
///     pub enum TurnstileState {
///         Locked,
///         Unlocked,
///         Alarm,
///     }
/// }
///
/// assert_eq!(TurnstileState::Alarm.name(), "Alarm");
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
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
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
    };
}

/// Generate an action enum together with its `Action` implementation.
///
/// The alphabet follows declaration order, which is the planner's
/// tie-breaking priority.
///
/// # Example
///
/// ```
/// use rulegraph::action_enum;
/// use rulegraph::core::Action;
///
/// action_enum! {
///     pub enum TurnstileAction {
///         Coin,
///         Pass,
///         Cheat,
///     }
/// }
///
/// assert_eq!(
///     TurnstileAction::alphabet(),
///     vec![TurnstileAction::Coin, TurnstileAction::Pass, TurnstileAction::Cheat]
/// );
/// ```
#[macro_export]
macro_rules! action_enum {
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
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Action for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn alphabet() -> Vec<Self> {
                vec![$(Self::$variant),*]
            }
        }
    };
}
