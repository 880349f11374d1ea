//! Macros for declaring machine states.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// Variant names double as state names. Extra derives and attributes on the
/// enum and its variants are passed through.
///
/// # Example
///
/// ```
/// use pocketcalc::state_enum;
/// use pocketcalc::core::State;
///
/// state_enum! {
///     #[derive(Copy)]
///     pub enum Power {
///         Off,
///         On,
///         LowBattery,
///     }
/// }
///
/// assert_eq!(Power::On.name(), "On");
/// assert_eq!(Power::LowBattery.name(), "LowBattery");
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
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
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
