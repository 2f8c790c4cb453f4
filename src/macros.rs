//! Macros for declaring state enums.

/// Generate a state enum together with its `State` trait implementation.
///
/// Besides the trait impl, the macro emits an `ALL` constant listing the
/// variants in declaration order.
///
/// # Example
///
/// ```
/// use button_sequencer::state_enum;
/// use button_sequencer::core::State;
///
/// state_enum! {
///     pub enum Phase {
///         Capture,
///         Display,
///         Halted,
///     }
///     final: [Halted]
///     error: [Halted]
/// }
///
/// assert_eq!(Phase::ALL.len(), 3);
/// assert_eq!(Phase::Display.name(), "Display");
/// assert!(Phase::Halted.is_final());
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

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            $vis const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(clippy::match_single_binding)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            #[allow(clippy::match_single_binding)]
            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
