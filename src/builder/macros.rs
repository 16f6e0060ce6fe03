//! Macros for declaring state value enums.

/// Generate a `StateValue` implementation for a fieldless enum.
///
/// Variant identifiers are used verbatim as the state names.
///
/// # Example
///
/// ```
/// use stateguard::core::StateValue;
/// use stateguard::state_enum;
///
/// state_enum! {
///     pub enum PostState {
///         New,
///         Published,
///         Hidden,
///     }
/// }
///
/// assert_eq!(PostState::Published.name(), "Published");
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
        #[derive(
            Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateValue for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::StateValue;

    state_enum! {
        enum TestState {
            New,
            Published,
            Hidden,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::New.name(), "New");
        assert_eq!(TestState::Published.name(), "Published");
        assert_eq!(TestState::Hidden.name(), "Hidden");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        let _state = PublicState::A;
    }

    #[test]
    fn generated_enum_hashes_and_serializes() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(TestState::New, 1);
        assert_eq!(map.get(&TestState::New), Some(&1));

        let json = serde_json::to_string(&TestState::Hidden).unwrap();
        let back: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TestState::Hidden);
    }
}
