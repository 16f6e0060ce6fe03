//! Builder API for declaring state fields and transitions.
//!
//! This module provides the declaration step of the mechanism: fluent
//! builders that populate a field's transition registry once, at
//! type-definition time, plus the `state_enum!` macro for declaring state
//! value enums.

pub mod error;
pub mod field;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use field::StateFieldBuilder;
pub use transition::TransitionBuilder;

use crate::core::Record;
use crate::field::TransitionDescriptor;

/// Create a descriptor whose whole effect is the state change itself.
///
/// # Example
///
/// ```
/// use stateguard::builder::simple_transition;
/// use stateguard::core::Record;
///
/// # struct Post { state: String }
/// # impl Record for Post {
/// #     type State = String;
/// #     fn state_fields() -> &'static [&'static str] { &["state"] }
/// #     fn state(&self, _field: &str) -> String { self.state.clone() }
/// #     fn set_state(&mut self, _field: &str, value: String) { self.state = value; }
/// # }
/// let descriptor =
///     simple_transition::<Post, ()>("publish", "new".to_string(), "published".to_string());
/// assert_eq!(descriptor.target, "published");
/// ```
pub fn simple_transition<R, T>(
    operation: &'static str,
    from: R::State,
    to: R::State,
) -> TransitionDescriptor<R, T>
where
    R: Record,
    T: Default,
{
    TransitionBuilder::new()
        .operation(operation)
        .from(from)
        .to(to)
        .succeeds()
        .build()
        .expect("simple transition should always build")
}

/// Create a descriptor gated on a condition, with a no-op body.
pub fn conditional_transition<R, T, F>(
    operation: &'static str,
    from: R::State,
    to: R::State,
    condition: F,
) -> TransitionDescriptor<R, T>
where
    R: Record,
    T: Default,
    F: Fn(&R) -> bool + Send + Sync + 'static,
{
    TransitionBuilder::new()
        .operation(operation)
        .from(from)
        .to(to)
        .when(condition)
        .succeeds()
        .build()
        .expect("conditional transition should always build")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Post {
        state: String,
        pinned: bool,
    }

    impl Record for Post {
        type State = String;

        fn state_fields() -> &'static [&'static str] {
            &["state"]
        }

        fn state(&self, _field: &str) -> String {
            self.state.clone()
        }

        fn set_state(&mut self, _field: &str, value: String) {
            self.state = value;
        }
    }

    #[test]
    fn simple_transition_builds() {
        let descriptor =
            simple_transition::<Post, ()>("publish", "new".to_string(), "published".to_string());

        assert_eq!(descriptor.name, "publish");
        assert!(descriptor.applies_from(&"new".to_string()));
    }

    #[test]
    fn conditional_transition_respects_condition() {
        let descriptor = conditional_transition::<Post, (), _>(
            "pin",
            "published".to_string(),
            "pinned".to_string(),
            |post| !post.pinned,
        );

        let post = Post {
            state: "published".into(),
            pinned: false,
        };
        assert!(descriptor.can_execute(&post, &"published".to_string()));

        let pinned = Post {
            state: "published".into(),
            pinned: true,
        };
        assert!(!descriptor.can_execute(&pinned, &"published".to_string()));
    }
}
