//! State fields: the binding between a record type, a default state, and a
//! transition registry.
//!
//! A `StateField` is built once per record type (see `crate::builder`) and
//! then shared; it never changes after construction. Invoking transitions
//! through the field is the job of the guard in `crate::guard`.

pub mod registry;

pub use registry::{CommitPolicy, Operation, TransitionDescriptor, TransitionRegistry};

use crate::core::Record;
use crate::guard::TransitionHook;

/// One state-holding attribute of a record type.
///
/// Owns the attribute name, the default (initial) state value, the registry
/// of declared transitions, and any before/after transition hooks. The
/// field is immutable once built, so a single instance can guard every
/// record of the type, typically from a `static`.
///
/// `T` is the output type shared by the field's operation bodies; it
/// defaults to unit, which fits operations that only mutate the record.
///
/// # Example
///
/// ```rust
/// use stateguard::builder::{StateFieldBuilder, TransitionBuilder};
/// use stateguard::core::Record;
/// use stateguard::StateField;
///
/// struct BlogPost {
///     state: String,
/// }
///
/// impl Record for BlogPost {
///     type State = String;
///
///     fn state_fields() -> &'static [&'static str] {
///         &["state"]
///     }
///
///     fn state(&self, _field: &str) -> String {
///         self.state.clone()
///     }
///
///     fn set_state(&mut self, _field: &str, value: String) {
///         self.state = value;
///     }
/// }
///
/// let field: StateField<BlogPost> = StateFieldBuilder::new()
///     .name("state")
///     .default("new".to_string())
///     .transition(
///         TransitionBuilder::new()
///             .operation("publish")
///             .from("new".to_string())
///             .to("published".to_string())
///             .succeeds(),
///     )?
///     .build()?;
///
/// let mut post = BlogPost {
///     state: field.initial(),
/// };
/// field.apply(&mut post, "publish")?;
/// assert_eq!(post.state, "published");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct StateField<R: Record, T = ()> {
    pub(crate) name: &'static str,
    pub(crate) default: R::State,
    pub(crate) registry: TransitionRegistry<R, T>,
    pub(crate) before: Vec<TransitionHook<R>>,
    pub(crate) after: Vec<TransitionHook<R>>,
}

impl<R: Record, T> StateField<R, T> {
    /// The attribute name this field is bound to on the record type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declared default state value.
    pub fn default_state(&self) -> &R::State {
        &self.default
    }

    /// A fresh copy of the default state, for initializing new records.
    pub fn initial(&self) -> R::State {
        self.default.clone()
    }

    /// The transition registry owned by this field.
    pub fn registry(&self) -> &TransitionRegistry<R, T> {
        &self.registry
    }

    /// Check whether invoking `operation` on this record would pass
    /// validation right now, without executing anything.
    pub fn can(&self, record: &R, operation: &str) -> bool {
        self.validate(record, operation).is_ok()
    }

    /// The transitions usable from the record's current state, skipping
    /// descriptors whose conditions reject the record.
    ///
    /// Empty when the record type does not resolve to this field.
    pub fn available(&self, record: &R) -> Vec<&TransitionDescriptor<R, T>> {
        if self.resolve_binding().is_err() {
            return Vec::new();
        }
        let current = record.state(self.name);
        self.registry
            .from(&current)
            .filter(|descriptor| descriptor.can_execute(record, &current))
            .collect()
    }
}
