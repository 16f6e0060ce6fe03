//! Builder for constructing state fields.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::Record;
use crate::field::{StateField, TransitionDescriptor, TransitionRegistry};
use crate::guard::{TransitionEvent, TransitionHook};
use std::sync::Arc;

/// Builder for constructing a `StateField` with a fluent API.
///
/// Declaration happens once per record type: name the attribute, give it a
/// default state, and register each transition. The built field is
/// immutable and can be shared behind a `static`.
pub struct StateFieldBuilder<R: Record, T = ()> {
    name: Option<&'static str>,
    default: Option<R::State>,
    descriptors: Vec<TransitionDescriptor<R, T>>,
    before: Vec<TransitionHook<R>>,
    after: Vec<TransitionHook<R>>,
}

impl<R: Record, T> StateFieldBuilder<R, T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            name: None,
            default: None,
            descriptors: Vec::new(),
            before: Vec::new(),
            after: Vec::new(),
        }
    }

    /// Set the attribute name the field is bound to (required).
    pub fn name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the default (initial) state value (required).
    pub fn default(mut self, state: R::State) -> Self {
        self.default = Some(state);
        self
    }

    /// Declare a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<R, T>) -> Result<Self, BuildError> {
        let descriptor = builder.build()?;
        self.descriptors.push(descriptor);
        Ok(self)
    }

    /// Declare a pre-built transition.
    pub fn add_transition(mut self, descriptor: TransitionDescriptor<R, T>) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Register a hook that fires after validation, before each operation
    /// body (optional; may be called multiple times).
    pub fn before_transition<F>(mut self, hook: F) -> Self
    where
        F: for<'e> Fn(&R, &TransitionEvent<'e, R::State>) + Send + Sync + 'static,
    {
        self.before.push(Arc::new(hook));
        self
    }

    /// Register a hook that fires after each successful commit and optional
    /// save (optional; may be called multiple times).
    pub fn after_transition<F>(mut self, hook: F) -> Self
    where
        F: for<'e> Fn(&R, &TransitionEvent<'e, R::State>) + Send + Sync + 'static,
    {
        self.after.push(Arc::new(hook));
        self
    }

    /// Build the state field.
    /// Returns an error if required pieces are missing.
    pub fn build(self) -> Result<StateField<R, T>, BuildError> {
        let name = self.name.ok_or(BuildError::MissingFieldName)?;
        let default = self.default.ok_or(BuildError::MissingDefaultState)?;

        if self.descriptors.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut registry = TransitionRegistry::new();
        for descriptor in self.descriptors {
            registry.register(descriptor);
        }

        Ok(StateField {
            name,
            default,
            registry,
            before: self.before,
            after: self.after,
        })
    }
}

impl<R: Record, T> Default for StateFieldBuilder<R, T> {
    fn default() -> Self {
        Self::new()
    }
}
