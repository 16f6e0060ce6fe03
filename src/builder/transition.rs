//! Builder for declaring transitions.

use crate::builder::error::BuildError;
use crate::core::{Condition, OperationError, Record};
use crate::field::{CommitPolicy, TransitionDescriptor};
use std::sync::Arc;

/// Builder for declaring a single transition with a fluent API.
///
/// A declaration names the operation, the source state(s) it may start
/// from, the target state committed on success, and the operation body.
/// Optionally it can gate on a condition and request immediate persistence.
///
/// # Example
///
/// ```rust
/// use stateguard::builder::TransitionBuilder;
/// use stateguard::core::Record;
///
/// # struct Post { state: String }
/// # impl Record for Post {
/// #     type State = String;
/// #     fn state_fields() -> &'static [&'static str] { &["state"] }
/// #     fn state(&self, _field: &str) -> String { self.state.clone() }
/// #     fn set_state(&mut self, _field: &str, value: String) { self.state = value; }
/// # }
/// let descriptor = TransitionBuilder::<Post>::new()
///     .operation("steal")
///     .from_any(["published".to_string(), "hidden".to_string()])
///     .to("stolen".to_string())
///     .succeeds()
///     .build()?;
///
/// assert_eq!(descriptor.name, "steal");
/// assert_eq!(descriptor.sources.len(), 2);
/// # Ok::<(), stateguard::builder::BuildError>(())
/// ```
pub struct TransitionBuilder<R: Record, T = ()> {
    operation_name: Option<&'static str>,
    sources: Vec<R::State>,
    target: Option<R::State>,
    commit: CommitPolicy,
    condition: Option<Condition<R>>,
    body: Option<Arc<dyn Fn(&mut R) -> Result<T, OperationError> + Send + Sync>>,
}

impl<R: Record, T> TransitionBuilder<R, T> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            operation_name: None,
            sources: Vec::new(),
            target: None,
            commit: CommitPolicy::Deferred,
            condition: None,
            body: None,
        }
    }

    /// Set the operation name (required). Invocations are matched against it.
    pub fn operation(mut self, name: &'static str) -> Self {
        self.operation_name = Some(name);
        self
    }

    /// Add a source state (at least one required).
    pub fn from(mut self, state: R::State) -> Self {
        self.sources.push(state);
        self
    }

    /// Add several source states at once.
    pub fn from_any<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = R::State>,
    {
        self.sources.extend(states);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: R::State) -> Self {
        self.target = Some(state);
        self
    }

    /// Gate the transition on a predicate over the record (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.condition = Some(Condition::new(predicate));
        self
    }

    /// Set the commit policy (optional; defaults to deferred).
    pub fn commit(mut self, policy: CommitPolicy) -> Self {
        self.commit = policy;
        self
    }

    /// Request that the record be saved right after a successful commit.
    pub fn save_immediately(self) -> Self {
        self.commit(CommitPolicy::Immediate)
    }

    /// Set the operation body (required).
    pub fn run<F>(mut self, body: F) -> Self
    where
        F: Fn(&mut R) -> Result<T, OperationError> + Send + Sync + 'static,
    {
        self.body = Some(Arc::new(body));
        self
    }

    /// Build the descriptor.
    pub fn build(self) -> Result<TransitionDescriptor<R, T>, BuildError> {
        let name = self.operation_name.ok_or(BuildError::MissingOperationName)?;
        if self.sources.is_empty() {
            return Err(BuildError::MissingSourceState);
        }
        let target = self.target.ok_or(BuildError::MissingTargetState)?;
        let operation = self.body.ok_or(BuildError::MissingOperation)?;

        Ok(TransitionDescriptor {
            name,
            sources: self.sources,
            target,
            commit: self.commit,
            condition: self.condition,
            operation,
        })
    }
}

impl<R: Record, T: Default> TransitionBuilder<R, T> {
    /// Set a body that succeeds without doing anything.
    ///
    /// For transitions whose whole effect is the state change itself.
    pub fn succeeds(self) -> Self {
        self.run(|_| Ok(T::default()))
    }
}

impl<R: Record, T> Default for TransitionBuilder<R, T> {
    fn default() -> Self {
        Self::new()
    }
}
