//! Transition descriptors and the per-field registry that indexes them.

use crate::core::{Condition, OperationError, Record};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Commit strategy applied after a successful transition.
///
/// Selected per descriptor at declaration time, so persistence ordering is
/// visible where the transition is declared rather than buried in the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitPolicy {
    /// Advance the in-memory state only; persistence stays with the caller.
    Deferred,

    /// Invoke the record's `save` capability right after the state commit.
    Immediate,
}

/// Type alias for wrapped operation bodies.
///
/// Bodies run against the record under the guard's protection and report
/// success or failure; the guard commits the declared target state only on
/// success.
pub type Operation<R, T> = Arc<dyn Fn(&mut R) -> Result<T, OperationError> + Send + Sync>;

/// One declared transition: an edge from each of its source states to a
/// single target, bound to an operation body.
///
/// Descriptors are built by `TransitionBuilder` and owned by the field's
/// registry, indexed under every source state they declare.
pub struct TransitionDescriptor<R: Record, T = ()> {
    /// Operation identity; the name invocations are matched against.
    pub name: &'static str,
    /// States this transition may start from (at least one).
    pub sources: Vec<R::State>,
    /// State committed when the operation succeeds.
    pub target: R::State,
    /// What happens after a successful commit.
    pub commit: CommitPolicy,
    /// Optional predicate gating the transition on the record's attributes.
    pub condition: Option<Condition<R>>,
    /// The wrapped operation body.
    pub operation: Operation<R, T>,
}

impl<R: Record, T> TransitionDescriptor<R, T> {
    /// Check whether this transition is declared from the given state (pure).
    pub fn applies_from(&self, state: &R::State) -> bool {
        self.sources.contains(state)
    }

    /// Check whether this transition would be allowed right now: declared
    /// from the current state and accepted by its condition, if any.
    pub fn can_execute(&self, record: &R, current: &R::State) -> bool {
        self.applies_from(current) && self.condition.as_ref().is_none_or(|c| c.check(record))
    }
}

/// Mapping from source state to the declared transitions usable from it,
/// owned by one state field.
///
/// Indexed as `source state -> operation name -> descriptor`, because
/// validation always starts from "is this state allowed to do this": the
/// guard resolves the (current state, operation) pair with two hash lookups.
pub struct TransitionRegistry<R: Record, T = ()> {
    edges: HashMap<R::State, HashMap<&'static str, Arc<TransitionDescriptor<R, T>>>>,
}

impl<R: Record, T> TransitionRegistry<R, T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Insert a descriptor under each of its declared source states.
    ///
    /// Called once per declared transition while the field is being built.
    /// Registering a second descriptor for the same (source, operation)
    /// pair replaces the earlier one.
    pub fn register(&mut self, descriptor: TransitionDescriptor<R, T>) {
        let descriptor = Arc::new(descriptor);
        for source in &descriptor.sources {
            self.edges
                .entry(source.clone())
                .or_default()
                .insert(descriptor.name, Arc::clone(&descriptor));
        }
    }

    /// Find the descriptor for an operation invoked from the given state.
    ///
    /// Returns `None` when the state is not a declared source for that
    /// operation.
    pub fn lookup(&self, state: &R::State, operation: &str) -> Option<&TransitionDescriptor<R, T>> {
        self.edges
            .get(state)?
            .get(operation)
            .map(|descriptor| descriptor.as_ref())
    }

    /// Iterate over the descriptors declared from the given state.
    pub fn from<'a>(
        &'a self,
        state: &R::State,
    ) -> impl Iterator<Item = &'a TransitionDescriptor<R, T>> + 'a {
        self.edges
            .get(state)
            .into_iter()
            .flat_map(|ops| ops.values().map(|descriptor| descriptor.as_ref()))
    }
}

impl<R: Record, T> Default for TransitionRegistry<R, T> {
    fn default() -> Self {
        Self::new()
    }
}
