//! Condition predicates for gating declared transitions.
//!
//! A condition is a pure boolean function over the record. When a descriptor
//! carries one, the guard treats a rejecting condition exactly like an
//! unregistered source state: the transition is not allowed and the record
//! is untouched.

use std::sync::Arc;

/// Pure predicate that decides whether a declared transition may run
/// against a particular record.
///
/// Conditions see the whole record, not just its state value, so they can
/// gate on any attribute.
///
/// # Example
///
/// ```rust
/// use stateguard::core::Condition;
///
/// struct Document {
///     word_count: usize,
/// }
///
/// let long_enough = Condition::new(|doc: &Document| doc.word_count >= 100);
///
/// assert!(long_enough.check(&Document { word_count: 250 }));
/// assert!(!long_enough.check(&Document { word_count: 10 }));
/// ```
pub struct Condition<R> {
    predicate: Arc<dyn Fn(&R) -> bool + Send + Sync>,
}

impl<R> Condition<R> {
    /// Create a condition from a pure predicate function.
    ///
    /// The predicate must be deterministic and side-effect free; the guard
    /// may evaluate it both when answering availability queries and when
    /// validating a call.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        Condition {
            predicate: Arc::new(predicate),
        }
    }

    /// Check whether the condition accepts this record.
    pub fn check(&self, record: &R) -> bool {
        (self.predicate)(record)
    }
}

impl<R> Clone for Condition<R> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}
