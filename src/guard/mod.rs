//! The transition guard: runtime enforcement of declared transitions.
//!
//! Every guarded call runs the same protocol:
//!
//! 1. Resolve the owning state field on the record type
//! 2. Validate the current state against the declared sources
//! 3. Execute the wrapped operation body
//! 4. Commit the declared target state, only on success
//! 5. Persist the record, only when the descriptor asks for it
//!
//! The record's state is never mutated before step 4, so a failure anywhere
//! up to and including step 3 leaves the record exactly as it was.

use crate::core::{OperationError, Record, StateValue};
use crate::field::{CommitPolicy, StateField, TransitionDescriptor};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by a guarded transition call.
///
/// The variants carry the guard's state-effect guarantees: `Configuration`,
/// `InvalidTransition`, and `Operation` all leave the record's state
/// untouched, while `Save` means the in-memory state already advanced to
/// the target and only persistence failed.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// The record type does not resolve to exactly one state field bound to
    /// this guard. A declaration mistake, never retried.
    #[error("state field '{expected}' cannot be resolved: record type declares {declared:?}")]
    Configuration {
        expected: &'static str,
        declared: Vec<&'static str>,
    },

    /// The current state is not a declared source for this operation, or
    /// the descriptor's condition rejected the record.
    #[error("operation '{operation}' is not a declared transition from state '{from}'")]
    InvalidTransition { operation: String, from: String },

    /// The wrapped operation body failed. Its error is carried unmodified
    /// as the source; the guard neither wraps nor reinterprets it.
    #[error("operation '{operation}' failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: OperationError,
    },

    /// The record's `save` capability failed after a successful commit.
    /// The in-memory state remains at the target.
    #[error("save after transition '{operation}' to '{target}' failed: {source}")]
    Save {
        operation: String,
        target: String,
        #[source]
        source: OperationError,
    },
}

/// What a transition hook gets to see: the operation identity and the edge
/// being traversed.
pub struct TransitionEvent<'a, S> {
    /// Name of the operation being invoked.
    pub operation: &'a str,
    /// The record's state when the call was validated.
    pub from: &'a S,
    /// The descriptor's declared target state.
    pub to: &'a S,
}

/// Callback invoked around a transition.
///
/// Before-hooks run after validation and before the operation body;
/// after-hooks run once the target state is committed (and saved, for
/// immediate-commit descriptors). A failing body or save means after-hooks
/// never fire.
pub type TransitionHook<R> =
    Arc<dyn Fn(&R, &TransitionEvent<'_, <R as Record>::State>) + Send + Sync>;

impl<R: Record, T> StateField<R, T> {
    /// Step 1: the record type must declare exactly one state field, and it
    /// must be the one this guard is bound to. Checked on every call, since
    /// field declarations and transition declarations cannot be linked
    /// until an operation actually runs against an instance.
    pub(crate) fn resolve_binding(&self) -> Result<(), TransitionError> {
        let declared = R::state_fields();
        if declared.len() == 1 && declared[0] == self.name {
            Ok(())
        } else {
            Err(TransitionError::Configuration {
                expected: self.name,
                declared: declared.to_vec(),
            })
        }
    }

    /// Steps 1–2: resolve the field and find the descriptor permitting
    /// `operation` from the record's current state.
    pub(crate) fn validate(
        &self,
        record: &R,
        operation: &str,
    ) -> Result<&TransitionDescriptor<R, T>, TransitionError> {
        self.resolve_binding()?;
        let current = record.state(self.name);
        self.registry
            .lookup(&current, operation)
            .filter(|descriptor| {
                descriptor
                    .condition
                    .as_ref()
                    .is_none_or(|condition| condition.check(record))
            })
            .ok_or_else(|| TransitionError::InvalidTransition {
                operation: operation.to_string(),
                from: current.name().to_string(),
            })
    }

    /// Invoke a declared transition against this record.
    ///
    /// On success the record's state is the descriptor's declared target
    /// and the operation body's output is returned. On any failure before
    /// the commit the state is exactly what it was before the call:
    ///
    /// - [`TransitionError::Configuration`]: the record type does not
    ///   resolve to exactly one state field; nothing was validated.
    /// - [`TransitionError::InvalidTransition`]: the current state does
    ///   not permit this operation; state unchanged.
    /// - [`TransitionError::Operation`]: the body failed; its error is the
    ///   source; state unchanged.
    /// - [`TransitionError::Save`]: persistence failed after the commit;
    ///   the in-memory state remains at the target so the caller can
    ///   re-save or reload.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stateguard::builder::{StateFieldBuilder, TransitionBuilder};
    /// use stateguard::core::Record;
    /// use stateguard::{StateField, TransitionError};
    ///
    /// struct Job {
    ///     state: String,
    /// }
    ///
    /// impl Record for Job {
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
    /// let field: StateField<Job> = StateFieldBuilder::new()
    ///     .name("state")
    ///     .default("queued".to_string())
    ///     .transition(
    ///         TransitionBuilder::new()
    ///             .operation("start")
    ///             .from("queued".to_string())
    ///             .to("running".to_string())
    ///             .succeeds(),
    ///     )?
    ///     .build()?;
    ///
    /// let mut job = Job {
    ///     state: field.initial(),
    /// };
    ///
    /// // Not declared from "queued": the call fails and state is untouched.
    /// let err = field.apply(&mut job, "finish").unwrap_err();
    /// assert!(matches!(err, TransitionError::InvalidTransition { .. }));
    /// assert_eq!(job.state, "queued");
    ///
    /// field.apply(&mut job, "start")?;
    /// assert_eq!(job.state, "running");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn apply(&self, record: &mut R, operation: &str) -> Result<T, TransitionError> {
        let descriptor = self.validate(record, operation)?;
        let from = record.state(self.name);

        let event = TransitionEvent {
            operation,
            from: &from,
            to: &descriptor.target,
        };
        for hook in &self.before {
            hook(record, &event);
        }

        let output =
            (descriptor.operation)(record).map_err(|source| TransitionError::Operation {
                operation: operation.to_string(),
                source,
            })?;

        record.set_state(self.name, descriptor.target.clone());
        debug!(
            operation,
            from = %from.name(),
            to = %descriptor.target.name(),
            "transition committed"
        );

        if descriptor.commit == CommitPolicy::Immediate {
            record.save().map_err(|source| TransitionError::Save {
                operation: operation.to_string(),
                target: descriptor.target.name().to_string(),
                source,
            })?;
            debug!(operation, "record saved");
        }

        for hook in &self.after {
            hook(record, &event);
        }

        Ok(output)
    }
}
