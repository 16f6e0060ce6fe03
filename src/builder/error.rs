//! Build errors for state field and transition builders.

use thiserror::Error;

/// Errors that can occur when building state fields and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Field name not specified. Call .name(\"...\") before .build()")]
    MissingFieldName,

    #[error("Default state not specified. Call .default(state) before .build()")]
    MissingDefaultState,

    #[error("No transitions declared. Add at least one transition")]
    NoTransitions,

    #[error("Operation name not specified. Call .operation(\"...\")")]
    MissingOperationName,

    #[error("Transition source state not specified. Call .from(state) or .from_any(states)")]
    MissingSourceState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingTargetState,

    #[error("Transition operation body not specified. Call .run(body) or .succeeds()")]
    MissingOperation,
}
