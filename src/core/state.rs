//! The `StateValue` trait for state-field tokens.
//!
//! State values are the opaque tokens a record's state field holds. The
//! guard compares and indexes them but never inspects their representation,
//! so anything from a short symbolic string to a domain enum works.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for values a state field can hold.
///
/// The transition registry indexes descriptors by source state, so values
/// must be hashable and comparable. They must also round-trip through
/// serialization unchanged, since the owning record is a persistent object.
///
/// # Required Traits
///
/// - `Clone`: values are copied into descriptors and back onto records
/// - `Eq` + `Hash`: values key the transition registry
/// - `Debug`: values appear in error messages and log events
/// - `Serialize` + `Deserialize`: values must survive storage round-trips
///
/// # Example
///
/// ```rust
/// use stateguard::core::StateValue;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum PostState {
///     New,
///     Published,
///     Hidden,
/// }
///
/// impl StateValue for PostState {
///     fn name(&self) -> &str {
///         match self {
///             Self::New => "new",
///             Self::Published => "published",
///             Self::Hidden => "hidden",
///         }
///     }
/// }
/// ```
pub trait StateValue:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the value's name for display/logging.
    fn name(&self) -> &str;
}

/// Plain strings work as state values, matching the short symbolic tokens
/// persistent records commonly store.
///
/// # Example
///
/// ```rust
/// use stateguard::core::StateValue;
///
/// let state = String::from("published");
/// assert_eq!(state.name(), "published");
/// ```
impl StateValue for String {
    fn name(&self) -> &str {
        self
    }
}
