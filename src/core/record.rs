//! The `Record` trait: the contract with the persistent-record layer.
//!
//! The guard never talks to a database. It sees a record only through this
//! trait: which state fields the type declares, how to read and write the
//! current state value, and a `save` capability for transitions that request
//! immediate persistence. Everything else about storage stays with the
//! record layer.

use crate::core::state::StateValue;

/// Error type carried out of operation bodies and `save` calls.
///
/// The guard passes these through unmodified; it never wraps, reinterprets,
/// or retries them.
pub type OperationError = Box<dyn std::error::Error + Send + Sync>;

/// A persistent record with one or more declared state fields.
///
/// `state_fields` is the explicit replacement for runtime attribute
/// scanning: the record type states up front which of its attributes are
/// state fields, and the guard checks at call time that exactly one is
/// declared. `state` and `set_state` take the declared field name so the
/// same record type works regardless of what the attribute is called.
///
/// Implementations may panic when given a field name that is not in
/// `state_fields()`; the guard only passes declared names through.
///
/// # Example
///
/// ```rust
/// use stateguard::core::{OperationError, Record};
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
/// let mut post = BlogPost { state: "new".into() };
/// assert_eq!(post.state("state"), "new");
/// post.set_state("state", "published".into());
/// assert_eq!(post.state("state"), "published");
/// ```
pub trait Record {
    /// The value type held by this record's state fields.
    type State: StateValue;

    /// Names of the state-holding attributes declared on this record type.
    fn state_fields() -> &'static [&'static str];

    /// Read the current value of the named state field.
    fn state(&self, field: &str) -> Self::State;

    /// Overwrite the named state field with a new value.
    fn set_state(&mut self, field: &str, value: Self::State);

    /// Persist the record.
    ///
    /// Invoked by the guard only for transitions declared with an immediate
    /// commit policy. The default implementation succeeds without touching
    /// anything, so purely in-memory records need not override it.
    fn save(&mut self) -> Result<(), OperationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ticket {
        status: String,
        saved: usize,
    }

    impl Record for Ticket {
        type State = String;

        fn state_fields() -> &'static [&'static str] {
            &["status"]
        }

        fn state(&self, _field: &str) -> String {
            self.status.clone()
        }

        fn set_state(&mut self, _field: &str, value: String) {
            self.status = value;
        }

        fn save(&mut self) -> Result<(), OperationError> {
            self.saved += 1;
            Ok(())
        }
    }

    struct Volatile {
        state: String,
    }

    impl Record for Volatile {
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
    fn state_round_trips_through_accessors() {
        let mut ticket = Ticket {
            status: "open".into(),
            saved: 0,
        };

        assert_eq!(ticket.state("status"), "open");
        ticket.set_state("status", "closed".into());
        assert_eq!(ticket.state("status"), "closed");
    }

    #[test]
    fn save_capability_is_observable() {
        let mut ticket = Ticket {
            status: "open".into(),
            saved: 0,
        };

        ticket.save().unwrap();
        ticket.save().unwrap();
        assert_eq!(ticket.saved, 2);
    }

    #[test]
    fn default_save_succeeds() {
        let mut record = Volatile {
            state: "new".into(),
        };

        assert!(record.save().is_ok());
        assert_eq!(record.state("state"), "new");
    }

    #[test]
    fn declared_fields_are_enumerable() {
        assert_eq!(Ticket::state_fields(), &["status"]);
        assert_eq!(Volatile::state_fields(), &["state"]);
    }
}
