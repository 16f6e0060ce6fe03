//! Stateguard: declarative state-machine guards for persistent record fields.
//!
//! Stateguard attaches a finite-state-machine discipline to one field of a
//! database-backed record type. Transitions are declared once, per mutating
//! operation: which source state(s) the record must be in, and which target
//! state the operation moves it to. At call time a guard checks the current
//! state, runs the operation, and commits the new state only on success;
//! on any failure the record is left exactly as it was.
//!
//! # Core Concepts
//!
//! - **State values**: opaque comparable tokens via the `StateValue` trait
//! - **Records**: the persistence contract via the `Record` trait
//! - **State fields**: one guarded attribute per record type, built once
//! - **Transitions**: declared edges, each bound to an operation body
//!
//! # Example
//!
//! ```rust
//! use stateguard::builder::{StateFieldBuilder, TransitionBuilder};
//! use stateguard::core::Record;
//! use stateguard::StateField;
//!
//! struct BlogPost {
//!     state: String,
//! }
//!
//! impl Record for BlogPost {
//!     type State = String;
//!
//!     fn state_fields() -> &'static [&'static str] {
//!         &["state"]
//!     }
//!
//!     fn state(&self, _field: &str) -> String {
//!         self.state.clone()
//!     }
//!
//!     fn set_state(&mut self, _field: &str, value: String) {
//!         self.state = value;
//!     }
//! }
//!
//! let field: StateField<BlogPost> = StateFieldBuilder::new()
//!     .name("state")
//!     .default("new".to_string())
//!     .transition(
//!         TransitionBuilder::new()
//!             .operation("publish")
//!             .from("new".to_string())
//!             .to("published".to_string())
//!             .succeeds(),
//!     )?
//!     .build()?;
//!
//! let mut post = BlogPost {
//!     state: field.initial(),
//! };
//! field.apply(&mut post, "publish")?;
//! assert_eq!(post.state, "published");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod field;
pub mod guard;

// Re-export commonly used types
pub use builder::{BuildError, StateFieldBuilder, TransitionBuilder};
pub use core::{Condition, OperationError, Record, StateValue};
pub use field::{CommitPolicy, StateField, TransitionDescriptor, TransitionRegistry};
pub use guard::{TransitionError, TransitionEvent, TransitionHook};
