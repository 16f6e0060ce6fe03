//! Property-based tests for the transition guard.
//!
//! These tests use proptest to verify the guard's state-effect guarantees
//! hold across many randomly generated state combinations.

use proptest::prelude::*;
use stateguard::builder::{StateFieldBuilder, TransitionBuilder};
use stateguard::core::Record;
use stateguard::{StateField, TransitionError};

struct TestRecord {
    state: String,
}

impl Record for TestRecord {
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

const TOKENS: [&str; 5] = ["new", "published", "hidden", "stolen", "removed"];

prop_compose! {
    fn arbitrary_state()(index in 0..TOKENS.len()) -> String {
        TOKENS[index].to_string()
    }
}

fn single_edge_field(from: String, to: String) -> StateField<TestRecord> {
    StateFieldBuilder::new()
        .name("state")
        .default(from.clone())
        .transition(
            TransitionBuilder::new()
                .operation("go")
                .from(from)
                .to(to)
                .succeeds(),
        )
        .unwrap()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn allowed_transition_commits_exactly_the_target(
        from in arbitrary_state(),
        to in arbitrary_state(),
        current in arbitrary_state(),
    ) {
        let field = single_edge_field(from.clone(), to.clone());
        let mut record = TestRecord { state: current.clone() };

        let permitted = field.can(&record, "go");
        let result = field.apply(&mut record, "go");

        if current == from {
            prop_assert!(permitted);
            prop_assert!(result.is_ok());
            prop_assert_eq!(record.state, to);
        } else {
            prop_assert!(!permitted);
            let is_invalid = matches!(
                result,
                Err(TransitionError::InvalidTransition { .. })
            );
            prop_assert!(is_invalid);
            prop_assert_eq!(record.state, current);
        }
    }

    #[test]
    fn failing_body_never_mutates_state(
        from in arbitrary_state(),
        to in arbitrary_state(),
        current in arbitrary_state(),
    ) {
        let field: StateField<TestRecord> = StateFieldBuilder::new()
            .name("state")
            .default(from.clone())
            .transition(
                TransitionBuilder::new()
                    .operation("explode")
                    .from(from.clone())
                    .to(to)
                    .run(|_: &mut TestRecord| Err("boom".into())),
            )
            .unwrap()
            .build()
            .unwrap();

        let mut record = TestRecord { state: current.clone() };
        let result = field.apply(&mut record, "explode");

        prop_assert!(result.is_err());
        prop_assert_eq!(&record.state, &current);

        if current == from {
            let is_operation = matches!(result, Err(TransitionError::Operation { .. }));
            prop_assert!(is_operation);
        } else {
            let is_invalid = matches!(
                result,
                Err(TransitionError::InvalidTransition { .. })
            );
            prop_assert!(is_invalid);
        }
    }

    #[test]
    fn validation_is_deterministic(
        from in arbitrary_state(),
        to in arbitrary_state(),
        current in arbitrary_state(),
    ) {
        let field = single_edge_field(from, to);
        let record = TestRecord { state: current };

        let first = field.can(&record, "go");
        let second = field.can(&record, "go");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn multi_source_lookup_matches_declared_sources(
        sources in prop::collection::hash_set(arbitrary_state(), 1..4),
        current in arbitrary_state(),
    ) {
        let declared: Vec<String> = sources.iter().cloned().collect();
        let field: StateField<TestRecord> = StateFieldBuilder::new()
            .name("state")
            .default("new".to_string())
            .transition(
                TransitionBuilder::new()
                    .operation("jump")
                    .from_any(declared)
                    .to("stolen".to_string())
                    .succeeds(),
            )
            .unwrap()
            .build()
            .unwrap();

        let mut record = TestRecord { state: current.clone() };
        let result = field.apply(&mut record, "jump");

        if sources.contains(&current) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(record.state, "stolen".to_string());
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(record.state, current);
        }
    }

    #[test]
    fn available_agrees_with_can(
        from in arbitrary_state(),
        to in arbitrary_state(),
        current in arbitrary_state(),
    ) {
        let field = single_edge_field(from, to);
        let record = TestRecord { state: current };

        let listed = field
            .available(&record)
            .into_iter()
            .any(|descriptor| descriptor.name == "go");
        prop_assert_eq!(listed, field.can(&record, "go"));
    }

    #[test]
    fn initial_always_clones_the_default(default in arbitrary_state()) {
        let field = single_edge_field(default.clone(), "stolen".to_string());
        prop_assert_eq!(field.initial(), default);
    }
}
