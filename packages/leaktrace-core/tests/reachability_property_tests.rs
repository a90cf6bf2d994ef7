//! Property-based tests for leak-cause inference
//!
//! Invariants that should hold for ALL verdict sequences:
//! - Unreachable elements are never blamed
//! - The leaking instance is never blamed
//! - Idempotence: assembling twice gives identical verdicts and shapes
//! - A trailing unreachable run carries no blame
//! - Inspectors ignore elements without their marker class

mod common;

use common::*;
use leaktrace_core::{
    ConnectorShape, FieldInspector, HolderKind, LeakReference, LeakTraceAssembler,
    LeakTraceElement, Reachability, ReachabilityInspector,
};
use proptest::prelude::*;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn verdict_strategy() -> impl Strategy<Value = Reachability> {
    prop_oneof![
        Just(Reachability::Reachable),
        Just(Reachability::Unreachable),
        Just(Reachability::Unknown),
    ]
}

fn verdicts_strategy() -> impl Strategy<Value = Vec<Reachability>> {
    prop::collection::vec(verdict_strategy(), 1..24)
}

fn verdict_from_byte(b: u8) -> Reachability {
    match b % 3 {
        0 => Reachability::Reachable,
        1 => Reachability::Unreachable,
        _ => Reachability::Unknown,
    }
}

proptest! {
    #[test]
    fn prop_scripted_verdicts_are_preserved(verdicts in verdicts_strategy()) {
        let trace = LeakTraceAssembler::new(scripted_chain())
            .assemble(scripted_elements(&verdicts))
            .unwrap();
        prop_assert_eq!(trace.verdicts(), verdicts.as_slice());
    }

    #[test]
    fn prop_unreachable_and_terminal_never_blamed(verdicts in verdicts_strategy()) {
        let trace = LeakTraceAssembler::new(scripted_chain())
            .assemble(scripted_elements(&verdicts))
            .unwrap();

        for row in trace.rows() {
            if row.verdict == Reachability::Unreachable || row.is_leaking_instance {
                prop_assert!(!row.maybe_leak_cause, "row {} blamed", row.index);
            }
        }
    }

    #[test]
    fn prop_blame_iff_successor_not_reachable(verdicts in verdicts_strategy()) {
        let trace = LeakTraceAssembler::new(scripted_chain())
            .assemble(scripted_elements(&verdicts))
            .unwrap();

        for i in 0..verdicts.len().saturating_sub(1) {
            let expected = verdicts[i] != Reachability::Unreachable
                && verdicts[i + 1] != Reachability::Reachable;
            prop_assert_eq!(trace.maybe_leak_cause(i).unwrap(), expected);
        }
    }

    #[test]
    fn prop_assembly_is_idempotent(verdicts in verdicts_strategy()) {
        let assembler = LeakTraceAssembler::new(scripted_chain());
        let elements = scripted_elements(&verdicts);

        let first = assembler.assemble(elements.clone()).unwrap();
        let second = assembler.assemble(elements).unwrap();

        prop_assert_eq!(first.verdicts(), second.verdicts());
        for i in 0..first.len() {
            prop_assert_eq!(first.connector_shape(i).unwrap(), second.connector_shape(i).unwrap());
            prop_assert_eq!(first.maybe_leak_cause(i).unwrap(), second.maybe_leak_cause(i).unwrap());
        }
    }

    #[test]
    fn prop_trailing_unreachable_run_carries_no_blame(
        prefix in prop::collection::vec(verdict_strategy(), 0..12),
        run in 1usize..8,
    ) {
        let mut verdicts = prefix.clone();
        verdicts.extend(std::iter::repeat(Reachability::Unreachable).take(run));

        let trace = LeakTraceAssembler::new(scripted_chain())
            .assemble(scripted_elements(&verdicts))
            .unwrap();

        for j in prefix.len()..verdicts.len() {
            prop_assert!(!trace.maybe_leak_cause(j).unwrap());
        }
    }

    #[test]
    fn prop_shapes_are_positional(verdicts in verdicts_strategy()) {
        let trace = LeakTraceAssembler::new(scripted_chain())
            .assemble(scripted_elements(&verdicts))
            .unwrap();
        let n = trace.len();

        for i in 0..n {
            let shape = trace.connector_shape(i).unwrap();
            prop_assert_eq!(shape.is_start(), i == 0);
            prop_assert_eq!(shape.is_end(), i == n - 1 && n > 1);
            if i > 0 && i < n - 1 && verdicts[i] == Reachability::Unknown {
                prop_assert_eq!(shape, ConnectorShape::NodeUnknown);
            }
        }
    }
}

// ============================================================================
// QuickCheck Tests
// ============================================================================

#[quickcheck]
fn qc_inspector_ignores_elements_without_marker(field_values: Vec<(String, String)>) -> bool {
    let inspector = FieldInspector::new("Marker", "test.Marker", "state", "dead");
    let element = LeakTraceElement::new(HolderKind::Object, ["test.Other", "test.Base"]).with_fields(
        field_values
            .into_iter()
            .map(|(name, value)| LeakReference::instance_field(name, value))
            .chain(std::iter::once(LeakReference::instance_field("state", "dead"))),
    );
    inspector.classify(&element) == Reachability::Unknown
}

#[quickcheck]
fn qc_out_of_range_always_fails(bytes: Vec<u8>, past_end: usize) -> TestResult {
    if bytes.is_empty() {
        return TestResult::discard();
    }
    let verdicts: Vec<Reachability> = bytes.iter().map(|b| verdict_from_byte(*b)).collect();
    let trace = match LeakTraceAssembler::new(scripted_chain()).assemble(scripted_elements(&verdicts)) {
        Ok(trace) => trace,
        Err(_) => return TestResult::failed(),
    };

    let index = trace.len().saturating_add(past_end % 1024);
    TestResult::from_bool(
        trace.maybe_leak_cause(index).is_err() && trace.connector_shape(index).is_err(),
    )
}

#[quickcheck]
fn qc_first_authoritative_inspector_wins(destroyed: bool, finishing: bool) -> bool {
    let element = activity(destroyed)
        .with_field(LeakReference::instance_field("mFinishing", finishing.to_string()));
    let chain = leaktrace_core::InspectorChain::android().with_inspector(Box::new(
        FieldInspector::new("FinishingInspector", "android.app.Activity", "mFinishing", "true"),
    ));

    let classification = chain.classify(&element);
    let expected = if destroyed {
        Reachability::Unreachable
    } else {
        Reachability::Reachable
    };
    classification.verdict == expected && classification.is_conflicted() == (destroyed != finishing)
}
