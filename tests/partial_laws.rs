//! Property-based tests for placeholder resolution laws.
//!
//! This module verifies that partial application satisfies the required laws:
//!
//! ## Application Laws
//! - **Prefix**: `partial!(f, a, __)(b) == f(a, b)`
//! - **Suffix**: `partial!(f, __, b)(a) == f(a, b)`
//! - **Split**: `partial!(f, a, __, c)(b) == f(a, b, c)`
//! - **Deferral**: `partial!(f, a, __, c)(__)(b) == f(a, b, c)`
//! - **No-op**: `partial!(f, a, __, c)()(b) == partial!(f, a, __, c)(b)`
//!
//! ## Decorator Laws
//! - **Transparency**: `make_placeholder_aware(f)(a, b, c) == f(a, b, c)`
//! - **Propagation**: `g(a, __)(b, __)(c) == f(a, b, c)`
//!
//! ## Resolution Law
//! - **Positional fill**: filling placeholders left to right and then
//!   appending surplus fills yields the same argument list as merging by hand.
//!
//! Using proptest, we generate random inputs to thoroughly verify these laws
//! across a wide range of values.

use partiell::{Applied, Slot, apply, call, from_fn3, make_placeholder_aware, partial};
use proptest::prelude::*;

fn binary(arguments: Vec<i32>) -> (i32, i32) {
    (arguments[0], arguments[1])
}

fn ternary(arguments: Vec<i32>) -> (i32, i32, i32) {
    (arguments[0], arguments[1], arguments[2])
}

fn identity(arguments: Vec<i32>) -> Vec<i32> {
    arguments
}

fn slot_strategy() -> impl Strategy<Value = Slot<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Slot::Value),
        Just(Slot::Placeholder),
    ]
}

/// Merges fills into slots the slow way, for comparison.
fn merge_by_hand(slots: &[Slot<i32>], fills: &[Slot<i32>]) -> Vec<Slot<i32>> {
    let mut remaining = fills.iter().cloned();
    let mut merged: Vec<Slot<i32>> = slots
        .iter()
        .map(|slot| match slot {
            Slot::Value(value) => Slot::Value(*value),
            Slot::Placeholder => remaining.next().unwrap_or(Slot::Placeholder),
        })
        .collect();
    merged.extend(remaining);
    merged
}

// =============================================================================
// Application Laws
// =============================================================================

proptest! {
    /// Prefix Law: partial!(f, a, __)(b) == f(a, b)
    #[test]
    fn prop_prefix_application(a in any::<i32>(), b in any::<i32>()) {
        let partial = partial!(binary, a, __).pending().unwrap();
        prop_assert_eq!(call!(partial, b).resolved(), Some(binary(vec![a, b])));
    }

    /// Suffix Law: partial!(f, __, b)(a) == f(a, b)
    #[test]
    fn prop_suffix_application(a in any::<i32>(), b in any::<i32>()) {
        let partial = partial!(binary, __, b).pending().unwrap();
        prop_assert_eq!(call!(partial, a).resolved(), Some(binary(vec![a, b])));
    }

    /// Split Law: partial!(f, a, __, c)(b) == f(a, b, c)
    #[test]
    fn prop_split_application(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let partial = partial!(ternary, a, __, c).pending().unwrap();
        prop_assert_eq!(call!(partial, b).resolved(), Some(ternary(vec![a, b, c])));
    }

    /// Deferral Law: partial!(f, a, __, c)(__)(b) == f(a, b, c)
    #[test]
    fn prop_placeholder_fill_defers(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let partial = partial!(ternary, a, __, c).pending().unwrap();
        let deferred = call!(partial, __).pending().unwrap();
        prop_assert_eq!(call!(deferred, b).resolved(), Some(ternary(vec![a, b, c])));
    }

    /// No-op Law: calling with no fills changes nothing
    #[test]
    fn prop_zero_fills_is_identity(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let partial = partial!(ternary, a, __, c).pending().unwrap();
        let same = call!(partial).pending().unwrap();
        prop_assert_eq!(same.slots(), partial.slots());
        prop_assert_eq!(call!(same, b).resolved(), call!(partial, b).resolved());
    }
}

// =============================================================================
// Decorator Laws
// =============================================================================

proptest! {
    /// Transparency Law: without placeholders the decorated function is the function
    #[test]
    fn prop_decorator_transparency(arguments in prop::collection::vec(any::<i32>(), 0..6)) {
        let target = from_fn3(|x: i32, y: i32, z: i32| i64::from(x) + i64::from(y) + i64::from(z));
        let expected = target(arguments.clone());
        let decorated = make_placeholder_aware(target);

        let slots: Vec<Slot<i32>> = arguments.into_iter().map(Slot::Value).collect();
        prop_assert_eq!(call_resolved(&decorated, slots), Some(expected));
    }

    /// Propagation Law: g(a, __)(b, __)(c) == f(a, b, c)
    #[test]
    fn prop_decorator_propagation(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let decorated = make_placeholder_aware(ternary);
        let first = call!(decorated, a, __).pending().unwrap();
        let second = call!(first, b, __).pending().unwrap();
        prop_assert_eq!(call!(second, c).resolved(), Some(ternary(vec![a, b, c])));
    }
}

fn call_resolved<I>(callable: &I, slots: Vec<Slot<i32>>) -> Option<I::Output>
where
    I: partiell::Invocable<i32>,
{
    callable.call(slots).resolved()
}

// =============================================================================
// Resolution Law
// =============================================================================

proptest! {
    /// Positional fill: the applicator agrees with a by-hand merge
    #[test]
    fn prop_positional_fill(
        head in any::<i32>(),
        tail in prop::collection::vec(slot_strategy(), 0..6),
        fills in prop::collection::vec(slot_strategy(), 0..6),
    ) {
        let mut initial = vec![Slot::Value(head), Slot::Placeholder];
        initial.extend(tail);

        let partial = apply(identity, initial.clone()).pending().unwrap();
        let expected = merge_by_hand(&initial, &fills);

        match partial.call(fills) {
            Applied::Resolved(arguments) => {
                let expected: Vec<i32> = expected.into_iter().filter_map(Slot::into_value).collect();
                prop_assert_eq!(arguments, expected);
            }
            Applied::Pending(next) => {
                prop_assert!(expected.iter().any(Slot::is_placeholder));
                prop_assert_eq!(next.slots(), expected.as_slice());
            }
        }
    }
}
