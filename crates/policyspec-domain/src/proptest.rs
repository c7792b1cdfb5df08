//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Violating subsets (order, membership, pass iff empty)
//! - Subset/disjointness semantics of mass-assignment checks
//! - Positive and negated forms being complements

use crate::checks::{ActionSetCheck, AttributeSetCheck, Check};
use crate::message;
use crate::policy::MatcherConfig;
use crate::test_support::TablePolicy;
use policyspec_types::{Form, Outcome, Polarity};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,7}").unwrap()
}

/// Non-empty distinct action names, each with a query answer.
fn arb_query_table() -> impl Strategy<Value = BTreeMap<String, bool>> {
    prop::collection::btree_map(arb_name(), any::<bool>(), 1..8)
}

fn arb_polarity() -> impl Strategy<Value = Polarity> {
    prop_oneof![Just(Polarity::Permit), Just(Polarity::Forbid)]
}

fn arb_attributes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_name(), 1..8)
}

fn is_subsequence(sub: &[String], full: &[String]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|s| it.any(|f| f == s))
}

fn assert_forms_complement(outcome: &Outcome) {
    assert_ne!(outcome.holds(Form::Positive), outcome.holds(Form::Negated));
}

// ============================================================================
// Action sets
// ============================================================================

proptest! {
    #[test]
    fn action_set_violations_disagree_with_polarity(
        table in arb_query_table(),
        polarity in arb_polarity(),
    ) {
        let mut policy = TablePolicy::new();
        for (action, allowed) in &table {
            policy = policy.with_query(action, *allowed);
        }
        let actions: Vec<String> = table.keys().cloned().collect();

        let outcome = ActionSetCheck::new(actions.clone(), polarity)
            .evaluate(&policy, &MatcherConfig::default())
            .unwrap();

        let expected: Vec<String> = actions
            .iter()
            .filter(|a| !polarity.accepts(table[*a]))
            .cloned()
            .collect();
        prop_assert_eq!(&outcome.violating, &expected);
        prop_assert_eq!(outcome.passed, table.values().all(|v| polarity.accepts(*v)));
        prop_assert!(is_subsequence(&outcome.violating, &actions));
        assert_forms_complement(&outcome);
    }

    #[test]
    fn action_set_message_mentions_every_violation(
        table in arb_query_table(),
        polarity in arb_polarity(),
    ) {
        let mut policy = TablePolicy::new();
        for (action, allowed) in &table {
            policy = policy.with_query(action, *allowed);
        }
        let actions: Vec<String> = table.keys().cloned().collect();
        let outcome = ActionSetCheck::new(actions, polarity)
            .evaluate(&policy, &MatcherConfig::default())
            .unwrap();

        let msg = message::render(&outcome, Form::Positive);
        prop_assert!(msg.starts_with("TablePolicy expected to"));
        prop_assert!(msg.contains(&message::format_list(&outcome.violating)));
    }
}

// ============================================================================
// Attribute sets
// ============================================================================

proptest! {
    #[test]
    fn permit_passes_iff_subset_forbid_passes_iff_disjoint(
        permitted in prop::collection::vec(arb_name(), 0..8),
        requested in arb_attributes(),
    ) {
        let refs: Vec<&str> = permitted.iter().map(String::as_str).collect();
        let policy = TablePolicy::new().with_permitted(&refs);
        let allowed: BTreeSet<&String> = permitted.iter().collect();

        let permit = AttributeSetCheck::new(requested.clone(), Polarity::Permit)
            .evaluate(&policy, &MatcherConfig::default())
            .unwrap();
        prop_assert_eq!(permit.passed, requested.iter().all(|a| allowed.contains(a)));
        prop_assert!(is_subsequence(&permit.violating, &requested));

        let forbid = AttributeSetCheck::new(requested.clone(), Polarity::Forbid)
            .evaluate(&policy, &MatcherConfig::default())
            .unwrap();
        prop_assert_eq!(forbid.passed, requested.iter().all(|a| !allowed.contains(a)));
        prop_assert!(is_subsequence(&forbid.violating, &requested));

        // Every requested attribute violates exactly one of the two polarities.
        prop_assert_eq!(
            permit.violating.len() + forbid.violating.len(),
            requested.len()
        );
        assert_forms_complement(&permit);
        assert_forms_complement(&forbid);
    }

    #[test]
    fn scalar_and_single_element_sequence_agree(
        attr in arb_name(),
        permitted in prop::collection::vec(arb_name(), 0..4),
        polarity in arb_polarity(),
    ) {
        let refs: Vec<&str> = permitted.iter().map(String::as_str).collect();
        let policy = TablePolicy::new().with_permitted(&refs);
        let cfg = MatcherConfig::default();

        let scalar = AttributeSetCheck::new(attr.clone(), polarity).evaluate(&policy, &cfg).unwrap();
        let seq = AttributeSetCheck::new(vec![attr], polarity).evaluate(&policy, &cfg).unwrap();
        prop_assert_eq!(scalar, seq);
    }

    #[test]
    fn scope_selects_reference_list(
        attr in arb_name(),
        action in arb_name(),
    ) {
        // Permitted when scoped, not when unscoped.
        let policy = TablePolicy::new()
            .with_permitted(&[])
            .with_permitted_for(&action, &[attr.as_str()]);
        let cfg = MatcherConfig::default();

        let scoped = AttributeSetCheck::new(attr.clone(), Polarity::Permit)
            .for_action(action)
            .evaluate(&policy, &cfg)
            .unwrap();
        let unscoped = AttributeSetCheck::new(attr, Polarity::Permit)
            .evaluate(&policy, &cfg)
            .unwrap();
        prop_assert!(scoped.passed);
        prop_assert!(!unscoped.passed);
    }
}
