//! Property-based tests for the store, rule and projection invariants.

use formsmith_core::projection::{project, valid_fields};
use formsmith_core::rules::interpret;
use formsmith_core::{FieldDefinitionStore, FieldDraft, FieldType};
use proptest::prelude::*;

// ═══════════════════════════════════════════════════════════════════════════
// TEST DATA GENERATORS
// ═══════════════════════════════════════════════════════════════════════════

/// Rule strings, biased towards ones that mention `required` somewhere.
fn rule_text() -> impl Strategy<Value = String> {
    prop_oneof![
        ".*",
        ("[a-z() |]{0,12}", "[a-z() |]{0,12}").prop_map(|(a, b)| format!("{a}required{b}")),
        "(email\\(\\)|min\\([0-9]\\)|Required|requir|not_required)( \\| [a-z]{0,6})?",
    ]
}

/// Names including empty and whitespace-only ones.
fn field_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{1,3}",
        "[a-z][a-z_]{0,8}",
        " ?[a-z]{1,5} ?",
    ]
}

fn field_type() -> impl Strategy<Value = FieldType> {
    prop_oneof![Just(FieldType::Text), Just(FieldType::Email), Just(FieldType::Number)]
}

fn field_draft() -> impl Strategy<Value = FieldDraft> {
    (field_name(), field_type(), "[A-Za-z ]{0,8}", rule_text())
        .prop_map(|(name, field_type, label, rules)| FieldDraft::new(name, field_type, label, rules))
}

fn store_from(drafts: &[FieldDraft]) -> FieldDefinitionStore {
    let mut store = FieldDefinitionStore::empty();
    for draft in drafts {
        store.append(draft.clone());
    }
    store
}

// ═══════════════════════════════════════════════════════════════════════════
// PROPERTIES
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn required_iff_rules_contain_required(rules in rule_text()) {
        prop_assert_eq!(interpret(&rules).required, rules.contains("required"));
    }

    #[test]
    fn projection_keeps_named_rows_in_store_order(drafts in prop::collection::vec(field_draft(), 0..12)) {
        let store = store_from(&drafts);
        let projected = project(&store);

        let expected: Vec<_> = store
            .fields()
            .filter(|field| !field.name.trim().is_empty())
            .map(|field| field.id)
            .collect();
        let actual: Vec<_> = projected.iter().map(|field| field.id).collect();

        prop_assert_eq!(actual, expected);
        prop_assert!(projected.iter().all(|field| !field.name.trim().is_empty()));
        prop_assert!(projected.len() <= store.len());
        prop_assert_eq!(valid_fields(store.fields()), projected);
    }

    #[test]
    fn projected_rows_are_unchanged_copies(drafts in prop::collection::vec(field_draft(), 0..12)) {
        let store = store_from(&drafts);
        for field in project(&store) {
            prop_assert_eq!(store.get(field.id), Some(&field));
        }
    }

    #[test]
    fn append_then_remove_last_restores_content(
        drafts in prop::collection::vec(field_draft(), 0..8),
        extra in field_draft(),
    ) {
        let mut store = store_from(&drafts);
        let before = store.clone();

        let id = store.append(extra.clone());
        let removed = store.remove_at(store.len() - 1);

        prop_assert_eq!(removed.map(|field| (field.id, field.draft())), Some((id, extra)));
        prop_assert_eq!(store.definition(), before.definition());
        prop_assert_eq!(store, before);
    }

    #[test]
    fn out_of_range_removal_is_a_no_op(
        drafts in prop::collection::vec(field_draft(), 0..8),
        offset in 0usize..4,
    ) {
        let mut store = store_from(&drafts);
        let before = store.clone();

        prop_assert!(store.remove_at(store.len() + offset).is_none());
        prop_assert_eq!(store, before);
    }
}
