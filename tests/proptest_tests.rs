// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check the normalization and substitution pipeline against
//! arbitrary documents and placeholder tables.

use hexvalues::domain::{
    normalize, substitute, to_generic_value, unresolved_placeholders, Document, GenericValue,
    RawNode, SubstitutionTable,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn leaf() -> impl Strategy<Value = Document> {
    prop_oneof![
        "[a-z ${}_.-]{0,16}".prop_map(Document::String),
        any::<i64>().prop_map(Document::Int),
        (-1.0e9f64..1.0e9f64).prop_map(Document::Float),
        any::<bool>().prop_map(Document::Bool),
        Just(Document::Other(RawNode::Null)),
    ]
}

fn document() -> impl Strategy<Value = Document> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Document::Sequence),
            prop::collection::btree_map("[a-zA-Z_]{1,8}", inner, 0..6)
                .prop_map(Document::Mapping),
        ]
    })
}

fn table() -> impl Strategy<Value = SubstitutionTable> {
    prop::collection::hash_map("[a-zA-Z_]{1,6}", "[a-z0-9.-]{0,8}", 0..6)
        .prop_map(|entries| entries.into_iter().collect::<SubstitutionTable>())
}

// Substitution is deterministic for the same input
proptest! {
    #[test]
    fn test_substitution_is_deterministic(doc in document(), table in table()) {
        let first = substitute(doc.clone(), &table);
        let second = substitute(doc, &table);
        prop_assert_eq!(first, second);
    }
}

// An empty table leaves every document unchanged
proptest! {
    #[test]
    fn test_empty_table_is_identity(doc in document()) {
        prop_assert_eq!(substitute(doc.clone(), &SubstitutionTable::new()), doc);
    }
}

// Normalizing an already string-keyed tree changes nothing
proptest! {
    #[test]
    fn test_normalize_is_idempotent(doc in document()) {
        let once = normalize(RawNode::from(doc.clone()));
        let twice = normalize(RawNode::from(once.clone()));
        prop_assert_eq!(&once, &doc);
        prop_assert_eq!(twice, once);
    }
}

// Substitution never changes the shape or the keys of a document
proptest! {
    #[test]
    fn test_substitution_preserves_shape(doc in document(), table in table()) {
        fn same_shape(a: &Document, b: &Document) -> bool {
            match (a, b) {
                (Document::Mapping(x), Document::Mapping(y)) => {
                    x.len() == y.len()
                        && x.iter().zip(y.iter()).all(|((ka, va), (kb, vb))| {
                            ka == kb && same_shape(va, vb)
                        })
                }
                (Document::Sequence(x), Document::Sequence(y)) => {
                    x.len() == y.len() && x.iter().zip(y.iter()).all(|(a, b)| same_shape(a, b))
                }
                (Document::String(_), Document::String(_)) => true,
                (a, b) => a == b,
            }
        }

        let result = substitute(doc.clone(), &table);
        prop_assert!(same_shape(&doc, &result));
    }
}

// A placeholder with no table entry survives substitution verbatim
proptest! {
    #[test]
    fn test_unresolved_placeholder_is_preserved(
        prefix in "[a-z ]{0,8}",
        name in "[A-Z]{1,8}",
        suffix in "[a-z ]{0,8}",
        table in table(),
    ) {
        prop_assume!(!table.contains(&name));
        let text = format!("{prefix}${{{name}}}{suffix}");

        let result = substitute(Document::String(text.clone()), &table);

        prop_assert_eq!(&result, &Document::String(text));
        prop_assert!(unresolved_placeholders(&result).contains(&name));
    }
}

// A resolved placeholder is replaced by its value and nothing else changes
proptest! {
    #[test]
    fn test_resolved_placeholder_is_replaced(
        prefix in "[a-z ]{0,8}",
        name in "[a-z_]{1,8}",
        value in "[a-z0-9.-]{0,12}",
        suffix in "[a-z ]{0,8}",
    ) {
        let table = SubstitutionTable::new().with(name.clone(), value.clone());
        let text = format!("{prefix}${{{name}}}{suffix}");

        let result = substitute(Document::String(text), &table);

        prop_assert_eq!(result, Document::String(format!("{prefix}{value}{suffix}")));
    }
}

// Every occurrence of every known name is replaced in a single pass
proptest! {
    #[test]
    fn test_multiple_placeholders_resolve(
        a in "[a-z0-9]{0,6}",
        b in "[a-z0-9]{0,6}",
        repeats in 1usize..4,
    ) {
        let table = SubstitutionTable::new().with("a", a.clone()).with("b", b.clone());
        let text = "${a}/${b};".repeat(repeats);

        let result = substitute(Document::String(text), &table);

        prop_assert_eq!(result, Document::String(format!("{a}/{b};").repeat(repeats)));
    }
}

// Conversion to generic values keeps every mapping key
proptest! {
    #[test]
    fn test_generic_value_keeps_keys(
        entries in prop::collection::btree_map("[a-z]{1,6}", any::<i64>(), 0..8),
    ) {
        let doc = Document::Mapping(
            entries.iter().map(|(k, v)| (k.clone(), Document::Int(*v))).collect(),
        );

        let value = to_generic_value(doc);

        let expected: BTreeMap<String, GenericValue> = entries
            .into_iter()
            .map(|(k, v)| (k, GenericValue::Int(v)))
            .collect();
        prop_assert_eq!(value, GenericValue::Mapping(expected));
    }
}
