//! Property-based tests for extraction
//!
//! Source documents are generated as a flat layer of fields, some of them
//! nested one level, with keys drawn from a small alphabet so that requested
//! keys hit and miss the source at comparable rates.

use dataex_core::{extract, ExtractOptions, KeySpec};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn key() -> impl Strategy<Value = String> {
    "[a-f]{1,2}"
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

fn leaf_map() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(key(), scalar(), 0..4)
        .prop_map(|m| Value::Object(m.into_iter().collect::<Map<String, Value>>()))
}

fn document() -> impl Strategy<Value = Value> {
    let field = prop_oneof![
        scalar(),
        leaf_map(),
        prop::collection::vec(leaf_map(), 0..3).prop_map(Value::Array),
    ];
    prop::collection::btree_map(key(), field, 0..6)
        .prop_map(|m| Value::Object(m.into_iter().collect::<Map<String, Value>>()))
}

proptest! {
    #[test]
    fn prop_top_level_keys_present_iff_in_source(doc in document(), keys in prop::collection::vec(key(), 0..6)) {
        let out = extract(&doc, &keys.join(",")).unwrap();
        let out = out.as_object().unwrap();
        for k in &keys {
            match doc.get(k) {
                Some(value) => prop_assert_eq!(out.get(k), Some(value)),
                None => prop_assert!(out.get(k).is_none()),
            }
        }
        prop_assert!(out.keys().all(|k| keys.contains(k)));
    }

    #[test]
    fn prop_extract_of_all_top_level_keys_is_identity(doc in document()) {
        let keys: Vec<String> = doc.as_object().unwrap().keys().cloned().collect();
        let out = extract(&doc, &keys.join(",")).unwrap();
        prop_assert_eq!(&out, &doc);

        let again = extract(&out, &keys.join(",")).unwrap();
        prop_assert_eq!(again, out);
    }

    #[test]
    fn prop_whitespace_is_insignificant(doc in document(), keys in prop::collection::vec(key(), 1..5)) {
        let compact = keys.join(",");
        let spaced = keys.join(" ,\n ");
        prop_assert_eq!(extract(&doc, &compact).unwrap(), extract(&doc, &spaced).unwrap());
    }

    #[test]
    fn prop_group_matches_dotted_paths(doc in document(), parent in key(), children in prop::collection::vec(key(), 1..4)) {
        let grouped = format!("{}[{}]", parent, children.join(","));
        let dotted: Vec<String> = children.iter().map(|c| format!("{}.{}", parent, c)).collect();
        prop_assert_eq!(
            extract(&doc, &grouped).unwrap(),
            extract(&doc, &dotted.join(",")).unwrap()
        );
    }

    #[test]
    fn prop_lenient_parse_never_fails_within_depth(spec in "[a-c,.\\[\\] ]{0,24}") {
        // 24 characters can never nest deeper than the default limit.
        prop_assert!(KeySpec::parse(&spec, &ExtractOptions::default()).is_ok());
    }

    #[test]
    fn prop_display_round_trips(spec in "[a-c]{1,2}(\\.[a-c]{1,2}){0,2}(,[a-c]{1,2}(\\.[a-c]{1,2}){0,2}){0,3}") {
        let parsed: KeySpec = spec.parse().unwrap();
        let reparsed: KeySpec = parsed.to_string().parse().unwrap();
        prop_assert_eq!(parsed, reparsed);
    }
}
