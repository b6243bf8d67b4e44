#![allow(clippy::unwrap_used, clippy::expect_used)]

use dataex_core::{extract, KeySpec};
use serde_json::{json, Value};

fn catalog() -> Value {
    json!({
        "id": "cat-1",
        "title": "Spring catalog",
        "owner": {"name": "Ada", "email": "ada@example.com", "roles": ["admin", "editor"]},
        "items": [
            {"sku": "A1", "price": 10, "tags": [{"name": "new", "color": "red"}]},
            {"sku": "B2", "price": 20, "tags": []},
            {"sku": "C3", "discount": null}
        ],
        "settings": {"theme": {"colors": {"primary": "#fff"}}}
    })
}

// ===== PROPERTIES =====

#[test]
fn test_array_fan_out() {
    let data = json!({"items": [{"a": 1, "b": 2}, {"a": 3, "b": 4}]});
    assert_eq!(
        extract(&data, "items[a]").unwrap(),
        json!({"items": [{"a": 1}, {"a": 3}]})
    );
}

#[test]
fn test_nested_paths_share_ancestors() {
    let data = json!({"x": {"y": {"z": 5}, "w": 6}});
    assert_eq!(
        extract(&data, "x.y.z,x.w").unwrap(),
        json!({"x": {"y": {"z": 5}, "w": 6}})
    );
}

#[test]
fn test_sibling_independence_sharing_prefix() {
    let data = json!({"a": {"b": 1, "c": 2}});
    let out = extract(&data, "a.b,a.c").unwrap();
    assert_eq!(out, json!({"a": {"b": 1, "c": 2}}));
    assert_eq!(out.as_object().unwrap().len(), 1);
}

#[test]
fn test_whitespace_tolerance() {
    let data = catalog();
    assert_eq!(
        extract(&data, "id , title").unwrap(),
        extract(&data, "id,title").unwrap()
    );
    assert_eq!(
        extract(&data, "items [ sku ,\n price ]").unwrap(),
        extract(&data, "items[sku,price]").unwrap()
    );
}

#[test]
fn test_empty_spec_returns_empty_mapping() {
    assert_eq!(extract(&catalog(), "").unwrap(), json!({}));
    assert_eq!(extract(&catalog(), "  \t").unwrap(), json!({}));
}

#[test]
fn test_missing_key_is_omitted() {
    let out = extract(&catalog(), "id,nope").unwrap();
    assert_eq!(out, json!({"id": "cat-1"}));
    assert!(out.get("nope").is_none());
}

#[test]
fn test_leaf_values_equal_source() {
    let data = catalog();
    let out = extract(&data, "owner.roles,settings.theme").unwrap();
    assert_eq!(out["owner"]["roles"], data["owner"]["roles"]);
    assert_eq!(out["settings"]["theme"], data["settings"]["theme"]);
}

#[test]
fn test_idempotent_over_own_output() {
    let data = catalog();
    let first = extract(&data, "id,owner.name,items[sku]").unwrap();
    let top_level: Vec<&str> = first
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    let again = extract(&first, &top_level.join(",")).unwrap();
    assert_eq!(again, first);
}

#[test]
fn test_null_is_a_present_value() {
    let out = extract(&catalog(), "items[discount]").unwrap();
    assert_eq!(out, json!({"items": [{}, {}, {"discount": null}]}));
}

#[test]
fn test_grouped_and_dotted_mix() {
    let out = extract(&catalog(), "title, owner[name, email], items[sku, tags[name]]").unwrap();
    assert_eq!(
        out,
        json!({
            "title": "Spring catalog",
            "owner": {"name": "Ada", "email": "ada@example.com"},
            "items": [
                {"sku": "A1", "tags": [{"name": "new"}]},
                {"sku": "B2", "tags": []},
                {"sku": "C3", "tags": {}}
            ]
        })
    );
}

#[test]
fn test_group_equivalent_to_dotted_paths() {
    let data = catalog();
    assert_eq!(
        extract(&data, "settings[theme.colors.primary]").unwrap(),
        extract(&data, "settings.theme.colors.primary").unwrap()
    );
}

#[test]
fn test_non_object_root() {
    let data = json!([{"a": 1}, {"a": 2}]);
    assert_eq!(extract(&data, "1").unwrap(), json!({"1": {"a": 2}}));
    assert_eq!(extract(&json!(42), "a").unwrap(), json!({}));
}

// ===== OPEN QUESTION CONTRACTS =====

#[test]
fn test_missing_intermediate_leaves_empty_container() {
    let out = extract(&catalog(), "owner.address.city").unwrap();
    assert_eq!(out, json!({"owner": {"address": {}}}));
}

#[test]
fn test_scalar_intermediate_degrades_to_missing() {
    let out = extract(&catalog(), "title.length").unwrap();
    assert_eq!(out, json!({"title": {}}));
}

#[test]
fn test_lenient_unclosed_group_is_closed_at_end() {
    let out = extract(&catalog(), "owner[name,email").unwrap();
    assert_eq!(out, json!({"owner": {"name": "Ada", "email": "ada@example.com"}}));
}

#[test]
fn test_lenient_stray_closing_bracket_ends_spec() {
    let out = extract(&catalog(), "id]title").unwrap();
    assert_eq!(out, json!({"id": "cat-1"}));
}

#[test]
fn test_lenient_empty_segment_is_an_empty_key() {
    let out = extract(&catalog(), "owner..name").unwrap();
    assert_eq!(out, json!({"owner": {"": {}}}));
}

#[test]
fn test_lenient_trailing_separators_add_nothing() {
    let out = extract(&catalog(), "id,,title,").unwrap();
    assert_eq!(out, json!({"id": "cat-1", "title": "Spring catalog"}));
}

#[test]
fn test_key_spec_reuse_across_documents() {
    let spec: KeySpec = "sku".parse().unwrap();
    let data = catalog();
    let skus: Vec<Value> = data["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| spec.apply(item))
        .collect();
    assert_eq!(skus, vec![json!({"sku": "A1"}), json!({"sku": "B2"}), json!({"sku": "C3"})]);
}
