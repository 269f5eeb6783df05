// tests/store_tests.rs

use std::io::Write;

use docq::ast::Comparator;
use docq::store::{Store, StoreError};
use docq::translator::{Direction, QueryBuilder};
use docq::Value;
use serde_json::json;

fn fixture() -> Store {
    Store::from_json(json!({
        "widgets": [
            {"name": "bolt", "price": 10},
            {"name": "nut", "price": 5},
            {"name": "washer", "price": 10.0},
            {"name": "screw", "price": 7, "discontinued": true},
            {"name": "nail"}
        ],
        "empty": []
    }))
    .unwrap()
}

fn names(query: docq::CollectionQuery) -> Vec<String> {
    query
        .documents()
        .map(|doc| doc["name"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Opening Projects
// ============================================================================

#[test]
fn test_open_reads_project_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"widgets": [{{"name": "bolt"}}]}}"#).unwrap();

    let store = Store::open(file.path()).unwrap();
    let docs: Vec<_> = store.collection("widgets").unwrap().documents().collect();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["name"], json!("bolt"));
}

#[test]
fn test_open_missing_file() {
    let result = Store::open(std::path::Path::new("/no/such/project.json"));
    assert!(matches!(result, Err(StoreError::Io(_))));
}

#[test]
fn test_open_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    assert!(matches!(Store::open(file.path()), Err(StoreError::Json(_))));
}

#[test]
fn test_project_root_must_be_object() {
    let result = Store::from_json(json!([1, 2, 3]));
    assert!(matches!(result, Err(StoreError::NotAnObject)));
}

#[test]
fn test_collection_must_be_array_of_objects() {
    let result = Store::from_json(json!({"widgets": 42}));
    assert!(matches!(result, Err(StoreError::MalformedCollection(name)) if name == "widgets"));

    let result = Store::from_json(json!({"widgets": [1, 2]}));
    assert!(matches!(result, Err(StoreError::MalformedCollection(name)) if name == "widgets"));
}

#[test]
fn test_unknown_collection() {
    let store = fixture();
    let result = store.collection("gadgets");
    assert!(matches!(result, Err(StoreError::UnknownCollection(name)) if name == "gadgets"));
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_filter_by_integer_equality() {
    let store = fixture();
    let query = store
        .collection("widgets")
        .unwrap()
        .filter("price", Comparator::Eq, Value::Integer(10));
    // 10 and 10.0 compare numerically equal.
    assert_eq!(names(query), vec!["bolt", "washer"]);
}

#[test]
fn test_filter_by_string_equality() {
    let store = fixture();
    let query = store
        .collection("widgets")
        .unwrap()
        .filter("name", Comparator::Eq, Value::String("nut".to_string()));
    assert_eq!(names(query), vec!["nut"]);
}

#[test]
fn test_filter_missing_field_never_matches() {
    let store = fixture();
    let query = store
        .collection("widgets")
        .unwrap()
        .filter("discontinued", Comparator::Eq, Value::Boolean(true));
    assert_eq!(names(query), vec!["screw"]);

    let store = fixture();
    let query = store
        .collection("widgets")
        .unwrap()
        .filter("discontinued", Comparator::NotEq, Value::Boolean(true));
    assert_eq!(names(query), Vec::<String>::new());
}

#[test]
fn test_filter_cross_type_never_matches() {
    let store = fixture();
    let query = store
        .collection("widgets")
        .unwrap()
        .filter("price", Comparator::Eq, Value::String("10".to_string()));
    assert_eq!(names(query), Vec::<String>::new());
}

#[test]
fn test_filter_is_total_over_comparators() {
    // The translator only emits Eq today, but the builder itself supports
    // the whole comparator set.
    let store = fixture();
    let query = store
        .collection("widgets")
        .unwrap()
        .filter("price", Comparator::Lt, Value::Integer(10));
    assert_eq!(names(query), vec!["nut", "screw"]);
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_order_by_ascending() {
    let store = fixture();
    let query = store
        .collection("widgets")
        .unwrap()
        .order_by("price", Direction::Ascending);
    // Missing field sorts as null, before every number; equal keys keep
    // store order (bolt before washer).
    assert_eq!(names(query), vec!["nail", "nut", "screw", "bolt", "washer"]);
}

#[test]
fn test_order_by_descending() {
    let store = fixture();
    let query = store
        .collection("widgets")
        .unwrap()
        .order_by("price", Direction::Descending);
    assert_eq!(names(query), vec!["bolt", "washer", "screw", "nut", "nail"]);
}

#[test]
fn test_order_by_string_field() {
    let store = fixture();
    let query = store
        .collection("widgets")
        .unwrap()
        .order_by("name", Direction::Ascending);
    assert_eq!(names(query), vec!["bolt", "nail", "nut", "screw", "washer"]);
}

// ============================================================================
// Limiting
// ============================================================================

#[test]
fn test_limit_truncates() {
    let store = fixture();
    let query = store.collection("widgets").unwrap().limit(2);
    assert_eq!(names(query), vec!["bolt", "nut"]);
}

#[test]
fn test_limit_beyond_length_keeps_everything() {
    let store = fixture();
    let query = store.collection("widgets").unwrap().limit(100);
    assert_eq!(names(query).len(), 5);
}

#[test]
fn test_limit_zero_returns_nothing() {
    let store = fixture();
    let query = store.collection("widgets").unwrap().limit(0);
    assert_eq!(names(query), Vec::<String>::new());
}

// ============================================================================
// Call Order Is Execution Order
// ============================================================================

#[test]
fn test_chained_operations_apply_in_call_order() {
    let store = fixture();
    let query = store
        .collection("widgets")
        .unwrap()
        .filter("price", Comparator::Eq, Value::Integer(10))
        .order_by("name", Direction::Descending)
        .limit(1);
    assert_eq!(names(query), vec!["washer"]);
}

#[test]
fn test_documents_preserve_store_order_without_operations() {
    let store = fixture();
    let query = store.collection("widgets").unwrap();
    assert_eq!(names(query), vec!["bolt", "nut", "washer", "screw", "nail"]);
}

#[test]
fn test_empty_collection_yields_no_documents() {
    let store = fixture();
    assert_eq!(store.collection("empty").unwrap().documents().count(), 0);
}
