//! Local JSON-backed document store.
//!
//! A "project" is a single JSON file mapping collection names to arrays of
//! documents (JSON objects):
//!
//! ```json
//! {
//!   "widgets": [
//!     {"name": "bolt", "price": 10},
//!     {"name": "nut", "price": 5}
//!   ]
//! }
//! ```
//!
//! [`Store::collection`] hands out a [`CollectionQuery`], the concrete
//! implementation of the [`QueryBuilder`] capability: filter, order, and
//! limit apply immediately and in call order, so the translated clause
//! order is exactly the execution order.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use crate::ast::Comparator;
use crate::translator::{Direction, QueryBuilder};
use crate::value::Value;

/// A stored document: a field-to-value mapping.
pub type Document = Map<String, JsonValue>;

/// Errors that can occur while opening or querying a store.
#[derive(Debug)]
pub enum StoreError {
    /// Project file could not be read
    Io(std::io::Error),

    /// Project file is not valid JSON
    Json(serde_json::Error),

    /// Project root is not an object of collections
    NotAnObject,

    /// A collection is not an array of documents
    MalformedCollection(String),

    /// Query targeted a collection the project does not contain
    UnknownCollection(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Json(e) => write!(f, "Invalid project JSON: {}", e),
            StoreError::NotAnObject => {
                write!(f, "Invalid project: root must be an object of collections")
            }
            StoreError::MalformedCollection(name) => {
                write!(
                    f,
                    "Invalid collection '{}': must be an array of documents",
                    name
                )
            }
            StoreError::UnknownCollection(name) => write!(f, "Invalid collection: {}", name),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

/// An opened project: collections of documents, held in memory.
pub struct Store {
    collections: HashMap<String, Vec<Document>>,
}

impl Store {
    /// Opens a project file and validates its shape.
    pub fn open(path: &Path) -> Result<Store, StoreError> {
        let text = fs::read_to_string(path)?;
        let root: JsonValue = serde_json::from_str(&text)?;
        let store = Store::from_json(root)?;
        tracing::debug!(
            path = %path.display(),
            collections = store.collections.len(),
            "opened project store"
        );
        Ok(store)
    }

    /// Builds a store from an already-parsed project value.
    pub fn from_json(root: JsonValue) -> Result<Store, StoreError> {
        let JsonValue::Object(entries) = root else {
            return Err(StoreError::NotAnObject);
        };

        let mut collections = HashMap::new();
        for (name, value) in entries {
            let JsonValue::Array(items) = value else {
                return Err(StoreError::MalformedCollection(name));
            };
            let mut docs = Vec::with_capacity(items.len());
            for item in items {
                let JsonValue::Object(doc) = item else {
                    return Err(StoreError::MalformedCollection(name));
                };
                docs.push(doc);
            }
            collections.insert(name, docs);
        }

        Ok(Store { collections })
    }

    /// Starts a query over the named collection.
    pub fn collection(&self, name: &str) -> Result<CollectionQuery, StoreError> {
        let docs = self
            .collections
            .get(name)
            .ok_or_else(|| StoreError::UnknownCollection(name.to_string()))?;
        Ok(CollectionQuery { docs: docs.clone() })
    }
}

/// A query in progress over one collection's documents.
///
/// Each builder call transforms the held document list immediately; the
/// sequence of calls is therefore the execution plan.
pub struct CollectionQuery {
    docs: Vec<Document>,
}

impl CollectionQuery {
    /// Consumes the query, yielding matched documents in result order.
    ///
    /// The sequence is finite and not restartable.
    pub fn documents(self) -> impl Iterator<Item = Document> {
        self.docs.into_iter()
    }
}

impl QueryBuilder for CollectionQuery {
    fn filter(mut self, field: &str, comparator: Comparator, value: Value) -> Self {
        self.docs
            .retain(|doc| doc.get(field).is_some_and(|v| compare(v, &value, comparator)));
        self
    }

    fn order_by(mut self, field: &str, direction: Direction) -> Self {
        // sort_by is stable: documents that compare equal keep store order.
        self.docs.sort_by(|a, b| {
            let ordering = cmp_fields(a.get(field), b.get(field));
            match direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        });
        self
    }

    fn limit(mut self, count: usize) -> Self {
        self.docs.truncate(count);
        self
    }
}

/// True when `doc_value` relates to `scalar` under `comparator`.
///
/// Comparisons are only defined between same-type values; a cross-type pair
/// never matches, for any comparator. The store is total over `Comparator`
/// even though the translator only emits `Eq` today.
fn compare(doc_value: &JsonValue, scalar: &Value, comparator: Comparator) -> bool {
    let Some(ordering) = cmp_scalar(doc_value, scalar) else {
        return false;
    };
    match comparator {
        Comparator::Eq => ordering == Ordering::Equal,
        Comparator::NotEq => ordering != Ordering::Equal,
        Comparator::Lt => ordering == Ordering::Less,
        Comparator::Gt => ordering == Ordering::Greater,
        Comparator::LtEq => ordering != Ordering::Greater,
        Comparator::GtEq => ordering != Ordering::Less,
    }
}

fn cmp_scalar(doc_value: &JsonValue, scalar: &Value) -> Option<Ordering> {
    match (doc_value, scalar) {
        (JsonValue::Null, Value::Null) => Some(Ordering::Equal),
        (JsonValue::Bool(b), Value::Boolean(v)) => Some(b.cmp(v)),
        (JsonValue::Number(n), Value::Integer(i)) => match n.as_i64() {
            Some(x) => Some(x.cmp(i)),
            None => n.as_f64()?.partial_cmp(&(*i as f64)),
        },
        (JsonValue::Number(n), Value::Float(v)) => n.as_f64()?.partial_cmp(v),
        (JsonValue::String(s), Value::String(v)) => Some(s.as_str().cmp(v.as_str())),
        _ => None,
    }
}

/// Ordering between two document field values for `ORDER BY`.
///
/// A missing field sorts as null. Cross-type order is
/// null < boolean < number < string < array < object; arrays and objects
/// compare equal among themselves, so the stable sort keeps their store
/// order.
fn cmp_fields(a: Option<&JsonValue>, b: Option<&JsonValue>) -> Ordering {
    const NULL: JsonValue = JsonValue::Null;
    let a = a.unwrap_or(&NULL);
    let b = b.unwrap_or(&NULL);
    match (a, b) {
        (JsonValue::Bool(x), JsonValue::Bool(y)) => x.cmp(y),
        (JsonValue::Number(x), JsonValue::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (JsonValue::String(x), JsonValue::String(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: &JsonValue) -> u8 {
    match value {
        JsonValue::Null => 0,
        JsonValue::Bool(_) => 1,
        JsonValue::Number(_) => 2,
        JsonValue::String(_) => 3,
        JsonValue::Array(_) => 4,
        JsonValue::Object(_) => 5,
    }
}
