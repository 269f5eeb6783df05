use std::fmt;

/// A native scalar value used throughout the docq query language.
///
/// Evaluating a literal expression produces one of these, and the store
/// compares them against document fields when filtering. The evaluator only
/// ever produces [`Value::Integer`] and [`Value::String`]; the wider set
/// exists so the query-builder capability can carry any scalar a document
/// field might hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null
    Null,

    /// Boolean (true/false)
    Boolean(bool),

    /// Signed integer
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// UTF-8 string
    String(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}
