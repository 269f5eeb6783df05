use std::fmt;

use crate::{
    ast::{Comparator, Query, QueryOption},
    evaluator::{self, EvalError},
    value::Value,
};

/// Ordering direction for [`QueryBuilder::order_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// The abstract, store-agnostic query-builder capability.
///
/// The translator configures a builder by chaining calls in clause order,
/// mirroring the rebinding style of hosted-store client libraries
/// (`q = q.filter(...)`). Implementors accumulate operations; execution is
/// not part of this capability and stays a store concern.
pub trait QueryBuilder: Sized {
    /// Keep only documents whose `field` compares to `value`.
    ///
    /// The translator only ever passes [`Comparator::Eq`] today; the
    /// parameter keeps the capability open for future comparators.
    fn filter(self, field: &str, comparator: Comparator, value: Value) -> Self;

    /// Order results by `field` in the given direction.
    fn order_by(self, field: &str, direction: Direction) -> Self;

    /// Bound the number of results.
    fn limit(self, count: usize) -> Self;
}

/// Errors that can occur while translating a query AST into builder calls.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationError {
    /// A comparator the grammar accepts but the language does not support
    UnsupportedComparator(Comparator),

    /// Limit did not evaluate to a non-negative integer
    InvalidLimit(Value),

    /// A literal failed to evaluate to its native value
    Eval(EvalError),
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::UnsupportedComparator(comparator) => {
                write!(
                    f,
                    "Unsupported comparator '{}' (only '=' is supported)",
                    comparator
                )
            }
            TranslationError::InvalidLimit(value) => {
                write!(f, "Invalid limit value: {}", value)
            }
            TranslationError::Eval(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TranslationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslationError::Eval(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EvalError> for TranslationError {
    fn from(e: EvalError) -> Self {
        TranslationError::Eval(e)
    }
}

/// Applies each query option to the builder, in source order.
///
/// A pure fold with no state of its own: the first failing option aborts
/// translation and the builder is dropped. Clause order is preserved all
/// the way through, so `ORDER BY ... LIMIT ...` reaches the builder as an
/// order call followed by a limit call.
pub fn translate<B: QueryBuilder>(query: &Query, mut builder: B) -> Result<B, TranslationError> {
    tracing::debug!(
        collection = %query.collection,
        options = query.options.len(),
        "translating query"
    );

    for option in &query.options {
        builder = match option {
            QueryOption::Where {
                field,
                comparator,
                value,
            } => {
                if *comparator != Comparator::Eq {
                    return Err(TranslationError::UnsupportedComparator(*comparator));
                }
                let value = evaluator::eval_expr(value)?;
                builder.filter(field, Comparator::Eq, value)
            }
            QueryOption::OrderBy { field, descending } => {
                let direction = if *descending {
                    Direction::Descending
                } else {
                    Direction::Ascending
                };
                builder.order_by(field, direction)
            }
            QueryOption::Limit { value } => {
                let count = match evaluator::eval_expr(value)? {
                    Value::Integer(n) => usize::try_from(n)
                        .map_err(|_| TranslationError::InvalidLimit(Value::Integer(n)))?,
                    other => return Err(TranslationError::InvalidLimit(other)),
                };
                builder.limit(count)
            }
        };
    }

    Ok(builder)
}
