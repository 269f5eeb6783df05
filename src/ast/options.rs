use std::fmt;

use crate::ast::{Comparator, Expr};

/// Query clause option.
///
/// A query applies zero or more options after naming its collection. The
/// parser only ever produces them in the fixed source order WHERE, ORDER BY,
/// LIMIT, but the vector in [`Query`](crate::ast::Query) is what the
/// translator walks, so the order recorded here is the order applied to the
/// query builder.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOption {
    /// Equality filter on a single field.
    ///
    /// The comparator slot is grammatically open (see
    /// [`Comparator`](crate::ast::Comparator)); anything other than `=` is
    /// rejected at translation time, not here.
    ///
    /// # Example
    /// ```text
    /// WHERE price = 10
    /// ```
    Where {
        field: String,
        comparator: Comparator,
        value: Expr,
    },

    /// Ordering on a single field.
    ///
    /// Absence of the `DESC` marker means ascending.
    ///
    /// # Example
    /// ```text
    /// ORDER BY price DESC
    /// ```
    OrderBy { field: String, descending: bool },

    /// Row limit.
    ///
    /// The expression must evaluate to a non-negative integer; that is
    /// checked at translation time.
    ///
    /// # Example
    /// ```text
    /// LIMIT 5
    /// ```
    Limit { value: Expr },
}

impl fmt::Display for QueryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOption::Where {
                field,
                comparator,
                value,
            } => write!(f, "WHERE {} {} {}", field, comparator, value),
            QueryOption::OrderBy { field, descending } => {
                write!(f, "ORDER BY {}", field)?;
                if *descending {
                    write!(f, " DESC")?;
                }
                Ok(())
            }
            QueryOption::Limit { value } => write!(f, "LIMIT {}", value),
        }
    }
}
