use std::fmt;

use crate::ast::QueryOption;

/// Complete parsed query.
///
/// One query string produces one `Query`; it is immutable once built and
/// consumed once by the translator.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Target collection name; never empty.
    pub collection: String,

    /// Clause options in source order.
    pub options: Vec<QueryOption>,
}

impl fmt::Display for Query {
    /// Canonical query text; re-parsing it yields an equal `Query`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.collection)?;
        for option in &self.options {
            write!(f, " {}", option)?;
        }
        Ok(())
    }
}
