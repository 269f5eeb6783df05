use std::fmt;

/// Comparator kinds accepted by the filter clause grammar.
///
/// The grammar slot is wider than the semantics: the parser accepts every
/// comparator listed here so the language can grow without a parser change,
/// but the translator only accepts [`Comparator::Eq`] today and rejects the
/// rest with a translation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Equal (`=`)
    Eq,
    /// Not equal (`!=`)
    NotEq,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Less than or equal (`<=`)
    LtEq,
    /// Greater than or equal (`>=`)
    GtEq,
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Comparator::Eq => "=",
            Comparator::NotEq => "!=",
            Comparator::Lt => "<",
            Comparator::Gt => ">",
            Comparator::LtEq => "<=",
            Comparator::GtEq => ">=",
        };
        write!(f, "{}", symbol)
    }
}
