/// Lexical token produced by the lexer.
///
/// Tokens are produced once and consumed once by the parser; literal tokens
/// carry their raw source text untouched, so no conversion happens before
/// evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Bare identifier: a collection or field name.
    ///
    /// Must start with a letter or underscore, followed by letters, digits,
    /// or underscores.
    ///
    /// # Examples
    /// ```text
    /// widgets
    /// unit_price
    /// _internal
    /// ```
    Identifier(String),

    /// String literal, raw text including the delimiting quotes.
    ///
    /// A single pair of matching quotes (`'` or `"`); no escape processing.
    ///
    /// # Examples
    /// ```text
    /// 'bolt'
    /// "item #1"
    /// ```
    String(String),

    /// Integer literal, raw digit text.
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 007
    /// ```
    Integer(String),

    // Keywords
    /// `WHERE` - introduces the filter clause
    Where,

    /// `ORDER` - first word of the ordering clause
    Order,

    /// `BY` - second word of the ordering clause
    By,

    /// `DESC` - descending direction marker
    Desc,

    /// `LIMIT` - introduces the row-limit clause
    Limit,

    // Comparators
    /// Equality (`=`) - the only comparator the translator accepts
    Eq,

    /// Inequality (`!=`)
    NotEq,

    /// Less than (`<`)
    Lt,

    /// Greater than (`>`)
    Gt,

    /// Less than or equal (`<=`)
    LtEq,

    /// Greater than or equal (`>=`)
    GtEq,

    /// End of input
    Eof,
}
