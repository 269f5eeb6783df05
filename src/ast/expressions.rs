use std::fmt;

/// Literal expression node.
///
/// Expressions hold raw source text; they are untyped at the AST boundary
/// and only become native values when the evaluator runs. This keeps the
/// parser free of conversion failures: `widgets LIMIT abc` parses fine and
/// fails later, at evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// String literal, raw text including the delimiting quotes.
    ///
    /// Evaluation strips exactly the first and last character.
    ///
    /// # Example
    /// ```text
    /// 'bolt'
    /// ```
    String(String),

    /// Integer literal, raw digit text.
    ///
    /// Evaluation parses the text as a base-10 signed integer. A bare word
    /// in an expression position also lands here, so non-numeric text is
    /// representable and rejected at evaluation time.
    ///
    /// # Example
    /// ```text
    /// 10
    /// ```
    Integer(String),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::String(literal) | Expr::Integer(literal) => write!(f, "{}", literal),
        }
    }
}
