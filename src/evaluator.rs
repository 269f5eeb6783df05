use std::fmt;

use crate::{ast::Expr, value::Value};

/// Errors that can occur while evaluating a literal expression.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Integer literal text did not parse as a base-10 integer
    InvalidInteger(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InvalidInteger(literal) => {
                write!(f, "Invalid integer literal: {}", literal)
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Resolves a literal expression to its native scalar value.
///
/// String literals lose exactly their first and last character (the
/// delimiting quotes, already validated by the lexer). Integer literals are
/// parsed as base-10 signed integers; the raw text is untyped at the AST
/// boundary, so non-numeric text is handled here rather than assumed away.
///
/// # Examples
///
/// ```
/// use docq::{eval_expr, Expr, Value};
///
/// let value = eval_expr(&Expr::String("'bolt'".to_string())).unwrap();
/// assert_eq!(value, Value::String("bolt".to_string()));
///
/// let value = eval_expr(&Expr::Integer("10".to_string())).unwrap();
/// assert_eq!(value, Value::Integer(10));
///
/// assert!(eval_expr(&Expr::Integer("abc".to_string())).is_err());
/// ```
pub fn eval_expr(expr: &Expr) -> Result<Value, EvalError> {
    match expr {
        Expr::String(literal) => {
            let mut inner = literal.chars();
            inner.next();
            inner.next_back();
            Ok(Value::String(inner.as_str().to_string()))
        }
        Expr::Integer(literal) => literal
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| EvalError::InvalidInteger(literal.clone())),
    }
}
