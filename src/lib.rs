pub mod ast;
pub mod cli;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod store;
pub mod translator;
pub mod value;

pub use ast::{Comparator, Expr, Query, QueryOption, Token};
pub use evaluator::{eval_expr, EvalError};
pub use lexer::{LexError, Lexer, Position};
pub use parser::{ParseError, Parser};
pub use store::{CollectionQuery, Document, Store, StoreError};
pub use translator::{translate, Direction, QueryBuilder, TranslationError};
pub use value::Value;
