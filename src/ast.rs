//! # docq Query Language - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for the docq query
//! language, a deliberately small language for expressing document-store
//! lookups as a single line of text.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Literal expression nodes (string and integer)
//! - **[operators]** - Comparator kinds used in filter clauses
//! - **[options]** - Query clause options (WHERE, ORDER BY, LIMIT)
//! - **[query]** - Complete query structure
//!
//! ## Quick Start
//!
//! ```text
//! widgets WHERE price = 10 ORDER BY price DESC LIMIT 5
//! ```
//!
//! This query targets the `widgets` collection, keeps documents whose
//! `price` equals 10, sorts them by `price` descending, and returns at most
//! five of them.
//!
//! ## Core Concepts
//!
//! ### Query Shape
//!
//! Every query names a collection and then applies up to three optional
//! clauses, each independently optional, in a fixed relative order:
//!
//! ```text
//! <collection> [WHERE <field> = <literal>] [ORDER BY <field> [DESC]] [LIMIT <integer>]
//! ```
//!
//! ### Clause Order Is Preserved
//!
//! [`Query::options`](query::Query) records clauses in exactly the order
//! they appeared in source text, and the translator applies them to the
//! query builder in that same order. This matters for result determinism
//! against a real store's query planner.
//!
//! ### Literals Stay Raw
//!
//! Literal nodes hold the raw source text: a string literal keeps its
//! delimiting quotes, an integer literal keeps its digit text. Conversion
//! to native values happens in the evaluator, not the parser.
//!
//! ### Canonical Re-serialization
//!
//! Every AST type implements [`std::fmt::Display`], producing canonical
//! query text that re-parses to an equal AST:
//!
//! ```
//! use docq::{Lexer, Parser};
//!
//! let lexer = Lexer::new("widgets WHERE price = 10 LIMIT 5");
//! let query = Parser::new(lexer).unwrap().parse_query().unwrap();
//! assert_eq!(query.to_string(), "widgets WHERE price = 10 LIMIT 5");
//! ```
pub mod tokens;
pub mod expressions;
pub mod operators;
pub mod options;
pub mod query;

pub use tokens::Token;
pub use expressions::Expr;
pub use operators::Comparator;
pub use options::QueryOption;
pub use query::Query;
