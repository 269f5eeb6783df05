//! CLI support for docq
//!
//! Provides programmatic access to docq CLI functionality for embedding in
//! other tools.

mod query;

pub use query::{execute_query, QueryOptions, QueryOutcome};

use std::io;

use crate::{parser::ParseError, store::StoreError, translator::TranslationError};

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Lexer or parser error
    Parse(ParseError),
    /// Translation error
    Translation(TranslationError),
    /// Store error
    Store(StoreError),
    /// Output encoding error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No query provided
    NoQuery,
    /// No project store specified
    NoProject,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "Parse error: {}", e),
            CliError::Translation(e) => write!(f, "Translation error: {}", e),
            CliError::Store(e) => write!(f, "Store error: {}", e),
            CliError::Json(e) => write!(f, "Output error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoQuery => write!(f, "No query provided. Pass one as an argument or pipe it to stdin."),
            CliError::NoProject => {
                write!(f, "No project specified. Use --project or set DOCQ_PROJECT.")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(e) => Some(e),
            CliError::Translation(e) => Some(e),
            CliError::Store(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<TranslationError> for CliError {
    fn from(e: TranslationError) -> Self {
        CliError::Translation(e)
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        CliError::Store(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
