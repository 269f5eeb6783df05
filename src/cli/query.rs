//! Execute docq queries against a project store

use std::path::PathBuf;

use super::CliError;
use crate::{output, store::Store, translator, Lexer, Parser};

/// Options for the query command
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// The docq query to execute
    pub query: String,
    /// Path to the project store (a JSON file of collections)
    pub project: Option<PathBuf>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Only validate syntax, don't execute
    pub syntax_only: bool,
}

/// Result of a query operation
#[derive(Debug)]
pub enum QueryOutcome {
    /// Syntax validation passed
    SyntaxValid,
    /// Query executed successfully; encoded `{"data": [...]}` output
    Results(String),
}

/// Execute a docq query operation
pub fn execute_query(options: &QueryOptions) -> Result<QueryOutcome, CliError> {
    let lexer = Lexer::new(&options.query);
    let mut parser = Parser::new(lexer)?;
    let query = parser.parse_query()?;

    if options.syntax_only {
        return Ok(QueryOutcome::SyntaxValid);
    }

    let project = options.project.as_ref().ok_or(CliError::NoProject)?;
    let store = Store::open(project)?;
    let builder = store.collection(&query.collection)?;
    let configured = translator::translate(&query, builder)?;

    let rows: Vec<_> = configured.documents().collect();
    tracing::debug!(rows = rows.len(), "query executed");

    let encoded = output::encode(&rows, options.pretty)?;
    Ok(QueryOutcome::Results(encoded))
}
