use clap::{Parser as ClapParser, Subcommand};
use docq::cli::{self, CliError, QueryOptions, QueryOutcome};
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "docq")]
#[command(about = "docq - query JSON document stores with a one-line query language")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a query against a project store
    Query {
        /// The query, e.g. "widgets WHERE price = 10 LIMIT 5" (reads from stdin if not provided)
        query: Option<String>,

        /// Path to the project store (a JSON file of collections)
        #[arg(long, env = "DOCQ_PROJECT")]
        project: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't execute
        #[arg(long)]
        syntax_only: bool,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Query {
            query,
            project,
            pretty,
            syntax_only,
        } => run_query(query, project, pretty, syntax_only),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_query(
    query: Option<String>,
    project: Option<PathBuf>,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let query = match query {
        Some(q) => q,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Io)?;
            buffer.trim().to_string()
        }
        None => return Err(CliError::NoQuery),
    };

    if query.is_empty() {
        return Err(CliError::NoQuery);
    }

    let options = QueryOptions {
        query,
        project,
        pretty,
        syntax_only,
    };

    match cli::execute_query(&options)? {
        QueryOutcome::SyntaxValid => println!("Syntax is valid"),
        QueryOutcome::Results(json) => println!("{}", json),
    }
    Ok(())
}
