//! rentalctl CLI - read-only queries over the video-rental database
//!
//! Each subcommand runs one catalog query and prints the result as a table
//! or JSON. Exit codes: 0 success (including empty results), 2 rejected
//! input, 1 anything else (connection, SQL, config).

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use rentalctl_catalog::{create_lazy_pool, Catalog, CatalogError};
use tracing::debug;

mod commands;
mod config;
mod render;
mod tracing_setup;

use commands::QueryCommand;
use config::{ConfigArgs, RentalConfig};
use render::OutputFormat;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "rentalctl",
    author,
    version,
    about = "Query the video-rental database: films, categories, customers",
    long_about = "Run parameterized, read-only queries against the dvdrental PostgreSQL \
                  schema and print the results as a table or JSON."
)]
struct Cli {
    /// PostgreSQL connection URL (overrides DATABASE_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    database_url: Option<String>,

    /// Config file path (default: ~/.rentalctl/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format (default: from config, else table)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    Query(QueryCommand),
    /// Show resolved configuration
    Config(ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = tracing_setup::init(&TracingConfig { debug: cli.debug }) {
        eprintln!("Warning: failed to initialize logging: {}", err);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code_for(&err))
        }
    }
}

/// Rejected input exits with 2, like clap's own usage errors.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CatalogError>() {
        Some(catalog_err) if catalog_err.is_validation() => 2,
        _ => 1,
    }
}

async fn run(cli: Cli) -> Result<()> {
    config::load_dotenv();

    match cli.command {
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "rentalctl", &mut io::stdout());
            Ok(())
        }
        Commands::Config(args) => {
            config::run_config(args, cli.database_url.as_deref(), cli.config.as_deref())
        }
        Commands::Query(query) => {
            let settings = RentalConfig::load(cli.config.as_deref())?;
            let (url, source) = settings.require_database_url(
                cli.database_url.as_deref(),
                std::env::var("DATABASE_URL").ok(),
            )?;
            debug!(source = %source, url = %config::mask_password(&url), "database url resolved");

            let pool = create_lazy_pool(&url, settings.database.max_connections)
                .with_context(|| format!("Invalid database URL (from {})", source))?;
            let catalog = Catalog::new(&pool);
            let format = cli.format.unwrap_or(settings.output.format);

            let result = commands::run_query(query, &catalog, format, &mut io::stdout().lock()).await;
            pool.close().await;
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentalctl_catalog::ValidationError;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn validation_errors_exit_with_two() {
        let err = anyhow::Error::new(CatalogError::from(ValidationError::Empty { field: "words" }))
            .context("titles-matching failed");
        assert_eq!(exit_code_for(&err), 2);

        let err = anyhow::anyhow!("connection refused");
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn parses_category_selector() {
        let cli = Cli::try_parse_from(["rentalctl", "films-in-category", "Action", "-i"]).unwrap();
        match cli.command {
            Commands::Query(QueryCommand::FilmsInCategory(args)) => {
                assert_eq!(args.category, rentalctl_catalog::CategorySelector::name("Action"));
                assert!(args.ignore_case);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_integer_category_id() {
        let err = Cli::try_parse_from(["rentalctl", "count-in-category", "abc"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn count_by_length_defaults() {
        let cli = Cli::try_parse_from(["rentalctl", "count-by-length"]).unwrap();
        match cli.command {
            Commands::Query(QueryCommand::CountByLength { min, max }) => {
                assert_eq!(min, 0.0);
                assert_eq!(max, 1_000_000.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
