#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;
mod render;

use clap::{Args, Parser, Subcommand};
use command::{
    AskInput, AskStrategy, CommandStrategy, InfoStrategy, InitStrategy, ListStrategy,
    ReplInput, ReplStrategy, ShowInput, ShowStrategy, VersionStrategy,
};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "sqlcue")]
#[command(about = "Suggest the SQL pattern behind a plain-English question", long_about = None)]
struct Cli {
    /// Log scoring details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where to read the catalog from.
#[derive(Debug, Clone, Default, Args)]
pub struct CatalogArgs {
    /// JSON catalog file (overrides config; defaults to the built-in catalog)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

/// Matching and output options shared by `ask` and `repl`.
#[derive(Debug, Clone, Default, Args)]
pub struct MatchArgs {
    /// Number of patterns to show
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Minimum score (0-1) a pattern needs to be shown
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the matched trigger phrase and shared words
    #[arg(long)]
    pub explain: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a single question
    Ask {
        /// The question, e.g. "top 3 salaries per department"
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        #[command(flatten)]
        matching: MatchArgs,

        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Answer questions interactively
    Repl {
        #[command(flatten)]
        matching: MatchArgs,

        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// List every pattern in the catalog
    List {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Show one pattern by id or slug
    Show {
        /// Slug (e.g. "top-n-per-group") or catalog position
        key: String,

        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration and catalog details
    Info {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let result = match cli.command {
        Commands::Ask {
            question,
            matching,
            catalog,
        } => {
            AskStrategy
                .execute(AskInput {
                    question: question.join(" "),
                    matching,
                    catalog,
                })
                .await
        }
        Commands::Repl { matching, catalog } => {
            ReplStrategy.execute(ReplInput { matching, catalog }).await
        }
        Commands::List { catalog } => ListStrategy.execute(catalog).await,
        Commands::Show { key, catalog } => ShowStrategy.execute(ShowInput { key, catalog }).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info { catalog } => InfoStrategy.execute(catalog).await,
        Commands::Version => VersionStrategy.execute(()).await,
    };

    if let Err(err) = result {
        if let Some(code) = fatal_exit_code(&err) {
            error!("Cannot run without a valid catalog: {err:#}");
            eprintln!("Fatal: {err:#}");
            std::process::exit(code);
        }
        return Err(err);
    }
    Ok(())
}

/// Exit code for errors that make the catalog unusable.
fn fatal_exit_code(err: &anyhow::Error) -> Option<i32> {
    err.downcast_ref::<sqlcue_core::Error>()
        .is_some_and(sqlcue_core::Error::is_fatal)
        .then_some(FATAL_EXIT_CODE)
}

const FATAL_EXIT_CODE: i32 = 2;
