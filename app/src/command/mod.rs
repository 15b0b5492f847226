//! Static strategy pattern for CLI commands.
//!
//! Each command is its own strategy type with its own input, dispatched
//! statically from `main`.

use crate::{CatalogArgs, MatchArgs};
use anyhow::Context;
use sqlcue_config::Config;
use sqlcue_core::Catalog;
use sqlcue_matcher::PhraseMatcher;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod ask;
mod info;
mod init;
mod list;
mod repl;
mod show;
mod version;

pub use ask::{AskInput, AskStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use list::ListStrategy;
pub use repl::{ReplInput, ReplStrategy};
pub use show::{ShowInput, ShowStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Where the catalog in use came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "built-in"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Components shared by all catalog commands.
pub struct CommonComponents {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub origin: CatalogOrigin,
}

/// Load config and catalog. Any catalog failure is fatal for the command.
pub async fn init_common_components(args: &CatalogArgs) -> anyhow::Result<CommonComponents> {
    let config = Config::load_or_default()?;
    let (catalog, origin) = load_catalog(&config, args).await?;

    info!("Catalog ready: {} patterns ({origin})", catalog.len());

    Ok(CommonComponents {
        config,
        catalog: Arc::new(catalog),
        origin,
    })
}

/// The `--catalog` flag wins over `catalog.path` from config.
pub async fn load_catalog(
    config: &Config,
    args: &CatalogArgs,
) -> anyhow::Result<(Catalog, CatalogOrigin)> {
    let path = args.catalog.clone().or_else(|| config.catalog.path.clone());

    let Some(path) = path else {
        return Ok((Catalog::builtin()?, CatalogOrigin::Builtin));
    };

    info!("Loading catalog from {}", path.display());
    let json = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Cannot read catalog {}", path.display()))?;
    let catalog = Catalog::from_json(&json, config.limits)
        .with_context(|| format!("Cannot use catalog {}", path.display()))?;

    Ok((catalog, CatalogOrigin::File(path)))
}

/// Per-query settings: CLI flags over config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuerySettings {
    pub top_k: usize,
    pub threshold: f64,
    pub json: bool,
    pub explain: bool,
}

impl QuerySettings {
    #[must_use]
    pub fn resolve(matcher: &PhraseMatcher, args: &MatchArgs) -> Self {
        Self {
            top_k: args.top_k.unwrap_or(matcher.config().top_k),
            threshold: args.threshold.unwrap_or(matcher.config().threshold),
            json: args.json,
            explain: args.explain,
        }
    }
}

/// Match one question and render the outcome.
pub fn answer(
    matcher: &PhraseMatcher,
    question: &str,
    settings: QuerySettings,
) -> anyhow::Result<String> {
    let matches = matcher.match_with_threshold(question, settings.top_k, settings.threshold)?;
    if settings.json {
        crate::render::matches_json(&matches)
    } else {
        Ok(crate::render::matches_text(&matches, settings.explain))
    }
}
