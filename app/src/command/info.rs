use sqlcue_config::Config;

use super::init_common_components;
use crate::CatalogArgs;

/// Strategy for displaying configuration information.
///
/// This strategy outputs:
/// - Config file location and whether it exists
/// - Catalog source, size and fingerprint
/// - Matcher settings
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = CatalogArgs;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config_path = Config::config_path()?;
        let common = init_common_components(&input).await?;
        let matcher = &common.config.matcher;

        println!("=== sqlcue Configuration ===\n");

        println!("Config:");
        println!("  Path: {}", config_path.display());
        println!(
            "  Status: {}",
            if config_path.exists() {
                "Loaded"
            } else {
                "Not found (using defaults)"
            }
        );
        println!();

        println!("Catalog:");
        println!("  Source: {}", common.origin);
        println!("  Patterns: {}", common.catalog.len());
        println!("  Max Records: {}", common.config.limits.max_records);
        println!("  Fingerprint: {}", common.catalog.fingerprint());
        println!();

        println!("Matcher:");
        println!("  Top K: {}", matcher.top_k);
        println!("  Threshold: {}", matcher.threshold);
        println!("  Bigram Weight: {}", matcher.bigram_weight);
        println!("  Fold Plurals: {}", matcher.fold_plurals);
        println!("  Max Question Chars: {}", matcher.max_question_chars);
        println!("  Stopwords: {}", matcher.stopwords.len());

        Ok(())
    }
}
