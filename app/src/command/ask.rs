use sqlcue_matcher::PhraseMatcher;
use tracing::info;

use super::{QuerySettings, answer, init_common_components};
use crate::{CatalogArgs, MatchArgs};

/// Input parameters for the Ask command strategy.
#[derive(Debug, Clone)]
pub struct AskInput {
    pub question: String,
    pub matching: MatchArgs,
    pub catalog: CatalogArgs,
}

/// Strategy for answering one question and exiting.
///
/// Per-query failures (empty question, bad `--top-k` or `--threshold`) are
/// returned as errors so the process exits non-zero. "No match" is not an
/// error.
#[derive(Debug, Clone, Copy)]
pub struct AskStrategy;

impl super::CommandStrategy for AskStrategy {
    type Input = AskInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let common = init_common_components(&input.catalog).await?;
        let matcher = PhraseMatcher::new(common.catalog, common.config.matcher)?;
        let settings = QuerySettings::resolve(&matcher, &input.matching);

        info!(
            "Matching question (top_k={}, threshold={})",
            settings.top_k, settings.threshold
        );
        println!("{}", answer(&matcher, &input.question, settings)?);
        Ok(())
    }
}
