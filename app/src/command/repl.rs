//! Interactive question loop.
//!
//! Unlike `ask`, a rejected question does not end the session: the error is
//! printed and the next line is read.

use sqlcue_matcher::PhraseMatcher;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use super::{QuerySettings, answer, init_common_components};
use crate::{CatalogArgs, MatchArgs};

/// Input parameters for the Repl command strategy.
#[derive(Debug, Clone)]
pub struct ReplInput {
    pub matching: MatchArgs,
    pub catalog: CatalogArgs,
}

#[derive(Debug, Clone, Copy)]
pub struct ReplStrategy;

impl super::CommandStrategy for ReplStrategy {
    type Input = ReplInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let common = init_common_components(&input.catalog).await?;
        let matcher = PhraseMatcher::new(common.catalog, common.config.matcher)?;
        let settings = QuerySettings::resolve(&matcher, &input.matching);

        println!(
            "sqlcue ready with {} patterns. Type 'exit' to quit.\n",
            matcher.catalog().len()
        );

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut answered = 0_usize;

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                println!();
                break;
            };
            let question = line.trim();

            if matches!(question, "exit" | "quit") {
                break;
            }
            // Blank input re-prompts instead of reporting EmptyQuery.
            if question.is_empty() {
                continue;
            }

            match answer(&matcher, question, settings) {
                Ok(rendered) => {
                    answered += 1;
                    println!("\n{rendered}\n");
                }
                Err(e) => {
                    warn!("Rejected question: {e}");
                    eprintln!("Error: {e}");
                }
            }
        }

        info!("Session ended after {answered} question(s)");
        Ok(())
    }
}
