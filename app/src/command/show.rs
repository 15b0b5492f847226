use super::init_common_components;
use crate::CatalogArgs;
use crate::render::record_detail;

/// Input parameters for the Show command strategy.
#[derive(Debug, Clone)]
pub struct ShowInput {
    /// Slug or numeric catalog position.
    pub key: String,
    pub catalog: CatalogArgs,
}

/// Strategy for printing one record in full.
#[derive(Debug, Clone, Copy)]
pub struct ShowStrategy;

impl super::CommandStrategy for ShowStrategy {
    type Input = ShowInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let common = init_common_components(&input.catalog).await?;
        let record = common.catalog.find(&input.key)?;
        println!("{}", record_detail(record));
        Ok(())
    }
}
