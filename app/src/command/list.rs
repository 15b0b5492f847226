use super::init_common_components;
use crate::CatalogArgs;
use crate::render::{LIST_HEADER, record_summary_line};

/// Strategy for listing every catalog record, in catalog order.
#[derive(Debug, Clone, Copy)]
pub struct ListStrategy;

impl super::CommandStrategy for ListStrategy {
    type Input = CatalogArgs;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let common = init_common_components(&input).await?;

        println!("{LIST_HEADER}");
        for record in common.catalog.all() {
            println!("{}", record_summary_line(record));
        }
        Ok(())
    }
}
