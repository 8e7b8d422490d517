use crate::common::*;

use crate::model::{chart::rendered_chart::*, usage::usage_table::*};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Generate a stacked bar chart from the usage table and save it as a PNG file
        # Arguments
        * `usage_table` - Category x date amounts
        * `output_path` - Path where the chart image will be saved
    "]
    async fn generate_stacked_bar_chart(
        &self,
        usage_table: &UsageTable,
        output_path: &Path,
    ) -> anyhow::Result<RenderedChart>;
}
