use crate::common::*;

use crate::dto::cost::cost_report::*;

#[async_trait]
pub trait CostExplorerRepository: Send + Sync {
    #[doc = "Daily AmortizedCost grouped by SERVICE for [start, end). Dates are `YYYY-MM-DD`."]
    async fn get_cost_and_usage(&self, start: &str, end: &str) -> Result<CostReport, anyhow::Error>;
}
