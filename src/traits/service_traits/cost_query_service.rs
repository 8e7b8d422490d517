use crate::common::*;

use crate::dto::cost::cost_report::*;
use crate::model::window::date_window::*;

#[async_trait]
pub trait CostQueryService: Send + Sync {
    async fn get_cost_and_usage(&self, window: &DateWindow) -> anyhow::Result<CostReport>;
}
