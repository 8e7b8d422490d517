use crate::common::*;

use crate::dto::cost::cost_report::*;
use crate::enums::pipeline_error::*;
use crate::model::window::date_window::*;
use crate::traits::{
    repository_traits::cost_explorer_repository::*, service_traits::cost_query_service::*,
};

#[derive(Debug, new)]
pub struct CostQueryServiceImpl<R: CostExplorerRepository> {
    ce_repo: Arc<R>,
}

#[async_trait]
impl<R: CostExplorerRepository> CostQueryService for CostQueryServiceImpl<R> {
    #[doc = r#"
        조회 기간에 해당하는 서비스별 일별 비용을 가져온다.

        페이지네이션은 하지 않는다. 응답에 `NextPageToken` 이 있으면 경고만 남기고
        첫 페이지만 사용한다.
    "#]
    async fn get_cost_and_usage(&self, window: &DateWindow) -> anyhow::Result<CostReport> {
        let start: String = window.start_str();
        let end: String = window.end_str();

        info!("Querying daily AmortizedCost by SERVICE: {} ~ {}", start, end);

        let report: CostReport = self
            .ce_repo
            .get_cost_and_usage(&start, &end)
            .await
            .map_err(|e| {
                PipelineError::Query(format!(
                    "[CostQueryServiceImpl->get_cost_and_usage] {} ~ {}: {:?}",
                    start, end, e
                ))
            })?;

        if let Some(token) = report.next_page_token() {
            warn!(
                "[CostQueryServiceImpl->get_cost_and_usage] Response is paginated (NextPageToken={}); only the first page is used",
                token
            );
        }

        info!(
            "Received {} daily cost buckets",
            report.results_by_time().len()
        );

        Ok(report)
    }
}
