use crate::common::*;

use crate::dto::cost::cost_report::*;
use crate::model::configs::cloud_config::*;
use crate::traits::repository_traits::cost_explorer_repository::*;
use crate::utils_modules::traits::*;

pub const AMORTIZED_COST_METRIC: &str = "AmortizedCost";
pub const SERVICE_DIMENSION_KEY: &str = "SERVICE";

#[derive(Debug, Clone)]
pub struct CostExplorerRepositoryImpl {
    ce_client: CostExplorerClient,
}

impl CostExplorerRepositoryImpl {
    #[doc = "Cost Explorer 는 단일 리전 엔드포인트를 사용하므로 리전을 따로 지정한다."]
    pub fn new(sdk_config: &SdkConfig, cloud_config: &CloudConfig) -> Self {
        let ce_config: aws_sdk_costexplorer::Config =
            aws_sdk_costexplorer::config::Builder::from(sdk_config)
                .region(Region::new(cloud_config.cost_explorer_region.clone()))
                .build();

        CostExplorerRepositoryImpl {
            ce_client: CostExplorerClient::from_conf(ce_config),
        }
    }
}

#[async_trait]
impl CostExplorerRepository for CostExplorerRepositoryImpl {
    async fn get_cost_and_usage(&self, start: &str, end: &str) -> Result<CostReport, anyhow::Error> {
        let time_period: DateInterval = DateInterval::builder()
            .start(start)
            .end(end)
            .build()
            .map_err(|e| {
                anyhow!(
                    "[CostExplorerRepositoryImpl->get_cost_and_usage] Invalid time period {} ~ {}: {:?}",
                    start,
                    end,
                    e
                )
            })?;

        let group_by: GroupDefinition = GroupDefinition::builder()
            .r#type(GroupDefinitionType::Dimension)
            .key(SERVICE_DIMENSION_KEY)
            .build();

        let output: GetCostAndUsageOutput = self
            .ce_client
            .get_cost_and_usage()
            .time_period(time_period)
            .granularity(Granularity::Daily)
            .metrics(AMORTIZED_COST_METRIC)
            .group_by(group_by)
            .send()
            .await
            .map_err(|e| {
                anyhow!(
                    "[CostExplorerRepositoryImpl->get_cost_and_usage] GetCostAndUsage failed: {}",
                    CeErrorContext(&e)
                )
            })?;

        Ok(CostReport::from_sdk_output(&output))
    }
}
