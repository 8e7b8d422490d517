/*
Author      : Seunghwan Shin
Create date : 2025-07-07
Description : Cost Explorer 의 최근 일주일 서비스별 비용을 누적 막대 차트로 만들어 S3 에 게시한다.

History     : 2025-07-07 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod dto;
mod enums;
mod env_configuration;
mod traits;

mod model;
use model::{configs::total_config::*, publish::publish_target::*};

mod utils_modules;
use utils_modules::logger_utils::*;

mod repository;
use repository::{
    aws_sdk_config::*, cost_explorer_repository_impl::*, s3_repository_impl::*,
};

mod service;
use service::{
    aggregation_service_impl::*, chart_service_impl::*, cost_query_service_impl::*,
    publish_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger_handle: LoggerHandle = set_global_logger();

    info!("Daily cost tracking program start!");

    /* AWS client 생성 */
    let sdk_config: SdkConfig = load_aws_sdk_config(get_cloud_config_info()).await;

    let ce_repo: Arc<CostExplorerRepositoryImpl> = Arc::new(CostExplorerRepositoryImpl::new(
        &sdk_config,
        get_cloud_config_info(),
    ));
    let s3_repo: Arc<S3RepositoryImpl> = Arc::new(S3RepositoryImpl::new(&sdk_config));

    /* 의존 주입 */
    let cost_query_service: CostQueryServiceImpl<CostExplorerRepositoryImpl> =
        CostQueryServiceImpl::new(ce_repo);
    let aggregation_service: AggregationServiceImpl =
        AggregationServiceImpl::new(*get_aggregation_config_info().duplicate_rule());
    let chart_service: ChartServiceImpl = ChartServiceImpl::new(get_chart_config_info().clone());
    let publish_service: PublishServiceImpl<S3RepositoryImpl> = PublishServiceImpl::new(s3_repo);

    let publish_config = get_publish_config_info();

    let main_controller: MainController<
        CostQueryServiceImpl<CostExplorerRepositoryImpl>,
        AggregationServiceImpl,
        ChartServiceImpl,
        PublishServiceImpl<S3RepositoryImpl>,
    > = MainController::new(
        cost_query_service,
        aggregation_service,
        chart_service,
        publish_service,
        PublishTarget::from(publish_config),
        PathBuf::from(publish_config.scratch_path()),
        get_schedule_config_info().clone(),
    );

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
