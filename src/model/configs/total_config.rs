use crate::common::*;

use crate::model::configs::{
    aggregation_config::*, chart_config::*, cloud_config::*, publish_config::*,
    schedule_config::*,
};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    #[serde(default)]
    pub aws: CloudConfig,
    pub publish: PublishConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
}

#[doc = "AWS client 설정 정보"]
pub fn get_cloud_config_info() -> &'static CloudConfig {
    &TOTAL_CONFIG.aws
}

#[doc = "S3 업로드 대상 정보"]
pub fn get_publish_config_info() -> &'static PublishConfig {
    &TOTAL_CONFIG.publish
}

#[doc = "차트 캔버스 정보"]
pub fn get_chart_config_info() -> &'static ChartConfig {
    &TOTAL_CONFIG.chart
}

#[doc = "스케줄 실행 정보"]
pub fn get_schedule_config_info() -> &'static ScheduleConfig {
    &TOTAL_CONFIG.schedule
}

#[doc = "비용 집계 규칙 정보"]
pub fn get_aggregation_config_info() -> &'static AggregationConfig {
    &TOTAL_CONFIG.aggregation
}

impl TotalConfig {
    fn new() -> Self {
        match read_toml_from_file::<TotalConfig>(&SERVER_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                let err_msg = "Failed to convert the data from SERVER_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}
