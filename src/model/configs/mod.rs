pub mod aggregation_config;
pub mod chart_config;
pub mod cloud_config;
pub mod publish_config;
pub mod schedule_config;
pub mod total_config;
