pub use aws_config::{BehaviorVersion, Region, SdkConfig};
pub use aws_sdk_costexplorer::{
    Client as CostExplorerClient,
    error::DisplayErrorContext as CeErrorContext,
    operation::get_cost_and_usage::GetCostAndUsageOutput,
    types::{DateInterval, Granularity, GroupDefinition, GroupDefinitionType},
};
pub use aws_sdk_s3::{
    Client as S3Client, error::DisplayErrorContext as S3ErrorContext, primitives::ByteStream,
    types::ObjectCannedAcl,
};
pub use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
pub use cron::Schedule;
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use once_cell::sync::Lazy as once_lazy;
