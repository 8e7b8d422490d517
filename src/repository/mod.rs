pub mod aws_sdk_config;
pub mod cost_explorer_repository_impl;
pub mod s3_repository_impl;
