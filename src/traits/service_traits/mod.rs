pub mod aggregation_service;
pub mod chart_service;
pub mod cost_query_service;
pub mod publish_service;
