pub mod aggregation_service_impl;
pub mod chart_service_impl;
pub mod cost_query_service_impl;
pub mod publish_service_impl;
