pub mod cost_category;
pub mod duplicate_rule;
pub mod pipeline_error;
