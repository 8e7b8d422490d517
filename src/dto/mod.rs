pub mod chart;
pub mod cost;
