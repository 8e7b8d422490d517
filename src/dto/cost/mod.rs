pub mod cost_report;
