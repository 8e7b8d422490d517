pub mod chart;
pub mod configs;
pub mod publish;
pub mod usage;
pub mod window;
