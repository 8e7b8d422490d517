pub mod rendered_chart;
