pub mod app;
pub mod org_chart;
