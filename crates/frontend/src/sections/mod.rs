pub mod abc_classification;
pub mod category_performance;
pub mod critical_alerts;
pub mod executive_summary;
pub mod seasonal_impact;
pub mod store_performance;
