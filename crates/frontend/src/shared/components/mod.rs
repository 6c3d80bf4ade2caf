pub mod kpi_card;
pub mod section;
