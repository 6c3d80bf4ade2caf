pub mod dataset;
pub mod export;
pub mod units;
