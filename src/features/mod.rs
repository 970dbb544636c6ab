pub mod classifier;
pub mod dashboard;
pub mod exports;
pub mod regions;
pub mod reports;
