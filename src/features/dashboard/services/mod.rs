pub mod aggregation;
mod dashboard_service;
mod filter;

pub use dashboard_service::DashboardService;
pub use filter::{ReportFilter, ReportFilterQuery};
