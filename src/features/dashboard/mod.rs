//! Managerial dashboard: KPIs, charts, drill-down and case statistics.
//!
//! All endpoints accept the report filter as query parameters and are
//! mounted behind the admin authentication layer.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::DashboardService;
