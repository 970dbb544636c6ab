//! Whistleblower reports: anonymous submission, public tracking and case
//! management.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/reports` | Submit a report |
//! | GET | `/api/reports/track/{tracking_id}` | Public status |
//! | GET | `/api/admin/reports` | Filtered list |
//! | GET/PUT | `/api/admin/reports/{id}` | Detail / full replace |
//! | PATCH | `/api/admin/reports/{id}/status` | Status change with optional note |
//! | POST | `/api/admin/reports/{id}/notes` | Append note |
//! | POST | `/api/admin/reports/{id}/actions` | Add action |
//! | PATCH | `/api/admin/reports/{id}/actions/{action_id}` | Action status |
//! | PATCH | `/api/admin/reports/{id}/assignment` | Assignee and priority |
//! | POST | `/api/admin/reports/{id}/rating` | Rating |
//! | POST | `/api/admin/reports/{id}/reclassify` | Re-run the classifier |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;

pub use routes::{admin_routes, public_routes};
pub use services::{ReportService, ReportStore, TrackingIdGenerator};
