mod report_service;
mod report_store;
mod tracking_id;

pub use report_service::{ReportService, DEFAULT_NOTE_AUTHOR};
pub use report_store::ReportStore;
pub use tracking_id::TrackingIdGenerator;
