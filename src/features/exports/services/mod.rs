mod csv_export;

pub use csv_export::{content_disposition, export_filename, region_export_filename, reports_to_csv};
