pub mod case_handler;
pub mod report_handler;

pub use case_handler::*;
pub use report_handler::*;
