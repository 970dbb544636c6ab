mod case_action;
mod report;
mod severity;
mod status;

pub use case_action::{ActionStatus, CaseAction};
pub use report::{Analysis, AnalysisSource, InternalNote, NewReport, Report};
pub use severity::{Priority, Severity};
pub use status::{ReportStatus, TransitionPolicy};
