use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

/// Lifecycle status of a report.
///
/// The serialized values are the public wire values and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ReportStatus {
    #[serde(rename = "Recibido")]
    Received,
    #[serde(rename = "En Revisión")]
    UnderReview,
    #[serde(rename = "En Investigación")]
    Investigating,
    #[serde(rename = "Resuelto")]
    Resolved,
    #[serde(rename = "Cerrado")]
    Closed,
    #[serde(rename = "No Procede")]
    Dismissed,
}

impl ReportStatus {
    /// Every status in display order
    pub const ALL: [ReportStatus; 6] = [
        ReportStatus::Received,
        ReportStatus::UnderReview,
        ReportStatus::Investigating,
        ReportStatus::Resolved,
        ReportStatus::Closed,
        ReportStatus::Dismissed,
    ];

    /// The linear path shown on the public progress bar
    pub const PROGRESS: [ReportStatus; 5] = [
        ReportStatus::Received,
        ReportStatus::UnderReview,
        ReportStatus::Investigating,
        ReportStatus::Resolved,
        ReportStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Received => "Recibido",
            ReportStatus::UnderReview => "En Revisión",
            ReportStatus::Investigating => "En Investigación",
            ReportStatus::Resolved => "Resuelto",
            ReportStatus::Closed => "Cerrado",
            ReportStatus::Dismissed => "No Procede",
        }
    }

    /// Counted as closed by the managerial KPIs
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            ReportStatus::Resolved | ReportStatus::Closed | ReportStatus::Dismissed
        )
    }

    /// No further status changes are expected once here
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReportStatus::Closed | ReportStatus::Dismissed)
    }

    /// Zero-based position on the progress bar, `None` for the rejection terminal
    pub fn progress_step(&self) -> Option<usize> {
        Self::PROGRESS.iter().position(|s| s == self)
    }

    /// Text shown to the submitter when tracking a report
    pub fn public_description(&self) -> &'static str {
        match self {
            ReportStatus::Received => "Hemos recibido su reporte de forma segura. Está pendiente de asignación a un revisor.",
            ReportStatus::UnderReview => "Un revisor ha sido asignado y está evaluando la información proporcionada.",
            ReportStatus::Investigating => "El reporte ha sido validado y se ha iniciado un proceso de investigación formal.",
            ReportStatus::Resolved => "Se han tomado acciones correctivas basadas en la investigación. El caso está en proceso de cierre.",
            ReportStatus::Closed => "El caso ha sido cerrado. Agradecemos su contribución a un entorno laboral más justo.",
            ReportStatus::Dismissed => "Tras la revisión, no se encontraron elementos suficientes para iniciar una investigación. El caso ha sido cerrado.",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("Unknown report status '{}'", trimmed))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Report is {from} and cannot be reopened as {to}")]
    ReopenNotAllowed {
        from: ReportStatus,
        to: ReportStatus,
    },
}

/// Rules consulted before a status change is written.
///
/// Any status may move to any other status. The only optional rule is
/// whether a terminal report (`Cerrado`, `No Procede`) may be reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionPolicy {
    pub allow_reopen: bool,
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        Self { allow_reopen: true }
    }
}

impl TransitionPolicy {
    pub fn check(&self, from: ReportStatus, to: ReportStatus) -> Result<(), TransitionError> {
        if from == to || self.allow_reopen || !from.is_terminal() {
            return Ok(());
        }
        Err(TransitionError::ReopenNotAllowed { from, to })
    }
}
