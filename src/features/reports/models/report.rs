use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CaseAction, Priority, ReportStatus, Severity};

/// Category label used for reports that have no classifier analysis
pub const UNCATEGORIZED: &str = "Sin Categoría";

/// Where an analysis came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    /// Produced by the remote classification model
    #[default]
    Model,
    /// Produced by the offline fallback; eligible for reclassification
    Offline,
}

/// Classifier output stored on a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub category: String,
    pub severity: Severity,
    pub summary: String,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub involved_parties: Vec<String>,
    #[serde(default)]
    pub key_dates: Vec<String>,
    #[serde(default)]
    pub source: AnalysisSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InternalNote {
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub author: String,
}

/// A whistleblower report, owned by the report store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub status: ReportStatus,
    pub analysis: Option<Analysis>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub internal_notes: Vec<InternalNote>,
    #[serde(default)]
    pub actions: Vec<CaseAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

impl Report {
    /// Category used for grouping and filtering
    pub fn category_label(&self) -> &str {
        self.analysis
            .as_ref()
            .map(|a| a.category.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    pub fn severity(&self) -> Option<Severity> {
        self.analysis.as_ref().map(|a| a.severity)
    }

    pub fn is_closed(&self) -> bool {
        self.status.is_closed()
    }

    /// Creation to last internal note, only for closed reports that have notes
    pub fn resolution_time(&self) -> Option<Duration> {
        if !self.is_closed() {
            return None;
        }
        self.internal_notes
            .last()
            .map(|note| note.timestamp - self.timestamp)
    }
}

/// Data for creating a new report; identity, status and timestamp are assigned by the store
#[derive(Debug, Clone)]
pub struct NewReport {
    pub title: String,
    pub description: String,
    pub state: Option<String>,
    pub analysis: Option<Analysis>,
}

impl NewReport {
    pub fn into_report(self, id: String, timestamp: DateTime<Utc>) -> Report {
        Report {
            id,
            title: self.title,
            description: self.description,
            state: self.state,
            status: ReportStatus::Received,
            analysis: self.analysis,
            timestamp,
            updated_at: None,
            internal_notes: Vec::new(),
            actions: Vec::new(),
            assigned_to: None,
            priority: None,
            rating: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{note_at, report_at};

    #[test]
    fn test_resolution_time_uses_last_note() {
        let mut report = report_at("CATEM-AAAAAA-0001", "2025-06-10T15:00:00Z");
        report.status = ReportStatus::Resolved;
        report.internal_notes = vec![
            note_at("revisado", "2025-06-11T15:00:00Z"),
            note_at("resuelto", "2025-06-13T03:00:00Z"),
        ];

        assert_eq!(report.resolution_time(), Some(Duration::hours(60)));
    }

    #[test]
    fn test_resolution_time_requires_closed_status_and_notes() {
        let mut report = report_at("CATEM-AAAAAA-0001", "2025-06-10T15:00:00Z");
        report.internal_notes = vec![note_at("nota", "2025-06-11T15:00:00Z")];
        assert!(report.resolution_time().is_none());

        report.status = ReportStatus::Closed;
        report.internal_notes.clear();
        assert!(report.resolution_time().is_none());
    }

    #[test]
    fn test_category_label_without_analysis() {
        let mut report = report_at("CATEM-AAAAAA-0001", "2025-06-10T15:00:00Z");
        report.analysis = None;
        assert_eq!(report.category_label(), UNCATEGORIZED);
        assert!(report.severity().is_none());
    }

    #[test]
    fn test_wire_field_names() {
        let report = report_at("CATEM-AAAAAA-0001", "2025-06-10T15:00:00Z");
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["status"], "Recibido");
        assert_eq!(json["timestamp"], "2025-06-10T15:00:00Z");
        assert!(json["internalNotes"].is_array());
        assert!(json["analysis"]["involvedParties"].is_array());
        assert!(json["analysis"]["keyDates"].is_array());
    }
}
