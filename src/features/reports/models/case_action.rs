use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ActionStatus {
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "En Progreso")]
    InProgress,
    #[serde(rename = "Completada")]
    Completed,
    #[serde(rename = "Cancelada")]
    Cancelled,
}

/// Follow-up task attached to a report by case management staff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseAction {
    pub id: String,
    pub action: String,
    pub status: ActionStatus,
    pub assigned_to: String,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl CaseAction {
    pub fn new(action: String, assigned_to: String, due_date: NaiveDate, notes: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            action,
            status: ActionStatus::Pending,
            assigned_to,
            due_date,
            notes,
            completed_at: None,
        }
    }

    /// Move to `status`; entering `Completada` stamps `completed_at`, leaving it clears the stamp
    pub fn set_status(&mut self, status: ActionStatus, now: DateTime<Utc>) {
        self.completed_at = match status {
            ActionStatus::Completed => self.completed_at.or(Some(now)),
            _ => None,
        };
        self.status = status;
    }
}
