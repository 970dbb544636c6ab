use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::classifier::services::ClassifierGateway;
use crate::features::dashboard::services::ReportFilter;
use crate::features::regions::models::is_known_region;
use crate::features::reports::dtos::{
    AssignmentDto, CreateActionDto, CreateReportDto, TrackingResponseDto,
};
use crate::features::reports::models::{
    ActionStatus, CaseAction, InternalNote, NewReport, Report, ReportStatus, TransitionPolicy,
};
use crate::features::reports::services::ReportStore;
use crate::shared::validation::TRACKING_ID_REGEX;

/// Author recorded on notes when the caller does not name one
pub const DEFAULT_NOTE_AUTHOR: &str = "Agente Interno";

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Report '{}' not found", id))
}

fn check_transition(policy: TransitionPolicy, report: &Report, to: ReportStatus) -> Result<()> {
    policy.check(report.status, to).map_err(|e| {
        tracing::warn!("Blocked status change on {}: {}", report.id, e);
        AppError::Conflict(e.to_string())
    })
}

fn validate_rating(rating: u8) -> Result<()> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation(
            "Rating must be between 1 and 5".to_string(),
        ));
    }
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Service for report submission, tracking and case management.
///
/// Every mutation of an existing report goes through [`ReportStore::modify`],
/// so checks and multi-field changes land as one atomic update.
pub struct ReportService {
    store: Arc<ReportStore>,
    classifier: Arc<ClassifierGateway>,
    policy: TransitionPolicy,
}

impl ReportService {
    pub fn new(
        store: Arc<ReportStore>,
        classifier: Arc<ClassifierGateway>,
        policy: TransitionPolicy,
    ) -> Self {
        Self {
            store,
            classifier,
            policy,
        }
    }

    /// Validate, classify and store a new anonymous report.
    ///
    /// Nothing is written when validation fails. Classification never fails;
    /// the gateway answers with an offline analysis instead.
    pub async fn submit(&self, dto: CreateReportDto) -> Result<Report> {
        dto.validate()?;

        let description = dto.description.trim().to_string();
        let analysis = self.classifier.classify(&description).await;

        let id = self
            .store
            .create(NewReport {
                title: dto.title(),
                description,
                state: Some(dto.state),
                analysis: Some(analysis),
            })
            .await;

        let report = self
            .store
            .get_by_id(&id)
            .await
            .ok_or_else(|| AppError::Internal(format!("Report '{}' vanished after creation", id)))?;

        tracing::info!(
            "Created report: {} (category: {}, state: {})",
            report.id,
            report.category_label(),
            report.state.as_deref().unwrap_or("-")
        );

        Ok(report)
    }

    /// Public status lookup by tracking id
    pub async fn track(&self, tracking_id: &str) -> Result<TrackingResponseDto> {
        let candidate = tracking_id.trim().to_ascii_uppercase();
        if !TRACKING_ID_REGEX.is_match(&candidate) {
            tracing::debug!("Malformed tracking id: {}", tracking_id);
            return Err(not_found(tracking_id.trim()));
        }

        self.store
            .find_by_tracking_id(&candidate)
            .await
            .map(TrackingResponseDto::from)
            .ok_or_else(|| not_found(tracking_id.trim()))
    }

    pub async fn list(&self, filter: &ReportFilter) -> Vec<Report> {
        filter.apply(self.store.get_all().await)
    }

    pub async fn get(&self, id: &str) -> Result<Report> {
        self.store.get_by_id(id).await.ok_or_else(|| not_found(id))
    }

    async fn modify<F>(&self, id: &str, change: F) -> Result<Report>
    where
        F: FnOnce(&mut Report) -> Result<()>,
    {
        self.store.modify(id, change).await.ok_or_else(|| not_found(id))?
    }

    /// Move a report to `status`, appending `note` in the same update.
    ///
    /// Same status with no note changes nothing.
    pub async fn change_status(
        &self,
        id: &str,
        status: ReportStatus,
        note: Option<String>,
        author: &str,
    ) -> Result<Report> {
        let note = non_blank(note);

        let current = self.get(id).await?;
        if current.status == status && note.is_none() {
            return Ok(current);
        }

        // Nothing to check or append: a plain status write
        if note.is_none() && self.policy.allow_reopen {
            let report = self
                .store
                .update_status(id, status)
                .await
                .ok_or_else(|| not_found(id))?;
            tracing::info!("Report {} status changed to {}", report.id, report.status);
            return Ok(report);
        }

        let policy = self.policy;
        let report = self
            .modify(id, |report| {
                check_transition(policy, report, status)?;

                report.status = status;
                if let Some(text) = note {
                    report.internal_notes.push(InternalNote {
                        text,
                        timestamp: Utc::now(),
                        author: author.to_string(),
                    });
                }
                Ok(())
            })
            .await?;

        tracing::info!("Report {} status changed to {}", report.id, report.status);
        Ok(report)
    }

    pub async fn add_note(&self, id: &str, text: &str, author: &str) -> Result<Report> {
        let text = non_blank(Some(text.to_string()))
            .ok_or_else(|| AppError::Validation("Note text must not be blank".to_string()))?;

        self.modify(id, |report| {
            report.internal_notes.push(InternalNote {
                text,
                timestamp: Utc::now(),
                author: author.to_string(),
            });
            Ok(())
        })
        .await
    }

    pub async fn add_action(&self, id: &str, dto: CreateActionDto) -> Result<Report> {
        dto.validate()?;

        let action = CaseAction::new(
            dto.action.trim().to_string(),
            dto.assigned_to.trim().to_string(),
            dto.due_date,
            non_blank(dto.notes),
        );

        self.modify(id, |report| {
            report.actions.push(action);
            Ok(())
        })
        .await
    }

    pub async fn update_action_status(
        &self,
        id: &str,
        action_id: &str,
        status: ActionStatus,
    ) -> Result<Report> {
        self.modify(id, |report| {
            let action = report
                .actions
                .iter_mut()
                .find(|a| a.id == action_id)
                .ok_or_else(|| AppError::NotFound(format!("Action '{}' not found", action_id)))?;
            action.set_status(status, Utc::now());
            Ok(())
        })
        .await
    }

    pub async fn assign(&self, id: &str, dto: AssignmentDto) -> Result<Report> {
        let assigned_to = non_blank(dto.assigned_to);

        self.modify(id, |report| {
            report.assigned_to = assigned_to;
            report.priority = dto.priority;
            Ok(())
        })
        .await
    }

    pub async fn rate(&self, id: &str, rating: u8) -> Result<Report> {
        validate_rating(rating)?;

        self.modify(id, |report| {
            report.rating = Some(rating);
            Ok(())
        })
        .await
    }

    /// Run the classifier again and replace the stored analysis
    pub async fn reclassify(&self, id: &str) -> Result<Report> {
        let current = self.get(id).await?;
        let analysis = self.classifier.classify(&current.description).await;

        let report = self
            .modify(id, |report| {
                report.analysis = Some(analysis);
                Ok(())
            })
            .await?;

        tracing::info!(
            "Reclassified report {} as {} ({:?})",
            report.id,
            report.category_label(),
            report.analysis.as_ref().map(|a| a.source)
        );
        Ok(report)
    }

    /// Full replacement of an existing report.
    ///
    /// The id is taken from `id`; a different id in the body is rejected, as is
    /// any change that drops or rewrites existing internal notes. The status,
    /// rating and state go through the same checks as their dedicated paths.
    pub async fn replace(&self, id: &str, replacement: Report) -> Result<Report> {
        if replacement.id != id {
            return Err(AppError::BadRequest(
                "Report id cannot be changed".to_string(),
            ));
        }
        if let Some(rating) = replacement.rating {
            validate_rating(rating)?;
        }
        if let Some(state) = replacement.state.as_deref() {
            if !is_known_region(state) {
                return Err(AppError::Validation(format!(
                    "'{}' is not a known state",
                    state
                )));
            }
        }

        let policy = self.policy;
        self.modify(id, |report| {
            check_transition(policy, report, replacement.status)?;

            let kept = report.internal_notes.len();
            if replacement.internal_notes.len() < kept
                || replacement.internal_notes[..kept] != report.internal_notes[..]
            {
                return Err(AppError::Conflict(
                    "Internal notes are append-only".to_string(),
                ));
            }
            if replacement.timestamp != report.timestamp {
                return Err(AppError::BadRequest(
                    "Report creation timestamp cannot be changed".to_string(),
                ));
            }
            *report = replacement;
            Ok(())
        })
        .await
    }
}
