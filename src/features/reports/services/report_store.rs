use chrono::Utc;
use tokio::sync::RwLock;

use crate::features::reports::models::{NewReport, Report, ReportStatus};
use crate::features::reports::services::TrackingIdGenerator;

/// In-memory owner of every report, most recent first.
///
/// Reads hand out clones, so callers never alias stored reports. Each write
/// method holds the write lock for its whole read-modify-write, which makes a
/// multi-field change (status plus note, for example) a single atomic update.
pub struct ReportStore {
    reports: RwLock<Vec<Report>>,
    ids: TrackingIdGenerator,
}

impl ReportStore {
    pub fn new(ids: TrackingIdGenerator) -> Self {
        Self {
            reports: RwLock::new(Vec::new()),
            ids,
        }
    }

    /// Insert a new report at the head and return its tracking id
    pub async fn create(&self, new_report: NewReport) -> String {
        let mut reports = self.reports.write().await;

        let mut id = self.ids.generate();
        while reports.iter().any(|r| r.id == id) {
            id = self.ids.generate();
        }

        let report = new_report.into_report(id.clone(), Utc::now());
        reports.insert(0, report);
        id
    }

    /// Snapshot of all reports, most recent first
    pub async fn get_all(&self) -> Vec<Report> {
        self.reports.read().await.clone()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Report> {
        self.reports.read().await.iter().find(|r| r.id == id).cloned()
    }

    /// Lookup used by the public tracking page: trimmed, ASCII case-insensitive
    pub async fn find_by_tracking_id(&self, tracking_id: &str) -> Option<Report> {
        let wanted = tracking_id.trim();
        self.reports
            .read()
            .await
            .iter()
            .find(|r| r.id.eq_ignore_ascii_case(wanted))
            .cloned()
    }

    /// Set only the status and the update marker
    pub async fn update_status(&self, id: &str, status: ReportStatus) -> Option<Report> {
        let mut reports = self.reports.write().await;
        let report = reports.iter_mut().find(|r| r.id == id)?;
        report.status = status;
        report.updated_at = Some(Utc::now());
        Some(report.clone())
    }

    /// Atomic read-modify-write of one report.
    ///
    /// `change` works on a copy; the copy is written back (with a fresh
    /// `updated_at`) only when it returns `Ok`. Returns `None` for an unknown id.
    pub async fn modify<F, E>(&self, id: &str, change: F) -> Option<Result<Report, E>>
    where
        F: FnOnce(&mut Report) -> Result<(), E>,
    {
        let mut reports = self.reports.write().await;
        let slot = reports.iter_mut().find(|r| r.id == id)?;

        let mut draft = slot.clone();
        if let Err(e) = change(&mut draft) {
            return Some(Err(e));
        }
        draft.id = slot.id.clone();
        draft.updated_at = Some(Utc::now());
        *slot = draft.clone();
        Some(Ok(draft))
    }

    /// Load existing reports (demo data), keeping most-recent-first order
    pub async fn seed(&self, mut seeded: Vec<Report>) {
        seeded.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let mut reports = self.reports.write().await;
        reports.extend(seeded);
        reports.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }

    pub async fn len(&self) -> usize {
        self.reports.read().await.len()
    }
}
