use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::reports::models::Analysis;

/// Turns the free text of a report into a category, severity, summary and entities
#[async_trait]
pub trait ReportClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Analysis>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
