use std::sync::Arc;
use std::time::Duration;

use super::{GeminiClassifier, OfflineClassifier, ReportClassifier};
use crate::core::config::ClassifierConfig;
use crate::features::reports::models::Analysis;

/// Entry point for report classification.
///
/// Tries the remote classifier (if configured) within `timeout`. A missing
/// key, timeout, transport error or unusable response is logged and answered
/// by the offline classifier, so `classify` always produces an analysis.
pub struct ClassifierGateway {
    remote: Option<Arc<dyn ReportClassifier>>,
    offline: OfflineClassifier,
    timeout: Duration,
}

impl ClassifierGateway {
    pub fn new(remote: Option<Arc<dyn ReportClassifier>>, timeout: Duration) -> Self {
        Self {
            remote,
            offline: OfflineClassifier,
            timeout,
        }
    }

    pub fn offline_only() -> Self {
        Self::new(None, Duration::ZERO)
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        let Some(api_key) = config.api_key.clone() else {
            tracing::warn!("CLASSIFIER_API_KEY not set, reports will be classified offline");
            return Self::offline_only();
        };

        match GeminiClassifier::new(config, api_key) {
            Ok(classifier) => {
                tracing::info!("Remote classifier enabled (model: {})", config.model);
                Self::new(Some(Arc::new(classifier)), config.timeout)
            }
            Err(e) => {
                tracing::warn!("Remote classifier unavailable, using offline only: {}", e);
                Self::offline_only()
            }
        }
    }

    pub fn is_remote_enabled(&self) -> bool {
        self.remote.is_some()
    }

    pub async fn classify(&self, text: &str) -> Analysis {
        let Some(remote) = &self.remote else {
            return self.offline.analyze(text);
        };

        match tokio::time::timeout(self.timeout, remote.classify(text)).await {
            Ok(Ok(analysis)) => analysis,
            Ok(Err(e)) => {
                tracing::warn!(
                    "Classifier '{}' failed, using offline analysis: {}",
                    remote.name(),
                    e
                );
                self.offline.analyze(text)
            }
            Err(_) => {
                tracing::warn!(
                    "Classifier '{}' timed out after {:?}, using offline analysis",
                    remote.name(),
                    self.timeout
                );
                self.offline.analyze(text)
            }
        }
    }
}
