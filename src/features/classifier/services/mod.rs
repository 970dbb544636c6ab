mod classifier_gateway;
mod gemini_classifier;
mod offline_classifier;
mod report_classifier;

pub use classifier_gateway::ClassifierGateway;
pub use gemini_classifier::GeminiClassifier;
pub use offline_classifier::OfflineClassifier;
pub use report_classifier::ReportClassifier;
