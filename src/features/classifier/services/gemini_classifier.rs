use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::ReportClassifier;
use crate::core::config::ClassifierConfig;
use crate::core::error::{AppError, Result};
use crate::features::classifier::models::Classification;
use crate::features::reports::models::{Analysis, AnalysisSource};
use crate::shared::llm::{parse_with_fallback, LlmResponse};
use crate::shared::prompts::render_classifier_prompt;

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Classifier backed by the Gemini `generateContent` endpoint
pub struct GeminiClassifier {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClassifier {
    pub fn new(config: &ClassifierConfig, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("CatemDenuncias/1.0 (report-classifier)")
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {:?}", e);
                AppError::Internal(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_request_body(system_prompt: &str, text: &str) -> Value {
        json!({
            "systemInstruction": {
                "parts": [{ "text": system_prompt }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": format!("El reporte del usuario es: \"{}\"", text) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json"
            }
        })
    }
}

#[async_trait]
impl ReportClassifier for GeminiClassifier {
    async fn classify(&self, text: &str) -> Result<Analysis> {
        let system_prompt = render_classifier_prompt(&Classification::json_schema_string())
            .map_err(|e| AppError::Internal(format!("Failed to render classifier prompt: {}", e)))?;

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::build_request_body(&system_prompt, text))
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Classifier request failed: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Classifier returned status {}",
                response.status()
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Failed to decode classifier response: {}", e))
        })?;

        let text = body.text().ok_or_else(|| {
            AppError::ExternalServiceError("Classifier returned no text".to_string())
        })?;

        tracing::debug!(
            "Raw classifier response (first 500 chars): {}",
            text.chars().take(500).collect::<String>()
        );

        let classification: Classification = parse_with_fallback(&text);
        if !classification.is_success() {
            return Err(AppError::ExternalServiceError(
                classification
                    .llm_error_message
                    .unwrap_or_else(|| "Unparseable classifier response".to_string()),
            ));
        }

        classification
            .into_analysis(AnalysisSource::Model)
            .ok_or_else(|| {
                AppError::ExternalServiceError(
                    "Classifier response is missing category, severity or summary".to_string(),
                )
            })
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let config = ClassifierConfig {
            base_url: "https://example.test/v1beta/".to_string(),
            ..ClassifierConfig::default()
        };
        let classifier = GeminiClassifier::new(&config, "key".to_string()).unwrap();
        assert_eq!(
            classifier.endpoint(),
            format!("https://example.test/v1beta/models/{}:generateContent", config.model)
        );
    }

    #[test]
    fn test_request_body_carries_prompt_and_report() {
        let body = GeminiClassifier::build_request_body("instrucciones", "No hay EPP");

        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "instrucciones");
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "El reporte del usuario es: \"No hay EPP\""
        );
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn test_response_text_joins_parts() {
        let body: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"category\": " }, { "text": "\"Acoso\"}" }] }
            }]
        }))
        .unwrap();
        assert_eq!(body.text().as_deref(), Some("{\"category\": \"Acoso\"}"));

        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.text().is_none());
    }
}
