use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::features::reports::models::{Analysis, AnalysisSource, Severity};
use crate::shared::llm::LlmResponse;

fn default_true() -> bool {
    true
}

/// Structured output expected from the classification model
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(title = "ReportClassification")]
pub struct Classification {
    #[schemars(
        description = "Por ejemplo: Acoso, Violación de Seguridad, Corrupción, Práctica Laboral Injusta"
    )]
    pub category: String,

    #[schemars(description = "Baja, Media, Alta, o Crítica")]
    pub severity: Option<Severity>,

    #[schemars(description = "Un resumen breve y neutral del problema, sin datos de identificación")]
    pub summary: String,

    #[serde(default)]
    #[schemars(description = "Lugares mencionados en el reporte")]
    pub locations: Vec<String>,

    #[serde(default)]
    #[schemars(description = "Personas o grupos involucrados, descritos por su rol")]
    pub involved_parties: Vec<String>,

    #[serde(default)]
    #[schemars(description = "Fechas o periodos relevantes")]
    pub key_dates: Vec<String>,

    #[serde(default = "default_true")]
    #[schemars(skip)]
    pub is_llm_success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(skip)]
    pub llm_error_message: Option<String>,
}

impl LlmResponse for Classification {
    fn mark_as_fallback(&mut self, error_message: String) {
        self.is_llm_success = false;
        self.llm_error_message = Some(error_message);
    }

    fn is_success(&self) -> bool {
        self.is_llm_success
    }
}

impl Classification {
    /// Build the stored analysis; `None` when a required field is missing
    pub fn into_analysis(self, source: AnalysisSource) -> Option<Analysis> {
        let category = self.category.trim().to_string();
        if category.is_empty() || self.summary.trim().is_empty() {
            return None;
        }

        Some(Analysis {
            category,
            severity: self.severity?,
            summary: self.summary.trim().to_string(),
            locations: self.locations,
            involved_parties: self.involved_parties,
            key_dates: self.key_dates,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::parse_with_fallback;

    #[test]
    fn test_parses_model_output() {
        let text = r#"```json
{
  "category": "Violación de Seguridad",
  "severity": "CRITICA",
  "summary": "Falta de equipo de protección en el área de soldadura.",
  "locations": ["Área de soldadura"],
  "involvedParties": ["Compañeros"],
}
```"#;

        let parsed: Classification = parse_with_fallback(text);
        assert!(parsed.is_success());

        let analysis = parsed.into_analysis(AnalysisSource::Model).unwrap();
        assert_eq!(analysis.severity, Severity::Critical);
        assert_eq!(analysis.locations, vec!["Área de soldadura"]);
        assert!(analysis.key_dates.is_empty());
    }

    #[test]
    fn test_incomplete_output_has_no_analysis() {
        let parsed: Classification =
            parse_with_fallback(r#"{"category": "Acoso", "summary": "Resumen"}"#);
        assert!(parsed.is_success());
        assert!(parsed.into_analysis(AnalysisSource::Model).is_none());

        let garbage: Classification = parse_with_fallback("lo siento, no puedo ayudar");
        assert!(!garbage.is_success());
        assert!(garbage.into_analysis(AnalysisSource::Model).is_none());
    }

    #[test]
    fn test_schema_hides_internal_fields() {
        let schema = Classification::json_schema_string();
        assert!(schema.contains("involvedParties"));
        assert!(schema.contains("Crítica"));
        assert!(!schema.contains("is_llm_success"));
        assert!(!schema.contains("llm_error_message"));
    }
}
