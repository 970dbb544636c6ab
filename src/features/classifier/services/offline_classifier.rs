use async_trait::async_trait;

use super::ReportClassifier;
use crate::core::error::Result;
use crate::features::reports::models::{Analysis, AnalysisSource, Severity};

pub const OFFLINE_SUMMARY: &str =
    "Análisis simulado: El reporte detalla una posible irregularidad que requiere atención.";

pub const DEFAULT_CATEGORY: &str = "Práctica Laboral Injusta";

/// Keyword stems per category, checked in order against accent-folded lowercase text
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Acoso",
        &[
            "acoso", "hostig", "mobbing", "insult", "humill", "grit", "inapropiad", "hostil",
            "discrimin",
        ],
    ),
    (
        "Violación de Seguridad",
        &[
            "epp", "seguridad", "proteccion", "accidente", "quemadura", "lesion", "riesgo",
            "inseguro", "casco", "toxic",
        ],
    ),
    (
        "Corrupción",
        &[
            "corrup", "soborno", "mordida", "fraude", "desvio", "robo", "cuota", "extorsion",
        ],
    ),
];

const CRITICAL_KEYWORDS: &[&str] = &["muerte", "murio", "fallec", "amenaza", "grave", "violencia"];

const HIGH_KEYWORDS: &[&str] = &[
    "herid", "quemadura", "accidente", "lesion", "despid", "constante", "sin pago", "no ha sido pagad",
];

/// Deterministic classifier used when the remote model is unavailable.
///
/// The same text always yields the same analysis. Entity lists stay empty and
/// the analysis is marked `offline` so it can be reclassified later.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineClassifier;

impl OfflineClassifier {
    pub fn analyze(&self, text: &str) -> Analysis {
        let folded = fold(text);

        let category = CATEGORY_KEYWORDS
            .iter()
            .find(|(_, stems)| stems.iter().any(|stem| folded.contains(stem)))
            .map(|(category, _)| *category)
            .unwrap_or(DEFAULT_CATEGORY);

        let severity = if CRITICAL_KEYWORDS.iter().any(|k| folded.contains(k)) {
            Severity::Critical
        } else if HIGH_KEYWORDS.iter().any(|k| folded.contains(k)) {
            Severity::High
        } else if category != DEFAULT_CATEGORY {
            Severity::Medium
        } else {
            Severity::Low
        };

        Analysis {
            category: category.to_string(),
            severity,
            summary: OFFLINE_SUMMARY.to_string(),
            locations: Vec::new(),
            involved_parties: Vec::new(),
            key_dates: Vec::new(),
            source: AnalysisSource::Offline,
        }
    }
}

#[async_trait]
impl ReportClassifier for OfflineClassifier {
    async fn classify(&self, text: &str) -> Result<Analysis> {
        Ok(self.analyze(text))
    }

    fn name(&self) -> &'static str {
        "offline"
    }
}

/// Lowercase and strip Spanish accents
fn fold(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            other => other,
        })
        .collect()
}
