//! Fixtures shared by the unit and route tests.

use axum::http::HeaderValue;
use base64::prelude::*;
use chrono::{DateTime, Duration, Utc};
use fake::faker::lorem::en::Sentence;
use fake::Fake;

use crate::features::reports::models::{
    Analysis, AnalysisSource, InternalNote, Report, ReportStatus, Severity,
};

pub const TEST_ADMIN_USER: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "secreto";

pub fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

pub fn analysis(category: &str, severity: Severity) -> Analysis {
    Analysis {
        category: category.to_string(),
        severity,
        summary: format!("Resumen de un caso de {}", category.to_lowercase()),
        locations: vec![],
        involved_parties: vec![],
        key_dates: vec![],
        source: AnalysisSource::Model,
    }
}

pub fn note_at(text: &str, timestamp: &str) -> InternalNote {
    InternalNote {
        text: text.to_string(),
        timestamp: ts(timestamp),
        author: "Agente 001".to_string(),
    }
}

/// A received report with an `Acoso`/`Alta` analysis created at `timestamp`
pub fn report_at(id: &str, timestamp: &str) -> Report {
    Report {
        id: id.to_string(),
        title: format!("Reporte {}", id),
        description: "Descripción del caso".to_string(),
        state: Some("Jalisco".to_string()),
        status: ReportStatus::Received,
        analysis: Some(analysis("Acoso", Severity::High)),
        timestamp: ts(timestamp),
        updated_at: None,
        internal_notes: vec![],
        actions: vec![],
        assigned_to: None,
        priority: None,
        rating: None,
    }
}

pub fn report_with(id: &str, status: ReportStatus, category: &str, severity: Severity) -> Report {
    let mut report = report_at(id, "2025-07-01T12:00:00Z");
    report.status = status;
    report.analysis = Some(analysis(category, severity));
    report
}

/// `count` reports with generated titles, spread over statuses, severities,
/// categories and one day per report going back from 2025-07-31
pub fn generated_reports(count: usize) -> Vec<Report> {
    let categories = ["Acoso", "Corrupción", "Violación de Seguridad", "Salarios"];
    let newest = ts("2025-07-31T18:00:00Z");

    (0..count)
        .map(|i| {
            let mut report = report_at(&format!("CATEM-GEN{:03}-{:04}", i % 1000, i), "2025-07-31T18:00:00Z");
            report.title = Sentence(3..6).fake();
            report.status = ReportStatus::ALL[i % ReportStatus::ALL.len()];
            report.timestamp = newest - Duration::days(i as i64);
            report.analysis = if i % 7 == 6 {
                None
            } else {
                Some(analysis(
                    categories[i % categories.len()],
                    Severity::ALL[(i / 2) % Severity::ALL.len()],
                ))
            };
            report
        })
        .collect()
}

pub fn admin_authorization() -> HeaderValue {
    let encoded = BASE64_STANDARD.encode(format!("{}:{}", TEST_ADMIN_USER, TEST_ADMIN_PASSWORD));
    HeaderValue::from_str(&format!("Basic {}", encoded)).expect("valid header value")
}
