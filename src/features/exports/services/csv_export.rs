//! CSV rendering of report sets for download.

use chrono::{DateTime, NaiveDate, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::core::error::{AppError, Result};
use crate::features::reports::models::Report;

/// Written as-is, unquoted, ahead of the quoted rows
const CSV_HEADER: &str = "ID de Seguimiento,Título,Categoría (IA),Severidad (IA),Estado,Fecha";

const MISSING: &str = "N/A";

fn export_error(e: impl std::fmt::Display) -> AppError {
    tracing::error!("Failed to write CSV export: {}", e);
    AppError::Internal("Failed to build CSV export".to_string())
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y, %H:%M:%S").to_string()
}

fn csv_row(report: &Report) -> [String; 6] {
    let analysis = report.analysis.as_ref();
    [
        report.id.clone(),
        report.title.clone(),
        analysis
            .map(|a| a.category.clone())
            .unwrap_or_else(|| MISSING.to_string()),
        analysis
            .map(|a| a.severity.as_str().to_string())
            .unwrap_or_else(|| MISSING.to_string()),
        report.status.as_str().to_string(),
        format_timestamp(&report.timestamp),
    ]
}

/// Header plus one fully quoted row per report, in input order, joined by `\n`
pub fn reports_to_csv(reports: &[Report]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for report in reports {
        writer.write_record(csv_row(report)).map_err(export_error)?;
    }

    let rows = writer
        .into_inner()
        .map_err(|e| export_error(e.into_error()))?;
    let rows = String::from_utf8(rows).map_err(export_error)?;

    let mut csv = CSV_HEADER.to_string();
    if let Some(rows) = rows.strip_suffix('\n') {
        csv.push('\n');
        csv.push_str(rows);
    }
    Ok(csv)
}

/// `reportes_catem_<date>.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("reportes_catem_{}.csv", date.format("%Y-%m-%d"))
}

/// `denuncias_<region>_<date>.csv`, whitespace runs in the region become `_`
pub fn region_export_filename(region: &str, date: NaiveDate) -> String {
    let region = region.split_whitespace().collect::<Vec<_>>().join("_");
    format!("denuncias_{}_{}.csv", region, date.format("%Y-%m-%d"))
}

/// `Content-Disposition` value with an ASCII fallback and an RFC 5987 name
pub fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| if c.is_ascii() && c != '"' { c } else { '_' })
        .collect();
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(filename)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::ReportStatus;
    use crate::shared::test_helpers::report_at;

    #[test]
    fn test_quotes_are_doubled() {
        let mut report = report_at("CATEM-AAAAAA-0001", "2025-07-04T09:05:03Z");
        report.title = "Caso \"urgente\"".to_string();

        let csv = reports_to_csv(&[report]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "\"CATEM-AAAAAA-0001\",\"Caso \"\"urgente\"\"\",\"Acoso\",\"Alta\",\"Recibido\",\"04/07/2025, 09:05:03\""
        );
    }

    #[test]
    fn test_header_and_missing_analysis() {
        let mut report = report_at("CATEM-AAAAAA-0002", "2025-12-31T23:59:59Z");
        report.analysis = None;
        report.status = ReportStatus::Dismissed;

        let csv = reports_to_csv(&[report]).unwrap();
        let mut lines = csv.split('\n');
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(
            lines.next(),
            Some("\"CATEM-AAAAAA-0002\",\"Reporte CATEM-AAAAAA-0002\",\"N/A\",\"N/A\",\"No Procede\",\"31/12/2025, 23:59:59\"")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_separators_stay_inside_quoted_field() {
        let mut report = report_at("CATEM-AAAAAA-0003", "2025-07-04T09:05:03Z");
        report.title = "Fuga de gas, planta 2\nturno nocturno".to_string();

        let csv = reports_to_csv(&[report]).unwrap();
        assert!(csv.contains(",\"Fuga de gas, planta 2\nturno nocturno\","));
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_empty_set_is_header_only() {
        assert_eq!(reports_to_csv(&[]).unwrap(), CSV_HEADER);
    }

    #[test]
    fn test_rows_keep_input_order() {
        let reports = vec![
            report_at("CATEM-AAAAAA-0002", "2025-07-01T00:00:00Z"),
            report_at("CATEM-AAAAAA-0001", "2025-07-02T00:00:00Z"),
        ];
        let csv = reports_to_csv(&reports).unwrap();
        let ids: Vec<_> = csv.lines().skip(1).map(|l| &l[1..18]).collect();
        assert_eq!(ids, vec!["CATEM-AAAAAA-0002", "CATEM-AAAAAA-0001"]);
    }

    #[test]
    fn test_filenames() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();
        assert_eq!(export_filename(date), "reportes_catem_2025-07-31.csv");
        assert_eq!(
            region_export_filename("Ciudad de  México", date),
            "denuncias_Ciudad_de_México_2025-07-31.csv"
        );
    }

    #[test]
    fn test_content_disposition_encodes_non_ascii() {
        let value = content_disposition("denuncias_Nuevo_León_2025-07-31.csv");
        assert_eq!(
            value,
            "attachment; filename=\"denuncias_Nuevo_Le_n_2025-07-31.csv\"; filename*=UTF-8''denuncias_Nuevo_Le%C3%B3n_2025-07-31.csv"
        );
    }
}
