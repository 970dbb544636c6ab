use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{Report, ReportStatus, Severity};

/// Select boxes send this for "no restriction"
const ALL_OPTION: &str = "All";

/// AND-composed report filter; unset fields do not restrict
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
    /// Category label; `Sin Categoría` selects reports without analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    /// Case-insensitive substring of id or title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    /// Inclusive, from 00:00:00.000 UTC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_start: Option<NaiveDate>,
    /// Inclusive, through 23:59:59.999 UTC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_end: Option<NaiveDate>,
    /// Region name, exact match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(last_milli).and_utc()
}

impl ReportFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, report: &Report) -> bool {
        if self.status.is_some_and(|status| report.status != status) {
            return false;
        }
        if self
            .category
            .as_deref()
            .is_some_and(|category| report.category_label() != category)
        {
            return false;
        }
        if self
            .severity
            .is_some_and(|severity| report.severity() != Some(severity))
        {
            return false;
        }
        if let Some(text) = self.search_text.as_deref() {
            let needle = text.to_lowercase();
            if !needle.is_empty()
                && !report.id.to_lowercase().contains(&needle)
                && !report.title.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if self
            .date_start
            .is_some_and(|start| report.timestamp < start_of_day(start))
        {
            return false;
        }
        if self
            .date_end
            .is_some_and(|end| report.timestamp > end_of_day(end))
        {
            return false;
        }
        if self
            .state
            .as_deref()
            .is_some_and(|state| report.state.as_deref() != Some(state))
        {
            return false;
        }
        true
    }

    /// Keep matching reports, preserving their order
    pub fn apply(&self, reports: Vec<Report>) -> Vec<Report> {
        if self.is_empty() {
            return reports;
        }
        reports.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// Query-string form of [`ReportFilter`]; `All` or empty values mean unset
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ReportFilterQuery {
    /// Status wire value, e.g. `En Revisión`
    pub status: Option<String>,
    pub category: Option<String>,
    /// `Baja`, `Media`, `Alta` or `Crítica`
    pub severity: Option<String>,
    pub search_text: Option<String>,
    /// `YYYY-MM-DD`
    pub date_start: Option<String>,
    /// `YYYY-MM-DD`
    pub date_end: Option<String>,
    pub state: Option<String>,
}

fn selected(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != ALL_OPTION)
}

fn parse_date(field: &str, value: Option<String>) -> Result<Option<NaiveDate>> {
    selected(value)
        .map(|v| {
            NaiveDate::parse_from_str(&v, "%Y-%m-%d").map_err(|_| {
                AppError::Validation(format!("{} must be a date in YYYY-MM-DD format", field))
            })
        })
        .transpose()
}

impl TryFrom<ReportFilterQuery> for ReportFilter {
    type Error = AppError;

    fn try_from(query: ReportFilterQuery) -> Result<Self> {
        let status = selected(query.status)
            .map(|s| s.parse::<ReportStatus>().map_err(AppError::Validation))
            .transpose()?;
        let severity = selected(query.severity)
            .map(|s| s.parse::<Severity>().map_err(AppError::Validation))
            .transpose()?;

        Ok(Self {
            status,
            category: selected(query.category),
            severity,
            search_text: query
                .search_text
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            date_start: parse_date("dateStart", query.date_start)?,
            date_end: parse_date("dateEnd", query.date_end)?,
            state: selected(query.state),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{generated_reports, report_at, report_with, ts};

    fn ids(reports: &[Report]) -> Vec<&str> {
        reports.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let reports = generated_reports(30);
        let filtered = ReportFilter::default().apply(reports.clone());
        assert_eq!(filtered, reports);
    }

    #[test]
    fn test_composition_equals_sequential_application() {
        let reports = generated_reports(60);
        let combined = ReportFilter {
            status: Some(ReportStatus::Received),
            category: Some("Acoso".to_string()),
            date_start: Some(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()),
            ..Default::default()
        };

        let by_status = ReportFilter {
            status: combined.status,
            ..Default::default()
        };
        let by_category = ReportFilter {
            category: combined.category.clone(),
            ..Default::default()
        };
        let by_date = ReportFilter {
            date_start: combined.date_start,
            ..Default::default()
        };

        let sequential = by_date.apply(by_category.apply(by_status.apply(reports.clone())));
        let reversed = by_status.apply(by_date.apply(by_category.apply(reports.clone())));
        let at_once = combined.apply(reports);

        assert_eq!(ids(&at_once), ids(&sequential));
        assert_eq!(ids(&at_once), ids(&reversed));
    }

    #[test]
    fn test_is_idempotent() {
        let filter = ReportFilter {
            severity: Some(Severity::High),
            ..Default::default()
        };
        let once = filter.apply(generated_reports(40));
        let twice = filter.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_date_range_is_inclusive_by_day() {
        let reports = vec![
            report_at("CATEM-AAAAAA-0003", "2025-07-02T00:00:00Z"),
            report_at("CATEM-AAAAAA-0002", "2025-07-01T23:59:59.999Z"),
            report_at("CATEM-AAAAAA-0001", "2025-07-01T00:00:00Z"),
            report_at("CATEM-AAAAAA-0000", "2025-06-30T23:59:59.999Z"),
        ];
        let day = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let filter = ReportFilter {
            date_start: Some(day),
            date_end: Some(day),
            ..Default::default()
        };

        assert_eq!(
            ids(&filter.apply(reports)),
            vec!["CATEM-AAAAAA-0002", "CATEM-AAAAAA-0001"]
        );
        assert_eq!(end_of_day(day), ts("2025-07-01T23:59:59.999Z"));
    }

    #[test]
    fn test_search_matches_id_or_title() {
        let mut by_title = report_at("CATEM-AAAAAA-0001", "2025-07-01T00:00:00Z");
        by_title.title = "Despido Injustificado".to_string();
        let by_id = report_at("CATEM-DESPID-0002", "2025-07-01T00:00:00Z");
        let neither = report_at("CATEM-BBBBBB-0003", "2025-07-01T00:00:00Z");

        let filter = ReportFilter {
            search_text: Some("despid".to_string()),
            ..Default::default()
        };
        let found = filter.apply(vec![by_title, by_id, neither]);
        assert_eq!(ids(&found), vec!["CATEM-AAAAAA-0001", "CATEM-DESPID-0002"]);
    }

    #[test]
    fn test_uncategorized_label_selects_missing_analysis() {
        let mut bare = report_at("CATEM-AAAAAA-0001", "2025-07-01T00:00:00Z");
        bare.analysis = None;
        let classified = report_with(
            "CATEM-AAAAAA-0002",
            ReportStatus::Received,
            "Acoso",
            Severity::Low,
        );

        let filter = ReportFilter {
            category: Some("Sin Categoría".to_string()),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter.apply(vec![bare, classified])),
            vec!["CATEM-AAAAAA-0001"]
        );
    }

    #[test]
    fn test_query_treats_all_and_empty_as_unset() {
        let query = ReportFilterQuery {
            status: Some("All".to_string()),
            category: Some("".to_string()),
            severity: Some("crítica".to_string()),
            search_text: Some("  ".to_string()),
            date_start: Some("2025-07-01".to_string()),
            ..Default::default()
        };

        let filter = ReportFilter::try_from(query).unwrap();
        assert_eq!(
            filter,
            ReportFilter {
                severity: Some(Severity::Critical),
                date_start: NaiveDate::from_ymd_opt(2025, 7, 1),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_query_rejects_unknown_values() {
        let bad_status = ReportFilterQuery {
            status: Some("Archivado".to_string()),
            ..Default::default()
        };
        assert!(ReportFilter::try_from(bad_status).is_err());

        let bad_date = ReportFilterQuery {
            date_end: Some("01/07/2025".to_string()),
            ..Default::default()
        };
        assert!(ReportFilter::try_from(bad_date).is_err());
    }
}
