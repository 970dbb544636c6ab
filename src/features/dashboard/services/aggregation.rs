//! Pure functions computing dashboard figures from a report snapshot.

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::{
    CaseStatsDto, ChartBarDto, ChartDimension, DashboardChartsDto, DashboardKpisDto,
    DrillDownDto, LabelCountDto, RegionCountDto,
};
use crate::features::dashboard::services::ReportFilter;
use crate::features::regions::models::REGIONS;
use crate::features::reports::models::{Priority, Report, ReportStatus, Severity};

/// Colors cycled through by category and state bars
pub const CATEGORY_PALETTE: [&str; 6] = [
    "#38bdf8", "#fb923c", "#a78bfa", "#f472b6", "#4ade80", "#fbbf24",
];

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

pub fn status_color(status: ReportStatus) -> &'static str {
    match status {
        ReportStatus::Received => "#3b82f6",
        ReportStatus::UnderReview => "#eab308",
        ReportStatus::Investigating => "#8b5cf6",
        ReportStatus::Resolved => "#22c55e",
        ReportStatus::Closed => "#64748b",
        ReportStatus::Dismissed => "#ef4444",
    }
}

pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "#6b7280",
        Severity::Medium => "#f59e0b",
        Severity::High => "#f97316",
        Severity::Critical => "#dc2626",
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean resolution time in days over closed reports with at least one note
pub fn average_resolution_days(reports: &[Report]) -> Option<f64> {
    let samples: Vec<f64> = reports
        .iter()
        .filter_map(Report::resolution_time)
        .map(|d| d.num_milliseconds() as f64 / MILLIS_PER_DAY)
        .collect();

    if samples.is_empty() {
        return None;
    }
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    Some(round_one_decimal(mean))
}

pub fn compute_kpis(reports: &[Report]) -> DashboardKpisDto {
    let closed = reports.iter().filter(|r| r.is_closed()).count();
    let average_resolution_days = average_resolution_days(reports);

    DashboardKpisDto {
        total: reports.len(),
        open: reports.len() - closed,
        closed,
        average_resolution_days,
        average_resolution_label: average_resolution_days
            .map(|days| format!("{:.1} días", days))
            .unwrap_or_else(|| "N/A".to_string()),
    }
}

/// Count labels in first-seen order
fn count_first_seen<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }
    counts
}

fn palette_bars(counts: Vec<(&str, usize)>) -> Vec<ChartBarDto> {
    counts
        .into_iter()
        .enumerate()
        .map(|(i, (label, value))| ChartBarDto {
            label: label.to_string(),
            value,
            color: CATEGORY_PALETTE[i % CATEGORY_PALETTE.len()].to_string(),
        })
        .collect()
}

pub fn build_chart(reports: &[Report], dimension: ChartDimension) -> Vec<ChartBarDto> {
    match dimension {
        ChartDimension::Status => ReportStatus::ALL
            .into_iter()
            .map(|status| ChartBarDto {
                label: status.as_str().to_string(),
                value: reports.iter().filter(|r| r.status == status).count(),
                color: status_color(status).to_string(),
            })
            .filter(|bar| bar.value > 0)
            .collect(),
        // Unanalyzed reports get no bar so each bar matches its severity drill-down
        ChartDimension::Severity => Severity::ALL
            .into_iter()
            .map(|severity| ChartBarDto {
                label: severity.as_str().to_string(),
                value: reports
                    .iter()
                    .filter(|r| r.severity() == Some(severity))
                    .count(),
                color: severity_color(severity).to_string(),
            })
            .filter(|bar| bar.value > 0)
            .collect(),
        ChartDimension::Category => {
            palette_bars(count_first_seen(reports.iter().map(Report::category_label)))
        }
        ChartDimension::State => palette_bars(count_first_seen(
            reports.iter().filter_map(|r| r.state.as_deref()),
        )),
    }
}

pub fn build_charts(reports: &[Report]) -> DashboardChartsDto {
    DashboardChartsDto {
        by_status: build_chart(reports, ChartDimension::Status),
        by_category: build_chart(reports, ChartDimension::Category),
        by_severity: build_chart(reports, ChartDimension::Severity),
        by_state: build_chart(reports, ChartDimension::State),
    }
}

/// Turn a clicked bar into a filter with exactly that one field set
pub fn drill_down(selection: &DrillDownDto) -> Result<ReportFilter> {
    let label = selection.label.trim();
    if label.is_empty() {
        return Err(AppError::Validation("Drill-down label must not be empty".to_string()));
    }

    let filter = match selection.dimension {
        ChartDimension::Status => ReportFilter {
            status: Some(label.parse().map_err(AppError::Validation)?),
            ..Default::default()
        },
        ChartDimension::Severity => ReportFilter {
            severity: Some(label.parse().map_err(AppError::Validation)?),
            ..Default::default()
        },
        ChartDimension::Category => ReportFilter {
            category: Some(label.to_string()),
            ..Default::default()
        },
        ChartDimension::State => ReportFilter {
            state: Some(label.to_string()),
            ..Default::default()
        },
    };
    Ok(filter)
}

fn label_counts<T: Copy + PartialEq>(
    values: &[T],
    observed: impl Fn(&Report) -> Option<T>,
    label: impl Fn(T) -> &'static str,
    reports: &[Report],
) -> Vec<LabelCountDto> {
    values
        .iter()
        .map(|&value| LabelCountDto {
            label: label(value).to_string(),
            count: reports
                .iter()
                .filter(|r| observed(r) == Some(value))
                .count(),
        })
        .collect()
}

pub fn case_stats(reports: &[Report]) -> CaseStatsDto {
    let ratings: Vec<f64> = reports
        .iter()
        .filter_map(|r| r.rating)
        .map(f64::from)
        .collect();
    let average_rating = (!ratings.is_empty())
        .then(|| round_one_decimal(ratings.iter().sum::<f64>() / ratings.len() as f64));

    CaseStatsDto {
        total: reports.len(),
        by_status: label_counts(
            &ReportStatus::ALL,
            |r| Some(r.status),
            |s| s.as_str(),
            reports,
        ),
        by_severity: label_counts(&Severity::ALL, Report::severity, |s| s.as_str(), reports),
        by_priority: label_counts(&Priority::ALL, |r| r.priority, |p| p.as_str(), reports),
        average_rating,
        average_resolution_days: average_resolution_days(reports),
    }
}

/// Report count for every catalog region, in catalog order
pub fn regional_summary(reports: &[Report]) -> Vec<RegionCountDto> {
    REGIONS
        .iter()
        .map(|region| RegionCountDto {
            code: region.code.to_string(),
            name: region.name.to_string(),
            count: reports
                .iter()
                .filter(|r| r.state.as_deref() == Some(region.name))
                .count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{generated_reports, note_at, report_at, report_with};

    fn closed_with_notes(id: &str, created: &str, notes: &[&str]) -> Report {
        let mut report = report_at(id, created);
        report.status = ReportStatus::Closed;
        report.internal_notes = notes.iter().map(|t| note_at("nota", t)).collect();
        report
    }

    #[test]
    fn test_kpis_exclude_closed_reports_without_notes() {
        let reports = vec![
            closed_with_notes(
                "CATEM-AAAAAA-0001",
                "2025-07-01T00:00:00Z",
                &["2025-07-02T00:00:00Z", "2025-07-03T00:00:00Z"],
            ),
            closed_with_notes("CATEM-AAAAAA-0002", "2025-07-01T00:00:00Z", &[]),
            report_with(
                "CATEM-AAAAAA-0003",
                ReportStatus::UnderReview,
                "Acoso",
                Severity::High,
            ),
        ];

        let kpis = compute_kpis(&reports);
        assert_eq!(kpis.total, 3);
        assert_eq!(kpis.open, 1);
        assert_eq!(kpis.closed, 2);
        assert_eq!(kpis.average_resolution_days, Some(2.0));
        assert_eq!(kpis.average_resolution_label, "2.0 días");
    }

    #[test]
    fn test_kpis_without_samples() {
        let kpis = compute_kpis(&[]);
        assert_eq!(kpis.total, 0);
        assert_eq!(kpis.average_resolution_days, None);
        assert_eq!(kpis.average_resolution_label, "N/A");
    }

    #[test]
    fn test_resolution_average_rounds_to_one_decimal() {
        let reports = vec![
            closed_with_notes("CATEM-AAAAAA-0001", "2025-07-01T00:00:00Z", &["2025-07-02T08:00:00Z"]),
            closed_with_notes("CATEM-AAAAAA-0002", "2025-07-01T00:00:00Z", &["2025-07-03T00:00:00Z"]),
        ];
        // (1.333.. + 2) / 2 = 1.666..
        assert_eq!(average_resolution_days(&reports), Some(1.7));
    }

    #[test]
    fn test_under_review_is_open_and_in_its_bar() {
        let reports = vec![report_with(
            "CATEM-AAAAAA-0001",
            ReportStatus::UnderReview,
            "Acoso",
            Severity::High,
        )];

        assert_eq!(compute_kpis(&reports).open, 1);
        assert_eq!(
            build_chart(&reports, ChartDimension::Status),
            vec![ChartBarDto {
                label: "En Revisión".to_string(),
                value: 1,
                color: "#eab308".to_string(),
            }]
        );
    }

    #[test]
    fn test_status_and_severity_charts_use_fixed_order() {
        let reports = vec![
            report_with("CATEM-AAAAAA-0001", ReportStatus::Closed, "Acoso", Severity::Critical),
            report_with("CATEM-AAAAAA-0002", ReportStatus::Received, "Acoso", Severity::Low),
            report_with("CATEM-AAAAAA-0003", ReportStatus::Closed, "Acoso", Severity::Low),
        ];

        let status: Vec<_> = build_chart(&reports, ChartDimension::Status)
            .into_iter()
            .map(|b| (b.label, b.value))
            .collect();
        assert_eq!(
            status,
            vec![("Recibido".to_string(), 1), ("Cerrado".to_string(), 2)]
        );

        let severity: Vec<_> = build_chart(&reports, ChartDimension::Severity)
            .into_iter()
            .map(|b| (b.label, b.value))
            .collect();
        assert_eq!(
            severity,
            vec![("Baja".to_string(), 2), ("Crítica".to_string(), 1)]
        );
    }

    #[test]
    fn test_category_chart_first_seen_order_and_palette() {
        let mut bare = report_at("CATEM-AAAAAA-0003", "2025-07-01T00:00:00Z");
        bare.analysis = None;
        let reports = vec![
            report_with("CATEM-AAAAAA-0001", ReportStatus::Received, "Corrupción", Severity::Low),
            report_with("CATEM-AAAAAA-0002", ReportStatus::Received, "Acoso", Severity::Low),
            bare,
            report_with("CATEM-AAAAAA-0004", ReportStatus::Received, "Corrupción", Severity::Low),
        ];

        let chart = build_chart(&reports, ChartDimension::Category);
        let labels: Vec<_> = chart.iter().map(|b| (b.label.as_str(), b.value)).collect();
        assert_eq!(
            labels,
            vec![("Corrupción", 2), ("Acoso", 1), ("Sin Categoría", 1)]
        );
        assert_eq!(chart[0].color, CATEGORY_PALETTE[0]);
        assert_eq!(chart[2].color, CATEGORY_PALETTE[2]);

        // Reports without analysis do not land in a severity bar
        let severity_total: usize = build_chart(&reports, ChartDimension::Severity)
            .iter()
            .map(|b| b.value)
            .sum();
        assert_eq!(severity_total, 3);
    }

    #[test]
    fn test_palette_cycles() {
        let reports: Vec<Report> = (0..8)
            .map(|i| {
                report_with(
                    &format!("CATEM-AAAAAA-000{}", i),
                    ReportStatus::Received,
                    &format!("Categoría {}", i),
                    Severity::Low,
                )
            })
            .collect();
        let chart = build_chart(&reports, ChartDimension::Category);
        assert_eq!(chart[6].color, chart[0].color);
        assert_eq!(chart[7].color, chart[1].color);
    }

    #[test]
    fn test_drill_down_round_trip() {
        let reports = generated_reports(50);

        for dimension in [
            ChartDimension::Status,
            ChartDimension::Category,
            ChartDimension::Severity,
            ChartDimension::State,
        ] {
            for bar in build_chart(&reports, dimension) {
                let filter = drill_down(&DrillDownDto {
                    dimension,
                    label: bar.label.clone(),
                })
                .unwrap();
                assert_eq!(
                    filter.apply(reports.clone()).len(),
                    bar.value,
                    "{:?} {}",
                    dimension,
                    bar.label
                );
            }
        }
    }

    #[test]
    fn test_drill_down_on_category_sets_only_category() {
        let filter = drill_down(&DrillDownDto {
            dimension: ChartDimension::Category,
            label: "Acoso".to_string(),
        })
        .unwrap();

        assert_eq!(
            filter,
            ReportFilter {
                category: Some("Acoso".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_drill_down_rejects_unknown_labels() {
        assert!(drill_down(&DrillDownDto {
            dimension: ChartDimension::Status,
            label: "Archivado".to_string(),
        })
        .is_err());
        assert!(drill_down(&DrillDownDto {
            dimension: ChartDimension::Category,
            label: " ".to_string(),
        })
        .is_err());
    }

    #[test]
    fn test_case_stats() {
        let mut rated = report_with("CATEM-AAAAAA-0001", ReportStatus::Resolved, "Acoso", Severity::High);
        rated.rating = Some(4);
        rated.priority = Some(Priority::Urgent);
        let mut also_rated = report_with("CATEM-AAAAAA-0002", ReportStatus::Received, "Acoso", Severity::High);
        also_rated.rating = Some(5);
        let unrated = report_with("CATEM-AAAAAA-0003", ReportStatus::Received, "Acoso", Severity::Low);

        let stats = case_stats(&[rated, also_rated, unrated]);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.average_rating, Some(4.5));
        assert_eq!(stats.by_status.len(), ReportStatus::ALL.len());
        assert_eq!(stats.by_status[0].label, "Recibido");
        assert_eq!(stats.by_status[0].count, 2);
        assert_eq!(stats.by_severity[2].label, "Alta");
        assert_eq!(stats.by_severity[2].count, 2);
        assert_eq!(stats.by_priority[3].label, "Urgente");
        assert_eq!(stats.by_priority[3].count, 1);
        assert_eq!(stats.average_resolution_days, None);

        assert_eq!(case_stats(&[]).average_rating, None);
    }

    #[test]
    fn test_regional_summary_includes_empty_regions() {
        let mut puebla = report_at("CATEM-AAAAAA-0001", "2025-07-01T00:00:00Z");
        puebla.state = Some("Puebla".to_string());
        let jalisco = report_at("CATEM-AAAAAA-0002", "2025-07-01T00:00:00Z");

        let summary = regional_summary(&[puebla, jalisco]);
        assert_eq!(summary.len(), REGIONS.len());
        assert_eq!(summary.iter().map(|r| r.count).sum::<usize>(), 2);

        let jalisco = summary.iter().find(|r| r.name == "Jalisco").unwrap();
        assert_eq!(jalisco.count, 1);
        assert!(summary.iter().any(|r| r.count == 0));
    }
}
