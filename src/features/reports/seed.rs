//! Sample reports loaded at startup when `SEED_DEMO_DATA` is enabled.

use chrono::{DateTime, Utc};

use crate::features::reports::models::{
    Analysis, AnalysisSource, InternalNote, Report, ReportStatus, Severity,
};

fn at(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

struct Sample<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    state: &'a str,
    status: ReportStatus,
    category: &'a str,
    severity: Severity,
    summary: &'a str,
    locations: &'a [&'a str],
    involved_parties: &'a [&'a str],
    key_dates: &'a [&'a str],
    timestamp: &'a str,
    notes: &'a [(&'a str, &'a str, &'a str)],
}

impl Sample<'_> {
    fn into_report(self) -> Option<Report> {
        let internal_notes = self
            .notes
            .iter()
            .map(|(text, author, timestamp)| {
                Some(InternalNote {
                    text: text.to_string(),
                    author: author.to_string(),
                    timestamp: at(timestamp)?,
                })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Report {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            state: Some(self.state.to_string()),
            status: self.status,
            analysis: Some(Analysis {
                category: self.category.to_string(),
                severity: self.severity,
                summary: self.summary.to_string(),
                locations: strings(self.locations),
                involved_parties: strings(self.involved_parties),
                key_dates: strings(self.key_dates),
                source: AnalysisSource::Model,
            }),
            timestamp: at(self.timestamp)?,
            updated_at: None,
            internal_notes,
            actions: Vec::new(),
            assigned_to: None,
            priority: None,
            rating: None,
        })
    }
}

/// Five sample reports covering every closed and open stage but `No Procede`
pub fn demo_reports() -> Vec<Report> {
    let samples = [
        Sample {
            id: "CATEM-ABC123-F4A1",
            title: "Condiciones de Trabajo Inseguras",
            description: "No se está proporcionando equipo de protección personal (EPP) adecuado en el área de soldadura. Varios compañeros han sufrido quemaduras leves.",
            state: "Nuevo León",
            status: ReportStatus::Investigating,
            category: "Violación de Seguridad",
            severity: Severity::High,
            summary: "El reporte indica una falta grave de equipo de protección en un área de alto riesgo, con incidentes ya ocurridos.",
            locations: &["Área de soldadura"],
            involved_parties: &["Compañeros"],
            key_dates: &[],
            timestamp: "2025-07-15T10:30:00Z",
            notes: &[
                ("Se ha notificado al supervisor de área. Pendiente de inspección.", "Agente 001", "2025-07-15T11:00:00Z"),
                ("Inspección realizada. Se confirma la falta de EPP. Se emite recomendación urgente.", "Agente 001", "2025-07-16T14:20:00Z"),
            ],
        },
        Sample {
            id: "CATEM-DEF456-B2C3",
            title: "Retraso o Falta de Pago de Salarios",
            description: "La última quincena no ha sido pagada a tiempo y no se nos ha dado una fecha concreta para el pago. Esto afecta a todo el departamento de ensamblaje.",
            state: "Jalisco",
            status: ReportStatus::UnderReview,
            category: "Práctica Laboral Injusta",
            severity: Severity::Critical,
            summary: "Reporte sobre la falta de pago de salarios a un departamento completo, indicando un posible problema de liquidez de la empresa.",
            locations: &["Departamento de ensamblaje"],
            involved_parties: &["Todo el departamento de ensamblaje"],
            key_dates: &["Última quincena"],
            timestamp: "2025-07-20T09:00:00Z",
            notes: &[
                ("Caso asignado. Se contactará a RRHH de la empresa para verificar la situación.", "Agente 002", "2025-07-20T09:30:00Z"),
            ],
        },
        Sample {
            id: "CATEM-GHI789-D4E5",
            title: "Acoso Laboral o Mobbing",
            description: "Un gerente de turno constantemente hace comentarios inapropiados y asigna tareas imposibles de cumplir a ciertos empleados, creando un ambiente de trabajo hostil.",
            state: "Ciudad de México",
            status: ReportStatus::Received,
            category: "Acoso",
            severity: Severity::High,
            summary: "Denuncia de acoso laboral sistemático por parte de una figura de autoridad, afectando el bienestar de los empleados.",
            locations: &[],
            involved_parties: &["Gerente de turno", "Ciertos empleados"],
            key_dates: &["Constantemente"],
            timestamp: "2025-07-21T11:45:00Z",
            notes: &[],
        },
        Sample {
            id: "CATEM-JKL012-A1B2",
            title: "Incumplimiento de Contrato Colectivo",
            description: "Las horas extra no se están pagando al doble como estipula el contrato colectivo. Se están pagando como horas normales.",
            state: "Puebla",
            status: ReportStatus::Resolved,
            category: "Práctica Laboral Injusta",
            severity: Severity::Medium,
            summary: "El reporte alega un incumplimiento específico del contrato colectivo relacionado con el pago de horas extra.",
            locations: &[],
            involved_parties: &[],
            key_dates: &["Horas extra"],
            timestamp: "2025-06-10T15:00:00Z",
            notes: &[
                ("Se revisó el contrato y las nóminas. Se confirma la discrepancia.", "Agente 003", "2025-06-11T10:00:00Z"),
                ("Se dialogó con la empresa. Aceptaron el error y realizarán el pago retroactivo. Se monitoreará.", "Agente 003", "2025-06-15T12:00:00Z"),
                ("Pago retroactivo confirmado. El problema ha sido corregido en el sistema de nómina.", "Agente 003", "2025-07-01T16:00:00Z"),
            ],
        },
        Sample {
            id: "CATEM-MNO345-C3D4",
            title: "Despido Injustificado",
            description: "Fui despedido sin justificación alguna después de haber solicitado una licencia médica. No me dieron liquidación conforme a la ley.",
            state: "Veracruz",
            status: ReportStatus::Closed,
            category: "Práctica Laboral Injusta",
            severity: Severity::High,
            summary: "El empleado reporta un despido presuntamente injustificado y la falta de una liquidación adecuada tras un evento protegido (licencia médica).",
            locations: &[],
            involved_parties: &[],
            key_dates: &["Después de solicitar licencia médica"],
            timestamp: "2025-05-01T18:00:00Z",
            notes: &[
                ("Se brindó asesoría legal al trabajador. Se inició proceso de conciliación.", "Agente 004", "2025-05-02T10:00:00Z"),
                ("Se llegó a un acuerdo satisfactorio para el trabajador en la junta de conciliación. Caso cerrado.", "Agente 004", "2025-05-20T13:00:00Z"),
            ],
        },
    ];

    samples
        .into_iter()
        .filter_map(Sample::into_report)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::regions::models::is_known_region;
    use crate::shared::validation::TRACKING_ID_REGEX;

    #[test]
    fn test_demo_reports_are_well_formed() {
        let reports = demo_reports();
        assert_eq!(reports.len(), 5);

        for report in &reports {
            assert!(TRACKING_ID_REGEX.is_match(&report.id), "{}", report.id);
            assert!(is_known_region(report.state.as_deref().unwrap()));
            assert!(report
                .internal_notes
                .windows(2)
                .all(|w| w[0].timestamp <= w[1].timestamp));
        }
    }

    #[test]
    fn test_closed_samples_have_resolution_times() {
        let closed: Vec<_> = demo_reports()
            .into_iter()
            .filter(|r| r.is_closed())
            .collect();
        assert_eq!(closed.len(), 2);
        assert!(closed.iter().all(|r| r.resolution_time().is_some()));
    }
}
