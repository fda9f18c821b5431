use std::fmt::Write as _;

use jiff::Zoned;

use triaje_core::models::alert::{Alert, Severity};
use triaje_core::models::patient::PatientIdentity;
use triaje_core::models::progress::ProgressState;
use triaje_core::models::score::ScoreResult;
use triaje_core::models::urgency::UrgencyLevel;
use triaje_core::observation::{FieldValue, ObservationRecord};
use triaje_core::schema::{ExamSchema, SectionSpec};

/// Everything the synthesizer reads. The timestamp is part of the
/// inputs so the output stays a pure function of this struct.
pub struct ReportInputs<'a> {
    pub schema: &'a ExamSchema,
    pub record: &'a ObservationRecord,
    pub scores: &'a [ScoreResult],
    pub alerts: &'a [Alert],
    pub urgency: UrgencyLevel,
    pub progress: &'a ProgressState,
    pub patient: &'a PatientIdentity,
    pub now: &'a Zoned,
}

/// Render the canonical clinical report: header, filled findings per
/// non-empty section (schema order), computed scores with
/// interpretation, fired alerts by severity, then plan selections.
///
/// Sections with no filled field are omitted entirely, never rendered
/// as empty headers. Scores that are still zero (untouched scales)
/// are likewise omitted.
pub fn synthesize(inputs: &ReportInputs) -> String {
    let mut out = String::new();

    render_header(&mut out, inputs);

    let (finding_sections, plan_sections): (Vec<_>, Vec<_>) = inputs
        .schema
        .sections
        .iter()
        .partition(|s| !s.id.starts_with("plan"));

    let filled_findings: Vec<&SectionSpec> = finding_sections
        .into_iter()
        .filter(|s| has_filled_field(s, inputs.record))
        .collect();

    if !filled_findings.is_empty() {
        out.push_str("\nHALLAZGOS\n");
        for section in filled_findings {
            render_section(&mut out, section, inputs.record);
        }
    }

    let scored: Vec<&ScoreResult> = inputs.scores.iter().filter(|s| s.value > 0.0).collect();
    if !scored.is_empty() {
        out.push_str("\nESCALAS E ÍNDICES\n");
        for score in scored {
            let _ = writeln!(
                out,
                "- {}: {:.1}/{} — {}. {}",
                score.name, score.value, score.max_value, score.classification,
                score.interpretation
            );
        }
    }

    if !inputs.alerts.is_empty() {
        out.push_str("\nALERTAS\n");
        for alert in inputs.alerts {
            let _ = writeln!(out, "[{}] {}", severity_tag(alert.severity), alert.title);
            let _ = writeln!(out, "  {}", alert.message);
            let _ = writeln!(out, "  Acción recomendada: {}", alert.recommended_action);
        }
    }

    let filled_plans: Vec<&SectionSpec> = plan_sections
        .into_iter()
        .filter(|s| has_filled_field(s, inputs.record))
        .collect();
    if !filled_plans.is_empty() {
        out.push_str("\nPLAN\n");
        for section in filled_plans {
            render_section(&mut out, section, inputs.record);
        }
    }

    out
}

fn render_header(out: &mut String, inputs: &ReportInputs) {
    let _ = writeln!(out, "INFORME DE EXPLORACIÓN — {}", inputs.schema.title);
    let _ = writeln!(
        out,
        "Fecha: {}",
        inputs.now.strftime("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(
        out,
        "Paciente: {} ({} años, {})",
        inputs.patient.name, inputs.patient.age, inputs.patient.gender
    );
    let _ = writeln!(out, "Urgencia: {}", inputs.urgency);
    let _ = writeln!(out, "Progreso: {}%", inputs.progress.overall_percent);
}

fn render_section(out: &mut String, section: &SectionSpec, record: &ObservationRecord) {
    let _ = writeln!(out, "\n[{}]", section.name);
    for field in &section.fields {
        if let Some(value) = record.get(&section.id, &field.id)
            && value.is_filled()
        {
            let _ = writeln!(out, "- {}: {}", field.name, format_value(value));
        }
    }
}

fn has_filled_field(section: &SectionSpec, record: &ObservationRecord) -> bool {
    section.fields.iter().any(|f| {
        record
            .get(&section.id, &f.id)
            .is_some_and(|v| v.is_filled())
    })
}

fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s.clone(),
        FieldValue::Number(n) => {
            if n.fract() == 0.0 {
                format!("{}", *n as i64)
            } else {
                format!("{n}")
            }
        }
        FieldValue::Flag(_) => "Sí".to_string(),
        FieldValue::Choices(choices) => {
            choices.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    }
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "CRÍTICA",
        Severity::Warning => "AVISO",
        Severity::Info => "INFO",
    }
}
