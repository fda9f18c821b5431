use jiff::Zoned;
use tracing::info;

use triaje_core::models::evaluation::Evaluation;
use triaje_core::models::patient::PatientIdentity;
use triaje_core::models::score::ScoreResult;
use triaje_core::observation::{FieldValue, ObservationRecord};
use triaje_core::schema::ExamSchema;
use triaje_scales::{all_scales, Scale};

use crate::catalog;
use crate::error::EngineError;
use crate::notify::{AlertNotification, NotificationSink};
use crate::progress::compute_progress;
use crate::rules::{evaluate_alerts, AlertRule};
use crate::urgency::{aggregate, default_risk_floors, RiskFloor};

/// One exam session: the schema the host form follows, the patient
/// being examined, and the exclusively-owned observation record.
///
/// The record mutates only through [`ExamSession::update_field`]; the
/// host calls [`ExamSession::evaluate`] after each mutation and
/// renders the returned projection. Nothing here suspends or does
/// I/O.
pub struct ExamSession {
    schema: ExamSchema,
    patient: PatientIdentity,
    record: ObservationRecord,
    scales: Vec<Box<dyn Scale>>,
    rules: Vec<AlertRule>,
    floors: Vec<RiskFloor>,
    sink: Option<Box<dyn NotificationSink>>,
}

impl ExamSession {
    /// New session with the built-in scale registry, rule catalog and
    /// risk floors.
    pub fn new(schema: ExamSchema, patient: PatientIdentity) -> Self {
        Self {
            schema,
            patient,
            record: ObservationRecord::new(),
            scales: all_scales(),
            rules: catalog::default_rules(),
            floors: default_risk_floors(),
            sink: None,
        }
    }

    /// Replace the scale set, e.g. to restrict to one specialty.
    pub fn with_scales(mut self, scales: Vec<Box<dyn Scale>>) -> Self {
        self.scales = scales;
        self
    }

    /// Restrict to a named subset of the scale registry.
    pub fn with_scale_ids(mut self, ids: &[&str]) -> Result<Self, EngineError> {
        self.scales = triaje_scales::resolve_scales(ids).map_err(|e| match e {
            triaje_scales::error::ScaleError::UnknownScale(id) => EngineError::UnknownScale(id),
        })?;
        Ok(self)
    }

    pub fn with_rules(mut self, rules: Vec<AlertRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_risk_floors(mut self, floors: Vec<RiskFloor>) -> Self {
        self.floors = floors;
        self
    }

    pub fn with_notification_sink(mut self, sink: Box<dyn NotificationSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn schema(&self) -> &ExamSchema {
        &self.schema
    }

    pub fn record(&self) -> &ObservationRecord {
        &self.record
    }

    /// Validate and store one field. On rejection the prior value is
    /// retained and the error describes the rejected domain.
    pub fn update_field(
        &mut self,
        section_id: &str,
        field_id: &str,
        value: FieldValue,
    ) -> Result<(), EngineError> {
        self.record
            .set_field(&self.schema, section_id, field_id, value)?;
        Ok(())
    }

    /// Run the full derivation pipeline over the current record:
    /// scores, then alerts over the materialized score snapshot, then
    /// urgency and progress, then the report. `now` is injected so
    /// the output is a pure function of its inputs.
    ///
    /// Every fired alert is pushed to the configured sink on every
    /// call; see [`NotificationSink`] for the de-duplication contract.
    pub fn evaluate(&self, now: &Zoned) -> Evaluation {
        let scores: Vec<ScoreResult> =
            self.scales.iter().map(|s| s.compute(&self.record)).collect();
        let alerts = evaluate_alerts(&self.record, &scores, &self.rules);
        let urgency = aggregate(&alerts, &scores, &self.floors);
        let progress = compute_progress(&self.schema, &self.record);
        let report = triaje_report::synthesize(&triaje_report::ReportInputs {
            schema: &self.schema,
            record: &self.record,
            scores: &scores,
            alerts: &alerts,
            urgency,
            progress: &progress,
            patient: &self.patient,
            now,
        });

        if let Some(sink) = &self.sink {
            for alert in &alerts {
                let category = self
                    .rules
                    .iter()
                    .find(|r| r.id == alert.rule_id)
                    .map(|r| r.category.clone())
                    .unwrap_or_default();
                sink.notify(AlertNotification {
                    severity: alert.severity,
                    title: alert.title.clone(),
                    message: alert.message.clone(),
                    category,
                    timestamp: now.timestamp(),
                });
            }
            if !alerts.is_empty() {
                info!(count = alerts.len(), urgency = %urgency, "pushed alert notifications");
            }
        }

        Evaluation {
            scores,
            alerts,
            urgency,
            progress,
            report,
        }
    }
}
