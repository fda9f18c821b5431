use serde::Serialize;

use triaje_core::models::alert::Severity;

/// Payload pushed to the host's notification center for each fired
/// alert.
#[derive(Debug, Clone, Serialize)]
pub struct AlertNotification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub category: String,
    pub timestamp: jiff::Timestamp,
}

/// Fire-and-forget collaborator. The engine never blocks on, retries,
/// or interprets anything from the receiving side; delivery is the
/// host's problem.
///
/// The engine keeps no memory across evaluations: every call to
/// [`ExamSession::evaluate`](crate::ExamSession::evaluate) pushes the
/// alert set fired by that evaluation, so an alert that stays active
/// is pushed again each time. Hosts that want one notification per
/// distinct alert must de-duplicate here, keyed on title or category.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: AlertNotification);
}
