//! triaje-scales
//!
//! Clinical score calculators. Pure data — each scale is a declarative
//! weight/threshold table over a fixed field subset, with a clamp range
//! and classification bands. The engine stays specialty-agnostic; only
//! the tables differ per instrument.

pub mod error;
pub mod scales;
pub mod scoring;

use triaje_core::models::score::ScoreResult;
use triaje_core::observation::ObservationRecord;

/// Trait implemented by each clinical scoring instrument.
///
/// `compute` is pure and total: it never fails, and fields absent from
/// the record contribute zero. The returned value is always clamped
/// into `[0, max_value]`.
pub trait Scale: Send + Sync {
    /// Unique identifier for this scale (e.g., "pasi", "glasgow_coma").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PASI", "Escala de Glasgow").
    fn name(&self) -> &str;

    /// The published maximum of this scale.
    fn max_value(&self) -> f64;

    /// Score the record against this scale's table.
    fn compute(&self, record: &ObservationRecord) -> ScoreResult;
}

/// Return all registered scales.
pub fn all_scales() -> Vec<Box<dyn Scale>> {
    vec![
        Box::new(scales::pasi::pasi()),
        Box::new(scales::scorad::scorad()),
        Box::new(scales::dlqi::dlqi()),
        Box::new(scales::risk::cardiovascular()),
        Box::new(scales::risk::melanoma()),
        Box::new(scales::risk::sti()),
        Box::new(scales::risk::malignancy()),
        Box::new(scales::risk::sleep_apnea()),
        Box::new(scales::risk::dysphagia()),
        Box::new(scales::risk::stroke()),
        Box::new(scales::glasgow::glasgow_coma()),
        Box::new(scales::nihss::nihss()),
        Box::new(scales::homa_ir::homa_ir()),
        Box::new(scales::imc::imc()),
        Box::new(scales::child_pugh::child_pugh()),
        Box::new(scales::blatchford::glasgow_blatchford()),
        Box::new(scales::rockall::rockall()),
    ]
}

/// Look up a scale by ID.
pub fn get_scale(id: &str) -> Option<Box<dyn Scale>> {
    all_scales().into_iter().find(|s| s.id() == id)
}

/// Resolve a host-configured list of scale ids, e.g. one specialty's
/// subset of the registry.
pub fn resolve_scales(ids: &[&str]) -> Result<Vec<Box<dyn Scale>>, error::ScaleError> {
    ids.iter()
        .map(|id| get_scale(id).ok_or_else(|| error::ScaleError::UnknownScale(id.to_string())))
        .collect()
}
