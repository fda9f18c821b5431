//! triaje-core
//!
//! Pure domain types for the clinical scoring and triage engine: the
//! observation record, the exam schema it is validated against, and the
//! derived-state models (scores, alerts, urgency, progress).
//! No I/O — this is the shared vocabulary of the triaje system.

pub mod error;
pub mod models;
pub mod observation;
pub mod schema;
