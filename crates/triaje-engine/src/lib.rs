//! triaje-engine
//!
//! The derived layer of the examination tool: alert rule evaluation,
//! urgency aggregation, progress tracking and the single `evaluate()`
//! pipeline the host calls after every field mutation. Synchronous and
//! pure — persistence, transport and rendering live in the host.

pub mod catalog;
pub mod error;
pub mod notify;
pub mod progress;
pub mod rules;
pub mod session;
pub mod urgency;

pub use session::ExamSession;
