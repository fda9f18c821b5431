//! triaje-report
//!
//! Deterministic plain-text report synthesis from the derived exam
//! state. Pure given its inputs, including an explicitly injected
//! timestamp — it never reads the wall clock.

pub mod render;

pub use render::{synthesize, ReportInputs};
