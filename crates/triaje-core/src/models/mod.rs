pub mod alert;
pub mod evaluation;
pub mod patient;
pub mod progress;
pub mod score;
pub mod urgency;
