//! Scoring engine for partnership openness assessments.
//!
//! The [`assessment`] module holds the questionnaire reference data and the pure
//! pipeline that turns raw answers into classified, annotated results. The
//! remaining modules carry the ambient pieces shared with the HTTP/CLI service.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
