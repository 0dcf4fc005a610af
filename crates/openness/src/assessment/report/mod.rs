pub mod chart;
pub mod export;
mod summary;
pub mod views;

pub use summary::AssessmentReport;
