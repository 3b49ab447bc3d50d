#![forbid(unsafe_code)]

pub mod error;
pub mod interview;

pub use ecobot_core::Clock;

pub use error::InterviewError;
pub use interview::{Interview, InterviewService, ResultsReport, Submission};
