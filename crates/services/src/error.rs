//! Shared error types for the services crate.

use thiserror::Error;

use ecobot_core::model::AnswerError;

/// Errors emitted by the interview sequencer.
///
/// None of these are shown to the respondent; the UI only drives the
/// sequencer through states where they cannot occur, and malformed
/// input is a silent no-op rather than an error.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum InterviewError {
    #[error("respondent kind has not been chosen yet")]
    KindNotChosen,
    #[error("respondent kind was already chosen")]
    KindAlreadyChosen,
    #[error("interview is already at the results stage")]
    Completed,
    #[error("interview has unanswered questions")]
    NotFinished,
    #[error(transparent)]
    Answer(#[from] AnswerError),
}
