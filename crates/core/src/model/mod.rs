mod answers;
mod cursor;
mod ids;
mod respondent;
mod transcript;

pub use answers::{AnswerError, AnswerRecord, CompanyAnswers, IndividualAnswers};
pub use cursor::Cursor;
pub use ids::SessionId;
pub use respondent::{CommuteMode, FuelKind, HaulLength, RespondentKind};
pub use transcript::{Speaker, Transcript, Turn};
