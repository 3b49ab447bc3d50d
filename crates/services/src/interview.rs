//! The question sequencer: one `Interview` per chat session.
//!
//! An interview owns the three per-session structures (answer record,
//! cursor, transcript) and advances through the fixed question sequence
//! for the chosen respondent kind. Each accepted user action appends
//! exactly one user turn (the raw input, echoed) and one bot turn (the
//! next question); malformed numeric input appends nothing and leaves
//! the cursor where it was.

use chrono::{DateTime, Utc};
use url::Url;

use ecobot_core::Clock;
use ecobot_core::footprint;
use ecobot_core::model::{
    AnswerRecord, CommuteMode, Cursor, FuelKind, HaulLength, RespondentKind, SessionId, Transcript,
};
use ecobot_core::share;
use ecobot_core::tips::{self, Tip, Verdict};

use crate::error::InterviewError;

const GREETING: &str = "Hi! I'm EcoBot 🌱 I'll help you calculate your carbon footprint. \
     Let's start by knowing if you're calculating for yourself or your company?";

//
// ─── OUTCOMES ─────────────────────────────────────────────────────────────────
//

/// Outcome of submitting one reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The answer was stored and the next question asked.
    Continue,
    /// The input was blank or not a non-negative number; nothing changed.
    Ignored,
    /// The final answer was stored; the session is ready to finalize.
    Complete,
}

/// Everything the results panel needs, produced once by `finalize`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsReport {
    pub kind: RespondentKind,
    /// Total annual footprint, tons CO2/year.
    pub total: f64,
    pub tips: Vec<Tip>,
    pub verdict: Verdict,
    pub share_url: Url,
}

//
// ─── INTERVIEW ────────────────────────────────────────────────────────────────
//

/// A single chat session walking the fixed question sequence.
pub struct Interview {
    id: SessionId,
    clock: Clock,
    answers: Option<AnswerRecord>,
    cursor: Cursor,
    transcript: Transcript,
    finalized: bool,
}

impl Interview {
    /// Starts a fresh session: all-default answers, cursor at the kind
    /// choice, and a transcript holding only the greeting.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        let mut transcript = Transcript::new();
        transcript.push_bot(GREETING, clock.now());
        Self {
            id: SessionId::new(),
            clock,
            answers: None,
            cursor: Cursor::ChooseKind,
            transcript,
            finalized: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn kind(&self) -> Option<RespondentKind> {
        self.answers.as_ref().map(AnswerRecord::kind)
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[must_use]
    pub fn answers(&self) -> Option<&AnswerRecord> {
        self.answers.as_ref()
    }

    /// True once the final answer has been accepted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cursor.is_terminal()
    }

    /// True once `finalize` has produced the results report.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Records the respondent kind and asks the first question.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::KindAlreadyChosen` if the session has
    /// moved past the kind choice.
    pub fn choose_kind(&mut self, kind: RespondentKind) -> Result<(), InterviewError> {
        if self.cursor != Cursor::ChooseKind {
            return Err(InterviewError::KindAlreadyChosen);
        }

        let now = self.clock.now();
        self.transcript.push_user(kind.label(), now);
        self.answers = Some(AnswerRecord::new(kind));
        self.cursor = Cursor::first(kind);

        let opening = match kind {
            RespondentKind::Individual => {
                "Great! Let's start with your electricity consumption. \
                 How many kWh do you consume per month?"
            }
            RespondentKind::Company => {
                "Perfect! Let's calculate your company's footprint. \
                 How many kWh does your company consume per month?"
            }
        };
        self.transcript.push_bot(opening, now);
        Ok(())
    }

    /// Handles one reply to the current question.
    ///
    /// Numeric questions accept any parseable non-negative finite
    /// number; anything else is silently ignored. Categorical questions
    /// match case-insensitive substrings and fall back to a default
    /// category, so every reply is accepted.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::KindNotChosen` before the kind choice
    /// and `InterviewError::Completed` once the session is at results.
    pub fn submit_reply(&mut self, raw: &str) -> Result<Submission, InterviewError> {
        match self.cursor {
            Cursor::ChooseKind => return Err(InterviewError::KindNotChosen),
            Cursor::Results => return Err(InterviewError::Completed),
            _ => {}
        }

        if self.cursor.is_categorical() {
            self.accept_categorical(raw)
        } else {
            self.accept_numeric(raw)
        }
    }

    /// Computes the total, announces it in the transcript, and returns
    /// the full results report. One-shot: a session finalizes once.
    ///
    /// # Errors
    ///
    /// Returns `InterviewError::NotFinished` before the final answer and
    /// `InterviewError::Completed` on a second call.
    pub fn finalize(&mut self) -> Result<ResultsReport, InterviewError> {
        if self.cursor != Cursor::Results {
            return Err(InterviewError::NotFinished);
        }
        if self.finalized {
            return Err(InterviewError::Completed);
        }
        let answers = self.answers.as_ref().ok_or(InterviewError::KindNotChosen)?;

        let (total, tips) = match answers {
            AnswerRecord::Individual(answers) => {
                (footprint::individual_total(answers), tips::individual_tips(answers))
            }
            AnswerRecord::Company(answers) => {
                (footprint::company_total(answers), tips::company_tips(answers))
            }
        };
        let kind = answers.kind();

        self.transcript.push_bot(
            format!(
                "🌍 Your annual carbon footprint is {total:.2} tons of CO2! \
                 Let me show you how to make it even better..."
            ),
            self.clock.now(),
        );
        self.finalized = true;

        Ok(ResultsReport {
            kind,
            total,
            tips,
            verdict: tips::verdict_for(total, kind),
            share_url: share::share_url(total),
        })
    }

    /// Full session reset: default answers, initial cursor, and a fresh
    /// transcript holding a single greeting (replaced, not cleared).
    pub fn reset(&mut self) {
        *self = Interview::new(self.clock);
    }

    fn accept_categorical(&mut self, raw: &str) -> Result<Submission, InterviewError> {
        let now = self.clock.now();
        // The record exists for every post-ChooseKind state.
        let record = self.answers.as_mut().ok_or(InterviewError::KindNotChosen)?;

        match (self.cursor, record) {
            (Cursor::TransportFuel, AnswerRecord::Individual(answers)) => {
                answers.set_transport_fuel(FuelKind::from_reply(raw));
            }
            (Cursor::FlightHaul, AnswerRecord::Individual(answers)) => {
                answers.set_flight_haul(HaulLength::from_reply(raw));
            }
            (Cursor::FlightHaul, AnswerRecord::Company(answers)) => {
                answers.set_flight_haul(HaulLength::from_reply(raw));
            }
            (Cursor::CommuteMode, AnswerRecord::Company(answers)) => {
                answers.set_commute_mode(CommuteMode::from_reply(raw));
            }
            _ => return Err(InterviewError::NotFinished),
        }

        self.transcript.push_user(raw, now);
        self.advance(now)
    }

    fn accept_numeric(&mut self, raw: &str) -> Result<Submission, InterviewError> {
        let trimmed = raw.trim();
        let Ok(value) = trimmed.parse::<f64>() else {
            return Ok(Submission::Ignored);
        };
        if !value.is_finite() || value < 0.0 {
            return Ok(Submission::Ignored);
        }

        let now = self.clock.now();
        let record = self.answers.as_mut().ok_or(InterviewError::KindNotChosen)?;

        // The diet question fills two fields under one cursor value.
        let mut diet_first_step = false;
        match (self.cursor, record) {
            (Cursor::Electricity, AnswerRecord::Individual(answers)) => {
                answers.set_electricity(value)?;
            }
            (Cursor::Electricity, AnswerRecord::Company(answers)) => {
                answers.set_electricity(value)?;
            }
            (Cursor::Lpg, AnswerRecord::Individual(answers)) => answers.set_lpg(value)?,
            (Cursor::Transport, AnswerRecord::Individual(answers)) => {
                answers.set_transport(value)?;
            }
            (Cursor::Flights, AnswerRecord::Individual(answers)) => answers.set_flights(value)?,
            (Cursor::Flights, AnswerRecord::Company(answers)) => answers.set_flights(value)?,
            (Cursor::Diet, AnswerRecord::Individual(answers)) => {
                if answers.veg_meals_week().is_none() {
                    answers.set_veg_meals(value)?;
                    diet_first_step = true;
                } else {
                    answers.set_nonveg_meals(value)?;
                }
            }
            (Cursor::Fuel, AnswerRecord::Company(answers)) => answers.set_fuel(value)?,
            (Cursor::Employees, AnswerRecord::Company(answers)) => answers.set_employees(value)?,
            (Cursor::CommuteDistance, AnswerRecord::Company(answers)) => {
                answers.set_commute_distance(value)?;
            }
            (Cursor::CommuteDays, AnswerRecord::Company(answers)) => {
                answers.set_commute_days(value)?;
            }
            (Cursor::Waste, AnswerRecord::Company(answers)) => answers.set_waste(value)?,
            _ => return Err(InterviewError::NotFinished),
        }

        self.transcript.push_user(trimmed, now);

        if diet_first_step {
            // Same cursor value, second sub-question.
            self.transcript
                .push_bot("How many non-vegetarian meals do you have per week?", now);
            return Ok(Submission::Continue);
        }

        self.advance(now)
    }

    fn advance(&mut self, now: DateTime<Utc>) -> Result<Submission, InterviewError> {
        let kind = self.kind().ok_or(InterviewError::KindNotChosen)?;
        let next = self.cursor.next(kind).ok_or(InterviewError::Completed)?;
        self.cursor = next;

        if next == Cursor::Results {
            // The result announcement is appended by `finalize`, after
            // the presentation delay.
            return Ok(Submission::Complete);
        }

        self.transcript.push_bot(Self::prompt_for(next, kind), now);
        Ok(Submission::Continue)
    }

    fn prompt_for(cursor: Cursor, kind: RespondentKind) -> &'static str {
        match cursor {
            Cursor::Lpg => "How many LPG gas cylinders do you consume per year?",
            Cursor::Transport => {
                "How many liters of fuel do you consume per month for transportation?"
            }
            Cursor::TransportFuel => {
                "What type of fuel do you use? Reply with \"petrol\" or \"diesel\""
            }
            Cursor::Flights => match kind {
                RespondentKind::Individual => "How many flights do you take per year?",
                RespondentKind::Company => {
                    "How many business flights does your company take per year?"
                }
            },
            Cursor::FlightHaul => {
                "Are these mostly \"short\" haul flights (domestic) or \"long\" haul flights (international)?"
            }
            Cursor::Diet => "Now about your diet! How many vegetarian meals do you have per week?",
            Cursor::Fuel => "How many liters of liquid fuels does your company consume per month?",
            Cursor::Employees => "How many employees work in your company?",
            Cursor::CommuteDistance => {
                "What's the average daily commute distance per employee (in km)?"
            }
            Cursor::CommuteMode => {
                "What's the primary mode of transport for employees? Reply with \"car\", \"bus\", or \"train\""
            }
            Cursor::CommuteDays => {
                "How many days per year do employees typically commute to the office?"
            }
            Cursor::Waste => "Finally, how much waste does your company generate per month (in kg)?",
            // Never prompted for: ChooseKind uses the greeting, Results
            // is announced by `finalize`, Electricity by `choose_kind`.
            Cursor::ChooseKind | Cursor::Electricity | Cursor::Results => "",
        }
    }
}

//
// ─── SERVICE ──────────────────────────────────────────────────────────────────
//

/// Hands out fresh interviews with a shared clock.
#[derive(Debug, Clone, Copy)]
pub struct InterviewService {
    clock: Clock,
}

impl InterviewService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Starts a new session with a single greeting turn.
    #[must_use]
    pub fn start_interview(&self) -> Interview {
        Interview::new(self.clock)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}
