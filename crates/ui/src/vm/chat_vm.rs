use ecobot_core::model::{Cursor, RespondentKind, Speaker};
use services::{Interview, InterviewService, ResultsReport, Submission};

use crate::vm::time_fmt::format_clock_time;

//
// ─── INTENTS & INPUT MODES ────────────────────────────────────────────────────
//

/// One user action in the chat view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatIntent {
    ChooseKind(RespondentKind),
    /// A reply, whether typed into the numeric field or produced by a
    /// choice button; both run through the same submission path.
    Reply(String),
    Reset,
}

/// Which input affordance the view should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    KindButtons,
    Number,
    FuelButtons,
    HaulButtons,
    CommuteButtons,
    /// Final answer accepted, waiting out the presentation delay.
    AwaitingResults,
    Results,
}

/// A transcript turn, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnVm {
    pub speaker: Speaker,
    pub content: String,
    pub time_label: String,
}

//
// ─── CHAT VM ──────────────────────────────────────────────────────────────────
//

/// Wraps one interview session for the chat view.
pub struct ChatVm {
    interview: Interview,
    report: Option<ResultsReport>,
}

impl ChatVm {
    #[must_use]
    pub fn new(interviews: &InterviewService) -> Self {
        Self {
            interview: interviews.start_interview(),
            report: None,
        }
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match self.interview.cursor() {
            Cursor::ChooseKind => InputMode::KindButtons,
            Cursor::TransportFuel => InputMode::FuelButtons,
            Cursor::FlightHaul => InputMode::HaulButtons,
            Cursor::CommuteMode => InputMode::CommuteButtons,
            Cursor::Results => {
                if self.report.is_some() {
                    InputMode::Results
                } else {
                    InputMode::AwaitingResults
                }
            }
            _ => InputMode::Number,
        }
    }

    #[must_use]
    pub fn turns(&self) -> Vec<TurnVm> {
        self.interview
            .transcript()
            .turns()
            .iter()
            .map(|turn| TurnVm {
                speaker: turn.speaker,
                content: turn.content.clone(),
                time_label: format_clock_time(turn.timestamp),
            })
            .collect()
    }

    #[must_use]
    pub fn report(&self) -> Option<&ResultsReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn total_label(&self) -> Option<String> {
        self.report
            .as_ref()
            .map(|report| format!("{:.2} tons CO2/year", report.total))
    }

    /// Records the respondent kind; ignored if already chosen.
    pub fn choose_kind(&mut self, kind: RespondentKind) {
        let _ = self.interview.choose_kind(kind);
    }

    /// Submits a reply to the current question.
    ///
    /// Returns `Submission::Complete` when the final answer was just
    /// accepted, so the caller can schedule the delayed [`finalize`].
    ///
    /// [`finalize`]: ChatVm::finalize
    pub fn submit(&mut self, raw: &str) -> Submission {
        // The view never submits at ChooseKind or Results; treat a race
        // (double-click on Send) as a no-op rather than an error.
        self.interview.submit_reply(raw).unwrap_or(Submission::Ignored)
    }

    /// Computes and stores the results report. No-op if already done or
    /// if answers are still missing.
    pub fn finalize(&mut self) {
        if self.report.is_none()
            && let Ok(report) = self.interview.finalize()
        {
            self.report = Some(report);
        }
    }

    /// Full session reset: fresh greeting, defaults, no report.
    pub fn reset(&mut self) {
        self.interview.reset();
        self.report = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecobot_core::time::fixed_clock;
    use ecobot_core::tips::VerdictSeverity;

    fn vm() -> ChatVm {
        ChatVm::new(&InterviewService::new(fixed_clock()))
    }

    fn walk_individual(vm: &mut ChatVm) {
        vm.choose_kind(RespondentKind::Individual);
        for reply in ["300", "10", "50", "petrol", "10", "short", "5", "2"] {
            vm.submit(reply);
        }
    }

    #[test]
    fn input_mode_follows_cursor() {
        let mut vm = vm();
        assert_eq!(vm.input_mode(), InputMode::KindButtons);

        vm.choose_kind(RespondentKind::Individual);
        assert_eq!(vm.input_mode(), InputMode::Number);

        for reply in ["300", "10", "50"] {
            vm.submit(reply);
        }
        assert_eq!(vm.input_mode(), InputMode::FuelButtons);
        vm.submit("petrol");
        assert_eq!(vm.input_mode(), InputMode::Number);
        vm.submit("10");
        assert_eq!(vm.input_mode(), InputMode::HaulButtons);
    }

    #[test]
    fn complete_walk_awaits_then_produces_report() {
        let mut vm = vm();
        walk_individual(&mut vm);

        assert_eq!(vm.input_mode(), InputMode::AwaitingResults);
        assert!(vm.report().is_none());

        vm.finalize();
        assert_eq!(vm.input_mode(), InputMode::Results);
        let report = vm.report().expect("report after finalize");
        assert_eq!(report.verdict.severity, VerdictSeverity::Encourage);
        assert_eq!(vm.total_label().as_deref(), Some("7.64 tons CO2/year"));
    }

    #[test]
    fn finalize_is_idempotent_for_the_view() {
        let mut vm = vm();
        walk_individual(&mut vm);
        vm.finalize();
        let total = vm.report().unwrap().total;
        vm.finalize();
        assert_eq!(vm.report().unwrap().total, total);
    }

    #[test]
    fn reset_clears_report_and_transcript() {
        let mut vm = vm();
        walk_individual(&mut vm);
        vm.finalize();

        vm.reset();
        assert_eq!(vm.input_mode(), InputMode::KindButtons);
        assert!(vm.report().is_none());
        assert_eq!(vm.turns().len(), 1);
    }

    #[test]
    fn button_replies_share_the_text_path() {
        let mut vm = vm();
        vm.choose_kind(RespondentKind::Company);
        for reply in ["2000", "100", "50", "10"] {
            vm.submit(reply);
        }
        assert_eq!(vm.input_mode(), InputMode::CommuteButtons);
        // The "Train/Metro" button submits "train" just like typed text.
        assert_eq!(vm.submit("train"), Submission::Continue);
        assert_eq!(vm.input_mode(), InputMode::Number);
    }
}
