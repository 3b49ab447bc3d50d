use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use ecobot_core::model::RespondentKind;
use services::InterviewService;

/// What the UI needs from the application composition root.
pub trait UiApp: Send + Sync {
    fn interviews(&self) -> Arc<InterviewService>;

    /// Respondent kind to preselect when the chat first opens, if any.
    fn preselected_kind(&self) -> Option<RespondentKind>;
}

#[derive(Clone)]
pub struct AppContext {
    interviews: Arc<InterviewService>,

    preselected_kind_configured: Option<RespondentKind>,
    preselect_once: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let preselected_kind_configured = app.preselected_kind();

        Self {
            interviews: app.interviews(),
            preselected_kind_configured,
            preselect_once: Arc::new(AtomicBool::new(preselected_kind_configured.is_some())),
        }
    }

    #[must_use]
    pub fn interviews(&self) -> Arc<InterviewService> {
        Arc::clone(&self.interviews)
    }

    /// One-shot: the preselected kind is consumed by the first chat mount,
    /// so a later "Calculate Again" starts from the kind question.
    #[must_use]
    pub fn take_preselected_kind(&self) -> Option<RespondentKind> {
        if self.preselect_once.swap(false, Ordering::AcqRel) {
            self.preselected_kind_configured
        } else {
            None
        }
    }

    /// The configured value (not the one-shot value). Useful for diagnostics/UI.
    #[must_use]
    pub fn preselected_kind_configured(&self) -> Option<RespondentKind> {
        self.preselected_kind_configured
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
