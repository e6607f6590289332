use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{error, info, warn};

use super::form::EnquiryForm;
use super::relay::{Delivery, MailRelay, RelaySetup};
use super::status::{submit_label, FailureKind, SubmissionStatus, DELIVERED_MESSAGE};

/// Lifecycle of one form instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlowPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(FailureKind),
}

/// What the presentation layer renders for a form instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub status: SubmissionStatus,
    pub submitting: bool,
    pub fields: EnquiryForm,
    #[serde(skip)]
    pub phase: FlowPhase,
}

impl FormView {
    pub fn idle() -> Self {
        FlowState::default().view()
    }

    pub fn submit_label(&self) -> &'static str {
        submit_label(self.submitting)
    }
}

/// Result of a submit-intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The attempt ran to a final state.
    Settled(FormView),
    /// A submission was already in flight; nothing was sent.
    Ignored(FormView),
}

impl SubmitOutcome {
    pub fn view(&self) -> &FormView {
        match self {
            SubmitOutcome::Settled(view) | SubmitOutcome::Ignored(view) => view,
        }
    }

    pub fn into_view(self) -> FormView {
        match self {
            SubmitOutcome::Settled(view) | SubmitOutcome::Ignored(view) => view,
        }
    }
}

#[derive(Debug, Default)]
struct FlowState {
    phase: FlowPhase,
    status: SubmissionStatus,
    fields: EnquiryForm,
}

impl FlowState {
    fn view(&self) -> FormView {
        FormView {
            status: self.status.clone(),
            submitting: self.phase == FlowPhase::Submitting,
            fields: self.fields.clone(),
            phase: self.phase,
        }
    }

    fn fail(&mut self, kind: FailureKind) {
        self.phase = FlowPhase::Failed(kind);
        self.status = SubmissionStatus::error(kind.message());
    }
}

/// Submission handler for a single form instance.
///
/// At most one submission is in flight at a time: the in-flight check and the move to
/// `Submitting` happen under one lock, and the lock is released before the relay is awaited.
pub struct EnquiryFlow<R> {
    relay: Arc<R>,
    setup: Arc<RelaySetup>,
    state: Mutex<FlowState>,
}

impl<R> EnquiryFlow<R>
where
    R: MailRelay + 'static,
{
    pub fn new(relay: Arc<R>, setup: Arc<RelaySetup>) -> Self {
        Self {
            relay,
            setup,
            state: Mutex::new(FlowState::default()),
        }
    }

    pub fn view(&self) -> FormView {
        self.lock_state().view()
    }

    pub fn is_submitting(&self) -> bool {
        self.lock_state().phase == FlowPhase::Submitting
    }

    /// Run one submission attempt with the given field snapshot.
    ///
    /// `None` means no form was available to read.
    pub async fn submit(&self, form: Option<EnquiryForm>) -> SubmitOutcome {
        let (credentials, form) = {
            let mut state = self.lock_state();
            if state.phase == FlowPhase::Submitting {
                return SubmitOutcome::Ignored(state.view());
            }

            state.status = SubmissionStatus::idle();
            state.phase = FlowPhase::Submitting;

            let Some(form) = form else {
                state.fail(FailureKind::NotReady);
                return SubmitOutcome::Settled(state.view());
            };
            state.fields = form.clone();

            match self.setup.as_ref() {
                RelaySetup::Ready(credentials) => (credentials, form),
                RelaySetup::Incomplete(missing) => {
                    error!(%missing, "enquiry not sent: mail relay setup is incomplete");
                    state.fail(FailureKind::SetupIncomplete);
                    return SubmitOutcome::Settled(state.view());
                }
            }
        };

        let delivery = self.relay.send(credentials, &form).await;

        let mut state = self.lock_state();
        match delivery {
            Delivery::Delivered => {
                info!("enquiry delivered");
                state.phase = FlowPhase::Succeeded;
                state.status = SubmissionStatus::success(DELIVERED_MESSAGE);
                state.fields = EnquiryForm::default();
            }
            Delivery::Failed(reason) => {
                warn!(%reason, "enquiry delivery failed");
                state.fail(FailureKind::Delivery);
            }
        }

        SubmitOutcome::Settled(state.view())
    }

    fn lock_state(&self) -> MutexGuard<'_, FlowState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
