//! Enquiry submission: the per-instance flow, the form registry, the mail relay seam and the
//! HTTP endpoints that drive them.

pub mod desk;
pub mod emailjs;
pub mod flow;
pub mod form;
pub mod relay;
pub mod router;
pub mod status;

#[cfg(test)]
mod tests;

pub use desk::{EnquiryDesk, FormInstanceId, DEFAULT_FORM_CAPACITY};
pub use emailjs::EmailJsRelay;
pub use flow::{EnquiryFlow, FlowPhase, FormView, SubmitOutcome};
pub use form::{EnquiryForm, FormField};
pub use relay::{
    Delivery, DeliveryFailure, MailRelay, MissingRelaySettings, RelayCredentials, RelaySetting,
    RelaySetup,
};
pub use router::{enquiry_router, outcome_status};
pub use status::{FailureKind, StatusKind, SubmissionStatus};
