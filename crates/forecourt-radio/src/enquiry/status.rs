use serde::{Deserialize, Serialize};

pub const NOT_READY_MESSAGE: &str = "Form is not ready. Please try again.";
pub const SETUP_INCOMPLETE_MESSAGE: &str = "Email setup is incomplete. Please try again later.";
pub const DELIVERED_MESSAGE: &str = "Thanks for your enquiry! We'll get back to you shortly.";
pub const DELIVERY_FAILED_MESSAGE: &str =
    "Something went wrong while sending your enquiry. Please try again.";

pub const SUBMIT_LABEL: &str = "Send enquiry";
pub const SUBMITTING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Idle,
    Success,
    Error,
}

impl StatusKind {
    pub fn label(self) -> &'static str {
        match self {
            StatusKind::Idle => "idle",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// Status line shown under the enquiry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl SubmissionStatus {
    pub fn idle() -> Self {
        Self {
            kind: StatusKind::Idle,
            message: String::new(),
        }
    }

    pub fn success(message: &str) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.to_string(),
        }
    }

    /// Nothing is rendered for an empty message.
    pub fn is_visible(&self) -> bool {
        !self.message.is_empty()
    }
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self::idle()
    }
}

/// Why an attempt ended in the failed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotReady,
    SetupIncomplete,
    Delivery,
}

impl FailureKind {
    pub fn message(self) -> &'static str {
        match self {
            FailureKind::NotReady => NOT_READY_MESSAGE,
            FailureKind::SetupIncomplete => SETUP_INCOMPLETE_MESSAGE,
            FailureKind::Delivery => DELIVERY_FAILED_MESSAGE,
        }
    }
}

pub fn submit_label(submitting: bool) -> &'static str {
    if submitting {
        SUBMITTING_LABEL
    } else {
        SUBMIT_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_kind_in_lowercase() {
        let json = serde_json::to_value(SubmissionStatus::error(NOT_READY_MESSAGE))
            .expect("status serializes");
        assert_eq!(json["kind"], "error");
        assert_eq!(json["message"], NOT_READY_MESSAGE);
    }

    #[test]
    fn idle_status_is_hidden() {
        assert!(!SubmissionStatus::idle().is_visible());
        assert!(SubmissionStatus::success(DELIVERED_MESSAGE).is_visible());
    }
}
