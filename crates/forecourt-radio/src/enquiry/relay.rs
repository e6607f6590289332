use std::fmt;

use async_trait::async_trait;

use super::form::EnquiryForm;

/// The three settings a mail relay cannot work without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaySetting {
    ServiceId,
    TemplateId,
    PublicKey,
}

impl RelaySetting {
    pub fn env_var(self) -> &'static str {
        match self {
            RelaySetting::ServiceId => "EMAILJS_SERVICE_ID",
            RelaySetting::TemplateId => "EMAILJS_TEMPLATE_ID",
            RelaySetting::PublicKey => "EMAILJS_PUBLIC_KEY",
        }
    }
}

impl fmt::Display for RelaySetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_var())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("mail relay settings missing: {}", format_missing(.missing))]
pub struct MissingRelaySettings {
    pub missing: Vec<RelaySetting>,
}

fn format_missing(missing: &[RelaySetting]) -> String {
    missing
        .iter()
        .map(|setting| setting.env_var())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validated relay credentials. Construction fails if any required value is blank.
#[derive(Clone, PartialEq, Eq)]
pub struct RelayCredentials {
    service_id: String,
    template_id: String,
    public_key: String,
    access_token: Option<String>,
}

impl RelayCredentials {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Result<Self, MissingRelaySettings> {
        let service_id = service_id.into();
        let template_id = template_id.into();
        let public_key = public_key.into();

        let missing: Vec<RelaySetting> = [
            (RelaySetting::ServiceId, &service_id),
            (RelaySetting::TemplateId, &template_id),
            (RelaySetting::PublicKey, &public_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(setting, _)| setting)
        .collect();

        if !missing.is_empty() {
            return Err(MissingRelaySettings { missing });
        }

        Ok(Self {
            service_id,
            template_id,
            public_key,
            access_token: None,
        })
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

impl fmt::Debug for RelayCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayCredentials")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .finish_non_exhaustive()
    }
}

/// Outcome of resolving relay settings once at startup.
#[derive(Debug, Clone)]
pub enum RelaySetup {
    Ready(RelayCredentials),
    Incomplete(MissingRelaySettings),
}

impl RelaySetup {
    pub fn is_ready(&self) -> bool {
        matches!(self, RelaySetup::Ready(_))
    }
}

impl From<Result<RelayCredentials, MissingRelaySettings>> for RelaySetup {
    fn from(value: Result<RelayCredentials, MissingRelaySettings>) -> Self {
        match value {
            Ok(credentials) => RelaySetup::Ready(credentials),
            Err(missing) => RelaySetup::Incomplete(missing),
        }
    }
}

/// Result of handing an enquiry to the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    Failed(DeliveryFailure),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryFailure {
    #[error("relay transport failed: {0}")]
    Transport(String),
    #[error("relay rejected the enquiry with status {status}: {detail}")]
    Rejected { status: u16, detail: String },
}

/// Outbound hook that delivers an enquiry as an email.
///
/// Implementations make a single attempt; the flow never retries.
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(&self, credentials: &RelayCredentials, form: &EnquiryForm) -> Delivery;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lists_every_blank_setting() {
        let err = RelayCredentials::new("", "template_enquiry", " ").expect_err("blank values");
        assert_eq!(
            err.missing,
            vec![RelaySetting::ServiceId, RelaySetting::PublicKey]
        );
        assert_eq!(
            err.to_string(),
            "mail relay settings missing: EMAILJS_SERVICE_ID, EMAILJS_PUBLIC_KEY"
        );
    }

    #[test]
    fn debug_output_omits_keys() {
        let credentials = RelayCredentials::new("service", "template", "pk_live_123")
            .expect("complete")
            .with_access_token("secret");
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("pk_live_123"));
        assert!(!rendered.contains("secret"));
    }
}
