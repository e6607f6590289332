use async_trait::async_trait;
use forecourt_radio::enquiry::{
    Delivery, EnquiryForm, MailRelay, MissingRelaySettings, RelayCredentials, RelaySetup,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Directory the audio samples are served from.
#[derive(Debug, Clone)]
pub(crate) struct AudioLibrary {
    root: Arc<PathBuf>,
}

impl AudioLibrary {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    /// Resolve a bare file name inside the library. Anything that could leave the directory
    /// resolves to `None`.
    pub(crate) fn resolve(&self, file: &str) -> Option<PathBuf> {
        let plain = !file.is_empty()
            && !file.starts_with('.')
            && !file.contains(['/', '\\', '\0'])
            && Path::new(file).file_name().is_some_and(|name| name == file);
        plain.then(|| self.root.join(file))
    }
}

/// Relay that accepts every enquiry without sending it anywhere.
#[derive(Debug, Default)]
pub(crate) struct RecordingRelay {
    sent: Mutex<Vec<EnquiryForm>>,
}

impl RecordingRelay {
    pub(crate) fn sent(&self) -> Vec<EnquiryForm> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Placeholder credentials so a dry run does not need relay settings.
    pub(crate) fn setup() -> RelaySetup {
        let credentials: Result<RelayCredentials, MissingRelaySettings> =
            RelayCredentials::new("dry-run", "dry-run", "dry-run");
        RelaySetup::from(credentials)
    }
}

#[async_trait]
impl MailRelay for RecordingRelay {
    async fn send(&self, credentials: &RelayCredentials, form: &EnquiryForm) -> Delivery {
        info!(
            service = credentials.service_id(),
            template = credentials.template_id(),
            "dry run: enquiry recorded, not sent"
        );
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(form.clone());
        Delivery::Delivered
    }
}
