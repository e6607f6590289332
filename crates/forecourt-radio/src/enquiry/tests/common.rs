use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;
use tokio::sync::{Notify, Semaphore};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use crate::enquiry::form::EnquiryForm;
use crate::enquiry::relay::{
    Delivery, DeliveryFailure, MailRelay, MissingRelaySettings, RelayCredentials, RelaySetting,
    RelaySetup,
};
use crate::enquiry::{enquiry_router, EnquiryDesk};

pub(super) fn jo() -> EnquiryForm {
    EnquiryForm {
        name: "Jo".to_string(),
        email: "jo@site.com".to_string(),
        business: "Jo's Fuel".to_string(),
        phone: String::new(),
        message: "Interested in a quote".to_string(),
    }
}

pub(super) fn credentials() -> RelayCredentials {
    RelayCredentials::new("service_forecourt", "template_enquiry", "pk_live_123")
        .expect("complete credentials")
}

pub(super) fn ready_setup() -> RelaySetup {
    RelaySetup::Ready(credentials())
}

pub(super) fn incomplete_setup() -> RelaySetup {
    RelaySetup::Incomplete(MissingRelaySettings {
        missing: vec![RelaySetting::TemplateId],
    })
}

pub(super) fn rejected() -> Delivery {
    Delivery::Failed(DeliveryFailure::Rejected {
        status: 412,
        detail: "template not found".to_string(),
    })
}

/// Collects formatted log lines emitted on the current thread while the guard is alive.
#[derive(Clone, Default)]
pub(super) struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub(super) fn install() -> (Self, DefaultGuard) {
        let logs = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    pub(super) fn contents(&self) -> String {
        let buffer = self.buffer.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Relay that answers every call with a fixed outcome and remembers what it was sent.
pub(super) struct ScriptedRelay {
    outcome: Delivery,
    sent: Mutex<Vec<EnquiryForm>>,
}

impl ScriptedRelay {
    pub(super) fn delivering() -> Self {
        Self::answering(Delivery::Delivered)
    }

    pub(super) fn answering(outcome: Delivery) -> Self {
        Self {
            outcome,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn sent(&self) -> Vec<EnquiryForm> {
        self.sent.lock().expect("relay mutex poisoned").clone()
    }

    pub(super) fn calls(&self) -> usize {
        self.sent.lock().expect("relay mutex poisoned").len()
    }
}

#[async_trait]
impl MailRelay for ScriptedRelay {
    async fn send(&self, _credentials: &RelayCredentials, form: &EnquiryForm) -> Delivery {
        self.sent
            .lock()
            .expect("relay mutex poisoned")
            .push(form.clone());
        self.outcome.clone()
    }
}

/// Relay that parks every call until the test releases it.
pub(super) struct GatedRelay {
    outcome: Delivery,
    calls: AtomicUsize,
    pub(super) started: Notify,
    gate: Semaphore,
}

impl GatedRelay {
    pub(super) fn answering(outcome: Delivery) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            started: Notify::new(),
            gate: Semaphore::new(0),
        }
    }

    /// Lets `count` parked calls return.
    pub(super) fn release(&self, count: usize) {
        self.gate.add_permits(count);
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MailRelay for GatedRelay {
    async fn send(&self, _credentials: &RelayCredentials, _form: &EnquiryForm) -> Delivery {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();
        self.gate
            .acquire()
            .await
            .expect("gate semaphore closed")
            .forget();
        self.outcome.clone()
    }
}

pub(super) fn desk_with<R>(relay: Arc<R>, setup: RelaySetup) -> Arc<EnquiryDesk<R>>
where
    R: MailRelay + 'static,
{
    Arc::new(EnquiryDesk::new(relay, setup))
}

pub(super) fn router_with<R>(relay: Arc<R>, setup: RelaySetup) -> axum::Router
where
    R: MailRelay + 'static,
{
    enquiry_router(desk_with(relay, setup))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
