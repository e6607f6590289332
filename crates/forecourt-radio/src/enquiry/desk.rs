use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::flow::{EnquiryFlow, FormView, SubmitOutcome};
use super::form::EnquiryForm;
use super::relay::{MailRelay, RelaySetup};

pub const DEFAULT_FORM_CAPACITY: usize = 1024;

const MAX_ID_LEN: usize = 64;

/// Identifies one rendered copy of the enquiry form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormInstanceId(String);

static FORM_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_form_id() -> FormInstanceId {
    let seq = FORM_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let millis = Utc::now().timestamp_millis().max(0);
    FormInstanceId(format!("form-{millis:x}-{seq:06}"))
}

impl FormInstanceId {
    /// Accepts ids shaped like the ones this desk hands out.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.len() > MAX_ID_LEN {
            return None;
        }
        let rest = raw.strip_prefix("form-")?;
        let (stamp, seq) = rest.split_once('-')?;
        let stamp_ok = !stamp.is_empty() && stamp.chars().all(|c| c.is_ascii_hexdigit());
        let seq_ok = !seq.is_empty() && seq.chars().all(|c| c.is_ascii_digit());
        (stamp_ok && seq_ok).then(|| FormInstanceId(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

struct Registry<R> {
    flows: HashMap<FormInstanceId, Arc<EnquiryFlow<R>>>,
    order: VecDeque<FormInstanceId>,
}

/// Hands out form instances and routes each submission to its own flow.
///
/// Every instance enforces the one-in-flight rule on its own; separate visitors never block
/// each other. Once `capacity` instances exist the oldest idle ones are forgotten.
pub struct EnquiryDesk<R> {
    relay: Arc<R>,
    setup: Arc<RelaySetup>,
    capacity: usize,
    registry: Mutex<Registry<R>>,
}

impl<R> EnquiryDesk<R>
where
    R: MailRelay + 'static,
{
    pub fn new(relay: Arc<R>, setup: RelaySetup) -> Self {
        Self::with_capacity(relay, setup, DEFAULT_FORM_CAPACITY)
    }

    pub fn with_capacity(relay: Arc<R>, setup: RelaySetup, capacity: usize) -> Self {
        Self {
            relay,
            setup: Arc::new(setup),
            capacity: capacity.max(1),
            registry: Mutex::new(Registry {
                flows: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.setup.is_ready()
    }

    pub fn setup(&self) -> &RelaySetup {
        &self.setup
    }

    pub fn open_form(&self) -> FormInstanceId {
        let id = next_form_id();
        self.insert(id.clone());
        id
    }

    pub fn flow(&self, id: &FormInstanceId) -> Option<Arc<EnquiryFlow<R>>> {
        self.lock_registry().flows.get(id).cloned()
    }

    pub fn view(&self, id: &FormInstanceId) -> Option<FormView> {
        self.flow(id).map(|flow| flow.view())
    }

    pub fn len(&self) -> usize {
        self.lock_registry().flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Submit through the named instance. An absent id opens a fresh instance and an unknown one
    /// is registered on the spot.
    pub async fn submit(
        &self,
        id: Option<FormInstanceId>,
        form: Option<EnquiryForm>,
    ) -> (FormInstanceId, SubmitOutcome) {
        let (id, flow) = self.resolve(id);
        let outcome = flow.submit(form).await;
        (id, outcome)
    }

    fn resolve(&self, id: Option<FormInstanceId>) -> (FormInstanceId, Arc<EnquiryFlow<R>>) {
        let id = id.unwrap_or_else(next_form_id);
        let flow = self.insert(id.clone());
        (id, flow)
    }

    /// Returns the flow registered under `id`, registering a fresh one if there is none.
    fn insert(&self, id: FormInstanceId) -> Arc<EnquiryFlow<R>> {
        let mut registry = self.lock_registry();
        if let Some(flow) = registry.flows.get(&id) {
            return flow.clone();
        }

        debug!(form_instance = %id, "opening form instance");
        let flow = Arc::new(EnquiryFlow::new(self.relay.clone(), self.setup.clone()));
        registry.flows.insert(id.clone(), flow.clone());
        registry.order.push_back(id);
        self.evict(&mut registry);
        flow
    }

    fn evict(&self, registry: &mut Registry<R>) {
        let mut scanned = 0;
        while registry.flows.len() > self.capacity && scanned < registry.order.len() {
            let Some(oldest) = registry.order.pop_front() else {
                break;
            };
            let busy = registry
                .flows
                .get(&oldest)
                .is_some_and(|flow| flow.is_submitting());
            if busy {
                registry.order.push_back(oldest);
                scanned += 1;
            } else {
                registry.flows.remove(&oldest);
            }
        }
    }

    fn lock_registry(&self) -> MutexGuard<'_, Registry<R>> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
