use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::desk::{EnquiryDesk, FormInstanceId};
use super::flow::{FlowPhase, FormView, SubmitOutcome};
use super::form::EnquiryForm;
use super::relay::MailRelay;
use super::status::FailureKind;
use crate::site::LandingPage;

/// Router serving the landing page and both enquiry endpoints.
pub fn enquiry_router<R>(desk: Arc<EnquiryDesk<R>>) -> Router
where
    R: MailRelay + 'static,
{
    Router::new()
        .route("/", get(page_handler::<R>))
        .route("/enquiry", post(form_handler::<R>))
        .route("/api/v1/enquiries", post(submit_handler::<R>))
        .route(
            "/api/v1/enquiries/:form_instance",
            get(status_handler::<R>),
        )
        .with_state(desk)
}

/// Body accepted by both enquiry endpoints: the form fields plus the optional instance id.
#[derive(Debug, Default, Deserialize)]
pub struct EnquirySubmission {
    #[serde(default)]
    pub form_instance: Option<String>,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub user_business: String,
    #[serde(default)]
    pub user_phone: String,
    #[serde(default)]
    pub message: String,
}

impl EnquirySubmission {
    pub fn into_parts(self) -> (Option<FormInstanceId>, EnquiryForm) {
        let id = self
            .form_instance
            .as_deref()
            .and_then(FormInstanceId::parse);
        let form = EnquiryForm {
            name: self.user_name,
            email: self.user_email,
            business: self.user_business,
            phone: self.user_phone,
            message: self.message,
        };
        (id, form)
    }
}

/// HTTP status reported for a submission outcome.
pub fn outcome_status(outcome: &SubmitOutcome) -> StatusCode {
    match outcome {
        SubmitOutcome::Ignored(_) => StatusCode::CONFLICT,
        SubmitOutcome::Settled(view) => match view.phase {
            FlowPhase::Failed(FailureKind::NotReady) => StatusCode::BAD_REQUEST,
            FlowPhase::Failed(FailureKind::SetupIncomplete) => StatusCode::SERVICE_UNAVAILABLE,
            FlowPhase::Failed(FailureKind::Delivery) => StatusCode::BAD_GATEWAY,
            FlowPhase::Idle | FlowPhase::Submitting | FlowPhase::Succeeded => StatusCode::OK,
        },
    }
}

pub(crate) async fn page_handler<R>(State(desk): State<Arc<EnquiryDesk<R>>>) -> Response
where
    R: MailRelay + 'static,
{
    let id = desk.open_form();
    let view = FormView::idle();
    render_page(StatusCode::OK, &id, &view)
}

pub(crate) async fn form_handler<R>(
    State(desk): State<Arc<EnquiryDesk<R>>>,
    submission: Result<Form<EnquirySubmission>, FormRejection>,
) -> Response
where
    R: MailRelay + 'static,
{
    let (id, form) = split_submission(submission.map(|Form(body)| body));
    let (id, outcome) = desk.submit(id, form).await;
    render_page(outcome_status(&outcome), &id, outcome.view())
}

pub(crate) async fn submit_handler<R>(
    State(desk): State<Arc<EnquiryDesk<R>>>,
    submission: Result<Json<EnquirySubmission>, JsonRejection>,
) -> Response
where
    R: MailRelay + 'static,
{
    let (id, form) = split_submission(submission.map(|Json(body)| body));
    let (id, outcome) = desk.submit(id, form).await;
    let status = outcome_status(&outcome);
    (status, Json(view_payload(&id, outcome.view()))).into_response()
}

pub(crate) async fn status_handler<R>(
    State(desk): State<Arc<EnquiryDesk<R>>>,
    Path(form_instance): Path<String>,
) -> Response
where
    R: MailRelay + 'static,
{
    let view = FormInstanceId::parse(&form_instance)
        .and_then(|id| desk.view(&id).map(|view| (id, view)));

    match view {
        Some((id, view)) => (StatusCode::OK, Json(view_payload(&id, &view))).into_response(),
        None => {
            let payload = json!({
                "error": "form instance not found",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

/// An unreadable body leaves the flow without a form snapshot.
fn split_submission<E>(
    submission: Result<EnquirySubmission, E>,
) -> (Option<FormInstanceId>, Option<EnquiryForm>)
where
    E: std::fmt::Display,
{
    match submission {
        Ok(body) => {
            let (id, form) = body.into_parts();
            (id, Some(form))
        }
        Err(rejection) => {
            debug!(%rejection, "enquiry body could not be read");
            (None, None)
        }
    }
}

fn view_payload(id: &FormInstanceId, view: &FormView) -> serde_json::Value {
    json!({
        "form_instance": id,
        "status": view.status,
        "submitting": view.submitting,
        "fields": view.fields,
    })
}

fn render_page(status: StatusCode, id: &FormInstanceId, view: &FormView) -> Response {
    let html = LandingPage::new(Some(id), view).to_string();
    (
        status,
        [(header::CONTENT_TYPE, mime::TEXT_HTML_UTF_8.as_ref())],
        html,
    )
        .into_response()
}
