use crate::infra::{AppState, AudioLibrary};
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use forecourt_radio::enquiry::{enquiry_router, EnquiryDesk, MailRelay};
use forecourt_radio::error::AppError;
use forecourt_radio::site::is_known_sample;
use serde_json::json;
use std::io;
use std::sync::Arc;
use tracing::debug;

pub(crate) fn with_site_routes<R>(desk: Arc<EnquiryDesk<R>>) -> axum::Router
where
    R: MailRelay + 'static,
{
    enquiry_router(desk)
        .route("/audio/:file", axum::routing::get(audio_endpoint))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn audio_endpoint(
    Extension(library): Extension<AudioLibrary>,
    Path(file): Path<String>,
) -> Result<Response, AppError> {
    let Some(path) = library.resolve(&file).filter(|_| is_known_sample(&file)) else {
        debug!(%file, "unknown audio sample requested");
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no audio sample named {file}"),
        )));
    };

    let bytes = tokio::fs::read(&path).await?;
    let content_type = mime_guess::from_path(&path).first_or_octet_stream();

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type.essence_str().to_string())],
        bytes,
    )
        .into_response())
}
