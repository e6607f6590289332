use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::form::EnquiryForm;
use super::relay::{Delivery, DeliveryFailure, MailRelay, RelayCredentials};
use crate::config::DEFAULT_EMAILJS_ENDPOINT;

/// Longest provider response body kept in a failure reason.
const MAX_DETAIL_LEN: usize = 512;

/// Mail relay backed by the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: BTreeMap<&'static str, String>,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

impl EmailJsRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for EmailJsRelay {
    fn default() -> Self {
        Self::new(DEFAULT_EMAILJS_ENDPOINT)
    }
}

#[async_trait]
impl MailRelay for EmailJsRelay {
    async fn send(&self, credentials: &RelayCredentials, form: &EnquiryForm) -> Delivery {
        let payload = SendRequest {
            service_id: credentials.service_id(),
            template_id: credentials.template_id(),
            user_id: credentials.public_key(),
            template_params: form.template_params(),
            access_token: credentials.access_token(),
        };

        debug!(endpoint = %self.endpoint, template = payload.template_id, "posting enquiry to relay");

        let response = match self.client.post(&self.endpoint).json(&payload).send().await {
            Ok(response) => response,
            Err(err) => return Delivery::Failed(DeliveryFailure::Transport(err.to_string())),
        };

        let status = response.status();
        if status.is_success() {
            return Delivery::Delivered;
        }

        let mut detail = response.text().await.unwrap_or_default();
        truncate_detail(&mut detail);

        Delivery::Failed(DeliveryFailure::Rejected {
            status: status.as_u16(),
            detail,
        })
    }
}

fn truncate_detail(detail: &mut String) {
    if detail.len() <= MAX_DETAIL_LEN {
        return;
    }
    let mut cut = MAX_DETAIL_LEN;
    while !detail.is_char_boundary(cut) {
        cut -= 1;
    }
    detail.truncate(cut);
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    async fn stub_relay(status: StatusCode, body: &'static str) -> (String, Arc<Mutex<Vec<Value>>>) {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = captured.clone();
        let app = Router::new().route(
            "/api/v1.0/email/send",
            post(move |Json(payload): Json<Value>| {
                let sink = sink.clone();
                async move {
                    sink.lock().expect("capture mutex").push(payload);
                    (status, body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub relay");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub relay serves");
        });

        (format!("http://{addr}/api/v1.0/email/send"), captured)
    }

    fn credentials() -> RelayCredentials {
        RelayCredentials::new("service_forecourt", "template_enquiry", "pk_live_123")
            .expect("complete credentials")
    }

    fn jo() -> EnquiryForm {
        EnquiryForm {
            name: "Jo".to_string(),
            email: "jo@site.com".to_string(),
            business: "Jo's Fuel".to_string(),
            phone: String::new(),
            message: "Interested in a quote".to_string(),
        }
    }

    #[tokio::test]
    async fn posts_template_params_and_reports_delivery() {
        let (endpoint, captured) = stub_relay(StatusCode::OK, "OK").await;
        let relay = EmailJsRelay::new(endpoint);

        let delivery = relay.send(&credentials(), &jo()).await;

        assert_eq!(delivery, Delivery::Delivered);
        let requests = captured.lock().expect("capture mutex");
        assert_eq!(requests.len(), 1);
        let body = &requests[0];
        assert_eq!(body["service_id"], "service_forecourt");
        assert_eq!(body["template_id"], "template_enquiry");
        assert_eq!(body["user_id"], "pk_live_123");
        assert_eq!(body["template_params"]["user_name"], "Jo");
        assert_eq!(body["template_params"]["user_business"], "Jo's Fuel");
        assert_eq!(body["template_params"]["user_phone"], "");
        assert!(body.get("accessToken").is_none());
    }

    #[tokio::test]
    async fn forwards_access_token_when_configured() {
        let (endpoint, captured) = stub_relay(StatusCode::OK, "OK").await;
        let relay = EmailJsRelay::new(endpoint);

        relay
            .send(&credentials().with_access_token("secret-token"), &jo())
            .await;

        let requests = captured.lock().expect("capture mutex");
        assert_eq!(requests[0]["accessToken"], "secret-token");
    }

    #[tokio::test]
    async fn maps_provider_errors_to_rejections() {
        let (endpoint, _) = stub_relay(StatusCode::BAD_REQUEST, "The public key is invalid").await;
        let relay = EmailJsRelay::new(endpoint);

        let delivery = relay.send(&credentials(), &jo()).await;

        assert_eq!(
            delivery,
            Delivery::Failed(DeliveryFailure::Rejected {
                status: 400,
                detail: "The public key is invalid".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn maps_unreachable_endpoint_to_transport_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind probe");
        let addr = listener.local_addr().expect("probe address");
        drop(listener);

        let relay = EmailJsRelay::new(format!("http://{addr}/api/v1.0/email/send"));
        let delivery = relay.send(&credentials(), &jo()).await;

        assert!(matches!(
            delivery,
            Delivery::Failed(DeliveryFailure::Transport(_))
        ));
    }

    #[test]
    fn truncates_long_details_on_char_boundary() {
        let mut detail = "é".repeat(MAX_DETAIL_LEN);
        truncate_detail(&mut detail);
        assert!(detail.len() <= MAX_DETAIL_LEN);
        assert!(detail.chars().all(|c| c == 'é'));
    }
}
