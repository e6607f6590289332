//! End-to-end enquiry submission through the public router, the EmailJS relay and a stub
//! provider listening on a local port.

mod common {
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::Value;

    use forecourt_radio::enquiry::{EmailJsRelay, EnquiryDesk, RelayCredentials, RelaySetup};

    pub(super) type Captured = Arc<Mutex<Vec<Value>>>;

    /// Starts a fake provider answering every send with `status`.
    pub(super) async fn stub_provider(status: StatusCode) -> (String, Captured) {
        let captured: Captured = Arc::new(Mutex::new(Vec::new()));
        let sink = captured.clone();
        let app = Router::new().route(
            "/api/v1.0/email/send",
            post(move |Json(payload): Json<Value>| {
                let sink = sink.clone();
                async move {
                    sink.lock().expect("capture mutex poisoned").push(payload);
                    (status, "OK")
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub provider");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub provider serves");
        });

        (format!("http://{addr}/api/v1.0/email/send"), captured)
    }

    pub(super) fn desk(endpoint: String) -> Arc<EnquiryDesk<EmailJsRelay>> {
        let credentials =
            RelayCredentials::new("service_forecourt", "template_enquiry", "pk_live_123")
                .expect("complete credentials");
        Arc::new(EnquiryDesk::new(
            Arc::new(EmailJsRelay::new(endpoint)),
            RelaySetup::Ready(credentials),
        ))
    }

    pub(super) fn form_post(body: String) -> Request<Body> {
        Request::post("/enquiry")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("request builds")
    }

    pub(super) async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }
}

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use common::*;
use forecourt_radio::enquiry::status::{DELIVERED_MESSAGE, DELIVERY_FAILED_MESSAGE};
use forecourt_radio::enquiry::{enquiry_router, FlowPhase, FormField};
use forecourt_radio::site::escape_html;

const JO_FORM: &str = "user_name=Jo&user_email=jo%40site.com&user_business=Jo%27s+Fuel&user_phone=&message=Interested+in+a+quote";

#[tokio::test]
async fn jo_enquiry_is_delivered_and_the_form_resets() {
    let (endpoint, captured) = stub_provider(StatusCode::OK).await;
    let desk = desk(endpoint);
    let router = enquiry_router(desk.clone());

    let page = router
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).expect("request builds"))
        .await
        .expect("page renders");
    assert_eq!(page.status(), StatusCode::OK);
    let html = body_text(page).await;
    let marker = "name=\"form_instance\" value=\"";
    let start = html.find(marker).expect("hidden instance field") + marker.len();
    let end = start + html[start..].find('"').expect("closing quote");
    let form_instance = html[start..end].to_string();

    let response = router
        .oneshot(form_post(format!("form_instance={form_instance}&{JO_FORM}")))
        .await
        .expect("submission runs");

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(&escape_html(DELIVERED_MESSAGE)));
    assert!(html.contains("status status-success"));
    for field in FormField::ALL {
        if field.input_type().is_some() {
            assert!(
                html.contains(&format!("name=\"{}\"", field.input_name())),
                "{} rendered",
                field.input_name()
            );
        }
    }
    assert!(!html.contains("value=\"Jo\""));
    assert!(html.contains("rows=\"4\" placeholder="));

    let requests = captured.lock().expect("capture mutex poisoned");
    assert_eq!(requests.len(), 1);
    let params = &requests[0]["template_params"];
    assert_eq!(params["user_name"], "Jo");
    assert_eq!(params["user_email"], "jo@site.com");
    assert_eq!(params["user_business"], "Jo's Fuel");
    assert_eq!(params["user_phone"], "");
    assert_eq!(params["message"], "Interested in a quote");
    assert_eq!(requests[0]["user_id"], "pk_live_123");
    drop(requests);

    let id = forecourt_radio::enquiry::FormInstanceId::parse(&form_instance).expect("valid id");
    let view = desk.view(&id).expect("instance registered");
    assert_eq!(view.phase, FlowPhase::Succeeded);
    assert!(view.fields.is_empty());
}

#[tokio::test]
async fn provider_rejection_keeps_the_typed_values() {
    let (endpoint, captured) = stub_provider(StatusCode::UNAUTHORIZED).await;
    let router = enquiry_router(desk(endpoint));

    let response = router
        .oneshot(form_post(JO_FORM.to_string()))
        .await
        .expect("submission runs");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = body_text(response).await;
    assert!(html.contains(DELIVERY_FAILED_MESSAGE));
    assert!(html.contains("value=\"Jo\""));
    assert!(html.contains("value=\"jo@site.com\""));
    assert!(html.contains(">Interested in a quote</textarea>"));
    assert_eq!(captured.lock().expect("capture mutex poisoned").len(), 1);
}
