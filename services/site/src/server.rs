use crate::cli::ServeArgs;
use crate::infra::{AppState, AudioLibrary};
use crate::routes::with_site_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use forecourt_radio::config::AppConfig;
use forecourt_radio::enquiry::{EmailJsRelay, EnquiryDesk, RelaySetup};
use forecourt_radio::error::AppError;
use forecourt_radio::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let setup = config.relay_setup()?;
    if let RelaySetup::Incomplete(missing) = &setup {
        warn!(%missing, "mail relay is not configured; enquiries will report setup incomplete");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let relay = Arc::new(EmailJsRelay::new(config.relay.endpoint.clone()));
    let desk = Arc::new(EnquiryDesk::new(relay, setup));

    let app = with_site_routes(desk)
        .layer(Extension(app_state))
        .layer(Extension(AudioLibrary::new(config.site.audio_dir.clone())))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        audio_dir = %config.site.audio_dir.display(),
        "forecourt-radio site ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
