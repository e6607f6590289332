use crate::infra::RecordingRelay;
use clap::Args;
use forecourt_radio::config::{AppConfig, TelemetryConfig};
use forecourt_radio::enquiry::{
    EmailJsRelay, EnquiryDesk, EnquiryForm, FormView, MailRelay, RelaySetup, StatusKind,
};
use forecourt_radio::error::AppError;
use forecourt_radio::site::LandingPage;
use forecourt_radio::telemetry;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct EnquireArgs {
    /// Contact name
    #[arg(long)]
    pub(crate) name: String,
    /// Contact email address
    #[arg(long)]
    pub(crate) email: String,
    /// Business or station name
    #[arg(long, default_value = "")]
    pub(crate) business: String,
    /// Contact phone number
    #[arg(long, default_value = "")]
    pub(crate) phone: String,
    /// Enquiry message
    #[arg(long)]
    pub(crate) message: String,
    /// Record the enquiry and print the template parameters instead of sending it
    #[arg(long)]
    pub(crate) dry_run: bool,
}

impl EnquireArgs {
    fn form(&self) -> EnquiryForm {
        EnquiryForm {
            name: self.name.clone(),
            email: self.email.clone(),
            business: self.business.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct RenderArgs {
    /// Write the page to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) async fn run_enquire(args: EnquireArgs) -> Result<(), AppError> {
    let form = args.form();

    let (view, recorded) = if args.dry_run {
        telemetry::init(&dry_run_telemetry())?;
        let relay = Arc::new(RecordingRelay::default());
        let view = submit_once(relay.clone(), RecordingRelay::setup(), form).await;
        (view, relay.sent())
    } else {
        let config = AppConfig::load()?;
        telemetry::init(&config.telemetry)?;
        let relay = Arc::new(EmailJsRelay::new(config.relay.endpoint.clone()));
        let view = submit_once(relay, config.relay.setup(), form).await;
        (view, Vec::new())
    };

    let mut stdout = io::stdout().lock();
    for form in &recorded {
        writeln!(stdout, "Template parameters (dry run):")?;
        for (key, value) in form.template_params() {
            writeln!(stdout, "  {key}: {value}")?;
        }
    }
    report_status(&view, &mut stdout)
}

/// Dry runs skip loading the config, so they log at `info` unless `RUST_LOG` says otherwise.
fn dry_run_telemetry() -> TelemetryConfig {
    TelemetryConfig {
        log_level: "info".to_string(),
    }
}

/// Runs one submission through a fresh form instance, exactly as the HTTP form does.
async fn submit_once<R>(relay: Arc<R>, setup: RelaySetup, form: EnquiryForm) -> FormView
where
    R: MailRelay + 'static,
{
    let desk = EnquiryDesk::new(relay, setup);
    let (_, outcome) = desk.submit(None, Some(form)).await;
    outcome.into_view()
}

fn report_status(view: &FormView, out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "{}", view.status.message)?;
    match view.status.kind {
        StatusKind::Error => Err(AppError::Enquiry(view.status.message.clone())),
        StatusKind::Idle | StatusKind::Success => Ok(()),
    }
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    match args.output {
        Some(path) => {
            write_page(&path)?;
            println!("Landing page written to {}", path.display());
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", idle_page())?;
            Ok(())
        }
    }
}

fn idle_page() -> String {
    let view = FormView::idle();
    LandingPage::new(None, &view).to_string()
}

fn write_page(path: &Path) -> Result<(), AppError> {
    std::fs::write(path, idle_page())?;
    Ok(())
}
