use crate::commands::{run_enquire, run_render, EnquireArgs, RenderArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use forecourt_radio::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Forecourt-Radio site",
    about = "Serve the Forecourt-Radio landing page and deliver enquiries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Send one enquiry through the submission flow from the terminal
    Enquire(EnquireArgs),
    /// Write the landing page with an empty form as static HTML
    Render(RenderArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Enquire(args) => run_enquire(args).await,
        Command::Render(args) => run_render(args),
    }
}
