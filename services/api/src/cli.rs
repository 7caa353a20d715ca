use crate::commands::{run_localize, run_score, LocalizeArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use proctor_console::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Proctoring Console",
    about = "Score proctoring behaviour reports and localise event times",
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
    /// Score a behaviour report exported from the analysis backend
    Score(ScoreArgs),
    /// Render a UTC date/time pair in a target time zone
    Localize(LocalizeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// JSON file mapping session ids to behaviour reports
    #[arg(long)]
    pub(crate) reports_file: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Localize(args) => run_localize(args),
    }
}
