mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use proctor_console::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
