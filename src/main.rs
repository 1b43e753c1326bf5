//! Address Book Bot - Main entry point
//!
//! Reads commands from stdin, answers on stdout, and logs to stderr.

use address_book_bot::bot::{run_session, CommandHandler};
use address_book_bot::Config;
use anyhow::Result;
use tokio::io::{stdin, stdout, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Configuration comes first so LOG_LEVEL can seed the filter
    let config = Config::from_env()?;

    // Logging goes to stderr to keep the conversation on stdout readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        window_days = config.birthday_window_days,
        window_policy = %config.birthday_window_policy,
        "Starting address book bot"
    );

    let handler = CommandHandler::new(&config);
    let handler = run_session(handler, BufReader::new(stdin()), stdout(), &config.prompt).await?;

    info!(contacts = handler.book().len(), "Address book bot shutdown complete");
    Ok(())
}
