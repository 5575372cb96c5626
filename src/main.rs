//! Contact Assistant - Main entry point
//!
//! Loads the address book, runs the interactive command loop on stdin/stdout,
//! and saves the book when the loop ends (exit command, end of input, or Ctrl-C).

use anyhow::Result;
use contact_assistant::{run_assistant, CommandHandler, Config, JsonFileRepository};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so stdout stays the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        path = %config.address_book_path.display(),
        window_days = config.upcoming_window_days,
        "Starting contact assistant"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let repository = JsonFileRepository::new(config.address_book_path.clone());
    let handler = CommandHandler::new(config.upcoming_window_days);

    let result = runtime.block_on(run_assistant(
        &repository,
        &handler,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        tokio::signal::ctrl_c(),
    ));

    // A pending stdin read would otherwise keep the runtime alive after Ctrl-C
    runtime.shutdown_background();

    match result {
        Ok(end) => {
            info!(?end, "Contact assistant shutdown complete");
            Ok(())
        }
        Err(e) => {
            error!("Session failed: {}", e);
            Err(e.into())
        }
    }
}
