//! File Manager - interactive command-line file manager
//!
//! Main entry point: parses the command line, sets up logging, and runs the
//! read-eval-print loop until `.exit`, end of input, or Ctrl+C.

use anyhow::Result;
use app_core::{AppConfig, AppError, Dispatcher, Farewell, LineReader, Session, StdConsole};
use clap::Parser;
use std::path::PathBuf;
use tokio::io::BufReader;

#[derive(Parser, Debug)]
#[command(name = "file_manager", version, about = "Interactive command-line file manager")]
struct Cli {
    /// Name used to greet you, as --username=<name>
    #[arg(long, value_name = "NAME")]
    username: Option<String>,

    /// Configuration file (defaults to the per-user config location)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let user_name = match cli.username.filter(|name| !name.is_empty()) {
        Some(name) => name,
        None => return Err(AppError::NoUsernameArgument.into()),
    };

    // Logging and panic hook; the session runs without a log file if this fails
    let _log_guard = app_log::init();

    // Clean up old logs (7 days)
    if let Err(e) = app_log::cleanup_old_logs(7) {
        tracing::warn!("Failed to cleanup old logs: {}", e);
    }

    tracing::info!("File Manager starting for {}", user_name);

    let config = AppConfig::load_or_default(cli.config.as_deref());

    let start_dir = config
        .start_directory()
        .ok_or_else(|| AppError::Config("no usable start directory".into()))?;
    let session = Session::new(user_name.as_str(), start_dir)?;
    let dispatcher = Dispatcher::new(&config);

    let _farewell = Farewell::new(user_name.as_str());
    run(session, dispatcher, config.general.greeting).await
}

async fn run(mut session: Session, dispatcher: Dispatcher, greeting: bool) -> Result<()> {
    let mut console = StdConsole::stdio();

    if greeting {
        console
            .line(&format!("Welcome to the File Manager, {}!", session.user_name()))
            .await?;
    }
    console.line(&session.location_line()).await?;

    let mut lines = LineReader::new(BufReader::new(tokio::io::stdin()));

    // Ctrl+C is only watched while waiting for input. A signal that arrives
    // while a command runs is lost, since each iteration registers afresh.
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    let outcome = dispatcher.dispatch(&mut session, &line, &mut console).await?;
                    if outcome.is_exit() {
                        tracing::info!("Exit requested");
                        break;
                    }
                }
                None => {
                    tracing::info!("End of input");
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    Ok(())
}
