//! `staffbook`: manage employee records from the terminal.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use staffbook_cli::{Cli, commands};
use staffbook_client::{App, HttpEmployeeApi};

/// Ask on stdin; only `y` or `yes` approves.
fn ask(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    tracing::debug!(api_url = %cli.api_url, "starting");
    let api = HttpEmployeeApi::with_timeout(&cli.api_url, cli.timeout())?;
    let mut app = App::new(api);

    let mut stdout = std::io::stdout().lock();
    match commands::run(&mut app, cli.command, &mut stdout, &ask).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            drop(stdout);
            eprintln!("error: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
