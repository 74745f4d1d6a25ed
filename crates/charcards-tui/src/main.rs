//! charcards entry point.
//!
//! # Usage
//!
//! ```bash
//! # Browse characters full-screen
//! charcards
//!
//! # Print the cards once and exit
//! charcards --plain
//!
//! # Keep a debug log while browsing
//! charcards --log-file charcards.log --log-level debug
//! ```

use std::{
    fs::OpenOptions,
    io::{self, stdout},
    path::PathBuf,
    process::ExitCode,
    sync::Mutex,
};

use charcards_app::{Phase, Runtime};
use charcards_client::{CHARACTERS_API_URL, CharacterClient};
use charcards_tui::{PlainDriver, TerminalDriver};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Rick and Morty character cards
#[derive(Parser, Debug)]
#[command(name = "charcards")]
#[command(about = "Browse Rick and Morty characters as cards in the terminal")]
#[command(version)]
struct Args {
    /// Character endpoint to fetch from
    #[arg(long, default_value = CHARACTERS_API_URL)]
    endpoint: String,

    /// Print the result once as plain text and exit
    #[arg(long)]
    plain: bool,

    /// Append logs to this file
    ///
    /// Without it the full-screen UI does not log, since stderr shares the
    /// screen. Plain mode logs to stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let client = CharacterClient::with_endpoint(args.endpoint);
    tracing::info!(endpoint = client.endpoint(), plain = args.plain, "charcards starting");

    if args.plain {
        let app = Runtime::new(PlainDriver::new(client, stdout())).run().await?;
        return Ok(if app.phase() == Phase::Error { ExitCode::FAILURE } else { ExitCode::SUCCESS });
    }

    let driver = TerminalDriver::new(client)?;
    Runtime::new(driver).run().await?;

    Ok(ExitCode::SUCCESS)
}

fn init_logging(args: &Args) -> io::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    match &args.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
            tracing_subscriber::registry().with(layer).with(filter).init();
        },
        None if args.plain => {
            let layer = fmt::layer().with_writer(io::stderr);
            tracing_subscriber::registry().with(layer).with(filter).init();
        },
        None => {},
    }

    Ok(())
}
