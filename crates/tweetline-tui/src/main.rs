//! Tweet client entry point.

use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tweetline_client::{
    ClientConfig, DEFAULT_BASE_URL,
    transport::{HttpApi, WsPushChannel},
};
use tweetline_core::FileStore;
use tweetline_tui::{Runtime, TerminalDriver};

/// Terminal client for the tweet service
#[derive(Parser, Debug)]
#[command(name = "tweetline")]
#[command(about = "Terminal client for the tweet service")]
#[command(version)]
struct Args {
    /// Server base URL
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    server: String,

    /// File holding the session token and theme
    #[arg(long, default_value = "tweetline-state.json")]
    state_file: PathBuf,

    /// Log output file (the terminal is owned by the UI)
    #[arg(long, default_value = "tweetline.log")]
    log_file: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_file = OpenOptions::new().create(true).append(true).open(&args.log_file)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(log_file)).with_ansi(false))
        .with(filter)
        .init();

    let config = ClientConfig::new(args.server);
    tracing::info!(server = %config.base_url, push = %config.push_url, "tweetline starting");

    let api = HttpApi::new(&config)?;
    let push = WsPushChannel::new(&config);
    let store = FileStore::open(&args.state_file)?;
    let driver = TerminalDriver::new()?;

    Runtime::new(driver, api, push, store).run().await?;

    tracing::info!("tweetline stopped");
    Ok(())
}
