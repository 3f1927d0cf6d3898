mod app;
mod config;
mod display;
mod dorks;
mod search;

pub const USER_AGENT: &str = concat!("dorkscan/", env!("CARGO_PKG_VERSION"));

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use reqwest::Client;
use tracing::{debug, info, warn};

use app::RunOptions;
use search::Lang;
use search::client::{CustomSearchClient, DEFAULT_START};

/// Run a predefined Google dork through the Custom Search JSON API and show its risk.
///
/// Reads `API_KEY_SEARCH_GOOGLE` and `SEARCH_ENGINE_ID` from the environment or a `.env` file.
/// Every flag is optional; without any, the first page of Spanish results is requested
/// and credentials come from `./.env`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Index of the first result to return (1-based)
    #[arg(long, default_value_t = DEFAULT_START, value_parser = clap::value_parser!(u32).range(1..=91))]
    start: u32,

    /// Language restriction, e.g. "es", "en" or "lang_pt"
    #[arg(long, default_value_t = Lang::default())]
    lang: Lang,

    /// Load credentials from this file instead of ./.env
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,
}

fn load_env_file(path: Option<&PathBuf>) {
    match path {
        Some(path) => {
            if let Err(e) = dotenvy::from_path(path) {
                warn!(path = %path.display(), "could not load env file: {e}");
            }
        }
        None => match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => debug!("no .env file found"),
            Err(e) => warn!("could not load .env: {e}"),
        },
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dorkscan=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    load_env_file(cli.env_file.as_ref());

    let Some(credentials) = config::load_credentials() else {
        return Ok(ExitCode::FAILURE);
    };

    let http = Client::builder().build()?;
    let client = CustomSearchClient::new(http, credentials);
    let options = RunOptions {
        start: cli.start,
        lang: cli.lang,
    };

    let outcome = app::run(&client, &options, io::stdin().lock(), &mut io::stdout().lock())
        .await
        .inspect_err(|e| tracing::error!("console I/O failed: {e}"))?;
    if let app::Outcome::Displayed { count } = outcome {
        info!(count, "results displayed");
    }

    Ok(ExitCode::SUCCESS)
}
