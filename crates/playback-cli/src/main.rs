mod summary;

use std::sync::Arc;

use chrono::NaiveDate;
use clap::Parser;
use playback_api::{PlaybackApiClient, PlaybackSource};
use playback_core::PlaybackFilters;
use playback_store::PlaybackDataStore;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "playback")]
#[command(about = "Load a search playback window and print its summary")]
struct Cli {
    /// First day of the window (YYYY-MM-DD). Defaults to the trailing window.
    #[arg(long, requires = "end")]
    start: Option<NaiveDate>,

    /// Last day of the window (YYYY-MM-DD), inclusive.
    #[arg(long, requires = "start")]
    end: Option<NaiveDate>,

    /// Print every visible search, not just the totals.
    #[arg(long)]
    list: bool,

    #[arg(long)]
    hide_success: bool,

    #[arg(long)]
    hide_limited: bool,

    #[arg(long)]
    hide_no_results: bool,
}

impl Cli {
    fn filters(&self) -> PlaybackFilters {
        PlaybackFilters {
            show_success: !self.hide_success,
            show_limited: !self.hide_limited,
            show_no_results: !self.hide_no_results,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = playback_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(env = %config.env, base_url = %config.api_base_url, "configuration loaded");

    let client: Arc<dyn PlaybackSource> = Arc::new(PlaybackApiClient::from_config(&config)?);
    let store = PlaybackDataStore::from_config(client, &config);
    store.set_filters(cli.filters());

    match (cli.start, cli.end) {
        (Some(start), Some(end)) => store.fetch_playback_data(start, end).await,
        _ => store.initialize().await,
    }

    let state = store.snapshot();
    print!(
        "{}",
        summary::render(&state, store.result_limit(), cli.list)
    );

    if let Some(error) = state.error {
        anyhow::bail!(error);
    }
    Ok(())
}
