//! Live feed demonstration command.

use std::sync::Arc;
use std::time::Duration;

use clap::Args;

use metrichub_core::config::AppConfig;
use metrichub_core::error::AppError;
use metrichub_entity::update::LiveUpdate;
use metrichub_feed::{LiveFeed, UpdateSink};

use crate::output;

/// Arguments for the feed command
#[derive(Debug, Args)]
pub struct FeedArgs {
    /// Number of intervals to run
    #[arg(long, default_value_t = 5)]
    pub ticks: u64,

    /// Override the emission interval in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// RNG seed for a deterministic sequence
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disconnect the feed after this many intervals
    #[arg(long)]
    pub offline_after: Option<u64>,
}

/// Prints each delivered update as it arrives.
struct PrintSink;

#[async_trait::async_trait]
impl UpdateSink for PrintSink {
    async fn deliver(&self, update: &LiveUpdate) {
        println!(
            "[{}] {:<11} {:<32} {:>8} ({})",
            update.timestamp.format("%H:%M:%S"),
            update.category,
            update.message,
            update.value,
            update.status,
        );
    }
}

/// Execute the feed command
pub async fn execute(args: &FeedArgs, config: &AppConfig) -> Result<(), AppError> {
    let mut feed_config = config.feed.clone();
    if let Some(interval_ms) = args.interval_ms {
        feed_config.interval_ms = interval_ms;
    }
    if args.seed.is_some() {
        feed_config.seed = args.seed;
    }

    let interval = Duration::from_millis(feed_config.interval_ms.max(1));

    let mut feed = LiveFeed::new(&feed_config);
    feed.add_sink(Arc::new(PrintSink)).await;
    feed.start();

    for tick in 1..=args.ticks {
        tokio::time::sleep(interval).await;
        if args.offline_after == Some(tick) {
            feed.set_connected(false);
            output::print_note("-- feed disconnected --");
        }
    }

    feed.shutdown().await;

    let snapshot = feed.snapshot().await;
    output::print_note(&format!(
        "Recent history: {} update(s), newest first",
        snapshot.len()
    ));

    Ok(())
}
