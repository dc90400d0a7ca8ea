//! Timer-driven live feed producer.
//!
//! The feed is a two-state machine: **connected** (one update per interval)
//! and **disconnected** (timer keeps ticking, nothing is emitted). The
//! producer task is owned through a [`CancellationToken`]; `shutdown` must
//! be called on teardown so the task never outlives the feed's consumers.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time;
use tokio_util::sync::CancellationToken;

use metrichub_core::config::feed::FeedConfig;
use metrichub_entity::update::LiveUpdate;

use crate::buffer::UpdateBuffer;
use crate::generator::UpdateGenerator;
use crate::sink::UpdateSink;

use rand::rngs::StdRng;

/// Shared state between the feed facade and its producer task.
struct FeedInner {
    buffer: RwLock<UpdateBuffer>,
    connected: AtomicBool,
    generator: Mutex<UpdateGenerator<StdRng>>,
    sinks: RwLock<Vec<Arc<dyn UpdateSink>>>,
}

impl FeedInner {
    /// Generate one update if connected: prepend it to the buffer and hand
    /// it to every registered sink. Returns `None` while disconnected.
    async fn emit(&self) -> Option<LiveUpdate> {
        if !self.connected.load(Ordering::Relaxed) {
            return None;
        }

        let update = self.generator.lock().await.next_update();
        self.buffer.write().await.push(update.clone());

        let sinks = self.sinks.read().await;
        for sink in sinks.iter() {
            sink.deliver(&update).await;
        }

        Some(update)
    }
}

/// The simulated real-time update feed.
pub struct LiveFeed {
    inner: Arc<FeedInner>,
    interval: Duration,
    cancel: CancellationToken,
    worker: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for LiveFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveFeed")
            .field("interval", &self.interval)
            .field("running", &self.worker.is_some())
            .finish()
    }
}

impl LiveFeed {
    /// Create a feed from configuration. The producer task is not started
    /// until [`LiveFeed::start`].
    pub fn new(config: &FeedConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => UpdateGenerator::from_seed(seed),
            None => UpdateGenerator::from_os_rng(),
        };

        Self {
            inner: Arc::new(FeedInner {
                buffer: RwLock::new(UpdateBuffer::new(config.buffer_capacity)),
                connected: AtomicBool::new(config.start_connected),
                generator: Mutex::new(generator),
                sinks: RwLock::new(Vec::new()),
            }),
            interval: Duration::from_millis(config.interval_ms.max(1)),
            cancel: CancellationToken::new(),
            worker: None,
        }
    }

    /// Start the producer task. Emissions are spaced one full interval
    /// apart, with the first update after one interval.
    pub fn start(&mut self) {
        if self.worker.is_some() {
            tracing::warn!("Live feed already running, ignoring start");
            return;
        }

        let inner = Arc::clone(&self.inner);
        let cancel = self.cancel.clone();
        let period = self.interval;

        self.worker = Some(tokio::spawn(async move {
            let mut ticker = time::interval(period);
            // The first interval tick completes immediately; consume it so
            // the first emission lands one full period after start.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {
                        if let Some(update) = inner.emit().await {
                            tracing::trace!(
                                category = %update.category,
                                status = %update.status,
                                "Emitted live update"
                            );
                        }
                    }
                }
            }

            tracing::debug!("Live feed producer stopped");
        }));

        tracing::debug!(interval_ms = period.as_millis() as u64, "Live feed started");
    }

    /// Whether the producer task is running.
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Switch between connected (emitting) and disconnected (suspended).
    pub fn set_connected(&self, connected: bool) {
        self.inner.connected.store(connected, Ordering::Relaxed);
        tracing::debug!(connected, "Live feed connection state changed");
    }

    /// Current connection state.
    pub fn is_connected(&self) -> bool {
        self.inner.connected.load(Ordering::Relaxed)
    }

    /// Register a delivery sink for future emissions.
    pub async fn add_sink(&self, sink: Arc<dyn UpdateSink>) {
        self.inner.sinks.write().await.push(sink);
    }

    /// Emit one update immediately, bypassing the timer but honoring the
    /// connection gate. Returns `None` while disconnected.
    pub async fn emit_now(&self) -> Option<LiveUpdate> {
        self.inner.emit().await
    }

    /// Copy of the recent-history buffer, newest first.
    pub async fn snapshot(&self) -> Vec<LiveUpdate> {
        self.inner.buffer.read().await.snapshot()
    }

    /// Cancel the producer task and wait for it to stop.
    pub async fn shutdown(&mut self) {
        self.cancel.cancel();
        if let Some(worker) = self.worker.take() {
            let _ = worker.await;
        }
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        // Last-resort cleanup; callers are expected to shutdown() first.
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::Mutex as AsyncMutex;

    fn test_config() -> FeedConfig {
        FeedConfig {
            interval_ms: 3000,
            buffer_capacity: 5,
            start_connected: true,
            seed: Some(42),
        }
    }

    /// Collects delivered updates for assertions.
    struct CollectSink {
        seen: AsyncMutex<Vec<LiveUpdate>>,
    }

    #[async_trait::async_trait]
    impl UpdateSink for CollectSink {
        async fn deliver(&self, update: &LiveUpdate) {
            self.seen.lock().await.push(update.clone());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_update_per_interval() {
        let mut feed = LiveFeed::new(&test_config());
        feed.start();
        // Let the producer task run once so its interval is anchored at t0.
        tokio::task::yield_now().await;

        // Nothing before the first full interval elapses.
        time::advance(Duration::from_millis(2999)).await;
        tokio::task::yield_now().await;
        assert!(feed.snapshot().await.is_empty());

        time::advance(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(feed.snapshot().await.len(), 1);

        time::advance(Duration::from_millis(3000)).await;
        tokio::task::yield_now().await;
        assert_eq!(feed.snapshot().await.len(), 2);

        feed.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_buffer_stays_bounded_and_newest_first() {
        let mut feed = LiveFeed::new(&test_config());
        feed.start();
        tokio::task::yield_now().await;

        for _ in 0..12 {
            time::advance(Duration::from_millis(3000)).await;
            tokio::task::yield_now().await;
        }

        let snapshot = feed.snapshot().await;
        assert_eq!(snapshot.len(), 5);
        // Newest first: timestamps never increase along the snapshot.
        for pair in snapshot.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }

        feed.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_disconnected_feed_emits_nothing() {
        let mut feed = LiveFeed::new(&test_config());
        feed.start();
        tokio::task::yield_now().await;
        feed.set_connected(false);

        for _ in 0..3 {
            time::advance(Duration::from_millis(3000)).await;
            tokio::task::yield_now().await;
        }
        assert!(feed.snapshot().await.is_empty());

        // Reconnecting resumes emission on the next tick.
        feed.set_connected(true);
        time::advance(Duration::from_millis(3000)).await;
        tokio::task::yield_now().await;
        assert_eq!(feed.snapshot().await.len(), 1);

        feed.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_emission() {
        let mut feed = LiveFeed::new(&test_config());
        feed.start();
        tokio::task::yield_now().await;

        time::advance(Duration::from_millis(3000)).await;
        tokio::task::yield_now().await;
        assert_eq!(feed.snapshot().await.len(), 1);
        assert!(feed.is_running());

        feed.shutdown().await;
        assert!(!feed.is_running());

        time::advance(Duration::from_millis(9000)).await;
        tokio::task::yield_now().await;
        assert_eq!(feed.snapshot().await.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sink_receives_each_emission() {
        let mut feed = LiveFeed::new(&test_config());
        let sink = Arc::new(CollectSink {
            seen: AsyncMutex::new(Vec::new()),
        });
        feed.add_sink(sink.clone()).await;
        feed.start();
        tokio::task::yield_now().await;

        time::advance(Duration::from_millis(3000)).await;
        tokio::task::yield_now().await;
        time::advance(Duration::from_millis(3000)).await;
        tokio::task::yield_now().await;

        assert_eq!(sink.seen.lock().await.len(), 2);
        feed.shutdown().await;
    }

    #[tokio::test]
    async fn test_emit_now_respects_connection_gate() {
        let feed = LiveFeed::new(&test_config());
        assert!(feed.emit_now().await.is_some());
        feed.set_connected(false);
        assert!(feed.emit_now().await.is_none());
        assert_eq!(feed.snapshot().await.len(), 1);
    }
}
