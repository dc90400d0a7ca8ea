//! Export request handling with simulated async completion.
//!
//! Requesting an export synchronously prepends a `Processing` record and
//! schedules a status flip to `Completed` after a fixed delay. No file is
//! ever produced. Pending flips are tracked and cancelled on shutdown so a
//! torn-down dashboard never mutates state from a stale timer.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use tokio::sync::RwLock;
use tokio::time;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, info};

use metrichub_core::config::export::ExportConfig;
use metrichub_core::types::id::ExportId;
use metrichub_entity::export::{ExportKind, ExportRecord, ExportStatus};

/// In-memory export history with delayed status transitions.
pub struct ExportService {
    history: Arc<RwLock<Vec<ExportRecord>>>,
    completion_delay: Duration,
    cancel: CancellationToken,
    tracker: TaskTracker,
}

impl std::fmt::Debug for ExportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportService")
            .field("completion_delay", &self.completion_delay)
            .finish()
    }
}

impl ExportService {
    /// Create a service with an empty history.
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            history: Arc::new(RwLock::new(Vec::new())),
            completion_delay: Duration::from_millis(config.completion_delay_ms),
            cancel: CancellationToken::new(),
            tracker: TaskTracker::new(),
        }
    }

    /// Create a service pre-populated with the dashboard seed history,
    /// newest first.
    pub fn with_seed_data(config: &ExportConfig) -> Self {
        let now = Utc::now();
        let service = Self::new(config);
        {
            let history = Arc::clone(&service.history);
            let seeds = vec![
                ExportRecord::seeded_completed(
                    ExportKind::Pdf,
                    "Dashboard_Report_Aug_2024.pdf",
                    "2.4 MB",
                    now - ChronoDuration::hours(1),
                ),
                ExportRecord::seeded_completed(
                    ExportKind::Csv,
                    "Campaign_Data_Aug_2024.csv",
                    "1.8 MB",
                    now - ChronoDuration::hours(2),
                ),
            ];
            // No tasks are running yet, so this cannot contend.
            if let Ok(mut guard) = history.try_write() {
                *guard = seeds;
            };
        }
        service
    }

    /// Request an export: prepend a processing record and schedule its
    /// completion. Returns the new record's id immediately.
    pub async fn request(&self, kind: ExportKind) -> ExportId {
        let record = ExportRecord::processing(kind, Utc::now());
        let id = record.id;
        info!(%kind, %id, "Export requested");

        self.history.write().await.insert(0, record);

        let history = Arc::clone(&self.history);
        let cancel = self.cancel.clone();
        let delay = self.completion_delay;
        self.tracker.spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!(%id, "Export completion cancelled by shutdown");
                }
                _ = time::sleep(delay) => {
                    let mut entries = history.write().await;
                    if let Some(entry) = entries.iter_mut().find(|e| e.id == id) {
                        if entry.status == ExportStatus::Processing {
                            entry.complete();
                            debug!(%id, "Export completed");
                        }
                    }
                }
            }
        });

        id
    }

    /// Copy of the export history, newest first.
    pub async fn history(&self) -> Vec<ExportRecord> {
        self.history.read().await.clone()
    }

    /// Look up one export record by id.
    pub async fn get(&self, id: ExportId) -> Option<ExportRecord> {
        self.history.read().await.iter().find(|e| e.id == id).cloned()
    }

    /// Cancel every pending completion and wait for the tasks to finish.
    pub async fn shutdown(&self) {
        self.cancel.cancel();
        self.tracker.close();
        self.tracker.wait().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ExportConfig {
        ExportConfig {
            completion_delay_ms: 2000,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_request_starts_processing_then_completes() {
        let service = ExportService::new(&test_config());
        let id = service.request(ExportKind::Pdf).await;
        // Let the spawned completion task run its first poll so its
        // `sleep` timer is registered before time is advanced.
        tokio::task::yield_now().await;

        let record = service.get(id).await.expect("present");
        assert_eq!(record.status, ExportStatus::Processing);
        assert_eq!(record.size_label, "2.1 MB");

        // Not yet at the configured delay.
        time::advance(Duration::from_millis(1999)).await;
        tokio::task::yield_now().await;
        assert_eq!(
            service.get(id).await.expect("present").status,
            ExportStatus::Processing
        );

        time::advance(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(
            service.get(id).await.expect("present").status,
            ExportStatus::Completed
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_flip_targets_id_under_prepends() {
        let service = ExportService::new(&test_config());
        let first = service.request(ExportKind::Csv).await;
        // Register the first task's timer before advancing the clock.
        tokio::task::yield_now().await;
        time::advance(Duration::from_millis(1000)).await;
        let second = service.request(ExportKind::Pdf).await;
        // Likewise for the second task.
        tokio::task::yield_now().await;

        // First flips at t=2000, second still processing until t=3000.
        time::advance(Duration::from_millis(1000)).await;
        tokio::task::yield_now().await;
        assert_eq!(
            service.get(first).await.expect("present").status,
            ExportStatus::Completed
        );
        assert_eq!(
            service.get(second).await.expect("present").status,
            ExportStatus::Processing
        );

        time::advance(Duration::from_millis(1000)).await;
        tokio::task::yield_now().await;
        assert_eq!(
            service.get(second).await.expect("present").status,
            ExportStatus::Completed
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_flip() {
        let service = ExportService::new(&test_config());
        let id = service.request(ExportKind::Pdf).await;

        service.shutdown().await;

        time::advance(Duration::from_millis(5000)).await;
        tokio::task::yield_now().await;
        assert_eq!(
            service.get(id).await.expect("present").status,
            ExportStatus::Processing
        );
    }

    #[tokio::test]
    async fn test_seed_history() {
        let service = ExportService::with_seed_data(&test_config());
        let history = service.history().await;
        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|e| e.status == ExportStatus::Completed));
        assert_eq!(history[0].file_name, "Dashboard_Report_Aug_2024.pdf");
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_requests_prepend_to_seed_history() {
        let service = ExportService::with_seed_data(&test_config());
        let id = service.request(ExportKind::Csv).await;
        let history = service.history().await;
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].id, id);
    }
}
