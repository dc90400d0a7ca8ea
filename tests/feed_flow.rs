//! End-to-end flow over the live feed inside a dashboard session.

use std::time::Duration;

use metrichub_core::config::AppConfig;
use metrichub_service::DashboardSession;

fn seeded_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.feed.seed = Some(7);
    config
}

#[tokio::test(start_paused = true)]
async fn feed_runs_within_session_and_stops_on_shutdown() {
    let mut session = DashboardSession::new(&seeded_config());
    session.start();
    tokio::task::yield_now().await;

    for _ in 0..8 {
        tokio::time::advance(Duration::from_millis(3000)).await;
        tokio::task::yield_now().await;
    }

    let snapshot = session.feed().snapshot().await;
    assert_eq!(snapshot.len(), 5, "buffer must stay bounded");
    for pair in snapshot.windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp, "newest first");
    }

    session.shutdown().await;
    let frozen = session.feed().snapshot().await;

    tokio::time::advance(Duration::from_millis(9000)).await;
    tokio::task::yield_now().await;
    let after: Vec<_> = session.feed().snapshot().await;
    assert_eq!(frozen.len(), after.len(), "no emission after shutdown");
}

#[tokio::test(start_paused = true)]
async fn disconnect_suspends_and_reconnect_resumes() {
    let mut session = DashboardSession::new(&seeded_config());
    session.start();
    tokio::task::yield_now().await;

    tokio::time::advance(Duration::from_millis(3000)).await;
    tokio::task::yield_now().await;
    assert_eq!(session.feed().snapshot().await.len(), 1);

    session.feed().set_connected(false);
    assert!(!session.feed().is_connected());
    for _ in 0..4 {
        tokio::time::advance(Duration::from_millis(3000)).await;
        tokio::task::yield_now().await;
    }
    assert_eq!(session.feed().snapshot().await.len(), 1);

    session.feed().set_connected(true);
    tokio::time::advance(Duration::from_millis(3000)).await;
    tokio::task::yield_now().await;
    assert_eq!(session.feed().snapshot().await.len(), 2);

    session.shutdown().await;
}
