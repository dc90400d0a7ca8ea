//! End-to-end flows over a dashboard session: filter, sort, paginate,
//! notifications, and export lifecycle.

use std::time::Duration;

use metrichub_core::config::AppConfig;
use metrichub_entity::campaign::{CampaignSortField, StatusSelect};
use metrichub_entity::export::{ExportKind, ExportStatus};
use metrichub_service::DashboardSession;
use metrichub_view::{FilterLabel, FilterPatch};

fn session() -> DashboardSession {
    DashboardSession::new(&AppConfig::default())
}

#[tokio::test]
async fn filter_apply_and_clear_flow() {
    let mut session = session();

    // Untouched session: full catalog, three rows on page one of two.
    let view = session.table_view();
    assert_eq!(view.total_filtered, 5);
    assert_eq!(view.rows.len(), 3);
    assert_eq!(view.total_pages, 2);
    assert!(session.active_filter_labels().is_empty());

    // Status filter narrows to the three active campaigns.
    session.update_filter(FilterPatch::Status(StatusSelect::Active));
    let labels = session.apply_filters().to_vec();
    assert_eq!(labels, vec![FilterLabel::Status]);

    session.set_sort(metrichub_view::SortSpec::new(
        CampaignSortField::Budget,
        Default::default(),
    ));
    let view = session.table_view();
    assert_eq!(view.total_filtered, 3);
    let ids: Vec<u32> = view.rows.iter().map(|r| r.id.0).collect();
    assert_eq!(ids, vec![5, 1, 3]); // budgets 2500, 5000, 8000

    // Clearing restores the unfiltered catalog and empties the labels.
    session.clear_filters();
    assert!(session.filters().is_inactive());
    assert!(session.active_filter_labels().is_empty());
    assert_eq!(session.table_view().total_filtered, 5);
}

#[tokio::test]
async fn budget_window_scenario() {
    let mut session = session();
    session.update_filter(FilterPatch::MinBudget(4000.0));
    session.update_filter(FilterPatch::MaxBudget(7000.0));

    let view = session.table_view();
    let mut ids: Vec<u32> = view.rows.iter().map(|r| r.id.0).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 4]);
}

#[tokio::test]
async fn pagination_clamps_when_filters_shrink_the_set() {
    let mut session = session();
    session.set_page(2);
    assert_eq!(session.table_view().rows.len(), 2);

    // Narrow to one record: the stored page must clamp back to 1.
    session.update_filter(FilterPatch::SearchTerm("Holiday".to_string()));
    let view = session.table_view();
    assert_eq!(view.total_filtered, 1);
    assert_eq!(view.page, 1);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.rows[0].name, "Holiday Special");
}

#[tokio::test]
async fn sort_toggle_involution() {
    let mut session = session();
    session.toggle_sort(CampaignSortField::Budget);
    let ascending: Vec<u32> = session.table_view().rows.iter().map(|r| r.id.0).collect();

    session.toggle_sort(CampaignSortField::Budget);
    session.toggle_sort(CampaignSortField::Budget);
    let again: Vec<u32> = session.table_view().rows.iter().map(|r| r.id.0).collect();
    assert_eq!(ascending, again);
}

#[tokio::test]
async fn notification_lifecycle() {
    let mut session = session();
    assert_eq!(session.notifications().unread_count(), 2);

    let first_unread = session
        .notifications()
        .list()
        .iter()
        .find(|n| n.is_unread())
        .map(|n| n.id)
        .expect("seed data has unread entries");

    session
        .notifications_mut()
        .mark_read(first_unread)
        .expect("id exists");
    assert_eq!(session.notifications().unread_count(), 1);

    let victim = session.notifications().list()[3].id;
    session.notifications_mut().dismiss(victim).expect("id exists");
    assert_eq!(session.notifications().list().len(), 5);

    assert_eq!(session.notifications_mut().mark_all_read(), 1);
    assert_eq!(session.notifications().unread_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn export_lifecycle_with_simulated_completion() {
    let mut session = session();
    assert_eq!(session.exports().history().await.len(), 2);

    let id = session.exports().request(ExportKind::Pdf).await;
    // Let the spawned completion task register its `sleep` timer before
    // the paused clock is advanced past it.
    tokio::task::yield_now().await;
    let record = session.exports().get(id).await.expect("present");
    assert_eq!(record.status, ExportStatus::Processing);
    assert!(record.file_name.starts_with("PDF_Report_"));

    tokio::time::advance(Duration::from_millis(2001)).await;
    tokio::task::yield_now().await;

    let record = session.exports().get(id).await.expect("present");
    assert_eq!(record.status, ExportStatus::Completed);
    assert_eq!(session.exports().history().await.len(), 3);

    session.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_inflight_export() {
    let mut session = session();
    let id = session.exports().request(ExportKind::Csv).await;

    session.shutdown().await;
    tokio::time::advance(Duration::from_millis(10_000)).await;
    tokio::task::yield_now().await;

    // The flip never fires after teardown.
    let record = session.exports().get(id).await.expect("present");
    assert_eq!(record.status, ExportStatus::Processing);
}
