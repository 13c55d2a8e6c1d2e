//! End-to-end checks of the store + aggregator contracts, driven the way
//! the UI drives them (minus the DOM).

use chrono::{Duration, Utc};
use futures::executor::block_on;

use dropzone::services::{Analytics, FileStore};
use dropzone::{DateRange, ExportFormat, FileCategory, NewFile, ServiceError, UploadStats};

fn upload(name: &str, mime: &str, size: u64) -> NewFile {
    NewFile {
        name: name.to_string(),
        size,
        mime: mime.to_string(),
        url: None,
    }
}

/// Two images and one pdf: the canonical filter scenario.
fn mixed_store() -> FileStore {
    let store = FileStore::new();
    block_on(async {
        store.create(upload("a.png", "image/png", 100)).await.unwrap();
        store.create(upload("b.jpg", "image/jpeg", 200)).await.unwrap();
        store.create(upload("c.pdf", "application/pdf", 300)).await.unwrap();
    });
    store
}

#[test]
fn visible_set_is_exactly_the_matching_subset() {
    let store = mixed_store();
    let all = block_on(store.get_all());

    for category in FileCategory::ALL {
        let visible: Vec<_> = all.iter().filter(|f| category.matches(&f.mime)).collect();
        let expected = match category {
            FileCategory::All => 3,
            FileCategory::Images => 2,
            FileCategory::Documents => 1,
            FileCategory::Videos => 0,
        };
        assert_eq!(visible.len(), expected, "category {category:?}");
    }
}

#[test]
fn deleting_a_missing_id_reports_failure_and_keeps_all_three_records() {
    let store = mixed_store();

    let err = block_on(store.delete("zzz")).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { ref id } if id == "zzz"));
    assert_eq!(store.len(), 3);
}

#[test]
fn uploading_a_batch_preserves_order_and_uniqueness() {
    block_on(async {
        let store = FileStore::new();
        let names: Vec<String> = (0..8).map(|i| format!("file-{i}.png")).collect();

        for name in &names {
            store.create(upload(name, "image/png", 50)).await.unwrap();
        }

        let all = store.get_all().await;
        assert_eq!(all.len(), names.len());
        for (record, name) in all.iter().zip(&names) {
            assert_eq!(&record.name, name);
        }

        let mut ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), names.len());
    });
}

#[test]
fn both_export_encodings_describe_the_same_snapshot() {
    let store = mixed_store();
    block_on(async {
        let analytics = Analytics::new(store);

        let today = Utc::now();
        let range = Some(DateRange {
            start: today - Duration::days(7),
            end: today,
        });

        let json = analytics.export(ExportFormat::Json, range).await.unwrap();
        let csv = analytics.export(ExportFormat::Csv, range).await.unwrap();

        let stats: UploadStats = serde_json::from_str(&json).unwrap();
        let rows: Vec<&str> = csv.lines().skip(1).collect();
        assert_eq!(rows.len(), stats.chart_data.uploads_count.len());

        let csv_uploads: f64 = rows
            .iter()
            .map(|row| row.rsplit(',').next().unwrap().parse::<f64>().unwrap())
            .sum();
        let json_uploads: f64 = stats.chart_data.uploads_count.iter().map(|p| p.y).sum();
        assert_eq!(csv_uploads, json_uploads);

        // The overview blends the live store into the same filtered series.
        let historical: f64 = stats.chart_data.uploads_count.iter().map(|p| p.y).sum();
        assert_eq!(stats.overview.total_files, 3 + historical as u64);
    });
}

#[test]
fn realtime_polls_agree_on_everything_but_the_synthetic_speed() {
    let store = mixed_store();
    block_on(async {
        let analytics = Analytics::new(store);

        let first = analytics.realtime_stats().await;
        let second = analytics.realtime_stats().await;

        assert_eq!(first.files_last_24h, 3);
        assert_eq!(first.volume_last_24h, 600);
        assert_eq!(first.files_last_24h, second.files_last_24h);
        assert_eq!(first.volume_last_24h, second.volume_last_24h);
        assert_eq!(first.active_uploads, 0);
    });
}

#[test]
fn uploads_flow_into_todays_analytics_bucket() {
    block_on(async {
        let store = FileStore::new();
        let analytics = Analytics::with_history(store.clone(), Vec::new());

        let record = store
            .create(upload("wired.png", "image/png", 4 * 1024 * 1024))
            .await
            .unwrap();
        let bucket = analytics.record_upload(&record).await;

        assert_eq!(bucket.uploads_count, 1);
        assert!((bucket.total_volume - 4.0).abs() < 1e-9);

        let stats = analytics.upload_stats(None).await;
        assert_eq!(stats.overview.total_files, 2); // 1 live + 1 recorded
        assert_eq!(stats.chart_data.uploads_count.len(), 1);
    });
}
