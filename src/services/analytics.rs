use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Duration, Utc};

use super::{seed, simulate_latency, FileStore};
use crate::{
    ChartData, CoveredRange, DailyStat, DateRange, ExportFormat, FileRecord, Overview,
    RealtimeStats, Result, SeriesPoint, ServiceError, SystemHealth, UploadStats,
};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Upload-statistics aggregator. Blends the synthetic daily series with the
/// live store's totals; every query recomputes from scratch and nothing is
/// written back, so a snapshot is never authoritative.
#[derive(Clone)]
pub struct Analytics {
    history: Rc<RefCell<Vec<DailyStat>>>,
    store: FileStore,
}

impl Analytics {
    /// Aggregator over a freshly generated synthetic history.
    pub fn new(store: FileStore) -> Self {
        Self::with_history(store, seed::synthetic_daily_series(seed::HISTORY_DAYS))
    }

    /// Aggregator over a caller-supplied history. Used by tests that need
    /// deterministic figures.
    pub fn with_history(store: FileStore, history: Vec<DailyStat>) -> Self {
        Self {
            history: Rc::new(RefCell::new(history)),
            store,
        }
    }

    fn filtered_history(&self, range: Option<DateRange>) -> Vec<DailyStat> {
        let history = self.history.borrow();
        match range {
            None => history.clone(),
            Some(DateRange { start, end }) => history
                .iter()
                .filter(|day| day.date >= start && day.date <= end)
                .cloned()
                .collect(),
        }
    }

    /// Snapshot over the given inclusive range (whole history when absent):
    /// historical totals from the synthetic series, live totals from the
    /// store, chart series per day.
    pub async fn upload_stats(&self, range: Option<DateRange>) -> UploadStats {
        simulate_latency(300).await;

        let days = self.filtered_history(range);
        let current = self.store.get_all().await;

        let live_files = current.len() as u64;
        let live_volume: u64 = current.iter().map(|f| f.size).sum();
        let live_avg_size = if live_files > 0 {
            live_volume as f64 / live_files as f64
        } else {
            0.0
        };

        let hist_files: u64 = days.iter().map(|d| u64::from(d.uploads_count)).sum();
        let hist_volume_mb: f64 = days.iter().map(|d| d.total_volume).sum();
        let hist_avg_speed = mean(days.iter().map(|d| d.avg_upload_speed));
        let hist_avg_time = mean(days.iter().map(|d| d.avg_upload_time));

        let avg_file_size = if live_files > 0 {
            live_avg_size
        } else {
            hist_volume_mb * BYTES_PER_MB / hist_files.max(1) as f64
        };

        UploadStats {
            overview: Overview {
                total_files: live_files + hist_files,
                total_volume: live_volume as f64 + hist_volume_mb * BYTES_PER_MB,
                avg_file_size,
                avg_upload_speed: hist_avg_speed,
                avg_upload_time: hist_avg_time,
                success_rate: 0.95,
            },
            chart_data: ChartData {
                upload_speed: series(&days, |d| d.avg_upload_speed),
                file_size: series(&days, |d| d.avg_file_size),
                volume: series(&days, |d| d.total_volume),
                uploads_count: series(&days, |d| f64::from(d.uploads_count)),
            },
            date_range: CoveredRange {
                start: days.first().map(|d| d.date),
                end: days.last().map(|d| d.date),
            },
        }
    }

    /// The live 24-hour window plus one synthetic "current speed" sample.
    /// Polling this over an unchanged store only varies in that sample.
    pub async fn realtime_stats(&self) -> RealtimeStats {
        simulate_latency(100).await;

        let files = self.store.get_all().await;
        let cutoff = Utc::now() - Duration::days(1);
        let recent: Vec<&FileRecord> =
            files.iter().filter(|f| f.uploaded_at >= cutoff).collect();

        RealtimeStats {
            active_uploads: 0,
            files_last_24h: recent.len(),
            volume_last_24h: recent.iter().map(|f| f.size).sum(),
            current_upload_speed: seed::random_speed(),
            system_health: SystemHealth::Healthy,
        }
    }

    /// Serializes the snapshot for the given range: pretty JSON of the full
    /// `UploadStats`, or a flat CSV table of the covered days. Both carry
    /// the same underlying figures.
    pub async fn export(&self, format: ExportFormat, range: Option<DateRange>) -> Result<String> {
        simulate_latency(200).await;

        match format {
            ExportFormat::Json => {
                let stats = self.upload_stats(range).await;
                serde_json::to_string_pretty(&stats)
                    .map_err(|err| ServiceError::Export(err.to_string()))
            }
            ExportFormat::Csv => {
                let mut out =
                    String::from("Date,Upload Speed (MB/s),Avg File Size (MB),Total Volume (MB),Uploads Count\n");
                for day in self.filtered_history(range) {
                    out.push_str(&format!(
                        "{},{:.2},{:.2},{:.2},{}\n",
                        day.date.format("%Y-%m-%d"),
                        day.avg_upload_speed,
                        day.avg_file_size,
                        day.total_volume,
                        day.uploads_count,
                    ));
                }
                Ok(out)
            }
        }
    }

    /// Folds a completed upload into today's bucket, creating the bucket on
    /// first use. Returns a copy of the updated day.
    pub async fn record_upload(&self, file: &FileRecord) -> DailyStat {
        simulate_latency(50).await;

        let today = seed::day_start(Utc::now());
        let mut history = self.history.borrow_mut();
        let index = match history.iter().position(|d| d.date == today) {
            Some(index) => index,
            None => {
                history.push(seed::empty_day(today));
                history.len() - 1
            }
        };

        let day = &mut history[index];
        day.uploads_count += 1;
        day.total_volume += file.size as f64 / BYTES_PER_MB;
        day.avg_file_size = day.total_volume / f64::from(day.uploads_count);
        day.clone()
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0u32), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

fn series(days: &[DailyStat], pick: impl Fn(&DailyStat) -> f64) -> Vec<SeriesPoint> {
    days.iter()
        .map(|d| SeriesPoint {
            x: d.date,
            y: pick(d),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NewFile;
    use chrono::DateTime;
    use futures::executor::block_on;

    fn day(date: DateTime<Utc>, uploads: u32, avg_size: f64, speed: f64) -> DailyStat {
        DailyStat {
            date,
            uploads_count: uploads,
            total_volume: uploads as f64 * avg_size,
            avg_file_size: avg_size,
            avg_upload_speed: speed,
            avg_upload_time: avg_size / speed * 1000.0,
            success_rate: 0.95,
        }
    }

    fn fixed_history() -> Vec<DailyStat> {
        let today = seed::day_start(Utc::now());
        vec![
            day(today - Duration::days(2), 10, 20.0, 4.0),
            day(today - Duration::days(1), 5, 10.0, 8.0),
            day(today, 20, 30.0, 6.0),
        ]
    }

    #[test]
    fn upload_stats_blend_history_with_live_store() {
        block_on(async {
            let store = FileStore::new();
            store
                .create(NewFile {
                    name: "a.png".into(),
                    size: 2 * 1024 * 1024,
                    mime: "image/png".into(),
                    url: None,
                })
                .await
                .unwrap();

            let analytics = Analytics::with_history(store, fixed_history());
            let stats = analytics.upload_stats(None).await;

            // 1 live file + 35 historical uploads.
            assert_eq!(stats.overview.total_files, 36);

            let hist_mb = 10.0 * 20.0 + 5.0 * 10.0 + 20.0 * 30.0;
            let expect_volume = 2.0 * BYTES_PER_MB + hist_mb * BYTES_PER_MB;
            assert!((stats.overview.total_volume - expect_volume).abs() < 1.0);

            // Live store present, so live average wins.
            assert!((stats.overview.avg_file_size - 2.0 * BYTES_PER_MB).abs() < 1.0);
            assert!((stats.overview.avg_upload_speed - 6.0).abs() < 1e-9);
            assert_eq!(stats.chart_data.uploads_count.len(), 3);
        });
    }

    #[test]
    fn upload_stats_respect_the_date_range() {
        block_on(async {
            let analytics = Analytics::with_history(FileStore::new(), fixed_history());
            let today = seed::day_start(Utc::now());

            let stats = analytics
                .upload_stats(Some(DateRange {
                    start: today - Duration::days(1),
                    end: today,
                }))
                .await;

            assert_eq!(stats.chart_data.volume.len(), 2);
            assert_eq!(stats.date_range.start, Some(today - Duration::days(1)));
            assert_eq!(stats.date_range.end, Some(today));
            // 5 + 20 uploads inside the window, no live files.
            assert_eq!(stats.overview.total_files, 25);
        });
    }

    #[test]
    fn empty_range_yields_an_empty_snapshot() {
        block_on(async {
            let analytics = Analytics::with_history(FileStore::new(), fixed_history());
            let start = seed::day_start(Utc::now()) + Duration::days(10);
            let stats = analytics
                .upload_stats(Some(DateRange {
                    start,
                    end: start + Duration::days(1),
                }))
                .await;

            assert_eq!(stats.overview.total_files, 0);
            assert_eq!(stats.date_range.start, None);
            assert!(stats.chart_data.upload_speed.is_empty());
        });
    }

    #[test]
    fn realtime_stats_vary_only_in_the_synthetic_speed() {
        block_on(async {
            let store = FileStore::seeded();
            let analytics = Analytics::with_history(store, fixed_history());

            let first = analytics.realtime_stats().await;
            let second = analytics.realtime_stats().await;

            assert_eq!(first.files_last_24h, second.files_last_24h);
            assert_eq!(first.volume_last_24h, second.volume_last_24h);
            assert_eq!(first.active_uploads, 0);
            assert_eq!(first.system_health, SystemHealth::Healthy);
            assert!((2.0..12.0).contains(&first.current_upload_speed));
        });
    }

    #[test]
    fn csv_and_json_exports_carry_the_same_snapshot() {
        block_on(async {
            let analytics = Analytics::with_history(FileStore::new(), fixed_history());

            let json = analytics.export(ExportFormat::Json, None).await.unwrap();
            let csv = analytics.export(ExportFormat::Csv, None).await.unwrap();

            let stats: UploadStats = serde_json::from_str(&json).unwrap();

            let csv_rows: Vec<&str> = csv.lines().skip(1).collect();
            assert_eq!(csv_rows.len(), stats.chart_data.uploads_count.len());

            let csv_uploads: u32 = csv_rows
                .iter()
                .map(|row| row.rsplit(',').next().unwrap().parse::<u32>().unwrap())
                .sum();
            let json_uploads: f64 = stats.chart_data.uploads_count.iter().map(|p| p.y).sum();
            assert_eq!(f64::from(csv_uploads), json_uploads);

            let csv_volume: f64 = csv_rows
                .iter()
                .map(|row| row.split(',').nth(3).unwrap().parse::<f64>().unwrap())
                .sum();
            let json_volume: f64 = stats.chart_data.volume.iter().map(|p| p.y).sum();
            assert!((csv_volume - json_volume).abs() < 0.1);
        });
    }

    #[test]
    fn record_upload_folds_into_todays_bucket() {
        block_on(async {
            let today = seed::day_start(Utc::now());
            let history = vec![day(today - Duration::days(1), 5, 10.0, 8.0)];
            let analytics = Analytics::with_history(FileStore::new(), history);

            let file = FileRecord {
                id: "f1".into(),
                name: "big.mp4".into(),
                size: (8.0 * BYTES_PER_MB) as u64,
                mime: "video/mp4".into(),
                uploaded_at: Utc::now(),
                status: crate::UploadStatus::Completed,
                progress: 100,
                url: String::new(),
            };

            let bucket = analytics.record_upload(&file).await;
            assert_eq!(bucket.date, today);
            assert_eq!(bucket.uploads_count, 1);
            assert!((bucket.total_volume - 8.0).abs() < 1e-9);
            assert!((bucket.avg_file_size - 8.0).abs() < 1e-9);

            let bucket = analytics.record_upload(&file).await;
            assert_eq!(bucket.uploads_count, 2);
            assert!((bucket.total_volume - 16.0).abs() < 1e-9);
            assert!((bucket.avg_file_size - 8.0).abs() < 1e-9);
        });
    }
}
