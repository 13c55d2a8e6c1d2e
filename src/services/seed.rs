//! Synthetic data, clearly fenced off from the aggregation paths. Nothing
//! in here is a system of record: the daily series is regenerated on every
//! startup and the starter files only exist to make a fresh session look
//! lived-in.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::{DailyStat, FileRecord, UploadStatus};

/// Default depth of the synthetic history, in days before today.
pub const HISTORY_DAYS: i64 = 30;

/// Midnight (UTC) of the current day.
pub fn day_start(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// A fresh "current upload speed" sample, 2-12 MB/s like every other speed
/// figure in the synthetic series.
pub fn random_speed() -> f64 {
    rand::thread_rng().gen_range(2.0..12.0)
}

/// Daily series covering `days` days back through today, inclusive, with
/// bounded randomness: 5-24 uploads/day, 2-12 MB/s, 5-55 MB average file
/// size, 90-100% success rate. Upload time follows from size over speed.
pub fn synthetic_daily_series(days: i64) -> Vec<DailyStat> {
    let mut rng = rand::thread_rng();
    let today = day_start(Utc::now());

    (0..=days)
        .rev()
        .map(|back| {
            let uploads = rng.gen_range(5..25u32);
            let speed = rng.gen_range(2.0..12.0);
            let avg_size = rng.gen_range(5.0..55.0);

            DailyStat {
                date: today - Duration::days(back),
                uploads_count: uploads,
                total_volume: uploads as f64 * avg_size,
                avg_file_size: avg_size,
                avg_upload_speed: speed,
                avg_upload_time: avg_size / speed * 1000.0,
                success_rate: rng.gen_range(0.9..1.0),
            }
        })
        .collect()
}

/// An empty bucket for a day that has not seen any uploads yet.
pub fn empty_day(date: DateTime<Utc>) -> DailyStat {
    DailyStat {
        date,
        uploads_count: 0,
        total_volume: 0.0,
        avg_file_size: 0.0,
        avg_upload_speed: random_speed(),
        avg_upload_time: 0.0,
        success_rate: 1.0,
    }
}

/// The canned records a fresh store starts with.
pub fn starter_files() -> Vec<FileRecord> {
    let now = Utc::now();
    [
        ("mountain-sunrise.jpg", 2_845_122, "image/jpeg", 3),
        ("quarterly-report.pdf", 1_204_733, "application/pdf", 7),
        ("team-offsite.mp4", 48_392_001, "video/mp4", 26),
        ("city-skyline.png", 4_021_560, "image/png", 30),
        ("meeting-notes.txt", 8_212, "text/plain", 52),
    ]
    .into_iter()
    .map(|(name, size, mime, hours_ago)| {
        let id = Uuid::new_v4().to_string();
        FileRecord {
            url: format!("https://picsum.photos/400/300?random={id}"),
            id,
            name: name.to_string(),
            size,
            mime: mime.to_string(),
            uploaded_at: now - Duration::hours(hours_ago),
            status: UploadStatus::Completed,
            progress: 100,
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_covers_every_day_through_today() {
        let series = synthetic_daily_series(HISTORY_DAYS);
        assert_eq!(series.len(), HISTORY_DAYS as usize + 1);

        let today = day_start(Utc::now());
        assert_eq!(series.first().map(|d| d.date), Some(today - Duration::days(HISTORY_DAYS)));
        assert_eq!(series.last().map(|d| d.date), Some(today));

        // Strictly ascending, one entry per day.
        for pair in series.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn series_figures_stay_in_their_bounds() {
        for day in synthetic_daily_series(HISTORY_DAYS) {
            assert!((5..=24).contains(&day.uploads_count));
            assert!((2.0..12.0).contains(&day.avg_upload_speed));
            assert!((5.0..55.0).contains(&day.avg_file_size));
            assert!((0.9..1.0).contains(&day.success_rate));
            assert!((day.total_volume - day.uploads_count as f64 * day.avg_file_size).abs() < 1e-9);
        }
    }

    #[test]
    fn starter_files_are_distinct_and_recent() {
        let files = starter_files();
        let ids: std::collections::HashSet<&str> = files.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), files.len());
        assert!(files.iter().any(|f| f.uploaded_at > Utc::now() - Duration::days(1)));
    }
}
