use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Completed,
}

/// One uploaded file's metadata and preview reference. Serialized field
/// names are camelCase so exports read naturally in JSON tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime: String,
    pub uploaded_at: DateTime<Utc>,
    pub status: UploadStatus,
    pub progress: u8,
    pub url: String,
}

/// Intake payload for a file about to enter the store. The store mints the
/// id and timestamp; a missing `url` gets a placeholder preview.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub url: Option<String>,
}

/// Merge-patch for an existing record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileUpdate {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    All,
    Images,
    Documents,
    Videos,
}

impl FileCategory {
    pub const ALL: [FileCategory; 4] = [
        FileCategory::All,
        FileCategory::Images,
        FileCategory::Documents,
        FileCategory::Videos,
    ];

    /// View-layer predicate over the stored MIME-like type string.
    pub fn matches(&self, mime: &str) -> bool {
        match self {
            FileCategory::All => true,
            FileCategory::Images => mime.starts_with("image/"),
            FileCategory::Videos => mime.starts_with("video/"),
            FileCategory::Documents => mime.contains("pdf") || mime.contains("document"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

/// One synthetic day of upload history. Volumes and sizes are in MB,
/// speed in MB/s, upload time in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    pub date: DateTime<Utc>,
    pub uploads_count: u32,
    pub total_volume: f64,
    pub avg_file_size: f64,
    pub avg_upload_speed: f64,
    pub avg_upload_time: f64,
    pub success_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub x: DateTime<Utc>,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_files: u64,
    /// Bytes; historical MB figures are converted before blending.
    pub total_volume: f64,
    pub avg_file_size: f64,
    pub avg_upload_speed: f64,
    pub avg_upload_time: f64,
    pub success_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub upload_speed: Vec<SeriesPoint>,
    pub file_size: Vec<SeriesPoint>,
    pub volume: Vec<SeriesPoint>,
    pub uploads_count: Vec<SeriesPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoveredRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Point-in-time derived aggregate of upload statistics. Regenerated on
/// each query, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadStats {
    pub overview: Overview,
    pub chart_data: ChartData,
    pub date_range: CoveredRange,
}

/// Inclusive date-range filter for analytics queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemHealth {
    Healthy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeStats {
    pub active_uploads: u32,
    pub files_last_24h: usize,
    pub volume_last_24h: u64,
    pub current_upload_speed: f64,
    pub system_health: SystemHealth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }

    pub fn label(&self) -> &'static str {
        self.extension()
    }
}

pub mod error;
pub mod services;

pub use error::{Result, ServiceError};

#[cfg(feature = "frontend")]
pub mod frontend;

#[cfg(feature = "frontend")]
pub use frontend::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn record(mime: &str) -> FileRecord {
        FileRecord {
            id: mime.to_string(),
            name: format!("file.{mime}"),
            size: 1,
            mime: mime.to_string(),
            uploaded_at: Utc::now(),
            status: UploadStatus::Completed,
            progress: 100,
            url: String::new(),
        }
    }

    #[test]
    fn category_predicates_partition_a_mixed_store() {
        let records = [
            record("image/png"),
            record("image/jpeg"),
            record("application/pdf"),
        ];

        let count = |cat: FileCategory| records.iter().filter(|r| cat.matches(&r.mime)).count();

        assert_eq!(count(FileCategory::Images), 2);
        assert_eq!(count(FileCategory::Documents), 1);
        assert_eq!(count(FileCategory::Videos), 0);
        assert_eq!(count(FileCategory::All), records.len());
    }

    #[test]
    fn documents_match_word_processor_mimes() {
        assert!(FileCategory::Documents
            .matches("application/vnd.openxmlformats-officedocument.wordprocessingml.document"));
        assert!(!FileCategory::Documents.matches("image/png"));
    }

    #[test]
    fn file_record_serializes_with_camel_case_field_names() {
        let rec = record("image/png");
        let json = serde_json::to_value(&rec).expect("serialize");

        assert!(json.get("uploadedAt").is_some());
        assert_eq!(json["type"], "image/png");
        assert_eq!(json["status"], "completed");
        assert_eq!(json["progress"], 100);
    }
}
