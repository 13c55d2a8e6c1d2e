use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use uuid::Uuid;

use super::{seed, simulate_latency};
use crate::{FileRecord, FileUpdate, NewFile, Result, ServiceError, UploadStatus};

/// In-memory file repository. Cloning hands out another handle to the same
/// underlying list, so the UI and the analytics aggregator can share one
/// store without any module-level mutable state.
///
/// Nothing here persists across a reload; that is the point.
#[derive(Clone, Default)]
pub struct FileStore {
    files: Rc<RefCell<Vec<FileRecord>>>,
}

impl FileStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the canned starter records.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.files.borrow_mut().extend(seed::starter_files());
        store
    }

    /// Defensive copy of every record, in insertion order.
    pub async fn get_all(&self) -> Vec<FileRecord> {
        simulate_latency(300).await;
        self.files.borrow().clone()
    }

    pub async fn get_by_id(&self, id: &str) -> Option<FileRecord> {
        simulate_latency(200).await;
        self.files.borrow().iter().find(|f| f.id == id).cloned()
    }

    /// Mints an id and timestamp for the intake payload, appends the record
    /// and returns a copy of it. Records always enter fully uploaded; there
    /// are no partial-progress states anywhere in this system.
    pub async fn create(&self, new_file: NewFile) -> Result<FileRecord> {
        simulate_latency(400).await;

        let id = Uuid::new_v4().to_string();
        let url = new_file
            .url
            .unwrap_or_else(|| format!("https://picsum.photos/400/300?random={id}"));
        let record = FileRecord {
            id,
            name: new_file.name,
            size: new_file.size,
            mime: new_file.mime,
            uploaded_at: Utc::now(),
            status: UploadStatus::Completed,
            progress: 100,
            url,
        };

        self.files.borrow_mut().push(record.clone());
        Ok(record)
    }

    pub async fn update(&self, id: &str, update: FileUpdate) -> Result<FileRecord> {
        simulate_latency(300).await;

        let mut files = self.files.borrow_mut();
        let record = files
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| ServiceError::not_found(id))?;

        if let Some(name) = update.name {
            record.name = name;
        }
        Ok(record.clone())
    }

    /// Removes exactly the named record and returns it, so the caller can
    /// release its preview URL. A miss leaves the store untouched.
    pub async fn delete(&self, id: &str) -> Result<FileRecord> {
        simulate_latency(250).await;

        let mut files = self.files.borrow_mut();
        let index = files
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| ServiceError::not_found(id))?;
        Ok(files.remove(index))
    }

    pub fn len(&self) -> usize {
        self.files.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::collections::HashSet;

    fn new_file(name: &str, mime: &str, size: u64) -> NewFile {
        NewFile {
            name: name.to_string(),
            size,
            mime: mime.to_string(),
            url: None,
        }
    }

    #[test]
    fn create_appends_in_order_with_unique_ids() {
        block_on(async {
            let store = FileStore::new();
            let names = ["a.png", "b.pdf", "c.mp4", "d.txt", "e.jpg"];

            for name in names {
                store.create(new_file(name, "image/png", 10)).await.unwrap();
            }

            let all = store.get_all().await;
            assert_eq!(all.len(), names.len());
            let stored: Vec<&str> = all.iter().map(|f| f.name.as_str()).collect();
            assert_eq!(stored, names);

            let ids: HashSet<&str> = all.iter().map(|f| f.id.as_str()).collect();
            assert_eq!(ids.len(), names.len());
            assert!(all.iter().all(|f| f.progress == 100));
            assert!(all.iter().all(|f| f.status == UploadStatus::Completed));
        });
    }

    #[test]
    fn create_without_url_assigns_a_placeholder() {
        block_on(async {
            let store = FileStore::new();
            let rec = store.create(new_file("x.bin", "application/octet-stream", 1)).await.unwrap();
            assert!(rec.url.contains(&rec.id));
        });
    }

    #[test]
    fn delete_removes_exactly_the_named_record() {
        block_on(async {
            let store = FileStore::new();
            let a = store.create(new_file("a.png", "image/png", 1)).await.unwrap();
            let b = store.create(new_file("b.png", "image/png", 2)).await.unwrap();
            let c = store.create(new_file("c.png", "image/png", 3)).await.unwrap();

            let removed = store.delete(&b.id).await.unwrap();
            assert_eq!(removed.id, b.id);

            let remaining: Vec<String> = store.get_all().await.into_iter().map(|f| f.id).collect();
            assert_eq!(remaining, vec![a.id, c.id]);
        });
    }

    #[test]
    fn delete_of_missing_id_reports_not_found_and_leaves_store_untouched() {
        block_on(async {
            let store = FileStore::new();
            for name in ["a.png", "b.png", "c.pdf"] {
                store.create(new_file(name, "image/png", 1)).await.unwrap();
            }
            let before = store.get_all().await;

            let err = store.delete("zzz").await.unwrap_err();
            assert_eq!(err, ServiceError::not_found("zzz"));
            assert_eq!(store.get_all().await, before);
        });
    }

    #[test]
    fn update_renames_and_misses_report_not_found() {
        block_on(async {
            let store = FileStore::new();
            let rec = store.create(new_file("old.png", "image/png", 1)).await.unwrap();

            let patched = store
                .update(&rec.id, FileUpdate { name: Some("new.png".into()) })
                .await
                .unwrap();
            assert_eq!(patched.name, "new.png");
            assert_eq!(store.get_by_id(&rec.id).await.unwrap().name, "new.png");

            let err = store.update("zzz", FileUpdate::default()).await.unwrap_err();
            assert!(matches!(err, ServiceError::NotFound { .. }));
        });
    }

    #[test]
    fn get_all_returns_a_defensive_copy() {
        block_on(async {
            let store = FileStore::new();
            store.create(new_file("a.png", "image/png", 1)).await.unwrap();

            let mut copy = store.get_all().await;
            copy.clear();
            assert_eq!(store.len(), 1);
        });
    }

    #[test]
    fn seeded_store_starts_non_empty() {
        let store = FileStore::seeded();
        assert!(!store.is_empty());
    }
}
