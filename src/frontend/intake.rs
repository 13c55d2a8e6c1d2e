//! Normalization of raw browser file handles into store intake payloads,
//! plus the object-URL lifecycle that goes with them.

use gloo_file::{File, FileList};

use crate::NewFile;

/// Collects a DOM file list (from a picker input or a drop's data
/// transfer) into owned handles.
pub fn collect_files(list: Option<web_sys::FileList>) -> Vec<File> {
    match list {
        Some(list) => FileList::from(list).iter().cloned().collect(),
        None => Vec::new(),
    }
}

/// Maps a file handle to the store's intake payload, allocating a blob
/// object URL so the record can be previewed without re-reading the file.
pub fn normalize(file: &File) -> NewFile {
    NewFile {
        name: file.name(),
        size: file.size(),
        mime: file.raw_mime_type(),
        url: acquire_preview_url(file),
    }
}

fn acquire_preview_url(file: &File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file.as_ref()).ok()
}

/// Blob URLs pin the underlying bytes until revoked, so they are released
/// the moment their record leaves the store. Placeholder URLs (seeded
/// records) pass through untouched.
pub fn release_preview_url(url: &str) {
    if url.starts_with("blob:") {
        if web_sys::Url::revoke_object_url(url).is_err() {
            log::warn!("failed to revoke preview url {url}");
        }
    }
}
