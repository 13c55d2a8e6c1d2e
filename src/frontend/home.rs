use futures::future::join_all;
use leptos::*;

use super::file_display::FileDisplayArea;
use super::filter_bar::FilterBar;
use super::header::Header;
use super::intake;
use super::toast::Toasts;
use super::upload_zone::UploadZone;
use crate::services::{Analytics, FileStore};
use crate::{FileCategory, FileRecord, NewFile, ViewMode};

/// File intake and browsing page: upload zone, category filter, grid/list
/// display with preview and delete.
#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<FileStore>();
    let analytics = expect_context::<Analytics>();
    let toasts = expect_context::<Toasts>();

    let (files, set_files) = create_signal(Vec::<FileRecord>::new());
    let (loading, set_loading) = create_signal(false);
    let (filter, set_filter) = create_signal(FileCategory::All);
    let view_mode = create_rw_signal(ViewMode::Grid);

    // Initial load from the store.
    {
        let store = store.clone();
        create_effect(move |_| {
            let store = store.clone();
            set_loading.set(true);
            spawn_local(async move {
                let records = store.get_all().await;
                log::info!("loaded {} files", records.len());
                set_files.set(records);
                set_loading.set(false);
            });
        });
    }

    // The visible subset: pure function of store contents and filter.
    let filtered_files = create_memo(move |_| {
        let active = filter.get();
        files
            .get()
            .into_iter()
            .filter(|file| active.matches(&file.mime))
            .collect::<Vec<_>>()
    });

    let handle_upload = {
        let store = store.clone();
        let analytics = analytics.clone();
        Callback::new(move |incoming: Vec<gloo_file::File>| {
            let store = store.clone();
            let analytics = analytics.clone();
            spawn_local(async move {
                let batch: Vec<NewFile> = incoming.iter().map(intake::normalize).collect();
                let results = join_all(batch.into_iter().map(|payload| {
                    let store = store.clone();
                    async move { store.create(payload).await }
                }))
                .await;

                let mut uploaded = Vec::new();
                let mut failures = 0usize;
                for result in results {
                    match result {
                        Ok(record) => uploaded.push(record),
                        Err(err) => {
                            log::error!("upload failed: {err}");
                            failures += 1;
                        }
                    }
                }

                for record in &uploaded {
                    analytics.record_upload(record).await;
                }

                if !uploaded.is_empty() {
                    let count = uploaded.len();
                    set_files.update(|all| all.extend(uploaded));
                    toasts.success(format!(
                        "Successfully uploaded {count} file{}",
                        if count == 1 { "" } else { "s" }
                    ));
                }
                if failures > 0 {
                    toasts.error("Failed to upload files");
                }
            });
        })
    };

    let handle_delete = {
        let store = store.clone();
        Callback::new(move |id: String| {
            let store = store.clone();
            spawn_local(async move {
                match store.delete(&id).await {
                    Ok(removed) => {
                        set_files.update(|all| all.retain(|f| f.id != removed.id));
                        intake::release_preview_url(&removed.url);
                        toasts.success("File deleted successfully");
                    }
                    Err(err) => {
                        log::error!("delete failed: {err}");
                        toasts.error("Failed to delete file");
                    }
                }
            });
        })
    };

    view! {
        <Header view_mode=view_mode/>
        <FilterBar filter=filter set_filter=set_filter/>

        <main class="page">
            <UploadZone on_files=handle_upload/>
            <FileDisplayArea
                files=filtered_files
                view_mode=view_mode
                loading=loading
                on_delete=handle_delete
            />
        </main>
    }
}
