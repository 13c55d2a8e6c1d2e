use leptos::*;

use super::icon::Icon;
use crate::{FileRecord, ViewMode};

pub fn format_file_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = size as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size as u64, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

pub fn file_icon(mime: &str) -> &'static str {
    if mime.starts_with("image/") {
        "image"
    } else if mime.starts_with("video/") {
        "video"
    } else if mime.contains("pdf") || mime.contains("document") || mime.contains("word") {
        "file-text"
    } else if mime.contains("spreadsheet") || mime.contains("excel") {
        "file-spreadsheet"
    } else {
        "file"
    }
}

pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Grid-of-cards / list-of-rows rendering of the visible subset, with the
/// single-record preview overlay layered on top. Deletion is immediate;
/// there is no undo and no confirmation.
#[component]
pub fn FileDisplayArea(
    files: Memo<Vec<FileRecord>>,
    view_mode: RwSignal<ViewMode>,
    loading: ReadSignal<bool>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let (preview, set_preview) = create_signal(None::<FileRecord>);
    let on_preview = Callback::new(move |file: FileRecord| set_preview.set(Some(file)));
    let close_preview = Callback::new(move |_: ()| set_preview.set(None));

    view! {
        <section class="file-display">
            <Show
                when=move || loading.get()
                fallback=move || {
                    view! {
                        <Show
                            when=move || !files.get().is_empty()
                            fallback=|| {
                                view! {
                                    <div class="empty-state">
                                        <Icon name="inbox" size=48 class="empty-icon"/>
                                        <p>"No files uploaded yet"</p>
                                    </div>
                                }
                            }
                        >
                            <div class="display-header">
                                <h2>"Uploaded Files (" {move || files.get().len()} ")"</h2>
                            </div>

                            <Show
                                when=move || view_mode.get() == ViewMode::Grid
                                fallback=move || {
                                    view! {
                                        <div class="file-list">
                                            <For
                                                each=move || files.get()
                                                key=|file| file.id.clone()
                                                let:file
                                            >
                                                <FileListItem
                                                    file=file
                                                    on_preview=on_preview
                                                    on_delete=on_delete
                                                />
                                            </For>
                                        </div>
                                    }
                                }
                            >
                                <div class="file-grid">
                                    <For
                                        each=move || files.get()
                                        key=|file| file.id.clone()
                                        let:file
                                    >
                                        <FileCard
                                            file=file
                                            on_preview=on_preview
                                            on_delete=on_delete
                                        />
                                    </For>
                                </div>
                            </Show>
                        </Show>
                    }
                }
            >
                <div class="loading-state">
                    <div class="spinner"></div>
                </div>
            </Show>

            <FilePreviewModal preview=preview on_close=close_preview/>
        </section>
    }
}

#[component]
pub fn FileCard(
    file: FileRecord,
    on_preview: Callback<FileRecord>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let icon = file_icon(&file.mime);
    let show_image = is_image(&file.mime);
    let size_label = format_file_size(file.size);
    let name = file.name.clone();
    let url = file.url.clone();
    let delete_id = file.id.clone();
    let preview_record = file.clone();

    view! {
        <div class="file-card">
            <div class="file-thumb">
                {if show_image {
                    view! { <img src=url alt=name.clone() loading="lazy"/> }.into_view()
                } else {
                    view! {
                        <div class="file-thumb-icon">
                            <Icon name=icon size=48/>
                        </div>
                    }
                    .into_view()
                }}

                <div class="file-card-actions">
                    <button
                        class="card-action-btn"
                        title="Preview"
                        on:click=move |_| on_preview.call(preview_record.clone())
                    >
                        <Icon name="eye"/>
                    </button>
                    <button
                        class="card-action-btn delete"
                        title="Delete"
                        on:click=move |_| on_delete.call(delete_id.clone())
                    >
                        <Icon name="trash"/>
                    </button>
                </div>
            </div>

            <div class="file-card-body">
                <h3 class="file-name">{name}</h3>
                <span class="file-meta">{size_label}</span>
            </div>
        </div>
    }
}

#[component]
pub fn FileListItem(
    file: FileRecord,
    on_preview: Callback<FileRecord>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let icon = file_icon(&file.mime);
    let meta = format!(
        "{} \u{2022} {}",
        format_file_size(file.size),
        file.uploaded_at.format("%b %-d, %Y")
    );
    let name = file.name.clone();
    let delete_id = file.id.clone();
    let preview_record = file.clone();

    view! {
        <div class="file-row">
            <div class="file-row-icon">
                <Icon name=icon size=20/>
            </div>

            <div class="file-row-body">
                <h3 class="file-name">{name}</h3>
                <span class="file-meta">{meta}</span>
            </div>

            <div class="file-row-actions">
                <button
                    class="icon-btn"
                    title="Preview"
                    on:click=move |_| on_preview.call(preview_record.clone())
                >
                    <Icon name="eye"/>
                </button>
                <button
                    class="icon-btn danger"
                    title="Delete"
                    on:click=move |_| on_delete.call(delete_id.clone())
                >
                    <Icon name="trash"/>
                </button>
            </div>
        </div>
    }
}

/// Single-record overlay. A click on the backdrop or the close button
/// returns to the prior view; clicks inside the panel stay put.
#[component]
pub fn FilePreviewModal(
    preview: ReadSignal<Option<FileRecord>>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || preview.get().is_some()>
            {move || {
                preview
                    .get()
                    .map(|file| {
                        let show_image = is_image(&file.mime);
                        let icon = file_icon(&file.mime);
                        let name = file.name.clone();
                        let url = file.url.clone();
                        view! {
                            <div class="modal-backdrop" on:click=move |_| on_close.call(())>
                                <div class="modal" on:click=|ev| ev.stop_propagation()>
                                    <div class="modal-header">
                                        <h3 class="file-name">{name.clone()}</h3>
                                        <button
                                            class="icon-btn"
                                            title="Close"
                                            on:click=move |_| on_close.call(())
                                        >
                                            <Icon name="x"/>
                                        </button>
                                    </div>
                                    <div class="modal-body">
                                        {if show_image {
                                            view! { <img src=url alt=name/> }.into_view()
                                        } else {
                                            view! {
                                                <div class="modal-placeholder">
                                                    <Icon name=icon size=64/>
                                                    <p>"Preview not available for this file type"</p>
                                                </div>
                                            }
                                            .into_view()
                                        }}
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_sizes_format_with_binary_units() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2_048), "2.0 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn icons_follow_the_mime_family() {
        assert_eq!(file_icon("image/png"), "image");
        assert_eq!(file_icon("video/mp4"), "video");
        assert_eq!(file_icon("application/pdf"), "file-text");
        assert_eq!(
            file_icon("application/vnd.ms-excel.sheet.macroenabled.12"),
            "file-spreadsheet"
        );
        assert_eq!(file_icon("application/octet-stream"), "file");
    }

    #[test]
    fn only_images_render_inline() {
        assert!(is_image("image/webp"));
        assert!(!is_image("video/mp4"));
    }
}
