use leptos::*;
use web_sys::{DragEvent, Event};

use super::icon::Icon;
use super::intake;

/// Drag-and-drop intake surface with a hidden file-picker fallback. Hands
/// every accepted batch of raw file handles to the owner; no validation,
/// no duplicate detection.
#[component]
pub fn UploadZone(on_files: Callback<Vec<gloo_file::File>>) -> impl IntoView {
    let (drag_active, set_drag_active) = create_signal(false);
    let file_input_ref = create_node_ref::<leptos::html::Input>();

    let on_file_change = move |_ev: Event| {
        if let Some(input) = file_input_ref.get_untracked() {
            let files = intake::collect_files(input.files());
            // Reset so picking the same file twice still fires a change.
            input.set_value("");
            if !files.is_empty() {
                on_files.call(files);
            }
        }
    };

    let on_choose_click = move |_| {
        if let Some(input) = file_input_ref.get_untracked() {
            input.click();
        }
    };

    let drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(true);
    };

    let drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
        if let Some(transfer) = ev.data_transfer() {
            let files = intake::collect_files(transfer.files());
            log::info!("dropped {} files", files.len());
            if !files.is_empty() {
                on_files.call(files);
            }
        }
    };

    view! {
        <div
            class=move || {
                if drag_active.get() { "upload-zone drag-active" } else { "upload-zone" }
            }
            on:dragenter=drag_over
            on:dragover=drag_over
            on:dragleave=drag_leave
            on:drop=on_drop
        >
            <input
                type="file"
                class="upload-input"
                multiple
                ref=file_input_ref
                on:change=on_file_change
            />

            <div class="upload-inner">
                <div class=move || {
                    if drag_active.get() { "upload-badge active" } else { "upload-badge" }
                }>
                    <Show
                        when=move || drag_active.get()
                        fallback=|| view! { <Icon name="upload" size=24/> }
                    >
                        <Icon name="download" size=24/>
                    </Show>
                </div>

                <h3 class="upload-title">
                    {move || {
                        if drag_active.get() { "Drop files here" } else { "Drag & drop files here" }
                    }}
                </h3>
                <p class="upload-hint">"or click to browse files"</p>

                <button type="button" class="primary-btn" on:click=on_choose_click>
                    <Icon name="folder-open"/>
                    <span>"Choose Files"</span>
                </button>
            </div>
        </div>
    }
}
