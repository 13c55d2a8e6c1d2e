use leptos::*;

use super::icon::Icon;
use crate::FileCategory;

pub fn category_label(category: FileCategory) -> &'static str {
    match category {
        FileCategory::All => "All Files",
        FileCategory::Images => "Images",
        FileCategory::Documents => "Documents",
        FileCategory::Videos => "Videos",
    }
}

fn category_icon(category: FileCategory) -> &'static str {
    match category {
        FileCategory::All => "files",
        FileCategory::Images => "image",
        FileCategory::Documents => "file-text",
        FileCategory::Videos => "video",
    }
}

/// Horizontal strip of category filter pills under the header.
#[component]
pub fn FilterBar(
    filter: ReadSignal<FileCategory>,
    set_filter: WriteSignal<FileCategory>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <div class="filter-inner">
                {FileCategory::ALL
                    .iter()
                    .map(|category| {
                        let category = *category;
                        view! {
                            <button
                                class=move || {
                                    if filter.get() == category {
                                        "filter-btn active"
                                    } else {
                                        "filter-btn"
                                    }
                                }
                                on:click=move |_| set_filter.set(category)
                            >
                                <Icon name=category_icon(category) size=14/>
                                <span>{category_label(category)}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
