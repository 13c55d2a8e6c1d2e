use leptos::*;

/// Inline stroke icon set, 24x24 outline style, colored via
/// `currentColor` so the theme variables flow through.
fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "upload" => &[
            "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
            "M17 8l-5-5-5 5",
            "M12 3v12",
        ],
        "download" => &[
            "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
            "M7 10l5 5 5-5",
            "M12 15V3",
        ],
        "image" => &[
            "M3 5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            "M8.5 10a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3z",
            "M21 15l-5-5L5 21",
        ],
        "video" => &[
            "M23 7l-7 5 7 5V7z",
            "M1 7a2 2 0 0 1 2-2h11a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2z",
        ],
        "file-text" => &[
            "M13 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V9z",
            "M13 2v7h7",
            "M16 13H8",
            "M16 17H8",
        ],
        "file-spreadsheet" => &[
            "M13 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V9z",
            "M13 2v7h7",
            "M8 13h8",
            "M8 17h8",
            "M12 13v8",
        ],
        "file-x" => &[
            "M13 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V9z",
            "M13 2v7h7",
            "M9.5 12.5l5 5",
            "M14.5 12.5l-5 5",
        ],
        "files" => &[
            "M9 18a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h7l5 5v9a2 2 0 0 1-2 2z",
            "M16 2v5h5",
            "M3 7v13a2 2 0 0 0 2 2h12",
        ],
        "eye" => &[
            "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z",
            "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
        ],
        "trash" => &[
            "M3 6h18",
            "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6",
            "M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2",
            "M10 11v6",
            "M14 11v6",
        ],
        "x" => &["M18 6L6 18", "M6 6l12 12"],
        "sun" => &[
            "M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10z",
            "M12 1v2",
            "M12 21v2",
            "M4.22 4.22l1.42 1.42",
            "M18.36 18.36l1.42 1.42",
            "M1 12h2",
            "M21 12h2",
            "M4.22 19.78l1.42-1.42",
            "M18.36 5.64l1.42-1.42",
        ],
        "moon" => &["M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"],
        "grid" => &[
            "M3 3h7v7H3z",
            "M14 3h7v7h-7z",
            "M14 14h7v7h-7z",
            "M3 14h7v7H3z",
        ],
        "list" => &[
            "M8 6h13",
            "M8 12h13",
            "M8 18h13",
            "M3 6h.01",
            "M3 12h.01",
            "M3 18h.01",
        ],
        "inbox" => &[
            "M22 12h-6l-2 3h-4l-2-3H2",
            "M5.45 5.11L2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.45-6.89A2 2 0 0 0 16.76 4H7.24a2 2 0 0 0-1.79 1.11z",
        ],
        "alert-circle" => &[
            "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
            "M12 8v4",
            "M12 16h.01",
        ],
        "check-circle" => &[
            "M22 11.08V12a10 10 0 1 1-5.93-9.14",
            "M22 4L12 14.01l-3-3",
        ],
        "home" => &[
            "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
            "M9 22V12h6v10",
        ],
        "bar-chart" => &["M12 20V10", "M18 20V4", "M6 20v-4"],
        "zap" => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
        "clock" => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 6v6l4 2"],
        "hard-drive" => &[
            "M22 12H2",
            "M5.45 5.11L2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.45-6.89A2 2 0 0 0 16.76 4H7.24a2 2 0 0 0-1.79 1.11z",
            "M6 16h.01",
            "M10 16h.01",
        ],
        "folder-open" => &[
            "M2 18V5a2 2 0 0 1 2-2h5l2 2h7a2 2 0 0 1 2 2v2",
            "M2 18l3.2-7.3A2 2 0 0 1 7 9.5h13.5a1 1 0 0 1 .94 1.34L19 17.7a2 2 0 0 1-1.88 1.3H4a2 2 0 0 1-2-1z",
        ],
        // Unknown names fall back to a plain document outline.
        _ => &[
            "M13 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V9z",
            "M13 2v7h7",
        ],
    }
}

#[component]
pub fn Icon(
    name: &'static str,
    #[prop(default = 16)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon_paths(name)
                .iter()
                .map(|d| view! { <path d=*d></path> })
                .collect_view()}
        </svg>
    }
}
