use std::time::Duration;

use chrono::{NaiveDate, NaiveTime, Utc};
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};

use super::charts::{BarChart, LineChart};
use super::file_display::format_file_size;
use super::header::Header;
use super::icon::Icon;
use super::toast::Toasts;
use crate::services::Analytics;
use crate::{ChartData, DateRange, ExportFormat, RealtimeStats, SeriesPoint, UploadStats};

const REALTIME_POLL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartKind {
    Speed,
    FileSize,
    Volume,
}

impl ChartKind {
    const ALL: [ChartKind; 3] = [ChartKind::Speed, ChartKind::FileSize, ChartKind::Volume];

    fn title(&self) -> &'static str {
        match self {
            ChartKind::Speed => "Upload Speed Over Time",
            ChartKind::FileSize => "Average File Size Over Time",
            ChartKind::Volume => "Total Upload Volume Over Time",
        }
    }

    fn y_label(&self) -> &'static str {
        match self {
            ChartKind::Speed => "Speed (MB/s)",
            ChartKind::FileSize => "Size (MB)",
            ChartKind::Volume => "Volume (MB)",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            ChartKind::Speed => "#3b82f6",
            ChartKind::FileSize => "#10b981",
            ChartKind::Volume => "#f59e0b",
        }
    }

    fn series<'a>(&self, data: &'a ChartData) -> &'a [SeriesPoint] {
        match self {
            ChartKind::Speed => &data.upload_speed,
            ChartKind::FileSize => &data.file_size,
            ChartKind::Volume => &data.volume,
        }
    }
}

fn parse_range(start: &str, end: &str) -> Option<DateRange> {
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").ok()?;
    let end = NaiveDate::parse_from_str(end, "%Y-%m-%d").ok()?;
    Some(DateRange {
        start: start.and_time(NaiveTime::MIN).and_utc(),
        end: end.and_time(NaiveTime::MIN).and_utc(),
    })
}

fn format_duration(ms: f64) -> String {
    if ms < 1000.0 {
        format!("{}ms", ms.round() as i64)
    } else if ms < 60_000.0 {
        format!("{:.1}s", ms / 1000.0)
    } else {
        format!("{:.1}m", ms / 60_000.0)
    }
}

/// Serves the export to the user as a browser-level file save: a blob URL
/// behind a synthetic anchor click, revoked as soon as the click lands.
fn save_download(contents: &str, format: ExportFormat) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(format.mime());
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&format!(
        "upload-analytics-{}.{}",
        Utc::now().format("%Y-%m-%d"),
        format.extension()
    ));
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

/// Charts dashboard: overview cards blended from the synthetic history and
/// the live store, a switchable line chart, the daily-uploads bar chart,
/// realtime widgets on a five-second poll and JSON/CSV export.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let analytics = expect_context::<Analytics>();
    let toasts = expect_context::<Toasts>();

    let (stats, set_stats) = create_signal(None::<UploadStats>);
    let (realtime, set_realtime) = create_signal(None::<RealtimeStats>);
    let (loading, set_loading) = create_signal(true);
    let (active_chart, set_active_chart) = create_signal(ChartKind::Speed);

    let today = Utc::now().date_naive();
    let (range_start, set_range_start) =
        create_signal((today - chrono::Duration::days(30)).format("%Y-%m-%d").to_string());
    let (range_end, set_range_end) = create_signal(today.format("%Y-%m-%d").to_string());

    // Re-query whenever the date range changes.
    {
        let analytics = analytics.clone();
        create_effect(move |_| {
            let range = parse_range(&range_start.get(), &range_end.get());
            let analytics = analytics.clone();
            set_loading.set(true);
            spawn_local(async move {
                let snapshot = analytics.upload_stats(range).await;
                set_stats.set(Some(snapshot));
                set_loading.set(false);
            });
        });
    }

    // Realtime widgets: poll every five seconds, cancel on teardown.
    {
        let analytics = analytics.clone();
        let poll = move || {
            let analytics = analytics.clone();
            spawn_local(async move {
                let snapshot = analytics.realtime_stats().await;
                set_realtime.set(Some(snapshot));
            });
        };
        match set_interval_with_handle(poll, REALTIME_POLL) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => log::error!("failed to start realtime polling: {err:?}"),
        }
    }

    let export = {
        let analytics = analytics.clone();
        Callback::new(move |format: ExportFormat| {
            let analytics = analytics.clone();
            let range = parse_range(&range_start.get_untracked(), &range_end.get_untracked());
            spawn_local(async move {
                match analytics.export(format, range).await {
                    Ok(payload) => match save_download(&payload, format) {
                        Ok(()) => toasts.success(format!(
                            "Data exported as {}",
                            format.label().to_uppercase()
                        )),
                        Err(err) => {
                            log::error!("export save failed: {err:?}");
                            toasts.error("Failed to export data");
                        }
                    },
                    Err(err) => {
                        log::error!("export failed: {err}");
                        toasts.error("Failed to export data");
                    }
                }
            });
        })
    };

    let total_files = move || {
        stats
            .get()
            .map(|s| s.overview.total_files.to_string())
            .unwrap_or_else(|| "0".to_string())
    };
    let total_volume =
        move || format_file_size(stats.get().map(|s| s.overview.total_volume as u64).unwrap_or(0));
    let avg_speed = move || {
        format!(
            "{:.1} MB/s",
            stats.get().map(|s| s.overview.avg_upload_speed).unwrap_or(0.0)
        )
    };
    let avg_time =
        move || format_duration(stats.get().map(|s| s.overview.avg_upload_time).unwrap_or(0.0));
    let success_rate = move || {
        format!(
            "{:.1}% success rate",
            stats.get().map(|s| s.overview.success_rate).unwrap_or(0.0) * 100.0
        )
    };

    view! {
        <Header/>

        <main class="page">
            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="loading-state">
                            <div class="spinner"></div>
                        </div>
                    }
                }
            >
                <div class="dash-header">
                    <div>
                        <h1 class="dash-title">"Upload Analytics Dashboard"</h1>
                        <p class="dash-subtitle">
                            "Monitor upload performance and track usage trends"
                        </p>
                    </div>

                    <div class="dash-controls">
                        <div class="date-range">
                            <input
                                type="date"
                                class="date-input"
                                prop:value=range_start
                                on:input=move |ev| set_range_start.set(event_target_value(&ev))
                            />
                            <input
                                type="date"
                                class="date-input"
                                prop:value=range_end
                                on:input=move |ev| set_range_end.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="export-actions">
                            <button
                                class="secondary-btn"
                                on:click=move |_| export.call(ExportFormat::Json)
                            >
                                <Icon name="download"/>
                                <span>"Export JSON"</span>
                            </button>
                            <button
                                class="secondary-btn"
                                on:click=move |_| export.call(ExportFormat::Csv)
                            >
                                <Icon name="file-text"/>
                                <span>"Export CSV"</span>
                            </button>
                        </div>
                    </div>
                </div>

                <div class="stat-cards">
                    <div class="stat-card">
                        <div class="stat-card-top">
                            <div>
                                <span class="stat-label">"Total Files"</span>
                                <h3 class="stat-value">{total_files}</h3>
                            </div>
                            <div class="stat-icon accent-blue">
                                <Icon name="files" size=24/>
                            </div>
                        </div>
                        {move || {
                            realtime
                                .get()
                                .map(|r| {
                                    view! {
                                        <span class="stat-note positive">
                                            {format!("+{} in last 24h", r.files_last_24h)}
                                        </span>
                                    }
                                })
                        }}
                    </div>

                    <div class="stat-card">
                        <div class="stat-card-top">
                            <div>
                                <span class="stat-label">"Total Volume"</span>
                                <h3 class="stat-value">{total_volume}</h3>
                            </div>
                            <div class="stat-icon accent-purple">
                                <Icon name="hard-drive" size=24/>
                            </div>
                        </div>
                        {move || {
                            realtime
                                .get()
                                .map(|r| {
                                    view! {
                                        <span class="stat-note positive">
                                            {format!(
                                                "+{} in last 24h",
                                                format_file_size(r.volume_last_24h)
                                            )}
                                        </span>
                                    }
                                })
                        }}
                    </div>

                    <div class="stat-card">
                        <div class="stat-card-top">
                            <div>
                                <span class="stat-label">"Avg Speed"</span>
                                <h3 class="stat-value">{avg_speed}</h3>
                            </div>
                            <div class="stat-icon accent-amber">
                                <Icon name="zap" size=24/>
                            </div>
                        </div>
                        {move || {
                            realtime
                                .get()
                                .map(|r| {
                                    view! {
                                        <span class="stat-note info">
                                            {format!("Current: {:.1} MB/s", r.current_upload_speed)}
                                        </span>
                                    }
                                })
                        }}
                    </div>

                    <div class="stat-card">
                        <div class="stat-card-top">
                            <div>
                                <span class="stat-label">"Avg Upload Time"</span>
                                <h3 class="stat-value">{avg_time}</h3>
                            </div>
                            <div class="stat-icon accent-green">
                                <Icon name="clock" size=24/>
                            </div>
                        </div>
                        <span class="stat-note positive">{success_rate}</span>
                    </div>
                </div>

                <div class="chart-tabs">
                    {ChartKind::ALL
                        .iter()
                        .map(|kind| {
                            let kind = *kind;
                            view! {
                                <button
                                    class=move || {
                                        if active_chart.get() == kind {
                                            "chart-tab active"
                                        } else {
                                            "chart-tab"
                                        }
                                    }
                                    on:click=move |_| set_active_chart.set(kind)
                                >
                                    {kind.title()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="panel chart-panel">
                    {move || {
                        stats
                            .get()
                            .map(|s| {
                                let kind = active_chart.get();
                                view! {
                                    <LineChart
                                        points=kind.series(&s.chart_data).to_vec()
                                        color=kind.color()
                                        title=kind.title()
                                        y_label=kind.y_label()
                                    />
                                }
                            })
                    }}
                </div>

                <div class="dash-grid">
                    <div class="panel">
                        {move || {
                            stats
                                .get()
                                .map(|s| {
                                    view! {
                                        <BarChart
                                            points=s.chart_data.uploads_count.clone()
                                            color="#3b82f6"
                                            title="Daily Upload Count"
                                            y_label="Files"
                                        />
                                    }
                                })
                        }}
                    </div>

                    <div class="panel system-status">
                        <h3 class="panel-title">"System Status"</h3>
                        <div class="status-rows">
                            <div class="status-row">
                                <span>"Upload System"</span>
                                <span class="status-pill ok">
                                    <span class="status-dot"></span>
                                    "Healthy"
                                </span>
                            </div>
                            <div class="status-row">
                                <span>"Storage"</span>
                                <span class="status-pill ok">
                                    <span class="status-dot"></span>
                                    "Available"
                                </span>
                            </div>
                            <div class="status-row">
                                <span>"Network"</span>
                                <span class="status-pill ok">
                                    <span class="status-dot"></span>
                                    "Optimal"
                                </span>
                            </div>
                            {move || {
                                realtime
                                    .get()
                                    .filter(|r| r.active_uploads > 0)
                                    .map(|r| {
                                        view! {
                                            <div class="status-row">
                                                <span>"Active Uploads"</span>
                                                <span class="status-pill info">
                                                    {r.active_uploads}
                                                </span>
                                            </div>
                                        }
                                    })
                            }}
                        </div>
                    </div>
                </div>
            </Show>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn range_parses_iso_dates_at_midnight() {
        let range = parse_range("2025-07-01", "2025-07-31").expect("valid range");
        assert_eq!(range.start.date_naive().day(), 1);
        assert_eq!(range.end.date_naive().day(), 31);
        assert_eq!(range.start.time(), NaiveTime::MIN);
    }

    #[test]
    fn malformed_dates_disable_the_filter() {
        assert!(parse_range("not-a-date", "2025-07-31").is_none());
        assert!(parse_range("2025-07-01", "").is_none());
    }

    #[test]
    fn durations_pick_a_sensible_unit() {
        assert_eq!(format_duration(420.0), "420ms");
        assert_eq!(format_duration(1_500.0), "1.5s");
        assert_eq!(format_duration(90_000.0), "1.5m");
    }
}
