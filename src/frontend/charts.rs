use leptos::*;

use crate::SeriesPoint;

// Shared SVG geometry. Charts scale with CSS; these are viewBox units.
const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 260.0;
const PAD: f64 = 36.0;

fn plot_w() -> f64 {
    VIEW_W - 2.0 * PAD
}

fn plot_h() -> f64 {
    VIEW_H - 2.0 * PAD
}

/// Rounds a series maximum up to 1/2/5 x 10^k so the top gridline lands on
/// a round figure.
pub fn nice_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// X position for sample `index` of `len` evenly spaced samples. A single
/// sample sits mid-plot instead of dividing by zero.
pub fn x_at(index: usize, len: usize) -> f64 {
    if len <= 1 {
        PAD + plot_w() / 2.0
    } else {
        PAD + plot_w() * index as f64 / (len - 1) as f64
    }
}

pub fn y_at(value: f64, max: f64) -> f64 {
    VIEW_H - PAD - (value / max) * plot_h()
}

pub fn polyline_points(values: &[f64], max: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", x_at(i, values.len()), y_at(*v, max)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed path under the line, for the soft fill beneath it.
pub fn area_path(values: &[f64], max: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let baseline = VIEW_H - PAD;
    let mut path = format!("M{:.1},{baseline:.1}", x_at(0, values.len()));
    for (i, v) in values.iter().enumerate() {
        path.push_str(&format!(
            " L{:.1},{:.1}",
            x_at(i, values.len()),
            y_at(*v, max)
        ));
    }
    path.push_str(&format!(
        " L{:.1},{baseline:.1} Z",
        x_at(values.len() - 1, values.len())
    ));
    path
}

fn axis_label(value: f64) -> String {
    if value >= 100.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn edge_labels(points: &[SeriesPoint]) -> (String, String) {
    let fmt = |p: &SeriesPoint| p.x.format("%b %-d").to_string();
    (
        points.first().map(fmt).unwrap_or_default(),
        points.last().map(fmt).unwrap_or_default(),
    )
}

fn gridlines(max: f64) -> impl IntoView {
    (0..=4)
        .map(|step| {
            let value = max * f64::from(step) / 4.0;
            let y = y_at(value, max);
            view! {
                <line class="chart-grid" x1=PAD y1=y x2={VIEW_W - PAD} y2=y></line>
                <text class="chart-tick" x={PAD - 8.0} y={y + 4.0} text-anchor="end">
                    {axis_label(value)}
                </text>
            }
        })
        .collect_view()
}

#[component]
pub fn LineChart(
    points: Vec<SeriesPoint>,
    color: &'static str,
    title: &'static str,
    y_label: &'static str,
) -> impl IntoView {
    if points.is_empty() {
        return view! {
            <div class="chart chart-empty">
                <h3 class="chart-title">{title}</h3>
                <p>"No data in the selected range"</p>
            </div>
        }
        .into_view();
    }

    let values: Vec<f64> = points.iter().map(|p| p.y).collect();
    let max = nice_max(&values);
    let line = polyline_points(&values, max);
    let area = area_path(&values, max);
    let (start_label, end_label) = edge_labels(&points);
    let markers = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let cx = x_at(i, values.len());
            let cy = y_at(*v, max);
            view! { <circle class="chart-point" cx=cx cy=cy r="3" fill=color></circle> }
        })
        .collect_view();

    view! {
        <div class="chart">
            <h3 class="chart-title">{title}</h3>
            <svg viewBox=format!("0 0 {VIEW_W} {VIEW_H}") preserveAspectRatio="none" role="img">
                {gridlines(max)}
                <path d=area fill=color opacity="0.12"></path>
                <polyline
                    points=line
                    fill="none"
                    stroke=color
                    stroke-width="2.5"
                    stroke-linejoin="round"
                ></polyline>
                {markers}
                <text class="chart-tick" x=PAD y={VIEW_H - 10.0}>{start_label}</text>
                <text class="chart-tick" x={VIEW_W - PAD} y={VIEW_H - 10.0} text-anchor="end">
                    {end_label}
                </text>
            </svg>
            <span class="chart-axis-label">{y_label}</span>
        </div>
    }
    .into_view()
}

#[component]
pub fn BarChart(
    points: Vec<SeriesPoint>,
    color: &'static str,
    title: &'static str,
    y_label: &'static str,
) -> impl IntoView {
    if points.is_empty() {
        return view! {
            <div class="chart chart-empty">
                <h3 class="chart-title">{title}</h3>
                <p>"No data in the selected range"</p>
            </div>
        }
        .into_view();
    }

    let values: Vec<f64> = points.iter().map(|p| p.y).collect();
    let max = nice_max(&values);
    let slot = plot_w() / values.len() as f64;
    let bar_w = (slot * 0.7).min(28.0);
    let baseline = VIEW_H - PAD;
    let (start_label, end_label) = edge_labels(&points);
    let bars = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = PAD + slot * i as f64 + (slot - bar_w) / 2.0;
            let y = y_at(*v, max);
            view! {
                <rect
                    class="chart-bar"
                    x=x
                    y=y
                    width=bar_w
                    height={baseline - y}
                    rx="3"
                    fill=color
                ></rect>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <h3 class="chart-title">{title}</h3>
            <svg viewBox=format!("0 0 {VIEW_W} {VIEW_H}") preserveAspectRatio="none" role="img">
                {gridlines(max)}
                {bars}
                <text class="chart-tick" x=PAD y={VIEW_H - 10.0}>{start_label}</text>
                <text class="chart-tick" x={VIEW_W - PAD} y={VIEW_H - 10.0} text-anchor="end">
                    {end_label}
                </text>
            </svg>
            <span class="chart-axis-label">{y_label}</span>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_max_rounds_to_round_figures() {
        assert_eq!(nice_max(&[0.7]), 1.0);
        assert_eq!(nice_max(&[1.3]), 2.0);
        assert_eq!(nice_max(&[4.2]), 5.0);
        assert_eq!(nice_max(&[7.0]), 10.0);
        assert_eq!(nice_max(&[130.0]), 200.0);
        assert_eq!(nice_max(&[]), 1.0);
    }

    #[test]
    fn single_sample_sits_mid_plot() {
        let x = x_at(0, 1);
        assert!((x - VIEW_W / 2.0).abs() < 1e-9);
    }

    #[test]
    fn polyline_spans_the_plot_area() {
        let values = [0.0, 5.0, 10.0];
        let line = polyline_points(&values, 10.0);
        let pairs: Vec<&str> = line.split(' ').collect();
        assert_eq!(pairs.len(), values.len());
        assert!(pairs[0].starts_with(&format!("{PAD:.1},")));
        // Max value touches the top padding, zero sits on the baseline.
        assert!(pairs[2].ends_with(&format!(",{PAD:.1}")));
        assert!(pairs[0].ends_with(&format!(",{:.1}", VIEW_H - PAD)));
    }

    #[test]
    fn area_path_closes_on_the_baseline() {
        let path = area_path(&[1.0, 2.0], 2.0);
        assert!(path.starts_with('M'));
        assert!(path.ends_with('Z'));
        assert_eq!(area_path(&[], 1.0), "");
    }
}
