use leptos::prelude::*;

/// One bar series. `tooltips`, when present, supplies the accessible
/// description per bar; otherwise the bare value is used.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<f64>,
    pub tooltips: Option<Vec<String>>,
}

const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 300.0;
const MARGIN_LEFT: f64 = 16.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 58.0;

/// Grouped vertical bar chart. Each series is normalized to its own
/// maximum, so two series with different units can share the plot (the
/// page labels the axes).
#[component]
pub fn BarChart(labels: Vec<String>, series: Vec<BarSeries>) -> impl IntoView {
    let plot_w = VIEW_W - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = VIEW_H - MARGIN_TOP - MARGIN_BOTTOM;
    let groups = labels.len().max(1) as f64;
    let group_w = plot_w / groups;
    let bar_w = (group_w * 0.7) / series.len().max(1) as f64;

    let maxima: Vec<f64> = series
        .iter()
        .map(|s| s.values.iter().cloned().fold(f64::EPSILON, f64::max))
        .collect();

    let bars = series
        .iter()
        .enumerate()
        .flat_map(|(si, s)| {
            let max = maxima[si];
            s.values
                .iter()
                .enumerate()
                .map(|(gi, &value)| {
                    let h = (value / max).max(0.0) * plot_h;
                    let x = MARGIN_LEFT
                        + gi as f64 * group_w
                        + group_w * 0.15
                        + si as f64 * bar_w;
                    let y = MARGIN_TOP + plot_h - h;
                    let tooltip = s
                        .tooltips
                        .as_ref()
                        .and_then(|t| t.get(gi).cloned())
                        .unwrap_or_else(|| format!("{}: {}", s.name, value));
                    view! {
                        <rect
                            x=format!("{x:.1}")
                            y=format!("{y:.1}")
                            width=format!("{bar_w:.1}")
                            height=format!("{h:.1}")
                            rx="4"
                            fill=s.color
                            aria-label=tooltip
                        ></rect>
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let ticks = labels
        .iter()
        .enumerate()
        .map(|(gi, label)| {
            let cx = MARGIN_LEFT + gi as f64 * group_w + group_w / 2.0;
            let baseline = MARGIN_TOP + plot_h + 14.0;
            view! {
                <text
                    x=format!("{cx:.1}")
                    y=format!("{baseline:.1}")
                    class="chart__tick"
                    transform=format!("rotate(45 {cx:.1} {baseline:.1})")
                >
                    {label.clone()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let legend = (series.len() > 1).then(|| {
        let entries = series
            .iter()
            .map(|s| {
                view! {
                    <span class="chart__legend-entry">
                        <span class="chart__swatch" style=format!("background: {};", s.color)></span>
                        {s.name.clone()}
                    </span>
                }
            })
            .collect::<Vec<_>>();
        view! { <div class="chart__legend">{entries}</div> }
    });

    view! {
        <div class="chart chart--bar">
            {legend}
            <svg viewBox=format!("0 0 {VIEW_W} {VIEW_H}") role="img">
                <line
                    x1=format!("{MARGIN_LEFT}")
                    y1=format!("{:.1}", MARGIN_TOP + plot_h)
                    x2=format!("{:.1}", VIEW_W - MARGIN_RIGHT)
                    y2=format!("{:.1}", MARGIN_TOP + plot_h)
                    class="chart__axis"
                />
                {bars}
                {ticks}
            </svg>
        </div>
    }
}
