use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<f64>,
    /// Fill the area under the line (first series in the seasonal chart).
    pub fill: bool,
}

const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 300.0;
const MARGIN_X: f64 = 40.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 36.0;

/// Maps `values` into plot-space points. Each series is scaled to its own
/// min/max with 10% headroom, so an index series (≈100) and a revenue
/// series (≈0.1M) stay readable on one plot.
fn series_points(values: &[f64]) -> Vec<(f64, f64)> {
    let plot_w = VIEW_W - 2.0 * MARGIN_X;
    let plot_h = VIEW_H - MARGIN_TOP - MARGIN_BOTTOM;
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let pad = ((max - min) * 0.1).max(1e-9);
    let (lo, hi) = (min - pad, max + pad);

    let step = if values.len() > 1 {
        plot_w / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = MARGIN_X + i as f64 * step;
            let y = MARGIN_TOP + plot_h * (1.0 - (v - lo) / (hi - lo));
            (x, y)
        })
        .collect()
}

#[component]
pub fn LineChart(labels: Vec<String>, series: Vec<LineSeries>) -> impl IntoView {
    let baseline = VIEW_H - MARGIN_BOTTOM;

    let paths = series
        .iter()
        .map(|s| {
            let points = series_points(&s.values);
            let polyline = points
                .iter()
                .map(|(x, y)| format!("{x:.1},{y:.1}"))
                .collect::<Vec<_>>()
                .join(" ");

            let area = s.fill.then(|| {
                let (first_x, _) = points.first().copied().unwrap_or((MARGIN_X, baseline));
                let (last_x, _) = points.last().copied().unwrap_or((MARGIN_X, baseline));
                let path = format!(
                    "M {first_x:.1},{baseline:.1} L {} L {last_x:.1},{baseline:.1} Z",
                    points
                        .iter()
                        .map(|(x, y)| format!("{x:.1},{y:.1}"))
                        .collect::<Vec<_>>()
                        .join(" L ")
                );
                view! { <path d=path fill=s.color opacity="0.12" /> }
            });

            let markers = points
                .iter()
                .enumerate()
                .map(|(i, (x, y))| {
                    let tooltip = format!(
                        "{}: {}",
                        labels.get(i).cloned().unwrap_or_default(),
                        s.values[i]
                    );
                    view! {
                        <circle
                            cx=format!("{x:.1}")
                            cy=format!("{y:.1}")
                            r="6"
                            fill=s.color
                            stroke="#ffffff"
                            stroke-width="2"
                            class="chart__marker"
                            aria-label=tooltip
                        ></circle>
                    }
                })
                .collect::<Vec<_>>();

            view! {
                <g>
                    {area}
                    <polyline
                        points=polyline
                        fill="none"
                        stroke=s.color
                        stroke-width="3"
                        stroke-linejoin="round"
                    />
                    {markers}
                </g>
            }
        })
        .collect::<Vec<_>>();

    let ticks = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let step = if labels.len() > 1 {
                (VIEW_W - 2.0 * MARGIN_X) / (labels.len() - 1) as f64
            } else {
                0.0
            };
            let x = MARGIN_X + i as f64 * step;
            view! {
                <text x=format!("{x:.1}") y=format!("{:.1}", baseline + 20.0) class="chart__tick">
                    {label.clone()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let legend = series
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

    view! {
        <div class="chart chart--line">
            <div class="chart__legend">{legend}</div>
            <svg viewBox=format!("0 0 {VIEW_W} {VIEW_H}") role="img">
                <line
                    x1=format!("{MARGIN_X}")
                    y1=format!("{baseline:.1}")
                    x2=format!("{:.1}", VIEW_W - MARGIN_X)
                    y2=format!("{baseline:.1}")
                    class="chart__axis"
                />
                {paths}
                {ticks}
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_span_plot_width() {
        let points = series_points(&[103.7, 102.7, 97.0, 96.6]);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].0, MARGIN_X);
        assert!((points[3].0 - (VIEW_W - MARGIN_X)).abs() < 1e-9);
    }

    #[test]
    fn higher_values_sit_higher_on_screen() {
        let points = series_points(&[103.7, 102.7, 97.0, 96.6]);
        // screen y grows downward
        assert!(points[0].1 < points[1].1);
        assert!(points[1].1 < points[3].1);
    }

    #[test]
    fn points_stay_inside_plot_area() {
        let points = series_points(&[0.1, 0.1, 0.1, 0.1]);
        for (_, y) in points {
            assert!(y >= MARGIN_TOP);
            assert!(y <= VIEW_H - MARGIN_BOTTOM);
        }
    }
}
