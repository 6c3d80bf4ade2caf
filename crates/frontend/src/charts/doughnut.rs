use leptos::prelude::*;
use std::f64::consts::PI;

#[derive(Debug, Clone, PartialEq)]
pub struct DoughnutSlice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
    /// Extra tooltip line (e.g. product count).
    pub detail: String,
}

const RADIUS: f64 = 70.0;
/// Ring thickness giving roughly a 60% cutout.
const STROKE: f64 = 36.0;

/// `(dash length, dash offset)` pairs for the stroke-dasharray technique:
/// each slice is a circle stroked only along its share of the
/// circumference, rotated so slices sit end to end starting at 12 o'clock.
fn slice_geometry(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().sum();
    let circumference = 2.0 * PI * RADIUS;
    let mut consumed = 0.0;
    values
        .iter()
        .map(|v| {
            let frac = if total > 0.0 { v / total } else { 0.0 };
            let len = frac * circumference;
            // dashoffset moves backwards along the stroke
            let offset = circumference / 4.0 - consumed;
            consumed += len;
            (len, offset)
        })
        .collect()
}

/// Doughnut chart with a legend underneath.
#[component]
pub fn DoughnutChart(slices: Vec<DoughnutSlice>) -> impl IntoView {
    let circumference = 2.0 * PI * RADIUS;
    let geometry = slice_geometry(&slices.iter().map(|s| s.value).collect::<Vec<_>>());

    let rings = slices
        .iter()
        .zip(&geometry)
        .map(|(slice, (len, offset))| {
            let tooltip = format!("{}: {}% · {}", slice.label, slice.value, slice.detail);
            view! {
                <circle
                    cx="100"
                    cy="100"
                    r=format!("{RADIUS}")
                    fill="none"
                    stroke=slice.color
                    stroke-width=format!("{STROKE}")
                    stroke-dasharray=format!("{len:.2} {:.2}", circumference - len)
                    stroke-dashoffset=format!("{offset:.2}")
                    aria-label=tooltip
                ></circle>
            }
        })
        .collect::<Vec<_>>();

    let legend = slices
        .iter()
        .map(|slice| {
            view! {
                <span class="chart__legend-entry">
                    <span class="chart__swatch" style=format!("background: {};", slice.color)></span>
                    {format!("{}: {}%", slice.label, slice.value)}
                </span>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="chart chart--doughnut">
            <svg viewBox="0 0 200 200" role="img">{rings}</svg>
            <div class="chart__legend">{legend}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_cover_full_circumference() {
        let geometry = slice_geometry(&[78.6, 14.6, 6.8]);
        let circumference = 2.0 * PI * RADIUS;
        let total: f64 = geometry.iter().map(|(len, _)| len).sum();
        assert!((total - circumference).abs() < 1e-9);
    }

    #[test]
    fn slices_sit_end_to_end() {
        let geometry = slice_geometry(&[50.0, 30.0, 20.0]);
        // each slice starts where the previous one ended
        let (first_len, first_offset) = geometry[0];
        let (_, second_offset) = geometry[1];
        assert!((first_offset - second_offset - first_len).abs() < 1e-9);
    }

    #[test]
    fn zero_total_renders_empty_ring() {
        let geometry = slice_geometry(&[0.0, 0.0]);
        assert!(geometry.iter().all(|(len, _)| *len == 0.0));
    }
}
