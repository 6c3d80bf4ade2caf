use crate::charts::inputs::{seasonal_index, seasonal_labels, seasonal_revenue_millions};
use crate::charts::line::{LineChart, LineSeries};
use crate::charts::palette;
use crate::layout::DashboardContext;
use crate::shared::components::section::DashboardSection;
use crate::shared::ripple::ripple_on_click;
use leptos::prelude::*;

#[component]
pub fn SeasonalImpactSection() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();
    let seasons = ctx.data.get_untracked().seasonal_impact;

    let labels = seasonal_labels(&seasons);
    let series = vec![
        LineSeries {
            name: "Performance Index (%)".to_string(),
            color: palette::color(0),
            values: seasonal_index(&seasons),
            fill: true,
        },
        LineSeries {
            name: "Revenue ($M)".to_string(),
            color: palette::color(1),
            values: seasonal_revenue_millions(&seasons),
            fill: false,
        },
    ];

    let items = seasons
        .iter()
        .map(|s| {
            view! {
                <div class="seasonal-item" on:click=ripple_on_click>
                    <span class="seasonal-item__season">{s.season.clone()}</span>
                    <span class="seasonal-item__class">{s.classification.clone()}</span>
                    <span class="seasonal-item__detail">
                        {format!("index {:.1}% · ${:.2}", s.index, s.revenue)}
                    </span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <DashboardSection id="seasonal-impact" title="Seasonal Impact">
            <LineChart labels=labels series=series />
            <div class="seasonal-grid">{items}</div>
        </DashboardSection>
    }
}
