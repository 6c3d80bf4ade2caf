use crate::charts::bar::{BarChart, BarSeries};
use crate::charts::inputs::{store_tooltips, store_turnover};
use crate::charts::palette;
use crate::layout::DashboardContext;
use crate::shared::components::section::DashboardSection;
use crate::shared::ripple::ripple_on_click;
use leptos::prelude::*;

#[component]
pub fn StorePerformanceSection() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();
    let stores = ctx.data.get_untracked().store_performance;

    let (labels, turnover) = store_turnover(&stores);
    let series = vec![BarSeries {
        name: "Turnover Ratio".to_string(),
        color: palette::color(0),
        values: turnover,
        tooltips: Some(store_tooltips(&stores)),
    }];

    let leaders = stores
        .iter()
        .take(3)
        .map(|s| {
            view! {
                <div class="insight-item" on:click=ripple_on_click>
                    <span class="insight-item__name">{s.store.clone()}</span>
                    <span class="insight-item__metric">{format!("{:.2}x", s.turnover)}</span>
                    <span class="insight-item__detail">
                        {format!("${:.2} revenue · {}", s.revenue, s.rating)}
                    </span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <DashboardSection id="store-performance" title="Store Performance">
            <div class="section-layout">
                <BarChart labels=labels series=series />
                <div class="section-layout__aside">
                    <h3 class="section-layout__subtitle">"Top Performers"</h3>
                    {leaders}
                </div>
            </div>
        </DashboardSection>
    }
}
