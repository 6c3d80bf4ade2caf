use crate::charts::doughnut::{DoughnutChart, DoughnutSlice};
use crate::charts::inputs::abc_slices;
use crate::charts::palette;
use crate::layout::DashboardContext;
use crate::shared::components::section::DashboardSection;
use crate::shared::ripple::ripple_on_click;
use leptos::prelude::*;

#[component]
pub fn AbcClassificationSection() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();
    let abc = ctx.data.get_untracked().abc_classification;

    let slices = abc_slices(&abc)
        .into_iter()
        .enumerate()
        .map(|(i, s)| DoughnutSlice {
            detail: format!("Products: {}", s.product_count),
            label: s.label,
            value: s.revenue_percent,
            color: palette::color(i),
        })
        .collect::<Vec<_>>();

    let strategies = [
        ("Class A", &abc.class_a),
        ("Class B", &abc.class_b),
        ("Class C", &abc.class_c),
    ]
    .into_iter()
    .map(|(label, class)| {
        view! {
            <div class="abc-item" on:click=ripple_on_click>
                <span class="abc-item__label">{label}</span>
                <span class="abc-item__count">{format!("{} products", class.count)}</span>
                <span class="abc-item__strategy">{class.strategy.clone()}</span>
            </div>
        }
    })
    .collect::<Vec<_>>();

    view! {
        <DashboardSection id="abc-classification" title="ABC Classification">
            <div class="section-layout">
                <DoughnutChart slices=slices />
                <div class="section-layout__aside">
                    <h3 class="section-layout__subtitle">"Control Strategies"</h3>
                    {strategies}
                </div>
            </div>
        </DashboardSection>
    }
}
