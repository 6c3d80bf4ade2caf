use crate::charts::bar::{BarChart, BarSeries};
use crate::charts::inputs::{category_labels, category_revenue_thousands, category_turnover};
use crate::charts::palette;
use crate::layout::DashboardContext;
use crate::shared::components::section::DashboardSection;
use crate::shared::ripple::ripple_on_click;
use leptos::prelude::*;

#[component]
pub fn CategoryPerformanceSection() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();
    let categories = ctx.data.get_untracked().category_performance;

    let labels = category_labels(&categories);
    let series = vec![
        BarSeries {
            name: "Revenue ($K)".to_string(),
            color: palette::color(0),
            values: category_revenue_thousands(&categories),
            tooltips: None,
        },
        BarSeries {
            name: "Turnover Ratio".to_string(),
            color: palette::color(1),
            values: category_turnover(&categories),
            tooltips: None,
        },
    ];

    let cards = categories
        .iter()
        .map(|c| {
            view! {
                <div class="category-card" on:click=ripple_on_click>
                    <span class="category-card__name">{c.category.clone()}</span>
                    <span class="category-card__revenue">{format!("${:.2}", c.revenue)}</span>
                    <span class="category-card__turnover">{format!("{:.2}x", c.turnover_ratio)}</span>
                    <span class="category-card__status">{c.status.clone()}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <DashboardSection id="category-performance" title="Category Performance">
            <BarChart labels=labels series=series />
            <div class="category-grid">{cards}</div>
        </DashboardSection>
    }
}
