use crate::layout::DashboardContext;
use crate::shared::components::kpi_card::KpiCardView;
use crate::shared::components::section::DashboardSection;
use contracts::units::kpi_cards;
use leptos::prelude::*;

/// Stagger between neighbouring cards' appearance animations.
const CARD_STAGGER_MS: u32 = 80;

#[component]
pub fn ExecutiveSummary() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();
    let cards = kpi_cards(&ctx.data.get_untracked().executive_kpis);

    let grid = cards
        .into_iter()
        .enumerate()
        .map(|(i, card)| {
            view! { <KpiCardView card=card delay_ms=i as u32 * CARD_STAGGER_MS /> }
        })
        .collect::<Vec<_>>();

    view! {
        <DashboardSection id="executive-summary" title="Executive Summary">
            <div class="kpi-grid">{grid}</div>
        </DashboardSection>
    }
}
