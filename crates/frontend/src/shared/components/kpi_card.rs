use contracts::units::KpiCard;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Card;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Matches the `pulse` keyframes duration in the stylesheet.
const PULSE_LIFETIME_MS: u32 = 600;

/// One KPI stat card. The value element renders the final text up front
/// (the count-up animator reads it back as its target once the card
/// scrolls into view). Hover lift comes from CSS; click triggers a short
/// pulse.
#[component]
pub fn KpiCardView(
    /// Label, raw value and display unit.
    card: KpiCard,
    /// Appearance-animation delay in ms (stagger across the card row).
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let display = card.display_text();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(host) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let _ = host.class_list().add_1("kpi-card--pulse");
        spawn_local(async move {
            TimeoutFuture::new(PULSE_LIFETIME_MS).await;
            let _ = host.class_list().remove_1("kpi-card--pulse");
        });
    };

    let style = format!("animation: card-appear 0.28s ease-out {delay_ms}ms both;");

    view! {
        <div class="kpi-card" on:click=on_click>
            <Card attr:style=style>
                <div class="kpi-card__label">{card.label.clone()}</div>
                <div class="kpi-card__value">{display}</div>
            </Card>
        </div>
    }
}
