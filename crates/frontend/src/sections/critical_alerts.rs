use crate::layout::DashboardContext;
use crate::shared::components::section::DashboardSection;
use crate::shared::ripple::ripple_on_click;
use leptos::prelude::*;

/// Days-supply cutoff below which an alert row is styled as severe.
const SEVERE_DAYS_SUPPLY: f64 = 0.5;

fn severity_class(days_supply: f64) -> &'static str {
    if days_supply < SEVERE_DAYS_SUPPLY {
        "critical-item critical-item--severe"
    } else {
        "critical-item"
    }
}

#[component]
pub fn CriticalAlertsSection() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();
    let alerts = ctx.data.get_untracked().critical_alerts;

    let rows = alerts
        .iter()
        .map(|a| {
            view! {
                <tr class=severity_class(a.days_supply) on:click=ripple_on_click>
                    <td>{a.store.clone()}</td>
                    <td>{a.region.clone()}</td>
                    <td>{a.product.clone()}</td>
                    <td>{a.category.clone()}</td>
                    <td class="critical-item__num">{a.current_stock}</td>
                    <td class="critical-item__num">{format!("{:.2}", a.daily_sales)}</td>
                    <td class="critical-item__num">{format!("{:.1}", a.days_supply)}</td>
                    <td>{a.alert_level.clone()}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <DashboardSection id="critical-alerts" title="Critical Alerts">
            <table class="critical-table">
                <thead>
                    <tr>
                        <th>"Store"</th>
                        <th>"Region"</th>
                        <th>"Product"</th>
                        <th>"Category"</th>
                        <th>"Stock"</th>
                        <th>"Daily Sales"</th>
                        <th>"Days Supply"</th>
                        <th>"Level"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </DashboardSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_by_days_supply() {
        assert_eq!(
            severity_class(0.3),
            "critical-item critical-item--severe"
        );
        assert_eq!(severity_class(0.8), "critical-item");
        assert_eq!(severity_class(1.0), "critical-item");
    }
}
