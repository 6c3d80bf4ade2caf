use crate::layout::floating_nav::FloatingNav;
use crate::layout::toast::{ToastHost, ToastKind};
use crate::layout::DashboardContext;
use crate::sections::abc_classification::AbcClassificationSection;
use crate::sections::category_performance::CategoryPerformanceSection;
use crate::sections::critical_alerts::CriticalAlertsSection;
use crate::sections::executive_summary::ExecutiveSummary;
use crate::sections::seasonal_impact::SeasonalImpactSection;
use crate::sections::store_performance::StorePerformanceSection;
use crate::shared::export::export_dashboard;
use crate::shared::reveal;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn App() -> impl IntoView {
    // Provide the dashboard context to the whole app.
    let ctx = DashboardContext::new();
    provide_context(ctx);

    if let Err(err) = crate::layout::toast::install_global_error_toast(ctx) {
        log::error!("error toast setup failed: {err}");
    }

    // Viewport observers need the section DOM in place; give the first
    // render a moment to land before querying.
    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(50).await;
            if let Err(err) = reveal::observe_kpi_values() {
                log::error!("KPI animation setup failed: {err}");
            }
            if let Err(err) = reveal::observe_sections() {
                log::error!("section reveal setup failed: {err}");
            }
        });
    });

    let on_export = move |_| {
        let data = ctx.data.get_untracked();
        match export_dashboard(&data) {
            Ok(()) => ctx.notify(ToastKind::Success, "Dashboard data exported successfully!"),
            Err(err) => {
                log::error!("export failed: {err}");
                ctx.notify(ToastKind::Error, "Export failed. Please try again.");
            }
        }
    };

    let on_schedule = move |_| {
        ctx.notify(ToastKind::Success, "Review meeting scheduled for next week!");
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <div>
                    <h1 class="dashboard__title">"Urban Retail Co."</h1>
                    <p class="dashboard__subtitle">"Inventory Intelligence Dashboard"</p>
                </div>
                <div class="dashboard__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=on_export>
                        "Export Data"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=on_schedule>
                        "Schedule Review"
                    </Button>
                </div>
            </header>

            <main class="dashboard__body">
                <ExecutiveSummary />
                <StorePerformanceSection />
                <AbcClassificationSection />
                <CategoryPerformanceSection />
                <SeasonalImpactSection />
                <CriticalAlertsSection />
            </main>

            <FloatingNav />
            <ToastHost />
        </div>
    }
}
