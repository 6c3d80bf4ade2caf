use crate::layout::DashboardContext;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Scroll depth (px) past which the section nav appears.
const NAV_SCROLL_THRESHOLD: f64 = 300.0;

/// (anchor id, label) for every dashboard section, in page order.
pub const SECTIONS: [(&str, &str); 6] = [
    ("executive-summary", "Executive Summary"),
    ("store-performance", "Store Performance"),
    ("abc-classification", "ABC Classification"),
    ("category-performance", "Category Performance"),
    ("seasonal-impact", "Seasonal Impact"),
    ("critical-alerts", "Critical Alerts"),
];

/// Fixed right-hand navigation with anchor links to each section.
/// Hidden near the top of the page, shown after scrolling past 300px.
#[component]
pub fn FloatingNav() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();

    Effect::new(move |_| {
        if let Err(err) = install_scroll_listener(ctx) {
            log::error!("floating nav: {err}");
        }
    });

    let nav_class = move || {
        if ctx.nav_visible.get() {
            "floating-nav floating-nav--visible"
        } else {
            "floating-nav"
        }
    };

    let links = SECTIONS
        .iter()
        .map(|(id, name)| {
            view! {
                <a class="floating-nav__link" href=format!("#{id}")>
                    {*name}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! { <nav class=nav_class>{links}</nav> }
}

/// Page-lifetime listener; the closure is intentionally leaked.
fn install_scroll_listener(ctx: DashboardContext) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window object")?;

    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let scrolled = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        let visible = scrolled > NAV_SCROLL_THRESHOLD;
        if ctx.nav_visible.get_untracked() != visible {
            ctx.nav_visible.set(visible);
        }
    });

    window
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .map_err(|e| format!("failed to attach scroll listener: {:?}", e))?;
    on_scroll.forget();
    Ok(())
}
