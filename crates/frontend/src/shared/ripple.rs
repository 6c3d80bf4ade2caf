//! Click ripple for insight and alert items: a short-lived circle
//! expanding from the element's center, removed after the CSS animation
//! finishes.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

/// Must match the `ripple` keyframes duration in the stylesheet.
const RIPPLE_LIFETIME_MS: u32 = 600;

/// Click handler wiring a ripple to the clicked element.
pub fn ripple_on_click(ev: leptos::ev::MouseEvent) {
    if let Some(host) = ev
        .current_target()
        .and_then(|t| t.dyn_into::<HtmlElement>().ok())
    {
        spawn_ripple(&host);
    }
}

/// Spawns a ripple inside `host`. Failures (detached nodes, missing
/// document) are silently ignored; a missing ripple is cosmetic.
pub fn spawn_ripple(host: &HtmlElement) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(node) = document.create_element("div") else {
        return;
    };
    let Ok(ripple) = node.dyn_into::<HtmlElement>() else {
        return;
    };

    let rect = host.get_bounding_client_rect();
    let size = rect.width().max(rect.height());

    ripple.set_class_name("ripple");
    let _ = ripple.set_attribute(
        "style",
        &format!(
            "width: {size}px; height: {size}px; left: {}px; top: {}px;",
            rect.width() / 2.0 - size / 2.0,
            rect.height() / 2.0 - size / 2.0,
        ),
    );

    if host.append_child(&ripple).is_err() {
        return;
    }

    spawn_local(async move {
        TimeoutFuture::new(RIPPLE_LIFETIME_MS).await;
        ripple.remove();
    });
}
