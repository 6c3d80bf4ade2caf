//! Viewport-driven triggers: KPI count-up on first visibility and
//! scroll-reveal for dashboard sections.
//!
//! Both observers live for the whole page, so their callbacks are leaked
//! with `Closure::forget`. Tearing the page down mid-animation is the
//! host's cleanup problem, not ours.

use crate::shared::animate::animate_number;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// Class marking animated KPI value elements.
pub const KPI_VALUE_CLASS: &str = "kpi-card__value";
/// Class marking reveal-on-scroll sections.
pub const SECTION_CLASS: &str = "dashboard-section";
/// Modifier added once a section has scrolled into view.
const SECTION_VISIBLE_CLASS: &str = "dashboard-section--visible";

/// Starts the count-up on each KPI value element the first time it becomes
/// at least half visible. Elements are unobserved right after firing, so a
/// second visibility change never re-triggers the animation.
pub fn observe_kpi_values() -> Result<(), String> {
    let document = document()?;

    let callback = Closure::<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>::new(
        |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
            for entry in entries {
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(el) = target.dyn_ref::<HtmlElement>() {
                    animate_number(el);
                }
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.5));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| format!("failed to create KPI observer: {:?}", e))?;
    callback.forget();

    observe_all(&document, KPI_VALUE_CLASS, &observer)
}

/// Fades sections in as they scroll into view. Sections start hidden via
/// the base class; intersection adds the visible modifier.
pub fn observe_sections() -> Result<(), String> {
    let document = document()?;

    let callback = Closure::<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>::new(
        |entries: Vec<IntersectionObserverEntry>, _observer: IntersectionObserver| {
            for entry in entries {
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1(SECTION_VISIBLE_CLASS);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("50px");
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| format!("failed to create section observer: {:?}", e))?;
    callback.forget();

    observe_all(&document, SECTION_CLASS, &observer)
}

fn document() -> Result<Document, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document object".to_string())
}

fn observe_all(
    document: &Document,
    class: &str,
    observer: &IntersectionObserver,
) -> Result<(), String> {
    let nodes = document
        .query_selector_all(&format!(".{class}"))
        .map_err(|e| format!("query for .{class} failed: {:?}", e))?;
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                observer.observe(&el);
            }
        }
    }
    Ok(())
}
