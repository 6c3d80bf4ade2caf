pub mod app;
pub mod charts;
pub mod layout;
pub mod sections;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Err(err) = try_mount() {
        log::error!("Failed to initialize dashboard: {err}");
        show_static_fallback();
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

fn try_mount() -> Result<(), String> {
    let window = web_sys::window().ok_or("no window object")?;
    let document = window.document().ok_or("no document object")?;
    document.body().ok_or("no document body")?;

    leptos::mount::mount_to_body(app::App);
    log::info!("Urban Retail Co. dashboard initialized");
    Ok(())
}

/// Last-resort message when mounting is impossible. Charts and cards are
/// gone at this point; the page at least tells the user what to do.
fn show_static_fallback() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else { return };
    if let Ok(message) = document.create_element("div") {
        message.set_class_name("dashboard-fallback");
        message.set_text_content(Some("Dashboard failed to load. Please refresh the page."));
        let _ = body.append_child(&message);
    }
}
