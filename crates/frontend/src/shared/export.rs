//! Dashboard snapshot export: serializes the dataset to JSON and hands it
//! to the browser as a file download.

use chrono::Utc;
use contracts::dataset::DashboardData;
use contracts::export::ExportPayload;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Serializes `data` and triggers a download named
/// `urban-retail-dashboard-<date>.json`.
pub fn export_dashboard(data: &DashboardData) -> Result<(), String> {
    let payload = ExportPayload::new(data, Utc::now());
    let json = payload
        .to_json_pretty()
        .map_err(|e| format!("failed to serialize dashboard: {e}"))?;

    let blob = create_json_blob(&json)?;
    download_blob(&blob, &payload.file_name())
}

fn create_json_blob(content: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/json");

    Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("failed to create blob: {:?}", e))
}

/// Downloads a blob through a temporary anchor element.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window object")?;
    let document = window.document().ok_or("no document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("failed to set style: {:?}", e))?;

    let body = document.body().ok_or("no body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("failed to revoke URL: {:?}", e))?;

    Ok(())
}
