use crate::layout::DashboardContext;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Routes uncaught runtime errors into a generic error toast. Failures
/// stay isolated to the feature that threw; the rest of the page keeps
/// working. Page-lifetime listener, intentionally leaked.
pub fn install_global_error_toast(ctx: DashboardContext) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window object")?;

    let on_error = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        log::error!("uncaught runtime error");
        ctx.notify(ToastKind::Error, "An error occurred. Please refresh the page.");
    });

    window
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .map_err(|e| format!("failed to attach error listener: {:?}", e))?;
    on_error.forget();
    Ok(())
}

/// Renders the current toast, if any. Dismissal is driven by
/// [`DashboardContext::notify`]; this component only reflects the signal.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = expect_context::<DashboardContext>();

    move || {
        ctx.toast.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast toast--success",
                ToastKind::Error => "toast toast--error",
                ToastKind::Info => "toast toast--info",
            };
            view! {
                <div class=class role="status">
                    {toast.message}
                </div>
            }
        })
    }
}
