use crate::layout::toast::{Toast, ToastKind};
use contracts::dataset::DashboardData;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen.
const TOAST_DISMISS_MS: u32 = 3000;

/// Application context provided once at the root and consumed everywhere.
/// Holds the dataset and all cross-cutting page state; nothing in the app
/// mutates a document-global namespace.
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub data: RwSignal<DashboardData>,
    pub toast: RwSignal<Option<Toast>>,
    /// True once the page is scrolled far enough for the section nav.
    pub nav_visible: RwSignal<bool>,
    /// Monotonic toast counter, so a stale dismiss timer never clears a
    /// newer toast.
    toast_seq: RwSignal<u64>,
}

impl DashboardContext {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(DashboardData::sample()),
            toast: RwSignal::new(None),
            nav_visible: RwSignal::new(false),
            toast_seq: RwSignal::new(0),
        }
    }

    /// Shows a toast and schedules its dismissal.
    pub fn notify(&self, kind: ToastKind, message: &str) {
        let seq = self.toast_seq.get_untracked() + 1;
        self.toast_seq.set(seq);
        self.toast.set(Some(Toast {
            kind,
            message: message.to_string(),
        }));

        let toast = self.toast;
        let toast_seq = self.toast_seq;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            if toast_seq.get_untracked() == seq {
                toast.set(None);
            }
        });
    }
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self::new()
    }
}
