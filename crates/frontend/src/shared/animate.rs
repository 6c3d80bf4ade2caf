//! Timer loop driving [`CountUp`] frames into a DOM element.

use crate::shared::count_up::{CountUp, Frame, TICK_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use web_sys::HtmlElement;

/// Animates the element's text from zero up to its current value.
///
/// The element's displayed text *is* the animation target. Text without a
/// parseable number (or with a negative one) leaves the element untouched
/// and schedules nothing. The task self-terminates after writing the final
/// frame, which is byte-identical to the pre-animation text.
pub fn animate_number(element: &HtmlElement) {
    let text = element.text_content().unwrap_or_default();
    let Some(mut counter) = CountUp::from_text(&text) else {
        return;
    };

    let element = element.clone();
    spawn_local(async move {
        loop {
            TimeoutFuture::new(TICK_MS).await;
            match counter.tick() {
                Frame::Running(frame) => element.set_text_content(Some(&frame)),
                Frame::Done(frame) => {
                    element.set_text_content(Some(&frame));
                    break;
                }
            }
        }
    });
}
