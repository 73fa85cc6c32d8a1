use gloo_events::EventListener;
use serde_json::json;
use web_sys::window;
use yew::prelude::*;

use super::dom::current_scroll_progress;
use crate::lifecycle::{live_subscriptions, Subscriptions};
use crate::logging::{client_log_level, log_event, LogLevel};
use crate::scroll::progress_style;

/// Thin bar along the top edge showing how far the page has been read.
#[function_component(ScrollProgress)]
pub fn scroll_progress_bar() -> Html {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with((), move |_| {
            let mut subscriptions = Subscriptions::new();
            if let Some(win) = window() {
                progress.set(current_scroll_progress());

                // Resizing changes the scrollable range without a scroll event.
                for event in ["scroll", "resize"] {
                    let progress = progress.clone();
                    subscriptions.hold(EventListener::new(&win, event, move |_| {
                        progress.set(current_scroll_progress());
                    }));
                }
            }

            move || {
                drop(subscriptions);
                log_event(
                    client_log_level(),
                    LogLevel::Debug,
                    "progress.unmounted",
                    json!({ "live_subscriptions": live_subscriptions() }),
                );
            }
        });
    }

    let percent = (*progress * 100.0).round().to_string();

    html! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-label="Reading progress"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={percent}
        >
            <div class="scroll-progress-bar" style={progress_style(*progress)} />
        </div>
    }
}
