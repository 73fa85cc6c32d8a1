use gloo_events::EventListener;
use serde_json::json;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::cursor::CursorOverlay;
use crate::lifecycle::{live_subscriptions, Subscriptions};
use crate::logging::{client_log_level, log_event, LogLevel};

fn track_pointer(dot: HtmlElement, ring: HtmlElement) -> Subscriptions {
    let mut subscriptions = Subscriptions::new();
    let Some(win) = window() else {
        return subscriptions;
    };

    let mut overlay = CursorOverlay::default();
    subscriptions.hold(EventListener::new(&win, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let frame = overlay.moved(f64::from(event.client_x()), f64::from(event.client_y()));

        let _ = dot.style().set_property("transform", &frame.dot);
        // The ring's CSS transition eases toward whatever target was set last.
        let _ = ring.style().set_property("transform", &frame.ring);

        // Inline style, not a class: theme re-renders rewrite `class`.
        if frame.first {
            let _ = dot.style().set_property("opacity", "1");
            let _ = ring.style().set_property("opacity", "1");
        }
    }));

    subscriptions
}

/// Dot and trailing ring that replace the system pointer on fine-pointer
/// devices. Colors come from the `--cursor` variable of the active theme.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let dot_ref = use_node_ref();
    let ring_ref = use_node_ref();

    {
        let dot_ref = dot_ref.clone();
        let ring_ref = ring_ref.clone();
        use_effect_with((), move |_| {
            let subscriptions = match (dot_ref.cast::<HtmlElement>(), ring_ref.cast::<HtmlElement>()) {
                (Some(dot), Some(ring)) => Some(track_pointer(dot, ring)),
                _ => None,
            };

            move || {
                drop(subscriptions);
                log_event(
                    client_log_level(),
                    LogLevel::Debug,
                    "cursor.unmounted",
                    json!({ "live_subscriptions": live_subscriptions() }),
                );
            }
        });
    }

    html! {
        <>
            <div ref={dot_ref} class="cursor-dot" aria-hidden="true" />
            <div ref={ring_ref} class="cursor-ring" aria-hidden="true" />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cursor_styling_comes_from_the_theme_variable_only() {
        let html = yew::LocalServerRenderer::<CustomCursor>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains(r#"class="cursor-dot""#), "{html}");
        assert!(html.contains(r#"class="cursor-ring""#), "{html}");
        assert!(!html.contains("cursor-dark"));
        assert!(!html.contains("cursor-light"));
    }
}
