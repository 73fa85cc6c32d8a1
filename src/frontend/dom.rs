use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::motion::Viewport;
use crate::nav::ScrollTarget;
use crate::scroll::scroll_progress;
use crate::theme::Theme;

pub fn viewport() -> Viewport {
    let Some(win) = window() else {
        return Viewport::new(1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    Viewport::new(width as f32, height as f32)
}

pub fn device_pixel_ratio() -> f64 {
    window()
        .map(|w| w.device_pixel_ratio())
        .filter(|ratio| ratio.is_finite() && *ratio > 0.0)
        .unwrap_or(1.0)
}

fn matches_media(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn prefers_reduced_motion() -> bool {
    matches_media("(prefers-reduced-motion: reduce)")
}

/// Dark unless the system explicitly asks for light.
pub fn resolve_theme() -> Theme {
    if matches_media("(prefers-color-scheme: light)") {
        Theme::Light
    } else {
        Theme::Dark
    }
}

pub fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

pub fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    // The browser calls back after this function returns.
    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition
        .call1(&document_js, &callback)
        .is_err()
    {
        apply_theme(theme);
    }
}

pub fn scroll_to(target: ScrollTarget) {
    let Some(win) = window() else {
        return;
    };

    match target {
        ScrollTarget::Top => {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        }
        ScrollTarget::Section(section) => {
            let Some(element) = win
                .document()
                .and_then(|d| d.get_element_by_id(section.id()))
            else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

pub fn current_scroll_progress() -> f64 {
    let Some(win) = window() else {
        return 0.0;
    };
    let Some(root) = win.document().and_then(|d| d.document_element()) else {
        return 0.0;
    };

    scroll_progress(
        win.scroll_y().unwrap_or(0.0),
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    )
}
