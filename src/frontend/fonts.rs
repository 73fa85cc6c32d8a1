use web_sys::{window, Element};
use yew::prelude::*;

pub const FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Outfit:wght@300;400;500;700&family=Space+Grotesk:wght@300;400;600&display=swap";

fn inject_stylesheet(href: &str) -> Option<Element> {
    let document = window()?.document()?;
    let head = document.head()?;
    let link = document.create_element("link").ok()?;
    link.set_attribute("rel", "stylesheet").ok()?;
    link.set_attribute("href", href).ok()?;
    head.append_child(&link).ok()?;
    Some(link)
}

/// Adds a `<link rel="stylesheet">` to `<head>` for as long as the caller is
/// mounted. Load failures are ignored; the CSS font stack falls back.
#[hook]
pub fn use_stylesheet(href: &'static str) {
    use_effect_with(href, |href| {
        let link = inject_stylesheet(href);
        move || {
            if let Some(link) = link {
                link.remove();
            }
        }
    });
}
