use std::cell::Cell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::lifecycle::Subscriptions;
use crate::scroll::{RevealLatch, RevealOptions};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watches `element` until it first intersects the viewport, then calls
/// `on_reveal` once and stops observing.
fn observe_once(
    element: &Element,
    options: &RevealOptions,
    on_reveal: impl Fn() + 'static,
) -> Result<ObserverGuard, JsValue> {
    let latch = Rc::new(Cell::new(RevealLatch::default()));
    let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        let intersecting = entries.iter().any(|entry| {
            entry
                .unchecked_into::<IntersectionObserverEntry>()
                .is_intersecting()
        });

        let mut state = latch.get();
        if state.observe(intersecting) {
            latch.set(state);
            observer.disconnect();
            on_reveal();
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_root_margin(options.root_margin);
    init.set_threshold(&JsValue::from_f64(options.threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    Ok(ObserverGuard {
        observer,
        _callback: callback,
    })
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
}

/// Fades its children in the first time they scroll into view and leaves
/// them visible afterwards.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let mut subscriptions = Subscriptions::new();
            let observed = node.cast::<Element>().and_then(|element| {
                let visible = visible.clone();
                observe_once(&element, &RevealOptions::default(), move || visible.set(true)).ok()
            });

            match observed {
                Some(guard) => subscriptions.hold(guard),
                // No observer support: show the content rather than hide it forever.
                None => visible.set(true),
            }

            move || drop(subscriptions)
        });
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), (*visible).then_some("is-visible"))}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}
