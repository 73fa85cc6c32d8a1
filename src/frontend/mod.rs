mod background;
mod cursor;
mod dom;
mod fonts;
mod progress;
mod reveal;
mod sections;

use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;

use background::Background;
use cursor::CustomCursor;
use dom::{apply_theme, apply_theme_with_transition, resolve_theme, scroll_to};
use fonts::{use_stylesheet, FONT_STYLESHEET};
use progress::ScrollProgress;
use sections::{About, Contact, Hero, Journey, Projects, SiteFooter};

use crate::content::{portfolio, ContentStore};
use crate::nav::{ScrollTarget, ShellAction, ShellState, ShellStore, NAV_SECTIONS};

#[derive(Properties, PartialEq)]
struct NavBarProps {
    store: &'static ContentStore,
    state: ShellState,
    on_action: Callback<ShellAction>,
}

#[function_component(NavBar)]
fn nav_bar(props: &NavBarProps) -> Html {
    let state = props.state;
    let navigate = |target: ScrollTarget| {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(ShellAction::Navigate(target)))
    };

    let on_toggle_theme = {
        let on_action = props.on_action.clone();
        Callback::from(move |_| on_action.emit(ShellAction::ToggleTheme))
    };

    let on_toggle_menu = {
        let on_action = props.on_action.clone();
        Callback::from(move |_| on_action.emit(ShellAction::ToggleMenu))
    };

    html! {
        <nav class="site-nav" aria-label="Primary">
            <div class="nav-inner">
                <button class="brand" type="button" aria-label="Back to top" onclick={navigate(ScrollTarget::Top)}>
                    {props.store.profile.initials}
                    <span class="brand-dot">{"."}</span>
                </button>

                <ul class="nav-links">
                    { for NAV_SECTIONS.iter().map(|section| html! {
                        <li key={section.id()}>
                            <button type="button" class="nav-link" onclick={navigate(ScrollTarget::Section(*section))}>
                                {section.label()}
                                <span class="nav-underline" aria-hidden="true" />
                            </button>
                        </li>
                    }) }
                </ul>

                <div class="nav-controls">
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={state.theme.toggle_label()}
                        aria-pressed={state.theme.pressed().to_string()}
                        onclick={on_toggle_theme}
                    >
                        <span aria-hidden="true">{state.theme.icon()}</span>
                    </button>
                    <button
                        class="menu-toggle"
                        type="button"
                        aria-expanded={state.menu_open.to_string()}
                        aria-controls="mobile-menu"
                        onclick={on_toggle_menu}
                    >
                        {state.menu_label()}
                    </button>
                </div>
            </div>

            if state.menu_open {
                <ul id="mobile-menu" class="mobile-menu">
                    { for NAV_SECTIONS.iter().map(|section| html! {
                        <li key={section.id()}>
                            <button type="button" class="mobile-link" onclick={navigate(ScrollTarget::Section(*section))}>
                                {section.label()}
                            </button>
                        </li>
                    }) }
                </ul>
            }
        </nav>
    }
}

impl Reducible for ShellStore {
    type Action = ShellAction;

    fn reduce(self: Rc<Self>, action: ShellAction) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[function_component(App)]
fn app() -> Html {
    let store = portfolio();
    let shell = use_reducer(|| ShellStore::new(resolve_theme()));
    let theme = shell.state.theme;

    use_stylesheet(FONT_STYLESHEET);

    {
        let applied = use_mut_ref(|| false);
        use_effect_with(theme, move |theme| {
            // The first run only syncs `<html>`; later swaps are animated.
            if std::mem::replace(&mut *applied.borrow_mut(), true) {
                apply_theme_with_transition(*theme);
            } else {
                apply_theme(*theme);
            }
            || ()
        });
    }

    use_effect_with(shell.scroll, |scroll| {
        if let Some(request) = scroll {
            scroll_to(request.target);
        }
        || ()
    });

    let on_action = {
        let dispatcher = shell.dispatcher();
        Callback::from(move |action: ShellAction| dispatcher.dispatch(action))
    };

    let on_navigate = {
        let on_action = on_action.clone();
        Callback::from(move |target: ScrollTarget| on_action.emit(ShellAction::Navigate(target)))
    };

    html! {
        <>
            <a class="skip-link" href="#about">{"Skip to main content"}</a>
            <Background theme={theme} />
            <CustomCursor />
            <ScrollProgress />
            <div class="page-shell">
                <NavBar store={store} state={shell.state} on_action={on_action} />
                <main class="content">
                    <Hero store={store} on_navigate={on_navigate} />
                    <About store={store} />
                    <Journey store={store} />
                    <Projects store={store} />
                    <Contact store={store} />
                </main>
                <SiteFooter store={store} />
            </div>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    async fn render_nav(state: ShellState) -> String {
        yew::LocalServerRenderer::<NavBar>::with_props(NavBarProps {
            store: portfolio(),
            state,
            on_action: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn theme_controls_follow_state_in_a_single_render() {
        let dark = render_nav(ShellState::new(Theme::Dark)).await;
        assert!(dark.contains(r#"aria-label="Switch to light theme""#));
        assert!(dark.contains(r#"aria-pressed="true""#));
        assert!(dark.contains(Theme::Dark.icon()));

        let light = render_nav(ShellState::new(Theme::Light)).await;
        assert!(light.contains(r#"aria-label="Switch to dark theme""#));
        assert!(light.contains(r#"aria-pressed="false""#));
        assert!(light.contains(Theme::Light.icon()));
    }

    #[tokio::test]
    async fn mobile_menu_lists_sections_only_while_open() {
        let closed = ShellState::new(Theme::Dark);
        let html = render_nav(closed).await;
        assert!(!html.contains(r#"class="mobile-menu""#));
        assert_eq!(html.matches(r#"class="nav-link""#).count(), NAV_SECTIONS.len());
        assert!(html.contains(">MENU<"));

        let open = closed.apply(ShellAction::ToggleMenu).state;
        let html = render_nav(open).await;
        assert_eq!(html.matches(r#"class="mobile-link""#).count(), NAV_SECTIONS.len());
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains(">CLOSE<"));
    }
}
