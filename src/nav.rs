//! Root-level page state: theme, mobile menu, and where a click scrolls to.

use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

/// Entries shown in the navigation bar, in order.
pub const NAV_SECTIONS: [Section; 4] = [
    Section::About,
    Section::Experience,
    Section::Projects,
    Section::Contact,
];

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Section(Section),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellAction {
    ToggleTheme,
    ToggleMenu,
    Navigate(ScrollTarget),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellState {
    pub theme: Theme,
    pub menu_open: bool,
}

/// Next state plus the single scroll the caller must perform, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellTransition {
    pub state: ShellState,
    pub scroll_to: Option<ScrollTarget>,
}

impl ShellState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            menu_open: false,
        }
    }

    pub fn menu_label(self) -> &'static str {
        if self.menu_open {
            "CLOSE"
        } else {
            "MENU"
        }
    }

    pub fn apply(self, action: ShellAction) -> ShellTransition {
        match action {
            ShellAction::ToggleTheme => ShellTransition {
                state: Self {
                    theme: self.theme.toggled(),
                    ..self
                },
                scroll_to: None,
            },
            ShellAction::ToggleMenu => ShellTransition {
                state: Self {
                    menu_open: !self.menu_open,
                    ..self
                },
                scroll_to: None,
            },
            ShellAction::Navigate(target) => ShellTransition {
                state: Self {
                    menu_open: false,
                    ..self
                },
                scroll_to: Some(target),
            },
        }
    }
}

/// A scroll the page still has to perform. `seq` distinguishes two requests
/// for the same target so each one fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    pub seq: u32,
    pub target: ScrollTarget,
}

/// Reducer state behind the page shell. Every action is folded into the
/// latest state, never into a copy captured by an earlier render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellStore {
    pub state: ShellState,
    pub scroll: Option<ScrollRequest>,
}

impl ShellStore {
    pub fn new(theme: Theme) -> Self {
        Self {
            state: ShellState::new(theme),
            scroll: None,
        }
    }

    pub fn apply(self, action: ShellAction) -> Self {
        let transition = self.state.apply(action);
        let scroll = match transition.scroll_to {
            Some(target) => Some(ScrollRequest {
                seq: self.scroll.map_or(0, |last| last.seq.wrapping_add(1)),
                target,
            }),
            None => self.scroll,
        };

        Self {
            state: transition.state,
            scroll,
        }
    }
}
