//! Screen hierarchy supplied by the host UI

/// How a screen hosts its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenKind {
    /// Plain content screen
    Leaf,
    /// Stack container; only the visible entry matters
    Navigation { visible: Option<Box<Screen>> },
    /// Tab container; only the selected tab matters
    Tabs { selected: Option<Box<Screen>> },
}

/// A node in the host's presentation hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub name: String,
    pub kind: ScreenKind,
    /// Screen presented modally on top of this one
    pub presented: Option<Box<Screen>>,
}

impl Screen {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ScreenKind::Leaf,
            presented: None,
        }
    }

    pub fn navigation(name: impl Into<String>, visible: Option<Screen>) -> Self {
        Self {
            name: name.into(),
            kind: ScreenKind::Navigation {
                visible: visible.map(Box::new),
            },
            presented: None,
        }
    }

    pub fn tabs(name: impl Into<String>, selected: Option<Screen>) -> Self {
        Self {
            name: name.into(),
            kind: ScreenKind::Tabs {
                selected: selected.map(Box::new),
            },
            presented: None,
        }
    }

    /// Returns this screen with `screen` presented modally on top of it
    pub fn presenting(mut self, screen: Screen) -> Self {
        self.presented = Some(Box::new(screen));
        self
    }

    /// Walks down to the screen the user is currently looking at
    ///
    /// Navigation containers defer to their visible screen and tab containers
    /// to their selected tab; otherwise a modally presented screen wins over
    /// its presenter. A navigation container with nothing visible has no top
    /// screen.
    pub fn top_screen(&self) -> Option<&Screen> {
        match &self.kind {
            ScreenKind::Navigation { visible } => {
                return visible.as_deref().and_then(Screen::top_screen);
            }
            ScreenKind::Tabs {
                selected: Some(selected),
            } => return selected.top_screen(),
            ScreenKind::Tabs { selected: None } | ScreenKind::Leaf => {}
        }

        match &self.presented {
            Some(presented) => presented.top_screen(),
            None => Some(self),
        }
    }
}

/// Topmost screen of an optional root; `None` when the host has no window
pub fn top_screen(root: Option<&Screen>) -> Option<&Screen> {
    root.and_then(Screen::top_screen)
}
