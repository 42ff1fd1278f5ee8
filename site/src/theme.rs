use std::fmt;

// light/dark selection for the page root
//
// this is never persisted, every page load starts dark
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    // background/text pair for the page root
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }

    // header and footer
    pub fn surface_class(self) -> &'static str {
        match self {
            Theme::Dark => "surface-dark",
            Theme::Light => "surface-light",
        }
    }

    // project cards
    pub fn card_class(self) -> &'static str {
        match self {
            Theme::Dark => "card-dark",
            Theme::Light => "card-light",
        }
    }

    // skill tiles sit a shade darker than cards in light mode
    pub fn tile_class(self) -> &'static str {
        match self {
            Theme::Dark => "tile-dark",
            Theme::Light => "tile-light",
        }
    }

    // the toggle advertises the mode it would switch to
    pub fn toggle_icon(self) -> ToggleIcon {
        match self {
            Theme::Dark => ToggleIcon::Sun,
            Theme::Light => ToggleIcon::Moon,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleIcon {
    Sun,
    Moon,
}

impl ToggleIcon {
    pub fn label(self) -> &'static str {
        match self {
            ToggleIcon::Sun => "Switch to light mode",
            ToggleIcon::Moon => "Switch to dark mode",
        }
    }
}
