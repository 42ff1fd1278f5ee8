use dioxus::prelude::*;

use site::theme::ToggleIcon;

// stroke-only outline icons on a 24x24 grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Sun,
    Moon,
    Envelope,
    GitHub,
    LinkedIn,
}

impl Glyph {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Glyph::Sun => &[
                "M17 12a5 5 0 1 1-10 0a5 5 0 1 1 10 0z",
                "M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42",
            ],
            Glyph::Moon => &["M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"],
            Glyph::Envelope => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "M22 6l-10 7L2 6",
            ],
            Glyph::GitHub => &[
                "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22",
            ],
            Glyph::LinkedIn => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M6 4a2 2 0 1 1-4 0a2 2 0 1 1 4 0z",
            ],
        }
    }
}

impl From<ToggleIcon> for Glyph {
    fn from(icon: ToggleIcon) -> Self {
        match icon {
            ToggleIcon::Sun => Glyph::Sun,
            ToggleIcon::Moon => Glyph::Moon,
        }
    }
}

#[component]
pub fn Icon(glyph: Glyph) -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in glyph.paths() {
                path { d: *d }
            }
        }
    }
}
