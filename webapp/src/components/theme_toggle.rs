use dioxus::prelude::*;
use tracing::debug;

use site::theme::Theme;

use crate::components::icon::Icon;

// the only writer of the theme signal
#[component]
pub fn ThemeToggle(theme: Signal<Theme>) -> Element {
    let mut theme = theme;
    let icon = theme().toggle_icon();

    rsx! {
        button {
            class: "theme-toggle",
            title: icon.label(),
            "aria-label": icon.label(),
            onclick: move |_| {
                let next = theme.peek().toggled();
                debug!(theme = %next, "theme toggled");
                theme.set(next);
            },
            Icon { glyph: icon.into() }
        }
    }
}
