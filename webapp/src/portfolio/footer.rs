use chrono::{Datelike, Local};
use dioxus::prelude::*;

use site::{content::Profile, theme::Theme};

#[component]
pub fn Footer(profile: Profile, theme: Theme) -> Element {
    let year = Local::now().year();

    rsx! {
        footer { class: "site-footer {theme.surface_class()}",
            p { "{profile.copyright(year)}" }
        }
    }
}
