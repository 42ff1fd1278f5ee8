use dioxus::prelude::*;

use site::{content::Profile, motion::Motion, section::Section};

#[component]
pub fn Hero(profile: Profile, motion: Motion) -> Element {
    rsx! {
        section { id: Section::Home.anchor(), class: "hero",
            h1 { class: "hero-title", style: motion.hero_title.style(), "{profile.name}" }
            p { class: "hero-tagline", style: motion.hero_tagline.style(), "{profile.tagline}" }
            a {
                class: "btn-primary hover-scale",
                style: motion.hover_style(),
                href: Section::Projects.href(),
                "{profile.call_to_action}"
            }
        }
    }
}
