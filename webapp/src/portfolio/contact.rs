use dioxus::prelude::*;

use site::{content::Contact, section::Section};

use crate::components::icon::{Glyph, Icon};

#[component]
pub fn ContactLinks(contact: Contact) -> Element {
    let links = [
        (contact.mailto(), Glyph::Envelope, "Email"),
        (contact.github.clone(), Glyph::GitHub, "GitHub"),
        (contact.linkedin.clone(), Glyph::LinkedIn, "LinkedIn"),
    ];

    rsx! {
        section { id: Section::Contact.anchor(), class: "page-section contact",
            h2 { class: "section-title", "Contact Me" }
            div { class: "contact-links",
                for (href, glyph, label) in links {
                    a { key: "{label}", href, "aria-label": label, title: label,
                        Icon { glyph }
                    }
                }
            }
        }
    }
}
