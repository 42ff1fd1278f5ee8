use dioxus::prelude::*;

use site::{section::Section, theme::Theme};

use crate::components::theme_toggle::ThemeToggle;

#[derive(Clone, PartialEq, Props)]
struct NavBarLinkProps {
    section: Section,
    active: ReadOnlySignal<Section>,
}

#[component]
fn NavBarLink(props: NavBarLinkProps) -> Element {
    let section = props.section;
    let active = props.active;

    rsx! {
        a {
            class: if active() == section { "nav-link active" } else { "nav-link" },
            href: section.href(),
            "{section.label()}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    title: String,
    theme: Signal<Theme>,
    active: ReadOnlySignal<Section>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let theme = props.theme;
    let active = props.active;

    rsx! {
        header { class: "app-header {theme().surface_class()}",
            nav { class: "nav-container",
                span { class: "logo", "{props.title}" }

                div { class: "nav-links",
                    for section in Section::ALL {
                        NavBarLink { key: "{section}", section, active }
                    }
                    ThemeToggle { theme }
                }
            }
        }
    }
}
