use std::rc::Rc;

use dioxus::prelude::*;
use tracing::error;

use site::{content::Site, motion::Motion, section::Section, theme::Theme};

use crate::{common::scroll::use_active_section, components::navigation::NavBar};

mod contact;
use contact::ContactLinks;

mod footer;
use footer::Footer;

mod hero;
use hero::Hero;

mod projects;
use projects::ProjectGrid;

mod skills;
use skills::SkillGrid;

// the page shell
//
// theme is written only by the toggle button and the active section only by
// the scroll listener, everything else is rendered unconditionally
#[component]
pub fn Portfolio() -> Element {
    let theme = use_signal(Theme::default);
    let active = use_active_section();
    let motion = Motion::default();

    let site = use_hook(|| match Site::embedded() {
        Ok(site) => Some(Rc::new(site)),
        Err(err) => {
            error!("failed to load site content: {err:#}");
            None
        }
    });

    let Some(site) = site else {
        return rsx! {
            main { class: "page {theme().root_class()}",
                section { class: "page-section", "This page could not be loaded." }
            }
        };
    };

    rsx! {
        PortfolioPage { site, theme, active, motion }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PortfolioPageProps {
    site: Rc<Site>,
    theme: Signal<Theme>,
    active: ReadOnlySignal<Section>,
    motion: Motion,
}

#[component]
pub fn PortfolioPage(props: PortfolioPageProps) -> Element {
    let site = props.site;
    let theme = props.theme;
    let motion = props.motion;
    let current = theme();

    rsx! {
        main { class: "page {current.root_class()}",
            NavBar { title: site.profile.site_title(), theme, active: props.active }
            Hero { profile: site.profile.clone(), motion }
            ProjectGrid { projects: site.projects.clone(), theme: current, motion }
            SkillGrid { skills: site.skills.clone(), theme: current, motion }
            ContactLinks { contact: site.profile.contact.clone() }
            Footer { profile: site.profile.clone(), theme: current }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::render;

    #[test]
    fn test_page_renders_every_anchor() {
        fn App() -> Element {
            let site = Rc::new(Site::embedded().unwrap());
            let theme = use_signal(Theme::default);
            let active = ReadOnlySignal::new(use_signal(Section::default));
            rsx! {
                PortfolioPage { site, theme, active, motion: Motion::none() }
            }
        }

        let html = render(App);

        assert!(html.contains(r#"class="page theme-dark""#));
        for section in Section::ALL {
            assert!(
                html.contains(&format!(r#"id="{}""#, section.anchor())),
                "missing anchor {section}"
            );
        }
    }

    #[test]
    fn test_light_theme_reaches_the_root() {
        fn App() -> Element {
            let site = Rc::new(Site::embedded().unwrap());
            let theme = use_signal(|| Theme::Light);
            let active = ReadOnlySignal::new(use_signal(Section::default));
            rsx! {
                PortfolioPage { site, theme, active, motion: Motion::none() }
            }
        }

        let html = render(App);

        assert!(html.contains(r#"class="page theme-light""#));
        assert!(!html.contains("theme-dark"));
        assert!(html.contains("surface-light"));
    }
}
