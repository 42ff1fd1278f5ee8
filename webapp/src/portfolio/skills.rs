use dioxus::prelude::*;

use site::{content::Skill, motion::Motion, section::Section, theme::Theme};

#[component]
pub fn SkillGrid(skills: Vec<Skill>, theme: Theme, motion: Motion) -> Element {
    rsx! {
        section { id: Section::Skills.anchor(), class: "page-section",
            h2 { class: "section-title", "Skills" }
            div { class: "skill-grid",
                for (index, skill) in skills.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "skill-tile hover-scale {theme.tile_class()}",
                        style: motion.hover_style(),
                        "{skill.label()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::render;
    use site::content::Site;

    #[test]
    fn test_one_tile_per_skill() {
        fn App() -> Element {
            let skills = Site::embedded().unwrap().skills;
            rsx! {
                SkillGrid { skills, theme: Theme::Light, motion: Motion::none() }
            }
        }

        let html = render(App);

        assert_eq!(html.matches(r#"class="skill-tile "#).count(), 14);
        assert_eq!(html.matches("tile-light").count(), 14);
        assert!(!html.contains("card-light"));

        let python = html.find("Python").unwrap();
        let raspberry = html.find("Raspberry Pi").unwrap();
        assert!(python < raspberry);
    }
}
