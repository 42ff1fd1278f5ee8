use dioxus::prelude::*;

use site::{
    content::Project,
    motion::{Entrance, Motion},
    section::Section,
    theme::Theme,
};

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
    theme: Theme,
    entrance: Entrance,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    rsx! {
        div {
            class: "project-card {props.theme.card_class()}",
            style: props.entrance.style(),
            h3 { class: "project-title", "{project.title}" }
            p { "{project.description}" }
            p {
                span { class: "label", "Tech Stack:" }
                " {project.tech_stack}"
            }
            a { class: "repo-link", href: "{project.repository_url}", "GitHub Repo" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ProjectGridProps {
    projects: Vec<Project>,
    theme: Theme,
    motion: Motion,
}

// one card per project, in source order
#[component]
pub fn ProjectGrid(props: ProjectGridProps) -> Element {
    let theme = props.theme;
    let motion = props.motion;

    rsx! {
        section { id: Section::Projects.anchor(), class: "page-section",
            h2 { class: "section-title", "Projects" }
            div { class: "project-grid",
                for (index, project) in props.projects.iter().enumerate() {
                    ProjectCard {
                        key: "{index}",
                        project: project.clone(),
                        theme,
                        entrance: motion.card_entrance(index),
                    }
                }
            }
        }
    }
}
