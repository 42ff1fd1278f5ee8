use anyhow::{Context, bail};
use serde::Deserialize;
use tracing::{Level, debug, instrument};

// the page content ships inside the binary, nothing is fetched at runtime
const EMBEDDED_SITE: &str = include_str!("../content/site.toml");

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Site {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}

// the person behind the page
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    // used in the header title
    pub short_name: String,
    pub tagline: String,
    pub call_to_action: String,
    pub contact: Contact,
}

// outbound links, rendered exactly as given
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech_stack: String,
    pub repository_url: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Skill(pub String);

impl Skill {
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl Site {
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_toml(EMBEDDED_SITE)
    }

    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> anyhow::Result<Self> {
        let site: Site = toml::from_str(doc).context("failed to parse site content")?;

        site.validate()?;

        debug!(
            projects = site.projects.len(),
            skills = site.skills.len(),
            "loaded site content"
        );

        Ok(site)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.profile.name.trim().is_empty() || self.profile.short_name.trim().is_empty() {
            bail!("profile name is empty");
        }

        if self.projects.is_empty() {
            bail!("no projects listed");
        }

        if self.skills.is_empty() {
            bail!("no skills listed");
        }

        // urls are opaque, but a card without a title or link is useless
        for (index, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                bail!("project {index} has no title");
            }

            if project.repository_url.trim().is_empty() {
                bail!("project {} has no repository url", project.title);
            }
        }

        Ok(())
    }
}

impl Profile {
    pub fn site_title(&self) -> String {
        format!("{}'s Portfolio", self.short_name)
    }

    pub fn copyright(&self, year: i32) -> String {
        format!("© {year} {}. All rights reserved.", self.name)
    }
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
