use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

pub static SITE: LazyLock<SiteContent> =
    LazyLock::new(|| SiteContent::load().expect("embedded site content should parse"));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub github_username: String,
    pub portrait: String,
    pub about: Vec<String>,
    pub tech_slugs: Vec<String>,
    pub socials: Vec<SocialLink>,
    pub nav: Vec<String>,
}

impl Profile {
    pub fn tech_icons(&self) -> impl Iterator<Item = (String, &str)> {
        self.tech_slugs
            .iter()
            .map(|slug| (format!("https://cdn.simpleicons.org/{slug}/{slug}"), slug.as_str()))
    }
}

/// Anchor for a navigation label, e.g. `"About"` -> `"#about"`.
pub fn anchor(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub company: String,
    pub location: String,
    pub role: String,
    pub job_type: String,
    pub duration: String,
    pub accent: String,
    pub icon: String,
    pub responsibilities: Vec<String>,
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub link: String,
    pub github: String,
    pub color: String,
    pub tags: Vec<String>,
}

impl Project {
    pub fn thumbnail_style(&self) -> String {
        format!(
            "background: linear-gradient(45deg, {0}, {0}88);",
            self.color
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub profile: Profile,
    pub experience: Vec<Position>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Ok(Self {
            profile: load_json("profile.json")?,
            experience: load_json("experience.json")?,
            skills: load_json("skills.json")?,
            projects: load_json("projects.json")?,
        })
    }
}

fn load_json<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let data = Assets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
    serde_json::from_slice(&data.data).map_err(|source| ContentError::Parse {
        file: file.to_string(),
        source,
    })
}

/// Index after `current` in a list of `len`, wrapping to the start.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Index before `current` in a list of `len`, wrapping to the end.
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

/// Expanding the open card collapses it, anything else opens.
pub fn toggle_expanded(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let content = SiteContent::load().expect("content should load");
        assert!(!content.profile.name.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.experience.is_empty());
        assert_eq!(
            content
                .skills
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Frontend", "Backend", "Styling"]
        );
        assert!(crate::contributions::is_valid_username(
            &content.profile.github_username
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_json::<Profile>("nope.json").unwrap_err();
        assert!(matches!(err, ContentError::NotFound(f) if f == "nope.json"));
    }

    #[test]
    fn test_nav_anchors() {
        let nav = &SITE.profile.nav;
        assert!(nav.iter().any(|n| anchor(n) == "#projects"));
        assert_eq!(anchor("Contact"), "#contact");
    }

    #[test]
    fn test_carousel_wraps() {
        assert_eq!(next_index(4, 5), 0);
        assert_eq!(next_index(1, 5), 2);
        assert_eq!(prev_index(0, 5), 4);
        assert_eq!(prev_index(3, 5), 2);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn test_toggle_expanded() {
        assert_eq!(toggle_expanded(None, 1), Some(1));
        assert_eq!(toggle_expanded(Some(1), 1), None);
        assert_eq!(toggle_expanded(Some(0), 1), Some(1));
    }

    #[test]
    fn test_thumbnail_and_icons() {
        let project = &SITE.projects[0];
        assert!(project.thumbnail_style().contains(&format!("{}88", project.color)));
        let (url, slug) = SITE.profile.tech_icons().next().expect("at least one icon");
        assert_eq!(url, format!("https://cdn.simpleicons.org/{slug}/{slug}"));
    }
}
