//! Homepage content types.
//!
//! Everything the page shows comes from a [`SiteContent`] value. The types are:
//!
//! - **Serializable** - content can live in a JSON or TOML file
//! - **Clone-friendly** - components take owned props without borrowing issues
//! - **Immutable by convention** - built once, handed to the renderer, never mutated
//!
//! # Example
//!
//! ```rust
//! use portfolio_leptos::types::{Project, SiteContent};
//!
//! let content = SiteContent {
//!     projects: vec![Project {
//!         title: "Tracker".into(),
//!         description: "Habit tracker".into(),
//!         tags: vec!["Rust".into(), "Leptos".into()],
//!         link: "https://github.com/me/tracker".into(),
//!         image: "/img/tracker.png".into(),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! assert!(content.validate().is_ok());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::compose::MotionSettings;
use crate::error::SiteError;

/// Decorative icon handle. Resolved to inline SVG by the icon components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    /// Right arrow, used on call-to-action buttons
    ArrowRight,
    /// Angle brackets
    Code,
    /// Envelope
    Mail,
    /// GitHub mark
    Github,
    /// LinkedIn mark
    Linkedin,
    /// Threads mark
    Threads,
    /// Newspaper (resume)
    Newspaper,
    /// Globe
    Globe,
    /// Rocket
    Rocket,
}

/// A featured project card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Card heading
    pub title: String,
    /// Short blurb, clamped to three lines by the stylesheet
    pub description: String,
    /// Technology badges, in display order
    #[serde(default)]
    pub tags: Vec<String>,
    /// Primary link (source repository or case study)
    pub link: String,
    /// Deployed instance, if there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    /// Cover image URL
    pub image: String,
    /// Badge shown over the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconKind>,
}

/// What the secondary button of a project card does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiveAction<'a> {
    /// Link to the deployed instance
    Live(&'a str),
    /// No deployment yet; rendered as an inert placeholder
    Soon,
}

impl<'a> LiveAction<'a> {
    /// Button text.
    pub fn label(&self) -> &'static str {
        match self {
            LiveAction::Live(_) => "Live",
            LiveAction::Soon => "Soon",
        }
    }

    /// Link target, `None` for the placeholder.
    pub fn href(&self) -> Option<&'a str> {
        match *self {
            LiveAction::Live(url) => Some(url),
            LiveAction::Soon => None,
        }
    }
}

impl Project {
    /// Resolve the secondary button. Blank URLs count as missing.
    pub fn live_action(&self) -> LiveAction<'_> {
        match self.live.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => LiveAction::Live(url),
            _ => LiveAction::Soon,
        }
    }

    /// Tags with repeats removed, first occurrence wins.
    pub fn unique_tags(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.tags.len());
        for tag in &self.tags {
            if !seen.contains(&tag.as_str()) {
                seen.push(tag);
            }
        }
        seen
    }
}

/// A skill tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Technology name
    pub name: String,
    /// Icon drawn in the coloured square
    #[serde(default = "default_skill_icon")]
    pub icon: IconKind,
    /// Background class for the icon square, e.g. `bg-blue-500`
    #[serde(default = "default_skill_color")]
    pub color: String,
}

fn default_skill_icon() -> IconKind {
    IconKind::Code
}

fn default_skill_color() -> String {
    "bg-slate-500".into()
}

impl Skill {
    /// Skill with the default code icon.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: default_skill_icon(),
            color: color.into(),
        }
    }
}

/// External profile destinations shown under the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SocialKind {
    /// Code hosting profile
    Github,
    /// Professional network profile
    Linkedin,
    /// Social profile
    Threads,
    /// Resume document
    Resume,
}

impl SocialKind {
    /// Screen-reader label.
    pub fn label(self) -> &'static str {
        match self {
            SocialKind::Github => "GitHub",
            SocialKind::Linkedin => "LinkedIn",
            SocialKind::Threads => "Twitter",
            SocialKind::Resume => "CV",
        }
    }

    /// Icon drawn inside the link.
    pub fn icon(self) -> IconKind {
        match self {
            SocialKind::Github => IconKind::Github,
            SocialKind::Linkedin => IconKind::Linkedin,
            SocialKind::Threads => IconKind::Threads,
            SocialKind::Resume => IconKind::Newspaper,
        }
    }
}

/// One outbound profile link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Which profile this is
    pub kind: SocialKind,
    /// Absolute URL, opened in a new browsing context
    pub url: String,
}

/// In-site navigation destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavTarget {
    /// Full project listing
    Projects,
    /// Full skills listing
    Skills,
    /// Contact page
    Contact,
}

impl NavTarget {
    /// Route path.
    pub fn href(self) -> &'static str {
        match self {
            NavTarget::Projects => "/projects",
            NavTarget::Skills => "/skills",
            NavTarget::Contact => "/contact",
        }
    }
}

/// The page regions, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Avatar, headline and social links
    Hero,
    /// Featured projects grid
    Projects,
    /// Skills grid
    Skills,
    /// Closing call to action
    Cta,
}

impl Section {
    /// Render order.
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Projects,
        Section::Skills,
        Section::Cta,
    ];

    /// Anchor id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Cta => "contact-cta",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Hero => "hero",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Cta => "call-to-action",
        };
        f.write_str(name)
    }
}

/// Who the page is about. Missing fields fall back to the built-in profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Display name, highlighted in the headline
    pub name: String,
    /// Badge above the headline
    pub role: String,
    /// Avatar image URL
    pub avatar: String,
    /// Paragraph under the headline
    pub tagline: String,
    /// Paragraph of the closing call to action
    pub pitch: String,
}

/// All content rendered on the homepage.
///
/// `projects` and `skills` are required in content files; everything else
/// has a default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Hero and call-to-action text
    #[serde(default)]
    pub profile: Profile,
    /// Outbound profile links under the hero
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    /// Featured projects, in display order
    pub projects: Vec<Project>,
    /// Skill tiles, in display order
    pub skills: Vec<Skill>,
    /// Per-section timing overrides
    #[serde(default)]
    pub motion: MotionSettings,
}

impl SiteContent {
    /// Check that every record carries its required fields and that motion
    /// overrides keep the stagger strictly increasing.
    pub fn validate(&self) -> Result<(), SiteError> {
        for (index, project) in self.projects.iter().enumerate() {
            let required = [
                ("title", &project.title),
                ("description", &project.description),
                ("image", &project.image),
                ("link", &project.link),
            ];
            if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
                return Err(SiteError::EmptyField {
                    section: Section::Projects,
                    index,
                    field: *field,
                });
            }
        }

        for (index, skill) in self.skills.iter().enumerate() {
            if skill.name.trim().is_empty() {
                return Err(SiteError::EmptyField {
                    section: Section::Skills,
                    index,
                    field: "name",
                });
            }
        }

        self.motion.projects()?;
        self.motion.skills()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str) -> Project {
        Project {
            title: title.into(),
            description: "desc".into(),
            tags: vec![],
            link: "https://example.com".into(),
            live: None,
            image: "/img.png".into(),
            icon: None,
        }
    }

    #[test]
    fn live_action_without_url_is_soon() {
        let p = project("X");
        assert_eq!(p.live_action(), LiveAction::Soon);
        assert_eq!(p.live_action().label(), "Soon");
        assert_eq!(p.live_action().href(), None);
    }

    #[test]
    fn live_action_with_url_is_live() {
        let p = Project {
            live: Some("https://x.example".into()),
            ..project("X")
        };
        assert_eq!(p.live_action(), LiveAction::Live("https://x.example"));
        assert_eq!(p.live_action().label(), "Live");
    }

    #[test]
    fn blank_live_url_counts_as_missing() {
        let p = Project {
            live: Some("   ".into()),
            ..project("X")
        };
        assert_eq!(p.live_action(), LiveAction::Soon);
    }

    #[test]
    fn unique_tags_keep_first_occurrence() {
        let p = Project {
            tags: vec!["Rust".into(), "Wasm".into(), "Rust".into()],
            ..project("X")
        };
        assert_eq!(p.unique_tags(), vec!["Rust", "Wasm"]);
    }

    #[test]
    fn validate_reports_first_empty_field() {
        let content = SiteContent {
            projects: vec![project("ok"), project("")],
            ..Default::default()
        };
        assert_eq!(
            content.validate(),
            Err(SiteError::EmptyField {
                section: Section::Projects,
                index: 1,
                field: "title",
            })
        );
    }

    #[test]
    fn validate_rejects_nameless_skill() {
        let content = SiteContent {
            projects: vec![],
            skills: vec![Skill::new(" ", "bg-black")],
            ..Default::default()
        };
        let err = content.validate().unwrap_err();
        assert_eq!(err.to_string(), "skills entry #0 is missing its name");
    }

    #[test]
    fn sections_render_top_to_bottom() {
        assert_eq!(Section::ALL[0], Section::Hero);
        assert_eq!(Section::ALL[3], Section::Cta);
        assert_eq!(NavTarget::Contact.href(), "/contact");
    }
}
