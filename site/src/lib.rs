//! # portfolio-leptos
//!
//! Leptos SSR renderer for a personal portfolio homepage.
//!
//! The page is a fixed sequence of four independent sections (hero, featured
//! projects, skills, call to action) rendered to one static HTML document.
//! Project and skill cards enter with staggered CSS animations whose delays
//! are computed up front by [`compose::compose`].
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio_leptos::{render_homepage, types::SiteContent};
//!
//! // Built-in content, or deserialize your own from JSON/TOML
//! let content = SiteContent::default();
//!
//! // Render to HTML string
//! let html = render_homepage(&content).expect("built-in content is valid");
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Content records and page vocabulary
//! - [`compose`] - Records to staggered visual nodes (framework independent)
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants and keyframes
//! - [`content`] - Built-in default content
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is involved - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod compose;
pub mod content;
pub mod error;
pub mod styles;
pub mod types;

use components::{PageMain, SiteDocument};
use compose::Motion;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;

pub use error::SiteError;
use types::SiteContent;

/// Validated content with its card motions resolved, ready to render.
///
/// Construction is the only fallible step; rendering a `Homepage` always
/// succeeds.
#[derive(Clone, Debug, PartialEq)]
pub struct Homepage {
    pub(crate) content: SiteContent,
    pub(crate) project_motion: Motion,
    pub(crate) skill_motion: Motion,
}

impl Homepage {
    /// Validate `content` and resolve the motion overrides it carries.
    pub fn from_content(content: &SiteContent) -> Result<Self, SiteError> {
        content.validate()?;
        let project_motion = content.motion.projects()?;
        let skill_motion = content.motion.skills()?;

        debug!(
            projects = content.projects.len(),
            skills = content.skills.len(),
            "homepage content resolved"
        );

        Ok(Self {
            content: content.clone(),
            project_motion,
            skill_motion,
        })
    }

    /// Content being rendered.
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// Motion used by the featured projects grid.
    pub fn project_motion(&self) -> &Motion {
        &self.project_motion
    }

    /// Motion used by the skills grid.
    pub fn skill_motion(&self) -> &Motion {
        &self.skill_motion
    }

    /// Complete HTML document, including `<!DOCTYPE html>`.
    pub fn render(&self) -> String {
        let doc = view! { <SiteDocument page={self.clone()} /> };
        let html = doc.to_html();

        // Leptos doesn't include DOCTYPE, so we add it
        format!("<!DOCTYPE html>\n{}", html)
    }

    /// Only the `<main>` element, for embedding in another layout.
    pub fn render_fragment(&self) -> String {
        view! { <PageMain page={self.clone()} /> }.to_html()
    }
}

/// Render the complete homepage for `content`.
///
/// # Example
///
/// ```rust
/// use portfolio_leptos::{render_homepage, types::SiteContent};
///
/// let content = SiteContent {
///     projects: vec![],
///     ..Default::default()
/// };
///
/// let html = render_homepage(&content).unwrap();
/// assert!(html.contains("Featured Projects"));
/// ```
pub fn render_homepage(content: &SiteContent) -> Result<String, SiteError> {
    Ok(Homepage::from_content(content)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use compose::TimingOverride;
    use pretty_assertions::assert_eq;
    use types::{IconKind, Project, Skill, SocialKind, SocialLink};

    fn project(title: &str, live: Option<&str>) -> Project {
        Project {
            title: title.into(),
            description: format!("{title} description"),
            tags: vec![],
            link: format!("https://github.com/me/{title}"),
            live: live.map(String::from),
            image: format!("/img/{title}.png"),
            icon: None,
        }
    }

    fn only_projects(projects: Vec<Project>) -> SiteContent {
        SiteContent {
            socials: vec![],
            projects,
            skills: vec![],
            ..Default::default()
        }
    }

    fn fragment(content: &SiteContent) -> String {
        Homepage::from_content(content).unwrap().render_fragment()
    }

    #[test]
    fn renders_default_document() {
        let html = render_homepage(&SiteContent::default()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Muhammad Farhan | Portfolio"));
        assert!(html.contains("@keyframes fade-up"));
        assert!(html.contains("Content-Security-Policy"));
    }

    #[test]
    fn sections_render_in_page_order() {
        let html = fragment(&SiteContent::default());
        let positions: Vec<usize> = ["id=\"hero\"", "id=\"projects\"", "id=\"skills\"", "id=\"contact-cta\""]
            .iter()
            .map(|needle| html.find(needle).unwrap())
            .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn single_record_without_live_link() {
        let mut record = project("X", None);
        record.tags = vec!["A".into(), "B".into()];
        let html = fragment(&only_projects(vec![record]));

        assert_eq!(html.matches("project-card").count(), 1);
        assert_eq!(html.matches("class=\"badge tag-badge\"").count(), 2);
        assert!(html.contains("btn-soon"));
        assert!(html.contains("Soon"));
        assert!(!html.contains("btn-live"));
    }

    #[test]
    fn soon_placeholder_is_not_a_link() {
        let html = fragment(&only_projects(vec![project("X", None)]));

        let class_at = html.find("btn-soon").unwrap();
        let open = html[..class_at].rfind('<').unwrap();
        let close = class_at + html[class_at..].find('>').unwrap();
        let tag = &html[open..=close];

        assert!(tag.starts_with("<span"), "placeholder tag: {tag}");
        assert!(!tag.contains("href"), "placeholder tag: {tag}");
        assert!(tag.contains("aria-disabled=\"true\""));
    }

    #[test]
    fn icon_badge_only_for_projects_with_icon() {
        let with_icon = Project {
            icon: Some(IconKind::Rocket),
            ..project("A", None)
        };
        let html = fragment(&only_projects(vec![with_icon, project("B", None)]));
        assert_eq!(html.matches("class=\"project-icon\"").count(), 1);

        let badge = html.find("project-icon").unwrap();
        let a = html.find("A description").unwrap();
        let b = html.find("B description").unwrap();
        assert!(badge < a && a < b);

        let html = fragment(&only_projects(vec![project("C", None)]));
        assert_eq!(html.matches("project-icon").count(), 0);
    }

    #[test]
    fn hero_blocks_enter_in_three_steps() {
        let html = fragment(&only_projects(vec![]));

        let steps: Vec<usize> = [
            "fade-up 500ms ease-out 0ms both; --rise-from: 20px",
            "fade-in 500ms ease-out 300ms both",
            "fade-in 500ms ease-out 600ms both",
        ]
        .iter()
        .map(|style| html.find(style).unwrap_or_else(|| panic!("missing {style}")))
        .collect();

        assert!(steps[0] < steps[1] && steps[1] < steps[2]);
        assert!(steps[2] < html.find("id=\"projects\"").unwrap());
        assert!(steps[0] < html.find("hero-title").unwrap());
        assert!(steps[1] < html.find("View My Work").unwrap());
    }

    #[test]
    fn live_link_renders_live_button() {
        let html = fragment(&only_projects(vec![project("Y", Some("https://y.example"))]));

        assert!(html.contains("btn-live"));
        assert!(html.contains("href=\"https://y.example\""));
        assert!(html.contains("Live"));
        assert!(!html.contains("btn-soon"));
    }

    #[test]
    fn empty_collections_render_no_cards() {
        let html = fragment(&only_projects(vec![]));

        assert_eq!(html.matches("project-card").count(), 0);
        assert_eq!(html.matches("skill-card").count(), 0);
        assert!(html.contains("Featured Projects"));
        assert!(html.contains("My Skills"));
    }

    #[test]
    fn card_delays_follow_render_order() {
        let content = only_projects(vec![
            project("one", None),
            project("two", None),
            project("three", None),
        ]);
        let html = fragment(&content);

        let positions: Vec<usize> = ["0ms both", "100ms both", "200ms both"]
            .iter()
            .map(|delay| html.find(&format!("fade-up 500ms ease-out {delay}")).unwrap())
            .collect();
        assert!(positions[0] < positions[1] && positions[1] < positions[2]);

        let one = html.find("one description").unwrap();
        let three = html.find("three description").unwrap();
        assert!(positions[0] < one && one < positions[2] && positions[2] < three);
    }

    #[test]
    fn skill_tiles_carry_float_loop() {
        let content = SiteContent {
            skills: vec![Skill::new("Rust", "bg-black"), Skill::new("Go", "bg-cyan-500")],
            ..only_projects(vec![])
        };
        let html = fragment(&content);

        assert_eq!(html.matches("skill-card").count(), 2);
        assert!(html.contains("scale-in 300ms ease-out 50ms both, float 3000ms ease-in-out 200ms infinite"));
        assert!(html.contains("skill-icon bg-cyan-500"));
    }

    #[test]
    fn social_links_open_in_new_context() {
        let content = SiteContent {
            socials: vec![SocialLink {
                kind: SocialKind::Resume,
                url: "https://cv.example".into(),
            }],
            ..only_projects(vec![])
        };
        let html = fragment(&content);

        assert!(html.contains("href=\"https://cv.example\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("CV"));
    }

    #[test]
    fn motion_override_changes_card_delays() {
        let mut content = only_projects(vec![project("a", None), project("b", None)]);
        content.motion.projects = Some(TimingOverride {
            base_delay_ms: Some(1000),
            stride_ms: Some(250),
            duration_ms: None,
        });
        let page = Homepage::from_content(&content).unwrap();
        let html = page.render_fragment();

        assert_eq!(page.project_motion().stagger.delay_at(1).as_millis(), 1250);
        assert!(html.contains("fade-up 500ms ease-out 1000ms both"));
        assert!(html.contains("fade-up 500ms ease-out 1250ms both"));
    }

    #[test]
    fn invalid_content_is_rejected_before_render() {
        let content = only_projects(vec![Project {
            link: String::new(),
            ..project("Z", None)
        }]);

        let err = render_homepage(&content).unwrap_err();
        assert_eq!(err.to_string(), "projects entry #0 is missing its link");
    }
}
