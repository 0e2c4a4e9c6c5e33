//! Built-in homepage content.
//!
//! Used when no content file is supplied. Values are constructed on demand,
//! there is no shared mutable state.

use crate::compose::MotionSettings;
use crate::types::{IconKind, Profile, Project, SiteContent, Skill, SocialKind, SocialLink};

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Muhammad Farhan".into(),
            role: "Full-Stack Developer".into(),
            avatar: "https://ucarecdn.com/9e59f77f-db92-4fc6-b430-eb8359dffc0e/60821454679799092561.jpg"
                .into(),
            tagline: "I build modern, responsive web applications with cutting-edge technologies. \
                      Let's create something amazing together."
                .into(),
            pitch: "I'm currently available for freelance work and open to new opportunities. \
                    If you have a project in mind or just want to chat, feel free to reach out."
                .into(),
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            socials: default_socials(),
            projects: default_projects(),
            skills: default_skills(),
            motion: MotionSettings::default(),
        }
    }
}

/// Profile links shown under the hero.
pub fn default_socials() -> Vec<SocialLink> {
    [
        (SocialKind::Github, "https://github.com/mhmdd-farhan"),
        (
            SocialKind::Linkedin,
            "https://linkedin.com/in/muhammad-farhan-569018185/",
        ),
        (SocialKind::Threads, "https://www.threads.net/@mhmdd_frhnn"),
        (SocialKind::Resume, "https://cv.muhammad-farhan.com"),
    ]
    .into_iter()
    .map(|(kind, url)| SocialLink {
        kind,
        url: url.into(),
    })
    .collect()
}

/// Featured projects, newest first.
pub fn default_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Taskflow".into(),
            description: "Kanban board with real-time collaboration, drag-and-drop columns \
                          and per-board activity history."
                .into(),
            tags: vec!["React".into(), "Node.js".into(), "MongoDB".into()],
            link: "https://github.com/mhmdd-farhan/taskflow".into(),
            live: Some("https://taskflow.muhammad-farhan.com".into()),
            image: "/images/projects/taskflow.png".into(),
            icon: Some(IconKind::Rocket),
        },
        Project {
            title: "Storefront".into(),
            description: "Headless e-commerce storefront with server-rendered product pages, \
                          cart persistence and a GraphQL checkout."
                .into(),
            tags: vec!["Next.js".into(), "GraphQL".into(), "Tailwind CSS".into()],
            link: "https://github.com/mhmdd-farhan/storefront".into(),
            live: Some("https://store.muhammad-farhan.com".into()),
            image: "/images/projects/storefront.png".into(),
            icon: Some(IconKind::Globe),
        },
        Project {
            title: "Devlog".into(),
            description: "Markdown-first developer blog engine with syntax highlighting, \
                          tag pages and an RSS feed."
                .into(),
            tags: vec!["TypeScript".into(), "Docker".into()],
            link: "https://github.com/mhmdd-farhan/devlog".into(),
            live: None,
            image: "/images/projects/devlog.png".into(),
            icon: Some(IconKind::Code),
        },
    ]
}

/// Skill tiles with their accent colours.
pub fn default_skills() -> Vec<Skill> {
    [
        ("React", "bg-blue-500"),
        ("TypeScript", "bg-blue-700"),
        ("Node.js", "bg-green-600"),
        ("Next.js", "bg-black"),
        ("Tailwind CSS", "bg-cyan-500"),
        ("MongoDB", "bg-green-500"),
        ("GraphQL", "bg-pink-600"),
        ("Docker", "bg-blue-600"),
    ]
    .into_iter()
    .map(|(name, color)| Skill::new(name, color))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_is_valid() {
        assert_eq!(SiteContent::default().validate(), Ok(()));
    }

    #[test]
    fn default_content_shows_both_button_states() {
        let projects = default_projects();
        let labels: Vec<&str> = projects.iter().map(|p| p.live_action().label()).collect();
        assert!(labels.contains(&"Live"));
        assert!(labels.contains(&"Soon"));
    }

    #[test]
    fn eight_skills_in_order() {
        let names: Vec<String> = default_skills().into_iter().map(|s| s.name).collect();
        assert_eq!(names.len(), 8);
        assert_eq!(names.first().map(String::as_str), Some("React"));
        assert_eq!(names.last().map(String::as_str), Some("Docker"));
    }
}
