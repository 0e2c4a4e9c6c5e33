//! Leptos UI components for the homepage.
//!
//! Each component is a Leptos `#[component]` function rendered to static
//! HTML. Card grids take the output of [`crate::compose::compose`] and wrap
//! every card in a [`Reveal`] carrying its staggered transition.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! └── PageMain
//!     ├── Hero
//!     │   └── Reveal x3 (intro, actions, profile links)
//!     ├── FeaturedProjects
//!     │   └── ProjectCard (per project, staggered)
//!     ├── SkillsGrid
//!     │   └── SkillCard (per skill, staggered + float)
//!     └── CallToAction
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_homepage`], but
//! can be used directly for custom layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use portfolio_leptos::compose::Motion;
//! use portfolio_leptos::components::SkillsGrid;
//!
//! view! { <SkillsGrid skills=my_skills motion=Motion::SKILL_CARDS /> }
//! ```

mod cta;
mod document;
mod hero;
mod icons;
mod projects;
mod reveal;
mod skills;

pub use cta::CallToAction;
pub use document::{PageMain, SiteDocument};
pub use hero::Hero;
pub use icons::*;
pub use projects::{FeaturedProjects, ProjectCard};
pub use reveal::Reveal;
pub use skills::{SkillCard, SkillsGrid};
