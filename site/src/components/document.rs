//! Root document component - the complete HTML page
//!
//! Sections are rendered top to bottom and each receives only its own slice
//! of the content.

use leptos::prelude::*;

use super::{CallToAction, FeaturedProjects, Hero, SkillsGrid};
use crate::styles::{CSP, SITE_CSS};
use crate::types::SiteContent;
use crate::Homepage;

/// `<main>` with the four homepage sections.
#[component]
pub fn PageMain(page: Homepage) -> impl IntoView {
    let Homepage {
        content,
        project_motion,
        skill_motion,
    } = page;
    let SiteContent {
        profile,
        socials,
        projects,
        skills,
        ..
    } = content;
    let pitch = profile.pitch.clone();

    view! {
        <main class="page">
            <Hero profile=profile socials=socials />
            <FeaturedProjects projects=projects motion=project_motion />
            <SkillsGrid skills=skills motion=skill_motion />
            <CallToAction pitch=pitch />
        </main>
    }
}

/// The complete HTML document for the homepage
#[component]
pub fn SiteDocument(page: Homepage) -> impl IntoView {
    let title = format!("{} | Portfolio", page.content.profile.name);
    let description = format!("{} - {}", page.content.profile.name, page.content.profile.role);

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <PageMain page=page />
            </body>
        </html>
    }
}
