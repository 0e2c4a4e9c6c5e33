//! Featured projects grid.

use leptos::prelude::*;

use super::{Icon, Reveal, ICON_ARROW_RIGHT};
use crate::compose::{compose, Motion, Transition};
use crate::types::{LiveAction, NavTarget, Project, Section};

/// Section heading plus one staggered card per project.
#[component]
pub fn FeaturedProjects(projects: Vec<Project>, motion: Motion) -> impl IntoView {
    let cards = compose(&projects, &motion)
        .into_iter()
        .map(|node| {
            view! { <ProjectCard project=node.record.clone() transition=node.transition /> }
        })
        .collect::<Vec<_>>();

    view! {
        <section id={Section::Projects.id()} class="section-stack">
            <div class="section-header">
                <div>
                    <h2 class="section-title">"Featured Projects"</h2>
                    <p class="section-subtitle">"Some of my recent work"</p>
                </div>
                <a href={NavTarget::Projects.href()} class="btn btn-ghost">
                    "View All"
                    <Icon path=ICON_ARROW_RIGHT class="icon-sm" />
                </a>
            </div>
            <div class="project-grid">{cards}</div>
        </section>
    }
}

/// One project: cover image, blurb, tag badges and two link buttons.
#[component]
pub fn ProjectCard(project: Project, transition: Transition) -> impl IntoView {
    let badge = project.icon.map(|icon| {
        view! {
            <div class="project-icon">
                <Icon path={icon.path()} />
            </div>
        }
    });

    let tags = project
        .unique_tags()
        .into_iter()
        .map(|tag| view! { <span class="badge tag-badge">{tag.to_string()}</span> })
        .collect::<Vec<_>>();

    let live_button = live_button(project.live_action());

    view! {
        <Reveal transition=transition>
            <article class="card project-card glow">
                <div class="project-media">
                    <img src={project.image.clone()} alt={project.title.clone()} class="project-image" />
                    {badge}
                </div>
                <div class="card-content">
                    <h3 class="project-title">{project.title.clone()}</h3>
                    <p class="project-description">{project.description.clone()}</p>
                    <div class="tag-list">{tags}</div>
                    <div class="project-actions">
                        <a
                            href={project.link.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-outline"
                        >
                            "View Project"
                            <Icon path=ICON_ARROW_RIGHT class="icon-sm" />
                        </a>
                        {live_button}
                    </div>
                </div>
            </article>
        </Reveal>
    }
}

/// Live link, or an inert "Soon" placeholder when nothing is deployed.
fn live_button(action: LiveAction<'_>) -> AnyView {
    let label = action.label();
    match action.href() {
        Some(url) => view! {
            <a
                href={url.to_string()}
                target="_blank"
                rel="noopener noreferrer"
                class="btn btn-outline btn-live"
            >
                {label}
                <Icon path=ICON_ARROW_RIGHT class="icon-sm" />
            </a>
        }
        .into_any(),
        None => view! {
            <span class="btn btn-outline btn-soon" aria-disabled="true">
                {label}
                <Icon path=ICON_ARROW_RIGHT class="icon-sm" />
            </span>
        }
        .into_any(),
    }
}
