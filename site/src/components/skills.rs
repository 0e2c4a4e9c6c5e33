//! Skills grid.

use leptos::prelude::*;

use super::{Icon, Reveal, ICON_ARROW_RIGHT};
use crate::compose::{compose, Motion, Transition};
use crate::types::{NavTarget, Section, Skill};

/// Heading, one tile per skill and a link to the full list.
#[component]
pub fn SkillsGrid(skills: Vec<Skill>, motion: Motion) -> impl IntoView {
    let tiles = compose(&skills, &motion)
        .into_iter()
        .map(|node| view! { <SkillCard skill=node.record.clone() transition=node.transition /> })
        .collect::<Vec<_>>();

    view! {
        <section id={Section::Skills.id()} class="section-stack">
            <div>
                <h2 class="section-title">"My Skills"</h2>
                <p class="section-subtitle">"Technologies I work with"</p>
            </div>
            <div class="skill-grid">{tiles}</div>
            <div class="section-footer">
                <a href={NavTarget::Skills.href()} class="btn btn-outline">
                    "View All Skills"
                    <Icon path=ICON_ARROW_RIGHT class="icon-sm" />
                </a>
            </div>
        </section>
    }
}

/// One skill tile: coloured icon square and name.
#[component]
pub fn SkillCard(skill: Skill, transition: Transition) -> impl IntoView {
    let icon_class = format!("skill-icon {}", skill.color);

    view! {
        <Reveal transition=transition>
            <div class="card skill-card">
                <div class="card-content">
                    <div class=icon_class>
                        <Icon path={skill.icon.path()} size="24" />
                    </div>
                    <span class="skill-name">{skill.name}</span>
                </div>
            </div>
        </Reveal>
    }
}
