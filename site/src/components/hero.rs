//! Hero banner: avatar, headline, primary actions and profile links.

use std::time::Duration;

use leptos::prelude::*;

use super::{Icon, Reveal, ICON_ARROW_RIGHT};
use crate::compose::{Entrance, Transition};
use crate::types::{NavTarget, Profile, Section, SocialLink};

/// Intro block: rises in immediately.
const INTRO: Transition = Transition::new(
    Entrance::Rise { offset_px: 20 },
    Duration::ZERO,
    Duration::from_millis(500),
);

/// Action buttons fade in after the intro.
const ACTIONS: Transition = Transition::new(
    Entrance::Fade,
    Duration::from_millis(300),
    Duration::from_millis(500),
);

/// Profile links come last.
const SOCIALS: Transition = Transition::new(
    Entrance::Fade,
    Duration::from_millis(600),
    Duration::from_millis(500),
);

/// Top of the page. Animates in three steps: intro, actions, profile links.
#[component]
pub fn Hero(profile: Profile, socials: Vec<SocialLink>) -> impl IntoView {
    let avatar_alt = format!("{} profile picture", profile.name);

    view! {
        <section id={Section::Hero.id()} class="hero">
            <Reveal transition=INTRO class="hero-intro">
                <img src={profile.avatar} alt=avatar_alt class="hero-avatar" />
                <span class="badge badge-outline">{profile.role}</span>
                <h1 class="hero-title">
                    "Hi, I'm "
                    <span class="text-gradient">{profile.name}</span>
                </h1>
                <p class="hero-tagline">{profile.tagline}</p>
            </Reveal>

            <Reveal transition=ACTIONS class="hero-actions">
                <a href={NavTarget::Projects.href()} class="btn btn-primary btn-lg rgb-border">
                    "View My Work"
                    <Icon path=ICON_ARROW_RIGHT class="icon-sm" />
                </a>
                <a href={NavTarget::Contact.href()} class="btn btn-outline btn-lg">
                    "Contact Me"
                </a>
            </Reveal>

            <Reveal transition=SOCIALS class="hero-socials">
                {socials.into_iter().map(|link| {
                    view! {
                        <a
                            href={link.url}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-ghost btn-icon"
                        >
                            <Icon path={link.kind.icon().path()} />
                            <span class="sr-only">{link.kind.label()}</span>
                        </a>
                    }
                }).collect::<Vec<_>>()}
            </Reveal>
        </section>
    }
}
