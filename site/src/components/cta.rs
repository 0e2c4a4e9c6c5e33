use leptos::prelude::*;

use super::{Icon, ICON_ENVELOPE};
use crate::types::{NavTarget, Section};

/// Closing invitation to get in touch.
#[component]
pub fn CallToAction(pitch: String) -> impl IntoView {
    view! {
        <section id={Section::Cta.id()} class="cta">
            <div class="cta-inner">
                <h2 class="section-title">"Let's Work Together"</h2>
                <p class="muted">{pitch}</p>
                <a href={NavTarget::Contact.href()} class="btn btn-primary btn-lg rgb-border">
                    "Get in Touch"
                    <Icon path=ICON_ENVELOPE class="icon-sm" />
                </a>
            </div>
        </section>
    }
}
