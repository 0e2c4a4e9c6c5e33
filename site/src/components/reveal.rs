//! Animated wrapper shared by every section.

use leptos::prelude::*;

use crate::compose::Transition;

/// Wraps children in an element that plays `transition` once on load.
#[component]
pub fn Reveal(
    transition: Transition,
    /// Extra classes for the wrapper
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "reveal".to_string()
    } else {
        format!("reveal {}", class)
    };

    view! {
        <div class=class style=transition.css()>
            {children()}
        </div>
    }
}
