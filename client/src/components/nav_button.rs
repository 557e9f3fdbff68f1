//! Link styled as a button, used for sidebar navigation entries.
//!
//! DESIGN
//! ======
//! Appearance only. The variant and size map to BEM modifier classes; the
//! element is a plain anchor so the router's link interception handles the
//! actual navigation.

use leptos::prelude::*;

use crate::state::board_view::Emphasis;

#[cfg(test)]
#[path = "nav_button_test.rs"]
mod nav_button_test;

/// Button size hint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Large,
}

/// Class list for a navigation button with the given look.
pub fn button_class(variant: Emphasis, size: ButtonSize) -> String {
    let variant = match variant {
        Emphasis::Emphasized => "nav-button--secondary",
        Emphasis::Plain => "nav-button--ghost",
    };
    match size {
        ButtonSize::Default => format!("nav-button {variant}"),
        ButtonSize::Large => format!("nav-button {variant} nav-button--lg"),
    }
}

/// Anchor rendered with button styling.
#[component]
pub fn NavButton(
    href: &'static str,
    variant: Emphasis,
    #[prop(optional)] size: ButtonSize,
    children: Children,
) -> impl IntoView {
    let current = (variant == Emphasis::Emphasized).then_some("page");

    view! {
        <a class=button_class(variant, size) href=href aria-current=current>
            {children()}
        </a>
    }
}
