//! Inline SVG glyphs for sidebar entries.

use leptos::prelude::*;

use crate::state::board_view::NavIcon;

pub fn render_nav_icon(icon: NavIcon) -> impl IntoView {
    match icon {
        NavIcon::Dashboard => view! {
            <svg class="nav-icon" viewBox="0 0 24 24" aria-hidden="true">
                <rect x="3" y="3" width="7" height="9" rx="1" />
                <rect x="14" y="3" width="7" height="5" rx="1" />
                <rect x="14" y="12" width="7" height="9" rx="1" />
                <rect x="3" y="16" width="7" height="5" rx="1" />
            </svg>
        }
        .into_any(),
        NavIcon::Star => view! {
            <svg class="nav-icon" viewBox="0 0 24 24" aria-hidden="true">
                <polygon points="12,2 15.09,8.26 22,9.27 17,14.14 18.18,21.02 12,17.77 5.82,21.02 7,14.14 2,9.27 8.91,8.26" />
            </svg>
        }
        .into_any(),
    }
}
