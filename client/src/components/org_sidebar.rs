//! Dashboard sidebar with the home link and the board list switches.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard page owns URL access and passes the derived `BoardView` in.
//! This component only maps that view onto link emphasis, so it renders the
//! same markup on the server and in the browser for a given URL.

use leptos::prelude::*;

use crate::components::icons::render_nav_icon;
use crate::components::nav_button::{ButtonSize, NavButton};
use crate::state::board_view::{BoardView, HOME_HREF, nav_items};

pub const APP_NAME: &str = "MyBoard";
pub const LOGO_SRC: &str = "/logo.svg";

/// Vertical navigation panel: logo/home link, "My boards", "Favorite boards".
#[component]
pub fn OrgSidebar(#[prop(into)] board_view: Signal<BoardView>) -> impl IntoView {
    let entries = move || {
        nav_items(board_view.get())
            .into_iter()
            .map(|item| {
                view! {
                    <NavButton href=item.href variant=item.emphasis size=ButtonSize::Large>
                        {render_nav_icon(item.icon)}
                        <span class="org-sidebar__label">{item.label}</span>
                    </NavButton>
                }
            })
            .collect_view()
    };

    view! {
        <aside class="org-sidebar">
            <a class="org-sidebar__home" href=HOME_HREF>
                <img src=LOGO_SRC alt="Logo" height="28" width="28" />
                <span class="org-sidebar__brand">{APP_NAME}</span>
            </a>
            <nav class="org-sidebar__nav" aria-label="Board lists">
                {entries}
            </nav>
        </aside>
    }
}
