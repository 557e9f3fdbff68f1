//! Dashboard page: sidebar plus the selected board list area.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It is the only place that reads the router's
//! query map; everything below it receives the derived `BoardView`.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::org_sidebar::OrgSidebar;
use crate::state::board_view::{BoardView, FAVORITES_QUERY_KEY};

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Dashboard page — board list view selected by the `favorites` query.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let query = use_query_map();
    let board_view =
        Memo::new(move |_| query.with(|q| BoardView::from_query_value(q.get(FAVORITES_QUERY_KEY).as_deref())));

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            log::debug!("dashboard view: {:?}", board_view.get());
        });
    }

    view! {
        <div class="dashboard-page">
            <OrgSidebar board_view=board_view />
            <main class="dashboard-page__main">
                <h2 class="dashboard-page__title">{move || board_view.get().title()}</h2>
                <p class="dashboard-page__empty">{move || empty_message(board_view.get())}</p>
            </main>
        </div>
    }
}

/// Placeholder text for a list with no boards.
fn empty_message(board_view: BoardView) -> &'static str {
    match board_view {
        BoardView::Boards => "No boards yet.",
        BoardView::Favorites => "No favorite boards.",
    }
}
