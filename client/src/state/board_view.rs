//! Board list view selection derived from the dashboard URL.
//!
//! DESIGN
//! ======
//! The active list view is never stored. It is re-derived from the
//! `favorites` query parameter on every render, and every visual decision
//! about which navigation entry is highlighted goes through `emphasis_for`.

#[cfg(test)]
#[path = "board_view_test.rs"]
mod board_view_test;

/// Query key that selects the favorites list.
pub const FAVORITES_QUERY_KEY: &str = "favorites";

/// Dashboard root; also the "My boards" destination.
pub const HOME_HREF: &str = "/";

/// Destination for the "Favorite boards" entry.
pub const FAVORITES_HREF: &str = "/?favorites=true";

/// Which board list the dashboard is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoardView {
    /// Every board the user can open.
    #[default]
    Boards,
    /// Only boards the user starred.
    Favorites,
}

impl BoardView {
    /// Derive the view from the raw `favorites` query value.
    ///
    /// Any non-empty value selects favorites, including `"false"` and `"0"`.
    /// A missing key or an empty value selects the full list.
    pub fn from_query_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self::Favorites,
            _ => Self::Boards,
        }
    }

    /// Link target that switches the dashboard to this view.
    pub fn href(self) -> &'static str {
        match self {
            Self::Boards => HOME_HREF,
            Self::Favorites => FAVORITES_HREF,
        }
    }

    /// Heading shown above the board list.
    pub fn title(self) -> &'static str {
        match self {
            Self::Boards => "Team boards",
            Self::Favorites => "Favorite boards",
        }
    }
}

/// Visual weight of a navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    /// The entry for the view currently on screen.
    Emphasized,
    /// Any other entry.
    Plain,
}

/// Emphasis of the entry for `candidate` while `current` is displayed.
pub fn emphasis_for(current: BoardView, candidate: BoardView) -> Emphasis {
    if current == candidate { Emphasis::Emphasized } else { Emphasis::Plain }
}

/// Glyph drawn in front of a navigation label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Star,
}

/// One sidebar navigation entry, rebuilt on every render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
    pub emphasis: Emphasis,
}

impl NavItem {
    /// Whether this entry is the view currently on screen.
    pub fn active(&self) -> bool {
        self.emphasis == Emphasis::Emphasized
    }
}

/// The two list entries in display order: "My boards", then "Favorite boards".
pub fn nav_items(current: BoardView) -> [NavItem; 2] {
    let item = |view: BoardView, label: &'static str, icon: NavIcon| NavItem {
        label,
        href: view.href(),
        icon,
        emphasis: emphasis_for(current, view),
    };
    [
        item(BoardView::Boards, "My boards", NavIcon::Dashboard),
        item(BoardView::Favorites, "Favorite boards", NavIcon::Star),
    ]
}
