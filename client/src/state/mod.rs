//! View state derived from the current URL.

pub mod board_view;
