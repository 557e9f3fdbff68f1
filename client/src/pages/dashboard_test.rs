use super::*;

#[test]
fn empty_message_for_all_boards() {
    assert_eq!(empty_message(BoardView::Boards), "No boards yet.");
}

#[test]
fn empty_message_for_favorites() {
    assert_eq!(empty_message(BoardView::Favorites), "No favorite boards.");
}
