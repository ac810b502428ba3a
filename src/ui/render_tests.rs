#![allow(clippy::unwrap_used)]

use super::app::Screen;
use super::render::*;

#[test]
fn test_two_column_rows_fills_left_first() {
    let rows = two_column_rows(&[("a", "1"), ("b", "2"), ("c", "3")]);
    assert_eq!(rows, vec![[("a", "1"), ("c", "3")], [("b", "2"), ("", "")]]);
}

#[test]
fn test_two_column_rows_even_and_empty() {
    let rows = two_column_rows(&[("a", "1"), ("b", "2")]);
    assert_eq!(rows, vec![[("a", "1"), ("b", "2")]]);
    assert!(two_column_rows(&[]).is_empty());
}

#[test]
fn test_every_screen_advertises_help() {
    for &screen in Screen::all() {
        let hints = screen_hints(screen);
        assert_eq!(hints.last(), Some(&("?", "keys")));
    }
}
