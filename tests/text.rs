//! ROT13 codec and rectangle rendering integration tests.

use cardtext::{rectangle, rot13};
use proptest::prelude::*;

#[test]
fn rot13_known_vectors() {
    assert_eq!(rot13::encode("hello"), "uryyb");
    assert_eq!(
        rot13::encode("Why did the chicken cross the road?"),
        "Jul qvq gur puvpxra pebff gur ebnq?"
    );
    assert_eq!(
        rot13::encode("Gb trg gb gur bgure fvqr!"),
        "To get to the other side!"
    );
    assert_eq!(
        rot13::encode("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"),
        "NOPQRSTUVWXYZABCDEFGHIJKLMnopqrstuvwxyzabcdefghijklm"
    );
}

#[test]
fn rot13_empty_and_non_letters() {
    assert_eq!(rot13::encode(""), "");
    assert_eq!(rot13::encode("1234 ,!? ♠♥"), "1234 ,!? ♠♥");
}

#[test]
fn rot13_decode_is_encode() {
    assert_eq!(rot13::decode("uryyb"), "hello");
    assert_eq!(rot13::decode(&rot13::encode("Mixed CASE input")), "Mixed CASE input");
}

proptest! {
    #[test]
    fn rot13_is_self_inverse(s in ".*") {
        prop_assert_eq!(rot13::encode(&rot13::encode(&s)), s);
    }

    #[test]
    fn rot13_preserves_char_count(s in ".*") {
        prop_assert_eq!(rot13::encode(&s).chars().count(), s.chars().count());
    }

    #[test]
    fn rot13_leaves_non_letters_unchanged(s in "[^A-Za-z]*") {
        prop_assert_eq!(rot13::encode(&s), s);
    }
}

#[test]
fn rectangle_known_shapes() {
    assert_eq!(
        rectangle(6, 4),
        "┌────┐\n\
         │    │\n\
         │    │\n\
         └────┘\n"
    );
    assert_eq!(rectangle(2, 2), "┌┐\n└┘\n");
    assert_eq!(
        rectangle(12, 3),
        "┌──────────┐\n\
         │          │\n\
         └──────────┘\n"
    );
}

#[test]
fn rectangle_degenerate_sizes() {
    assert_eq!(rectangle(0, 0), "");
    assert_eq!(rectangle(1, 1), "┌\n");
    assert_eq!(rectangle(3, 1), "┌─┐\n");
    assert_eq!(rectangle(1, 3), "┌\n│\n└\n");
}
