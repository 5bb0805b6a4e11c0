//! ROT13 substitution cipher.

extern crate alloc;

use alloc::string::String;

const STEP: u8 = 13;

/// Latin letter case, identifying one of the two ASCII letter ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LetterCase {
    Upper,
    Lower,
}

impl LetterCase {
    /// Inclusive code bounds of this case's letter range.
    const fn bounds(self) -> (u8, u8) {
        match self {
            Self::Upper => (b'A', b'Z'),
            Self::Lower => (b'a', b'z'),
        }
    }

    const fn contains(self, code: u8) -> bool {
        let (min, max) = self.bounds();
        min <= code && code <= max
    }

    /// Shifts a code 13 places, wrapping within this case's range.
    const fn shift(self, code: u8) -> u8 {
        let (min, max) = self.bounds();
        let shifted = code + STEP;
        // Wrap by stepping back over the range rather than taking a modulo
        // of the raw code, so the range edges stay exact.
        if shifted > max { shifted - max + min - 1 } else { shifted }
    }
}

fn encode_char(c: char) -> char {
    if c.is_ascii() {
        let code = c as u8;
        for case in [LetterCase::Upper, LetterCase::Lower] {
            if case.contains(code) {
                return char::from(case.shift(code));
            }
        }
    }
    c
}

/// Encodes a string with the ROT13 cipher.
///
/// Latin letters shift 13 places through the alphabet, preserving case;
/// every other character is copied through unchanged, so the output always
/// has the same number of characters as the input.
///
/// # Example
///
/// ```
/// assert_eq!(cardtext::rot13::encode("hello"), "uryyb");
/// assert_eq!(cardtext::rot13::encode("Uryyb, Jbeyq!"), "Hello, World!");
/// ```
#[must_use]
pub fn encode(text: &str) -> String {
    text.chars().map(encode_char).collect()
}

/// Decodes a ROT13-encoded string.
///
/// ROT13 is self-inverse, so this is the same transformation as [`encode`].
#[must_use]
pub fn decode(text: &str) -> String {
    encode(text)
}
