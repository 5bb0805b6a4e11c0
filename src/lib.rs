//! Playing-card label utilities and small text codecs, with optional
//! `no_std` support.
//!
//! The crate provides a [`Card`] type that maps canonical two- or
//! three-character card labels (a rank token followed by a suit glyph, e.g.
//! `"10♦"`) to zero-based positions in the standard 52-card deck ordering,
//! a ROT13 codec in [`rot13`], and a box-drawing rectangle renderer in
//! [`rect`].
//!
//! # Example
//!
//! ```
//! use cardtext::{card_index, rot13};
//!
//! assert_eq!(card_index("Q♠"), Ok(50));
//! assert_eq!(rot13::encode("hello"), "uryyb");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod rect;
pub mod rot13;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, card_index, deck};
pub use error::ParseCardError;
pub use rect::rectangle;
