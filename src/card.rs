//! Card types and the canonical deck ordering.
//!
//! The canonical deck enumerates the 52 cards grouped by suit, clubs first
//! and spades last, each suit running `A,2,…,10,J,Q,K`. This ordering is a
//! constant of the crate; [`Card::deck_index`] and the label parser are
//! defined against it.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// Card suit, in canonical deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs (`♣`), deck positions 0..=12.
    Clubs,
    /// Diamonds (`♦`), deck positions 13..=25.
    Diamonds,
    /// Hearts (`♥`), deck positions 26..=38.
    Hearts,
    /// Spades (`♠`), deck positions 39..=51.
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Deck index of this suit's ace.
    #[must_use]
    pub const fn base_index(self) -> u8 {
        match self {
            Self::Clubs => 0,
            Self::Diamonds => 13,
            Self::Hearts => 26,
            Self::Spades => 39,
        }
    }

    /// The symbol used for this suit in card labels.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }

    /// Looks up the suit for a label symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '♣' => Some(Self::Clubs),
            '♦' => Some(Self::Diamonds),
            '♥' => Some(Self::Hearts),
            '♠' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, in within-suit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace, within-suit position 0.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten, the only rank with a two-character token.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King, within-suit position 12.
    King,
}

impl Rank {
    /// All ranks in within-suit order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Zero-based position of this rank within its suit (`A` = 0, `K` = 12).
    #[must_use]
    pub const fn position(self) -> u8 {
        self as u8
    }

    /// The token used for this rank in card labels.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Looks up the rank for a label token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "A" => Some(Self::Ace),
            "2" => Some(Self::Two),
            "3" => Some(Self::Three),
            "4" => Some(Self::Four),
            "5" => Some(Self::Five),
            "6" => Some(Self::Six),
            "7" => Some(Self::Seven),
            "8" => Some(Self::Eight),
            "9" => Some(Self::Nine),
            "10" => Some(Self::Ten),
            "J" => Some(Self::Jack),
            "Q" => Some(Self::Queen),
            "K" => Some(Self::King),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Zero-based position of this card in the canonical deck ordering.
    ///
    /// The suit contributes a base of 0, 13, 26, or 39 and the rank its
    /// within-suit position, so the result always lies in `0..=51`.
    #[must_use]
    pub const fn deck_index(self) -> u8 {
        self.suit.base_index() + self.rank.position()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a canonical card label: a rank token followed by a suit symbol.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let symbol = label.chars().next_back().ok_or(ParseCardError::Empty)?;
        let suit = Suit::from_symbol(symbol).ok_or(ParseCardError::UnknownSuit(symbol))?;
        let token = &label[..label.len() - symbol.len_utf8()];
        let rank = Rank::from_token(token).ok_or(ParseCardError::UnknownRank)?;
        Ok(Self::new(rank, suit))
    }
}

/// Resolves a card label to its zero-based position in the canonical deck.
///
/// # Example
///
/// ```
/// use cardtext::card_index;
///
/// assert_eq!(card_index("A♣"), Ok(0));
/// assert_eq!(card_index("10♣"), Ok(9));
/// assert_eq!(card_index("K♠"), Ok(51));
/// ```
///
/// # Errors
///
/// Returns [`ParseCardError`] if the label is not one of the 52 canonical
/// labels.
pub fn card_index(label: &str) -> Result<u8, ParseCardError> {
    label.parse::<Card>().map(Card::deck_index)
}

/// Iterates the 52 cards in canonical deck order.
///
/// The `n`-th yielded card satisfies `card.deck_index() == n`.
pub fn deck() -> impl Iterator<Item = Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
}
