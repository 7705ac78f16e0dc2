use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the 48 card identities printed on the board.
///
/// Jacks are not part of the board layout, so there is no way to represent
/// one. Serialized as its token, e.g. `"spade10"` or `"heartQ"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

/// The suit of a [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Suit {
    Spade,
    Diamond,
    Club,
    Heart,
}

/// The rank of a [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

pub const NUM_CARDS: usize = 48;

pub const SUITS: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart];

pub const RANKS: [Rank; 12] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// Every card identity exactly once, ordered by suit (spade, diamond, club, heart)
/// and then by rank. `ALL_CARDS[card.to_index()] == card` for every card.
pub static ALL_CARDS: [Card; NUM_CARDS] = {
    let mut cards = [Card {
        suit: Suit::Spade,
        rank: Rank::Two,
    }; NUM_CARDS];
    let mut idx = 0;
    while idx < NUM_CARDS {
        cards[idx] = Card {
            suit: SUITS[idx / RANKS.len()],
            rank: RANKS[idx % RANKS.len()],
        };
        idx += 1;
    }
    cards
};

impl Suit {
    pub fn name(self) -> &'static str {
        match self {
            Suit::Spade => "spade",
            Suit::Diamond => "diamond",
            Suit::Club => "club",
            Suit::Heart => "heart",
        }
    }
}

impl Rank {
    pub fn token(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl Card {
    /// Position of this card in [`ALL_CARDS`], in `0..48`.
    pub fn to_index(self) -> usize {
        self.suit as usize * RANKS.len() + self.rank as usize
    }

    /// Inverse of [`Card::to_index()`].
    ///
    /// Panics if `idx` is not below [`NUM_CARDS`].
    pub fn from_index(idx: usize) -> Self {
        ALL_CARDS[idx]
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.suit.name(), self.rank.token())
    }
}

/// The error type for the [`FromStr`] instance of [`Card`].
///
/// Any token that does not name one of the 48 card identities ends up here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFromStrErr {
    InvalidSuit,
    InvalidRank,
}

impl std::error::Error for CardFromStrErr {}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFromStrErr::InvalidSuit => write!(
                f,
                "Card identity does not start with one of the suits spade, diamond, club or heart"
            ),
            CardFromStrErr::InvalidRank => write!(
                f,
                "Card identity does not end with one of the ranks 2-10, Q, K or A"
            ),
        }
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (suit, rank_token) = SUITS
            .iter()
            .find_map(|&suit| s.strip_prefix(suit.name()).map(|rest| (suit, rest)))
            .ok_or(CardFromStrErr::InvalidSuit)?;
        let rank = RANKS
            .iter()
            .copied()
            .find(|rank| rank.token() == rank_token)
            .ok_or(CardFromStrErr::InvalidRank)?;
        Ok(Card { suit, rank })
    }
}

impl From<Card> for String {
    fn from(card: Card) -> String {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = CardFromStrErr;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Shorthand for creating cards from their token.
///
/// The token is the suit name followed by the rank (`2`-`10`, `Q`, `K` or `A`).
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use sequence::{card, Card, Rank, Suit};
/// assert_eq!(
///     card!("spade10"),
///     Card { suit: Suit::Spade, rank: Rank::Ten }
/// );
/// ```
#[macro_export]
macro_rules! card {
    ($token:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($token)
            .expect("Invalid card token given to card! macro")
    };
}
