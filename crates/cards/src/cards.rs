// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors returned when parsing cards and hands notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A card token that is not two characters long.
    #[error("invalid card {0:?}, expected a value and a suit")]
    InvalidCard(String),
    /// A card token with an unknown value character.
    #[error("invalid card value in {0:?}")]
    InvalidValue(String),
    /// A card token with an unknown suit character.
    #[error("invalid card suit in {0:?}")]
    InvalidSuit(String),
    /// A hand with the wrong number of cards.
    #[error("a hand must have 5 cards, found {0}")]
    CardCount(usize),
}

/// A Poker card.
///
/// A card is a face value and a suit, two cards with the same value and suit
/// are equal, a hand may contain the same card more than once.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card value index, see [Rank::value].
    #[inline]
    pub fn value(&self) -> u32 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(value), Some(suit), None) => {
                let rank = Rank::from_char(value)
                    .ok_or_else(|| ParseError::InvalidValue(token.to_string()))?;
                let suit = Suit::from_char(suit)
                    .ok_or_else(|| ParseError::InvalidSuit(token.to_string()))?;
                Ok(Card::new(rank, suit))
            }
            _ => Err(ParseError::InvalidCard(token.to_string())),
        }
    }
}

/// Card rank, the card face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey = 1,
    /// Four
    Four = 2,
    /// Five
    Five = 3,
    /// Six
    Six = 4,
    /// Seven
    Seven = 5,
    /// Eight
    Eight = 6,
    /// Nine
    Nine = 7,
    /// Ten
    Ten = 8,
    /// Jack
    Jack = 9,
    /// Queen
    Queen = 10,
    /// King
    King = 11,
    /// Ace
    Ace = 12,
}

impl Rank {
    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The position of this rank in the ranks list (deuce=0,trey=1,...,ace=12).
    #[inline]
    pub fn value(self) -> u32 {
        self as u32
    }

    /// The notation character for this rank.
    pub fn symbol(self) -> char {
        match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Parses a rank notation character.
    pub fn from_char(c: char) -> Option<Rank> {
        Rank::ranks().find(|r| r.symbol() == c)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades,
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// The notation character for this suit.
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    /// Parses a suit notation character.
    pub fn from_char(c: char) -> Option<Suit> {
        Suit::suits().find(|s| s.symbol() == c)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Returns the only character in `token` if it has exactly one.
fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Checks if `token` is one of the 13 value symbols.
pub fn is_valid_value(token: &str) -> bool {
    single_char(token).and_then(Rank::from_char).is_some()
}

/// Checks if `token` is one of the 4 suit symbols.
pub fn is_valid_suit(token: &str) -> bool {
    single_char(token).and_then(Suit::from_char).is_some()
}

/// Checks if `token` is a value symbol followed by a suit symbol.
pub fn is_valid_card(token: &str) -> bool {
    token.parse::<Card>().is_ok()
}
