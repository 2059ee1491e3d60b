// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hands and hands notation.
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};

use crate::{Card, ParseError, is_valid_card};

/// A five cards hand.
///
/// The cards are kept in the order they were given, the same card may appear
/// more than once as hands are not checked against a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; 5]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from five cards.
    pub const fn new(cards: [Card; 5]) -> Self {
        Self(cards)
    }

    /// The hand cards in input order.
    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }
}

impl ops::Deref for Hand {
    type Target = [Card];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Hand {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let count = text.split(' ').count();
        if count != Hand::SIZE {
            return Err(ParseError::CardCount(count));
        }

        let cards = convert_string_to_hand(text)?;
        cards
            .try_into()
            .map(Hand)
            .map_err(|_| ParseError::CardCount(count))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Two hands in text notation to be compared against each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandPair {
    /// The first hand.
    pub a: String,
    /// The second hand.
    pub b: String,
}

impl HandPair {
    /// Creates a new pair from two hands notation.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Parses both hands.
    pub fn hands(&self) -> Result<(Hand, Hand), ParseError> {
        Ok((self.a.parse()?, self.b.parse()?))
    }
}

/// Converts space separated card tokens to cards in input order.
///
/// This function doesn't check the number of cards, use [is_valid_hand] or
/// parse a [Hand] to get exactly five cards.
pub fn convert_string_to_hand(text: &str) -> Result<Vec<Card>, ParseError> {
    text.split(' ').map(str::parse::<Card>).collect()
}

/// Checks if `text` is exactly five valid cards separated by a single space.
pub fn is_valid_hand(text: &str) -> bool {
    text.split(' ').count() == Hand::SIZE && text.split(' ').all(is_valid_card)
}

/// Checks if both hands in a pair are valid.
pub fn is_valid_pair(pair: &HandPair) -> bool {
    is_valid_hand(&pair.a) && is_valid_hand(&pair.b)
}

/// Checks if all the pairs are valid.
pub fn is_valid_initial_data(pairs: &[HandPair]) -> bool {
    pairs.iter().all(is_valid_pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn invalid_pairs() -> Vec<HandPair> {
        vec![
            HandPair::new("2H 3H 4H 5H 6H BB", "KS AS TS QS JS"),
            HandPair::new("2H 3H 4H 5H 6B", "KS AS TS QS JS"),
        ]
    }

    #[test]
    fn convert_string() {
        let cards = convert_string_to_hand("2S AH 4H 5S 6C").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Deuce, Suit::Spades),
                Card::new(Rank::Ace, Suit::Hearts),
                Card::new(Rank::Four, Suit::Hearts),
                Card::new(Rank::Five, Suit::Spades),
                Card::new(Rank::Six, Suit::Clubs),
            ]
        );

        // The number of cards is not checked.
        assert_eq!(convert_string_to_hand("2S AH").unwrap().len(), 2);
        assert!(convert_string_to_hand("2S XH").is_err());
    }

    #[test]
    fn parse_hand() {
        let hand = "2S AH 4H 5S 6C".parse::<Hand>().unwrap();
        assert_eq!(hand.len(), Hand::SIZE);
        assert_eq!(hand[1], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(hand.to_string(), "2S AH 4H 5S 6C");

        // Duplicated cards are accepted.
        assert!("2H 2H 2H 2H 6H".parse::<Hand>().is_ok());

        assert_eq!("AHH".parse::<Hand>(), Err(ParseError::CardCount(1)));
        assert_eq!(
            "2H 3H 4H 5H 6H 7H".parse::<Hand>(),
            Err(ParseError::CardCount(6))
        );
        assert_eq!(
            "2H 3H 4H 5H  6H".parse::<Hand>(),
            Err(ParseError::CardCount(6))
        );
        assert_eq!(
            "2H 3H 4H 5H 6B".parse::<Hand>(),
            Err(ParseError::InvalidSuit("6B".to_string()))
        );
    }

    #[test]
    fn validate_hands() {
        assert!(is_valid_hand("2H 3H 4H 5H 6H"));
        assert!(is_valid_hand("2H 2H 2H 2H 2H"));
        assert!(!is_valid_hand("AHH"));
        assert!(!is_valid_hand("2H 3H 4H 5H 6B"));
        assert!(!is_valid_hand("2H 3H 4H 5H"));
        assert!(!is_valid_hand("2H 3H 4H 5H 6H "));
        assert!(!is_valid_hand(""));
    }

    #[test]
    fn validate_pairs() {
        let valid = HandPair::new("2H 3H 4H 5H 6H", "KS AS TS QS JS");
        assert!(is_valid_pair(&valid));
        assert!(valid.hands().is_ok());

        for pair in invalid_pairs() {
            assert!(!is_valid_pair(&pair));
            assert!(pair.hands().is_err());
        }

        assert!(is_valid_initial_data(&[valid.clone(), valid.clone()]));
        assert!(is_valid_initial_data(&[]));
        assert!(!is_valid_initial_data(&invalid_pairs()));

        let mut mixed = invalid_pairs();
        mixed.insert(0, valid);
        assert!(!is_valid_initial_data(&mixed));
    }
}
