// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ranks and values.
//!
//! The categories order is this crate own scheme and differs from the usual
//! poker order: a straight ranks below a flush that ranks below a full house,
//! and the category is checked for straights and flushes before looking for
//! cards of the same kind. Hands with the same [HandValue] tie even when the
//! categories differ.
use log::trace;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use pokerhands_cards::{Card, Hand, ParseError};

use crate::rules::*;

/// A hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Returns all ranks from the lowest to the highest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The rank position in the categories order, ranks compare by ordinal.
    pub const fn ordinal(self) -> u32 {
        match self {
            HandRank::HighCard => 0,
            HandRank::OnePair => 1,
            HandRank::TwoPair => 2,
            HandRank::ThreeOfAKind => 3,
            HandRank::Straight => 4,
            HandRank::Flush => 5,
            HandRank::FullHouse => 6,
            HandRank::FourOfAKind => 7,
            HandRank::StraightFlush => 8,
        }
    }

    /// The rank display name.
    pub fn name(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pairs",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        }
    }

    /// Classifies a five cards hand.
    ///
    /// Straights and flushes are checked first, then if some cards share a
    /// value the same kind categories from four of a kind down to a pair. A
    /// hand that matches nothing else is a high card.
    pub fn classify(cards: &[Card]) -> HandRank {
        if is_straight_flush(cards) {
            HandRank::StraightFlush
        } else if is_straight(cards) {
            HandRank::Straight
        } else if is_flush(cards) {
            HandRank::Flush
        } else if is_high_card(cards) {
            HandRank::HighCard
        } else if is_four_of_a_kind(cards) {
            HandRank::FourOfAKind
        } else if is_full_house(cards) {
            HandRank::FullHouse
        } else if is_three_of_a_kind(cards) {
            HandRank::ThreeOfAKind
        } else if is_two_pair(cards) {
            HandRank::TwoPair
        } else if is_pair(cards) {
            HandRank::OnePair
        } else {
            // Five cards of the same value with mixed suits.
            HandRank::HighCard
        }
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The value of a hand.
///
/// The value is the hand rank ordinal plus the sum of the cards values,
/// values compare by this number only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    value: u32,
}

impl HandValue {
    /// Evaluates a five cards hand.
    pub fn eval(cards: &[Card]) -> Self {
        let rank = HandRank::classify(cards);
        let value = rank.ordinal() + cards.iter().map(Card::value).sum::<u32>();
        trace!("Evaluated {cards:?} as {rank} with value {value}");
        Self { rank, value }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The number used to compare hands.
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.rank, self.value)
    }
}

/// Compares two hands by their [HandValue].
pub fn compare_hands(a: &[Card], b: &[Card]) -> Ordering {
    HandValue::eval(a).cmp(&HandValue::eval(b))
}

/// Compares two hands in text notation.
///
/// Returns 1 if `a` wins, -1 if `b` wins, and 0 for a tie. Both hands must be
/// valid hands notation.
pub fn compare_poker_hands(a: &str, b: &str) -> Result<i8, ParseError> {
    let a = a.parse::<Hand>()?;
    let b = b.parse::<Hand>()?;

    Ok(match compare_hands(&a, &b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(text: &str) -> HandValue {
        HandValue::eval(&text.parse::<Hand>().unwrap())
    }

    #[test]
    fn rank_ordinals() {
        let ordinals = HandRank::ranks().map(HandRank::ordinal).collect::<Vec<_>>();
        assert_eq!(ordinals, (0..9).collect::<Vec<_>>());

        assert!(HandRank::HighCard < HandRank::OnePair);
        assert!(HandRank::Straight < HandRank::Flush);
        assert!(HandRank::Flush < HandRank::FullHouse);
        assert!(HandRank::FourOfAKind < HandRank::StraightFlush);
        assert_eq!(HandRank::ranks().max(), Some(HandRank::StraightFlush));
    }

    #[test]
    fn classify_hands() {
        let cases = [
            ("2H 3H 4H 5H 6H", HandRank::StraightFlush),
            ("AH 2H 3H 4H 5H", HandRank::StraightFlush),
            ("2S 3H 4H 5S 6C", HandRank::Straight),
            ("5C AD 3H 2S 4H", HandRank::Straight),
            ("AS 3S 4S 8S 2S", HandRank::Flush),
            ("AH AH KH KH QH", HandRank::Flush),
            ("AS AD AC AH JD", HandRank::FourOfAKind),
            ("2S AH 2H AS AC", HandRank::FullHouse),
            ("AH AC 5H 6H AS", HandRank::ThreeOfAKind),
            ("2S 2H 4H 5S 4C", HandRank::TwoPair),
            ("AH AC 5H 6H 7S", HandRank::OnePair),
            ("2S AH 4H 5S KC", HandRank::HighCard),
            // Duplicated cards, no same kind category matches.
            ("2H 2S 2D 2C 2H", HandRank::HighCard),
            ("2H 2H 2H 2H 2H", HandRank::Flush),
        ];

        for (hand, rank) in cases {
            assert_eq!(eval(hand).rank(), rank, "{hand}");
        }
    }

    #[test]
    fn hand_values() {
        assert_eq!(eval("2H 3H 4H 5H 6H").value(), 18);
        assert_eq!(eval("KS AS TS QS JS").value(), 58);
        assert_eq!(eval("AH 2H 3H 4H 5H").value(), 26);
        assert_eq!(eval("AS AD AC AH JD").value(), 64);
        assert_eq!(eval("2S AH 2H AS AC").value(), 42);
        assert_eq!(eval("2S 3H 4H 5S 6C").value(), 14);
        assert_eq!(eval("2S 2H 4H 5S 4C").value(), 9);
        assert_eq!(eval("2S AH 4H 5S KC").value(), 28);
        assert_eq!(eval("2S 3H 4H 5S 6C").to_string(), "Straight (14)");
    }

    #[test]
    fn values_compare_by_number_only() {
        // A high card with big cards beats a low pair.
        let pair = eval("2S 2H 3D 4C 5S");
        let high = eval("AS KH QD JC 9S");
        assert!(pair.rank() > high.rank());
        assert!(high > pair);

        // Different ranks with the same number are equal.
        let pair = eval("4S 4H 2D 3C 7S");
        let high = eval("2S 3H 4D 5C 7S");
        assert_eq!(pair.rank(), HandRank::OnePair);
        assert_eq!(high.rank(), HandRank::HighCard);
        assert_eq!(pair.value(), high.value());
        assert_eq!(pair, high);
    }

    #[test]
    fn compare_sample_pairs() {
        let cases = [
            ("2H 3H 4H 5H 6H", "KS AS TS QS JS", -1),
            ("2H 3H 4H 5H 6H", "AS AD AC AH JD", -1),
            ("AS AH 2H AD AC", "JS JD JC JH 3D", 1),
            ("2S AH 2H AS AC", "JS JD JC JH AD", -1),
            ("2S AH 2H AS AC", "2H 3H 5H 6H 7H", 1),
            ("AS 3S 4S 8S 2S", "2H 3H 5H 6H 7H", 1),
            ("2H 3H 5H 6H 7H", "2S 3H 4H 5S 6C", 1),
            ("2S 3H 4H 5S 6C", "3D 4C 5H 6H 2S", 0),
            ("2S 3H 4H 5S 6C", "AH AC 5H 6H AS", -1),
            ("2S 2H 4H 5S 4C", "AH AC 5H 6H AS", -1),
            ("2S 2H 4H 5S 4C", "AH AC 5H 6H 7S", -1),
            ("6S AD 7H 4S AS", "AH AC 5H 6H 7S", -1),
            ("2S AH 4H 5S KC", "AH AC 5H 6H 7S", -1),
            ("2S 3H 6H 7S 9C", "7H 3C TH 6H 9S", -1),
            ("4S 5H 6H TS AC", "3S 5H 6H TS AC", 1),
            ("2S AH 4H 5S 6C", "AD 4C 5H 6H 2C", 0),
        ];

        for (a, b, res) in cases {
            assert_eq!(compare_poker_hands(a, b), Ok(res), "{a} vs {b}");
            assert_eq!(compare_poker_hands(b, a), Ok(-res), "{b} vs {a}");
        }
    }

    #[test]
    fn compare_invalid_hands() {
        assert_eq!(
            compare_poker_hands("2H 3H 4H 5H 6H BB", "KS AS TS QS JS"),
            Err(ParseError::CardCount(6))
        );
        assert_eq!(
            compare_poker_hands("KS AS TS QS JS", "2H 3H 4H 5H 6B"),
            Err(ParseError::InvalidSuit("6B".to_string()))
        );
    }
}
