// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand category rules.
//!
//! Each rule checks one category in isolation, rules may overlap (a full
//! house also contains a pair), [HandRank::classify](crate::HandRank::classify)
//! applies them in precedence order to pick a single category.
use pokerhands_cards::{Card, Hand, Rank};

use crate::groups::{find_pair, find_x_of_a_kind, group_by_value, sort_by_value};

/// Returns the cards that don't have the given rank.
fn without_rank(cards: &[Card], rank: Rank) -> Vec<Card> {
    cards.iter().copied().filter(|c| c.rank() != rank).collect()
}

/// Checks if the sorted cards have consecutive values.
fn is_consecutive(sorted: &[Card]) -> bool {
    sorted.windows(2).all(|w| w[1].value() == w[0].value() + 1)
}

/// All five cards have different values.
pub fn is_high_card(cards: &[Card]) -> bool {
    group_by_value(cards).len() == Hand::SIZE
}

/// Two cards with the same value.
pub fn is_pair(cards: &[Card]) -> bool {
    find_pair(cards).is_some()
}

/// Two pairs of different values.
pub fn is_two_pair(cards: &[Card]) -> bool {
    find_pair(cards).is_some_and(|pair| find_pair(&without_rank(cards, pair[0].rank())).is_some())
}

/// Three cards with the same value.
pub fn is_three_of_a_kind(cards: &[Card]) -> bool {
    find_x_of_a_kind(cards, 3).is_some()
}

/// Four cards with the same value.
pub fn is_four_of_a_kind(cards: &[Card]) -> bool {
    find_x_of_a_kind(cards, 4).is_some()
}

/// A pair and three cards of another value.
pub fn is_full_house(cards: &[Card]) -> bool {
    find_pair(cards).is_some_and(|pair| {
        find_x_of_a_kind(&without_rank(cards, pair[0].rank()), 3).is_some()
    })
}

/// All cards have the same suit.
pub fn is_of_same_suit(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].suit() == w[1].suit())
}

/// Five cards with consecutive values, the ace plays low in A-2-3-4-5.
pub fn is_straight(cards: &[Card]) -> bool {
    let sorted = sort_by_value(cards);
    match (sorted.first(), sorted.last()) {
        (Some(low), Some(high)) if low.rank() == Rank::Deuce && high.rank() == Rank::Ace => {
            is_consecutive(&sorted[..sorted.len() - 1])
        }
        _ => is_consecutive(&sorted),
    }
}

/// Same suit cards that are not a straight.
pub fn is_flush(cards: &[Card]) -> bool {
    is_of_same_suit(cards) && !is_straight(cards)
}

/// Same suit cards with consecutive values.
pub fn is_straight_flush(cards: &[Card]) -> bool {
    is_straight(cards) && is_of_same_suit(cards)
}
