// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards grouping and sorting by face value.
use pokerhands_cards::Card;

/// Groups cards by face value.
///
/// Groups are returned in the order their value is first seen and each group
/// keeps the cards in the order they were found.
pub fn group_by_value(cards: &[Card]) -> Vec<Vec<Card>> {
    // At most 13 keys, a linear search is enough.
    let mut groups: Vec<Vec<Card>> = Vec::with_capacity(cards.len());
    for card in cards {
        match groups.iter_mut().find(|g| g[0].rank() == card.rank()) {
            Some(group) => group.push(*card),
            None => groups.push(vec![*card]),
        }
    }

    groups
}

/// Returns the first group with exactly `x` cards of the same value.
pub fn find_x_of_a_kind(cards: &[Card], x: usize) -> Option<Vec<Card>> {
    group_by_value(cards).into_iter().find(|g| g.len() == x)
}

/// Returns the first group with exactly two cards of the same value.
pub fn find_pair(cards: &[Card]) -> Option<Vec<Card>> {
    find_x_of_a_kind(cards, 2)
}

/// Returns the cards sorted from deuce to ace, cards with the same value keep
/// their relative order.
pub fn sort_by_value(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(Card::rank);
    sorted
}
