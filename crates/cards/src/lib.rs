// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards types.
//!
//! This crate defines the card types and the text notation used to describe
//! five cards hands, a card is a value character followed by a suit character
//! and a hand is five cards separated by a single space:
//!
//! ```
//! # use pokerhands_cards::{Card, Hand, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "AH");
//!
//! let hand = "2S AH 4H 5S 6C".parse::<Hand>().unwrap();
//! assert_eq!(hand[1], ah);
//! ```
//!
//! The validation functions check notation without building cards, they are
//! meant as a pre-check before handing text to the evaluator:
//!
//! ```
//! # use pokerhands_cards::*;
//! assert!(is_valid_card("TD"));
//! assert!(!is_valid_card("1D"));
//! assert!(is_valid_hand("2H 3H 4H 5H 6H"));
//! assert!(!is_valid_hand("2H 3H 4H 5H 6H 7H"));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseError, Rank, Suit, is_valid_card, is_valid_suit, is_valid_value};

mod hand;
pub use hand::{
    Hand, HandPair, convert_string_to_hand, is_valid_hand, is_valid_initial_data, is_valid_pair,
};
