// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands evaluator.
//!
//! Classifies five cards hands into one of nine categories and computes a
//! [HandValue] used to compare hands. The value is the category ordinal plus
//! the sum of the cards values, so hands in the same category are ordered by
//! their cards sum only, without kickers:
//!
//! ```
//! # use pokerhands_eval::*;
//! let straight = "2S 3H 4H 5S 6C".parse::<Hand>().unwrap();
//! let pair = "AH AC 5H 6H 7S".parse::<Hand>().unwrap();
//!
//! let v1 = HandValue::eval(&straight);
//! let v2 = HandValue::eval(&pair);
//! assert_eq!(v1.rank(), HandRank::Straight);
//! assert_eq!(v2.rank(), HandRank::OnePair);
//! assert!(v2 > v1);
//! ```
//!
//! Hands in text notation can be compared with [compare_poker_hands]:
//!
//! ```
//! # use pokerhands_eval::*;
//! let res = compare_poker_hands("2H 3H 4H 5H 6H", "KS AS TS QS JS").unwrap();
//! assert_eq!(res, -1);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue, compare_hands, compare_poker_hands};

pub mod groups;
pub mod rules;

// Reexport cards types.
pub use pokerhands_cards::{Card, Hand, HandPair, ParseError, Rank, Suit};
