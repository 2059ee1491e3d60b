// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example rank_counts
// ...
// Total hands      2598960
// ```
//
// Counts the categories of all the 5 cards hands that can be drawn from a
// single deck.

use std::time::Instant;

use pokerhands_eval::*;

#[rustfmt::skip]
fn main() {
    let cards = Suit::suits()
        .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
        .collect::<Vec<_>>();
    let n = cards.len();

    let now = Instant::now();
    let mut counts = [0usize; 9];

    for c1 in 0..n {
        for c2 in (c1 + 1)..n {
            for c3 in (c2 + 1)..n {
                for c4 in (c3 + 1)..n {
                    for c5 in (c4 + 1)..n {
                        let hand = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                        let rank = HandValue::eval(&hand).rank();
                        counts[rank.ordinal() as usize] += 1;
                    }
                }
            }
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        println!("{:<17}{}", format!("{rank}:"), counts[rank.ordinal() as usize]);
    }
}
