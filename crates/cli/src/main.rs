// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands ranking and comparison CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use pokerhands_cards::{Hand, HandPair};
use pokerhands_eval::{HandValue, compare_poker_hands};

pub mod pairs;

#[derive(Debug, Parser)]
struct Cli {
    /// Enables debug logs.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prints a hand category and value.
    Rank {
        /// The hand, for example "2S AH 4H 5S 6C".
        hand: String,
    },
    /// Compares two hands, prints 1 if the first wins, -1 if the second wins
    /// and 0 for a tie.
    Compare {
        /// The first hand.
        a: String,
        /// The second hand.
        b: String,
    },
    /// Compares a list of hand pairs.
    Batch {
        /// A JSON file with a list of {"a": "..", "b": ".."} pairs, defaults
        /// to the sample pairs.
        #[clap(long, short)]
        file: Option<PathBuf>,
    },
}

fn parse_hand(text: &str) -> Result<Hand> {
    text.parse::<Hand>()
        .map_err(|e| anyhow!("Invalid hand {text:?}: {e}"))
}

fn print_pair(pair: &HandPair) -> Result<()> {
    let (a, b) = pair.hands()?;
    let res = compare_poker_hands(&pair.a, &pair.b)?;
    println!(
        "{a} [{}] vs {b} [{}] => {res}",
        HandValue::eval(&a),
        HandValue::eval(&b)
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    match cli.command {
        Command::Rank { hand } => {
            let hand = parse_hand(&hand)?;
            println!("{hand} [{}]", HandValue::eval(&hand));
        }
        Command::Compare { a, b } => {
            parse_hand(&a)?;
            parse_hand(&b)?;
            print_pair(&HandPair::new(a, b))?;
        }
        Command::Batch { file } => {
            let pairs = match file {
                Some(path) => pairs::load(&path)?,
                None => pairs::sample_pairs(),
            };

            pairs::validate(&pairs)?;
            info!("Comparing {} hand pairs", pairs.len());

            for pair in &pairs {
                print_pair(pair)?;
            }
        }
    }

    Ok(())
}
