// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand pairs loading and validation.
use anyhow::{Result, anyhow, bail};
use log::debug;
use std::{fs, path::Path};

use pokerhands_cards::{HandPair, is_valid_initial_data};

/// Hand pairs used when no input file is given.
pub const SAMPLE_PAIRS: [(&str, &str); 16] = [
    ("2H 3H 4H 5H 6H", "KS AS TS QS JS"),
    ("2H 3H 4H 5H 6H", "AS AD AC AH JD"),
    ("AS AH 2H AD AC", "JS JD JC JH 3D"),
    ("2S AH 2H AS AC", "JS JD JC JH AD"),
    ("2S AH 2H AS AC", "2H 3H 5H 6H 7H"),
    ("AS 3S 4S 8S 2S", "2H 3H 5H 6H 7H"),
    ("2H 3H 5H 6H 7H", "2S 3H 4H 5S 6C"),
    ("2S 3H 4H 5S 6C", "3D 4C 5H 6H 2S"),
    ("2S 3H 4H 5S 6C", "AH AC 5H 6H AS"),
    ("2S 2H 4H 5S 4C", "AH AC 5H 6H AS"),
    ("2S 2H 4H 5S 4C", "AH AC 5H 6H 7S"),
    ("6S AD 7H 4S AS", "AH AC 5H 6H 7S"),
    ("2S AH 4H 5S KC", "AH AC 5H 6H 7S"),
    ("2S 3H 6H 7S 9C", "7H 3C TH 6H 9S"),
    ("4S 5H 6H TS AC", "3S 5H 6H TS AC"),
    ("2S AH 4H 5S 6C", "AD 4C 5H 6H 2C"),
];

/// Returns the sample pairs.
pub fn sample_pairs() -> Vec<HandPair> {
    SAMPLE_PAIRS
        .iter()
        .map(|(a, b)| HandPair::new(*a, *b))
        .collect()
}

/// Loads pairs from a JSON file with a list of `{"a": "..", "b": ".."}`.
pub fn load(path: &Path) -> Result<Vec<HandPair>> {
    let data = fs::read_to_string(path)
        .map_err(|e| anyhow!("Cannot read pairs file {}: {e}", path.display()))?;
    let pairs = serde_json::from_str::<Vec<HandPair>>(&data)
        .map_err(|e| anyhow!("Cannot decode pairs file {}: {e}", path.display()))?;

    debug!("Loaded {} pairs from {}", pairs.len(), path.display());
    Ok(pairs)
}

/// Checks that all pairs are valid, the error names the first invalid pair.
pub fn validate(pairs: &[HandPair]) -> Result<()> {
    if !is_valid_initial_data(pairs) {
        for (idx, pair) in pairs.iter().enumerate() {
            if let Err(e) = pair.hands() {
                bail!("Invalid pair {idx} {:?} {:?}: {e}", pair.a, pair.b);
            }
        }
    }

    Ok(())
}
