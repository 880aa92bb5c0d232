//! Positional residue frequency profiles.
//!
//! A [`Profile`] records, for one protease, how often each residue symbol
//! was observed at each of the 8 window positions across all of its known
//! substrate cleavage windows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use scissile_core::{Result, ScissileError};
use scissile_seq::{CleavageWindow, ALPHABET, WINDOW_LEN};

/// Per-protease positional frequency table.
///
/// Maps every residue symbol to its relative frequency at each window
/// position. Each position column sums to 1.0 across all symbols, since each
/// observed window contributes exactly one count per position and the table
/// is divided by the window total. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    rows: BTreeMap<char, [f64; WINDOW_LEN]>,
}

impl Profile {
    /// Build a profile from a set of observed substrate windows.
    ///
    /// Every alphabet symbol is seeded with a zero row (the padding symbol
    /// `-` therefore scores zero at every position unless the corpus itself
    /// contained gaps), then each window increments one count per position,
    /// and the table is normalized by the window total. Normalization is
    /// what makes profiles comparable across proteases with different
    /// substrate counts.
    ///
    /// # Errors
    ///
    /// Returns [`ScissileError::EmptyCorpus`] if `windows` is empty.
    pub fn from_windows(windows: &[CleavageWindow]) -> Result<Self> {
        if windows.is_empty() {
            return Err(ScissileError::EmptyCorpus(
                "no substrate windows to build a profile from".into(),
            ));
        }

        let mut rows: BTreeMap<char, [f64; WINDOW_LEN]> = ALPHABET
            .iter()
            .map(|&b| (b as char, [0.0; WINDOW_LEN]))
            .collect();

        for window in windows {
            for (pos, &symbol) in window.symbols().iter().enumerate() {
                if let Some(row) = rows.get_mut(&(symbol as char)) {
                    row[pos] += 1.0;
                }
            }
        }

        let total = windows.len() as f64;
        for row in rows.values_mut() {
            for v in row.iter_mut() {
                *v /= total;
            }
        }

        Ok(Self { rows })
    }

    /// Relative frequency of `symbol` at window `position` (0 = P4, 7 = P4').
    ///
    /// # Errors
    ///
    /// Returns [`ScissileError::UnknownResidue`] if the profile has no row
    /// for `symbol` — profiles built by [`Profile::from_windows`] always
    /// carry every alphabet row, so a missing row means a corrupted or
    /// truncated cache entry.
    pub fn frequency(&self, symbol: u8, position: usize) -> Result<f64> {
        let row = self
            .rows
            .get(&(symbol as char))
            .ok_or(ScissileError::UnknownResidue(symbol as char))?;
        row.get(position).copied().ok_or_else(|| {
            ScissileError::InvalidInput(format!(
                "window position {} out of range 0..{}",
                position, WINDOW_LEN
            ))
        })
    }

    /// Number of residue rows in the profile.
    pub fn residue_count(&self) -> usize {
        self.rows.len()
    }
}
