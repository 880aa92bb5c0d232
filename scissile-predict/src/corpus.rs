//! Substrate corpus providers.
//!
//! A corpus provider answers "which cleavage windows are known for this
//! protease?". The production corpus is a tab-separated export of a substrate
//! database ([`TsvCorpus`]); [`MemoryCorpus`] serves tests and embedders that
//! already hold windows in memory.

use std::collections::HashMap;
use std::fs::File;
use std::path::PathBuf;

use csv::ReaderBuilder;

use scissile_core::{Result, ScissileError};
use scissile_seq::{CleavageWindow, WINDOW_LEN};

/// Source of observed substrate cleavage windows, keyed by protease name.
///
/// Names match exactly and case-sensitively. A name with zero records fails
/// with [`ScissileError::ProteaseNotFound`].
pub trait CorpusProvider: Send + Sync {
    /// Fetch all known cleavage windows for `protease`.
    fn fetch_windows(&self, protease: &str) -> Result<Vec<CleavageWindow>>;
}

/// In-memory corpus.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    substrates: HashMap<String, Vec<CleavageWindow>>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the known windows for a protease, replacing any previous set.
    pub fn insert(&mut self, protease: impl Into<String>, windows: Vec<CleavageWindow>) {
        self.substrates.insert(protease.into(), windows);
    }
}

impl CorpusProvider for MemoryCorpus {
    fn fetch_windows(&self, protease: &str) -> Result<Vec<CleavageWindow>> {
        self.substrates
            .get(protease)
            .cloned()
            .ok_or_else(|| ScissileError::ProteaseNotFound(protease.to_string()))
    }
}

/// Corpus backed by a tab-separated substrate table.
///
/// The file is headered, one row per observed cleavage, with the protease
/// name in the first column followed by the eight site columns P4..P4' as
/// 3-letter residue codes. The file is re-read on every fetch; the profile
/// store in front of this provider makes repeat reads rare.
#[derive(Debug, Clone)]
pub struct TsvCorpus {
    path: PathBuf,
}

impl TsvCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusProvider for TsvCorpus {
    fn fetch_windows(&self, protease: &str) -> Result<Vec<CleavageWindow>> {
        let file = File::open(&self.path).map_err(|e| {
            ScissileError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", self.path.display(), e),
            ))
        })?;
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(file);

        let mut windows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| ScissileError::Parse(e.to_string()))?;
            if record.get(0) != Some(protease) {
                continue;
            }
            let mut codes = [""; WINDOW_LEN];
            for (i, code) in codes.iter_mut().enumerate() {
                *code = record.get(i + 1).ok_or_else(|| {
                    ScissileError::Parse(format!(
                        "substrate row for '{}' has {} fields, expected {}",
                        protease,
                        record.len(),
                        WINDOW_LEN + 1
                    ))
                })?;
            }
            windows.push(CleavageWindow::from_site_codes(codes));
        }

        if windows.is_empty() {
            return Err(ScissileError::ProteaseNotFound(protease.to_string()));
        }
        Ok(windows)
    }
}
