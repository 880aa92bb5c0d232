//! The 8-residue cleavage window type.

use std::fmt;

use scissile_core::{Result, ScissileError};

use crate::residue::{is_residue, one_letter};

/// Number of residues in a cleavage window: P4 P3 P2 P1 P1' P2' P3' P4'.
pub const WINDOW_LEN: usize = 8;

/// Local index of P1 within a window; the cut falls between P1 and P1'.
pub const CUT_INDEX: usize = 3;

/// The 8-residue context around one cleavage site.
///
/// Positions run P4..P1 upstream and P1'..P4' downstream of the cut, which
/// falls between local indices 3 and 4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleavageWindow([u8; WINDOW_LEN]);

impl CleavageWindow {
    /// Create a window from 8 residue symbols.
    ///
    /// # Errors
    ///
    /// Returns an error if any byte is not an uppercase residue symbol.
    pub fn new(symbols: [u8; WINDOW_LEN]) -> Result<Self> {
        for (i, &b) in symbols.iter().enumerate() {
            if !is_residue(b) {
                return Err(ScissileError::InvalidInput(format!(
                    "invalid residue symbol '{}' (0x{:02X}) at window position {}",
                    b as char, b, i
                )));
            }
        }
        Ok(Self(symbols))
    }

    /// Create a window from a byte slice of exactly [`WINDOW_LEN`] symbols.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let symbols: [u8; WINDOW_LEN] = bytes.try_into().map_err(|_| {
            ScissileError::InvalidInput(format!(
                "cleavage window must have exactly {} residues, got {}",
                WINDOW_LEN,
                bytes.len()
            ))
        })?;
        Self::new(symbols)
    }

    /// Create a window from 8 three-letter site codes (P4..P4'), as stored
    /// in substrate tables.
    ///
    /// Translation is total: unrecognized codes become `X`.
    pub fn from_site_codes(codes: [&str; WINDOW_LEN]) -> Self {
        let mut symbols = [0u8; WINDOW_LEN];
        for (s, code) in symbols.iter_mut().zip(codes) {
            *s = one_letter(code);
        }
        Self(symbols)
    }

    /// The window's residue symbols, P4 first.
    pub fn symbols(&self) -> &[u8; WINDOW_LEN] {
        &self.0
    }
}

impl fmt::Display for CleavageWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}
