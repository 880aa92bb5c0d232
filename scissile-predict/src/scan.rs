//! Sliding-window extraction of per-position profile values.

use scissile_core::Result;
use scissile_seq::fasta::normalize;
use scissile_seq::{CUT_INDEX, PADDING, WINDOW_LEN};

use crate::profile::Profile;

/// Number of padding symbols added to each end of the sequence before
/// scanning: exactly enough for a window whose cut falls after the first
/// residue (P4..P2 all padding) or before the last.
pub const PAD_LEN: usize = CUT_INDEX;

/// One scanned window: where its cut falls, its text, and the profile
/// frequency of each of its residues at its position.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowValues {
    /// 0-based index of P1 in the original (unpadded) sequence; the cut
    /// falls between this residue and the next.
    pub offset: usize,
    /// The 8-residue window text, padding symbols included.
    pub window: String,
    /// Per-position frequencies looked up from the profile, P4 first.
    pub values: [f64; WINDOW_LEN],
}

/// Slide an 8-residue window across `sequence` and look up each window's
/// per-position frequencies in `profile`.
///
/// The sequence is normalized (uppercased, non-residues to `X`) and padded
/// with [`PAD_LEN`] `-` symbols on each side. Padding residues are looked up
/// like real ones; their profile row is normally all-zero, so windows hanging
/// over a boundary score low. A sequence of length N yields exactly N−1
/// windows, one per internal peptide bond, with offsets 0..=N−2.
///
/// # Errors
///
/// Returns [`scissile_core::ScissileError::UnknownResidue`] if the profile
/// lacks a row for some symbol (a corrupted cache entry; profiles built from
/// windows always carry every row).
pub fn scan(profile: &Profile, sequence: &[u8]) -> Result<Vec<WindowValues>> {
    let normalized = normalize(sequence);

    let mut padded = Vec::with_capacity(normalized.len() + 2 * PAD_LEN);
    padded.resize(PAD_LEN, PADDING);
    padded.extend_from_slice(&normalized);
    padded.resize(normalized.len() + 2 * PAD_LEN, PADDING);

    // p1 walks the padded index of the residue left of each cut. The window
    // around it spans [p1 - CUT_INDEX, p1 - CUT_INDEX + WINDOW_LEN); the
    // upper bound keeps the last window inside the padded sequence.
    let mut out = Vec::new();
    for p1 in PAD_LEN..padded.len() - (WINDOW_LEN - CUT_INDEX - 1) {
        let start = p1 - CUT_INDEX;
        let window = &padded[start..start + WINDOW_LEN];

        let mut values = [0.0; WINDOW_LEN];
        for (pos, &symbol) in window.iter().enumerate() {
            values[pos] = profile.frequency(symbol, pos)?;
        }

        out.push(WindowValues {
            offset: p1 - PAD_LEN,
            window: String::from_utf8_lossy(window).into_owned(),
            values,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scissile_seq::CleavageWindow;

    fn single_window_profile(text: &[u8; WINDOW_LEN]) -> Profile {
        Profile::from_windows(&[CleavageWindow::new(*text).unwrap()]).unwrap()
    }

    #[test]
    fn length_n_sequence_yields_n_minus_1_windows() {
        let profile = single_window_profile(b"ACDEFGHI");
        assert_eq!(scan(&profile, b"MKVLAAGELR").unwrap().len(), 9);
        assert_eq!(scan(&profile, b"MK").unwrap().len(), 1);
        assert_eq!(scan(&profile, b"M").unwrap().len(), 0);
        assert_eq!(scan(&profile, b"").unwrap().len(), 0);
    }

    #[test]
    fn offsets_cover_every_internal_bond() {
        let profile = single_window_profile(b"ACDEFGHI");
        let windows = scan(&profile, b"MKVLA").unwrap();
        let offsets: Vec<usize> = windows.iter().map(|w| w.offset).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3]);
    }

    #[test]
    fn boundary_windows_carry_padding_text() {
        let profile = single_window_profile(b"ACDEFGHI");
        let windows = scan(&profile, b"MKVLA").unwrap();
        assert_eq!(windows[0].window, "---MKVLA");
        assert_eq!(windows[3].window, "MKVLA---");
    }

    #[test]
    fn values_come_from_the_profile() {
        let profile = single_window_profile(b"ACDEFGHI");
        // Cut at offset 3 aligns the sequence exactly with the substrate.
        let windows = scan(&profile, b"ACDEFGHI").unwrap();
        let exact = windows.iter().find(|w| w.offset == 3).unwrap();
        assert_eq!(exact.window, "ACDEFGHI");
        assert_eq!(exact.values, [1.0; WINDOW_LEN]);

        // One position to the left, nothing lines up.
        let shifted = windows.iter().find(|w| w.offset == 2).unwrap();
        assert_eq!(shifted.values, [0.0; WINDOW_LEN]);
    }

    #[test]
    fn lowercase_input_is_normalized_before_lookup() {
        let profile = single_window_profile(b"ACDEFGHI");
        let upper = scan(&profile, b"ACDEFGHI").unwrap();
        let lower = scan(&profile, b"acdefghi").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn corrupted_profile_missing_padding_row_fails() {
        // A hand-truncated cache entry without the '-' row: boundary windows
        // cannot be scored.
        let json = r#"{"rows":{"A":[0.5,0.5,0.5,0.5,0.5,0.5,0.5,0.5],"K":[0.5,0.5,0.5,0.5,0.5,0.5,0.5,0.5]}}"#;
        let truncated: Profile = serde_json::from_str(json).unwrap();
        let err = scan(&truncated, b"AKAKAKAK").unwrap_err();
        assert!(matches!(
            err,
            scissile_core::ScissileError::UnknownResidue('-')
        ));
    }
}
