//! Residue alphabet, cleavage windows, and sequence input for the Scissile
//! protease cleavage prediction ecosystem.
//!
//! - **Residues** — the 27-symbol alphabet (20 standard amino acids, special
//!   and ambiguity codes, padding) and total 3-letter-code translation via
//!   [`one_letter`]
//! - **Windows** — the 8-residue [`CleavageWindow`] context around a cut site
//! - **Sequence input** — FASTA/FASTQ reading via [`read_first_sequence`]
//!
//! # Example
//!
//! ```
//! use scissile_seq::{one_letter, CleavageWindow};
//!
//! // Substrate tables store sites as 3-letter codes.
//! assert_eq!(one_letter("Arg"), b'R');
//! assert_eq!(one_letter("unknown"), b'X');
//!
//! let window = CleavageWindow::from_site_codes([
//!     "Val", "Ser", "Gln", "Arg", "Ser", "Leu", "Arg", "Thr",
//! ]);
//! assert_eq!(window.to_string(), "VSQRSLRT");
//! ```

pub mod fasta;
pub mod residue;
pub mod window;

pub use fasta::read_first_sequence;
pub use residue::{is_residue, one_letter, ALPHABET, PADDING, UNKNOWN};
pub use window::{CleavageWindow, CUT_INDEX, WINDOW_LEN};
