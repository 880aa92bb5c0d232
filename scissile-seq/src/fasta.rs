//! Sequence input from FASTA/FASTQ files.

use std::path::Path;

use needletail::parse_fastx_file;
use scissile_core::{Result, ScissileError};

use crate::residue::{is_residue, PADDING, UNKNOWN};

/// Read the first sequence record from a FASTA/FASTQ file.
///
/// Only the first record of a multi-record file is used. The sequence is
/// uppercased, and any byte that is not a residue symbol afterwards is
/// normalized to `X` — the same fallback the 3-letter code translator uses.
///
/// # Errors
///
/// Returns [`ScissileError::SequenceSource`] if the file cannot be opened or
/// parsed, or contains no usable sequence record.
pub fn read_first_sequence(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let mut reader = parse_fastx_file(path)
        .map_err(|e| ScissileError::SequenceSource(format!("{}: {}", path.display(), e)))?;

    let record = reader.next().ok_or_else(|| {
        ScissileError::SequenceSource(format!("{}: no sequence records", path.display()))
    })?;
    let record = record
        .map_err(|e| ScissileError::SequenceSource(format!("{}: {}", path.display(), e)))?;

    let sequence = normalize(&record.seq());
    if sequence.is_empty() {
        return Err(ScissileError::SequenceSource(format!(
            "{}: first sequence record is empty",
            path.display()
        )));
    }
    Ok(sequence)
}

/// Uppercase a raw sequence and replace anything outside the residue
/// alphabet with `X`. Alignment gaps are treated as unknown rather than
/// padding, since padding marks sequence boundaries only.
pub fn normalize(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .map(|&b| {
            let b = b.to_ascii_uppercase();
            if b == PADDING || !is_residue(b) {
                UNKNOWN
            } else {
                b
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_first_record_only() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">prot1").unwrap();
        writeln!(file, "MKVLAA").unwrap();
        writeln!(file, ">prot2").unwrap();
        writeln!(file, "WWWWWW").unwrap();
        file.flush().unwrap();

        let seq = read_first_sequence(file.path()).unwrap();
        assert_eq!(seq, b"MKVLAA");
    }

    #[test]
    fn joins_wrapped_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">prot").unwrap();
        writeln!(file, "MKV").unwrap();
        writeln!(file, "LAA").unwrap();
        file.flush().unwrap();

        let seq = read_first_sequence(file.path()).unwrap();
        assert_eq!(seq, b"MKVLAA");
    }

    #[test]
    fn normalizes_case_and_unknown_residues() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">prot").unwrap();
        writeln!(file, "mkv1a-w").unwrap();
        file.flush().unwrap();

        let seq = read_first_sequence(file.path()).unwrap();
        assert_eq!(seq, b"MKVXAXW");
    }

    #[test]
    fn missing_file_is_a_sequence_source_error() {
        let err = read_first_sequence("/nonexistent/input.fasta").unwrap_err();
        assert!(matches!(err, ScissileError::SequenceSource(_)));
    }

    #[test]
    fn empty_file_is_an_error() {
        let file = NamedTempFile::new().unwrap();
        assert!(read_first_sequence(file.path()).is_err());
    }

    #[test]
    fn normalize_passes_valid_residues_through() {
        assert_eq!(normalize(b"ACDXBZJUO"), b"ACDXBZJUO".to_vec());
        assert_eq!(normalize(b"acd"), b"ACD".to_vec());
        assert_eq!(normalize(b"A-C"), b"AXC".to_vec());
    }
}
