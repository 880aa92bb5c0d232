//! Ranking and offset filtering of scored cleavage sites.

use std::cmp::Ordering;

/// One scored cleavage site: where the cut falls, the window around it, and
/// its likelihood score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSite {
    /// 0-based index of P1 in the original sequence; the cut falls between
    /// this residue and the next.
    pub offset: usize,
    /// The 8-residue window text around the cut.
    pub window: String,
    /// Weighted likelihood score.
    pub score: f64,
}

/// Sort sites descending by score, optionally dropping sites before a
/// minimum sequence offset first.
///
/// The sort is stable, so ties keep their insertion (scan) order and the
/// ranking is deterministic. The filter keeps sites with
/// `offset >= min_offset - 2`; the two-residue tolerance accounts for the
/// window being anchored upstream of the cut.
pub fn rank(sites: Vec<ScoredSite>, min_offset: Option<usize>) -> Vec<ScoredSite> {
    let mut kept: Vec<ScoredSite> = match min_offset {
        Some(min) => sites.into_iter().filter(|s| s.offset + 2 >= min).collect(),
        None => sites,
    };
    kept.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    kept
}
