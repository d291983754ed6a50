//! Substring locator (§4.D): two binary searches over `SA` bracket the
//! range of suffixes beginning with the pattern, generalizing the
//! teacher crate's `search_all` double binary search from unsorted byte
//! occurrences to the sorted, strictly increasing `occ(P)` contract of
//! this spec.

use crate::alphabet::CodeUnit;
use crate::utils::truncate;

/// Sorted, strictly increasing list of starting positions where `pat`
/// occurs in `text`. Empty for an empty pattern, an empty text, or a
/// pattern longer than the text.
pub fn locate(text: &[CodeUnit], sa: &[u32], pat: &[CodeUnit]) -> Vec<usize> {
    let m = pat.len();
    if m == 0 || sa.is_empty() || m > text.len() {
        return Vec::new();
    }

    let mut lo = 0usize;
    let mut hi = sa.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let suffix = truncate(&text[sa[mid] as usize..], m);
        if pat > suffix {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    let mut j = lo;
    let mut hi = sa.len();
    while j < hi {
        let mid = j + (hi - j) / 2;
        if text[sa[mid] as usize..].starts_with(pat) {
            j = mid + 1;
        } else {
            hi = mid;
        }
    }

    let mut positions: Vec<usize> = sa[lo..j].iter().map(|&i| i as usize).collect();
    positions.sort_unstable();
    positions
}
