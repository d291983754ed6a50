//! Kasai's algorithm: derive the LCP array from `T` and `SA` in `O(n)`.

use crate::alphabet::CodeUnit;

/// Compute `LCP[0..n)` for text `s` and its suffix array `sa`.
///
/// `LCP[0] = 0`; for `i >= 1`, `LCP[i]` is the longest common prefix
/// length of `suffix(sa[i-1])` and `suffix(sa[i])`.
pub fn kasai(s: &[CodeUnit], sa: &[u32]) -> Vec<u32> {
    let n = s.len();
    debug_assert_eq!(sa.len(), n);
    if n == 0 {
        return Vec::new();
    }

    let mut rank = vec![0u32; n];
    for (i, &p) in sa.iter().enumerate() {
        rank[p as usize] = i as u32;
    }

    let mut lcp = vec![0u32; n];
    let mut h: usize = 0;
    for i in 0..n {
        let r = rank[i] as usize;
        if r > 0 {
            let j = sa[r - 1] as usize;
            while i + h < n && j + h < n && s[i + h] == s[j + h] {
                h += 1;
            }
            lcp[r] = h as u32;
            h = h.saturating_sub(1);
        } else {
            h = 0;
        }
    }
    lcp
}
