//! The index object (§6 External Interfaces): owns `T` and `SA` by
//! value and exposes `search`/`search_group` over them.

use crate::alphabet::CodeUnit;
use crate::combine;
use crate::lcp;
use crate::locate;
use crate::query::{Group, Kind};
use crate::sais;

/// Default proximity tolerance for [`Index::search_group`] (§6).
pub const DEFAULT_MD: usize = 5;

/// An immutable suffix-array index over a text of 32-bit code units.
///
/// Built once from `T`; `T` and `SA` are owned by the index and never
/// mutated afterward, so `search`/`search_group` may be called
/// concurrently from multiple threads (§5).
#[derive(Clone)]
pub struct Index {
    text: Vec<CodeUnit>,
    sa: Vec<u32>,
}

impl Index {
    /// Number of code units in the indexed text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The indexed text.
    pub fn text(&self) -> &[CodeUnit] {
        &self.text
    }

    /// The suffix array, `SA[i]` = start of the i-th smallest suffix.
    pub fn suffix_array(&self) -> &[u32] {
        &self.sa
    }

    /// The LCP array (§4.C), computed on demand via Kasai's algorithm.
    pub fn lcp(&self) -> Vec<u32> {
        lcp::kasai(&self.text, &self.sa)
    }

    /// `occ(P)` (§4.D): sorted starting positions of `pat` in the text.
    pub fn search(&self, pat: &[CodeUnit]) -> Vec<usize> {
        locate::locate(&self.text, &self.sa, pat)
    }

    /// `evaluate(group, md)` (§4.F), with the spec's default `md = 5`.
    pub fn search_group(&self, group: &Group, md: usize) -> Vec<usize> {
        let patterns = group.patterns();
        if patterns.is_empty() {
            return (0..self.len()).collect();
        }

        let lists = occurrence_lists(self, patterns);
        combine::fold(&lists, md, group.kind()).unwrap_or_default()
    }
}

#[cfg(feature = "parallel")]
fn occurrence_lists(index: &Index, patterns: &[Vec<CodeUnit>]) -> Vec<Vec<usize>> {
    use rayon::prelude::*;
    patterns.par_iter().map(|p| index.search(p)).collect()
}

#[cfg(not(feature = "parallel"))]
fn occurrence_lists(index: &Index, patterns: &[Vec<CodeUnit>]) -> Vec<Vec<usize>> {
    patterns.iter().map(|p| index.search(p)).collect()
}

/// Build an [`Index`] over `text` (§6 `build_index`). `O(n)` expected
/// time via SA-IS (§4.B).
pub fn build_index(text: Vec<CodeUnit>) -> Index {
    let sa = sais::construct(&text);
    Index { text, sa }
}
