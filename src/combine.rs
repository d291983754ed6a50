//! Proximity combinator (§4.F): a linear two-pointer merge of sorted
//! position lists, folded left to right across a [`Group`](crate::query::Group).

use crate::query::Kind;

/// Merge two sorted, duplicate-free position lists with proximity
/// tolerance `md`.
///
/// Advances both pointers on a match (`|a[j] - b[k]| <= md`), emitting
/// the smaller of the pair once. This is a known, deliberately
/// preserved limitation (§9): when one position lies within `md` of
/// several positions in the other list, only the first such pairing is
/// reported, not every pairing — a faithful two-pointer merge rather
/// than a full cross product.
pub fn combine(a: &[usize], b: &[usize], md: usize, kind: Kind) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len().max(b.len()));
    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        let x = a[i];
        let y = b[j];
        let dist = x.abs_diff(y);

        if dist <= md {
            out.push(x.min(y));
            i += 1;
            j += 1;
        } else if x < y {
            if kind == Kind::Or {
                out.push(x);
            }
            i += 1;
        } else {
            if kind == Kind::Or {
                out.push(y);
            }
            j += 1;
        }
    }

    if kind == Kind::Or {
        out.extend_from_slice(&a[i..]);
        out.extend_from_slice(&b[j..]);
    }

    out
}

/// Fold `combine` left to right over `lists` (§4.F: `A <- L1; A <-
/// combine(A, Li, md, kind)`). Returns `None` if `lists` is empty so
/// the caller can supply the "empty group matches everything" fallback
/// (§3, §4.F), which depends on the text length `combine` doesn't know.
pub fn fold(lists: &[Vec<usize>], md: usize, kind: Kind) -> Option<Vec<usize>> {
    let mut iter = lists.iter();
    let first = iter.next()?.clone();
    Some(iter.fold(first, |acc, next| combine(&acc, next, md, kind)))
}
