use crate::alphabet::CodeUnit;

/// Longest common prefix length of two code-unit sequences.
pub fn common_prefix(xs: &[CodeUnit], ys: &[CodeUnit]) -> usize {
    Iterator::zip(xs.iter(), ys.iter())
        .take_while(|(&x, &y)| x == y)
        .count()
}

/// Truncate a code-unit sequence to at most `max` elements.
pub fn truncate(s: &[CodeUnit], max: usize) -> &[CodeUnit] {
    &s[..Ord::min(s.len(), max)]
}
