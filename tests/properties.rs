use proptest::prelude::*;

use suffix_phrase::{and_of, build_index, or_of};

fn naive_occurrences(text: &[u32], pat: &[u32]) -> Vec<usize> {
    if pat.is_empty() || pat.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pat.len())
        .filter(|&i| &text[i..i + pat.len()] == pat)
        .collect()
}

fn arb_text() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..6, 0..200)
}

proptest! {
    /// §8.1/§8.2: SA is a permutation of [0, n) and lexicographically
    /// monotonic across adjacent suffixes.
    #[test]
    fn suffix_array_is_a_sorted_permutation(text in arb_text()) {
        let index = build_index(text.clone());
        let sa = index.suffix_array();

        let mut sorted = sa.to_vec();
        sorted.sort_unstable();
        let expected: Vec<u32> = (0..text.len() as u32).collect();
        prop_assert_eq!(sorted, expected);

        for w in sa.windows(2) {
            let a = &text[w[0] as usize..];
            let b = &text[w[1] as usize..];
            prop_assert!(a < b);
        }
    }

    /// §8.3: LCP[i] is the exact common-prefix length of adjacent suffixes.
    #[test]
    fn lcp_matches_adjacent_suffixes(text in arb_text()) {
        let index = build_index(text.clone());
        let sa = index.suffix_array();
        let lcp = index.lcp();

        prop_assert_eq!(lcp.len(), text.len());
        if !text.is_empty() {
            prop_assert_eq!(lcp[0], 0);
        }
        for i in 1..sa.len() {
            let a = &text[sa[i - 1] as usize..];
            let b = &text[sa[i] as usize..];
            let common = a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count();
            prop_assert_eq!(lcp[i] as usize, common);
        }
    }

    /// §8.4/§8.5/§8.6: round-trip containment, count law, and strictly
    /// increasing order for a substring drawn from the text itself.
    #[test]
    fn occurrences_match_naive_scan(text in arb_text(), a in 0usize..200, len in 1usize..12) {
        prop_assume!(!text.is_empty());
        let a = a % text.len();
        let len = len.min(text.len() - a);
        prop_assume!(len > 0);
        let pat = text[a..a + len].to_vec();

        let index = build_index(text.clone());
        let got = index.search(&pat);
        let expected = naive_occurrences(&text, &pat);

        prop_assert_eq!(&got, &expected);
        prop_assert!(got.contains(&a));
        for &i in &got {
            prop_assert_eq!(&text[i..i + len], &pat[..]);
        }
        for w in got.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
    }

    /// §8.7: OR over a single pattern is the identity; OR over two
    /// patterns is bounded by their union and superset of the symmetric
    /// difference of naive occurrence sets.
    #[test]
    fn or_combinator_bounds(text in arb_text(), a in 0usize..200, b in 0usize..200) {
        prop_assume!(text.len() > 4);
        let a = a % text.len().max(1);
        let b = b % text.len().max(1);
        let len = 2usize.min(text.len());
        prop_assume!(a + len <= text.len() && b + len <= text.len());

        let pat_a = text[a..a + len].to_vec();
        let pat_b = text[b..b + len].to_vec();

        let index = build_index(text.clone());
        let single = or_of(vec![pat_a.clone()]);
        prop_assert_eq!(index.search_group(&single, 5), index.search(&pat_a));

        let occ_a: std::collections::BTreeSet<usize> = naive_occurrences(&text, &pat_a).into_iter().collect();
        let occ_b: std::collections::BTreeSet<usize> = naive_occurrences(&text, &pat_b).into_iter().collect();
        let union: std::collections::BTreeSet<usize> = occ_a.union(&occ_b).copied().collect();

        let group = or_of(vec![pat_a, pat_b]);
        let hits = index.search_group(&group, 0);
        for h in &hits {
            prop_assert!(union.contains(h));
        }
    }

    /// §8.8: AND on patterns with no close pairing returns empty.
    #[test]
    fn and_combinator_empty_on_disjoint_positions(n in 50usize..200) {
        let mut text = vec![0u32; n];
        text[0] = 1;
        text[n - 1] = 2;
        let pat_a: Vec<u32> = vec![1];
        let pat_b: Vec<u32> = vec![2];

        let index = build_index(text);
        let group = and_of(vec![pat_a, pat_b]);
        let hits = index.search_group(&group, (n / 4) as usize);
        prop_assert!(hits.is_empty());
    }

    /// §8.9: the empty group matches every position in the text.
    #[test]
    fn empty_group_matches_full_range(text in arb_text()) {
        let index = build_index(text.clone());
        let group = suffix_phrase::Group::empty(suffix_phrase::Kind::Or);
        let hits = index.search_group(&group, 5);
        let expected: Vec<usize> = (0..text.len()).collect();
        prop_assert_eq!(hits, expected);
    }
}
