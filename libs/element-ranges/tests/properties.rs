use element_ranges::{ElementRange, ElementRangeSet};
use proptest::prelude::*;

fn arb_range() -> impl Strategy<Value = ElementRange> {
    (0u32..500, 0u32..20).prop_map(|(start, len)| ElementRange::new(start, start + len))
}

fn arb_set() -> impl Strategy<Value = ElementRangeSet> {
    prop::collection::vec(arb_range(), 0..12).prop_map(ElementRangeSet::from_ranges)
}

fn is_canonical(ranges: &ElementRangeSet) -> bool {
    ranges
        .as_slice()
        .windows(2)
        .all(|pair| u64::from(pair[1].start()) > u64::from(pair[0].end()) + 1)
        && ranges.iter().all(|r| r.start() <= r.end())
}

proptest! {
    #[test]
    fn single_range_text_formats_back(a in 0u32..100_000, b in 0u32..100_000) {
        let text = format!("{a}-{b}");
        let (lo, hi) = (a.min(b), a.max(b));
        let expected = if lo == hi { lo.to_string() } else { format!("{lo}-{hi}") };
        prop_assert_eq!(ElementRangeSet::parse(&text).format(), expected);
    }

    #[test]
    fn parse_always_yields_canonical_form(text in "[0-9,\\- a-z]{0,40}") {
        let ranges = ElementRangeSet::parse(&text);
        prop_assert!(is_canonical(&ranges));
    }

    #[test]
    fn canonical_text_is_a_fixed_point(ranges in arb_set()) {
        prop_assert!(is_canonical(&ranges));
        let text = ranges.format();
        let reparsed = ElementRangeSet::parse(&text);
        prop_assert_eq!(&reparsed, &ranges);
        prop_assert_eq!(reparsed.format(), text);
    }

    #[test]
    fn changed_flag_tracks_structural_difference(a in arb_set(), b in arb_set()) {
        let outcome = a.reparse(&b.format());
        prop_assert_eq!(outcome.changed, a != b);
        prop_assert!(!a.reparse(&a.format()).changed);
    }

    #[test]
    fn contains_agrees_with_linear_scan(ranges in arb_set(), probe in 0u32..530) {
        let expected = ranges.iter().any(|r| r.contains(probe));
        prop_assert_eq!(ranges.contains(probe), expected);
    }

    #[test]
    fn add_range_covers_union(ranges in arb_set(), extra in arb_range(), probe in 0u32..530) {
        let extended = ranges.add_range(extra.start(), extra.end());
        prop_assert!(is_canonical(&extended));
        prop_assert_eq!(extended.contains(probe), ranges.contains(probe) || extra.contains(probe));
    }

    #[test]
    fn selection_runs_cover_identifiers(ids in prop::collection::btree_set(0u32..200, 0..40)) {
        let ranges = ElementRangeSet::from_identifiers(ids.iter().copied());
        prop_assert!(is_canonical(&ranges));
        prop_assert_eq!(ranges.element_count(), ids.len() as u64);
        for id in &ids {
            prop_assert!(ranges.contains(*id));
        }
    }
}
