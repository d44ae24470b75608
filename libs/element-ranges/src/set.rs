//! # Element Range Set
//!
//! Sorted, merged sets of element ranges and their canonical text form.
//!
//! ## Invariant
//!
//! For consecutive ranges `a`, `b` in a set: `b.start > a.end + 1`. Ranges
//! never overlap and never touch, so every set of identifiers has exactly
//! one representation. All constructors go through [`merge`].

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use config::constants::RangeDelimiters;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::parse::parse_token;
use crate::range::{ElementIdentifier, ElementRange};

/// Canonical set of inclusive element identifier ranges.
///
/// Serializes as its canonical text, which is also the form persisted in
/// settings.
///
/// # Example
///
/// ```rust
/// use element_ranges::ElementRangeSet;
///
/// let ranges = ElementRangeSet::parse("1-3,4-6,9");
/// assert_eq!(ranges.len(), 2);
/// assert!(ranges.contains(5));
/// assert!(!ranges.contains(8));
/// assert_eq!(ranges.to_string(), "1-6,9");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct ElementRangeSet {
    ranges: Vec<ElementRange>,
}

/// Result of parsing text against a previously held set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// The canonical set parsed from the text.
    pub ranges: ElementRangeSet,
    /// True if `ranges` differs structurally from the previous set.
    pub changed: bool,
}

impl ElementRangeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses text with the default `,` and `-` delimiters.
    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, RangeDelimiters::default())
    }

    /// Parses text into a canonical set.
    ///
    /// Malformed tokens are skipped; the result may be empty but parsing
    /// never fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::RangeDelimiters;
    /// use element_ranges::ElementRangeSet;
    ///
    /// let delimiters = RangeDelimiters::new(';', ':').unwrap();
    /// let ranges = ElementRangeSet::parse_with("4:6;1", delimiters);
    /// assert_eq!(ranges.format_with(delimiters), "1;4:6");
    /// ```
    pub fn parse_with(text: &str, delimiters: RangeDelimiters) -> Self {
        let ranges = text
            .split(delimiters.component)
            .filter_map(|token| {
                let range = parse_token(token, delimiters.range);
                if range.is_none() && !token.trim().is_empty() {
                    trace!(token, "skipping malformed element range token");
                }
                range
            })
            .collect();
        Self {
            ranges: merge(ranges),
        }
    }

    /// Parses text with the default delimiters and reports whether the
    /// result differs from `self`.
    pub fn reparse(&self, text: &str) -> ParseOutcome {
        self.reparse_with(text, RangeDelimiters::default())
    }

    /// Parses text and reports whether the result differs from `self`.
    ///
    /// Callers use `changed` to skip regenerating the mesh when an edit
    /// does not alter the canonical set (e.g. `3,5` retyped as `5,3`).
    pub fn reparse_with(&self, text: &str, delimiters: RangeDelimiters) -> ParseOutcome {
        let ranges = Self::parse_with(text, delimiters);
        let changed = ranges != *self;
        ParseOutcome { ranges, changed }
    }

    /// Builds a set from arbitrary ranges, sorting and merging them.
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = ElementRange>,
    {
        Self {
            ranges: merge(ranges.into_iter().collect()),
        }
    }

    /// Builds a set from identifiers, e.g. the elements of a scene selection.
    ///
    /// Consecutive runs become one range. The input need not be sorted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use element_ranges::ElementRangeSet;
    ///
    /// let ranges = ElementRangeSet::from_identifiers([4, 5, 6, 9, 11, 12]);
    /// assert_eq!(ranges.to_string(), "4-6,9,11-12");
    /// ```
    pub fn from_identifiers<I>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = ElementIdentifier>,
    {
        let mut runs: Vec<ElementRange> = Vec::new();
        for identifier in identifiers {
            match runs.last_mut() {
                Some(run) if run.end.checked_add(1) == Some(identifier) => run.end = identifier,
                _ => runs.push(ElementRange::single(identifier)),
            }
        }
        Self::from_ranges(runs)
    }

    /// Formats the set with the default delimiters.
    pub fn format(&self) -> String {
        self.format_with(RangeDelimiters::default())
    }

    /// Formats the set as canonical text, ranges in ascending order.
    pub fn format_with(&self, delimiters: RangeDelimiters) -> String {
        let mut text = String::new();
        for (index, range) in self.ranges.iter().enumerate() {
            if index > 0 {
                text.push(delimiters.component);
            }
            range.write_to(&mut text, delimiters.range);
        }
        text
    }

    /// Adds an inclusive span using the default delimiters.
    pub fn add_range(&self, start: ElementIdentifier, end: ElementIdentifier) -> Self {
        self.add_range_with(start, end, RangeDelimiters::default())
    }

    /// Adds an inclusive span by reparsing the canonical text with the span
    /// appended, so the result goes through the same merge as typed text.
    pub fn add_range_with(
        &self,
        start: ElementIdentifier,
        end: ElementIdentifier,
        delimiters: RangeDelimiters,
    ) -> Self {
        let mut text = self.format_with(delimiters);
        text.push(delimiters.component);
        ElementRange::new(start, end).write_to(&mut text, delimiters.range);
        Self::parse_with(&text, delimiters)
    }

    /// Returns true if `identifier` lies in any range.
    pub fn contains(&self, identifier: ElementIdentifier) -> bool {
        let index = self.ranges.partition_point(|range| range.end < identifier);
        self.ranges
            .get(index)
            .is_some_and(|range| range.start <= identifier)
    }

    /// Number of ranges.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Total number of identifiers covered by the set.
    pub fn element_count(&self) -> u64 {
        self.ranges.iter().map(ElementRange::count).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ElementRange> {
        self.ranges.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[ElementRange] {
        &self.ranges
    }
}

/// Sorts ranges by start and merges overlapping or adjacent neighbours.
fn merge(mut ranges: Vec<ElementRange>) -> Vec<ElementRange> {
    ranges.sort_unstable();
    let mut merged: Vec<ElementRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if last.touches(&range) => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

impl fmt::Display for ElementRangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for ElementRangeSet {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(text))
    }
}

impl From<String> for ElementRangeSet {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<ElementRangeSet> for String {
    fn from(ranges: ElementRangeSet) -> Self {
        ranges.format()
    }
}

impl FromIterator<ElementRange> for ElementRangeSet {
    fn from_iter<I: IntoIterator<Item = ElementRange>>(iter: I) -> Self {
        Self::from_ranges(iter)
    }
}

impl<'a> IntoIterator for &'a ElementRangeSet {
    type Item = &'a ElementRange;
    type IntoIter = std::slice::Iter<'a, ElementRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
