//! # Element Range
//!
//! A single inclusive interval of element identifiers.

use std::fmt::Write;

/// Identifier of a mesh element in the finite-element engine.
///
/// Element identifiers are positive, so they are unsigned. Tokens holding a
/// negative number or a value above `u32::MAX` fail to parse and are
/// skipped like any other malformed token, whatever the range delimiter.
pub type ElementIdentifier = u32;

/// Inclusive range of element identifiers with `start <= end`.
///
/// Ranges order by start, then by end, which is the order the merge pass
/// relies on.
///
/// # Example
///
/// ```rust
/// use element_ranges::ElementRange;
///
/// let range = ElementRange::new(10, 2);
/// assert_eq!((range.start(), range.end()), (2, 10));
/// assert_eq!(range.count(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementRange {
    pub(crate) start: ElementIdentifier,
    pub(crate) end: ElementIdentifier,
}

impl ElementRange {
    /// Creates a range from its two ends, swapping them if given in reverse.
    pub fn new(a: ElementIdentifier, b: ElementIdentifier) -> Self {
        if b < a {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// Creates a range holding one identifier.
    #[inline]
    pub fn single(identifier: ElementIdentifier) -> Self {
        Self {
            start: identifier,
            end: identifier,
        }
    }

    #[inline]
    pub fn start(&self) -> ElementIdentifier {
        self.start
    }

    #[inline]
    pub fn end(&self) -> ElementIdentifier {
        self.end
    }

    /// Returns true if the range holds exactly one identifier.
    #[inline]
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Number of identifiers in the range.
    #[inline]
    pub fn count(&self) -> u64 {
        u64::from(self.end - self.start) + 1
    }

    #[inline]
    pub fn contains(&self, identifier: ElementIdentifier) -> bool {
        self.start <= identifier && identifier <= self.end
    }

    /// Returns true if `next` overlaps this range or starts right after it.
    ///
    /// Assumes `next.start >= self.start`.
    #[inline]
    pub(crate) fn touches(&self, next: &ElementRange) -> bool {
        next.start <= self.end.saturating_add(1)
    }

    /// Appends the range text: `start` alone, or `start{delimiter}end`.
    pub(crate) fn write_to(&self, out: &mut String, range_delimiter: char) {
        // Writing to a String cannot fail.
        let _ = write!(out, "{}", self.start);
        if !self.is_single() {
            out.push(range_delimiter);
            let _ = write!(out, "{}", self.end);
        }
    }
}

impl From<ElementIdentifier> for ElementRange {
    fn from(identifier: ElementIdentifier) -> Self {
        Self::single(identifier)
    }
}

impl From<(ElementIdentifier, ElementIdentifier)> for ElementRange {
    fn from((a, b): (ElementIdentifier, ElementIdentifier)) -> Self {
        Self::new(a, b)
    }
}
