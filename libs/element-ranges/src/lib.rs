//! # Element Ranges
//!
//! Canonical sets of inclusive element identifier ranges, parsed from the
//! text a user types into a "delete elements" field.
//!
//! ## Pipeline
//!
//! ```text
//! "5,3,8-10,9s" → tokens → ranges → sort → merge → "3,5,8-10"
//! ```
//!
//! Parsing is deliberately permissive: trailing stray characters are
//! stripped and tokens that still fail are skipped. Parsing never fails.
//!
//! ## Usage
//!
//! ```rust
//! use element_ranges::ElementRangeSet;
//!
//! let ranges = ElementRangeSet::parse("5,3,8-10,9");
//! assert_eq!(ranges.to_string(), "3,5,8-10");
//!
//! let outcome = ranges.reparse("3, 5, 10-8");
//! assert!(!outcome.changed);
//!
//! let extended = ranges.add_range(4, 4);
//! assert_eq!(extended.to_string(), "3-5,8-10");
//! ```

mod parse;
pub mod range;
pub mod set;

pub use range::{ElementIdentifier, ElementRange};
pub use set::{ElementRangeSet, ParseOutcome};
