//! # Config Crate
//!
//! Centralized configuration constants for the scaffold mesh generator.
//! Delimiters, display defaults, graphics names and glyph sizing factors
//! are defined here so the range parser, the model and the graphics planner
//! agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{COMPONENT_DELIMITER, RANGE_DELIMITER, RangeDelimiters};
//!
//! let delimiters = RangeDelimiters::default();
//! assert_eq!(delimiters.component, COMPONENT_DELIMITER);
//! assert_eq!(delimiters.range, RANGE_DELIMITER);
//!
//! let text = format!("1{}3{}7", RANGE_DELIMITER, COMPONENT_DELIMITER);
//! assert_eq!(text, "1-3,7");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Persisted Names**: Settings keys and graphics names match saved files
//! - **Host Agnostic**: No engine types leak into this crate

pub mod constants;
