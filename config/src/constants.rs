//! # Configuration Constants
//!
//! Centralized constants for the scaffold mesh generator. Text delimiters,
//! persisted display defaults, graphics names, materials and glyph sizing
//! factors are defined here.
//!
//! ## Categories
//!
//! - **Delimiters**: Element range and vector text grammar
//! - **Parameter Sets**: Names shared with the scaffold library
//! - **Display Defaults**: Initial visibility of every graphics
//! - **Graphics**: Names and materials handed to the scene host
//! - **Sizing**: Glyph and axes scaling factors

use std::fmt;

// =============================================================================
// DELIMITER CONSTANTS
// =============================================================================

/// Separates components of an element range list, e.g. `1-3,7`.
///
/// # Example
///
/// ```rust
/// use config::constants::COMPONENT_DELIMITER;
///
/// let tokens: Vec<&str> = "1-3,7".split(COMPONENT_DELIMITER).collect();
/// assert_eq!(tokens, ["1-3", "7"]);
/// ```
pub const COMPONENT_DELIMITER: char = ',';

/// Joins the two ends of an inclusive element range, e.g. `8-10`.
///
/// # Example
///
/// ```rust
/// use config::constants::RANGE_DELIMITER;
///
/// let ends: Vec<&str> = "8-10".split(RANGE_DELIMITER).collect();
/// assert_eq!(ends, ["8", "10"]);
/// ```
pub const RANGE_DELIMITER: char = '-';

/// Separates the components of rotation, scale and translation text.
pub const VECTOR_DELIMITER: char = ',';

/// Separator used when writing vector text back to the user.
pub const VECTOR_FORMAT_SEPARATOR: &str = ", ";

/// Delimiter of the legacy `scale` setting, e.g. `1*1*2`.
///
/// Old settings files stored the scale outside the scaffold package using
/// this delimiter. It is only read during migration.
pub const LEGACY_SCALE_DELIMITER: char = '*';

/// Significant digits used when formatting real values as text.
///
/// # Example
///
/// ```rust
/// use config::constants::FLOAT_SIGNIFICANT_DIGITS;
///
/// assert_eq!(FLOAT_SIGNIFICANT_DIGITS, 8);
/// ```
pub const FLOAT_SIGNIFICANT_DIGITS: usize = 8;

// =============================================================================
// PARAMETER SET CONSTANTS
// =============================================================================

/// Name of the parameter set used once options or nodes have been edited
/// away from every predefined parameter set.
pub const CUSTOM_PARAMETER_SET_NAME: &str = "Custom";

/// Separator used to display the option path of a nested scaffold package.
pub const OPTION_PATH_SEPARATOR: &str = "/";

// =============================================================================
// NODE DERIVATIVE CONSTANTS
// =============================================================================

/// Labels of the node derivatives that can be drawn, in canonical order.
///
/// The order is shared by [`NODE_DERIVATIVE_MATERIALS`] and
/// [`NODE_DERIVATIVE_SCALES`].
///
/// # Example
///
/// ```rust
/// use config::constants::NODE_DERIVATIVE_LABELS;
///
/// assert_eq!(NODE_DERIVATIVE_LABELS[0], "D1");
/// assert_eq!(NODE_DERIVATIVE_LABELS.len(), 7);
/// ```
pub const NODE_DERIVATIVE_LABELS: [&str; 7] = ["D1", "D2", "D3", "D12", "D13", "D23", "D123"];

/// Number of leading labels displayed by default (`D1`, `D2`, `D3`).
pub const DEFAULT_NODE_DERIVATIVE_LABEL_COUNT: usize = 3;

/// Material of each node derivative arrow.
pub const NODE_DERIVATIVE_MATERIALS: [&str; 7] =
    ["gold", "silver", "green", "cyan", "magenta", "yellow", "blue"];

/// Arrow length scale of each node derivative. Cross derivatives are drawn
/// shorter so they do not swamp the first derivatives.
pub const NODE_DERIVATIVE_SCALES: [f64; 7] = [1.0, 1.0, 1.0, 0.5, 0.5, 0.5, 0.25];

/// Returns the canonical index of a node derivative label.
///
/// # Example
///
/// ```rust
/// use config::constants::node_derivative_index;
///
/// assert_eq!(node_derivative_index("D13"), Some(4));
/// assert_eq!(node_derivative_index("D4"), None);
/// ```
pub fn node_derivative_index(label: &str) -> Option<usize> {
    NODE_DERIVATIVE_LABELS.iter().position(|candidate| *candidate == label)
}

// =============================================================================
// DISPLAY DEFAULTS
// =============================================================================

pub const DEFAULT_DISPLAY_NODE_POINTS: bool = false;
pub const DEFAULT_DISPLAY_NODE_NUMBERS: bool = false;
pub const DEFAULT_DISPLAY_NODE_DERIVATIVES: bool = false;
pub const DEFAULT_DISPLAY_LINES: bool = true;
pub const DEFAULT_DISPLAY_LINES_EXTERIOR: bool = false;
pub const DEFAULT_DISPLAY_MODEL_RADIUS: bool = false;
pub const DEFAULT_DISPLAY_SURFACES: bool = true;
pub const DEFAULT_DISPLAY_SURFACES_EXTERIOR: bool = true;
pub const DEFAULT_DISPLAY_SURFACES_TRANSLUCENT: bool = true;
pub const DEFAULT_DISPLAY_SURFACES_WIREFRAME: bool = false;
pub const DEFAULT_DISPLAY_ELEMENT_NUMBERS: bool = false;
pub const DEFAULT_DISPLAY_ELEMENT_AXES: bool = false;
pub const DEFAULT_DISPLAY_AXES: bool = true;
pub const DEFAULT_DISPLAY_MARKER_POINTS: bool = false;

// =============================================================================
// GRAPHICS NAMES
// =============================================================================

pub const GRAPHICS_AXES: &str = "displayAxes";
pub const GRAPHICS_LINES: &str = "displayLines";
pub const GRAPHICS_NODE_POINTS: &str = "displayNodePoints";
pub const GRAPHICS_NODE_NUMBERS: &str = "displayNodeNumbers";
/// Prefix of node derivative graphics; the derivative label is appended.
pub const GRAPHICS_NODE_DERIVATIVES: &str = "displayNodeDerivatives";
pub const GRAPHICS_ELEMENT_NUMBERS: &str = "displayElementNumbers";
pub const GRAPHICS_SURFACES: &str = "displaySurfaces";
pub const GRAPHICS_ELEMENT_AXES: &str = "displayElementAxes";
pub const GRAPHICS_MARKER_POINTS: &str = "displayMarkerPoints";

// =============================================================================
// MATERIALS
// =============================================================================

pub const MATERIAL_DEFAULT: &str = "default";
pub const MATERIAL_TRANSLUCENT: &str = "trans_blue";
pub const MATERIAL_SOLID: &str = "solid_blue";
pub const MATERIAL_AXES: &str = "grey50";
pub const MATERIAL_NODE_POINTS: &str = "white";
pub const MATERIAL_NODE_NUMBERS: &str = "green";
pub const MATERIAL_ELEMENT_NUMBERS: &str = "cyan";
pub const MATERIAL_ELEMENT_AXES: &str = "yellow";
pub const MATERIAL_MARKER_POINTS: &str = "yellow";

// =============================================================================
// SIZING CONSTANTS
// =============================================================================

/// Factor between successive candidate axes sizes.
pub const AXES_SCALE_STEP: f64 = 10.0;

/// Glyph width as a fraction of the mean line element length.
pub const GLYPH_WIDTH_LINE_FACTOR: f64 = 0.1;

/// Glyph width as a fraction of the largest coordinate extent, used when the
/// mesh has no line elements.
pub const GLYPH_WIDTH_EXTENT_FACTOR: f64 = 0.01;

/// Diameter-from-radius factor used when drawing the model radius.
pub const MODEL_RADIUS_SCALE_FACTOR: f64 = 2.0;

/// Arrow scale of element axes along each element direction.
pub const ELEMENT_AXES_SCALE: f64 = 0.25;

/// Label offset along a node derivative arrow, as a fraction of its length.
pub const DERIVATIVE_LABEL_OFFSET: f64 = 1.05;

/// Delimiters of the element range grammar.
///
/// # Examples
/// ```
/// use config::constants::RangeDelimiters;
/// let delimiters = RangeDelimiters::new(';', ':').expect("valid delimiters");
/// assert_eq!(delimiters.component, ';');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeDelimiters {
    /// Separates range components.
    pub component: char,
    /// Joins the ends of a range.
    pub range: char,
}

impl RangeDelimiters {
    /// Builds a delimiter pair, rejecting pairs the grammar cannot tell apart.
    ///
    /// # Examples
    /// ```
    /// use config::constants::RangeDelimiters;
    /// assert!(RangeDelimiters::new(',', ',').is_err());
    /// assert!(RangeDelimiters::new('1', '-').is_err());
    /// ```
    pub fn new(component: char, range: char) -> Result<Self, ConfigError> {
        if component == range {
            return Err(ConfigError::IdenticalDelimiters(component));
        }
        for delimiter in [component, range] {
            if delimiter.is_ascii_digit() {
                return Err(ConfigError::DigitDelimiter(delimiter));
            }
        }
        Ok(Self { component, range })
    }
}

impl Default for RangeDelimiters {
    fn default() -> Self {
        Self {
            component: COMPONENT_DELIMITER,
            range: RANGE_DELIMITER,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when both delimiters are the same character.
    IdenticalDelimiters(char),
    /// Raised when a delimiter would be read as part of an identifier.
    DigitDelimiter(char),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IdenticalDelimiters(value) => {
                write!(f, "component and range delimiters must differ: {value:?}")
            }
            ConfigError::DigitDelimiter(value) => {
                write!(f, "delimiter must not be a digit: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
