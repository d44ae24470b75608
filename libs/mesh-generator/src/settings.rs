//! # Generator Settings
//!
//! Settings persisted by the mesh generator step: the root scaffold
//! package, the element ranges to delete and the display flags.
//!
//! ## Format
//!
//! A flat JSON object with camelCase keys:
//!
//! ```text
//! {
//!   "scaffoldPackage": { "scaffoldTypeName": "3D box", ... },
//!   "deleteElementRanges": "1-3,7",
//!   "displayLines": true,
//!   ...
//! }
//! ```
//!
//! Missing display keys take their defaults. Files written before scaffold
//! packages existed carry `meshTypeName`, `meshTypeOptions` and a `*`
//! separated `scale` instead; [`GeneratorSettings::from_json`] migrates them.

use config::constants::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::GeneratorError;
use crate::scaffold::{ScaffoldPackage, ScaffoldRegistry, ScaffoldSettings};
use crate::vector::parse_vector3;

const LEGACY_MESH_TYPE_NAME: &str = "meshTypeName";
const LEGACY_MESH_TYPE_OPTIONS: &str = "meshTypeOptions";
const LEGACY_SCALE: &str = "scale";
const SCAFFOLD_PACKAGE: &str = "scaffoldPackage";

/// Visibility and style flags of the generated mesh graphics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    #[serde(rename = "displayNodePoints")]
    pub node_points: bool,
    #[serde(rename = "displayNodeNumbers")]
    pub node_numbers: bool,
    #[serde(rename = "displayNodeDerivatives")]
    pub node_derivatives: bool,
    /// Node derivative labels shown, in canonical label order.
    #[serde(rename = "displayNodeDerivativeLabels")]
    pub node_derivative_labels: Vec<String>,
    #[serde(rename = "displayLines")]
    pub lines: bool,
    #[serde(rename = "displayLinesExterior")]
    pub lines_exterior: bool,
    #[serde(rename = "displayModelRadius")]
    pub model_radius: bool,
    #[serde(rename = "displaySurfaces")]
    pub surfaces: bool,
    #[serde(rename = "displaySurfacesExterior")]
    pub surfaces_exterior: bool,
    #[serde(rename = "displaySurfacesTranslucent")]
    pub surfaces_translucent: bool,
    #[serde(rename = "displaySurfacesWireframe")]
    pub surfaces_wireframe: bool,
    #[serde(rename = "displayElementNumbers")]
    pub element_numbers: bool,
    #[serde(rename = "displayElementAxes")]
    pub element_axes: bool,
    #[serde(rename = "displayAxes")]
    pub axes: bool,
    #[serde(rename = "displayMarkerPoints")]
    pub marker_points: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            node_points: DEFAULT_DISPLAY_NODE_POINTS,
            node_numbers: DEFAULT_DISPLAY_NODE_NUMBERS,
            node_derivatives: DEFAULT_DISPLAY_NODE_DERIVATIVES,
            node_derivative_labels: NODE_DERIVATIVE_LABELS[..DEFAULT_NODE_DERIVATIVE_LABEL_COUNT]
                .iter()
                .map(|label| label.to_string())
                .collect(),
            lines: DEFAULT_DISPLAY_LINES,
            lines_exterior: DEFAULT_DISPLAY_LINES_EXTERIOR,
            model_radius: DEFAULT_DISPLAY_MODEL_RADIUS,
            surfaces: DEFAULT_DISPLAY_SURFACES,
            surfaces_exterior: DEFAULT_DISPLAY_SURFACES_EXTERIOR,
            surfaces_translucent: DEFAULT_DISPLAY_SURFACES_TRANSLUCENT,
            surfaces_wireframe: DEFAULT_DISPLAY_SURFACES_WIREFRAME,
            element_numbers: DEFAULT_DISPLAY_ELEMENT_NUMBERS,
            element_axes: DEFAULT_DISPLAY_ELEMENT_AXES,
            axes: DEFAULT_DISPLAY_AXES,
            marker_points: DEFAULT_DISPLAY_MARKER_POINTS,
        }
    }
}

impl DisplaySettings {
    pub fn shows_node_derivative_label(&self, label: &str) -> bool {
        self.node_derivative_labels.iter().any(|shown| shown == label)
    }

    /// Shows or hides one node derivative label, keeping the canonical
    /// label order. Returns false if `label` is not a node derivative label.
    pub fn set_node_derivative_label(&mut self, label: &str, show: bool) -> bool {
        if node_derivative_index(label).is_none() {
            return false;
        }
        let labels = NODE_DERIVATIVE_LABELS
            .iter()
            .filter(|candidate| {
                if **candidate == label {
                    show
                } else {
                    self.shows_node_derivative_label(candidate)
                }
            })
            .map(|candidate| candidate.to_string())
            .collect();
        self.node_derivative_labels = labels;
        true
    }
}

/// Persisted settings of the mesh generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorSettings {
    pub scaffold_package: ScaffoldPackage,
    /// Canonical element range text, e.g. `1-3,7`.
    #[serde(default)]
    pub delete_element_ranges: String,
    #[serde(flatten)]
    pub display: DisplaySettings,
}

impl GeneratorSettings {
    /// Settings for a package with default display and no deleted elements.
    pub fn new(scaffold_package: ScaffoldPackage) -> Self {
        Self {
            scaffold_package,
            delete_element_ranges: String::new(),
            display: DisplaySettings::default(),
        }
    }

    /// Reads settings JSON, migrating legacy fields.
    ///
    /// The registry resolves legacy `meshTypeName` values to scaffold types.
    pub fn from_json(json: &str, registry: &ScaffoldRegistry) -> Result<Self, GeneratorError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(mut map) = value else {
            return Err(GeneratorError::invalid_settings("settings must be a JSON object"));
        };

        if !map.contains_key(SCAFFOLD_PACKAGE) {
            let package = migrate_mesh_type(&mut map, registry)?;
            map.insert(SCAFFOLD_PACKAGE.to_string(), serde_json::to_value(package)?);
        }
        let legacy_scale = match map.remove(LEGACY_SCALE) {
            Some(Value::String(text)) => Some(text),
            _ => None,
        };

        let mut settings: GeneratorSettings = serde_json::from_value(Value::Object(map))?;
        if let Some(text) = legacy_scale.filter(|text| !text.is_empty()) {
            debug!(scale = %text, "migrating legacy scale setting");
            let scale = parse_vector3(&text, LEGACY_SCALE_DELIMITER, 1.0);
            settings.scaffold_package.transformation_mut().set_scale(scale);
        }
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, GeneratorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds a scaffold package from `meshTypeName` and `meshTypeOptions`,
/// removing both keys.
fn migrate_mesh_type(
    map: &mut Map<String, Value>,
    registry: &ScaffoldRegistry,
) -> Result<ScaffoldPackage, GeneratorError> {
    let name = match map.remove(LEGACY_MESH_TYPE_NAME) {
        Some(Value::String(name)) => name,
        _ => {
            return Err(GeneratorError::invalid_settings(
                "missing scaffoldPackage and meshTypeName",
            ))
        }
    };
    let scaffold_type = registry
        .find(&name)
        .ok_or_else(|| GeneratorError::unknown_scaffold_type(&name))?;
    let options: ScaffoldSettings = match map.remove(LEGACY_MESH_TYPE_OPTIONS) {
        Some(value) => serde_json::from_value(value)?,
        None => scaffold_type.default_options(
            scaffold_type
                .parameter_set_names()
                .first()
                .map(String::as_str)
                .unwrap_or_default(),
        ),
    };
    debug!(scaffold_type = %name, "migrating legacy mesh type settings");
    Ok(ScaffoldPackage::with_settings(scaffold_type.name(), options))
}
