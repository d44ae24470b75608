//! # Scaffolds
//!
//! Scaffold packages (a scaffold type with its option settings,
//! transformation and mesh edits) and the trait through which the scaffold
//! parameter library describes each scaffold type.
//!
//! Packages can nest: an option value may itself be a scaffold package, e.g.
//! the central path of a tube scaffold.

mod option;
mod registry;

pub use option::OptionValue;
pub use registry::ScaffoldRegistry;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transform::Transformation;

/// Option settings of a scaffold, keyed by option name.
pub type ScaffoldSettings = BTreeMap<String, OptionValue>;

/// A scaffold type provided by the scaffold parameter library.
///
/// Implementations describe options and presets only; mesh generation itself
/// happens in the [`MeshHost`](crate::host::MeshHost).
pub trait ScaffoldType: fmt::Debug {
    /// Unique display name.
    fn name(&self) -> &str;

    /// Names of predefined parameter sets. The first is the default.
    fn parameter_set_names(&self) -> Vec<String>;

    /// Option settings of a predefined parameter set.
    fn default_options(&self, parameter_set_name: &str) -> ScaffoldSettings;

    /// Option names in the order the GUI lists them.
    fn ordered_option_names(&self) -> Vec<String>;

    /// Brings settings back into a valid state after an edit.
    ///
    /// Returns true if options other than the edited one changed, in which
    /// case the GUI refreshes every option.
    fn check_options(&self, _settings: &mut ScaffoldSettings) -> bool {
        false
    }

    /// Names of scaffold types accepted by a nested package option.
    fn option_valid_scaffold_types(&self, _option_name: &str) -> Vec<String> {
        Vec::new()
    }

    /// Parameter sets offered for a nested package option of `scaffold_type`.
    fn option_scaffold_type_parameter_set_names(
        &self,
        _option_name: &str,
        scaffold_type: &dyn ScaffoldType,
    ) -> Vec<String> {
        scaffold_type.parameter_set_names()
    }

    /// Default nested package for an option, built from `scaffold_type` and
    /// a parameter set (the type's default when `None`).
    fn option_scaffold_package(
        &self,
        _option_name: &str,
        scaffold_type: &dyn ScaffoldType,
        parameter_set_name: Option<&str>,
    ) -> ScaffoldPackage {
        match parameter_set_name {
            Some(name) => ScaffoldPackage::with_parameter_set(scaffold_type, name),
            None => ScaffoldPackage::new(scaffold_type),
        }
    }
}

/// Scaffold type name, option settings, transformation and mesh edits.
///
/// Equality compares every field; the model uses it to recognise when a
/// package matches a predefined parameter set.
///
/// # Example
///
/// ```rust
/// use mesh_generator::scaffold::{OptionValue, ScaffoldPackage, ScaffoldSettings};
///
/// let mut settings = ScaffoldSettings::new();
/// settings.insert("Number of elements".to_string(), OptionValue::Integer(4));
/// let package = ScaffoldPackage::with_settings("1D line", settings);
/// assert_eq!(package.option("Number of elements"), Some(&OptionValue::Integer(4)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaffoldPackage {
    #[serde(rename = "scaffoldTypeName")]
    scaffold_type_name: String,
    #[serde(default)]
    scaffold_settings: ScaffoldSettings,
    #[serde(flatten)]
    transformation: Transformation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mesh_edits: Option<String>,
}

impl ScaffoldPackage {
    /// Creates a package with the default parameter set of `scaffold_type`.
    pub fn new(scaffold_type: &dyn ScaffoldType) -> Self {
        let parameter_set_name = scaffold_type
            .parameter_set_names()
            .into_iter()
            .next()
            .unwrap_or_default();
        Self::with_parameter_set(scaffold_type, &parameter_set_name)
    }

    /// Creates a package with a named parameter set of `scaffold_type`.
    pub fn with_parameter_set(scaffold_type: &dyn ScaffoldType, parameter_set_name: &str) -> Self {
        Self::with_settings(
            scaffold_type.name(),
            scaffold_type.default_options(parameter_set_name),
        )
    }

    /// Creates a package from explicit settings.
    pub fn with_settings(scaffold_type_name: impl Into<String>, settings: ScaffoldSettings) -> Self {
        Self {
            scaffold_type_name: scaffold_type_name.into(),
            scaffold_settings: settings,
            transformation: Transformation::default(),
            mesh_edits: None,
        }
    }

    #[inline]
    pub fn scaffold_type_name(&self) -> &str {
        &self.scaffold_type_name
    }

    #[inline]
    pub fn settings(&self) -> &ScaffoldSettings {
        &self.scaffold_settings
    }

    #[inline]
    pub fn settings_mut(&mut self) -> &mut ScaffoldSettings {
        &mut self.scaffold_settings
    }

    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.scaffold_settings.get(name)
    }

    /// Sets an option, returning the previous value.
    pub fn set_option(&mut self, name: impl Into<String>, value: OptionValue) -> Option<OptionValue> {
        self.scaffold_settings.insert(name.into(), value)
    }

    #[inline]
    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    #[inline]
    pub fn transformation_mut(&mut self) -> &mut Transformation {
        &mut self.transformation
    }

    /// Serialized node edits made interactively, owned by the host.
    pub fn mesh_edits(&self) -> Option<&str> {
        self.mesh_edits.as_deref()
    }

    pub fn set_mesh_edits(&mut self, mesh_edits: Option<String>) {
        self.mesh_edits = mesh_edits;
    }
}
