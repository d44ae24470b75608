//! # Mesh Generator Model
//!
//! Holds the scaffold configuration being edited and drives the host to
//! regenerate and redraw the mesh whenever it changes.
//!
//! ## Package Stack
//!
//! ```text
//! packages:     [root, nested, nested-of-nested]
//! option_names: [      "Central path", "..."   ]
//! ```
//!
//! The last package is the one being edited. Nested packages are owned
//! copies of their parent's option; ending the edit writes the copy back.
//!
//! ## Regeneration
//!
//! Every change that affects mesh topology or options regenerates through
//! [`MeshGeneratorModel::generate_mesh`]. Changes that do not alter the
//! stored value (retyping identical ranges, selecting the current scaffold
//! type) skip regeneration.

mod display;
mod transformation;

use std::sync::Arc;

use config::constants::{CUSTOM_PARAMETER_SET_NAME, OPTION_PATH_SEPARATOR};
use element_ranges::{ElementIdentifier, ElementRangeSet};
use tracing::{debug, warn};

use crate::error::GeneratorError;
use crate::graphics::{max_derivative_versions, GraphicsPlan};
use crate::host::MeshHost;
use crate::scaffold::{
    OptionValue, ScaffoldPackage, ScaffoldRegistry, ScaffoldSettings, ScaffoldType,
};
use crate::settings::{DisplaySettings, GeneratorSettings};
use crate::transform::Transformation;

type Callback = Box<dyn FnMut()>;

#[derive(Default)]
struct Callbacks {
    custom_parameters: Option<Callback>,
    scene_change: Option<Callback>,
    transformation_change: Option<Callback>,
}

fn fire(callback: &mut Option<Callback>) {
    if let Some(callback) = callback.as_mut() {
        callback();
    }
}

/// Scaffold mesh generator driving a [`MeshHost`].
pub struct MeshGeneratorModel<H: MeshHost> {
    host: H,
    registry: ScaffoldRegistry,
    packages: Vec<ScaffoldPackage>,
    option_names: Vec<String>,
    display: DisplaySettings,
    delete_ranges: ElementRangeSet,
    parameter_set_name: String,
    /// Last custom package, restored when switching back to "Custom".
    custom_package: Option<ScaffoldPackage>,
    unsaved_node_edits: bool,
    generated: bool,
    callbacks: Callbacks,
}

impl<H: MeshHost> MeshGeneratorModel<H> {
    /// Creates a model editing the registry's default scaffold type with its
    /// default parameter set. Nothing is generated until the first change or
    /// [`generate_mesh`](Self::generate_mesh).
    pub fn new(host: H, registry: ScaffoldRegistry) -> Self {
        let scaffold_type = registry.default_type();
        let package = ScaffoldPackage::new(scaffold_type.as_ref());
        let parameter_set_name = scaffold_type
            .parameter_set_names()
            .into_iter()
            .next()
            .unwrap_or_default();
        Self {
            host,
            registry,
            packages: vec![package],
            option_names: Vec::new(),
            display: DisplaySettings::default(),
            delete_ranges: ElementRangeSet::new(),
            parameter_set_name,
            custom_package: None,
            unsaved_node_edits: false,
            generated: false,
            callbacks: Callbacks::default(),
        }
    }

    // ========================================================================
    // Host and callbacks
    // ========================================================================

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn registry(&self) -> &ScaffoldRegistry {
        &self.registry
    }

    /// Called when the model switches to the "Custom" parameter set.
    pub fn register_custom_parameters_callback(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.custom_parameters = Some(Box::new(callback));
    }

    /// Called after the mesh is regenerated.
    pub fn register_scene_change_callback(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.scene_change = Some(Box::new(callback));
    }

    /// Called after interactive rotation, scaling or translation.
    pub fn register_transformation_change_callback(&mut self, callback: impl FnMut() + 'static) {
        self.callbacks.transformation_change = Some(Box::new(callback));
    }

    // ========================================================================
    // Scaffold type
    // ========================================================================

    /// Names of scaffold types that can be selected for the package being
    /// edited. A nested package only offers the types its parent option
    /// accepts.
    pub fn available_scaffold_type_names(&self) -> Result<Vec<String>, GeneratorError> {
        let Some((parent, option_name)) = self.parent()? else {
            return Ok(self.registry.names());
        };
        let valid = parent.option_valid_scaffold_types(option_name);
        Ok(self
            .registry
            .names()
            .into_iter()
            .filter(|name| valid.contains(name))
            .collect())
    }

    /// Switches the edited package to a new scaffold type with its default
    /// parameter set. Unknown names are ignored.
    pub fn set_scaffold_type_by_name(&mut self, name: &str) -> Result<(), GeneratorError> {
        let Some(scaffold_type) = self.registry.find(name) else {
            warn!(scaffold_type = name, "ignoring unknown scaffold type");
            return Ok(());
        };
        if let Some((parent, option_name)) = self.parent()? {
            if !parent
                .option_valid_scaffold_types(option_name)
                .iter()
                .any(|valid| valid == name)
            {
                return Err(GeneratorError::InvalidScaffoldForParent {
                    name: name.to_string(),
                    option: option_name.to_string(),
                });
            }
        }
        if name == self.edit_scaffold_type_name() {
            return Ok(());
        }
        self.set_scaffold_type(scaffold_type)?;
        self.generate_mesh()
    }

    fn set_scaffold_type(&mut self, scaffold_type: Arc<dyn ScaffoldType>) -> Result<(), GeneratorError> {
        let package = match self.parent()? {
            Some((parent, option_name)) => {
                parent.option_scaffold_package(option_name, scaffold_type.as_ref(), None)
            }
            None => ScaffoldPackage::new(scaffold_type.as_ref()),
        };
        *self.current_mut() = package;
        self.custom_package = None;
        self.unsaved_node_edits = false;
        self.parameter_set_name = self
            .edit_parameter_set_names()?
            .into_iter()
            .next()
            .unwrap_or_default();
        Ok(())
    }

    pub fn edit_scaffold_type_name(&self) -> &str {
        self.current().scaffold_type_name()
    }

    /// Scaffold type of the package being edited.
    pub fn edit_scaffold_type(&self) -> Result<Arc<dyn ScaffoldType>, GeneratorError> {
        self.scaffold_type_of(self.current())
    }

    pub fn editing_root_scaffold_package(&self) -> bool {
        self.packages.len() == 1
    }

    /// Package being edited, possibly nested.
    pub fn edit_scaffold_package(&self) -> &ScaffoldPackage {
        self.current()
    }

    pub fn edit_scaffold_settings(&self) -> &ScaffoldSettings {
        self.current().settings()
    }

    pub fn edit_scaffold_option(&self, name: &str) -> Option<&OptionValue> {
        self.current().option(name)
    }

    pub fn edit_scaffold_ordered_option_names(&self) -> Result<Vec<String>, GeneratorError> {
        Ok(self.edit_scaffold_type()?.ordered_option_names())
    }

    /// Path of nested option names being edited, e.g. `Central path`.
    /// Empty at the root.
    pub fn edit_scaffold_option_display_name(&self) -> String {
        self.option_names.join(OPTION_PATH_SEPARATOR)
    }

    /// Option value in the parent of the package being edited.
    pub fn parent_scaffold_option(&self, name: &str) -> Result<&OptionValue, GeneratorError> {
        let parent = self
            .packages
            .len()
            .checked_sub(2)
            .and_then(|index| self.packages.get(index))
            .ok_or(GeneratorError::EditingRoot)?;
        parent
            .option(name)
            .ok_or_else(|| GeneratorError::unknown_option(name))
    }

    // ========================================================================
    // Parameter sets
    // ========================================================================

    /// Parameter sets offered for the package being edited, with "Custom"
    /// first when a custom package has been kept.
    pub fn available_parameter_set_names(&self) -> Result<Vec<String>, GeneratorError> {
        let mut names = self.edit_parameter_set_names()?;
        if self.custom_package.is_some() {
            names.insert(0, CUSTOM_PARAMETER_SET_NAME.to_string());
        }
        Ok(names)
    }

    pub fn parameter_set_name(&self) -> &str {
        &self.parameter_set_name
    }

    /// Replaces the edited package with a predefined parameter set, or with
    /// the kept custom package for "Custom".
    pub fn set_parameter_set_name(&mut self, name: &str) -> Result<(), GeneratorError> {
        let source = if name == CUSTOM_PARAMETER_SET_NAME {
            if self.parameter_set_name == CUSTOM_PARAMETER_SET_NAME {
                self.save_custom_package();
            }
            self.custom_package
                .clone()
                .ok_or_else(|| GeneratorError::UnknownParameterSet {
                    name: name.to_string(),
                })?
        } else {
            if !self.edit_parameter_set_names()?.iter().any(|known| known == name) {
                return Err(GeneratorError::UnknownParameterSet {
                    name: name.to_string(),
                });
            }
            if self.parameter_set_name == CUSTOM_PARAMETER_SET_NAME {
                self.save_custom_package();
            }
            self.default_package_for_parameter_set(name)?
        };
        *self.current_mut() = source;
        self.parameter_set_name = name.to_string();
        self.unsaved_node_edits = false;
        self.generate_mesh()
    }

    fn edit_parameter_set_names(&self) -> Result<Vec<String>, GeneratorError> {
        let scaffold_type = self.edit_scaffold_type()?;
        Ok(match self.parent()? {
            Some((parent, option_name)) => {
                parent.option_scaffold_type_parameter_set_names(option_name, scaffold_type.as_ref())
            }
            None => scaffold_type.parameter_set_names(),
        })
    }

    fn default_package_for_parameter_set(&self, name: &str) -> Result<ScaffoldPackage, GeneratorError> {
        let scaffold_type = self.edit_scaffold_type()?;
        Ok(match self.parent()? {
            Some((parent, option_name)) => {
                parent.option_scaffold_package(option_name, scaffold_type.as_ref(), Some(name))
            }
            None => ScaffoldPackage::with_parameter_set(scaffold_type.as_ref(), name),
        })
    }

    /// Finds the predefined parameter set equal to the edited package,
    /// falling back to "Custom". Later sets win when several match.
    fn detect_parameter_set(&mut self) -> Result<(), GeneratorError> {
        self.custom_package = None;
        self.unsaved_node_edits = false;
        self.parameter_set_name.clear();
        for name in self.edit_parameter_set_names()?.into_iter().rev() {
            if self.default_package_for_parameter_set(&name)? == *self.current() {
                self.parameter_set_name = name;
                break;
            }
        }
        if self.parameter_set_name.is_empty() {
            self.use_custom_package();
        }
        debug!(parameter_set = %self.parameter_set_name, "detected parameter set");
        Ok(())
    }

    fn save_custom_package(&mut self) {
        self.update_mesh_edits();
        self.custom_package = Some(self.current().clone());
    }

    fn use_custom_package(&mut self) {
        if self.custom_package.is_none() || self.parameter_set_name != CUSTOM_PARAMETER_SET_NAME {
            self.save_custom_package();
            self.parameter_set_name = CUSTOM_PARAMETER_SET_NAME.to_string();
            fire(&mut self.callbacks.custom_parameters);
        }
    }

    // ========================================================================
    // Options
    // ========================================================================

    /// Sets an option of the edited package from GUI text.
    ///
    /// The text is converted to the type of the current value. Returns true
    /// if the scaffold type changed other options too, in which case every
    /// option shown should be refreshed.
    pub fn set_scaffold_option(&mut self, name: &str, value: &str) -> Result<bool, GeneratorError> {
        let scaffold_type = self.edit_scaffold_type()?;
        let old_value = self
            .current()
            .option(name)
            .cloned()
            .ok_or_else(|| GeneratorError::unknown_option(name))?;
        let Some(new_value) = old_value.coerce(&OptionValue::from(value)) else {
            warn!(option = name, value, "rejecting invalid option value");
            return Err(GeneratorError::InvalidOptionValue {
                option: name.to_string(),
                value: value.to_string(),
            });
        };

        let settings = self.current_mut().settings_mut();
        settings.insert(name.to_string(), new_value);
        let dependent_changes = scaffold_type.check_options(settings);
        if settings.get(name) != Some(&old_value) {
            self.clear_mesh_edits();
            self.use_custom_package();
            self.generate_mesh()?;
        }
        Ok(dependent_changes)
    }

    // ========================================================================
    // Nested packages
    // ========================================================================

    /// Starts editing the scaffold package held by option `name`.
    pub fn edit_scaffold_package_option(&mut self, name: &str) -> Result<(), GeneratorError> {
        let package = self
            .current()
            .option(name)
            .ok_or_else(|| GeneratorError::unknown_option(name))?
            .as_package()
            .cloned()
            .ok_or_else(|| GeneratorError::NotAScaffoldPackage {
                option: name.to_string(),
            })?;
        self.clear_mesh_edits();
        self.packages.push(package);
        self.option_names.push(name.to_string());
        debug!(option = %self.edit_scaffold_option_display_name(), "editing nested scaffold package");
        self.detect_parameter_set()?;
        self.generate_mesh()
    }

    /// Stops editing the nested package, storing it back in its parent.
    pub fn end_edit_scaffold_package_option(&mut self) -> Result<(), GeneratorError> {
        if self.editing_root_scaffold_package() {
            return Err(GeneratorError::EditingRoot);
        }
        self.update_mesh_edits();
        if let (Some(package), Some(option_name)) = (self.packages.pop(), self.option_names.pop()) {
            self.current_mut()
                .set_option(option_name, OptionValue::from(package));
        }
        self.detect_parameter_set()?;
        self.generate_mesh()
    }

    // ========================================================================
    // Deleted elements
    // ========================================================================

    /// Canonical text of the element ranges deleted after generation.
    pub fn delete_elements_ranges_text(&self) -> String {
        self.delete_ranges.format()
    }

    pub fn delete_element_ranges(&self) -> &ElementRangeSet {
        &self.delete_ranges
    }

    /// Parses element ranges typed by the user, regenerating only if the
    /// canonical ranges changed.
    pub fn set_delete_elements_ranges_text(&mut self, text: &str) -> Result<(), GeneratorError> {
        let outcome = self.delete_ranges.reparse(text);
        if !outcome.changed {
            return Ok(());
        }
        self.delete_ranges = outcome.ranges;
        debug!(ranges = %self.delete_ranges, "delete element ranges changed");
        self.generate_mesh()
    }

    /// Adds the selected elements to the deleted ranges and regenerates.
    pub fn delete_elements_selection(&mut self) -> Result<(), GeneratorError> {
        let selection = ElementRangeSet::from_identifiers(self.host.selected_element_identifiers());
        if selection.is_empty() {
            return Ok(());
        }
        let ranges = selection
            .iter()
            .fold(self.delete_ranges.clone(), |ranges, range| {
                ranges.add_range(range.start(), range.end())
            });
        self.set_delete_elements_ranges_text(&ranges.format())
    }

    /// Destroys generated elements in the delete ranges. Only the root
    /// scaffold is filtered.
    fn delete_elements_in_ranges(&mut self) {
        if self.delete_ranges.is_empty() || !self.editing_root_scaffold_package() {
            return;
        }
        let doomed: Vec<ElementIdentifier> = self
            .host
            .element_identifiers()
            .into_iter()
            .filter(|identifier| self.delete_ranges.contains(*identifier))
            .collect();
        if !doomed.is_empty() {
            debug!(count = doomed.len(), "deleting elements in ranges");
            self.host.destroy_elements(&doomed);
        }
    }

    // ========================================================================
    // Generation
    // ========================================================================

    /// Regenerates the mesh of the edited package and rebuilds its graphics.
    pub fn generate_mesh(&mut self) -> Result<(), GeneratorError> {
        debug!(scaffold_type = %self.edit_scaffold_type_name(), "generating mesh");
        self.generated = false;
        // field borrow keeps the host borrow disjoint
        let package = &self.packages[self.packages.len() - 1];
        self.host.generate(package)?;
        self.generated = true;
        self.delete_elements_in_ranges();
        self.create_graphics();
        fire(&mut self.callbacks.scene_change);
        Ok(())
    }

    /// True once a mesh has been generated.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    fn create_graphics(&mut self) {
        let versions = max_derivative_versions(&self.host);
        let plan = GraphicsPlan::build(&self.display, &self.host.metrics(), &versions);
        self.host.build_graphics(&plan);
        self.update_scene_transformation();
    }

    /// Sets the scene transformation to the product of every package
    /// transformation in the stack.
    fn update_scene_transformation(&mut self) {
        let matrix = Transformation::compose(self.packages.iter().map(ScaffoldPackage::transformation));
        self.host.set_scene_transformation(matrix);
    }

    // ========================================================================
    // Node edits
    // ========================================================================

    /// The host is about to edit node coordinates interactively. The
    /// package becomes custom and its mesh edits are refreshed before the
    /// next save.
    pub fn mark_node_edits(&mut self) {
        self.unsaved_node_edits = true;
        self.use_custom_package();
    }

    pub fn has_unsaved_node_edits(&self) -> bool {
        self.unsaved_node_edits
    }

    fn update_mesh_edits(&mut self) {
        if self.unsaved_node_edits {
            let mesh_edits = self.host.mesh_edits();
            self.current_mut().set_mesh_edits(mesh_edits);
            self.unsaved_node_edits = false;
        }
    }

    fn clear_mesh_edits(&mut self) {
        self.current_mut().set_mesh_edits(None);
        self.unsaved_node_edits = false;
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// Current settings, with nested packages being edited folded back into
    /// the root package.
    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            scaffold_package: self.root_package(),
            delete_element_ranges: self.delete_ranges.format(),
            display: self.display.clone(),
        }
    }

    /// Replaces all settings, e.g. after loading from file, and regenerates.
    pub fn set_settings(&mut self, settings: GeneratorSettings) -> Result<(), GeneratorError> {
        self.delete_ranges = ElementRangeSet::parse(&settings.delete_element_ranges);
        self.display = settings.display;
        self.packages = vec![settings.scaffold_package];
        self.option_names.clear();
        self.detect_parameter_set()?;
        self.generate_mesh()
    }

    /// Loads settings JSON, migrating legacy fields.
    pub fn load_settings_json(&mut self, json: &str) -> Result<(), GeneratorError> {
        let settings = GeneratorSettings::from_json(json, &self.registry)?;
        self.set_settings(settings)
    }

    /// Flushes interactive node edits into the edited package before the
    /// settings are written.
    pub fn update_settings_before_write(&mut self) {
        self.update_mesh_edits();
    }

    /// Settings JSON after flushing node edits.
    pub fn settings_json(&mut self) -> Result<String, GeneratorError> {
        self.update_settings_before_write();
        self.settings().to_json()
    }

    /// Finishes the step by baking the root transformation into the
    /// generated coordinates.
    pub fn done(&mut self) -> Result<(), GeneratorError> {
        if !self.editing_root_scaffold_package() {
            return Err(GeneratorError::EditingNested);
        }
        let transformation = *self.current().transformation();
        self.host.apply_transformation(&transformation)?;
        Ok(())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn current(&self) -> &ScaffoldPackage {
        // the stack always holds the root package
        &self.packages[self.packages.len() - 1]
    }

    fn current_mut(&mut self) -> &mut ScaffoldPackage {
        let last = self.packages.len() - 1;
        &mut self.packages[last]
    }

    fn scaffold_type_of(&self, package: &ScaffoldPackage) -> Result<Arc<dyn ScaffoldType>, GeneratorError> {
        self.registry
            .find(package.scaffold_type_name())
            .ok_or_else(|| GeneratorError::unknown_scaffold_type(package.scaffold_type_name()))
    }

    /// Scaffold type of the parent package and the option being edited in
    /// it, or `None` at the root.
    fn parent(&self) -> Result<Option<(Arc<dyn ScaffoldType>, &str)>, GeneratorError> {
        let (Some(option_name), Some(index)) =
            (self.option_names.last(), self.packages.len().checked_sub(2))
        else {
            return Ok(None);
        };
        let parent = self.scaffold_type_of(&self.packages[index])?;
        Ok(Some((parent, option_name.as_str())))
    }

    /// Root package with every nested package written back into its
    /// parent option.
    fn root_package(&self) -> ScaffoldPackage {
        let parents = self.packages.iter().rev().skip(1);
        let mut folded = self.current().clone();
        for (parent, option_name) in parents.zip(self.option_names.iter().rev()) {
            let mut parent = parent.clone();
            parent.set_option(option_name.clone(), OptionValue::from(folded));
            folded = parent;
        }
        folded
    }
}
