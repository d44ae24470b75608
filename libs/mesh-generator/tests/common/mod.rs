//! Shared fakes for model integration tests: a host that records every
//! call and a small scaffold library.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use glam::{DMat4, DVec3};
use mesh_generator::graphics::{GraphicsPlan, NodeParameterQuery, RenderMode};
use mesh_generator::host::{HostError, MeshHost, MeshMetrics};
use mesh_generator::scaffold::{
    OptionValue, ScaffoldPackage, ScaffoldRegistry, ScaffoldSettings, ScaffoldType,
};
use mesh_generator::transform::Transformation;
use mesh_generator::MeshGeneratorModel;

pub const BOX: &str = "3D box";
pub const TUBE: &str = "3D tube";
pub const PATH: &str = "1D path";

pub const ELEMENTS_COUNT_1: &str = "Elements count 1";
pub const ELEMENTS_COUNT_2: &str = "Elements count 2";
pub const SYMMETRIC: &str = "Symmetric";
pub const LENGTH: &str = "Length";
pub const NAME: &str = "Name";
pub const CENTRAL_PATH: &str = "Central path";
pub const ELEMENTS_COUNT_AROUND: &str = "Elements count around";

fn settings(entries: Vec<(&str, OptionValue)>) -> ScaffoldSettings {
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

// =============================================================================
// SCAFFOLD TYPES
// =============================================================================

/// Box whose second count follows the first while symmetric.
#[derive(Debug)]
pub struct BoxScaffold;

impl ScaffoldType for BoxScaffold {
    fn name(&self) -> &str {
        BOX
    }

    fn parameter_set_names(&self) -> Vec<String> {
        vec!["Default".to_string(), "Fine".to_string()]
    }

    fn default_options(&self, parameter_set_name: &str) -> ScaffoldSettings {
        let count = if parameter_set_name == "Fine" { 4 } else { 2 };
        settings(vec![
            (ELEMENTS_COUNT_1, OptionValue::Integer(count)),
            (ELEMENTS_COUNT_2, OptionValue::Integer(count)),
            (SYMMETRIC, OptionValue::Bool(false)),
            (LENGTH, OptionValue::Real(1.0)),
            (NAME, OptionValue::Text("box".to_string())),
        ])
    }

    fn ordered_option_names(&self) -> Vec<String> {
        [ELEMENTS_COUNT_1, ELEMENTS_COUNT_2, SYMMETRIC, LENGTH, NAME]
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    fn check_options(&self, settings: &mut ScaffoldSettings) -> bool {
        if let Some(OptionValue::Integer(count)) = settings.get_mut(ELEMENTS_COUNT_1) {
            if *count < 1 {
                *count = 1;
            }
        }
        if settings.get(SYMMETRIC) != Some(&OptionValue::Bool(true)) {
            return false;
        }
        let first = settings.get(ELEMENTS_COUNT_1).cloned();
        match (first, settings.get_mut(ELEMENTS_COUNT_2)) {
            (Some(first), Some(second)) if *second != first => {
                *second = first;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug)]
pub struct PathScaffold;

impl ScaffoldType for PathScaffold {
    fn name(&self) -> &str {
        PATH
    }

    fn parameter_set_names(&self) -> Vec<String> {
        vec!["Default".to_string(), "Long".to_string()]
    }

    fn default_options(&self, parameter_set_name: &str) -> ScaffoldSettings {
        let length = if parameter_set_name == "Long" { 3.0 } else { 1.0 };
        settings(vec![
            (ELEMENTS_COUNT_1, OptionValue::Integer(1)),
            (LENGTH, OptionValue::Real(length)),
        ])
    }

    fn ordered_option_names(&self) -> Vec<String> {
        vec![ELEMENTS_COUNT_1.to_string(), LENGTH.to_string()]
    }
}

/// Tube around a nested central path package.
#[derive(Debug)]
pub struct TubeScaffold;

impl ScaffoldType for TubeScaffold {
    fn name(&self) -> &str {
        TUBE
    }

    fn parameter_set_names(&self) -> Vec<String> {
        vec!["Default".to_string()]
    }

    fn default_options(&self, _parameter_set_name: &str) -> ScaffoldSettings {
        settings(vec![
            (CENTRAL_PATH, ScaffoldPackage::new(&PathScaffold).into()),
            (ELEMENTS_COUNT_AROUND, OptionValue::Integer(8)),
        ])
    }

    fn ordered_option_names(&self) -> Vec<String> {
        vec![CENTRAL_PATH.to_string(), ELEMENTS_COUNT_AROUND.to_string()]
    }

    fn option_valid_scaffold_types(&self, option_name: &str) -> Vec<String> {
        if option_name == CENTRAL_PATH {
            vec![PATH.to_string()]
        } else {
            Vec::new()
        }
    }
}

pub fn registry() -> ScaffoldRegistry {
    let types: Vec<Arc<dyn ScaffoldType>> = vec![
        Arc::new(BoxScaffold),
        Arc::new(TubeScaffold),
        Arc::new(PathScaffold),
    ];
    match ScaffoldRegistry::new(types, BOX) {
        Ok(registry) => registry,
        Err(error) => panic!("test registry: {error}"),
    }
}

// =============================================================================
// HOST
// =============================================================================

/// Host that records calls instead of generating meshes.
#[derive(Debug)]
pub struct RecordingHost {
    pub generated: Vec<ScaffoldPackage>,
    pub element_count: u32,
    pub elements: Vec<u32>,
    pub destroyed: Vec<Vec<u32>>,
    pub selection: Vec<u32>,
    pub plans: Vec<GraphicsPlan>,
    pub visibility: HashMap<String, bool>,
    pub exterior: HashMap<String, bool>,
    pub materials: HashMap<String, String>,
    pub render_modes: HashMap<String, RenderMode>,
    pub scene_transformations: Vec<Option<DMat4>>,
    pub applied: Vec<Transformation>,
    pub metrics: MeshMetrics,
    pub mesh_edits: Option<String>,
    /// Highest version of each node derivative on every node.
    pub derivative_versions: [u32; 7],
    pub node_count: usize,
    pub fail_generate: bool,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            generated: Vec::new(),
            element_count: 12,
            elements: Vec::new(),
            destroyed: Vec::new(),
            selection: Vec::new(),
            plans: Vec::new(),
            visibility: HashMap::new(),
            exterior: HashMap::new(),
            materials: HashMap::new(),
            render_modes: HashMap::new(),
            scene_transformations: Vec::new(),
            applied: Vec::new(),
            metrics: MeshMetrics {
                dimension: 3,
                coordinate_extent: DVec3::new(2.0, 1.0, 1.0),
                line_count: 20,
                total_line_length: 10.0,
                face_count: 16,
                has_radius: false,
            },
            mesh_edits: None,
            derivative_versions: [1; 7],
            node_count: 18,
            fail_generate: false,
        }
    }
}

impl RecordingHost {
    pub fn last_generated(&self) -> &ScaffoldPackage {
        match self.generated.last() {
            Some(package) => package,
            None => panic!("nothing generated"),
        }
    }

    pub fn last_plan(&self) -> &GraphicsPlan {
        match self.plans.last() {
            Some(plan) => plan,
            None => panic!("no graphics built"),
        }
    }

    pub fn last_scene_transformation(&self) -> Option<DMat4> {
        self.scene_transformations.last().copied().flatten()
    }
}

impl NodeParameterQuery for RecordingHost {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn has_node_parameters(&self, _node: usize, derivative: usize, version: u32) -> bool {
        version <= self.derivative_versions[derivative]
    }
}

impl MeshHost for RecordingHost {
    fn generate(&mut self, package: &ScaffoldPackage) -> Result<(), HostError> {
        if self.fail_generate {
            return Err(HostError::new("scaffold generation failed"));
        }
        self.generated.push(package.clone());
        self.elements = (1..=self.element_count).collect();
        Ok(())
    }

    fn metrics(&self) -> MeshMetrics {
        self.metrics
    }

    fn element_identifiers(&self) -> Vec<u32> {
        self.elements.clone()
    }

    fn destroy_elements(&mut self, identifiers: &[u32]) {
        self.elements.retain(|identifier| !identifiers.contains(identifier));
        self.destroyed.push(identifiers.to_vec());
    }

    fn selected_element_identifiers(&self) -> Vec<u32> {
        self.selection.clone()
    }

    fn mesh_edits(&self) -> Option<String> {
        self.mesh_edits.clone()
    }

    fn build_graphics(&mut self, plan: &GraphicsPlan) {
        self.visibility = plan
            .graphics
            .iter()
            .map(|spec| (spec.name.clone(), spec.visible))
            .collect();
        self.plans.push(plan.clone());
    }

    fn set_graphics_visibility(&mut self, name: &str, visible: bool) {
        self.visibility.insert(name.to_string(), visible);
    }

    fn set_graphics_exterior(&mut self, name: &str, exterior: bool) {
        self.exterior.insert(name.to_string(), exterior);
    }

    fn set_graphics_material(&mut self, name: &str, material: &str) {
        self.materials.insert(name.to_string(), material.to_string());
    }

    fn set_graphics_render_mode(&mut self, name: &str, mode: RenderMode) {
        self.render_modes.insert(name.to_string(), mode);
    }

    fn set_scene_transformation(&mut self, matrix: Option<DMat4>) {
        self.scene_transformations.push(matrix);
    }

    fn apply_transformation(&mut self, transformation: &Transformation) -> Result<(), HostError> {
        self.applied.push(*transformation);
        Ok(())
    }
}

pub fn model() -> MeshGeneratorModel<RecordingHost> {
    MeshGeneratorModel::new(RecordingHost::default(), registry())
}

/// Model with an initial mesh generated.
pub fn generated_model() -> MeshGeneratorModel<RecordingHost> {
    let mut model = model();
    if let Err(error) = model.generate_mesh() {
        panic!("initial generation: {error}");
    }
    model
}
