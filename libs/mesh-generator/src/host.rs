//! # Mesh Host
//!
//! The finite element and scene engine the model drives. The model never
//! owns mesh data; it asks the host to generate, filter and draw it.

use element_ranges::ElementIdentifier;
use glam::{DMat4, DVec3};
use thiserror::Error;

use crate::graphics::{GraphicsPlan, NodeParameterQuery, RenderMode};
use crate::scaffold::ScaffoldPackage;
use crate::transform::Transformation;

/// Failure reported by the host engine.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HostError {
    pub message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Geometric summary of the generated mesh used to size graphics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshMetrics {
    /// Dimension of the highest dimensional non-empty mesh (1 to 3).
    pub dimension: u32,
    /// Per component range (max - min) of node coordinates.
    pub coordinate_extent: DVec3,
    /// Number of line (1D) elements.
    pub line_count: usize,
    /// Summed length of all line elements.
    pub total_line_length: f64,
    /// Number of face (2D) elements.
    pub face_count: usize,
    /// True if the mesh defines a radius field.
    pub has_radius: bool,
}

impl Default for MeshMetrics {
    fn default() -> Self {
        Self {
            dimension: 3,
            coordinate_extent: DVec3::ZERO,
            line_count: 0,
            total_line_length: 0.0,
            face_count: 0,
            has_radius: false,
        }
    }
}

/// Finite element mesh and scene engine.
///
/// Node parameter queries are used to discover how many versions of each
/// node derivative the generated mesh carries.
pub trait MeshHost: NodeParameterQuery {
    /// Replaces the generated region with a fresh mesh for `package`.
    ///
    /// The package transformation is not applied to coordinates; the scene
    /// transformation shows it instead until [`apply_transformation`].
    ///
    /// [`apply_transformation`]: MeshHost::apply_transformation
    fn generate(&mut self, package: &ScaffoldPackage) -> Result<(), HostError>;

    fn metrics(&self) -> MeshMetrics;

    /// Identifiers of the highest dimensional elements.
    fn element_identifiers(&self) -> Vec<ElementIdentifier>;

    /// Destroys elements together with nodes only they use and marker
    /// points embedded in them.
    fn destroy_elements(&mut self, identifiers: &[ElementIdentifier]);

    /// Identifiers of the selected elements, ascending.
    fn selected_element_identifiers(&self) -> Vec<ElementIdentifier>;

    /// Serialized coordinates of interactively edited nodes.
    fn mesh_edits(&self) -> Option<String>;

    /// Removes all graphics and creates those in `plan`.
    fn build_graphics(&mut self, plan: &GraphicsPlan);

    /// Shows or hides every graphics named `name`.
    fn set_graphics_visibility(&mut self, name: &str, visible: bool);

    fn set_graphics_exterior(&mut self, name: &str, exterior: bool);

    fn set_graphics_material(&mut self, name: &str, material: &str);

    fn set_graphics_render_mode(&mut self, name: &str, mode: RenderMode);

    /// Sets the scene transformation, or clears it with `None`.
    fn set_scene_transformation(&mut self, matrix: Option<DMat4>);

    /// Bakes a transformation into the node coordinates.
    fn apply_transformation(&mut self, transformation: &Transformation) -> Result<(), HostError>;
}
