//! Display flag accessors. Setters update the existing graphics in the
//! host without regenerating the mesh.

use config::constants::*;

use crate::error::GeneratorError;
use crate::graphics::{
    lines_material, node_derivative_graphics_name, surfaces_exterior, surfaces_material, RenderMode,
};
use crate::host::MeshHost;
use crate::settings::DisplaySettings;

use super::MeshGeneratorModel;

macro_rules! visibility_flag {
    ($(#[$doc:meta])* $getter:ident, $setter:ident, $field:ident, $graphics:expr) => {
        $(#[$doc])*
        pub fn $getter(&self) -> bool {
            self.display.$field
        }

        pub fn $setter(&mut self, show: bool) {
            self.display.$field = show;
            self.host.set_graphics_visibility($graphics, show);
        }
    };
}

impl<H: MeshHost> MeshGeneratorModel<H> {
    pub fn display_settings(&self) -> &DisplaySettings {
        &self.display
    }

    visibility_flag!(is_display_axes, set_display_axes, axes, GRAPHICS_AXES);
    visibility_flag!(is_display_lines, set_display_lines, lines, GRAPHICS_LINES);
    visibility_flag!(
        is_display_node_points,
        set_display_node_points,
        node_points,
        GRAPHICS_NODE_POINTS
    );
    visibility_flag!(
        is_display_node_numbers,
        set_display_node_numbers,
        node_numbers,
        GRAPHICS_NODE_NUMBERS
    );
    visibility_flag!(
        is_display_element_numbers,
        set_display_element_numbers,
        element_numbers,
        GRAPHICS_ELEMENT_NUMBERS
    );
    visibility_flag!(
        is_display_surfaces,
        set_display_surfaces,
        surfaces,
        GRAPHICS_SURFACES
    );
    visibility_flag!(
        /// Xi direction glyphs at element centres.
        is_display_element_axes,
        set_display_element_axes,
        element_axes,
        GRAPHICS_ELEMENT_AXES
    );
    visibility_flag!(
        is_display_marker_points,
        set_display_marker_points,
        marker_points,
        GRAPHICS_MARKER_POINTS
    );

    pub fn is_display_lines_exterior(&self) -> bool {
        self.display.lines_exterior
    }

    pub fn set_display_lines_exterior(&mut self, exterior: bool) {
        self.display.lines_exterior = exterior;
        self.host.set_graphics_exterior(GRAPHICS_LINES, exterior);
    }

    pub fn is_display_model_radius(&self) -> bool {
        self.display.model_radius
    }

    /// Draws lines as extrusions sized by the radius field. Changing it
    /// rebuilds every graphics.
    pub fn set_display_model_radius(&mut self, show: bool) {
        if show != self.display.model_radius {
            self.display.model_radius = show;
            if self.generated {
                self.create_graphics();
            }
        }
    }

    pub fn is_display_node_derivatives(&self) -> bool {
        self.display.node_derivatives
    }

    pub fn set_display_node_derivatives(&mut self, show: bool) {
        self.display.node_derivatives = show;
        for label in NODE_DERIVATIVE_LABELS {
            let visible = show && self.display.shows_node_derivative_label(label);
            self.host
                .set_graphics_visibility(&node_derivative_graphics_name(label), visible);
        }
    }

    pub fn is_display_node_derivative_label(&self, label: &str) -> bool {
        self.display.shows_node_derivative_label(label)
    }

    /// Shows or hides the arrows of one node derivative, e.g. `D12`.
    pub fn set_display_node_derivative_label(&mut self, label: &str, show: bool) -> Result<(), GeneratorError> {
        if !self.display.set_node_derivative_label(label, show) {
            return Err(GeneratorError::UnknownDerivativeLabel {
                label: label.to_string(),
            });
        }
        let visible = show && self.display.node_derivatives;
        self.host
            .set_graphics_visibility(&node_derivative_graphics_name(label), visible);
        Ok(())
    }

    pub fn is_display_surfaces_exterior(&self) -> bool {
        self.display.surfaces_exterior
    }

    pub fn set_display_surfaces_exterior(&mut self, exterior: bool) {
        self.display.surfaces_exterior = exterior;
        let dimension = self.host.metrics().dimension;
        self.host
            .set_graphics_exterior(GRAPHICS_SURFACES, surfaces_exterior(&self.display, dimension));
    }

    pub fn is_display_surfaces_translucent(&self) -> bool {
        self.display.surfaces_translucent
    }

    /// Switches surface material; radius extruded lines follow it.
    pub fn set_display_surfaces_translucent(&mut self, translucent: bool) {
        self.display.surfaces_translucent = translucent;
        let has_radius = self.host.metrics().has_radius;
        self.host
            .set_graphics_material(GRAPHICS_SURFACES, surfaces_material(&self.display));
        self.host
            .set_graphics_material(GRAPHICS_LINES, lines_material(&self.display, has_radius));
    }

    pub fn is_display_surfaces_wireframe(&self) -> bool {
        self.display.surfaces_wireframe
    }

    pub fn set_display_surfaces_wireframe(&mut self, wireframe: bool) {
        self.display.surfaces_wireframe = wireframe;
        self.host
            .set_graphics_render_mode(GRAPHICS_SURFACES, RenderMode::from_wireframe(wireframe));
    }

    /// True if opaque surfaces are drawn together with lines, so lines must
    /// be offset to stay visible.
    pub fn need_perturb_lines(&self) -> bool {
        if !self.generated || self.host.metrics().face_count == 0 {
            return false;
        }
        self.display.lines && self.display.surfaces && !self.display.surfaces_translucent
    }
}
