//! # Graphics Planning
//!
//! Computes the graphics that visualize a generated mesh from the display
//! settings and mesh metrics. The host turns each [`GraphicsSpec`] into a
//! scene graphics; nothing here touches the scene directly.
//!
//! ## Graphics
//!
//! ```text
//! displayAxes            world axes sized to the mesh
//! displayLines           line elements (or model radius extrusions)
//! displayNodePoints      node spheres
//! displayNodeNumbers     node identifiers
//! displayNodeDerivatives one arrow graphics per derivative and version
//! displayElementNumbers  element identifiers
//! displaySurfaces        faces
//! displayElementAxes     element xi directions
//! displayMarkerPoints    named marker points embedded in elements
//! ```

mod derivatives;
mod sizing;

pub use derivatives::{max_derivative_versions, NodeParameterQuery, NODE_DERIVATIVE_COUNT};
pub use sizing::{axes_scale, glyph_width};

use config::constants::*;
use glam::DVec3;

use crate::host::MeshMetrics;
use crate::settings::DisplaySettings;
use crate::vector::format_real;

/// Where points graphics are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointDomain {
    /// A single point at the world origin.
    World,
    Nodes,
    /// Centres of the highest dimensional elements.
    Elements,
    /// Nodes in the marker group, at their embedded element locations.
    MarkerNodes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    None,
    AxesXyz,
    Axes123,
    Sphere,
    ArrowSolid,
    Cross,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsKind {
    Points { domain: PointDomain, glyph: Glyph },
    /// Lines, optionally extruded as circles sized by the radius field.
    Lines { circle_extrusion: bool },
    Surfaces,
}

/// Field orienting and scaling a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    None,
    ModelRadius,
    /// Node value of derivative `derivative` at `version`.
    NodeDerivative { derivative: usize, version: u32 },
    /// Derivatives of coordinates with respect to each element xi.
    ElementDerivatives,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    None,
    Text(String),
    /// Node or element identifier.
    Identifier,
    MarkerName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Shaded,
    Wireframe,
}

impl RenderMode {
    pub fn from_wireframe(wireframe: bool) -> Self {
        if wireframe {
            RenderMode::Wireframe
        } else {
            RenderMode::Shaded
        }
    }
}

/// Description of one scene graphics.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsSpec {
    pub name: String,
    pub kind: GraphicsKind,
    pub material: String,
    pub visible: bool,
    pub base_size: DVec3,
    pub scale_factors: DVec3,
    pub orientation: Orientation,
    pub label: Label,
    pub label_offset: DVec3,
    pub exterior: bool,
    pub render_mode: RenderMode,
}

impl GraphicsSpec {
    fn new(name: impl Into<String>, kind: GraphicsKind, material: &str, visible: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            material: material.to_string(),
            visible,
            base_size: DVec3::ZERO,
            scale_factors: DVec3::ZERO,
            orientation: Orientation::None,
            label: Label::None,
            label_offset: DVec3::ZERO,
            exterior: false,
            render_mode: RenderMode::Shaded,
        }
    }

    fn points(name: impl Into<String>, domain: PointDomain, glyph: Glyph, material: &str, visible: bool) -> Self {
        Self::new(name, GraphicsKind::Points { domain, glyph }, material, visible)
    }

    fn sized(mut self, base_size: DVec3, scale_factors: DVec3) -> Self {
        self.base_size = base_size;
        self.scale_factors = scale_factors;
        self
    }

    fn oriented(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    fn labelled(mut self, label: Label) -> Self {
        self.label = label;
        self
    }
}

/// Name of the graphics drawing node derivative `label`.
pub fn node_derivative_graphics_name(label: &str) -> String {
    format!("{GRAPHICS_NODE_DERIVATIVES}{label}")
}

/// Material for surfaces.
pub fn surfaces_material(display: &DisplaySettings) -> &'static str {
    if display.surfaces_translucent {
        MATERIAL_TRANSLUCENT
    } else {
        MATERIAL_SOLID
    }
}

/// Material for lines; only radius extrusions follow surface translucency.
pub fn lines_material(display: &DisplaySettings, has_radius: bool) -> &'static str {
    if display.surfaces_translucent && uses_model_radius(display, has_radius) {
        MATERIAL_TRANSLUCENT
    } else {
        MATERIAL_DEFAULT
    }
}

/// Surfaces of a 3D mesh can be restricted to the exterior; lower
/// dimensional meshes always draw every face.
pub fn surfaces_exterior(display: &DisplaySettings, dimension: u32) -> bool {
    display.surfaces_exterior && dimension == 3
}

fn uses_model_radius(display: &DisplaySettings, has_radius: bool) -> bool {
    display.model_radius && has_radius
}

/// Ordered graphics for one generated mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicsPlan {
    pub axes_scale: f64,
    pub glyph_width: f64,
    pub graphics: Vec<GraphicsSpec>,
}

impl GraphicsPlan {
    /// Plans all graphics for a mesh.
    ///
    /// `derivative_versions` holds the highest version of each node
    /// derivative, as returned by [`max_derivative_versions`].
    pub fn build(
        display: &DisplaySettings,
        metrics: &MeshMetrics,
        derivative_versions: &[u32; NODE_DERIVATIVE_COUNT],
    ) -> Self {
        let axes_scale = axes_scale(metrics.coordinate_extent.max_element());
        let glyph_width = glyph_width(
            metrics.line_count,
            metrics.total_line_length,
            metrics.coordinate_extent,
        );
        let radius = uses_model_radius(display, metrics.has_radius);
        let mut graphics = Vec::new();

        graphics.push(
            GraphicsSpec::points(GRAPHICS_AXES, PointDomain::World, Glyph::AxesXyz, MATERIAL_AXES, display.axes)
                .sized(DVec3::splat(axes_scale), DVec3::ZERO)
                .labelled(Label::Text(format!("  {}", format_real(axes_scale, FLOAT_SIGNIFICANT_DIGITS)))),
        );

        let mut lines = GraphicsSpec::new(
            GRAPHICS_LINES,
            GraphicsKind::Lines { circle_extrusion: radius },
            lines_material(display, metrics.has_radius),
            display.lines,
        );
        lines.exterior = display.lines_exterior;
        if radius {
            lines = lines
                .sized(DVec3::ZERO, DVec3::splat(MODEL_RADIUS_SCALE_FACTOR))
                .oriented(Orientation::ModelRadius);
        }
        graphics.push(lines);

        let node_points = GraphicsSpec::points(
            GRAPHICS_NODE_POINTS,
            PointDomain::Nodes,
            Glyph::Sphere,
            MATERIAL_NODE_POINTS,
            display.node_points,
        );
        graphics.push(if radius {
            node_points
                .sized(DVec3::ZERO, DVec3::splat(MODEL_RADIUS_SCALE_FACTOR))
                .oriented(Orientation::ModelRadius)
        } else {
            node_points.sized(DVec3::splat(glyph_width), DVec3::ZERO)
        });

        graphics.push(
            GraphicsSpec::points(
                GRAPHICS_NODE_NUMBERS,
                PointDomain::Nodes,
                Glyph::None,
                MATERIAL_NODE_NUMBERS,
                display.node_numbers,
            )
            .labelled(Label::Identifier),
        );

        for (derivative, label) in NODE_DERIVATIVE_LABELS.iter().enumerate() {
            let versions = derivative_versions[derivative].max(1);
            let visible = display.node_derivatives && display.shows_node_derivative_label(label);
            for version in 1..=versions {
                let mut arrow = GraphicsSpec::points(
                    node_derivative_graphics_name(label),
                    PointDomain::Nodes,
                    Glyph::ArrowSolid,
                    NODE_DERIVATIVE_MATERIALS[derivative],
                    visible,
                )
                .sized(
                    DVec3::new(0.0, glyph_width, glyph_width),
                    DVec3::new(NODE_DERIVATIVE_SCALES[derivative], 0.0, 0.0),
                )
                .oriented(Orientation::NodeDerivative { derivative, version });
                if versions > 1 {
                    arrow.label_offset = DVec3::new(DERIVATIVE_LABEL_OFFSET, 0.0, 0.0);
                    arrow.label = Label::Text(version.to_string());
                }
                graphics.push(arrow);
            }
        }

        graphics.push(
            GraphicsSpec::points(
                GRAPHICS_ELEMENT_NUMBERS,
                PointDomain::Elements,
                Glyph::None,
                MATERIAL_ELEMENT_NUMBERS,
                display.element_numbers,
            )
            .labelled(Label::Identifier),
        );

        let mut surfaces = GraphicsSpec::new(
            GRAPHICS_SURFACES,
            GraphicsKind::Surfaces,
            surfaces_material(display),
            display.surfaces,
        );
        surfaces.exterior = surfaces_exterior(display, metrics.dimension);
        surfaces.render_mode = RenderMode::from_wireframe(display.surfaces_wireframe);
        graphics.push(surfaces);

        let (base_size, scale_factors) = match metrics.dimension {
            1 => (
                DVec3::new(0.0, 2.0 * glyph_width, 2.0 * glyph_width),
                DVec3::new(ELEMENT_AXES_SCALE, 0.0, 0.0),
            ),
            2 => (
                DVec3::new(0.0, 0.0, 2.0 * glyph_width),
                DVec3::new(ELEMENT_AXES_SCALE, ELEMENT_AXES_SCALE, 0.0),
            ),
            _ => (DVec3::ZERO, DVec3::splat(ELEMENT_AXES_SCALE)),
        };
        graphics.push(
            GraphicsSpec::points(
                GRAPHICS_ELEMENT_AXES,
                PointDomain::Elements,
                Glyph::Axes123,
                MATERIAL_ELEMENT_AXES,
                display.element_axes,
            )
            .sized(base_size, scale_factors)
            .oriented(Orientation::ElementDerivatives),
        );

        graphics.push(
            GraphicsSpec::points(
                GRAPHICS_MARKER_POINTS,
                PointDomain::MarkerNodes,
                Glyph::Cross,
                MATERIAL_MARKER_POINTS,
                display.marker_points,
            )
            .sized(DVec3::splat(2.0 * glyph_width), DVec3::ZERO)
            .labelled(Label::MarkerName),
        );

        Self {
            axes_scale,
            glyph_width,
            graphics,
        }
    }

    /// All graphics with the given name.
    pub fn named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a GraphicsSpec> + 'a {
        self.graphics.iter().filter(move |spec| spec.name == name)
    }
}

#[cfg(test)]
mod tests;
