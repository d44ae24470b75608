//! Tests for graphics planning.

use super::*;
use crate::settings::DisplaySettings;
use std::collections::HashSet;

// =============================================================================
// SIZING
// =============================================================================

#[test]
fn test_axes_scale_powers_of_ten() {
    assert_eq!(axes_scale(35.0), 10.0);
    assert_eq!(axes_scale(10.0), 1.0);
    assert_eq!(axes_scale(150.0), 100.0);
    assert!((axes_scale(0.05) - 0.1).abs() < 1e-12);
}

#[test]
fn test_axes_scale_non_positive_range() {
    assert_eq!(axes_scale(0.0), 1.0);
    assert_eq!(axes_scale(-4.0), 1.0);
}

#[test]
fn test_glyph_width_from_lines() {
    let width = glyph_width(4, 8.0, DVec3::new(100.0, 0.0, 0.0));
    assert!((width - 0.2).abs() < 1e-12);
}

#[test]
fn test_glyph_width_without_lines() {
    let width = glyph_width(0, 0.0, DVec3::new(2.0, 5.0, 3.0));
    assert!((width - 0.05).abs() < 1e-12);
    assert!((glyph_width(0, 0.0, DVec3::ZERO) - 0.01).abs() < 1e-12);
}

#[test]
fn test_glyph_width_zero_length_lines_fall_back() {
    let width = glyph_width(3, 0.0, DVec3::new(1.0, 1.0, 1.0));
    assert!((width - 0.01).abs() < 1e-12);
}

// =============================================================================
// DERIVATIVE VERSIONS
// =============================================================================

/// Nodes listed as (node, derivative, version) triples.
struct FakeParameters {
    nodes: usize,
    present: HashSet<(usize, usize, u32)>,
}

impl NodeParameterQuery for FakeParameters {
    fn node_count(&self) -> usize {
        self.nodes
    }

    fn has_node_parameters(&self, node: usize, derivative: usize, version: u32) -> bool {
        version == 1 || self.present.contains(&(node, derivative, version))
    }
}

#[test]
fn test_max_versions_default_to_one() {
    let query = FakeParameters {
        nodes: 8,
        present: HashSet::new(),
    };
    assert_eq!(max_derivative_versions(&query), [1; NODE_DERIVATIVE_COUNT]);
}

#[test]
fn test_max_versions_found_on_different_nodes() {
    let present = [(2, 0, 2), (2, 0, 3), (5, 0, 4), (1, 2, 2)]
        .into_iter()
        .collect();
    let query = FakeParameters { nodes: 6, present };
    let versions = max_derivative_versions(&query);
    assert_eq!(versions[0], 4);
    assert_eq!(versions[1], 1);
    assert_eq!(versions[2], 2);
}

#[test]
fn test_max_versions_stop_at_first_gap() {
    // version 4 without version 3 is never probed
    let present = [(0, 1, 2), (0, 1, 4)].into_iter().collect();
    let query = FakeParameters { nodes: 1, present };
    assert_eq!(max_derivative_versions(&query)[1], 2);
}

#[test]
fn test_max_versions_keep_probing_after_all_derivatives_gain_one() {
    let mut present: HashSet<_> = (0..NODE_DERIVATIVE_COUNT).map(|d| (0, d, 2)).collect();
    present.insert((0, 3, 3));
    let query = FakeParameters { nodes: 1, present };
    let versions = max_derivative_versions(&query);
    assert_eq!(versions[3], 3);
    assert_eq!(versions[0], 2);
}

#[test]
fn test_max_versions_empty_mesh() {
    let query = FakeParameters {
        nodes: 0,
        present: HashSet::new(),
    };
    assert_eq!(max_derivative_versions(&query), [1; NODE_DERIVATIVE_COUNT]);
}

// =============================================================================
// PLAN
// =============================================================================

fn metrics() -> MeshMetrics {
    MeshMetrics {
        dimension: 3,
        coordinate_extent: DVec3::new(35.0, 20.0, 10.0),
        line_count: 10,
        total_line_length: 20.0,
        face_count: 6,
        has_radius: false,
    }
}

fn single(plan: &GraphicsPlan, name: &str) -> GraphicsSpec {
    let mut named: Vec<_> = plan.named(name).cloned().collect();
    assert_eq!(named.len(), 1, "expected one graphics named {name}");
    named.remove(0)
}

#[test]
fn test_plan_sizes() {
    let plan = GraphicsPlan::build(&DisplaySettings::default(), &metrics(), &[1; 7]);
    assert_eq!(plan.axes_scale, 10.0);
    assert!((plan.glyph_width - 0.2).abs() < 1e-12);

    let axes = single(&plan, GRAPHICS_AXES);
    assert_eq!(axes.base_size, DVec3::splat(10.0));
    assert_eq!(axes.label, Label::Text("  10".to_string()));
}

#[test]
fn test_plan_follows_display_visibility() {
    let display = DisplaySettings::default();
    let plan = GraphicsPlan::build(&display, &metrics(), &[1; 7]);

    assert_eq!(single(&plan, GRAPHICS_AXES).visible, display.axes);
    assert_eq!(single(&plan, GRAPHICS_LINES).visible, display.lines);
    assert_eq!(single(&plan, GRAPHICS_SURFACES).visible, display.surfaces);
    assert_eq!(single(&plan, GRAPHICS_NODE_POINTS).visible, display.node_points);
    assert_eq!(single(&plan, GRAPHICS_MARKER_POINTS).visible, display.marker_points);
    assert!(plan
        .graphics
        .iter()
        .filter(|spec| spec.name.starts_with(GRAPHICS_NODE_DERIVATIVES))
        .all(|spec| !spec.visible));
}

#[test]
fn test_plan_order() {
    let plan = GraphicsPlan::build(&DisplaySettings::default(), &metrics(), &[1; 7]);
    let names: Vec<&str> = plan.graphics.iter().map(|spec| spec.name.as_str()).collect();
    assert_eq!(names[0], GRAPHICS_AXES);
    assert_eq!(names[1], GRAPHICS_LINES);
    assert_eq!(names[2], GRAPHICS_NODE_POINTS);
    assert_eq!(names[3], GRAPHICS_NODE_NUMBERS);
    assert_eq!(names.len(), 4 + NODE_DERIVATIVE_COUNT + 4);
    assert_eq!(names[names.len() - 1], GRAPHICS_MARKER_POINTS);
}

#[test]
fn test_derivative_graphics_per_version() {
    let mut display = DisplaySettings::default();
    display.node_derivatives = true;
    let versions = [3, 1, 1, 1, 1, 1, 1];
    let plan = GraphicsPlan::build(&display, &metrics(), &versions);

    let d1_name = node_derivative_graphics_name("D1");
    let d1: Vec<_> = plan.named(&d1_name).collect();
    assert_eq!(d1.len(), 3);
    for (index, spec) in d1.iter().enumerate() {
        let version = index as u32 + 1;
        assert!(spec.visible);
        assert_eq!(spec.label, Label::Text(version.to_string()));
        assert_eq!(
            spec.orientation,
            Orientation::NodeDerivative { derivative: 0, version }
        );
    }

    let d12 = single(&plan, &node_derivative_graphics_name("D12"));
    assert!(!d12.visible);
    assert_eq!(d12.label, Label::None);
    assert_eq!(d12.scale_factors.x, 0.5);
}

#[test]
fn test_model_radius_extrudes_lines() {
    let mut display = DisplaySettings::default();
    display.model_radius = true;
    let mut radius_metrics = metrics();
    radius_metrics.has_radius = true;
    let plan = GraphicsPlan::build(&display, &radius_metrics, &[1; 7]);

    let lines = single(&plan, GRAPHICS_LINES);
    assert_eq!(lines.kind, GraphicsKind::Lines { circle_extrusion: true });
    assert_eq!(lines.orientation, Orientation::ModelRadius);
    assert_eq!(lines.material, MATERIAL_TRANSLUCENT);
    assert_eq!(single(&plan, GRAPHICS_NODE_POINTS).orientation, Orientation::ModelRadius);

    // no radius field: plain lines
    let plan = GraphicsPlan::build(&display, &metrics(), &[1; 7]);
    let lines = single(&plan, GRAPHICS_LINES);
    assert_eq!(lines.kind, GraphicsKind::Lines { circle_extrusion: false });
    assert_eq!(lines.material, MATERIAL_DEFAULT);
}

#[test]
fn test_surfaces_exterior_only_in_3d() {
    let mut display = DisplaySettings::default();
    display.surfaces_exterior = true;
    assert!(surfaces_exterior(&display, 3));
    assert!(!surfaces_exterior(&display, 2));

    let mut flat = metrics();
    flat.dimension = 2;
    let plan = GraphicsPlan::build(&display, &flat, &[1; 7]);
    assert!(!single(&plan, GRAPHICS_SURFACES).exterior);
}

#[test]
fn test_surfaces_material_and_render_mode() {
    let mut display = DisplaySettings::default();
    display.surfaces_translucent = false;
    display.surfaces_wireframe = true;
    let plan = GraphicsPlan::build(&display, &metrics(), &[1; 7]);
    let surfaces = single(&plan, GRAPHICS_SURFACES);
    assert_eq!(surfaces.material, MATERIAL_SOLID);
    assert_eq!(surfaces.render_mode, RenderMode::Wireframe);
}

#[test]
fn test_element_axes_sized_by_dimension() {
    let mut line_mesh = metrics();
    line_mesh.dimension = 1;
    let plan = GraphicsPlan::build(&DisplaySettings::default(), &line_mesh, &[1; 7]);
    let axes = single(&plan, GRAPHICS_ELEMENT_AXES);
    assert_eq!(axes.scale_factors, DVec3::new(ELEMENT_AXES_SCALE, 0.0, 0.0));
    assert_eq!(axes.base_size.y, 2.0 * plan.glyph_width);

    let plan = GraphicsPlan::build(&DisplaySettings::default(), &metrics(), &[1; 7]);
    let axes = single(&plan, GRAPHICS_ELEMENT_AXES);
    assert_eq!(axes.scale_factors, DVec3::splat(ELEMENT_AXES_SCALE));
    assert_eq!(axes.base_size, DVec3::ZERO);
}
