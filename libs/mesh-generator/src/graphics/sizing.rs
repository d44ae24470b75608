//! Glyph and axes sizing from mesh extents.

use config::constants::{AXES_SCALE_STEP, GLYPH_WIDTH_EXTENT_FACTOR, GLYPH_WIDTH_LINE_FACTOR};
use glam::DVec3;

/// Power of ten within a factor of ten of `max_range`, used as the size of
/// the world axes. Non-positive ranges give 1.
///
/// # Example
///
/// ```rust
/// use mesh_generator::graphics::axes_scale;
///
/// assert_eq!(axes_scale(35.0), 10.0);
/// assert_eq!(axes_scale(0.0), 1.0);
/// ```
pub fn axes_scale(max_range: f64) -> f64 {
    let mut scale = 1.0;
    if max_range > 0.0 {
        while scale * AXES_SCALE_STEP < max_range {
            scale *= AXES_SCALE_STEP;
        }
        while scale / AXES_SCALE_STEP > max_range {
            scale /= AXES_SCALE_STEP;
        }
    }
    scale
}

/// Fixed glyph width for node points and derivative arrows.
///
/// A tenth of the mean line element length; without lines, a hundredth of
/// the largest coordinate extent (or of 1 if the mesh has no extent).
pub fn glyph_width(line_count: usize, total_line_length: f64, coordinate_extent: DVec3) -> f64 {
    if line_count > 0 {
        let width = GLYPH_WIDTH_LINE_FACTOR * total_line_length / line_count as f64;
        if width != 0.0 {
            return width;
        }
    }
    let mut max_extent = coordinate_extent.max_element();
    if max_extent == 0.0 {
        max_extent = 1.0;
    }
    GLYPH_WIDTH_EXTENT_FACTOR * max_extent
}
