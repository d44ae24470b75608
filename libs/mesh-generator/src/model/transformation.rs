//! Transformation of the edited package from text fields and interactive
//! manipulation in the scene.

use config::constants::VECTOR_DELIMITER;
use glam::DVec3;

use crate::host::MeshHost;
use crate::transform::Transformation;
use crate::vector::{format_vector3, parse_vector3};

use super::{fire, MeshGeneratorModel};

impl<H: MeshHost> MeshGeneratorModel<H> {
    pub fn transformation(&self) -> &Transformation {
        self.current().transformation()
    }

    /// Euler angles in degrees, e.g. `0, 90, 0`.
    pub fn rotation_text(&self) -> String {
        format_vector3(self.transformation().rotation)
    }

    pub fn set_rotation_text(&mut self, text: &str) {
        let rotation = parse_vector3(text, VECTOR_DELIMITER, 0.0);
        if self.current_mut().transformation_mut().set_rotation(rotation) {
            self.update_scene_transformation();
        }
    }

    pub fn scale_text(&self) -> String {
        format_vector3(self.transformation().scale)
    }

    pub fn set_scale_text(&mut self, text: &str) {
        let scale = parse_vector3(text, VECTOR_DELIMITER, 1.0);
        if self.current_mut().transformation_mut().set_scale(scale) {
            self.update_scene_transformation();
        }
    }

    pub fn translation_text(&self) -> String {
        format_vector3(self.transformation().translation)
    }

    pub fn set_translation_text(&mut self, text: &str) {
        let translation = parse_vector3(text, VECTOR_DELIMITER, 0.0);
        if self.current_mut().transformation_mut().set_translation(translation) {
            self.update_scene_transformation();
        }
    }

    /// Rotates the edited package by `angle` radians about `axis`, applied
    /// after its current rotation.
    pub fn interaction_rotate(&mut self, axis: DVec3, angle: f64) {
        let changed = self.current_mut().transformation_mut().rotate_by(axis, angle);
        self.transformation_changed(changed);
    }

    pub fn interaction_scale(&mut self, uniform_scale: f64) {
        let changed = self.current_mut().transformation_mut().scale_by(uniform_scale);
        self.transformation_changed(changed);
    }

    pub fn interaction_translate(&mut self, offset: DVec3) {
        let changed = self.current_mut().transformation_mut().translate_by(offset);
        self.transformation_changed(changed);
    }

    fn transformation_changed(&mut self, changed: bool) {
        if changed {
            self.update_scene_transformation();
            fire(&mut self.callbacks.transformation_change);
        }
    }
}
