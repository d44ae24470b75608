//! # Scaffold Transformation
//!
//! Rotation, scale and translation applied to a generated scaffold, and the
//! 4x4 matrices handed to the scene.
//!
//! ## Conventions
//!
//! Rotation is stored as Euler angles in degrees: azimuth about z, elevation
//! about y, roll about x, composed in ZYX order. The affine matrix is
//! `T · R · S`.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use mesh_generator::transform::Transformation;
//!
//! let mut transformation = Transformation::default();
//! assert!(transformation.matrix().is_none());
//!
//! assert!(transformation.set_translation(DVec3::new(1.0, 0.0, 0.0)));
//! let matrix = transformation.matrix().unwrap();
//! assert_eq!(matrix.transform_point3(DVec3::ZERO), DVec3::new(1.0, 0.0, 0.0));
//! ```

use glam::{DMat4, DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Transformation of a scaffold package.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transformation {
    /// Euler angles in degrees (azimuth, elevation, roll)
    pub rotation: DVec3,
    pub scale: DVec3,
    pub translation: DVec3,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transformation {
    /// No rotation, unit scale, no translation.
    pub const IDENTITY: Self = Self {
        rotation: DVec3::ZERO,
        scale: DVec3::ONE,
        translation: DVec3::ZERO,
    };

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Sets the rotation, returning true if it changed.
    pub fn set_rotation(&mut self, rotation: DVec3) -> bool {
        replace_if_changed(&mut self.rotation, rotation)
    }

    /// Sets the scale, returning true if it changed.
    pub fn set_scale(&mut self, scale: DVec3) -> bool {
        replace_if_changed(&mut self.scale, scale)
    }

    /// Sets the translation, returning true if it changed.
    pub fn set_translation(&mut self, translation: DVec3) -> bool {
        replace_if_changed(&mut self.translation, translation)
    }

    /// Rotation as a quaternion.
    pub fn orientation(&self) -> DQuat {
        let radians = self.rotation * (std::f64::consts::PI / 180.0);
        DQuat::from_euler(EulerRot::ZYX, radians.x, radians.y, radians.z)
    }

    /// Affine matrix `T · R · S`, or `None` for the identity.
    pub fn matrix(&self) -> Option<DMat4> {
        if self.is_identity() {
            return None;
        }
        Some(DMat4::from_scale_rotation_translation(
            self.scale,
            self.orientation(),
            self.translation,
        ))
    }

    /// Applies an extra rotation of `angle` radians about `axis` on top of
    /// the current rotation. Returns true if the rotation changed.
    ///
    /// A zero axis leaves the rotation untouched.
    pub fn rotate_by(&mut self, axis: DVec3, angle: f64) -> bool {
        let Some(axis) = axis.try_normalize() else {
            return false;
        };
        let combined = DQuat::from_axis_angle(axis, angle) * self.orientation();
        let (azimuth, elevation, roll) = combined.to_euler(EulerRot::ZYX);
        let degrees = DVec3::new(azimuth, elevation, roll) * (180.0 / std::f64::consts::PI);
        self.set_rotation(degrees)
    }

    /// Multiplies every scale component by `factor`.
    pub fn scale_by(&mut self, factor: f64) -> bool {
        let scale = self.scale * factor;
        self.set_scale(scale)
    }

    /// Adds `offset` to the translation.
    pub fn translate_by(&mut self, offset: DVec3) -> bool {
        let translation = self.translation + offset;
        self.set_translation(translation)
    }

    /// Composes nested transformations, outermost first.
    ///
    /// Identity transformations are skipped; returns `None` if all are
    /// identity.
    pub fn compose<'a, I>(transformations: I) -> Option<DMat4>
    where
        I: IntoIterator<Item = &'a Transformation>,
    {
        transformations
            .into_iter()
            .filter_map(Transformation::matrix)
            .reduce(|outer, inner| outer * inner)
    }
}

fn replace_if_changed(slot: &mut DVec3, value: DVec3) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
