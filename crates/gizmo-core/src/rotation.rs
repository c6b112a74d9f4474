//! Incremental rotation composition for the gizmo's target object

use glam::{Mat4, Quat, Vec3};

use crate::raycast::normalize_or_zero;

/// Accumulated orientation, composed one local-axis increment at a time.
///
/// Internally a unit quaternion; re-normalized after every composition so
/// successive small increments never drift away from a valid rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    quat: Quat,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new()
    }
}

impl Rotation {
    /// Identity orientation
    pub fn new() -> Self {
        Self {
            quat: Quat::IDENTITY,
        }
    }

    /// Wrap an existing orientation (normalized on entry)
    pub fn from_quat(quat: Quat) -> Self {
        Self {
            quat: quat.normalize(),
        }
    }

    /// The current orientation as a unit quaternion
    pub fn quat(&self) -> Quat {
        self.quat
    }

    /// Rotate about an axis expressed in the object's *current local
    /// frame*.
    ///
    /// The delta is post-multiplied onto the existing orientation
    /// (`q_new = q_old * q_delta`). Reversing that order would rotate
    /// about the original/world axis instead. A near-zero-length axis is
    /// a no-op.
    pub fn rotate_around_local_axis(&mut self, axis: Vec3, angle_degrees: f32) {
        let axis = normalize_or_zero(axis);
        if axis == Vec3::ZERO {
            return;
        }
        let delta = Quat::from_axis_angle(axis, angle_degrees.to_radians());
        self.quat = (self.quat * delta).normalize();
    }

    /// The orientation as a 4x4 matrix: rotation in the upper-left 3x3
    /// block, identity elsewhere
    pub fn get_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.quat)
    }
}
