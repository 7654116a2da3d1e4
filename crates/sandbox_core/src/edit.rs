//! Edit-panel fields for the selected object
//!
//! The panel keeps its own copy of the selected object's position, scale
//! and Y rotation. Every frame the fields are pushed back onto the object
//! and its body with [`crate::World::apply_edit`].

use sandbox_math::Vec3;

use crate::SandboxObject;

/// Slider ranges shown by the panel
///
/// The sliders never clamp; values outside a range are shown and kept.
pub const POSITION_RANGE: std::ops::RangeInclusive<f32> = -1000.0..=1000.0;
pub const SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.1..=20.0;
pub const ROTATION_RANGE: std::ops::RangeInclusive<f32> = -std::f32::consts::PI..=std::f32::consts::PI;

/// Smallest scale component a collider accepts
pub const MIN_SCALE: f32 = 0.01;

/// Which group of sliders is visible
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditTab {
    #[default]
    Move,
    Scale,
    Rotate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditFields {
    pub position: Vec3,
    pub scale: Vec3,
    /// Rotation about Y in radians
    pub rotation_y: f32,
}

impl Default for EditFields {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation_y: 0.0,
        }
    }
}

impl EditFields {
    /// Initialise from an object; `body_position` is the live body position
    pub fn from_object(object: &SandboxObject, body_position: Vec3) -> Self {
        Self {
            position: body_position,
            scale: object.transform.scale,
            rotation_y: object.transform.rotation_y(),
        }
    }

    /// Raise scale components below [`MIN_SCALE`] so colliders never collapse
    ///
    /// Any scale a scene file or a slider can produce passes unchanged.
    pub fn sanitized(mut self) -> Self {
        self.scale = self.scale.max(Vec3::splat(MIN_SCALE));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_only_raises_collapsed_scale() {
        let fields = EditFields {
            position: Vec3::new(5000.0, 0.0, 0.0),
            scale: Vec3::new(0.0, 50.0, 0.05),
            rotation_y: 1.0,
        }
        .sanitized();
        assert_eq!(fields.scale, Vec3::new(MIN_SCALE, 50.0, 0.05));
        assert_eq!(fields.position.x, 5000.0);
        assert_eq!(fields.rotation_y, 1.0);
    }
}
