//! Surface response used when a body touches the ground or another body

use serde::{Deserialize, Serialize};

/// How a surface grips and bounces
///
/// Both values live in `0.0..=1.0`. `grip` is the share of sliding speed
/// lost per contact step; `bounce` is the share of approach speed returned.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicsMaterial {
    pub grip: f32,
    pub bounce: f32,
}

impl Default for PhysicsMaterial {
    fn default() -> Self {
        Self::OBJECT
    }
}

impl PhysicsMaterial {
    /// Cubes, spheres and walls
    pub const OBJECT: Self = Self { grip: 0.3, bounce: 0.0 };

    /// The ground slab
    pub const GROUND: Self = Self { grip: 0.5, bounce: 0.0 };

    pub fn new(grip: f32, bounce: f32) -> Self {
        Self {
            grip: grip.clamp(0.0, 1.0),
            bounce: bounce.clamp(0.0, 1.0),
        }
    }

    /// Response for a contact between two surfaces
    ///
    /// Grip is the geometric mean; the bouncier surface wins.
    pub fn mix(&self, other: &Self) -> Self {
        Self {
            grip: (self.grip * other.grip).sqrt(),
            bounce: self.bounce.max(other.bounce),
        }
    }
}
