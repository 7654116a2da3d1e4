//! Black hole: an inverse-distance point attractor with a capture radius
//!
//! Each tick every dynamic body is either pulled toward the hole or, when it
//! is already inside the capture radius, reported as captured. Removing the
//! captured bodies (and whatever owns them) is left to the caller.

use crate::body::BodyKey;
use crate::world::PhysicsWorld;
use sandbox_math::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlackHole {
    pub enabled: bool,
    pub position: Vec3,
    /// Force at unit distance; falls off as 1/distance
    pub strength: f32,
    /// Bodies closer than this are consumed
    pub capture_radius: f32,
}

impl Default for BlackHole {
    fn default() -> Self {
        Self {
            enabled: false,
            position: Vec3::new(0.0, 50.0, 0.0),
            strength: 20000.0,
            capture_radius: 10.0,
        }
    }
}

/// What the black hole does to a body at a given position
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pull {
    Force(Vec3),
    Captured,
}

impl BlackHole {
    /// Pull on a body at `position`
    pub fn pull_at(&self, position: Vec3) -> Pull {
        let delta = self.position - position;
        let dist = delta.length();
        if dist < self.capture_radius || dist <= f32::EPSILON {
            return Pull::Captured;
        }
        Pull::Force(delta / dist * (self.strength / dist))
    }

    /// Apply the pull to every dynamic body and return the captured ones
    ///
    /// Static bodies are skipped entirely. Does nothing when disabled.
    pub fn apply(&self, physics: &mut PhysicsWorld) -> Vec<BodyKey> {
        let mut captured = Vec::new();
        if !self.enabled {
            return captured;
        }

        let keys: Vec<BodyKey> = physics.body_keys().collect();
        for key in keys {
            let Some(body) = physics.get_body_mut(key) else {
                continue;
            };
            if body.is_static {
                continue;
            }
            match self.pull_at(body.position) {
                Pull::Force(force) => body.apply_force(force),
                Pull::Captured => captured.push(key),
            }
        }
        captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::RigidBody;

    fn hole() -> BlackHole {
        BlackHole {
            enabled: true,
            position: Vec3::ZERO,
            strength: 100.0,
            capture_radius: 10.0,
        }
    }

    #[test]
    fn test_inverse_distance_force() {
        match hole().pull_at(Vec3::new(20.0, 0.0, 0.0)) {
            Pull::Force(f) => {
                assert!((f.x + 5.0).abs() < 1e-4);
                assert_eq!(f.y, 0.0);
            }
            Pull::Captured => panic!("body outside radius was captured"),
        }
    }

    #[test]
    fn test_capture_inside_radius() {
        assert_eq!(hole().pull_at(Vec3::new(9.9, 0.0, 0.0)), Pull::Captured);
        assert_eq!(hole().pull_at(Vec3::ZERO), Pull::Captured);
    }

    #[test]
    fn test_apply_skips_static_and_reports_captures() {
        let mut physics = PhysicsWorld::new();
        let near = physics.add_body(RigidBody::new_sphere(Vec3::new(1.0, 0.0, 0.0), 1.0));
        let far = physics.add_body(RigidBody::new_sphere(Vec3::new(50.0, 0.0, 0.0), 1.0));
        let wall = physics.add_body(RigidBody::new_static_box(Vec3::new(2.0, 0.0, 0.0), Vec3::ONE));

        let captured = hole().apply(&mut physics);
        assert_eq!(captured, vec![near]);
        assert!(physics.get_body(far).unwrap().force.x < 0.0);
        assert_eq!(physics.get_body(wall).unwrap().force, Vec3::ZERO);
    }

    #[test]
    fn test_disabled_does_nothing() {
        let mut physics = PhysicsWorld::new();
        let key = physics.add_body(RigidBody::new_sphere(Vec3::new(1.0, 0.0, 0.0), 1.0));
        let off = BlackHole {
            enabled: false,
            ..hole()
        };
        assert!(off.apply(&mut physics).is_empty());
        assert_eq!(physics.get_body(key).unwrap().force, Vec3::ZERO);
    }
}
