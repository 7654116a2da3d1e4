//! Rays and planes for picking
//!
//! Used to place new objects on the ground and to find which object sits
//! under the crosshair.

use crate::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// An infinite plane: points `p` with `normal · p = distance`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Unit normal
    pub normal: Vec3,
    /// Signed distance from origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a plane from a normal and distance; the normal is normalized
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self {
            normal: normal.normalize_or_zero(),
            distance,
        }
    }

    /// Horizontal plane at the given height
    pub fn horizontal(y: f32) -> Self {
        Self::new(Vec3::Y, y)
    }

    /// Signed distance of a point (positive on the normal side)
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }
}

/// A half-line with origin and unit direction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray; the direction is normalized
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the plane, if it is hit in front of the origin
    pub fn intersect_plane(&self, plane: &Plane) -> Option<f32> {
        let denom = plane.normal.dot(self.direction);
        if denom.abs() < 1e-6 {
            // Parallel; a ray lying in the plane counts as hitting at the origin
            return (plane.signed_distance(self.origin).abs() < 1e-6).then_some(0.0);
        }
        let t = -plane.signed_distance(self.origin) / denom;
        (t >= 0.0).then_some(t)
    }

    /// Point where the ray meets the plane
    pub fn intersect_plane_point(&self, plane: &Plane) -> Option<Vec3> {
        self.intersect_plane(plane).map(|t| self.at(t))
    }

    /// Distance to the first hit on a sphere surface, or 0 when starting inside
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        if c <= 0.0 {
            return Some(0.0);
        }
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let t = -b - disc.sqrt();
        (t >= 0.0).then_some(t)
    }

    /// Slab test against an axis-aligned box
    pub fn intersect_aabb(&self, min: Vec3, max: Vec3) -> Option<f32> {
        let mut t_min = 0.0f32;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let origin = self.origin[axis];
            let dir = self.direction[axis];
            if dir.abs() < 1e-8 {
                if origin < min[axis] || origin > max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / dir;
            let mut t0 = (min[axis] - origin) * inv;
            let mut t1 = (max[axis] - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }

        Some(t_min)
    }

    /// Hit test against an oriented box given by center, rotation and half-extents
    pub fn intersect_oriented_box(&self, center: Vec3, rotation: Quat, half_extents: Vec3) -> Option<f32> {
        let inv = rotation.inverse();
        let local = Ray {
            origin: inv * (self.origin - center),
            direction: inv * self.direction,
        };
        local.intersect_aabb(-half_extents, half_extents)
    }
}
