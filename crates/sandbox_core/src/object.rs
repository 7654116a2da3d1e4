//! Sandbox objects and their materials
//!
//! A [`SandboxObject`] is the visual half of a spawned primitive: kind,
//! transform and material. Its physics half lives in the physics world and
//! is linked through [`SandboxObject::body`].

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use sandbox_math::Vec3;
use sandbox_physics::{BodyKey, PhysicsMaterial, RigidBody};
use serde::{Deserialize, Serialize};

use crate::Transform;

/// Edge length of cubes and walls
pub const CUBE_SIZE: f32 = 10.0;
/// Radius of spheres
pub const SPHERE_RADIUS: f32 = 6.0;
/// Mass of dynamic objects
pub const DYNAMIC_MASS: f32 = 2.0;

bitflags! {
    /// Which parts of an object changed since the renderer last looked
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        const NONE = 0;
        const TRANSFORM = 1 << 0;
        const MATERIAL = 1 << 1;
        const ALL = Self::TRANSFORM.bits() | Self::MATERIAL.bits();
    }
}

/// The three spawnable primitives
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    #[default]
    Cube,
    Sphere,
    /// Same geometry as a cube but static
    Wall,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 3] = [ObjectKind::Cube, ObjectKind::Sphere, ObjectKind::Wall];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Cube => "cube",
            ObjectKind::Sphere => "sphere",
            ObjectKind::Wall => "wall",
        }
    }

    /// Walls have zero mass and never move on their own
    pub fn is_static(&self) -> bool {
        matches!(self, ObjectKind::Wall)
    }

    pub fn mass(&self) -> f32 {
        if self.is_static() {
            0.0
        } else {
            DYNAMIC_MASS
        }
    }

    /// Unscaled half-extents of the object's bounds
    pub fn half_extents(&self) -> Vec3 {
        match self {
            ObjectKind::Cube | ObjectKind::Wall => Vec3::splat(CUBE_SIZE * 0.5),
            ObjectKind::Sphere => Vec3::splat(SPHERE_RADIUS),
        }
    }

    /// Build the physics body for this kind at `position`
    pub fn build_body(&self, position: Vec3) -> RigidBody {
        let body = match self {
            ObjectKind::Cube | ObjectKind::Wall => RigidBody::new_box(position, self.half_extents()),
            ObjectKind::Sphere => RigidBody::new_sphere(position, SPHERE_RADIUS),
        };
        body.with_mass(self.mass()).with_material(PhysicsMaterial::OBJECT)
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An sRGB color as stored in scene files and edited by the color picker
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Emissive tint of the selected object
    pub const SELECTION: Self = Self::rgb(0x44, 0x00, 0x00);
    /// Color picker default
    pub const DEFAULT_SPAWN: Self = Self::rgb(0x00, 0xaa, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels in linear space (0.0-1.0) for lighting
    pub fn to_linear(&self) -> [f32; 3] {
        fn channel(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [channel(self.r), channel(self.g), channel(self.b)]
    }
}

impl From<[u8; 3]> for Color {
    fn from(c: [u8; 3]) -> Self {
        Self::rgb(c[0], c[1], c[2])
    }
}

/// A string that isn't a `#rrggbb` color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError(pub String);

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color '{}', expected #rrggbb", self.0)
    }
}

impl std::error::Error for ColorParseError {}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `#rrggbb` or `rrggbb`, any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError(s.to_string()));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorParseError(s.to_string()));
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

/// Visual properties of an object
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub base_color: Color,
    /// Added on top of lighting; used for the selection highlight
    pub emissive: Color,
    pub metalness: f32,
    pub roughness: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self::from_color(Color::WHITE)
    }
}

impl Material {
    pub fn from_color(base_color: Color) -> Self {
        Self {
            base_color,
            emissive: Color::BLACK,
            metalness: 0.1,
            roughness: 0.8,
        }
    }
}

/// A spawned primitive
#[derive(Clone, Debug)]
pub struct SandboxObject {
    pub kind: ObjectKind,
    pub transform: Transform,
    pub material: Material,
    /// The paired body in the physics world
    pub body: BodyKey,
    dirty: DirtyFlags,
}

impl SandboxObject {
    pub fn new(kind: ObjectKind, transform: Transform, material: Material, body: BodyKey) -> Self {
        Self {
            kind,
            transform,
            material,
            body,
            dirty: DirtyFlags::ALL,
        }
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.material.emissive = if highlighted { Color::SELECTION } else { Color::BLACK };
        self.mark_dirty(DirtyFlags::MATERIAL);
    }

    pub fn is_highlighted(&self) -> bool {
        self.material.emissive != Color::BLACK
    }

    /// Scaled half-extents of the object's bounds
    pub fn half_extents(&self) -> Vec3 {
        self.kind.half_extents() * self.transform.scale.abs()
    }

    #[inline]
    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn mark_dirty(&mut self, flags: DirtyFlags) {
        self.dirty |= flags;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = DirtyFlags::NONE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ObjectKind::Wall).unwrap(), "\"wall\"");
        let kind: ObjectKind = serde_json::from_str("\"sphere\"").unwrap();
        assert_eq!(kind, ObjectKind::Sphere);
        assert!(serde_json::from_str::<ObjectKind>("\"pyramid\"").is_err());
    }

    #[test]
    fn test_kind_bodies() {
        let wall = ObjectKind::Wall.build_body(Vec3::ZERO);
        assert!(wall.is_static);
        assert_eq!(wall.mass, 0.0);

        let cube = ObjectKind::Cube.build_body(Vec3::ZERO);
        assert!(!cube.is_static);
        assert_eq!(cube.mass, 2.0);
    }

    #[test]
    fn test_color_hex_parse_and_format() {
        let c: Color = "#FF8800".parse().unwrap();
        assert_eq!(c, Color::rgb(0xff, 0x88, 0x00));
        assert_eq!(c.to_hex(), "#ff8800");
        assert_eq!("00aaff".parse::<Color>().unwrap(), Color::DEFAULT_SPAWN);
    }

    #[test]
    fn test_color_rejects_garbage() {
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
        assert!("red".parse::<Color>().is_err());
        assert!("#ééé".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_serde_as_string() {
        let json = serde_json::to_string(&Color::SELECTION).unwrap();
        assert_eq!(json, "\"#440000\"");
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn test_linear_conversion_endpoints() {
        assert_eq!(Color::BLACK.to_linear(), [0.0, 0.0, 0.0]);
        let white = Color::WHITE.to_linear();
        assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-5));
    }

    #[test]
    fn test_highlight_marks_material_dirty() {
        let mut obj = SandboxObject::new(ObjectKind::Cube, Transform::identity(), Material::default(), BodyKey::default());
        obj.clear_dirty();
        obj.set_highlighted(true);
        assert!(obj.is_highlighted());
        assert!(obj.dirty_flags().contains(DirtyFlags::MATERIAL));
        obj.set_highlighted(false);
        assert_eq!(obj.material.emissive, Color::BLACK);
    }
}
