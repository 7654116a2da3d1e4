//! Scene files
//!
//! A scene file is a pretty-printed JSON array of object records:
//!
//! ```json
//! [
//!   { "type": "cube", "color": "#00aaff",
//!     "pos": { "x": 0.0, "y": 5.0, "z": 0.0 },
//!     "scale": { "x": 1.0, "y": 1.0, "z": 1.0 } }
//! ]
//! ```
//!
//! Loading is all-or-nothing: the file is read, parsed and validated before
//! the world is touched.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use log::info;
use sandbox_math::Vec3;

use crate::object::{Color, ObjectKind};
use crate::scene_validator::{SceneValidator, ValidationError};
use crate::world::{ObjectKey, World};

/// `{x, y, z}` as written in scene files
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedVec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vec3> for SavedVec3 {
    fn from(v: Vec3) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl From<SavedVec3> for Vec3 {
    fn from(v: SavedVec3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

/// One object in a scene file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedObject {
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    pub color: Color,
    pub pos: SavedVec3,
    pub scale: SavedVec3,
}

/// The object list of a scene file
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub objects: Vec<SavedObject>,
}

impl Scene {
    /// Snapshot every object in the world
    ///
    /// Positions come from the bodies so a save reflects the latest step.
    pub fn from_world(world: &World) -> Self {
        let objects = world
            .iter()
            .map(|(_key, object)| {
                let position = world
                    .physics()
                    .get_body(object.body)
                    .map(|b| b.position)
                    .unwrap_or(object.transform.position);
                SavedObject {
                    kind: object.kind,
                    color: object.material.base_color,
                    pos: position.into(),
                    scale: object.transform.scale.into(),
                }
            })
            .collect();
        Self { objects }
    }

    /// Parse a scene from JSON text
    ///
    /// The top level must be an array.
    pub fn from_json(text: &str) -> Result<Self, SceneLoadError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if !value.is_array() {
            return Err(SceneLoadError::Validation(vec![ValidationError::NotAnArray]));
        }
        let objects = serde_json::from_value(value)?;
        Ok(Self { objects })
    }

    pub fn to_json(&self) -> Result<String, SceneSaveError> {
        Ok(serde_json::to_string_pretty(&self.objects)?)
    }

    /// Load and parse a scene file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Save the scene as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneSaveError> {
        let contents = self.to_json()?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Replace the world's objects with this scene's
    ///
    /// The scene is validated against the world's object limit first; on
    /// error the world is left untouched.
    pub fn apply(&self, world: &mut World) -> Result<Vec<ObjectKey>, SceneLoadError> {
        SceneValidator::validate_or_error(self, world.max_objects()).map_err(SceneLoadError::Validation)?;

        world.clear();
        let mut keys = Vec::with_capacity(self.objects.len());
        for saved in &self.objects {
            // Validation guarantees room for every record
            let key = world
                .spawn_scaled(saved.kind, saved.color, saved.pos.into(), saved.scale.into())
                .map_err(|e| SceneLoadError::Validation(vec![ValidationError::Spawn(e.to_string())]))?;
            keys.push(key);
        }
        info!("Loaded scene with {} objects", keys.len());
        Ok(keys)
    }
}

/// Save every object in `world` to `path`
pub fn save_world<P: AsRef<Path>>(world: &World, path: P) -> Result<usize, SceneSaveError> {
    let scene = Scene::from_world(world);
    scene.save(&path)?;
    info!("Saved {} objects to {}", scene.objects.len(), path.as_ref().display());
    Ok(scene.objects.len())
}

/// Load `path` into `world`, replacing its objects
pub fn load_world<P: AsRef<Path>>(world: &mut World, path: P) -> Result<usize, SceneLoadError> {
    let scene = Scene::load(path)?;
    Ok(scene.apply(world)?.len())
}

/// Error loading a scene
#[derive(Debug)]
pub enum SceneLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Invalid JSON, unknown object type or bad color
    Parse(serde_json::Error),
    /// Well-formed but unacceptable contents
    Validation(Vec<ValidationError>),
}

impl From<io::Error> for SceneLoadError {
    fn from(e: io::Error) -> Self {
        SceneLoadError::Io(e)
    }
}

impl From<serde_json::Error> for SceneLoadError {
    fn from(e: serde_json::Error) -> Self {
        SceneLoadError::Parse(e)
    }
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::Io(e) => write!(f, "IO error: {}", e),
            SceneLoadError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneLoadError::Validation(errors) => {
                write!(f, "Invalid scene: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SceneLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneLoadError::Io(e) => Some(e),
            SceneLoadError::Parse(e) => Some(e),
            SceneLoadError::Validation(_) => None,
        }
    }
}

/// Error saving a scene
#[derive(Debug)]
pub enum SceneSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    Serialize(serde_json::Error),
}

impl From<io::Error> for SceneSaveError {
    fn from(e: io::Error) -> Self {
        SceneSaveError::Io(e)
    }
}

impl From<serde_json::Error> for SceneSaveError {
    fn from(e: serde_json::Error) -> Self {
        SceneSaveError::Serialize(e)
    }
}

impl std::fmt::Display for SceneSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneSaveError::Io(e) => write!(f, "IO error: {}", e),
            SceneSaveError::Serialize(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for SceneSaveError {}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"[
        {"type": "cube", "color": "#ff0000", "pos": {"x": 1, "y": 5.1, "z": 2}, "scale": {"x": 1, "y": 2, "z": 1}},
        {"type": "wall", "color": "#00ff00", "pos": {"x": -10, "y": 5, "z": 0}, "scale": {"x": 4, "y": 1, "z": 1}}
    ]"##;

    #[test]
    fn test_parse_sample() {
        let scene = Scene::from_json(SAMPLE).unwrap();
        assert_eq!(scene.objects.len(), 2);
        assert_eq!(scene.objects[0].kind, ObjectKind::Cube);
        assert_eq!(scene.objects[1].color, Color::rgb(0, 255, 0));
        assert_eq!(scene.objects[0].scale.y, 2.0);
    }

    #[test]
    fn test_written_field_names() {
        let scene = Scene::from_json(SAMPLE).unwrap();
        let json = scene.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &value[0];
        assert_eq!(first["type"], "cube");
        assert_eq!(first["color"], "#ff0000");
        assert_eq!(first["pos"]["z"], 2.0);
        assert_eq!(first["scale"]["y"], 2.0);
    }

    #[test]
    fn test_non_array_rejected() {
        let err = Scene::from_json(r#"{"type": "cube"}"#).unwrap_err();
        assert!(matches!(err, SceneLoadError::Validation(ref v) if v == &[ValidationError::NotAnArray]));
    }

    #[test]
    fn test_unknown_type_is_parse_error() {
        let text = r##"[{"type": "cone", "color": "#ffffff", "pos": {"x":0,"y":0,"z":0}, "scale": {"x":1,"y":1,"z":1}}]"##;
        assert!(matches!(Scene::from_json(text), Err(SceneLoadError::Parse(_))));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let text = r##"[{"type": "cube", "color": "#ffffff", "pos": {"x":0,"y":0,"z":0}}]"##;
        assert!(matches!(Scene::from_json(text), Err(SceneLoadError::Parse(_))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(Scene::from_json("[{"), Err(SceneLoadError::Parse(_))));
    }

    #[test]
    fn test_apply_replaces_world() {
        let mut world = World::new();
        world.spawn(ObjectKind::Sphere, Color::WHITE, Vec3::new(50.0, 5.0, 0.0)).unwrap();

        let keys = Scene::from_json(SAMPLE).unwrap().apply(&mut world).unwrap();
        assert_eq!(keys.len(), 2);
        assert_eq!(world.len(), 2);
        assert_eq!(world.physics().body_count(), 2);
        let wall = world.get(keys[1]).unwrap();
        assert_eq!(wall.kind, ObjectKind::Wall);
        assert_eq!(wall.transform.scale, Vec3::new(4.0, 1.0, 1.0));
    }

    #[test]
    fn test_apply_over_limit_leaves_world_alone() {
        let mut world = World::new().with_max_objects(1);
        let existing = world.spawn(ObjectKind::Sphere, Color::WHITE, Vec3::ZERO).unwrap();

        let err = Scene::from_json(SAMPLE).unwrap().apply(&mut world).unwrap_err();
        assert!(matches!(err, SceneLoadError::Validation(_)));
        assert_eq!(world.len(), 1);
        assert!(world.get(existing).is_some());
    }

    #[test]
    fn test_empty_array_clears_world() {
        let mut world = World::new();
        world.spawn(ObjectKind::Cube, Color::WHITE, Vec3::ZERO).unwrap();
        Scene::from_json("[]").unwrap().apply(&mut world).unwrap();
        assert!(world.is_empty());
    }
}
