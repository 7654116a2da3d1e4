//! Scene validation
//!
//! Checks a parsed [`Scene`] before it replaces the world: object count
//! against the limit and collapsed scales. Positions are never checked;
//! anything the world can hold, including objects that fell off the ground,
//! must load back.

use crate::edit::MIN_SCALE;
use crate::scene::Scene;

/// Validation error found in a scene
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Top level of the file isn't a JSON array
    NotAnArray,
    /// More objects than the world allows
    TooManyObjects { count: usize, limit: usize },
    /// Object has a scale component below [`MIN_SCALE`] or not finite
    DegenerateScale { index: usize },
    /// The world refused to spawn a validated object
    Spawn(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NotAnArray => write!(f, "Scene file must contain a JSON array"),
            ValidationError::TooManyObjects { count, limit } => {
                write!(f, "Scene has {} objects, limit is {}", count, limit)
            }
            ValidationError::DegenerateScale { index } => {
                write!(f, "Object {} has a scale below {}", index, MIN_SCALE)
            }
            ValidationError::Spawn(reason) => write!(f, "Spawn failed: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Scene validator that checks for common errors
pub struct SceneValidator;

impl SceneValidator {
    /// Validate a scene, returning all errors found
    ///
    /// `max_objects` of 0 means no limit.
    pub fn validate(scene: &Scene, max_objects: usize) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if max_objects > 0 && scene.objects.len() > max_objects {
            errors.push(ValidationError::TooManyObjects {
                count: scene.objects.len(),
                limit: max_objects,
            });
        }

        for (index, object) in scene.objects.iter().enumerate() {
            let s = object.scale;
            if [s.x, s.y, s.z].iter().any(|c| !c.is_finite() || *c < MIN_SCALE) {
                errors.push(ValidationError::DegenerateScale { index });
            }
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error(scene: &Scene, max_objects: usize) -> Result<(), Vec<ValidationError>> {
        let errors = Self::validate(scene, max_objects);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Color, ObjectKind};
    use crate::scene::{SavedObject, SavedVec3};

    fn object(pos: [f32; 3], scale: [f32; 3]) -> SavedObject {
        SavedObject {
            kind: ObjectKind::Cube,
            color: Color::WHITE,
            pos: SavedVec3 { x: pos[0], y: pos[1], z: pos[2] },
            scale: SavedVec3 { x: scale[0], y: scale[1], z: scale[2] },
        }
    }

    #[test]
    fn test_valid_scene() {
        let scene = Scene {
            objects: vec![object([0.0, 5.0, 0.0], [1.0, 1.0, 1.0])],
        };
        assert!(SceneValidator::validate(&scene, 10).is_empty());
        assert!(SceneValidator::validate_or_error(&scene, 0).is_ok());
    }

    #[test]
    fn test_empty_scene_is_valid() {
        assert!(SceneValidator::validate(&Scene::default(), 1).is_empty());
    }

    #[test]
    fn test_too_many_objects() {
        let scene = Scene {
            objects: vec![object([0.0; 3], [1.0; 3]); 3],
        };
        let errors = SceneValidator::validate(&scene, 2);
        assert_eq!(errors, vec![ValidationError::TooManyObjects { count: 3, limit: 2 }]);
        assert!(SceneValidator::validate(&scene, 0).is_empty());
    }

    #[test]
    fn test_degenerate_scale() {
        let scene = Scene {
            objects: vec![
                object([0.0; 3], [1.0, 0.0, 1.0]),
                object([0.0; 3], [1.0; 3]),
                object([0.0; 3], [f32::NAN, 1.0, 1.0]),
            ],
        };
        let errors = SceneValidator::validate(&scene, 0);
        assert_eq!(
            errors,
            vec![
                ValidationError::DegenerateScale { index: 0 },
                ValidationError::DegenerateScale { index: 2 },
            ]
        );
    }

    #[test]
    fn test_far_away_positions_are_accepted() {
        let scene = Scene {
            objects: vec![
                object([1200.0, -50016.3, 0.0], [1.0; 3]),
                object([20000.0, 0.0, -20000.0], [50.0; 3]),
            ],
        };
        assert!(SceneValidator::validate(&scene, 0).is_empty());
    }

    #[test]
    fn test_error_display() {
        let msg = ValidationError::TooManyObjects { count: 5, limit: 2 }.to_string();
        assert!(msg.contains('5') && msg.contains('2'));
    }
}
