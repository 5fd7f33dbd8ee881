//! Scene validation
//!
//! Validates a generated [`World`] for common errors. The [`SceneValidator`]
//! checks for issues like empty scenes, duplicate entity names, dangling
//! material slots, keyframes outside the timeline, and extreme positions.

use std::collections::HashSet;

use crate::World;

/// Any position component beyond this is treated as a generation bug
const EXTREME_COORDINATE: f32 = 10000.0;

/// Validation error found in a scene
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// World has no entities
    EmptyScene,
    /// Duplicate entity name found
    DuplicateName(String),
    /// Entity references a material that is not in the library
    MissingMaterial(String),
    /// Entity has a keyframe outside the timeline's frame range
    KeyframeOutsideTimeline { entity: String, frame: i32 },
    /// World has animated entities but no active camera
    MissingActiveCamera,
    /// Entity sits at extreme or non-finite coordinates
    ExtremePosition { entity: String, position: [f32; 3] },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyScene => write!(f, "Scene has no entities"),
            ValidationError::DuplicateName(name) => {
                write!(f, "Duplicate entity name: '{}'", name)
            }
            ValidationError::MissingMaterial(name) => {
                write!(f, "Entity '{}' references a missing material", name)
            }
            ValidationError::KeyframeOutsideTimeline { entity, frame } => {
                write!(f, "Entity '{}' has a keyframe on frame {} outside the timeline", entity, frame)
            }
            ValidationError::MissingActiveCamera => {
                write!(f, "Scene is animated but has no active camera")
            }
            ValidationError::ExtremePosition { entity, position } => {
                write!(
                    f,
                    "Extreme position for '{}': [{}, {}, {}] (component abs > {})",
                    entity, position[0], position[1], position[2], EXTREME_COORDINATE
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Scene validator that checks for common errors
///
/// # Example
/// ```ignore
/// let errors = SceneValidator::validate(&world);
/// for error in &errors {
///     log::warn!("Validation error: {}", error);
/// }
/// ```
pub struct SceneValidator;

impl SceneValidator {
    /// Validate a world, returning all errors found
    pub fn validate(world: &World) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if world.is_empty() {
            errors.push(ValidationError::EmptyScene);
        }

        let timeline = world.timeline();
        let mut seen_names = HashSet::new();
        let mut animated = false;

        for entity in world.iter() {
            let label = entity.name.clone().unwrap_or_else(|| "<unnamed>".to_string());

            if let Some(ref name) = entity.name {
                if !seen_names.insert(name.as_str()) {
                    errors.push(ValidationError::DuplicateName(name.clone()));
                }
            }

            if entity.materials.iter().any(|&key| !world.materials().contains(key)) {
                errors.push(ValidationError::MissingMaterial(label.clone()));
            }

            if let Some((first, last)) = entity.animation.frame_range() {
                animated = true;
                for frame in [first, last] {
                    if !timeline.contains(frame) {
                        errors.push(ValidationError::KeyframeOutsideTimeline {
                            entity: label.clone(),
                            frame,
                        });
                        break;
                    }
                }
            }

            let position = entity.transform.position;
            if !position.is_finite() || position.max_abs_component() > EXTREME_COORDINATE {
                errors.push(ValidationError::ExtremePosition {
                    entity: label,
                    position: position.to_array(),
                });
            }
        }

        if animated && world.active_camera().is_none() {
            errors.push(ValidationError::MissingActiveCamera);
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error(world: &World) -> Result<(), Vec<ValidationError>> {
        let errors = Self::validate(world);
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
    use crate::{CameraData, Channels, Entity, Material, Primitive, Timeline, Vec3};

    fn make_valid_world() -> World {
        let mut world = World::new();
        world.set_timeline(Timeline::new(1, 10, 24).unwrap());
        let base = world.add_material(Material::from_rgb("Base", 0.1, 0.1, 0.1));
        world.add_entity(
            Entity::mesh(Primitive::cube())
                .with_name("block")
                .with_material(base),
        );

        let mut camera = Entity::camera(CameraData::default()).with_name("camera");
        camera.keyframe_insert(Channels::LOCATION, 1);
        camera.keyframe_insert(Channels::LOCATION, 10);
        let camera = world.add_entity(camera);
        world.set_active_camera(camera).unwrap();
        world
    }

    #[test]
    fn test_valid_world() {
        let world = make_valid_world();
        assert!(SceneValidator::validate(&world).is_empty());
        assert!(SceneValidator::validate_or_error(&world).is_ok());
    }

    #[test]
    fn test_empty_world() {
        let errors = SceneValidator::validate(&World::new());
        assert_eq!(errors, vec![ValidationError::EmptyScene]);
    }

    #[test]
    fn test_duplicate_names() {
        let mut world = make_valid_world();
        world.add_entity(Entity::mesh(Primitive::cube()).with_name("block"));
        let errors = SceneValidator::validate(&world);
        assert!(errors.contains(&ValidationError::DuplicateName("block".to_string())));
    }

    #[test]
    fn test_missing_material() {
        let mut world = make_valid_world();
        let key = world.add_material(Material::from_rgb("Temp", 1.0, 0.0, 0.0));
        world.add_entity(Entity::mesh(Primitive::cube()).with_name("orphan").with_material(key));
        world.materials_mut().remove(key);

        let errors = SceneValidator::validate(&world);
        assert!(errors.contains(&ValidationError::MissingMaterial("orphan".to_string())));
    }

    #[test]
    fn test_keyframe_outside_timeline() {
        let mut world = make_valid_world();
        let key = world.require("camera").unwrap();
        world.get_entity_mut(key).unwrap().keyframe_insert(Channels::LOCATION, 50);

        let errors = SceneValidator::validate(&world);
        assert!(errors.contains(&ValidationError::KeyframeOutsideTimeline {
            entity: "camera".to_string(),
            frame: 50,
        }));
    }

    #[test]
    fn test_missing_active_camera() {
        let mut world = make_valid_world();
        let key = world.require("camera").unwrap();
        let camera = world.remove_entity(key).unwrap();
        world.add_entity(camera);

        let errors = SceneValidator::validate(&world);
        assert_eq!(errors, vec![ValidationError::MissingActiveCamera]);
    }

    #[test]
    fn test_extreme_position() {
        let mut world = make_valid_world();
        world.add_entity(
            Entity::mesh(Primitive::cube())
                .with_name("far")
                .at(Vec3::new(0.0, 20000.0, 0.0)),
        );
        world.add_entity(
            Entity::mesh(Primitive::cube())
                .with_name("nan")
                .at(Vec3::new(f32::NAN, 0.0, 0.0)),
        );

        let errors = SceneValidator::validate(&world);
        let extreme: Vec<_> = errors
            .iter()
            .filter(|e| matches!(e, ValidationError::ExtremePosition { .. }))
            .collect();
        assert_eq!(extreme.len(), 2);
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::DuplicateName("block".to_string());
        assert_eq!(err.to_string(), "Duplicate entity name: 'block'");

        let err = ValidationError::KeyframeOutsideTimeline { entity: "camera".to_string(), frame: 0 };
        assert!(err.to_string().contains("frame 0"));
    }
}
