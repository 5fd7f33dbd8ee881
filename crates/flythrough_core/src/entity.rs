//! Entity types
//!
//! An Entity is an object in the scene: a mesh, a camera, or a light, with a
//! transform, ordered material slots, and optional keyframe animation.

use std::collections::HashSet;

use flythrough_math::Vec3;
use serde::{Serialize, Deserialize};

use crate::animation::{Animation, Channels};
use crate::material::MaterialKey;
use crate::shapes::Primitive;
use crate::Transform3D;

/// Camera lens settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraData {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraData {
    fn default() -> Self {
        Self {
            fov_degrees: 50.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightKind {
    /// Omnidirectional light from a single point
    #[default]
    Point,
}

/// Light settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightData {
    pub kind: LightKind,
    /// Radiant power in watts
    pub energy: f32,
}

impl LightData {
    pub fn point(energy: f32) -> Self {
        Self {
            kind: LightKind::Point,
            energy,
        }
    }
}

/// What an entity is
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    Mesh(Primitive),
    Camera(CameraData),
    Light(LightData),
}

/// An entity in the scene
///
/// Each entity has:
/// - An optional name (for lookup by name)
/// - Tags (for categorization and filtering)
/// - A transform (position, rotation, scale)
/// - A kind (mesh primitive, camera, or light)
/// - Material slots (meshes only, in slot order)
/// - Keyframe animation
pub struct Entity {
    /// Optional name for this entity (for lookup)
    pub name: Option<String>,
    /// Tags for categorization (e.g., "corridor", "accent", "light")
    pub tags: HashSet<String>,
    /// The entity's transform in world space
    pub transform: Transform3D,
    /// What the entity is
    pub kind: EntityKind,
    /// Material slots, in order
    pub materials: Vec<MaterialKey>,
    /// Keyframed transform channels
    pub animation: Animation,
}

impl Entity {
    /// Create a new entity of the given kind at the origin
    pub fn new(kind: EntityKind) -> Self {
        Self {
            name: None,
            tags: HashSet::new(),
            transform: Transform3D::identity(),
            kind,
            materials: Vec::new(),
            animation: Animation::default(),
        }
    }

    /// Create a mesh entity
    pub fn mesh(primitive: Primitive) -> Self {
        Self::new(EntityKind::Mesh(primitive))
    }

    /// Create a camera entity
    pub fn camera(data: CameraData) -> Self {
        Self::new(EntityKind::Camera(data))
    }

    /// Create a light entity
    pub fn light(data: LightData) -> Self {
        Self::new(EntityKind::Light(data))
    }

    /// Set the name of this entity (for lookup)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a tag to this entity
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Add multiple tags to this entity
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for tag in tags {
            self.tags.insert(tag.into());
        }
        self
    }

    /// Set the transform
    pub fn with_transform(mut self, transform: Transform3D) -> Self {
        self.transform = transform;
        self
    }

    /// Set the position
    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    /// Append a material slot
    pub fn with_material(mut self, material: MaterialKey) -> Self {
        self.materials.push(material);
        self
    }

    /// Check if this entity has a specific tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_camera(&self) -> bool {
        matches!(self.kind, EntityKind::Camera(_))
    }

    pub fn is_light(&self) -> bool {
        matches!(self.kind, EntityKind::Light(_))
    }

    pub fn is_mesh(&self) -> bool {
        matches!(self.kind, EntityKind::Mesh(_))
    }

    /// Material in the first slot
    pub fn active_material(&self) -> Option<MaterialKey> {
        self.materials.first().copied()
    }

    /// World-space bounding box `(min, max)` of a mesh
    ///
    /// Rotation is ignored; corridor geometry is axis-aligned. Returns `None`
    /// for cameras and lights.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        match self.kind {
            EntityKind::Mesh(primitive) => {
                let half = primitive.half_extents().component_mul(self.transform.scale).abs();
                let center = self.transform.position;
                Some((center - half, center + half))
            }
            _ => None,
        }
    }

    /// Record the current transform into the selected channels at `frame`
    pub fn keyframe_insert(&mut self, channels: Channels, frame: i32) {
        self.animation.record(channels, frame, &self.transform);
    }

    /// True when any channel has keys
    pub fn is_animated(&self) -> bool {
        !self.animation.is_empty()
    }

    /// Evaluate the animation at `frame` into the transform
    pub fn evaluate(&mut self, frame: f32) {
        self.animation.apply(frame, &mut self.transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Material, MaterialLibrary};

    #[test]
    fn test_mesh_entity() {
        let entity = Entity::mesh(Primitive::cube());
        assert!(entity.is_mesh());
        assert!(!entity.is_camera());
        assert!(entity.materials.is_empty());
        assert!(!entity.is_animated());
    }

    #[test]
    fn test_builder_methods() {
        let entity = Entity::mesh(Primitive::cube())
            .with_name("block")
            .with_tag("corridor")
            .with_tags(["left", "accent"])
            .at(Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(entity.name.as_deref(), Some("block"));
        assert!(entity.has_tag("corridor"));
        assert!(entity.has_tag("left"));
        assert!(entity.has_tag("accent"));
        assert!(!entity.has_tag("right"));
        assert_eq!(entity.transform.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_material_slots() {
        let mut library = MaterialLibrary::new();
        let base = library.add(Material::from_rgb("Base", 0.1, 0.1, 0.1));
        let accent = library.add(Material::from_rgb("Neon", 0.0, 0.8, 1.0));

        let entity = Entity::mesh(Primitive::cube())
            .with_material(accent)
            .with_material(base);

        assert_eq!(entity.materials, vec![accent, base]);
        assert_eq!(entity.active_material(), Some(accent));
    }

    #[test]
    fn test_camera_and_light() {
        let camera = Entity::camera(CameraData::default());
        assert!(camera.is_camera());
        assert!(camera.bounds().is_none());

        let light = Entity::light(LightData::point(10000.0));
        assert!(light.is_light());
        match light.kind {
            EntityKind::Light(data) => {
                assert_eq!(data.kind, LightKind::Point);
                assert_eq!(data.energy, 10000.0);
            }
            _ => panic!("Expected Light kind"),
        }
    }

    #[test]
    fn test_bounds_with_scale() {
        let mut entity = Entity::mesh(Primitive::cube()).at(Vec3::new(-3.0, 4.0, 1.0));
        entity.transform.scale.z = 1.5;

        let (min, max) = entity.bounds().unwrap();
        assert_eq!(min, Vec3::new(-4.0, 3.0, -0.5));
        assert_eq!(max, Vec3::new(-2.0, 5.0, 2.5));
    }

    #[test]
    fn test_keyframe_insert_and_evaluate() {
        let mut camera = Entity::camera(CameraData::default());

        camera.transform.position = Vec3::new(0.0, 0.0, 1.8);
        camera.keyframe_insert(Channels::LOCATION, 1);
        camera.transform.position = Vec3::new(2.0, 10.0, 1.8);
        camera.keyframe_insert(Channels::LOCATION, 11);

        assert!(camera.is_animated());
        assert_eq!(camera.animation.location.len(), 2);

        camera.evaluate(6.0);
        assert_eq!(camera.transform.position, Vec3::new(1.0, 5.0, 1.8));

        camera.evaluate(1.0);
        assert_eq!(camera.transform.position, Vec3::new(0.0, 0.0, 1.8));
    }

    #[test]
    fn test_evaluate_nan_frame_keeps_transform() {
        let mut camera = Entity::camera(CameraData::default());
        camera.keyframe_insert(Channels::LOCATION, 1);
        camera.transform.position = Vec3::new(2.0, 10.0, 1.8);
        camera.keyframe_insert(Channels::LOCATION, 11);

        camera.evaluate(f32::NAN);
        assert_eq!(camera.transform.position, Vec3::new(2.0, 10.0, 1.8));
    }
}
