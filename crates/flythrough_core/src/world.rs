//! World container for entities
//!
//! The World is the scene graph the generator builds into: entities keyed by
//! generational [`EntityKey`]s, the material library, the timeline, and the
//! active camera.

use slotmap::{new_key_type, SlotMap};

use crate::animation::Timeline;
use crate::material::{Material, MaterialKey, MaterialLibrary};
use crate::{Entity, SceneError};

new_key_type! {
    /// Generational key to an entity in the world
    pub struct EntityKey;
}

/// The scene containing all entities
pub struct World {
    /// All entities in the world
    entities: SlotMap<EntityKey, Entity>,
    /// Materials referenced by entity material slots
    materials: MaterialLibrary,
    /// Frame range and playhead
    timeline: Timeline,
    /// Camera used to view the scene
    active_camera: Option<EntityKey>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
            materials: MaterialLibrary::new(),
            timeline: Timeline::default(),
            active_camera: None,
        }
    }

    /// Create a world with pre-allocated capacity for entities
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: SlotMap::with_capacity_and_key(capacity),
            ..Self::new()
        }
    }

    // --- Entities ---

    /// Add an entity to the world, returning its key
    pub fn add_entity(&mut self, entity: Entity) -> EntityKey {
        self.entities.insert(entity)
    }

    /// Remove an entity, returning it if it existed
    pub fn remove_entity(&mut self, key: EntityKey) -> Option<Entity> {
        if self.active_camera == Some(key) {
            self.active_camera = None;
        }
        self.entities.remove(key)
    }

    /// Get a reference to an entity by key
    pub fn get_entity(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    /// Get a mutable reference to an entity by key
    pub fn get_entity_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        self.entities.get_mut(key)
    }

    /// Find the first entity with the given name
    pub fn get_by_name(&self, name: &str) -> Option<(EntityKey, &Entity)> {
        self.entities
            .iter()
            .find(|(_, e)| e.name.as_deref() == Some(name))
    }

    /// Find an entity key by name, or fail with [`SceneError::EntityNotFound`]
    pub fn require(&self, name: &str) -> Result<EntityKey, SceneError> {
        self.get_by_name(name)
            .map(|(key, _)| key)
            .ok_or_else(|| SceneError::EntityNotFound(name.to_string()))
    }

    /// Iterate over entities carrying `tag`
    pub fn iter_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = (EntityKey, &'a Entity)> {
        self.entities.iter().filter(move |(_, e)| e.has_tag(tag))
    }

    /// Get the number of entities
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Check if the world has no entities
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Delete every entity
    ///
    /// Materials and the timeline survive, matching how the host treats
    /// object deletion.
    pub fn clear(&mut self) {
        let removed = self.entities.len();
        self.entities.clear();
        self.active_camera = None;
        log::debug!("Cleared {} entities from world", removed);
    }

    /// Iterate over all entities
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    // --- Materials ---

    /// Register a material, returning its key
    pub fn add_material(&mut self, material: Material) -> MaterialKey {
        self.materials.add(material)
    }

    /// Look up a material key by name, or fail with [`SceneError::MaterialNotFound`]
    pub fn material(&self, name: &str) -> Result<MaterialKey, SceneError> {
        self.materials
            .find(name)
            .ok_or_else(|| SceneError::MaterialNotFound(name.to_string()))
    }

    pub fn materials(&self) -> &MaterialLibrary {
        &self.materials
    }

    pub fn materials_mut(&mut self) -> &mut MaterialLibrary {
        &mut self.materials
    }

    // --- Camera ---

    /// Make an existing camera entity the active camera
    pub fn set_active_camera(&mut self, key: EntityKey) -> Result<(), SceneError> {
        match self.entities.get(key) {
            Some(entity) if entity.is_camera() => {
                self.active_camera = Some(key);
                Ok(())
            }
            Some(entity) => Err(SceneError::EntityNotFound(format!(
                "{} (not a camera)",
                entity.name.as_deref().unwrap_or("<unnamed>")
            ))),
            None => Err(SceneError::EntityNotFound("<removed camera>".to_string())),
        }
    }

    pub fn active_camera(&self) -> Option<(EntityKey, &Entity)> {
        let key = self.active_camera?;
        self.entities.get(key).map(|e| (key, e))
    }

    // --- Timeline ---

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Replace the timeline, keeping the playhead on the new start frame
    pub fn set_timeline(&mut self, timeline: Timeline) {
        self.timeline = timeline;
    }

    /// Move to `frame` and evaluate every animated entity
    pub fn frame_set(&mut self, frame: i32) {
        self.timeline.set_current(frame);
        let mut evaluated = 0;
        for entity in self.entities.values_mut().filter(|e| e.is_animated()) {
            entity.evaluate(frame as f32);
            evaluated += 1;
        }
        log::debug!("Frame {}: evaluated {} animated entities", frame, evaluated);
    }

    /// Total keyframes across all entities and channels
    pub fn keyframe_count(&self) -> usize {
        self.entities.values().map(|e| e.animation.key_count()).sum()
    }
}
