//! Materials
//!
//! Materials live in a [`MaterialLibrary`] owned by the world and are referenced
//! from entity material slots by [`MaterialKey`]. Clearing the world's entities
//! leaves the library intact.

use serde::{Serialize, Deserialize};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Generational key to a material in a [`MaterialLibrary`]
    pub struct MaterialKey;
}

/// A named material with a diffuse base color
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material name (unique within a library)
    pub name: String,
    /// Base color as RGBA (each component 0.0-1.0)
    pub base_color: [f32; 4],
}

impl Material {
    /// Create a new material with the given RGBA color
    pub fn new(name: impl Into<String>, r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            name: name.into(),
            base_color: [r, g, b, a],
        }
    }

    /// Create a new opaque material with the given RGB color
    pub fn from_rgb(name: impl Into<String>, r: f32, g: f32, b: f32) -> Self {
        Self::new(name, r, g, b, 1.0)
    }

    /// Create an opaque material from an `[r, g, b]` array
    pub fn from_rgb_array(name: impl Into<String>, rgb: [f32; 3]) -> Self {
        Self::from_rgb(name, rgb[0], rgb[1], rgb[2])
    }
}

/// Storage for materials, addressable by key or name
#[derive(Default)]
pub struct MaterialLibrary {
    materials: SlotMap<MaterialKey, Material>,
}

impl MaterialLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material, returning its key
    ///
    /// A material with the same name is replaced in place and keeps its key.
    pub fn add(&mut self, material: Material) -> MaterialKey {
        if let Some(key) = self.find(&material.name) {
            self.materials[key] = material;
            return key;
        }
        self.materials.insert(material)
    }

    pub fn get(&self, key: MaterialKey) -> Option<&Material> {
        self.materials.get(key)
    }

    /// Find a material key by name
    pub fn find(&self, name: &str) -> Option<MaterialKey> {
        self.materials
            .iter()
            .find(|(_, m)| m.name == name)
            .map(|(key, _)| key)
    }

    pub fn contains(&self, key: MaterialKey) -> bool {
        self.materials.contains_key(key)
    }

    pub fn remove(&mut self, key: MaterialKey) -> Option<Material> {
        self.materials.remove(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
