//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for assembling the corridor scene step by step.

use flythrough_core::{
    CameraData, Entity, LightData, Material, PathCurve, Primitive, SceneError, Transform3D, Vec3,
    World,
};

use super::corridor::{build_corridor, CorridorLayout};
use super::flythrough::{animate_camera, CameraPath};

/// Builder for the corridor fly-through scene
///
/// # Example
/// ```ignore
/// let world = SceneBuilder::new()
///     .with_materials(Material::from_rgb("DarkGray", 0.1, 0.1, 0.1), Material::from_rgb("Neon", 0.0, 0.8, 1.0))
///     .add_corridor(&layout, &curve)?
///     .add_flythrough_camera(&path, &curve, 1000, 85.0, CameraData::default())?
///     .add_floor(&layout, 20.0, 10.0)
///     .add_point_light("main_light", Vec3::new(0.0, 10.0, 15.0), 10000.0)
///     .build();
/// ```
pub struct SceneBuilder {
    world: World,
    base_material: Option<String>,
    accent_material: Option<String>,
}

impl SceneBuilder {
    /// Create a new scene builder
    pub fn new() -> Self {
        Self::from_world(World::new())
    }

    /// Start from an existing world, deleting all of its entities first
    ///
    /// Materials already registered in the world are kept.
    pub fn from_world(mut world: World) -> Self {
        world.clear();
        Self {
            world,
            base_material: None,
            accent_material: None,
        }
    }

    /// Register the wall and accent materials
    pub fn with_materials(mut self, base: Material, accent: Material) -> Self {
        self.base_material = Some(base.name.clone());
        self.accent_material = Some(accent.name.clone());
        self.world.add_material(base);
        self.world.add_material(accent);
        self
    }

    /// Add the corridor's block pairs
    ///
    /// Fails if [`with_materials`](Self::with_materials) has not been called.
    pub fn add_corridor(mut self, layout: &CorridorLayout, curve: &PathCurve) -> Result<Self, SceneError> {
        let base = self.world.material(self.base_material.as_deref().unwrap_or("<base>"))?;
        let accent = self.world.material(self.accent_material.as_deref().unwrap_or("<accent>"))?;
        build_corridor(&mut self.world, layout, curve, base, accent);
        Ok(self)
    }

    /// Add the fly-through camera with one location key per frame
    pub fn add_flythrough_camera(
        mut self,
        path: &CameraPath,
        curve: &PathCurve,
        fps: u32,
        pitch_degrees: f32,
        lens: CameraData,
    ) -> Result<Self, SceneError> {
        animate_camera(&mut self.world, path, curve, fps, pitch_degrees, lens)?;
        Ok(self)
    }

    /// Add a floor plane under the whole corridor
    ///
    /// The plane is centered halfway along the corridor and scaled to `width`
    /// across and the corridor's half length plus `margin` along Y.
    pub fn add_floor(mut self, layout: &CorridorLayout, width: f32, margin: f32) -> Self {
        let half_length = layout.length as f32 * layout.spacing / 2.0;
        let transform = Transform3D::from_position(Vec3::new(0.0, half_length, 0.0))
            .with_scale(Vec3::new(width, half_length + margin, 1.0));

        self.world.add_entity(
            Entity::mesh(Primitive::plane())
                .with_name("floor")
                .with_tag("floor")
                .with_transform(transform),
        );
        self
    }

    /// Add a point light
    pub fn add_point_light(mut self, name: &str, position: Vec3, energy: f32) -> Self {
        self.world.add_entity(
            Entity::light(LightData::point(energy))
                .with_name(name)
                .with_tag("light")
                .at(position),
        );
        self
    }

    /// Rewind to the first frame and return the finished world
    pub fn build(mut self) -> World {
        let start = self.world.timeline().frame_start();
        self.world.frame_set(start);
        self.world
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
