//! Scene construction
//!
//! [`generate`] runs the whole procedure from configuration: clear, materials,
//! corridor, camera fly-through, floor, lights, and a rewind to the first frame.

mod scene_builder;
pub mod corridor;
pub mod flythrough;

pub use scene_builder::SceneBuilder;
pub use corridor::{block_pairs, BlockPair, CorridorLayout};
pub use flythrough::{CameraPath, CAMERA_NAME};

use flythrough_core::{CameraData, Material, SceneError, Vec3, World};

use crate::config::AppConfig;

/// Generate the corridor scene described by `config`
pub fn generate(config: &AppConfig) -> Result<World, SceneError> {
    // Two blocks per index, plus camera, floor and two lights
    let capacity = config.corridor.length as usize * 2 + 4;
    generate_into(World::with_capacity(capacity), config)
}

/// Generate into an existing world, deleting its entities first
pub fn generate_into(world: World, config: &AppConfig) -> Result<World, SceneError> {
    let curve = config.corridor.to_path_curve()?;
    let layout = config.corridor.to_layout();
    let path = config.animation.to_camera_path(&layout)?;

    let materials = &config.materials;
    let lighting = &config.lighting;
    let lens = CameraData {
        fov_degrees: config.animation.fov_degrees,
        ..CameraData::default()
    };

    let world = SceneBuilder::from_world(world)
        .with_materials(
            Material::from_rgb_array(materials.base_name.clone(), materials.base),
            Material::from_rgb_array(materials.accent_name.clone(), materials.accent),
        )
        .add_corridor(&layout, &curve)?
        .add_flythrough_camera(
            &path,
            &curve,
            config.animation.fps,
            config.animation.camera_pitch_degrees,
            lens,
        )?
        .add_floor(&layout, config.floor.width, config.floor.margin)
        .add_point_light("main_light", lighting.main_position(), lighting.main_energy)
        .add_point_light(
            "end_light",
            Vec3::new(0.0, layout.length as f32 * layout.spacing, lighting.end_height),
            lighting.end_energy,
        )
        .build();

    log::info!(
        "Generated scene: {} entities, {} keyframes over frames {}..={}",
        world.entity_count(),
        world.keyframe_count(),
        world.timeline().frame_start(),
        world.timeline().frame_end()
    );

    Ok(world)
}
