//! Flythrough - procedural corridor scene generator
//!
//! Generates the corridor scene from configuration, validates it, and logs a
//! summary of what was built.

use flythrough::config::AppConfig;
use flythrough::scene::{self, CAMERA_NAME};
use flythrough_core::{SceneError, SceneValidator, World};

fn main() {
    // Load configuration before the logger so the configured level applies
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Flythrough");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    if let Err(e) = run(&config) {
        log::error!("Scene generation failed: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &AppConfig) -> Result<(), SceneError> {
    let world = scene::generate(config)?;

    for error in SceneValidator::validate(&world) {
        log::warn!("Validation: {}", error);
    }

    log_summary(&world, config)
}

fn log_summary(world: &World, config: &AppConfig) -> Result<(), SceneError> {
    let blocks = world.iter_tagged("corridor").count();
    let accents = world.iter_tagged("accent").count();
    let lights = world.iter_tagged("light").count();
    log::info!(
        "Scene: {} entities, {} blocks ({} accent), {} lights, {} keyframes",
        world.entity_count(),
        blocks,
        accents,
        lights,
        world.keyframe_count()
    );

    let curve = config.corridor.to_path_curve()?;
    let peak = world
        .iter_tagged("corridor")
        .filter(|(_, e)| e.has_tag("left"))
        .map(|(_, e)| (e.transform.position.x + config.corridor.half_width).abs())
        .fold(0.0f32, f32::max);
    log::info!(
        "Peak lateral offset {:.3} (bound {:.3})",
        peak,
        curve.max_offset()
    );

    let key = world.require(CAMERA_NAME)?;
    let camera = world
        .get_entity(key)
        .ok_or_else(|| SceneError::EntityNotFound(CAMERA_NAME.to_string()))?;
    let track = &camera.animation.location;
    if let (Some(first), Some(last)) = (track.first(), track.last()) {
        log::info!(
            "Camera: {} keys, frame {} at {:?}, frame {} at {:?}",
            track.len(),
            first.frame,
            first.value.to_array(),
            last.frame,
            last.value.to_array()
        );
    }

    let timeline = world.timeline();
    log::info!(
        "Timeline: frames {}..={} at {} fps ({:.2}s), current frame {}",
        timeline.frame_start(),
        timeline.frame_end(),
        timeline.fps(),
        timeline.duration_secs(),
        timeline.current()
    );

    Ok(())
}
