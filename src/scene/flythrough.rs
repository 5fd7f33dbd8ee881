//! Camera fly-through
//!
//! The camera is keyed once per frame. Each frame is remapped onto a fractional
//! corridor index and evaluated on the same [`PathCurve`] the blocks use, so the
//! camera follows the corridor's centerline at a much finer grain.

use flythrough_core::{
    CameraData, Channels, Entity, EntityKey, Euler, FrameRemap, PathCurve, SceneError, Timeline,
    Vec3, World,
};

/// Name given to the fly-through camera
pub const CAMERA_NAME: &str = "camera";

/// Camera path parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPath {
    /// Frame-to-index mapping over the whole corridor
    pub remap: FrameRemap,
    /// Distance between corridor indices along Y
    pub spacing: f32,
    /// Camera height
    pub height: f32,
}

impl CameraPath {
    /// Camera location on `frame`
    pub fn location(&self, curve: &PathCurve, frame: u32) -> Vec3 {
        let index = self.remap.index_for_frame(frame);
        Vec3::new(curve.offset(index), index * self.spacing, self.height)
    }

    /// Every `(frame, location)` pair, frames `1..=total_frames`
    pub fn locations<'a>(&'a self, curve: &'a PathCurve) -> impl Iterator<Item = (u32, Vec3)> + 'a {
        self.remap
            .frames()
            .map(move |frame| (frame, self.location(curve, frame)))
    }
}

/// Add a camera and key its location on every frame
///
/// Sets the world's timeline to `1..=total_frames` at `fps` and makes the new
/// camera the active one. Returns the camera's key.
pub fn animate_camera(
    world: &mut World,
    path: &CameraPath,
    curve: &PathCurve,
    fps: u32,
    pitch_degrees: f32,
    lens: CameraData,
) -> Result<EntityKey, SceneError> {
    let total_frames = path.remap.total_frames();
    let frame_end =
        i32::try_from(total_frames).map_err(|_| SceneError::TooManyFrames(total_frames))?;
    let timeline = Timeline::new(1, frame_end, fps)?;
    world.set_timeline(timeline);

    let mut camera = Entity::camera(lens).with_name(CAMERA_NAME).with_tag("camera");
    camera.transform.rotation = Euler::from_degrees(pitch_degrees, 0.0, 0.0);

    for (frame, location) in path.locations(curve) {
        camera.transform.position = location;
        // Every frame is at most `frame_end`, so the cast cannot wrap
        camera.keyframe_insert(Channels::LOCATION, frame as i32);
    }

    let keys = camera.animation.location.len();
    let key = world.add_entity(camera);
    world.set_active_camera(key)?;

    log::debug!(
        "Keyed camera location on {} frames ({} fps)",
        keys,
        timeline.fps()
    );

    Ok(key)
}
