//! Scene error types
//!
//! Errors raised while assembling or animating a scene.

use std::fmt;

use flythrough_math::CurveError;

/// Error type for scene construction
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Curve or frame-remap parameters were rejected
    Curve(CurveError),
    /// No material with this name is registered
    MaterialNotFound(String),
    /// No entity with this name exists in the world
    EntityNotFound(String),
    /// Timeline end precedes its start
    InvalidTimeline { start: i32, end: i32 },
    /// Frame rate must be at least 1
    InvalidFrameRate(u32),
    /// Frame count does not fit the timeline's frame numbers
    TooManyFrames(u32),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Curve(err) => write!(f, "Curve error: {}", err),
            SceneError::MaterialNotFound(name) => write!(f, "Material not found: {}", name),
            SceneError::EntityNotFound(name) => write!(f, "Entity not found: {}", name),
            SceneError::InvalidTimeline { start, end } => {
                write!(f, "Invalid timeline: end frame {} precedes start frame {}", end, start)
            }
            SceneError::InvalidFrameRate(fps) => write!(f, "Invalid frame rate: {}", fps),
            SceneError::TooManyFrames(frames) => {
                write!(f, "Too many frames: {} exceeds the maximum of {}", frames, i32::MAX)
            }
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Curve(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CurveError> for SceneError {
    fn from(err: CurveError) -> Self {
        SceneError::Curve(err)
    }
}
