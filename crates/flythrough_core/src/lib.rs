//! Core scene model for Flythrough
//!
//! This crate provides the in-process scene graph that the generator populates:
//!
//! - [`Transform3D`] - Position, Euler rotation, and per-axis scale
//! - [`Material`] / [`MaterialLibrary`] - Named colors shared between entities
//! - [`Entity`] - A mesh, camera, or light with transform, material slots, and animation
//! - [`Primitive`] - Mesh primitives (cube, plane)
//! - [`World`] - Container for all entities, materials, and the timeline
//! - [`EntityKey`] / [`MaterialKey`] - Generational keys into the world
//! - [`KeyframeTrack`] / [`Timeline`] / [`Channels`] - Keyframe animation
//! - [`SceneValidator`] - Sanity checks on a generated world

mod transform;
mod shapes;
mod material;
mod entity;
mod animation;
mod world;
mod error;
pub mod scene_validator;

pub use transform::Transform3D;
pub use shapes::Primitive;
pub use material::{Material, MaterialKey, MaterialLibrary};
pub use entity::{Entity, EntityKind, CameraData, LightData, LightKind};
pub use animation::{Animation, Channels, InterpolationMode, Keyframe, KeyframeTrack, Timeline};
pub use world::{World, EntityKey};
pub use error::SceneError;
pub use scene_validator::{SceneValidator, ValidationError};

// Re-export commonly used types from flythrough_math for convenience
pub use flythrough_math::{Vec3, Euler, PathCurve, FrameRemap, CurveError, SamplePoint};
