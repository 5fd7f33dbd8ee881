//! Flythrough - procedural corridor scene generator
//!
//! Builds a corridor of paired blocks that bends along a smoothed-entry curve,
//! plus a floor, lights, and a camera keyed on every frame to fly down the
//! same curve.

pub mod config;
pub mod scene;

pub use scene::{generate, generate_into, SceneBuilder};
