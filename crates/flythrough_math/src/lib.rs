//! Math library for the Flythrough scene generator
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Euler`] - XYZ Euler rotation in radians
//!
//! ## Path Types
//!
//! - [`PathCurve`] - The smoothed-entry lateral curve shared by corridor and camera
//! - [`offset`] - Free-function form of the curve with the default frequency
//! - [`FrameRemap`] - Maps animation frames onto fractional corridor indices
//! - [`SamplePoint`] - An `(index, offset)` pair evaluated on demand

mod vec3;
mod euler;
pub mod curve;
pub mod remap;

pub use vec3::Vec3;
pub use euler::Euler;
pub use curve::{offset, CurveError, PathCurve, SamplePoint};
pub use remap::FrameRemap;
