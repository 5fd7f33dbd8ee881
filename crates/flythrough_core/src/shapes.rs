//! Mesh primitives
//!
//! Primitives are created in **local space**, centered at the origin. The
//! entity transform positions and stretches them in world space.

use flythrough_math::Vec3;
use serde::{Serialize, Deserialize};

/// A mesh primitive and its construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Primitive {
    /// An axis-aligned cube with vertices at ±(size/2)
    Cube {
        /// Full edge length
        size: f32,
    },
    /// A flat square in the XY plane (z = 0)
    Plane {
        /// Full edge length
        size: f32,
    },
}

impl Primitive {
    /// Edge length of the default primitives
    pub const DEFAULT_SIZE: f32 = 2.0;

    /// Default cube (2 units across)
    pub fn cube() -> Self {
        Primitive::Cube { size: Self::DEFAULT_SIZE }
    }

    /// Default plane (2 units across)
    pub fn plane() -> Self {
        Primitive::Plane { size: Self::DEFAULT_SIZE }
    }

    pub fn vertex_count(&self) -> usize {
        match self {
            Primitive::Cube { .. } => 8,
            Primitive::Plane { .. } => 4,
        }
    }

    pub fn face_count(&self) -> usize {
        match self {
            Primitive::Cube { .. } => 6,
            Primitive::Plane { .. } => 1,
        }
    }

    /// Local-space half extents
    pub fn half_extents(&self) -> Vec3 {
        match *self {
            Primitive::Cube { size } => Vec3::new(size, size, size) * 0.5,
            Primitive::Plane { size } => Vec3::new(size * 0.5, size * 0.5, 0.0),
        }
    }
}
