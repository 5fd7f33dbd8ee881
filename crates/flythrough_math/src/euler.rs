//! Euler rotations
//!
//! Rotations are stored as three angles in radians and applied in XYZ order:
//! X first, then Y, then Z (the resulting matrix is `Rz * Ry * Rx`).

use serde::{Serialize, Deserialize};
use crate::Vec3;

/// Rotation as XYZ Euler angles in radians
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Euler {
    /// Rotation about the X axis (pitch in the scene convention)
    pub x: f32,
    /// Rotation about the Y axis
    pub y: f32,
    /// Rotation about the Z axis (heading)
    pub z: f32,
}

impl Euler {
    /// No rotation
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Create from angles in radians
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Create from angles in degrees
    pub fn from_degrees(x: f32, y: f32, z: f32) -> Self {
        Self::new(x.to_radians(), y.to_radians(), z.to_radians())
    }

    /// Angles in degrees as `[x, y, z]`
    pub fn to_degrees(self) -> [f32; 3] {
        [self.x.to_degrees(), self.y.to_degrees(), self.z.to_degrees()]
    }

    /// Row-major 3x3 rotation matrix (`Rz * Ry * Rx`)
    pub fn to_matrix(self) -> [[f32; 3]; 3] {
        let (sx, cx) = self.x.sin_cos();
        let (sy, cy) = self.y.sin_cos();
        let (sz, cz) = self.z.sin_cos();

        [
            [cz * cy, cz * sy * sx - sz * cx, cz * sy * cx + sz * sx],
            [sz * cy, sz * sy * sx + cz * cx, sz * sy * cx - cz * sx],
            [-sy, cy * sx, cy * cx],
        ]
    }

    /// Rotate a vector by this rotation
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let m = self.to_matrix();
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// Component-wise linear interpolation of the angles
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    /// Angles packed into a [`Vec3`] (for keyframe storage)
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Angles unpacked from a [`Vec3`]
    #[inline]
    pub fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
