//! Corridor block placement
//!
//! Each corridor index gets a left and right block, both shifted by the path
//! curve's offset at that index so the walls bend together and stay a fixed
//! distance apart.

use flythrough_core::{Entity, MaterialKey, PathCurve, Primitive, Transform3D, Vec3, World};

/// Corridor dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorridorLayout {
    /// Number of block pairs
    pub length: u32,
    /// Distance between consecutive pairs along Y
    pub spacing: f32,
    /// Distance from the centerline to each wall
    pub half_width: f32,
    /// Block center height
    pub block_height: f32,
    /// Vertical stretch of accent blocks
    pub accent_scale_z: f32,
}

impl Default for CorridorLayout {
    fn default() -> Self {
        Self {
            length: 60,
            spacing: 2.0,
            half_width: 3.0,
            block_height: 1.0,
            accent_scale_z: 1.5,
        }
    }
}

impl CorridorLayout {
    /// Y coordinate of the pair at `index` (fractional for the camera)
    #[inline]
    pub fn y_at(&self, index: f32) -> f32 {
        index * self.spacing
    }

    /// Y coordinate of the last pair
    pub fn end_y(&self) -> f32 {
        self.y_at(self.length.saturating_sub(1) as f32)
    }
}

/// Placement of one block pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockPair {
    pub index: u32,
    /// Curve offset shared by both blocks
    pub offset: f32,
    pub left: Vec3,
    pub right: Vec3,
    /// Odd pairs carry the accent material on their left block
    pub accent: bool,
}

/// Compute every block pair along the corridor
pub fn block_pairs<'a>(
    layout: &'a CorridorLayout,
    curve: &'a PathCurve,
) -> impl Iterator<Item = BlockPair> + 'a {
    (0..layout.length).map(move |index| {
        let offset = curve.offset(index as f32);
        let y = layout.y_at(index as f32);
        BlockPair {
            index,
            offset,
            left: Vec3::new(-layout.half_width + offset, y, layout.block_height),
            right: Vec3::new(layout.half_width + offset, y, layout.block_height),
            accent: index % 2 != 0,
        }
    })
}

/// Add the corridor's blocks to the world
///
/// Returns the number of blocks created.
pub fn build_corridor(
    world: &mut World,
    layout: &CorridorLayout,
    curve: &PathCurve,
    base: MaterialKey,
    accent: MaterialKey,
) -> usize {
    let mut created = 0;

    for pair in block_pairs(layout, curve) {
        let mut left_transform = Transform3D::from_position(pair.left);
        let mut left = Entity::mesh(Primitive::cube())
            .with_name(format!("block_left_{:03}", pair.index))
            .with_tags(["corridor", "left"]);

        if pair.accent {
            left_transform.scale.z = layout.accent_scale_z;
            left = left.with_tag("accent").with_material(accent);
        } else {
            left = left.with_material(base);
        }
        world.add_entity(left.with_transform(left_transform));

        world.add_entity(
            Entity::mesh(Primitive::cube())
                .with_name(format!("block_right_{:03}", pair.index))
                .with_tags(["corridor", "right"])
                .with_material(base)
                .at(pair.right),
        );

        created += 2;
    }

    log::debug!(
        "Built corridor: {} blocks over {} units",
        created,
        layout.end_y()
    );

    created
}
