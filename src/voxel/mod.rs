/// Core voxel data structures for the painter's pipeline
pub mod block_type;
pub mod chunk;
pub mod visibility;

pub use block_type::{BlockType, BLOCK_ID_RANGE, BLOCK_TYPE_COUNT};
pub use chunk::{Chunk, ChunkDims};
pub use visibility::update_chunk_visibility;

use crate::projection::Rotation;

/// Compact per-cell block data. Position is implicit in the chunk's
/// buffer index. `rotation` is stored per block but does not currently
/// affect rendering; `visible` is owned by the visibility pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub block_type: BlockType,
    pub rotation: Rotation,
    pub visible: bool,
}

impl Block {
    #[inline]
    pub const fn new(block_type: BlockType) -> Self {
        Self {
            block_type,
            rotation: Rotation::R0,
            visible: false,
        }
    }

    #[inline]
    pub const fn with_rotation(block_type: BlockType, rotation: Rotation) -> Self {
        Self {
            block_type,
            rotation,
            visible: false,
        }
    }

    #[inline]
    pub const fn air() -> Self {
        Self::new(BlockType::Air)
    }

    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.block_type.is_opaque()
    }
}
