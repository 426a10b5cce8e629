/// Chunk storage: one flat contiguous buffer per chunk, indexed by
/// (level, x, y). The linear layout keeps whole levels adjacent in
/// memory, which is the iteration order of both the terrain fill and
/// the draw-list build.
use super::Block;
use glam::IVec2;

/// Grid dimensions of a chunk. Carried by every chunk so that index
/// math never depends on ambient configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChunkDims {
    /// Vertical levels (z axis), level 0 at the bottom.
    pub height: usize,
    pub size_x: usize,
    pub size_y: usize,
}

impl ChunkDims {
    pub const fn volume(&self) -> usize {
        self.height * self.size_x * self.size_y
    }
}

pub struct Chunk {
    /// Position in the world's chunk grid (not in blocks).
    pub position: IVec2,
    dims: ChunkDims,
    blocks: Box<[Block]>,
}

impl Chunk {
    /// Create a chunk with every cell set to air.
    pub fn air(position: IVec2, dims: ChunkDims) -> Self {
        Self::filled(position, dims, Block::air())
    }

    /// Create a chunk with every cell set to the same block.
    pub fn filled(position: IVec2, dims: ChunkDims, block: Block) -> Self {
        Self {
            position,
            dims,
            blocks: vec![block; dims.volume()].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn dims(&self) -> ChunkDims {
        self.dims
    }

    /// First block coordinate of this chunk on each world axis.
    #[inline]
    pub fn block_origin(&self) -> IVec2 {
        IVec2::new(
            self.position.x * self.dims.size_x as i32,
            self.position.y * self.dims.size_y as i32,
        )
    }

    /// Convert local coordinates to the linear buffer index.
    #[inline]
    const fn index(&self, level: usize, x: usize, y: usize) -> usize {
        (level * self.dims.size_x + x) * self.dims.size_y + y
    }

    /// Get block at local coordinates (level < height, x < size_x, y < size_y)
    #[inline]
    pub fn get(&self, level: usize, x: usize, y: usize) -> &Block {
        debug_assert!(level < self.dims.height && x < self.dims.size_x && y < self.dims.size_y);
        &self.blocks[self.index(level, x, y)]
    }

    #[inline]
    pub fn get_mut(&mut self, level: usize, x: usize, y: usize) -> &mut Block {
        debug_assert!(level < self.dims.height && x < self.dims.size_x && y < self.dims.size_y);
        let index = self.index(level, x, y);
        &mut self.blocks[index]
    }

    /// Set block at local coordinates
    #[inline]
    pub fn set(&mut self, level: usize, x: usize, y: usize, block: Block) {
        *self.get_mut(level, x, y) = block;
    }

    /// Signed-coordinate lookup; None when outside this chunk. The
    /// visibility pass treats None as open space.
    #[inline]
    pub fn try_get(&self, level: i32, x: i32, y: i32) -> Option<&Block> {
        if level < 0 || x < 0 || y < 0 {
            return None;
        }
        let (level, x, y) = (level as usize, x as usize, y as usize);
        if level >= self.dims.height || x >= self.dims.size_x || y >= self.dims.size_y {
            return None;
        }
        Some(&self.blocks[self.index(level, x, y)])
    }

    /// All cells in buffer order (level-major, then x, then y).
    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::BlockType;

    const DIMS: ChunkDims = ChunkDims {
        height: 4,
        size_x: 3,
        size_y: 2,
    };

    #[test]
    fn linear_index_is_level_major() {
        let mut chunk = Chunk::air(IVec2::ZERO, DIMS);
        chunk.set(0, 0, 0, Block::new(BlockType::Bedrock));
        chunk.set(0, 0, 1, Block::new(BlockType::Stone));
        chunk.set(0, 1, 0, Block::new(BlockType::Dirt));
        chunk.set(1, 0, 0, Block::new(BlockType::Grass));

        let blocks = chunk.blocks();
        assert_eq!(blocks[0].block_type, BlockType::Bedrock);
        assert_eq!(blocks[1].block_type, BlockType::Stone);
        assert_eq!(blocks[DIMS.size_y].block_type, BlockType::Dirt);
        assert_eq!(
            blocks[DIMS.size_x * DIMS.size_y].block_type,
            BlockType::Grass
        );
    }

    #[test]
    fn set_then_get_round_trips_every_cell() {
        let mut chunk = Chunk::air(IVec2::new(2, -1), DIMS);
        for level in 0..DIMS.height {
            for x in 0..DIMS.size_x {
                for y in 0..DIMS.size_y {
                    chunk.set(level, x, y, Block::new(BlockType::Sand));
                }
            }
        }
        assert!(chunk
            .blocks()
            .iter()
            .all(|b| b.block_type == BlockType::Sand));
        assert_eq!(chunk.blocks().len(), DIMS.volume());
    }

    #[test]
    fn try_get_rejects_out_of_bounds() {
        let chunk = Chunk::air(IVec2::ZERO, DIMS);
        assert!(chunk.try_get(0, 0, 0).is_some());
        assert!(chunk.try_get(-1, 0, 0).is_none());
        assert!(chunk.try_get(0, -1, 0).is_none());
        assert!(chunk.try_get(0, 0, -1).is_none());
        assert!(chunk.try_get(DIMS.height as i32, 0, 0).is_none());
        assert!(chunk.try_get(0, DIMS.size_x as i32, 0).is_none());
        assert!(chunk.try_get(0, 0, DIMS.size_y as i32).is_none());
    }

    #[test]
    fn block_origin_scales_by_chunk_size() {
        let chunk = Chunk::air(IVec2::new(3, -2), DIMS);
        assert_eq!(chunk.block_origin(), IVec2::new(9, -4));
    }
}
