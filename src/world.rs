/// World management: a fixed grid of chunks plus viewport-driven
/// chunk selection for the painter's pipeline.
use crate::camera::Camera;
use crate::count_call;
use crate::perf::FRAME_COUNTERS;
use crate::voxel::{Chunk, ChunkDims};

/// World configuration parameters
#[derive(Debug, Clone)]
pub struct WorldConfig {
    /// Vertical levels per chunk (z axis)
    pub world_height: usize,
    /// World extent in chunks on each axis
    pub chunks_x: usize,
    pub chunks_y: usize,
    /// Chunk extent in blocks on each axis
    pub chunk_size_x: usize,
    pub chunk_size_y: usize,
    /// Screen pixels per block on the ground plane
    pub tile_size: i32,
    /// Extra selection band above the viewport, in pixels. Positive
    /// values shrink the top edge: rows just above the viewport cannot
    /// reach into it even at full stack height, so they are skipped.
    pub margin_top: i32,
    /// Extra selection band below the viewport, in pixels. Tall stacks
    /// anchored below the bottom edge still draw into it.
    pub margin_bottom: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_height: 20,
            chunks_x: 10,
            chunks_y: 10,
            chunk_size_x: 20,
            chunk_size_y: 20,
            tile_size: 16,
            margin_top: 160,
            margin_bottom: 64,
        }
    }
}

impl WorldConfig {
    #[inline]
    pub fn chunk_dims(&self) -> ChunkDims {
        ChunkDims {
            height: self.world_height,
            size_x: self.chunk_size_x,
            size_y: self.chunk_size_y,
        }
    }

    /// Footprint of one chunk in screen pixels, per axis.
    #[inline]
    pub fn chunk_px(&self) -> (i32, i32) {
        (
            self.chunk_size_x as i32 * self.tile_size,
            self.chunk_size_y as i32 * self.tile_size,
        )
    }
}

/// The generated voxel world. Immutable once generation has finished;
/// the frame loop only ever reads it.
pub struct World {
    config: WorldConfig,
    /// Row-major by chunk x: index = cx * chunks_y + cy
    chunks: Vec<Chunk>,
}

impl World {
    /// Assemble a world from pre-built chunks in grid order
    /// (cx outer, cy inner). Normally called by the terrain generator.
    pub fn new(config: WorldConfig, chunks: Vec<Chunk>) -> Self {
        debug_assert_eq!(chunks.len(), config.chunks_x * config.chunks_y);
        Self { config, chunks }
    }

    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    #[inline]
    pub fn chunk(&self, cx: usize, cy: usize) -> &Chunk {
        &self.chunks[cx * self.config.chunks_y + cy]
    }

    #[inline]
    pub fn chunk_mut(&mut self, cx: usize, cy: usize) -> &mut Chunk {
        &mut self.chunks[cx * self.config.chunks_y + cy]
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// All chunks in grid order (for benchmarking/testing)
    pub fn all_chunks(&self) -> Vec<&Chunk> {
        self.chunks.iter().collect()
    }

    /// Select the chunks whose screen footprint can intersect the
    /// viewport for the given camera offset. Pure pixel math on the
    /// unrotated grid; recomputed every frame, no caching.
    ///
    /// Chunks are returned in x-outer, y-inner order. The draw-list
    /// build keeps this order for blocks with equal depth keys.
    pub fn visible_chunks(
        &self,
        camera: &Camera,
        viewport_width: u32,
        viewport_height: u32,
    ) -> Vec<&Chunk> {
        let (chunk_px_x, chunk_px_y) = self.config.chunk_px();
        let cam = camera.offset;

        let start_x = cam.x.div_euclid(chunk_px_x);
        let end_x = ceil_div(cam.x + viewport_width as i32, chunk_px_x);
        let start_y = (cam.y + self.config.margin_top).div_euclid(chunk_px_y);
        let end_y = ceil_div(
            cam.y + viewport_height as i32 + self.config.margin_bottom,
            chunk_px_y,
        );

        // Clip to the world's chunk grid; a fully off-world viewport
        // yields an empty range.
        let start_x = start_x.max(0) as usize;
        let end_x = end_x.clamp(0, self.config.chunks_x as i32) as usize;
        let start_y = start_y.max(0) as usize;
        let end_y = end_y.clamp(0, self.config.chunks_y as i32) as usize;

        let mut selected = Vec::with_capacity(
            end_x.saturating_sub(start_x) * end_y.saturating_sub(start_y),
        );
        for cx in start_x..end_x {
            for cy in start_y..end_y {
                count_call!(FRAME_COUNTERS.chunks_selected);
                selected.push(self.chunk(cx, cy));
            }
        }
        selected
    }
}

/// Ceiling division that agrees with float ceil for negative operands.
#[inline]
fn ceil_div(a: i32, b: i32) -> i32 {
    debug_assert!(b > 0);
    (a + b - 1).div_euclid(b)
}
