/// Procedural terrain generation.
/// One smooth 2D noise field drives a height map; columns are filled
/// bottom-up with a fixed layer recipe and capped with grass.
use crate::voxel::{update_chunk_visibility, Block, BlockType, Chunk, ChunkDims};
use crate::world::{World, WorldConfig};
use glam::IVec2;
use noise::{NoiseFn, Perlin};

/// Horizontal stretch of the noise field: world coordinates are divided
/// by this before sampling.
pub const NOISE_SCALE: f64 = 10.0;
/// Column height is BASE_HEIGHT + noise * HEIGHT_AMPLITUDE, floored.
pub const BASE_HEIGHT: f64 = 8.0;
pub const HEIGHT_AMPLITUDE: f64 = 5.0;
/// Levels below this are stone; above, dirt (grass cap aside).
pub const DIRT_THRESHOLD: i32 = 3;

pub struct TerrainGenerator {
    seed: u32,
    config: WorldConfig,
}

impl TerrainGenerator {
    pub fn new(seed: u32, config: WorldConfig) -> Self {
        Self { seed, config }
    }

    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate the whole world with seeded Perlin noise.
    /// Deterministic: the same seed yields a bit-identical world.
    pub fn generate(&self) -> World {
        let perlin = Perlin::new(self.seed);
        self.generate_with(&perlin)
    }

    /// Generate with an arbitrary noise source. Tests substitute
    /// `noise::Constant` to pin column heights.
    pub fn generate_with<N>(&self, noise: &N) -> World
    where
        N: NoiseFn<f64, 2> + Sync,
    {
        use rayon::prelude::*;

        let dims = self.config.chunk_dims();
        let positions: Vec<IVec2> = (0..self.config.chunks_x as i32)
            .flat_map(|cx| (0..self.config.chunks_y as i32).map(move |cy| IVec2::new(cx, cy)))
            .collect();

        // Chunks are independent; the ordered collect keeps grid order,
        // so parallelism does not perturb the result.
        let chunks: Vec<Chunk> = positions
            .par_iter()
            .map(|&position| self.generate_chunk(noise, position, dims))
            .collect();

        World::new(self.config.clone(), chunks)
    }

    fn generate_chunk<N>(&self, noise: &N, position: IVec2, dims: ChunkDims) -> Chunk
    where
        N: NoiseFn<f64, 2>,
    {
        let mut chunk = Chunk::air(position, dims);
        let origin = chunk.block_origin();

        for x in 0..dims.size_x {
            for y in 0..dims.size_y {
                let gx = origin.x + x as i32;
                let gy = origin.y + y as i32;
                let height = sample_column_height(noise, gx, gy);
                fill_column(&mut chunk, x, y, height);
            }
        }

        update_chunk_visibility(&mut chunk);
        chunk
    }
}

/// Terrain height of one column in levels, including the bedrock floor.
#[inline]
fn sample_column_height<N: NoiseFn<f64, 2>>(noise: &N, gx: i32, gy: i32) -> i32 {
    let value = noise.get([gx as f64 / NOISE_SCALE, gy as f64 / NOISE_SCALE]);
    (BASE_HEIGHT + value * HEIGHT_AMPLITUDE).floor() as i32
}

/// Fill one column: bedrock floor, stone below the dirt threshold, dirt
/// above it, grass at the top. Columns taller than the world are
/// clipped, losing their upper layers (including the grass cap).
fn fill_column(chunk: &mut Chunk, x: usize, y: usize, height: i32) {
    chunk.set(0, x, y, Block::new(BlockType::Bedrock));

    let top = height.min(chunk.dims().height as i32);
    for level in 1..top {
        let block_type = if level == height - 1 {
            BlockType::Grass
        } else if level < DIRT_THRESHOLD {
            BlockType::Stone
        } else {
            BlockType::Dirt
        };
        chunk.set(level as usize, x, y, Block::new(block_type));
    }
}
