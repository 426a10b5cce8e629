pub mod camera;
pub mod perf;
pub mod projection;
pub mod rendering;
pub mod terrain;
/// Isovoxel - chunked voxel world with painter's-algorithm software
/// rendering under a yaw-rotatable isometric-style projection
pub mod voxel;
pub mod world;

pub use camera::{Camera, CameraController};
pub use perf::{CounterSnapshot, FrameCounters, PerfStats, FRAME_COUNTERS};
pub use projection::Rotation;
pub use rendering::{build_draw_list, DepthEntry, Framebuffer, Renderer, SpriteSheet};
pub use terrain::TerrainGenerator;
pub use voxel::{Block, BlockType, Chunk, ChunkDims};
pub use world::{World, WorldConfig};
