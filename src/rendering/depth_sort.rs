/// Painter's-algorithm draw-list construction.
/// Every visible block becomes one entry keyed by a scalar depth; the
/// sorted list is blitted back-to-front, so later entries overpaint
/// earlier ones. The depth key is recomputed from the camera yaw every
/// frame; nothing is cached across frames.
use crate::count_call;
use crate::perf::FRAME_COUNTERS;
use crate::projection::Rotation;
use crate::voxel::{Block, Chunk};

/// Weight of the rotated y coordinate in the depth key. One step down
/// the screen outranks any level difference smaller than the weight; a
/// gap of exactly the weight ties and falls to the level tie-break.
pub const DEPTH_Y_WEIGHT: i32 = 16;

/// One visible block, positioned in rotated grid space.
pub struct DepthEntry<'a> {
    pub block: &'a Block,
    pub rotated_x: i32,
    pub rotated_y: i32,
    pub level: i32,
    pub depth: i32,
}

/// Flatten the selected chunks into a back-to-front draw list for the
/// given yaw.
///
/// The sort is stable on (depth, level): within a rotated column the
/// lowest level paints first, and blocks that still tie keep the
/// selector's x-outer, y-inner chunk order. The whole ordering is
/// deterministic for a fixed world, yaw and selection.
pub fn build_draw_list<'a>(chunks: &[&'a Chunk], yaw: Rotation) -> Vec<DepthEntry<'a>> {
    // Terrain exposes roughly the top surface plus a fringe of sides.
    let estimate: usize = chunks
        .iter()
        .map(|c| c.dims().size_x * c.dims().size_y * 2)
        .sum();
    let mut entries = Vec::with_capacity(estimate);

    for chunk in chunks {
        let dims = chunk.dims();
        let origin = chunk.block_origin();

        for level in 0..dims.height {
            for x in 0..dims.size_x {
                for y in 0..dims.size_y {
                    let block = chunk.get(level, x, y);
                    if !block.visible {
                        count_call!(FRAME_COUNTERS.blocks_skipped);
                        continue;
                    }

                    let (rotated_x, rotated_y) =
                        yaw.rotate(origin.x + x as i32, origin.y + y as i32);
                    let level = level as i32;

                    count_call!(FRAME_COUNTERS.draw_list_entries);
                    entries.push(DepthEntry {
                        block,
                        rotated_x,
                        rotated_y,
                        level,
                        depth: level + rotated_y * DEPTH_Y_WEIGHT + rotated_x,
                    });
                }
            }
        }
    }

    entries.sort_by_key(|entry| (entry.depth, entry.level));
    entries
}
