/// Face-exposure visibility pass.
/// A block is visible when it is opaque and at least one of its six
/// axis-aligned neighbors is open: out of chunk bounds, air, or a
/// transparent type. The probes consult the static per-type opacity
/// only, never the computed `visible` flags, so the result does not
/// depend on scan order. The downward probe is skipped at level 0; the
/// world floor never exposes a block.
use super::Chunk;

/// Recompute the `visible` flag of every cell in the chunk.
/// Runs once per chunk after the terrain fill. O(volume), at most six
/// probes per cell, no fixpoint iteration.
pub fn update_chunk_visibility(chunk: &mut Chunk) {
    let dims = chunk.dims();
    for level in 0..dims.height {
        for x in 0..dims.size_x {
            for y in 0..dims.size_y {
                let visible =
                    chunk.get(level, x, y).is_opaque() && has_open_neighbor(chunk, level, x, y);
                chunk.get_mut(level, x, y).visible = visible;
            }
        }
    }
}

#[inline]
fn has_open_neighbor(chunk: &Chunk, level: usize, x: usize, y: usize) -> bool {
    let (level, x, y) = (level as i32, x as i32, y as i32);

    is_open(chunk, level, x - 1, y)
        || is_open(chunk, level, x + 1, y)
        || is_open(chunk, level, x, y - 1)
        || is_open(chunk, level, x, y + 1)
        || is_open(chunk, level + 1, x, y)
        || (level != 0 && is_open(chunk, level - 1, x, y))
}

#[inline]
fn is_open(chunk: &Chunk, level: i32, x: i32, y: i32) -> bool {
    match chunk.try_get(level, x, y) {
        Some(block) => !block.is_opaque(),
        None => true,
    }
}
