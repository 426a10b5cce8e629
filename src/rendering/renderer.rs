/// Painter renderer: blits the depth-sorted draw list in order, each
/// block sprite at its projected screen anchor. Later entries carry
/// larger depth keys and overpaint earlier ones.
use crate::camera::Camera;
use crate::count_call;
use crate::perf::FRAME_COUNTERS;
use crate::rendering::depth_sort::DepthEntry;
use crate::rendering::framebuffer::Framebuffer;
use crate::rendering::texture::SpriteSheet;

pub struct Renderer {
    sheet: SpriteSheet,
    tile_size: i32,
}

impl Renderer {
    pub fn new(sheet: SpriteSheet, tile_size: i32) -> Self {
        debug_assert!(tile_size > 0);
        Self { sheet, tile_size }
    }

    /// Screen anchor of a rotated grid position: levels lift a block
    /// one tile up the screen per level.
    #[inline]
    pub fn anchor(&self, camera: &Camera, rotated_x: i32, rotated_y: i32, level: i32) -> (i32, i32) {
        (
            rotated_x * self.tile_size - camera.offset.x,
            rotated_y * self.tile_size - level * self.tile_size - camera.offset.y,
        )
    }

    /// Blit the draw list in order. Entries whose type has no sprite
    /// are skipped silently; clipping is handled by the blit itself.
    pub fn draw(&self, draw_list: &[DepthEntry<'_>], camera: &Camera, framebuffer: &mut Framebuffer) {
        // Sprites are drawn one pixel wider than one tile so adjacent
        // columns overlap, and two tiles tall to carry the block face.
        let dest_width = (self.tile_size + 1) as u32;
        let dest_height = (self.tile_size * 2) as u32;

        for entry in draw_list {
            let src = match self.sheet.source_rect(entry.block.block_type) {
                Some(src) => src,
                None => {
                    count_call!(FRAME_COUNTERS.blits_skipped);
                    continue;
                }
            };

            let (screen_x, screen_y) =
                self.anchor(camera, entry.rotated_x, entry.rotated_y, entry.level);

            count_call!(FRAME_COUNTERS.blits_issued);
            framebuffer.blit_scaled(&self.sheet, src, screen_x, screen_y, dest_width, dest_height);
        }
    }
}
