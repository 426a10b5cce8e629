/// Framebuffer for software rendering
/// A single ARGB color buffer; the painter's ordering of the draw list
/// replaces per-pixel depth testing.
use crate::count_add;
use crate::perf::FRAME_COUNTERS;
use crate::rendering::texture::{SpriteRect, SpriteSheet};

pub struct Framebuffer {
    // Hot data: used for every bounds check and index calculation
    pub width: usize,
    pub height: usize,
    pub color_buffer: Vec<u32>, // ARGB format
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color_buffer: vec![0; width * height],
        }
    }

    /// Clear the color buffer to one color
    pub fn clear(&mut self, clear_color: u32) {
        self.color_buffer.fill(clear_color);
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        debug_assert!(x < self.width && y < self.height);
        self.color_buffer[y * self.width + x]
    }

    /// Get color buffer as slice
    pub fn color_buffer_slice(&self) -> &[u32] {
        &self.color_buffer
    }

    /// Resize framebuffer
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.color_buffer.resize(width * height, 0);
    }

    /// Blit a sprite-sheet region to (dest_x, dest_y), scaled to
    /// dest_width x dest_height with nearest-neighbor sampling. The
    /// destination rectangle is clipped against the surface; fully
    /// transparent texels (alpha 0) leave the underlying pixel intact.
    pub fn blit_scaled(
        &mut self,
        sheet: &SpriteSheet,
        src: SpriteRect,
        dest_x: i32,
        dest_y: i32,
        dest_width: u32,
        dest_height: u32,
    ) {
        if dest_width == 0 || dest_height == 0 {
            return;
        }

        let x0 = dest_x.max(0);
        let y0 = dest_y.max(0);
        let x1 = (dest_x + dest_width as i32).min(self.width as i32);
        let y1 = (dest_y + dest_height as i32).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        count_add!(
            FRAME_COUNTERS.pixels_blitted,
            ((x1 - x0) * (y1 - y0)) as u64
        );

        for py in y0..y1 {
            let v = (py - dest_y) as u32 * src.height / dest_height;
            let row = py as usize * self.width;
            for px in x0..x1 {
                let u = (px - dest_x) as u32 * src.width / dest_width;
                let color = sheet.pixel(src.x + u, src.y + v);
                if color & 0xFF000000 == 0 {
                    continue;
                }
                self.color_buffer[row + px as usize] = color;
            }
        }
    }
}

/// Convert RGB to ARGB u32
#[inline]
pub const fn rgb_to_u32(r: u8, g: u8, b: u8) -> u32 {
    0xFF000000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}
