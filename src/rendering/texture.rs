/// Block sprite sheet: a single horizontal strip of 16x32 cells where
/// the cell index equals the block id. Loaded from PNG when present,
/// otherwise generated procedurally so the binary and tests run
/// without assets on disk.
use crate::rendering::framebuffer::rgb_to_u32;
use crate::voxel::BlockType;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SPRITE_WIDTH: u32 = 16;
pub const SPRITE_HEIGHT: u32 = 32;

/// Default on-disk location of the block strip.
pub const SPRITE_SHEET_PATH: &str = "assets/textures/blocks.png";

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to load sprite sheet {path:?}: {source}")]
    Load {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("sprite sheet is {width}x{height}, need at least {min_width}x{min_height}")]
    TooSmall {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
}

/// Source region of one sprite cell within the sheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpriteRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

pub struct SpriteSheet {
    width: u32,
    height: u32,
    pixels: Vec<u32>, // ARGB format
}

impl SpriteSheet {
    /// Decode a PNG strip and check it covers every drawable id.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|source| TextureError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();

        let min_width = drawable_cell_count() * SPRITE_WIDTH;
        if width < min_width || height < SPRITE_HEIGHT {
            return Err(TextureError::TooSmall {
                width,
                height,
                min_width,
                min_height: SPRITE_HEIGHT,
            });
        }

        let pixels = rgba
            .as_raw()
            .chunks_exact(4)
            .map(|px| {
                ((px[3] as u32) << 24)
                    | ((px[0] as u32) << 16)
                    | ((px[1] as u32) << 8)
                    | (px[2] as u32)
            })
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Procedural fallback strip covering every drawable id.
    pub fn builtin() -> Self {
        let width = drawable_cell_count() * SPRITE_WIDTH;
        let height = SPRITE_HEIGHT;
        let mut pixels = vec![0u32; (width * height) as usize];

        // 0: Air / Unused (magenta checkerboard for debug)
        fill_checkerboard(&mut pixels, width, 0, rgb_to_u32(255, 0, 255), rgb_to_u32(0, 0, 0));
        // 1: Bedrock (dark grey noise)
        fill_block_face(&mut pixels, width, 1, [72, 72, 76], [54, 54, 58]);
        // 2: Stone (grey noise)
        fill_block_face(&mut pixels, width, 2, [128, 128, 128], [112, 112, 116]);
        // 3: Sand (tan noise)
        fill_block_face(&mut pixels, width, 3, [194, 178, 128], [176, 158, 108]);
        // 4: Dirt (brown noise)
        fill_block_face(&mut pixels, width, 4, [139, 69, 19], [118, 58, 16]);
        // 5: Grass (green cap over dirt)
        fill_grass_face(&mut pixels, width, 5);

        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[(y * self.width + x) as usize]
    }

    /// Source cell for a block type; None for types without a sprite.
    #[inline]
    pub fn source_rect(&self, block_type: BlockType) -> Option<SpriteRect> {
        let cell = block_type.sprite_cell()?;
        Some(SpriteRect {
            x: cell * SPRITE_WIDTH,
            y: 0,
            width: SPRITE_WIDTH,
            height: SPRITE_HEIGHT,
        })
    }
}

/// Cells the strip must provide: one past the highest drawable id.
fn drawable_cell_count() -> u32 {
    BlockType::ALL
        .iter()
        .filter_map(|ty| ty.sprite_cell())
        .max()
        .map_or(0, |cell| cell + 1)
}

fn fill_checkerboard(pixels: &mut [u32], sheet_width: u32, cell: u32, c1: u32, c2: u32) {
    let x0 = cell * SPRITE_WIDTH;
    for y in 0..SPRITE_HEIGHT {
        for x in 0..SPRITE_WIDTH {
            let color = if (x / 4 + y / 4) % 2 == 0 { c1 } else { c2 };
            pixels[(y * sheet_width + x0 + x) as usize] = color;
        }
    }
}

/// Noise face with a lightened strip at the top suggesting the lit
/// upper surface.
fn fill_block_face(pixels: &mut [u32], sheet_width: u32, cell: u32, base: [u8; 3], dark: [u8; 3]) {
    let x0 = cell * SPRITE_WIDTH;
    let mut seed: u32 = 12345 ^ (cell * 0x9E37);
    for y in 0..SPRITE_HEIGHT {
        for x in 0..SPRITE_WIDTH {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            let pick = if (seed >> 16) & 1 == 0 { base } else { dark };
            let color = if y < 6 { lighten(pick) } else { pick };
            pixels[(y * sheet_width + x0 + x) as usize] =
                rgb_to_u32(color[0], color[1], color[2]);
        }
    }
}

fn fill_grass_face(pixels: &mut [u32], sheet_width: u32, cell: u32) {
    let x0 = cell * SPRITE_WIDTH;
    let mut seed: u32 = 12345 ^ (cell * 0x9E37);
    for y in 0..SPRITE_HEIGHT {
        for x in 0..SPRITE_WIDTH {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            let grass = y < 12;
            let pick = match ((seed >> 16) & 1 == 0, grass) {
                (true, true) => [34, 139, 34],
                (false, true) => [28, 118, 28],
                (true, false) => [139, 69, 19],
                (false, false) => [118, 58, 16],
            };
            pixels[(y * sheet_width + x0 + x) as usize] = rgb_to_u32(pick[0], pick[1], pick[2]);
        }
    }
}

#[inline]
fn lighten(c: [u8; 3]) -> [u8; 3] {
    [
        c[0].saturating_add(28),
        c[1].saturating_add(28),
        c[2].saturating_add(28),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_strip_covers_all_drawable_ids() {
        let sheet = SpriteSheet::builtin();
        assert_eq!(sheet.width(), 6 * SPRITE_WIDTH);
        assert_eq!(sheet.height(), SPRITE_HEIGHT);

        for ty in BlockType::ALL {
            let rect = sheet.source_rect(ty);
            assert_eq!(rect.is_some(), ty.is_opaque());
            if let Some(rect) = rect {
                assert!(rect.x + rect.width <= sheet.width());
                assert_eq!((rect.width, rect.height), (SPRITE_WIDTH, SPRITE_HEIGHT));
            }
        }
    }

    #[test]
    fn source_cell_sits_at_id_times_width() {
        let sheet = SpriteSheet::builtin();
        let rect = sheet.source_rect(BlockType::Grass).unwrap();
        assert_eq!(rect.x, 5 * SPRITE_WIDTH);
        let rect = sheet.source_rect(BlockType::Bedrock).unwrap();
        assert_eq!(rect.x, SPRITE_WIDTH);
    }

    #[test]
    fn builtin_cells_are_fully_opaque() {
        let sheet = SpriteSheet::builtin();
        for y in 0..SPRITE_HEIGHT {
            for x in 0..sheet.width() {
                assert_eq!(sheet.pixel(x, y) & 0xFF000000, 0xFF000000);
            }
        }
    }

    #[test]
    fn load_rejects_missing_file() {
        let err = SpriteSheet::load("does/not/exist.png");
        assert!(matches!(err, Err(TextureError::Load { .. })));
    }
}
