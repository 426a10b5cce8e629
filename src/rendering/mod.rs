/// Painter's-algorithm rendering pipeline
/// Draw-list build, sprite lookup and framebuffer blitting
pub mod depth_sort;
pub mod framebuffer;
pub mod renderer;
pub mod texture;

pub use depth_sort::{build_draw_list, DepthEntry, DEPTH_Y_WEIGHT};
pub use framebuffer::Framebuffer;
pub use renderer::Renderer;
pub use texture::{SpriteRect, SpriteSheet, TextureError, SPRITE_HEIGHT, SPRITE_WIDTH};
