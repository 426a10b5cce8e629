/// Main application entry point
/// Handles window creation, input, the fixed tick loop and rendering
use isovoxel::rendering::texture::SPRITE_SHEET_PATH;
use isovoxel::*;
use log::{info, warn};
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

const WINDOW_WIDTH: u32 = 640;
const WINDOW_HEIGHT: u32 = 480;
const SKY_COLOR: u32 = 0xFF87CEEB;

/// Input ticks run at a fixed 10ms cadence regardless of frame rate.
const TICK: Duration = Duration::from_millis(10);
/// Stall guard: never replay more than this much missed input time.
const MAX_TICK_BACKLOG: Duration = Duration::from_millis(250);

const SEED_ENV: &str = "ISOVOXEL_SEED";
const DEFAULT_SEED: u32 = 12345;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    println!("=== Isovoxel - Painter's Voxel Renderer ===");
    println!("Controls:");
    println!("  Arrow Keys - Pan camera");
    println!("  Q/E - Rotate world 90 degrees");
    println!("  P - Dump frame counters");
    println!("  ESC - Exit");
    println!();

    // Sprites must be ready before generation and the loop start.
    let sheet = match SpriteSheet::load(SPRITE_SHEET_PATH) {
        Ok(sheet) => sheet,
        Err(err) => {
            warn!("{err}; using built-in sprites");
            SpriteSheet::builtin()
        }
    };

    let seed = std::env::var(SEED_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_SEED);

    let config = WorldConfig::default();
    let generator = TerrainGenerator::new(seed, config.clone());
    info!(
        "generating {}x{} chunk world, seed {}",
        config.chunks_x,
        config.chunks_y,
        generator.seed()
    );
    let world = {
        let _timer = perf::PerfTimer::new("world generation");
        generator.generate()
    };
    info!("{} chunks ready", world.chunk_count());

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Isovoxel")
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .build(&event_loop)?,
    );

    // Initialize software rendering context
    let context = softbuffer::Context::new(window.clone())
        .map_err(|err| anyhow::anyhow!("softbuffer context: {err}"))?;
    let mut surface = softbuffer::Surface::new(&context, window.clone())
        .map_err(|err| anyhow::anyhow!("softbuffer surface: {err}"))?;

    let window_size = window.inner_size();
    let mut framebuffer =
        Framebuffer::new(window_size.width as usize, window_size.height as usize);

    let mut camera = Camera::new();
    let mut camera_controller = CameraController::new();
    let renderer = Renderer::new(sheet, config.tile_size);

    // Fixed-tick input timing
    let mut last_tick = Instant::now();
    let mut tick_backlog = Duration::ZERO;

    // Timing
    let mut stats = PerfStats::new();
    let mut frame_count = 0u32;
    let mut fps_timer = Instant::now();

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    stats.print_summary();
                    elwt.exit();
                }
                WindowEvent::Resized(new_size) => {
                    framebuffer.resize(new_size.width as usize, new_size.height as usize);
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    let pressed = event.state == ElementState::Pressed;

                    if let PhysicalKey::Code(keycode) = event.physical_key {
                        match keycode {
                            KeyCode::ArrowUp => camera_controller.up_pressed = pressed,
                            KeyCode::ArrowDown => camera_controller.down_pressed = pressed,
                            KeyCode::ArrowLeft => camera_controller.left_pressed = pressed,
                            KeyCode::ArrowRight => camera_controller.right_pressed = pressed,
                            // Rotation snaps on the press edge; OS key
                            // repeat must not spin the world.
                            KeyCode::KeyE if pressed && !event.repeat => {
                                camera.rotate_ccw();
                                info!("yaw: {} degrees", camera.yaw.degrees());
                            }
                            KeyCode::KeyQ if pressed && !event.repeat => {
                                camera.rotate_cw();
                                info!("yaw: {} degrees", camera.yaw.degrees());
                            }
                            // Each dump covers the interval since the
                            // previous one.
                            KeyCode::KeyP if pressed => {
                                FRAME_COUNTERS.snapshot().print_report();
                                FRAME_COUNTERS.reset();
                            }
                            KeyCode::Escape if pressed => {
                                stats.print_summary();
                                elwt.exit();
                            }
                            _ => {}
                        }
                    }
                }
                WindowEvent::RedrawRequested => {
                    // Replay the fixed input ticks owed since last frame
                    let now = Instant::now();
                    tick_backlog += now - last_tick;
                    last_tick = now;
                    if tick_backlog > MAX_TICK_BACKLOG {
                        tick_backlog = MAX_TICK_BACKLOG;
                    }
                    while tick_backlog >= TICK {
                        camera_controller.apply_to(&mut camera);
                        tick_backlog -= TICK;
                    }

                    let timings = render_frame(&world, &camera, &renderer, &mut framebuffer);

                    // Copy framebuffer to window
                    let present_start = Instant::now();
                    let width = NonZeroU32::new(framebuffer.width as u32);
                    let height = NonZeroU32::new(framebuffer.height as u32);
                    if let (Some(width), Some(height)) = (width, height) {
                        surface.resize(width, height).unwrap();
                        let mut buffer = surface.buffer_mut().unwrap();
                        buffer.copy_from_slice(framebuffer.color_buffer_slice());
                        buffer.present().unwrap();
                    }
                    let present = present_start.elapsed();

                    stats.add_frame(timings.select, timings.sort, timings.draw, present);

                    // FPS counter with pipeline stats
                    frame_count += 1;
                    if fps_timer.elapsed().as_secs() >= 1 {
                        info!(
                            "FPS: {} | chunks: {} | draw entries: {} | yaw: {} degrees",
                            frame_count,
                            timings.chunks,
                            timings.entries,
                            camera.yaw.degrees()
                        );
                        frame_count = 0;
                        fps_timer = Instant::now();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}

struct FrameTimings {
    select: Duration,
    sort: Duration,
    draw: Duration,
    chunks: usize,
    entries: usize,
}

/// Run one frame of the painter pipeline into the framebuffer:
/// clear, select chunks for the viewport, build and sort the draw
/// list, then blit back-to-front.
fn render_frame(
    world: &World,
    camera: &Camera,
    renderer: &Renderer,
    framebuffer: &mut Framebuffer,
) -> FrameTimings {
    count_call!(FRAME_COUNTERS.frames_rendered);

    framebuffer.clear(SKY_COLOR);

    let select_start = Instant::now();
    let visible_chunks =
        world.visible_chunks(camera, framebuffer.width as u32, framebuffer.height as u32);
    let select = select_start.elapsed();

    let sort_start = Instant::now();
    let draw_list = build_draw_list(&visible_chunks, camera.yaw);
    let sort = sort_start.elapsed();

    let draw_start = Instant::now();
    renderer.draw(&draw_list, camera, framebuffer);
    let draw = draw_start.elapsed();

    FrameTimings {
        select,
        sort,
        draw,
        chunks: visible_chunks.len(),
        entries: draw_list.len(),
    }
}
