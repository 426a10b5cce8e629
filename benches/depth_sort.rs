/// Benchmark suite for chunk selection and draw-list construction
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::IVec2;
use isovoxel::projection::Rotation;
use isovoxel::rendering::build_draw_list;
use isovoxel::{Camera, TerrainGenerator, WorldConfig};

fn bench_chunk_selection(c: &mut Criterion) {
    c.bench_function("chunk_selection", |b| {
        let world = TerrainGenerator::new(12345, WorldConfig::default()).generate();
        let mut camera = Camera::new();
        camera.pan(IVec2::new(600, 400));

        b.iter(|| black_box(world.visible_chunks(&camera, 640, 480).len()));
    });
}

fn bench_draw_list_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_list_build");
    let world = TerrainGenerator::new(12345, WorldConfig::default()).generate();
    let camera = Camera::new();
    let selected = world.visible_chunks(&camera, 640, 480);

    for yaw in Rotation::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(yaw.degrees()),
            &yaw,
            |b, &yaw| {
                b.iter(|| black_box(build_draw_list(&selected, yaw).len()));
            },
        );
    }
    group.finish();
}

fn bench_draw_list_whole_world(c: &mut Criterion) {
    c.bench_function("draw_list_whole_world", |b| {
        let world = TerrainGenerator::new(12345, WorldConfig::default()).generate();
        let chunks = world.all_chunks();

        b.iter(|| black_box(build_draw_list(&chunks, Rotation::R90).len()));
    });
}

criterion_group!(
    benches,
    bench_chunk_selection,
    bench_draw_list_build,
    bench_draw_list_whole_world
);
criterion_main!(benches);
