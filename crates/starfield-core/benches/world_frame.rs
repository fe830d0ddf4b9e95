use criterion::{Criterion, black_box, criterion_group, criterion_main};
use starfield_core::*;

/// Discards every draw.
#[derive(Default)]
struct NullSurface;

impl DrawSurface for NullSurface {
    fn begin_path(&mut self) {}
    fn arc(&mut self, _cx: f64, _cy: f64, _radius: f64, _start: f64, _end: f64) {}
    fn set_fill_rgba(&mut self, _color: Rgb, _alpha: f64) {}
    fn fill(&mut self) {}
}

fn bench_mulberry32(c: &mut Criterion) {
    let mut rng = Mulberry32::new(42);
    c.bench_function("mulberry32_next_f64", |bencher| {
        bencher.iter(|| black_box(rng.next_f64()))
    });
}

fn bench_stars_for_tile(c: &mut Criterion) {
    c.bench_function("stars_for_tile_17", |bencher| {
        bencher.iter(|| {
            black_box(stars_for_tile(
                black_box(42),
                black_box(TileKey::new(3, -5)),
                17,
                0.5,
                2.0,
            ))
        })
    });
}

fn bench_world_frame(c: &mut Criterion) {
    let config = StarfieldConfig::default();
    let viewport = Viewport::new(-200.0, 150.0, 1.0, 1920.0, 1080.0);
    let mut renderer = WorldSpaceRenderer::new();
    let mut surface = NullSurface;
    c.bench_function("world_frame_1080p", |bencher| {
        bencher.iter(|| black_box(renderer.render(&mut surface, &config, &viewport)))
    });
}

fn bench_world_frame_cached(c: &mut Criterion) {
    let config = StarfieldConfig::default();
    let viewport = Viewport::new(-200.0, 150.0, 1.0, 1920.0, 1080.0);
    let mut renderer = WorldSpaceRenderer::with_cache(128);
    let mut surface = NullSurface;
    c.bench_function("world_frame_1080p_cached", |bencher| {
        bencher.iter(|| black_box(renderer.render(&mut surface, &config, &viewport)))
    });
}

fn bench_fixed_frame(c: &mut Criterion) {
    let config = StarfieldConfig::default();
    let mut field = FixedFieldRenderer::new();
    field.initialize(&config, 1920.0, 1080.0);
    let mut surface = NullSurface;
    c.bench_function("fixed_frame_200", |bencher| {
        bencher.iter(|| black_box(field.render(&mut surface, &config)))
    });
}

criterion_group!(
    benches,
    bench_mulberry32,
    bench_stars_for_tile,
    bench_world_frame,
    bench_world_frame_cached,
    bench_fixed_frame
);
criterion_main!(benches);
