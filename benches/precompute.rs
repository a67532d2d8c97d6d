//! Benchmarks for heart construction and frame replay.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pulseheart::frames::build_frame;
use pulseheart::random::seeded;
use pulseheart::render::{Canvas, Renderer};
use pulseheart::{Heart, HeartConfig, ParticleSets, Rgb};

/// Canvas that only counts, to isolate the renderer's own cost.
struct NullCanvas(usize);

impl Canvas for NullCanvas {
    fn size(&self) -> (u32, u32) {
        (980, 640)
    }

    fn clear(&mut self, _color: Rgb) {
        self.0 = 0;
    }

    fn fill_rect(&mut self, _x: f32, _y: f32, _size: f32, _color: Rgb) {
        self.0 += 1;
    }

    fn fill_circle(&mut self, _x: f32, _y: f32, _size: f32, _color: Rgb) {
        self.0 += 1;
    }
}

fn bench_particle_sets(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_sets");

    for samples in [500usize, 2000, 4000] {
        let config = HeartConfig::default().with_outline_samples(samples);
        group.bench_with_input(BenchmarkId::from_parameter(samples), &config, |b, config| {
            let mut rng = seeded(1);
            b.iter(|| black_box(ParticleSets::build(config, &mut rng)))
        });
    }

    group.finish();
}

fn bench_build_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_frame");
    let config = HeartConfig::default();
    let sets = ParticleSets::build(&config, &mut seeded(2));

    // Rest frame vs. pulse peak (largest halo).
    for frame in [0usize, 1] {
        group.bench_with_input(BenchmarkId::from_parameter(frame), &frame, |b, &frame| {
            let mut rng = seeded(3);
            b.iter(|| black_box(build_frame(frame, &config, &sets, &mut rng)))
        });
    }

    group.finish();
}

fn bench_full_heart(c: &mut Criterion) {
    let mut group = c.benchmark_group("heart");
    group.sample_size(10);

    group.bench_function("glow", |b| {
        b.iter(|| black_box(Heart::from_seed(HeartConfig::glow(), 4)))
    });

    group.bench_function("classic", |b| {
        b.iter(|| black_box(Heart::from_seed(HeartConfig::classic(), 4)))
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let heart = match Heart::from_seed(HeartConfig::default(), 5) {
        Ok(heart) => heart,
        Err(e) => panic!("default config rejected: {e}"),
    };
    let renderer = Renderer::new();
    let mut canvas = NullCanvas(0);
    let mut frame = 0u64;

    c.bench_function("render_frame", |b| {
        b.iter(|| {
            renderer.render_frame(&heart, &mut canvas, frame);
            frame += 1;
            black_box(canvas.0)
        })
    });
}

criterion_group!(
    benches,
    bench_particle_sets,
    bench_build_frame,
    bench_full_heart,
    bench_render,
);
criterion_main!(benches);
