use criterion::{criterion_group, criterion_main, Criterion};

use mandelzoom_core::{Complex, FractalParams, Mandelbrot, ZoomDirection};
use mandelzoom_render::{colour_for, MandelbrotRenderer};

fn bench_full_frame_render(c: &mut Criterion) {
    let mut renderer = MandelbrotRenderer::default();

    c.bench_function("full_frame_640x480", |b| {
        b.iter(|| renderer.render(640, 480));
    });
}

fn bench_zoomed_render(c: &mut Criterion) {
    let mut renderer = MandelbrotRenderer::default();
    for _ in 0..4 {
        renderer.zoom(180, 256, 512, 512, ZoomDirection::In);
    }

    c.bench_function("render_512x512_zoom16", |b| {
        b.iter(|| renderer.render(512, 512));
    });
}

fn bench_iterate_and_colour(c: &mut Criterion) {
    let params = FractalParams::default();
    let mandelbrot = Mandelbrot::new(params);
    let point = Complex::new(-0.1, 0.65);

    c.bench_function("iterate_colour_single_point", |b| {
        b.iter(|| colour_for(&mandelbrot.iterate(point), &params));
    });
}

criterion_group!(
    benches,
    bench_full_frame_render,
    bench_zoomed_render,
    bench_iterate_and_colour
);
criterion_main!(benches);
