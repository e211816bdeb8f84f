use criterion::{Criterion, black_box, criterion_group, criterion_main};

use fractal_viewer::core::data::pixel_buffer::PixelBuffer;
use fractal_viewer::presenters::file::ppm::write_ppm;
use fractal_viewer::{FractalRenderer, RendererConfig, Viewport};

fn rendered_frame() -> PixelBuffer {
    let renderer = FractalRenderer::new(RendererConfig::default()).unwrap();
    let viewport = Viewport::default();

    renderer
        .render_mandelbrot(&viewport, &Default::default())
        .unwrap()
}

fn bench_rgba_copy(c: &mut Criterion) {
    let frame = rendered_frame();

    c.bench_function("to_rgba8_top_down", |b| {
        b.iter(|| black_box(frame.to_rgba8_top_down()))
    });
}

fn bench_ppm_encode(c: &mut Criterion) {
    let frame = rendered_frame();
    let mut out = Vec::with_capacity(frame.buffer_size() * 3 + 32);

    c.bench_function("write_ppm", |b| {
        b.iter(|| {
            out.clear();
            write_ppm(&mut out, black_box(&frame)).unwrap();
        })
    });
}

criterion_group!(benches, bench_rgba_copy, bench_ppm_encode);
criterion_main!(benches);
