use barline_core::{render, ApproxTextMeasurer, ChartKind, Color, DataPoint, RenderConfig, Surface};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_points(n: usize) -> Vec<DataPoint> {
    (0..n)
        .map(|i| {
            let v = (i as f64 * 0.01).sin() * 40.0 + 50.0;
            DataPoint::new(v, i.to_string(), Color::from_rgb(98, 0, 238))
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let config = RenderConfig::default().with_guidelines(4);
    let measurer = ApproxTextMeasurer::default();
    let surface = Surface::new(1024.0, 640.0);

    let mut group = c.benchmark_group("render_draw_list");
    for &n in &[100usize, 10_000usize] {
        let points = build_points(n);
        for kind in [ChartKind::Bar, ChartKind::Line] {
            group.bench_function(format!("{}_{n}", kind.name()), |b| {
                b.iter(|| {
                    let list = render(surface, &config, &points, kind, &measurer).expect("render");
                    black_box(list);
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
