use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rlc_phasor::prelude::*;

fn bench_solve_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    let freqs: Vec<f64> = (1..=10_000).map(|i| i as f64 * 10.0).collect();

    group.bench_function(BenchmarkId::new("frequency_sweep", freqs.len()), |b| {
        b.iter(|| {
            for &f in &freqs {
                let _ = solve(&CircuitParameters::default().with_frequency(f));
            }
        })
    });
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);
    let state = solve(&CircuitParameters::default()).expect("default parameters are valid");

    group.bench_function("layout_and_svg", |b| {
        b.iter(|| render_svg(&state.voltage_phasors(), "voltages", &RenderConfig::default()))
    });
    group.bench_function("png_small", |b| {
        let config = RenderConfig::default().with_size_in(4.0).with_dpi(100);
        b.iter_batched(
            || state.current_phasors(),
            |set| render_with(&set, "currents", &config),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_solve_sweep, bench_render);
criterion_main!(benches);
