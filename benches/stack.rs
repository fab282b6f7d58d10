use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Complex;
use thinfilm::{stack_r_admittance, stack_rt_characteristic, Layer, Polarization};

/// Alternating high/low quarter-wave mirror on glass.
fn build_mirror(pairs: usize) -> Vec<Layer> {
    let wavelength = 550.0;
    let high = Complex::new(2.35, 0.001);
    let low = Complex::new(1.46, 0.0);
    let mut stack = Vec::with_capacity(2 * pairs + 1);
    for _ in 0..pairs {
        stack.push(Layer::new(wavelength / (4.0 * high.re), high));
        stack.push(Layer::new(wavelength / (4.0 * low.re), low));
    }
    stack.push(Layer::lossless(0.0, 1.52));
    stack
}

fn bench_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack");
    for pairs in [1, 10, 100] {
        let stack = build_mirror(pairs);
        let layers = stack.len();
        group.bench_with_input(
            BenchmarkId::new("characteristic", layers),
            &stack,
            |b, stack| {
                b.iter(|| {
                    stack_rt_characteristic(Polarization::P, 550.0, black_box(stack), 30.0, true)
                })
            },
        );
        group.bench_with_input(BenchmarkId::new("admittance", layers), &stack, |b, stack| {
            b.iter(|| stack_r_admittance(Polarization::P, 550.0, black_box(stack), 30.0, true))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_stack);
criterion_main!(benches);
