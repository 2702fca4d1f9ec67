use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use qubitviz_gates::{GateKind, Hadamard};
use qubitviz_state::{bloch_angles, probabilities, DisplaySnapshot, QubitState, Visualizer};

fn benchmark_apply_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_cycle");

    let plus = QubitState::zero().apply(&Hadamard).unwrap();

    group.bench_function("apply_hadamard", |b| {
        b.iter(|| black_box(plus.apply(&Hadamard)))
    });

    group.bench_function("session_apply_phase", |b| {
        b.iter_batched(
            Visualizer::default,
            |mut viz| {
                viz.apply(black_box(GateKind::Phase(0.1))).unwrap();
                viz
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn benchmark_projections(c: &mut Criterion) {
    let mut group = c.benchmark_group("projections");

    let plus = QubitState::zero().apply(&Hadamard).unwrap();

    group.bench_function("probabilities", |b| b.iter(|| black_box(probabilities(&plus))));
    group.bench_function("bloch_angles", |b| b.iter(|| black_box(bloch_angles(&plus))));
    group.bench_function("snapshot", |b| {
        b.iter(|| black_box(DisplaySnapshot::capture(&plus, 3, 1e-9)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_apply_cycle, benchmark_projections);
criterion_main!(benches);
