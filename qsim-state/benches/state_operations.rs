use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qsim_core::QubitId;
use qsim_gates::StandardGate;
use qsim_state::{apply_cnot, extract, QubitState};

fn benchmark_gate_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_application");
    let state = QubitState::plus();

    for gate in StandardGate::ALL {
        group.bench_with_input(BenchmarkId::new("apply", gate.name()), &gate, |b, gate| {
            b.iter(|| black_box(black_box(&state).apply(gate.matrix())));
        });
    }

    group.finish();
}

fn benchmark_cnot(c: &mut Criterion) {
    let mut group = c.benchmark_group("cnot");

    group.bench_function("product", |b| {
        let states = vec![QubitState::one(), QubitState::plus()];
        b.iter(|| {
            let mut s = states.clone();
            apply_cnot(&mut s, QubitId::new(0), QubitId::new(1)).unwrap();
            black_box(s)
        });
    });

    group.bench_function("truncated", |b| {
        let states = vec![QubitState::plus(), QubitState::one()];
        b.iter(|| {
            let mut s = states.clone();
            apply_cnot(&mut s, QubitId::new(0), QubitId::new(1)).unwrap();
            black_box(s)
        });
    });

    group.finish();
}

fn benchmark_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("probability_extraction");

    for num_qubits in [2usize, 6, 10, 14] {
        let states = vec![QubitState::plus(); num_qubits];
        group.bench_with_input(
            BenchmarkId::new("extract", num_qubits),
            &states,
            |b, states| {
                b.iter(|| black_box(extract(states).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_gate_application,
    benchmark_cnot,
    benchmark_extract
);
criterion_main!(benches);
