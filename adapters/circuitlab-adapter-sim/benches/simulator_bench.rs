//! Benchmarks for the statevector simulator
//!
//! Run with: cargo bench -p circuitlab-adapter-sim

use circuitlab_adapter_sim::SimulatorBackend;
use circuitlab_ir::{Circuit, Example, QubitId};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// GHZ-style chain on `n` qubits with terminal measurement.
fn ghz(n: u32) -> Circuit {
    let mut circuit = Circuit::new(n).unwrap();
    circuit.h(QubitId(0)).unwrap();
    for i in 0..n - 1 {
        circuit.cx(QubitId(i), QubitId(i + 1)).unwrap();
    }
    circuit.measure_all();
    circuit
}

/// Benchmark terminal-measurement sampling across shot counts
fn bench_terminal_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("terminal_sampling");
    let backend = SimulatorBackend::new().with_seed(0);
    let circuit = ghz(5);

    for shots in &[100_u32, 1000, 10_000] {
        group.bench_with_input(BenchmarkId::new("ghz5", shots), shots, |b, &s| {
            b.iter(|| backend.run(black_box(&circuit), black_box(s)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the per-shot path taken when measurements are interleaved
fn bench_mid_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("mid_circuit");
    let backend = SimulatorBackend::new().with_seed(0);

    let mut circuit = Example::Grover2.build(2).unwrap();
    circuit.measure_all();
    circuit.h(QubitId(0)).unwrap();
    circuit.measure_all();

    group.bench_function("grover_remeasure_1000", |b| {
        b.iter(|| backend.run(black_box(&circuit), black_box(1000)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_terminal_sampling, bench_mid_circuit);
criterion_main!(benches);
