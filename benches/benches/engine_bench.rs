//! # Engine Benchmarks
//!
//! Measures full simulator operations: Bell-pair preparation, measurement
//! with collapse+split, and teleportation end to end.
//!
//! Run: `cargo bench --bench engine_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qsim_core::gates;
use qsim_engine::Simulator;
use qsim_protocol::{prepare_bell, teleport_qubit};

/// Benchmark Bell-pair preparation (create + H + CNOT with merge)
fn bench_prepare_bell(c: &mut Criterion) {
    c.bench_function("prepare_bell", |b| {
        b.iter(|| {
            let mut sim = Simulator::with_seed(1);
            prepare_bell(&mut sim, "a", "b").unwrap();
            black_box(sim)
        })
    });
}

/// Benchmark measurement of an entangled pair (collapse + group split)
fn bench_measure_pair(c: &mut Criterion) {
    c.bench_function("measure_pair", |b| {
        b.iter(|| {
            let mut sim = Simulator::with_seed(1);
            prepare_bell(&mut sim, "a", "b").unwrap();
            black_box(sim.measure(&["a", "b"]).unwrap())
        })
    });
}

/// Benchmark a gate spanning a growing entangled group
fn bench_gate_on_entangled_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_on_group");

    for qubits in [2usize, 4, 6] {
        group.bench_function(criterion::BenchmarkId::from_parameter(qubits), |b| {
            b.iter(|| {
                let mut sim = Simulator::with_seed(1);
                let names: Vec<String> = (0..qubits).map(|i| format!("q{i}")).collect();
                for name in &names {
                    sim.create_qubit_basis(name, 0).unwrap();
                }
                for pair in names.windows(2) {
                    sim.apply_gate(&gates::cnot(), &[pair[0].as_str(), pair[1].as_str()])
                        .unwrap();
                }
                black_box(sim)
            })
        });
    }

    group.finish();
}

/// Benchmark teleportation end to end
fn bench_teleport(c: &mut Criterion) {
    c.bench_function("teleport", |b| {
        b.iter(|| {
            let mut sim = Simulator::with_seed(1);
            sim.create_qubit_basis("src", 1).unwrap();
            sim.apply_gate(&gates::hadamard(), &["src"]).unwrap();
            black_box(teleport_qubit(&mut sim, "src", "via", "dst").unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_prepare_bell,
    bench_measure_pair,
    bench_gate_on_entangled_group,
    bench_teleport
);
criterion_main!(benches);
