//! # StateVector Benchmarks
//!
//! Measures tensor-product growth and unitary application across qubit
//! counts. Both scale as 2^k by design.
//!
//! Run: `cargo bench --bench vector_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qsim_core::{gates, StateVector, Unitary};

/// Benchmark Kronecker products of growing state vectors
fn bench_tensor_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("tensor_growth");

    for qubits in [2usize, 4, 6, 8] {
        let left = StateVector::basis(qubits, 0).unwrap();
        let right = StateVector::basis(1, 1).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(qubits), &qubits, |b, _| {
            b.iter(|| black_box(left.tensor(&right)))
        });
    }

    group.finish();
}

/// Benchmark identity-padded gate application
fn bench_gate_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_apply");

    for qubits in [2usize, 4, 6, 8] {
        let padded = gates::hadamard().tensor(&Unitary::identity(qubits - 1));

        group.bench_with_input(BenchmarkId::from_parameter(qubits), &qubits, |b, &q| {
            b.iter(|| {
                let mut v = StateVector::basis(q, 0).unwrap();
                v.apply(black_box(&padded)).unwrap();
                black_box(v)
            })
        });
    }

    group.finish();
}

/// Benchmark Fourier matrix construction
fn bench_fourier_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("fourier_build");

    for qubits in [2usize, 4, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(qubits), &qubits, |b, &q| {
            b.iter(|| black_box(gates::fourier(q)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_tensor_growth,
    bench_gate_apply,
    bench_fourier_build
);
criterion_main!(benches);
