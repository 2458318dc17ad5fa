//! # Quantum Gates — Builders de Matrizes Unitárias
//!
//! Constrói as matrizes de gates padrão e parametrizados:
//!
//! - **Single-qubit**: H (Hadamard), X, Y, Z (Pauli), phase shift
//! - **Wrapper controlado**: gate de n qubits → gate controlado de n+1 qubits
//! - **Two-qubit**: CNOT, SWAP
//! - **Fourier**: matriz DFT de dimensão 2^n a partir de raízes da unidade
//!
//! Todas as matrizes são unitárias por construção.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use num_complex::Complex64;

use crate::matrix::Unitary;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Porta Hadamard: cria superposição
pub fn hadamard() -> Unitary {
    let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
    Unitary::from_rows_unchecked(vec![vec![h, h], vec![h, -h]])
}

/// Porta Pauli-X (NOT quântico)
pub fn pauli_x() -> Unitary {
    Unitary::from_rows_unchecked(vec![
        vec![ZERO, ONE],
        vec![ONE, ZERO],
    ])
}

/// Porta Pauli-Y
pub fn pauli_y() -> Unitary {
    Unitary::from_rows_unchecked(vec![
        vec![ZERO, Complex64::new(0.0, -1.0)],
        vec![Complex64::new(0.0, 1.0), ZERO],
    ])
}

/// Porta Pauli-Z (phase flip)
pub fn pauli_z() -> Unitary {
    Unitary::from_rows_unchecked(vec![
        vec![ONE, ZERO],
        vec![ZERO, Complex64::new(-1.0, 0.0)],
    ])
}

/// Porta de deslocamento de fase: diag(1, e^{iφ})
pub fn phase_shift(phi: f64) -> Unitary {
    Unitary::from_rows_unchecked(vec![
        vec![ONE, ZERO],
        vec![ZERO, Complex64::from_polar(1.0, phi)],
    ])
}

/// Versão controlada de um gate de n qubits
///
/// Produz o gate bloco-diagonal de n+1 qubits em que o qubit de controle é
/// o MAIS significativo: identidade no bloco |0⟩⟨0| ⊗ I, o gate original no
/// bloco |1⟩⟨1| ⊗ U.
pub fn controlled(gate: &Unitary) -> Unitary {
    let d = gate.dimension();
    let dim = 2 * d;

    let mut rows = vec![vec![ZERO; dim]; dim];
    for (i, row) in rows.iter_mut().enumerate().take(d) {
        row[i] = ONE;
    }
    for i in 0..d {
        for j in 0..d {
            rows[d + i][d + j] = gate.element(i, j);
        }
    }

    Unitary::from_rows_unchecked(rows)
}

/// Porta CNOT (X controlado, controle no qubit mais significativo)
pub fn cnot() -> Unitary {
    controlled(&pauli_x())
}

/// Porta SWAP: troca dois qubits
pub fn swap() -> Unitary {
    Unitary::from_rows_unchecked(vec![
        vec![ONE, ZERO, ZERO, ZERO],
        vec![ZERO, ZERO, ONE, ZERO],
        vec![ZERO, ONE, ZERO, ZERO],
        vec![ZERO, ZERO, ZERO, ONE],
    ])
}

/// Matriz da transformada de Fourier discreta para `qubits` qubits
///
/// Elemento (j, l) = ω^{j·l}/√N com ω = e^{2πi/N} e N = 2^qubits. As colunas
/// são sequências ortonormais de potências de raízes da unidade, logo a
/// matriz é unitária por construção.
pub fn fourier(qubits: usize) -> Unitary {
    let n = 1usize << qubits.max(1);
    let scale = 1.0 / (n as f64).sqrt();

    let rows = (0..n)
        .map(|j| {
            (0..n)
                .map(|l| Complex64::from_polar(scale, 2.0 * PI * ((j * l) % n) as f64 / n as f64))
                .collect()
        })
        .collect();

    Unitary::from_rows_unchecked(rows)
}

// =============================================================================
// Testes
// =============================================================================
