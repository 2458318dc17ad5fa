//! # QFT — Transformada de Fourier Quântica
//!
//! Decomposição padrão em circuito: Hadamard por qubit intercalado com
//! deslocamentos de fase controlados de ângulo decrescente, seguido da
//! inversão da ordem dos qubits com SWAPs.
//!
//! ```text
//! para i em 0..n:
//!     H no qubit i
//!     para j em i+1..n:
//!         fase controlada θ = 2π/2^{j-i+1}, controle j, alvo i
//! para i em 0..n/2:
//!     SWAP(i, n-1-i)
//! ```
//!
//! O estado conjunto resultante é idêntico ao da aplicação direta da
//! matriz [`qsim_core::gates::fourier`] sobre os mesmos qubits.

use std::f64::consts::PI;

use qsim_core::gates;
use qsim_engine::{Simulator, SimulatorError, SimulatorResult};

/// Aplica a transformada de Fourier quântica aos qubits nomeados
///
/// O qubit na posição 0 da lista é o bit MAIS significativo do índice da
/// transformada.
pub fn fourier_transform(sim: &mut Simulator, qubits: &[&str]) -> SimulatorResult<()> {
    let n = qubits.len();
    if n == 0 {
        return Err(SimulatorError::InvalidState(
            "fourier transform requires at least one qubit".into(),
        ));
    }

    for i in 0..n {
        sim.apply_gate(&gates::hadamard(), &[qubits[i]])?;

        for j in (i + 1)..n {
            let theta = 2.0 * PI / (1u64 << (j - i + 1)) as f64;
            let gate = gates::controlled(&gates::phase_shift(theta));
            sim.apply_gate(&gate, &[qubits[j], qubits[i]])?;
        }
    }

    for i in 0..n / 2 {
        sim.apply_gate(&gates::swap(), &[qubits[i], qubits[n - 1 - i]])?;
    }

    Ok(())
}

/// Aplica a QFT como uma única multiplicação pela matriz DFT de 2^n
pub fn fourier_transform_direct(sim: &mut Simulator, qubits: &[&str]) -> SimulatorResult<()> {
    if qubits.is_empty() {
        return Err(SimulatorError::InvalidState(
            "fourier transform requires at least one qubit".into(),
        ));
    }

    sim.apply_gate(&gates::fourier(qubits.len()), qubits)
}

// =============================================================================
// Testes
// =============================================================================
