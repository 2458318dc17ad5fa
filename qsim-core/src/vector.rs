//! # StateVector — Vetor de Amplitudes Complexas
//!
//! Representa um estado puro de k qubits como vetor de 2^k amplitudes
//! complexas com norma unitária.
//!
//! ## Convenção de ordenação
//!
//! O qubit na posição 0 corresponde ao bit MAIS significativo do índice.
//! No produto tensorial `a.tensor(&b)`, os qubits de `a` ocupam os bits
//! altos do índice do vetor resultante:
//!
//! ```text
//! (a ⊗ b)[i·len(b) + j] = a[i] · b[j]
//! ```

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{AlgebraError, AlgebraResult};
use crate::matrix::Unitary;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Tolerância para a invariante de norma unitária
pub const NORM_TOLERANCE: f64 = 1e-9;

/// Tolerância para considerar uma amplitude numericamente nula
pub const ZERO_TOLERANCE: f64 = 1e-12;

/// Vetor de amplitudes de um estado puro de k qubits (comprimento 2^k)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Estado de base computacional: toda a amplitude em `index`
    pub fn basis(qubits: usize, index: usize) -> AlgebraResult<Self> {
        if qubits == 0 {
            return Err(AlgebraError::InvalidState(
                "state vector needs at least one qubit".into(),
            ));
        }

        let dim = 1usize << qubits;
        if index >= dim {
            return Err(AlgebraError::DimensionMismatch {
                expected: dim,
                actual: index,
            });
        }

        let mut amplitudes = vec![ZERO; dim];
        amplitudes[index] = ONE;
        Ok(Self { amplitudes })
    }

    /// Estado arbitrário de um qubit a partir de amplitudes do chamador
    ///
    /// As amplitudes são normalizadas para que |a0|² + |a1|² = 1.
    pub fn qubit(a0: Complex64, a1: Complex64) -> AlgebraResult<Self> {
        let norm_sqr = a0.norm_sqr() + a1.norm_sqr();
        if norm_sqr < ZERO_TOLERANCE {
            return Err(AlgebraError::InvalidState(
                "both qubit amplitudes are zero".into(),
            ));
        }

        let norm = norm_sqr.sqrt();
        Ok(Self {
            amplitudes: vec![a0 / norm, a1 / norm],
        })
    }

    /// Constrói a partir de amplitudes já normalizadas
    ///
    /// O comprimento deve ser uma potência de dois ≥ 2 e a norma deve
    /// respeitar [`NORM_TOLERANCE`].
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> AlgebraResult<Self> {
        let len = amplitudes.len();
        if len < 2 || len & (len - 1) != 0 {
            return Err(AlgebraError::InvalidState(format!(
                "state vector length {len} is not a power of two >= 2"
            )));
        }

        let vector = Self { amplitudes };
        if !vector.is_normalized(NORM_TOLERANCE) {
            return Err(AlgebraError::InvalidState(format!(
                "state vector norm² {} violates unit-norm invariant",
                vector.norm_sqr()
            )));
        }

        Ok(vector)
    }

    /// Número de qubits (k para um vetor de comprimento 2^k)
    pub fn qubit_count(&self) -> usize {
        self.amplitudes.len().trailing_zeros() as usize
    }

    /// Comprimento do vetor (2^k)
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Vetor nunca é vazio
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Amplitudes como slice
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Probabilidades derivadas (regra de Born: |amplitude|²)
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Soma dos quadrados das magnitudes
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Verifica a invariante de norma unitária
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() <= tolerance
    }

    /// Produto de Kronecker: os qubits de `self` ocupam os bits altos
    pub fn tensor(&self, other: &Self) -> Self {
        let mut amplitudes = Vec::with_capacity(self.amplitudes.len() * other.amplitudes.len());
        for a in &self.amplitudes {
            for b in &other.amplitudes {
                amplitudes.push(a * b);
            }
        }
        Self { amplitudes }
    }

    /// Multiplicação in-place por matriz unitária (U·v)
    pub fn apply(&mut self, unitary: &Unitary) -> AlgebraResult<()> {
        if unitary.dimension() != self.amplitudes.len() {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.amplitudes.len(),
                actual: unitary.dimension(),
            });
        }

        self.amplitudes = unitary.mul_vec(&self.amplitudes);
        Ok(())
    }

    /// Permutação de relabeling de bits do índice
    ///
    /// Cada par `(new_bit, old_bit)` move o bit `old_bit` do índice antigo
    /// para o bit `new_bit` do novo índice. Os pares devem cobrir todos os
    /// k bits exatamente uma vez.
    pub fn permute_bits(&mut self, pairs: &[(usize, usize)]) -> AlgebraResult<()> {
        let k = self.qubit_count();
        if pairs.len() != k {
            return Err(AlgebraError::DimensionMismatch {
                expected: k,
                actual: pairs.len(),
            });
        }

        let dim = self.amplitudes.len();
        let mut permuted = vec![ZERO; dim];
        for (new_index, slot) in permuted.iter_mut().enumerate() {
            let mut old_index = 0usize;
            for &(new_bit, old_bit) in pairs {
                old_index |= ((new_index >> new_bit) & 1) << old_bit;
            }
            *slot = self.amplitudes[old_index];
        }

        self.amplitudes = permuted;
        Ok(())
    }

    /// Zera toda amplitude cujo índice não satisfaz o predicado
    pub fn project<F: Fn(usize) -> bool>(&mut self, keep: F) {
        for (index, amplitude) in self.amplitudes.iter_mut().enumerate() {
            if !keep(index) {
                *amplitude = ZERO;
            }
        }
    }

    /// Renormaliza as amplitudes sobreviventes (divisão por √norma²)
    pub fn renormalize(&mut self) -> AlgebraResult<()> {
        let norm_sqr = self.norm_sqr();
        if norm_sqr < ZERO_TOLERANCE {
            return Err(AlgebraError::InvalidState(
                "cannot renormalize a zero vector".into(),
            ));
        }

        let norm = norm_sqr.sqrt();
        for amplitude in &mut self.amplitudes {
            *amplitude /= norm;
        }
        Ok(())
    }
}

// =============================================================================
// Testes
// =============================================================================
