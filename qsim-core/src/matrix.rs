//! # Unitary — Matriz Unitária Quadrada
//!
//! Matriz complexa de dimensão 2^n para um gate de n qubits. A unitariedade
//! é garantida por construção pelos builders em [`crate::gates`]; o método
//! [`Unitary::is_unitary`] serve como verificação de consistência em testes.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{AlgebraError, AlgebraResult};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Matriz complexa quadrada de dimensão 2^n
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unitary {
    rows: Vec<Vec<Complex64>>,
}

impl Unitary {
    /// Constrói a partir de linhas; valida forma quadrada 2^n
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> AlgebraResult<Self> {
        let dim = rows.len();
        if dim < 2 || dim & (dim - 1) != 0 {
            return Err(AlgebraError::InvalidState(format!(
                "matrix dimension {dim} is not a power of two >= 2"
            )));
        }

        for row in &rows {
            if row.len() != dim {
                return Err(AlgebraError::DimensionMismatch {
                    expected: dim,
                    actual: row.len(),
                });
            }
        }

        Ok(Self { rows })
    }

    /// Construtor interno para builders que garantem a forma por construção
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<Complex64>>) -> Self {
        Self { rows }
    }

    /// Matriz identidade para `qubits` qubits
    pub fn identity(qubits: usize) -> Self {
        let dim = 1usize << qubits.max(1);
        let mut rows = vec![vec![ZERO; dim]; dim];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = ONE;
        }
        Self { rows }
    }

    /// Dimensão da matriz (2^n)
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Número de qubits sobre os quais o gate age
    pub fn qubit_count(&self) -> usize {
        self.rows.len().trailing_zeros() as usize
    }

    /// Linhas da matriz
    pub fn rows(&self) -> &[Vec<Complex64>] {
        &self.rows
    }

    /// Elemento (linha, coluna)
    pub fn element(&self, row: usize, col: usize) -> Complex64 {
        self.rows[row][col]
    }

    /// Produto matriz × matriz
    pub fn mul(&self, other: &Self) -> AlgebraResult<Self> {
        let dim = self.dimension();
        if other.dimension() != dim {
            return Err(AlgebraError::DimensionMismatch {
                expected: dim,
                actual: other.dimension(),
            });
        }

        let mut rows = vec![vec![ZERO; dim]; dim];
        for i in 0..dim {
            for j in 0..dim {
                let mut sum = ZERO;
                for k in 0..dim {
                    sum += self.rows[i][k] * other.rows[k][j];
                }
                rows[i][j] = sum;
            }
        }

        Ok(Self { rows })
    }

    /// Produto matriz × vetor
    pub(crate) fn mul_vec(&self, vector: &[Complex64]) -> Vec<Complex64> {
        self.rows
            .iter()
            .map(|row| row.iter().zip(vector).map(|(m, v)| m * v).sum())
            .collect()
    }

    /// Produto de Kronecker: o operando esquerdo ocupa os bits altos
    pub fn tensor(&self, other: &Self) -> Self {
        let d1 = self.dimension();
        let d2 = other.dimension();
        let dim = d1 * d2;

        let mut rows = vec![vec![ZERO; dim]; dim];
        for i1 in 0..d1 {
            for j1 in 0..d1 {
                for i2 in 0..d2 {
                    for j2 in 0..d2 {
                        rows[i1 * d2 + i2][j1 * d2 + j2] = self.rows[i1][j1] * other.rows[i2][j2];
                    }
                }
            }
        }

        Self { rows }
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Self {
        let dim = self.dimension();
        let mut rows = vec![vec![ZERO; dim]; dim];
        for i in 0..dim {
            for j in 0..dim {
                rows[j][i] = self.rows[i][j].conj();
            }
        }
        Self { rows }
    }

    /// Multiplicação por escalar real
    pub fn scale(&self, scalar: f64) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(|e| e * scalar).collect())
                .collect(),
        }
    }

    /// Verifica se M·M† ≈ I dentro da tolerância
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        let product = match self.mul(&self.dagger()) {
            Ok(p) => p,
            Err(_) => return false,
        };

        let dim = self.dimension();
        for i in 0..dim {
            for j in 0..dim {
                let expected = if i == j { 1.0 } else { 0.0 };
                if (product.rows[i][j].re - expected).abs() > tolerance
                    || product.rows[i][j].im.abs() > tolerance
                {
                    return false;
                }
            }
        }
        true
    }
}

// =============================================================================
// Testes
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let id = Unitary::identity(2);
        assert_eq!(id.dimension(), 4);
        assert_eq!(id.qubit_count(), 2);
        assert!(id.is_unitary(1e-10));
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let rows = vec![
            vec![ONE, ZERO],
            vec![ZERO],
        ];
        assert!(Unitary::from_rows(rows).is_err());
    }

    #[test]
    fn test_mul_dimension_mismatch() {
        let a = Unitary::identity(1);
        let b = Unitary::identity(2);
        assert!(a.mul(&b).is_err());
    }

    #[test]
    fn test_tensor_dimensions() {
        let a = Unitary::identity(1);
        let b = Unitary::identity(2);
        let c = a.tensor(&b);
        assert_eq!(c.dimension(), 8);
        assert!(c.is_unitary(1e-10));
    }

    #[test]
    fn test_scale() {
        let half = Unitary::identity(1).scale(0.5);
        assert_eq!(half.element(0, 0), Complex64::new(0.5, 0.0));
        assert_eq!(half.element(0, 1), ZERO);
    }

    #[test]
    fn test_dagger_involution() {
        let m = Unitary::from_rows(vec![
            vec![Complex64::new(0.0, 0.0), Complex64::new(0.0, -1.0)],
            vec![Complex64::new(0.0, 1.0), Complex64::new(0.0, 0.0)],
        ])
        .unwrap();

        assert_eq!(m.dagger().dagger(), m);
    }
}
