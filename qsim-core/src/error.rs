//! Tipos de erro para qsim-core

use thiserror::Error;

/// Resultado customizado para operações de álgebra linear
pub type AlgebraResult<T> = Result<T, AlgebraError>;

/// Erros que podem ocorrer em operações com vetores e matrizes
#[derive(Debug, Clone, Error)]
pub enum AlgebraError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid state: {0}")]
    InvalidState(String),
}
