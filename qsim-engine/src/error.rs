//! Tipos de erro para qsim-engine

use thiserror::Error;

use qsim_core::AlgebraError;

/// Resultado customizado para operações do simulador
pub type SimulatorResult<T> = Result<T, SimulatorError>;

/// Erros que podem ocorrer em operações do simulador
#[derive(Debug, Clone, Error)]
pub enum SimulatorError {
    #[error("Duplicate qubit name: {0}")]
    DuplicateName(String),

    #[error("Unknown qubit: {0}")]
    UnknownQubit(String),

    #[error("Dimension mismatch: gate of dimension {dimension} applied to {qubits} qubit(s)")]
    DimensionMismatch { dimension: usize, qubits: usize },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Interno: indica bug na lógica do registro se chegar ao chamador
    #[error("Merge conflict: {0}")]
    MergeConflict(String),

    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}
