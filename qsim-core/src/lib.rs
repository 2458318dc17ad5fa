//! # ⚛️ qsim-core — Álgebra do Modelo de Circuito Quântico
//!
//! Núcleo matemático da simulação: vetores de amplitudes complexas,
//! matrizes unitárias e builders de gates padrão.
//!
//! ## Computational Complexity
//!
//! **Tensor product — O(2^a · 2^b):**
//! - Combina vetores de a e b qubits num vetor de a+b qubits
//!
//! **Gate apply — O(4^k):**
//! - Multiplicação matriz × vetor sobre o grupo de k qubits
//!
//! **Scalability:**
//! - Sistemas pequenos (k ≤ 10): ✓ Excellent
//! - Sistemas educacionais (k ≤ 20): △ Good
//! - O crescimento 2^k é ilimitado por design (non-goal de performance)
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          qsim-core                              │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  StateVector (2^k amplitudes, norma 1)    │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Unitary (matriz 2^n × 2^n)               │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  gates (H, X, Y, Z, phase, CNOT, DFT)     │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qsim_core::{StateVector, gates};
//!
//! let mut v = StateVector::basis(1, 0).unwrap();
//! v.apply(&gates::hadamard()).unwrap();
//!
//! assert!((v.probabilities()[0] - 0.5).abs() < 1e-9);
//! ```

pub mod error;
pub mod gates;
pub mod matrix;
pub mod vector;

pub use error::{AlgebraError, AlgebraResult};
pub use matrix::Unitary;
pub use vector::{StateVector, NORM_TOLERANCE, ZERO_TOLERANCE};
