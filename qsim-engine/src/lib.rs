//! # ⚛️ qsim-engine — Motor de Simulação do Circuito Quântico
//!
//! Implementa o registro de qubits nomeados, a aplicação de gates sobre
//! grupos emaranhados e a medição com colapso pela regra de Born.
//!
//! ## Computational Complexity
//!
//! **Merge — O(2^{a+b}):**
//! - Produto tensorial dos vetores de dois grupos
//!
//! **Gate apply — O(4^k):**
//! - k = qubits do grupo após a fusão; multiplicação matriz × vetor
//!
//! **Measurement — O(2^k):**
//! - Soma das magnitudes quadradas + colapso projetivo
//!
//! **Note:** o crescimento 2^k com a largura de emaranhamento é ilimitado
//! por design (alvo educacional, sem otimização para muitos qubits).
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          Simulator (sessão)                     │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  QubitRegistry (arena de grupos + handles)│  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Gate Application (merge → reorder → mul) │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Measurement (Born rule + collapse+split) │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  CollapseSource (RNG injetável)           │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use qsim_core::gates;
//! use qsim_engine::Simulator;
//!
//! let mut sim = Simulator::with_seed(42);
//! sim.create_qubit_basis("a", 0).unwrap();
//! sim.create_qubit_basis("b", 0).unwrap();
//!
//! // Par de Bell: H em a, depois CNOT(a → b)
//! sim.apply_gate(&gates::hadamard(), &["a"]).unwrap();
//! sim.apply_gate(&gates::cnot(), &["a", "b"]).unwrap();
//!
//! let bits = sim.measure(&["a", "b"]).unwrap();
//! assert_eq!(bits[0], bits[1]);
//! ```

pub mod error;
pub mod random;
pub mod registry;
pub mod simulator;

pub use error::{SimulatorError, SimulatorResult};
pub use random::{CollapseSource, ScriptedDraws, SeededRandom, ThreadRandom};
pub use registry::{Group, GroupId, QubitHandle, QubitRegistry};
pub use simulator::Simulator;
