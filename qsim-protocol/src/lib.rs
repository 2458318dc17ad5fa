//! # ⚛️ qsim-protocol — Protocolos sobre o Motor de Simulação
//!
//! Composições puras das primitivas do motor: preparação/codificação/
//! medição de Bell, superdense coding, teleporte e transformada de Fourier
//! quântica. Nenhum estado próprio além da sessão do chamador.
//!
//! ## Exemplo
//!
//! ```
//! use qsim_engine::Simulator;
//! use qsim_protocol::send_superdense;
//!
//! // Envia os bits (1, 0) de Alice para Bob via par emaranhado
//! let mut sim = Simulator::with_seed(42);
//! let (b1, b2) = send_superdense(&mut sim, 1, 0, "alice", "bob").unwrap();
//! assert_eq!((b1, b2), (1, 0));
//! ```

pub mod bell;
pub mod qft;
pub mod teleport;

pub use bell::{encode_bell, measure_bell, prepare_bell, prepare_bell_initial, send_superdense};
pub use qft::{fourier_transform, fourier_transform_direct};
pub use teleport::teleport_qubit;
