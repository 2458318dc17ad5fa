//! # Bell Protocols — Preparação, Codificação e Medição de Bell
//!
//! Composições puras sobre o motor de simulação: nenhum estado próprio.
//!
//! ## Estados de Bell
//!
//! ```text
//! Estado inicial               Estado de Bell
//! --------------------------   -----------------------
//! 00 → q1=|0⟩, q2=|0⟩     -->  (|00⟩ + |11⟩)/√2
//! 01 → q1=|0⟩, q2=|1⟩     -->  (|01⟩ + |10⟩)/√2
//! 10 → q1=|1⟩, q2=|0⟩     -->  (|00⟩ - |11⟩)/√2
//! 11 → q1=|1⟩, q2=|1⟩     -->  (|01⟩ - |10⟩)/√2
//! ```

use qsim_core::{gates, Unitary};
use qsim_engine::{Simulator, SimulatorError, SimulatorResult};

/// Prepara o par maximamente emaranhado (|00⟩ + |11⟩)/√2
///
/// Cria os qubits no estado |0⟩ se ainda não existirem (reutiliza os já
/// registrados), aplica Hadamard em `q1` e CNOT com `q1` de controle.
pub fn prepare_bell(sim: &mut Simulator, q1: &str, q2: &str) -> SimulatorResult<()> {
    if !sim.registry().contains(q1) {
        sim.create_qubit_basis(q1, 0)?;
    }
    if !sim.registry().contains(q2) {
        sim.create_qubit_basis(q2, 0)?;
    }

    sim.apply_gate(&gates::hadamard(), &[q1])?;
    sim.apply_gate(&gates::cnot(), &[q1, q2])
}

/// Prepara um dos quatro estados de Bell a partir do estado inicial 0..=3
///
/// Os dois qubits são criados do zero; os bits de `initial` escolhem o
/// estado de base pré-emaranhamento de cada um (ver tabela do módulo).
pub fn prepare_bell_initial(
    sim: &mut Simulator,
    q1: &str,
    q2: &str,
    initial: u8,
) -> SimulatorResult<()> {
    if initial > 3 {
        return Err(SimulatorError::InvalidState(format!(
            "Bell initial state must be 0..=3, got {initial}"
        )));
    }

    sim.create_qubit_basis(q1, (initial >> 1) & 1)?;
    sim.create_qubit_basis(q2, initial & 1)?;

    sim.apply_gate(&gates::hadamard(), &[q1])?;
    sim.apply_gate(&gates::cnot(), &[q1, q2])
}

/// Codifica dois bits clássicos num qubit de um par de Bell
///
/// Operação local: X se `bit2`, depois Z se `bit1`, composta numa única
/// matriz. Muda o estado CONJUNTO de Bell de forma determinística,
/// permitindo recuperar os dois bits via medição de Bell.
pub fn encode_bell(sim: &mut Simulator, bit1: u8, bit2: u8, qubit: &str) -> SimulatorResult<()> {
    if bit1 > 1 || bit2 > 1 {
        return Err(SimulatorError::InvalidState(format!(
            "classical bits must be 0 or 1, got ({bit1}, {bit2})"
        )));
    }

    let gate = match (bit1, bit2) {
        (0, 0) => Unitary::identity(1),
        (0, 1) => gates::pauli_x(),
        (1, 0) => gates::pauli_z(),
        _ => gates::pauli_z().mul(&gates::pauli_x())?,
    };

    sim.apply_gate(&gate, &[qubit])
}

/// Medição na base de Bell: devolve os dois bits clássicos
///
/// Aplica o circuito inverso da preparação (CNOT e depois Hadamard) para
/// mapear a base de Bell de volta à base computacional, e mede ambos.
pub fn measure_bell(sim: &mut Simulator, q1: &str, q2: &str) -> SimulatorResult<(u8, u8)> {
    sim.apply_gate(&gates::cnot(), &[q1, q2])?;
    sim.apply_gate(&gates::hadamard(), &[q1])?;

    let b1 = sim.measure_qubit(q1)?;
    let b2 = sim.measure_qubit(q2)?;
    Ok((b1, b2))
}

/// Superdense coding: envia dois bits clássicos por um par emaranhado
pub fn send_superdense(
    sim: &mut Simulator,
    a1: u8,
    a2: u8,
    sender: &str,
    receiver: &str,
) -> SimulatorResult<(u8, u8)> {
    prepare_bell(sim, sender, receiver)?;
    encode_bell(sim, a1, a2, sender)?;
    measure_bell(sim, sender, receiver)
}

// =============================================================================
// Testes
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_bell_entangles() {
        let mut sim = Simulator::with_seed(1);
        prepare_bell(&mut sim, "a", "b").unwrap();

        let ha = sim.registry().resolve("a").unwrap();
        let hb = sim.registry().resolve("b").unwrap();
        assert_eq!(ha.group, hb.group);

        let probabilities = sim.registry().group_probabilities(ha.group).unwrap();
        assert!((probabilities[0b00] - 0.5).abs() < 1e-9);
        assert!(probabilities[0b01].abs() < 1e-9);
        assert!(probabilities[0b10].abs() < 1e-9);
        assert!((probabilities[0b11] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_prepare_bell_initial_validates_range() {
        let mut sim = Simulator::with_seed(1);
        assert!(matches!(
            prepare_bell_initial(&mut sim, "a", "b", 4),
            Err(SimulatorError::InvalidState(_))
        ));
    }

    #[test]
    fn test_prepare_bell_initial_psi_plus() {
        // Estado inicial 01 → (|01⟩ + |10⟩)/√2
        let mut sim = Simulator::with_seed(1);
        prepare_bell_initial(&mut sim, "a", "b", 1).unwrap();

        let id = sim.registry().resolve("a").unwrap().group;
        let probabilities = sim.registry().group_probabilities(id).unwrap();
        assert!((probabilities[0b01] - 0.5).abs() < 1e-9);
        assert!((probabilities[0b10] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_encode_bell_rejects_invalid_bits() {
        let mut sim = Simulator::with_seed(1);
        prepare_bell(&mut sim, "a", "b").unwrap();

        assert!(matches!(
            encode_bell(&mut sim, 2, 0, "a"),
            Err(SimulatorError::InvalidState(_))
        ));
    }

    #[test]
    fn test_bell_round_trip_all_combinations() {
        for bit1 in 0..=1u8 {
            for bit2 in 0..=1u8 {
                let mut sim = Simulator::with_seed(7);
                prepare_bell(&mut sim, "a", "b").unwrap();
                encode_bell(&mut sim, bit1, bit2, "a").unwrap();

                let (r1, r2) = measure_bell(&mut sim, "a", "b").unwrap();
                assert_eq!((r1, r2), (bit1, bit2));
            }
        }
    }

    #[test]
    fn test_send_superdense() {
        for a1 in 0..=1u8 {
            for a2 in 0..=1u8 {
                let mut sim = Simulator::with_seed(13);
                let (b1, b2) = send_superdense(&mut sim, a1, a2, "s", "r").unwrap();
                assert_eq!((b1, b2), (a1, a2));
            }
        }
    }
}
