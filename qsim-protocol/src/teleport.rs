//! # Teleportation — Teleporte de Estado Quântico
//!
//! Protocolo de teleportação:
//!
//! 1. Alice e Bob compartilham o par de Bell (`via`, `dest`)
//! 2. Alice faz medição de Bell em (`source`, `via`) e obtém dois bits
//! 3. Bob aplica a correção `encode_bell` dos dois bits em `dest`
//!
//! Ao final `dest` está no estado que `source` tinha antes da medição;
//! `source` e `via` ficam colapsados em valores clássicos como efeito
//! colateral.

use qsim_engine::{Simulator, SimulatorResult};

use crate::bell::{encode_bell, measure_bell, prepare_bell};

/// Teleporta o estado de `source` para `dest` via o qubit ancilla `via`
///
/// Devolve os dois bits clássicos comunicados no meio do protocolo.
pub fn teleport_qubit(
    sim: &mut Simulator,
    source: &str,
    via: &str,
    dest: &str,
) -> SimulatorResult<(u8, u8)> {
    prepare_bell(sim, via, dest)?;
    let (b1, b2) = measure_bell(sim, source, via)?;
    encode_bell(sim, b1, b2, dest)?;
    Ok((b1, b2))
}

// =============================================================================
// Testes
// =============================================================================
