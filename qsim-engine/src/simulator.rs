//! # Simulator — Sessão de Simulação Quântica
//!
//! Objeto de sessão que possui o [`QubitRegistry`] e a fonte de
//! aleatoriedade de medição. Sem estado global ambiente: cada experimento
//! instancia a própria sessão e descarta tudo ao final.
//!
//! ## Aplicação de gate
//!
//! 1. Valida dimensão, nomes distintos e registrados (antes de qualquer
//!    mutação)
//! 2. Funde os grupos atravessados, par a par, na ordem encontrada
//! 3. Reordena o vetor conjunto para os qubits nomeados liderarem
//! 4. Expande o gate com identidade para os qubits não tocados e multiplica
//!
//! ## Medição
//!
//! Regra de Born sobre os 2^m resultados dos bits líderes, sorteio contra a
//! distribuição cumulativa, colapso projetivo com renormalização por √p e
//! separação de cada qubit medido em grupo singleton — o emaranhamento
//! residual entre os qubits NÃO medidos é preservado.

use std::collections::HashSet;
use std::fmt;

use num_complex::Complex64;

use qsim_core::{Unitary, NORM_TOLERANCE};

use crate::error::{SimulatorError, SimulatorResult};
use crate::random::{CollapseSource, ScriptedDraws, SeededRandom, ThreadRandom};
use crate::registry::{GroupId, QubitRegistry};

/// Sessão de simulação: registro de qubits + fonte de colapso
pub struct Simulator {
    registry: QubitRegistry,
    source: Box<dyn CollapseSource>,
}

impl Simulator {
    /// Cria sessão com a fonte de aleatoriedade padrão (RNG da thread)
    pub fn new() -> Self {
        Self::with_source(ThreadRandom)
    }

    /// Cria sessão com fonte determinística a partir de um seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_source(SeededRandom::new(seed))
    }

    /// Cria sessão com sorteios injetados (testes de resultado forçado)
    pub fn with_draws(draws: impl IntoIterator<Item = f64>) -> Self {
        Self::with_source(ScriptedDraws::new(draws))
    }

    /// Cria sessão com uma fonte de colapso explícita
    pub fn with_source(source: impl CollapseSource + 'static) -> Self {
        Self {
            registry: QubitRegistry::new(),
            source: Box::new(source),
        }
    }

    /// Acesso read-only ao registro (consultas de apresentação)
    pub fn registry(&self) -> &QubitRegistry {
        &self.registry
    }

    /// Registra um qubit em superposição arbitrária
    pub fn create_qubit(&mut self, name: &str, a0: Complex64, a1: Complex64) -> SimulatorResult<()> {
        self.registry.create(name, a0, a1)
    }

    /// Registra um qubit no estado de base |0⟩ ou |1⟩
    pub fn create_qubit_basis(&mut self, name: &str, bit: u8) -> SimulatorResult<()> {
        self.registry.create_basis(name, bit)
    }

    /// Remove um qubit não emaranhado
    pub fn remove_qubit(&mut self, name: &str) -> SimulatorResult<()> {
        self.registry.remove(name)
    }

    /// Descarta todos os qubits da sessão
    pub fn clear(&mut self) {
        self.registry.clear();
    }

    /// Aplica uma matriz unitária aos qubits nomeados
    pub fn apply_gate(&mut self, gate: &Unitary, names: &[&str]) -> SimulatorResult<()> {
        self.validate_names(names)?;

        let expected = 1usize << names.len();
        if gate.dimension() != expected {
            return Err(SimulatorError::DimensionMismatch {
                dimension: gate.dimension(),
                qubits: names.len(),
            });
        }

        let id = self.gather(names)?;
        let group = self.registry.group_mut(id)?;
        let k = group.len();

        tracing::debug!(qubits = names.len(), group = id, group_size = k, "applying gate");

        if k > names.len() {
            let padded = gate.tensor(&Unitary::identity(k - names.len()));
            group.vector_mut().apply(&padded)?;
        } else {
            group.vector_mut().apply(gate)?;
        }

        debug_assert!(
            self.registry
                .group(id)
                .is_some_and(|g| g.vector().is_normalized(NORM_TOLERANCE)),
            "unitary gate application must preserve the norm"
        );

        Ok(())
    }

    /// Mede os qubits nomeados, devolvendo um bit clássico por qubit
    pub fn measure(&mut self, names: &[&str]) -> SimulatorResult<Vec<u8>> {
        self.validate_names(names)?;

        let id = self.gather(names)?;
        let m = names.len();
        let (chosen, probability) = self.sample_outcome(id, m)?;

        tracing::debug!(group = id, outcome = chosen, probability, "measurement collapse");

        // Colapso projetivo: zera amplitudes incompatíveis e renormaliza
        let group = self.registry.group_mut(id)?;
        let shift = group.len() - m;
        let vector = group.vector_mut();
        vector.project(|index| index >> shift == chosen);
        vector.renormalize()?;

        // Cada qubit medido vira grupo singleton com seu valor determinado
        let mut bits = Vec::with_capacity(m);
        for (i, name) in names.iter().enumerate() {
            let bit = ((chosen >> (m - 1 - i)) & 1) as u8;
            self.registry.split_classical(name, bit)?;
            bits.push(bit);
        }

        Ok(bits)
    }

    /// Mede um único qubit
    pub fn measure_qubit(&mut self, name: &str) -> SimulatorResult<u8> {
        let bits = self.measure(&[name])?;
        bits.first().copied().ok_or_else(|| {
            SimulatorError::InvalidState("measurement produced no outcome".into())
        })
    }

    /// Distribuição marginal {p(0), p(1)} de um qubit, sem medir
    pub fn qubit_probabilities(&self, name: &str) -> SimulatorResult<[f64; 2]> {
        let handle = self.registry.resolve(name)?;
        let group = self
            .registry
            .group(handle.group)
            .ok_or_else(|| SimulatorError::UnknownQubit(name.to_string()))?;

        let bit = group.len() - 1 - handle.position;
        let mut marginal = [0.0f64; 2];
        for (index, amplitude) in group.vector().amplitudes().iter().enumerate() {
            marginal[(index >> bit) & 1] += amplitude.norm_sqr();
        }

        Ok(marginal)
    }

    // =========================================================================
    // Internos
    // =========================================================================

    /// Validação completa antes de qualquer mutação (atomicidade)
    fn validate_names(&self, names: &[&str]) -> SimulatorResult<()> {
        if names.is_empty() {
            return Err(SimulatorError::InvalidState(
                "operation requires at least one qubit".into(),
            ));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in names {
            self.registry.resolve(name)?;
            if !seen.insert(*name) {
                return Err(SimulatorError::DuplicateName((*name).to_string()));
            }
        }

        Ok(())
    }

    /// Funde e reordena até os qubits nomeados liderarem um único grupo
    fn gather(&mut self, names: &[&str]) -> SimulatorResult<GroupId> {
        let mut id = self.registry.resolve(names[0])?.group;
        for name in &names[1..] {
            let handle = self.registry.resolve(name)?;
            if handle.group != id {
                id = self.registry.merge(id, handle.group)?;
            }
        }

        self.registry.reorder(id, names)?;
        Ok(id)
    }

    /// Amostra um resultado sobre os m bits líderes do grupo
    fn sample_outcome(&mut self, id: GroupId, m: usize) -> SimulatorResult<(usize, f64)> {
        let group = self
            .registry
            .group(id)
            .ok_or_else(|| SimulatorError::MergeConflict(format!("group {id} is not live")))?;

        let shift = group.len() - m;
        let outcomes = 1usize << m;

        let mut probabilities = vec![0.0f64; outcomes];
        for (index, amplitude) in group.vector().amplitudes().iter().enumerate() {
            probabilities[index >> shift] += amplitude.norm_sqr();
        }

        // Normalização defensiva contra drift numérico acumulado
        let total: f64 = probabilities.iter().sum();
        if (total - 1.0).abs() > NORM_TOLERANCE {
            tracing::debug!(total, "probability drift detected, renormalizing");
            for p in &mut probabilities {
                *p /= total;
            }
        }

        let draw = self.source.draw();
        let mut cumulative = 0.0;
        let mut chosen = None;
        for (outcome, &p) in probabilities.iter().enumerate() {
            if p <= 0.0 {
                continue;
            }
            cumulative += p;
            chosen = Some((outcome, p));
            if draw < cumulative {
                break;
            }
        }

        chosen.ok_or_else(|| {
            SimulatorError::InvalidState("no outcome has nonzero probability".into())
        })
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Simulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulator")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Testes
// =============================================================================
