//! # QubitRegistry — Registro de Qubits e Grupos Emaranhados
//!
//! Mapeia nomes externos de qubits para handles `(grupo, posição)` e
//! gerencia o ciclo de vida dos grupos: criação, fusão (produto tensorial),
//! reordenação e separação após medição.
//!
//! ## Invariantes
//!
//! - Cada qubit vivo pertence a exatamente um grupo, com posição única
//! - O membro na posição 0 corresponde ao bit MAIS significativo do índice
//!   do vetor conjunto
//! - O vetor de cada grupo tem norma unitária em todo ponto observável
//!
//! Os grupos vivem numa arena indexável; qubits guardam handles em vez de
//! referências compartilhadas.

use std::collections::HashMap;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use qsim_core::StateVector;

use crate::error::{SimulatorError, SimulatorResult};

/// Identificador de grupo na arena
pub type GroupId = usize;

/// Handle de um qubit: grupo e posição dentro do grupo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QubitHandle {
    /// Índice do grupo na arena
    pub group: GroupId,
    /// Posição no grupo (0 = bit mais significativo)
    pub position: usize,
}

/// Cluster emaranhado: k qubits compartilhando um vetor de 2^k amplitudes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    members: Vec<String>,
    vector: StateVector,
}

impl Group {
    /// Nomes dos membros em ordem de exibição (posição 0 primeiro)
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Vetor de amplitudes conjunto
    pub fn vector(&self) -> &StateVector {
        &self.vector
    }

    /// Número de qubits no grupo
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Grupo nunca é vazio enquanto vivo
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn vector_mut(&mut self) -> &mut StateVector {
        &mut self.vector
    }
}

/// Registro de qubits nomeados e seus grupos
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QubitRegistry {
    groups: Vec<Option<Group>>,
    handles: HashMap<String, QubitHandle>,
}

impl QubitRegistry {
    /// Cria registro vazio
    pub fn new() -> Self {
        Self::default()
    }

    /// Verifica se o nome está registrado
    pub fn contains(&self, name: &str) -> bool {
        self.handles.contains_key(name)
    }

    /// Registra um qubit novo em superposição arbitrária
    pub fn create(&mut self, name: &str, a0: Complex64, a1: Complex64) -> SimulatorResult<()> {
        if self.contains(name) {
            return Err(SimulatorError::DuplicateName(name.to_string()));
        }

        let vector = StateVector::qubit(a0, a1)?;
        self.insert_singleton(name, vector);
        Ok(())
    }

    /// Registra um qubit novo no estado de base |0⟩ ou |1⟩
    pub fn create_basis(&mut self, name: &str, bit: u8) -> SimulatorResult<()> {
        if bit > 1 {
            return Err(SimulatorError::InvalidState(format!(
                "classical bit must be 0 or 1, got {bit}"
            )));
        }
        if self.contains(name) {
            return Err(SimulatorError::DuplicateName(name.to_string()));
        }

        let vector = StateVector::basis(1, bit as usize)?;
        self.insert_singleton(name, vector);
        Ok(())
    }

    /// Resolve um nome para seu handle atual
    pub fn resolve(&self, name: &str) -> SimulatorResult<QubitHandle> {
        self.handles
            .get(name)
            .copied()
            .ok_or_else(|| SimulatorError::UnknownQubit(name.to_string()))
    }

    /// Funde dois grupos distintos via produto tensorial
    ///
    /// O grupo `ga` mantém os bits altos; os qubits de `gb` passam a ocupar
    /// as posições seguintes. Devolve o id do grupo resultante.
    pub fn merge(&mut self, ga: GroupId, gb: GroupId) -> SimulatorResult<GroupId> {
        if ga == gb {
            return Err(SimulatorError::MergeConflict(format!(
                "qubits already share group {ga}"
            )));
        }

        let offset = self.group_ref(ga)?.members.len();
        let absorbed = self.take_group(gb)?;

        tracing::debug!(from = gb, into = ga, "merging entangled groups");

        for (i, name) in absorbed.members.iter().enumerate() {
            self.handles.insert(
                name.clone(),
                QubitHandle {
                    group: ga,
                    position: offset + i,
                },
            );
        }

        let group = self.group_mut(ga)?;
        group.vector = group.vector.tensor(&absorbed.vector);
        group.members.extend(absorbed.members);

        Ok(ga)
    }

    /// Reordena o grupo para que `leading` ocupe as primeiras posições
    ///
    /// Aplica a permutação de bits correspondente ao vetor conjunto e
    /// atualiza as posições de todos os membros. No-op quando os qubits
    /// nomeados já lideram na ordem pedida.
    pub fn reorder(&mut self, id: GroupId, leading: &[&str]) -> SimulatorResult<()> {
        let group = self.group_ref(id)?;
        let k = group.members.len();

        if group
            .members
            .iter()
            .zip(leading)
            .take(leading.len())
            .all(|(m, l)| m == l)
            && leading.len() <= k
        {
            return Ok(());
        }

        let mut new_members: Vec<String> = Vec::with_capacity(k);
        for name in leading {
            if !group.members.iter().any(|m| m == name) {
                return Err(SimulatorError::MergeConflict(format!(
                    "qubit {name} is not a member of group {id}"
                )));
            }
            new_members.push((*name).to_string());
        }
        for member in &group.members {
            if !leading.contains(&member.as_str()) {
                new_members.push(member.clone());
            }
        }

        // Par (novo bit, bit antigo) para cada qubit; posição 0 = bit k-1
        let mut pairs = Vec::with_capacity(k);
        for (new_pos, name) in new_members.iter().enumerate() {
            let old_pos = group
                .members
                .iter()
                .position(|m| m == name)
                .ok_or_else(|| {
                    SimulatorError::MergeConflict(format!("qubit {name} lost during reorder"))
                })?;
            pairs.push((k - 1 - new_pos, k - 1 - old_pos));
        }

        tracing::debug!(group = id, leading = leading.len(), "reordering group members");

        let group = self.group_mut(id)?;
        group.vector.permute_bits(&pairs)?;
        group.members = new_members;

        let renamed = self.group_ref(id)?.members.clone();
        for (position, name) in renamed.into_iter().enumerate() {
            self.handles
                .insert(name, QubitHandle { group: id, position });
        }

        Ok(())
    }

    /// Separa um qubit já colapsado (posição 0) do seu grupo
    ///
    /// Só é válido depois que a projeção de medição reduziu o estado a um
    /// produto tensorial puro nessa fronteira: a metade descartada do vetor
    /// deve ser toda nula. O qubit vira um grupo singleton no estado de
    /// base `bit`; o resto do grupo fica com o vetor reduzido.
    pub fn split_classical(&mut self, name: &str, bit: u8) -> SimulatorResult<()> {
        let handle = self.resolve(name)?;
        if handle.position != 0 {
            return Err(SimulatorError::MergeConflict(format!(
                "qubit {name} is not at the leading position of its group"
            )));
        }

        let group = self.group_mut(handle.group)?;
        let k = group.members.len();

        if k == 1 {
            // Singleton: o grupo inteiro é retirado e recriado no valor medido
            self.retire_group(handle.group)?;
        } else {
            let half = group.vector.len() / 2;
            let start = bit as usize * half;
            let kept = group.vector.amplitudes()[start..start + half].to_vec();

            group.vector = StateVector::from_amplitudes(kept)?;
            group.members.remove(0);

            let remaining = self.group_ref(handle.group)?.members.clone();
            for member in remaining {
                if let Some(h) = self.handles.get_mut(&member) {
                    h.position -= 1;
                }
            }
        }

        self.handles.remove(name);
        let vector = StateVector::basis(1, bit as usize)?;
        self.insert_singleton(name, vector);
        Ok(())
    }

    /// Remove um qubit não emaranhado do registro
    pub fn remove(&mut self, name: &str) -> SimulatorResult<()> {
        let handle = self.resolve(name)?;
        if self.group_ref(handle.group)?.members.len() != 1 {
            return Err(SimulatorError::InvalidState(format!(
                "qubit {name} is entangled and cannot be removed"
            )));
        }

        self.retire_group(handle.group)?;
        self.handles.remove(name);
        Ok(())
    }

    /// Descarta todos os qubits e grupos
    pub fn clear(&mut self) {
        self.groups.clear();
        self.handles.clear();
    }

    // =========================================================================
    // Consultas read-only (consumidas por código de apresentação)
    // =========================================================================

    /// Nomes de todos os qubits vivos, em ordem alfabética
    pub fn qubit_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Ids dos grupos vivos
    pub fn group_ids(&self) -> Vec<GroupId> {
        self.groups
            .iter()
            .enumerate()
            .filter_map(|(id, g)| g.as_ref().map(|_| id))
            .collect()
    }

    /// Grupo vivo por id
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id).and_then(Option::as_ref)
    }

    /// Probabilidades derivadas do vetor de um grupo
    pub fn group_probabilities(&self, id: GroupId) -> Option<Vec<f64>> {
        self.group(id).map(|g| g.vector.probabilities())
    }

    /// Número de qubits vivos
    pub fn qubit_count(&self) -> usize {
        self.handles.len()
    }

    // =========================================================================
    // Internos
    // =========================================================================

    fn insert_singleton(&mut self, name: &str, vector: StateVector) {
        let id = self.groups.len();
        self.groups.push(Some(Group {
            members: vec![name.to_string()],
            vector,
        }));
        self.handles
            .insert(name.to_string(), QubitHandle { group: id, position: 0 });
    }

    fn group_ref(&self, id: GroupId) -> SimulatorResult<&Group> {
        self.group(id)
            .ok_or_else(|| SimulatorError::MergeConflict(format!("group {id} is not live")))
    }

    pub(crate) fn group_mut(&mut self, id: GroupId) -> SimulatorResult<&mut Group> {
        self.groups
            .get_mut(id)
            .and_then(Option::as_mut)
            .ok_or_else(|| SimulatorError::MergeConflict(format!("group {id} is not live")))
    }

    fn take_group(&mut self, id: GroupId) -> SimulatorResult<Group> {
        self.groups
            .get_mut(id)
            .and_then(Option::take)
            .ok_or_else(|| SimulatorError::MergeConflict(format!("group {id} is not live")))
    }

    fn retire_group(&mut self, id: GroupId) -> SimulatorResult<()> {
        self.take_group(id).map(|_| ())
    }
}

// =============================================================================
// Testes
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64) -> Complex64 {
        Complex64::new(re, 0.0)
    }

    #[test]
    fn test_create_and_resolve() {
        let mut registry = QubitRegistry::new();
        registry.create("a", c(1.0), c(0.0)).unwrap();

        let handle = registry.resolve("a").unwrap();
        assert_eq!(handle.position, 0);
        assert_eq!(registry.group(handle.group).unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = QubitRegistry::new();
        registry.create("a", c(1.0), c(0.0)).unwrap();

        let result = registry.create("a", c(0.0), c(1.0));
        assert!(matches!(result, Err(SimulatorError::DuplicateName(_))));
    }

    #[test]
    fn test_unknown_qubit() {
        let registry = QubitRegistry::new();
        assert!(matches!(
            registry.resolve("ghost"),
            Err(SimulatorError::UnknownQubit(_))
        ));
    }

    #[test]
    fn test_merge_combines_vectors() {
        let mut registry = QubitRegistry::new();
        registry.create_basis("a", 1).unwrap();
        registry.create_basis("b", 0).unwrap();

        let ga = registry.resolve("a").unwrap().group;
        let gb = registry.resolve("b").unwrap().group;
        let merged = registry.merge(ga, gb).unwrap();

        let group = registry.group(merged).unwrap();
        assert_eq!(group.members(), &["a", "b"]);
        // |1⟩ ⊗ |0⟩ = |10⟩
        assert_eq!(group.vector().amplitudes()[0b10], c(1.0));
        assert_eq!(registry.resolve("b").unwrap().position, 1);
    }

    #[test]
    fn test_merge_same_group_is_conflict() {
        let mut registry = QubitRegistry::new();
        registry.create_basis("a", 0).unwrap();
        let ga = registry.resolve("a").unwrap().group;

        assert!(matches!(
            registry.merge(ga, ga),
            Err(SimulatorError::MergeConflict(_))
        ));
    }

    #[test]
    fn test_reorder_moves_qubit_to_front() {
        let mut registry = QubitRegistry::new();
        registry.create_basis("a", 1).unwrap();
        registry.create_basis("b", 0).unwrap();

        let ga = registry.resolve("a").unwrap().group;
        let gb = registry.resolve("b").unwrap().group;
        let gid = registry.merge(ga, gb).unwrap();

        registry.reorder(gid, &["b"]).unwrap();

        let group = registry.group(gid).unwrap();
        assert_eq!(group.members(), &["b", "a"]);
        // |10⟩ na ordem (a, b) vira |01⟩ na ordem (b, a)
        assert_eq!(group.vector().amplitudes()[0b01], c(1.0));
        assert_eq!(registry.resolve("a").unwrap().position, 1);
        assert_eq!(registry.resolve("b").unwrap().position, 0);
    }

    #[test]
    fn test_split_classical_detaches_leading_qubit() {
        let mut registry = QubitRegistry::new();
        registry.create_basis("a", 1).unwrap();
        registry.create_basis("b", 0).unwrap();

        let ga = registry.resolve("a").unwrap().group;
        let gb = registry.resolve("b").unwrap().group;
        let gid = registry.merge(ga, gb).unwrap();

        registry.split_classical("a", 1).unwrap();

        let ha = registry.resolve("a").unwrap();
        assert_ne!(ha.group, gid);
        assert_eq!(registry.group(ha.group).unwrap().vector().amplitudes()[1], c(1.0));

        let hb = registry.resolve("b").unwrap();
        assert_eq!(hb.position, 0);
        assert_eq!(registry.group(hb.group).unwrap().vector().amplitudes()[0], c(1.0));
    }

    #[test]
    fn test_remove_entangled_qubit_fails() {
        let mut registry = QubitRegistry::new();
        registry.create_basis("a", 0).unwrap();
        registry.create_basis("b", 0).unwrap();

        let ga = registry.resolve("a").unwrap().group;
        let gb = registry.resolve("b").unwrap().group;
        registry.merge(ga, gb).unwrap();

        assert!(matches!(
            registry.remove("a"),
            Err(SimulatorError::InvalidState(_))
        ));
    }

    #[test]
    fn test_clear() {
        let mut registry = QubitRegistry::new();
        registry.create_basis("a", 0).unwrap();
        registry.clear();

        assert_eq!(registry.qubit_count(), 0);
        assert!(registry.group_ids().is_empty());
    }
}
