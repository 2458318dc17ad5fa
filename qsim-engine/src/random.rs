//! # CollapseSource — Fonte de Aleatoriedade Injetável
//!
//! A amostragem de medição consome sorteios uniformes em [0, 1) de uma
//! única fonte pseudo-aleatória. A fonte é uma dependência explícita do
//! [`crate::Simulator`] para que testes substituam por sequências
//! determinísticas (com seed ou com sorteios injetados).

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fonte de sorteios uniformes em [0, 1) para o colapso de medição
pub trait CollapseSource {
    /// Próximo sorteio uniforme em [0, 1)
    fn draw(&mut self) -> f64;
}

/// Fonte padrão: RNG da thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl CollapseSource for ThreadRandom {
    fn draw(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

/// Fonte determinística com seed (reprodutível entre execuções)
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Cria fonte a partir de um seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CollapseSource for SeededRandom {
    fn draw(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Fonte com sorteios pré-definidos para injetar resultados em testes
///
/// Quando a fila se esgota, devolve 0.5 — mantém o comportamento
/// determinístico em vez de interromper o protocolo no meio.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    draws: VecDeque<f64>,
}

impl ScriptedDraws {
    /// Cria fonte a partir de uma sequência de sorteios
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Sorteios restantes na fila
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl CollapseSource for ScriptedDraws {
    fn draw(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(0.5)
    }
}

// =============================================================================
// Testes
// =============================================================================
