//! # Regras Fuzzy Linguísticas
//!
//! Uma [`FuzzyRule`] é uma conjunção de condições `atributo é termo` que
//! conclui uma [`WineCategory`]:
//!
//! ```text
//! SE intensidade_sabor é alto E gordura é alta ENTÃO perfil=encorpado
//! ```
//!
//! ## Termos Linguísticos
//!
//! Cada atributo tem três termos ([`Level`]). A grafia depende do gênero
//! gramatical do atributo, sem diferença semântica:
//!
//! | Level | Masculino | Feminino (acidez, gordura, proteína) |
//! |-------|-----------|--------------------------------------|
//! | `Low` | baixo | baixa |
//! | `Medium` | medio | media |
//! | `High` | alto | alta |
//!
//! ## Unicidade
//!
//! Duas regras são a mesma regra quando têm o mesmo **conjunto** de pares
//! `(atributo, termo)` e o mesmo consequente. [`deduplicate`] mantém apenas
//! a de maior confiança de cada grupo.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::core::{Attribute, WineCategory};

/// Termo linguístico de um atributo de entrada.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Mapeamento crisp → fuzzy, total e determinístico:
    /// `< 4` baixo, `4 ≤ v < 7` médio, `≥ 7` alto.
    pub fn from_crisp(value: f64) -> Level {
        if value < 4.0 {
            Level::Low
        } else if value < 7.0 {
            Level::Medium
        } else {
            Level::High
        }
    }

    /// Grafia do termo para o atributo informado.
    pub fn label_for(self, attribute: Attribute) -> &'static str {
        match (self, attribute.is_feminine()) {
            (Level::Low, false) => "baixo",
            (Level::Medium, false) => "medio",
            (Level::High, false) => "alto",
            (Level::Low, true) => "baixa",
            (Level::Medium, true) => "media",
            (Level::High, true) => "alta",
        }
    }
}

/// Converte um valor numérico no termo linguístico do atributo.
pub fn crisp_to_term(attribute: Attribute, value: f64) -> &'static str {
    Level::from_crisp(value).label_for(attribute)
}

/// Condição `atributo é termo`, com o valor numérico que a originou.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Condition {
    pub attribute: Attribute,
    pub level: Level,
    /// Valor crisp fuzzificado (threshold do split, ou threshold + deslocamento).
    pub value: f64,
}

impl Condition {
    pub fn from_crisp(attribute: Attribute, value: f64) -> Self {
        Self {
            attribute,
            level: Level::from_crisp(value),
            value,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} é {}", self.attribute, crisp_to_term(self.attribute, self.value))
    }
}

/// Chave de unicidade de uma regra.
pub type RuleKey = (BTreeSet<(Attribute, Level)>, WineCategory);

/// Regra de classificação aprendida a partir de uma folha da árvore.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FuzzyRule {
    pub conditions: Vec<Condition>,
    pub consequent: WineCategory,
    /// Confiança da folha de origem, em `[0, 1]`.
    pub confidence: f64,
    /// Número de pratos de treinamento na folha de origem.
    pub support: usize,
}

impl FuzzyRule {
    pub fn key(&self) -> RuleKey {
        let set = self
            .conditions
            .iter()
            .map(|c| (c.attribute, c.level))
            .collect();
        (set, self.consequent)
    }

    /// Forma textual: `SE a é x E b é y ENTÃO perfil=categoria`.
    pub fn to_text(&self) -> String {
        let conditions = self
            .conditions
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" E ");
        format!("SE {} ENTÃO perfil={}", conditions, self.consequent)
    }
}

impl fmt::Display for FuzzyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (conf: {:.2}, supp: {})",
            self.to_text(),
            self.confidence,
            self.support
        )
    }
}

/// Remove regras redundantes, mantendo a de maior confiança por chave.
///
/// A ordem de saída é a ordem da primeira ocorrência de cada chave.
/// Em caso de empate de confiança, a primeira ocorrência permanece.
/// Idempotente: aplicar duas vezes dá o mesmo resultado que uma.
pub fn deduplicate(rules: Vec<FuzzyRule>) -> Vec<FuzzyRule> {
    let mut unique: Vec<(RuleKey, FuzzyRule)> = Vec::with_capacity(rules.len());
    for rule in rules {
        let key = rule.key();
        match unique.iter_mut().find(|(k, _)| *k == key) {
            Some((_, kept)) => {
                if rule.confidence > kept.confidence {
                    *kept = rule;
                }
            }
            None => unique.push((key, rule)),
        }
    }
    unique.into_iter().map(|(_, rule)| rule).collect()
}
