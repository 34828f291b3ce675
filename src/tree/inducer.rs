//! # Indutor de Árvore por Impureza de Gini
//!
//! Constrói uma árvore de decisão binária a partir do [`LabeledDataset`],
//! particionando recursivamente as amostras pelo split de maior ganho.
//!
//! ## Algoritmo
//!
//! ```text
//! build(amostras, profundidade):
//!   se todas da mesma categoria
//!      OU profundidade >= max_depth
//!      OU |amostras| < min_samples_split      → folha
//!   para cada atributo (ordem fixa):
//!     valores distintos ordenados v₁ < v₂ < ... < vₖ
//!     para cada par adjacente: t = (vᵢ + vᵢ₊₁) / 2
//!       E = {x <= t}, D = {x > t}   (pula se algum lado vazio)
//!       ganho = Gini(pai) − (|E|·Gini(E) + |D|·Gini(D)) / |amostras|
//!   melhor ganho < min_gain                  → folha
//!   senão: nó interno + recursão em E e D (profundidade + 1)
//! ```
//!
//! Empates de ganho ficam com o **primeiro** atributo/threshold que atingiu
//! o máximo (comparação estrita).
//!
//! ## Importância dos Atributos
//!
//! Cada split aceito soma seu ganho em um [`FeatureImportance`] fornecido
//! pelo chamador — não há estado global.

use std::collections::BTreeMap;

use crate::config::Config;
use crate::core::{Attribute, LabeledDataset, WineCategory};

use super::node::TreeNode;

/// Impureza de Gini: `1 − Σ_c p(c)²` sobre as três categorias.
///
/// Conjunto vazio tem impureza 0.
pub fn gini_impurity(labels: &[WineCategory]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let total = labels.len() as f64;
    WineCategory::ALL.iter().fold(1.0, |gini, category| {
        let p = labels.iter().filter(|l| *l == category).count() as f64 / total;
        gini - p * p
    })
}

/// Acumulador de ganho por atributo, preenchido durante a indução.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureImportance {
    gains: BTreeMap<Attribute, f64>,
}

impl FeatureImportance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, attribute: Attribute, gain: f64) {
        *self.gains.entry(attribute).or_insert(0.0) += gain;
    }

    #[cfg(test)]
    pub(crate) fn get(&self, attribute: Attribute) -> f64 {
        self.gains.get(&attribute).copied().unwrap_or(0.0)
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.gains.is_empty()
    }

    /// Atributos ordenados por ganho acumulado, do maior para o menor.
    /// Empates mantêm a ordem canônica dos atributos.
    pub fn ranking(&self) -> Vec<(Attribute, f64)> {
        let mut ranking: Vec<(Attribute, f64)> =
            self.gains.iter().map(|(a, g)| (*a, *g)).collect();
        ranking.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranking
    }
}

/// Melhor divisão encontrada para um conjunto de amostras.
#[derive(Clone, Debug, PartialEq)]
pub struct Split {
    pub attribute: Attribute,
    pub threshold: f64,
    pub gain: f64,
}

/// Indutor de árvore de decisão — sem estado além dos hiperparâmetros.
pub struct TreeInducer {
    attributes: Vec<Attribute>,
    max_depth: usize,
    min_samples_split: usize,
    min_gain: f64,
}

impl TreeInducer {
    /// Cria o indutor sobre os 7 atributos de aprendizado.
    pub fn new(config: &Config) -> Self {
        Self::with_attributes(config, Attribute::LEARNER.to_vec())
    }

    /// Cria o indutor sobre uma lista arbitrária de atributos (a ordem
    /// da lista é o critério de desempate).
    pub fn with_attributes(config: &Config, attributes: Vec<Attribute>) -> Self {
        Self {
            attributes,
            max_depth: config.max_depth,
            min_samples_split: config.min_samples_split,
            min_gain: config.min_gain,
        }
    }

    /// Induz a árvore completa. Retorna `None` para dataset vazio.
    pub fn induce(
        &self,
        dataset: &LabeledDataset,
        importance: &mut FeatureImportance,
    ) -> Option<TreeNode> {
        if dataset.is_empty() {
            tracing::warn!("Nenhum dado de prato disponível, árvore não construída");
            return None;
        }
        let root_samples: Vec<usize> = (0..dataset.len()).collect();
        Some(self.build(dataset, root_samples, 0, importance))
    }

    fn build(
        &self,
        dataset: &LabeledDataset,
        samples: Vec<usize>,
        depth: usize,
        importance: &mut FeatureImportance,
    ) -> TreeNode {
        let labels = labels_of(dataset, &samples);
        let pure = labels.iter().all(|l| *l == labels[0]);

        if pure || depth >= self.max_depth || samples.len() < self.min_samples_split {
            return make_leaf(&labels, samples);
        }

        let split = match self.best_split(dataset, &samples) {
            Some(split) if split.gain >= self.min_gain => split,
            _ => return make_leaf(&labels, samples),
        };

        tracing::debug!(
            atributo = %split.attribute,
            threshold = split.threshold,
            ganho = split.gain,
            profundidade = depth,
            amostras = samples.len(),
            "split aceito"
        );
        importance.add(split.attribute, split.gain);

        let (left, right): (Vec<usize>, Vec<usize>) = samples
            .iter()
            .partition(|&&i| dataset.value(i, split.attribute) <= split.threshold);

        let left = self.build(dataset, left, depth + 1, importance);
        let right = self.build(dataset, right, depth + 1, importance);

        TreeNode::Internal {
            attribute: split.attribute,
            threshold: split.threshold,
            samples,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Procura o split de maior ganho sobre todos os atributos.
    ///
    /// Retorna `None` quando nenhum atributo tem dois valores distintos
    /// entre as amostras.
    pub fn best_split(&self, dataset: &LabeledDataset, samples: &[usize]) -> Option<Split> {
        let parent_gini = gini_impurity(&labels_of(dataset, samples));
        let total = samples.len() as f64;
        let mut best: Option<Split> = None;

        for &attribute in &self.attributes {
            let mut values: Vec<f64> = samples.iter().map(|&i| dataset.value(i, attribute)).collect();
            values.sort_by(f64::total_cmp);
            values.dedup();

            for pair in values.windows(2) {
                let threshold = (pair[0] + pair[1]) / 2.0;
                let (left, right): (Vec<WineCategory>, Vec<WineCategory>) = {
                    let mut left = Vec::new();
                    let mut right = Vec::new();
                    for &i in samples {
                        if dataset.value(i, attribute) <= threshold {
                            left.push(dataset.category(i));
                        } else {
                            right.push(dataset.category(i));
                        }
                    }
                    (left, right)
                };
                if left.is_empty() || right.is_empty() {
                    continue;
                }

                let weighted = (left.len() as f64 * gini_impurity(&left)
                    + right.len() as f64 * gini_impurity(&right))
                    / total;
                let gain = parent_gini - weighted;

                if best.as_ref().map_or(true, |b| gain > b.gain) {
                    best = Some(Split { attribute, threshold, gain });
                }
            }
        }
        best
    }
}

fn labels_of(dataset: &LabeledDataset, samples: &[usize]) -> Vec<WineCategory> {
    samples.iter().map(|&i| dataset.category(i)).collect()
}

/// Categoria majoritária; empate fica com a categoria encontrada primeiro.
pub fn majority(labels: &[WineCategory]) -> Option<(WineCategory, usize)> {
    let mut counts: Vec<(WineCategory, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(c, _)| c == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((*label, 1)),
        }
    }
    // max_by_key devolve o último máximo; percorrer ao contrário preserva o primeiro
    counts.into_iter().rev().max_by_key(|(_, n)| *n)
}

fn make_leaf(labels: &[WineCategory], samples: Vec<usize>) -> TreeNode {
    let (category, count) = majority(labels).unwrap_or((WineCategory::Medio, 0));
    let confidence = if labels.is_empty() {
        0.0
    } else {
        count as f64 / labels.len() as f64
    };
    TreeNode::Leaf { category, confidence, samples }
}
