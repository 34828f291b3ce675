//! # RuleLearner — Ciclo de Treinamento e Relatórios
//!
//! O [`RuleLearner`] coordena uma rodada completa de aprendizado e guarda
//! o resultado para consulta:
//!
//! ```text
//! LabeledDataset
//!   ├── 1. TreeInducer::induce      → TreeNode  (+ FeatureImportance)
//!   ├── 2. RuleExtractor::extract   → Vec<FuzzyRule> (deduplicadas)
//!   └── 3. engine()                 → FuzzyEngine (baseline ∪ aprendidas)
//! ```
//!
//! ## Estado "não treinado"
//!
//! Dataset vazio é o único erro escalado: [`train`](RuleLearner::train)
//! devolve [`EngineError::EmptyDataset`] e o learner fica sem árvore.
//! Nesse estado os relatórios continuam respondendo — com a indicação
//! explícita de que nada foi construído — e [`predict`](RuleLearner::predict)
//! devolve `None`.
//!
//! O treino precisa terminar antes de qualquer consulta: todos os métodos
//! de leitura recebem `&self` e o treino exige `&mut self`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::Config;
use crate::core::{Attribute, FeatureVector, LabeledDataset, WineCategory};
use crate::error::{EngineError, Result};
use crate::fuzzy::FuzzyEngine;
use crate::rules::{FuzzyRule, RuleExtractor};
use crate::tree::{FeatureImportance, TreeInducer, TreeNode, TreePrediction};

/// Estatísticas do modelo treinado.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Statistics {
    pub trained: bool,
    pub sample_count: usize,
    pub rule_count: usize,
    pub tree_depth: usize,
    pub category_distribution: BTreeMap<WineCategory, usize>,
    /// Ganho acumulado por atributo, do mais para o menos importante.
    pub attribute_importance: Vec<(Attribute, f64)>,
    pub config: Config,
}

/// Aprendiz de regras fuzzy a partir de pratos rotulados.
pub struct RuleLearner {
    config: Config,
    tree: Option<TreeNode>,
    rules: Vec<FuzzyRule>,
    importance: FeatureImportance,
    sample_count: usize,
    distribution: BTreeMap<WineCategory, usize>,
}

impl RuleLearner {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tree: None,
            rules: Vec::new(),
            importance: FeatureImportance::new(),
            sample_count: 0,
            distribution: BTreeMap::new(),
        }
    }

    /// Treina o modelo: constrói a árvore e extrai as regras.
    ///
    /// Qualquer resultado de um treino anterior é descartado antes.
    /// Retorna o número de regras únicas aprendidas.
    ///
    /// # Erros
    ///
    /// [`EngineError::EmptyDataset`] se o dataset não tiver amostras.
    pub fn train(&mut self, dataset: &LabeledDataset) -> Result<usize> {
        tracing::info!(max_depth = self.config.max_depth, "Iniciando treinamento do modelo fuzzy");

        self.tree = None;
        self.rules.clear();
        self.importance = FeatureImportance::new();
        self.sample_count = dataset.len();
        self.distribution = dataset.distribution();

        let inducer = TreeInducer::new(&self.config);
        let tree = inducer
            .induce(dataset, &mut self.importance)
            .ok_or(EngineError::EmptyDataset)?;

        self.rules = RuleExtractor::new(&self.config).extract(&tree);
        tracing::info!(
            regras = self.rules.len(),
            profundidade = tree.depth(),
            folhas = tree.leaves().len(),
            "Treinamento concluído"
        );
        self.tree = Some(tree);
        Ok(self.rules.len())
    }

    pub fn is_trained(&self) -> bool {
        self.tree.is_some()
    }

    #[cfg(test)]
    pub(crate) fn tree(&self) -> Option<&TreeNode> {
        self.tree.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn rules(&self) -> &[FuzzyRule] {
        &self.rules
    }

    /// Classificação direta pela árvore. `None` se não treinado.
    pub fn predict(&self, features: &FeatureVector) -> Option<TreePrediction> {
        match &self.tree {
            Some(tree) => Some(tree.predict(features)),
            None => {
                tracing::warn!("Árvore não foi treinada");
                None
            }
        }
    }

    /// Motor fuzzy com a base fixa mais as regras aprendidas.
    pub fn engine(&self) -> FuzzyEngine {
        FuzzyEngine::with_learned_rules(&self.config, &self.rules)
    }

    /// Regras em texto, ordenadas por (confiança, suporte) decrescentes.
    ///
    /// ```text
    /// 1. SE dulcor é alto ENTÃO perfil=encorpado — confiança: 1.00, suporte: 2 pratos
    /// ```
    pub fn rules_text(&self) -> Vec<String> {
        if self.rules.is_empty() {
            return vec!["Nenhuma regra disponível".to_string()];
        }
        let mut sorted: Vec<&FuzzyRule> = self.rules.iter().collect();
        sorted.sort_by(|a, b| {
            b.confidence
                .total_cmp(&a.confidence)
                .then(b.support.cmp(&a.support))
        });
        sorted
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                format!(
                    "{}. {} — confiança: {:.2}, suporte: {} pratos",
                    i + 1,
                    rule.to_text(),
                    rule.confidence,
                    rule.support
                )
            })
            .collect()
    }

    pub fn tree_visualization(&self) -> String {
        match &self.tree {
            Some(tree) => tree.render(),
            None => "Árvore não construída".to_string(),
        }
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            trained: self.is_trained(),
            sample_count: self.sample_count,
            rule_count: self.rules.len(),
            tree_depth: self.tree.as_ref().map_or(0, TreeNode::depth),
            category_distribution: self.distribution.clone(),
            attribute_importance: self.importance.ranking(),
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::LabeledRow;
    use crate::core::seed_dishes;

    fn trained() -> RuleLearner {
        let mut learner = RuleLearner::new(Config::default());
        learner
            .train(&LabeledDataset::from_dishes(&seed_dishes()))
            .unwrap();
        learner
    }

    // ─── estado não treinado ───────────────────────────────────

    #[test]
    fn empty_dataset_leaves_model_untrained() {
        let mut learner = RuleLearner::new(Config::default());
        assert_eq!(learner.train(&LabeledDataset::default()), Err(EngineError::EmptyDataset));
        assert!(!learner.is_trained());

        let stats = learner.statistics();
        assert!(!stats.trained);
        assert_eq!(stats.rule_count, 0);
        assert_eq!(stats.tree_depth, 0);
        assert!(stats.attribute_importance.is_empty());

        assert_eq!(learner.tree_visualization(), "Árvore não construída");
        assert_eq!(learner.rules_text(), vec!["Nenhuma regra disponível".to_string()]);
        assert!(learner.predict(&FeatureVector::new()).is_none());
    }

    #[test]
    fn untrained_engine_is_baseline_only() {
        let learner = RuleLearner::new(Config::default());
        assert_eq!(learner.engine().rules().len(), 14);
    }

    #[test]
    fn retraining_on_empty_clears_previous_model() {
        let mut learner = trained();
        assert!(learner.is_trained());
        assert!(learner.train(&LabeledDataset::default()).is_err());
        assert!(!learner.is_trained());
        assert!(learner.rules().is_empty());
    }

    // ─── treino ────────────────────────────────────────────────

    #[test]
    fn training_on_seed_produces_rules() {
        let learner = trained();
        let stats = learner.statistics();
        assert!(stats.trained);
        assert_eq!(stats.sample_count, seed_dishes().len());
        assert!(stats.rule_count > 0);
        assert!(stats.tree_depth >= 1 && stats.tree_depth <= 5);
        assert_eq!(stats.category_distribution.values().sum::<usize>(), stats.sample_count);
        assert!(!stats.attribute_importance.is_empty());
    }

    #[test]
    fn tree_prediction_matches_training_labels_mostly() {
        let dataset = LabeledDataset::from_dishes(&seed_dishes());
        let learner = trained();
        let hits = dataset
            .rows()
            .iter()
            .filter(|row| learner.predict(&row.features).map(|p| p.category) == Some(row.category))
            .count();
        assert!(hits * 10 >= dataset.len() * 8, "acertos: {hits}/{}", dataset.len());
    }

    #[test]
    fn single_leaf_model_has_no_usable_rules() {
        let mut learner = RuleLearner::new(Config::default());
        let dataset = LabeledDataset::new(vec![
            LabeledRow { features: FeatureVector::new(), category: WineCategory::Leve },
            LabeledRow { features: FeatureVector::new(), category: WineCategory::Medio },
        ]);
        assert_eq!(learner.train(&dataset), Ok(1));
        assert!(learner.tree().unwrap().is_leaf());
        // a regra sem antecedentes não é conversível
        assert_eq!(learner.engine().rules().len(), 14);
    }

    // ─── relatórios ────────────────────────────────────────────

    #[test]
    fn rules_text_is_ranked_by_confidence() {
        let learner = trained();
        let lines = learner.rules_text();
        assert_eq!(lines.len(), learner.rules().len());
        assert!(lines[0].starts_with("1. SE "));
        assert!(lines[0].contains("ENTÃO perfil="));
        assert!(lines[0].ends_with(" pratos"));

        let confidences: Vec<f64> = lines
            .iter()
            .map(|l| {
                let tail = l.split("confiança: ").nth(1).unwrap();
                tail[..4].parse().unwrap()
            })
            .collect();
        assert!(confidences.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn visualization_has_one_line_per_leaf_and_two_per_split() {
        let learner = trained();
        let tree = learner.tree().unwrap();
        let leaves = tree.leaves().len();
        let lines = learner.tree_visualization().lines().count();
        assert_eq!(lines, leaves + 2 * (leaves - 1));
    }

    #[test]
    fn statistics_serialize_to_json() {
        let json = serde_json::to_value(trained().statistics()).unwrap();
        assert_eq!(json["trained"], serde_json::Value::Bool(true));
        assert!(json["category_distribution"]["encorpado"].as_u64().unwrap() > 0);
        assert_eq!(json["config"]["max_depth"], serde_json::json!(5));
    }

    #[test]
    fn learned_engine_keeps_scenarios() {
        let engine = trained().engine();
        assert!(engine.rules().len() >= 14);

        let light = FeatureVector::new()
            .with(Attribute::FlavorIntensity, 2.0)
            .with(Attribute::Acidity, 2.0)
            .with(Attribute::Fat, 2.0)
            .with(Attribute::Sweetness, 2.0)
            .with(Attribute::Spice, 2.0);
        let profile = engine.infer(&light);
        assert_eq!(profile.category, WineCategory::Leve);
        assert!(profile.score < 4.0, "score {}", profile.score);
        assert_eq!(engine.infer(&light), profile);

        let rich = FeatureVector::new()
            .with(Attribute::FlavorIntensity, 8.0)
            .with(Attribute::Acidity, 2.0)
            .with(Attribute::Fat, 7.0)
            .with(Attribute::Sweetness, 1.0);
        let profile = engine.infer(&rich);
        assert_eq!(profile.category, WineCategory::Encorpado);
        assert!(profile.score >= 6.0, "score {}", profile.score);
    }
}
