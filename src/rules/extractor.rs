//! # Extrator de Regras — Árvore → Regras Linguísticas
//!
//! Percorre a árvore em profundidade acumulando uma restrição por atributo
//! ao longo do caminho. Em cada folha, as restrições são fuzzificadas e
//! viram uma [`FuzzyRule`]:
//!
//! ```text
//! ramo esquerdo  (valor <= t) → fuzzifica t
//! ramo direito   (valor >  t) → fuzzifica t + deslocamento (0.1 por padrão)
//! ```
//!
//! O deslocamento empurra o valor para além da fronteira do split antes de
//! escolher o termo. Perto das fronteiras 4 e 7 ele decide sozinho o termo
//! (6.95 + 0.1 = 7.05 → alto), por isso é configurável
//! ([`Config::right_branch_nudge`](crate::config::Config::right_branch_nudge)).
//!
//! Um segundo split no mesmo atributo substitui a restrição anterior,
//! mantendo sua posição na lista de condições.

use crate::config::Config;
use crate::core::Attribute;
use crate::tree::TreeNode;

use super::rule::{deduplicate, Condition, FuzzyRule};

/// Extrator de regras — guarda apenas o deslocamento do ramo direito.
pub struct RuleExtractor {
    right_branch_nudge: f64,
}

impl RuleExtractor {
    pub fn new(config: &Config) -> Self {
        Self {
            right_branch_nudge: config.right_branch_nudge,
        }
    }

    /// Extrai as regras de todas as folhas e remove duplicatas.
    pub fn extract(&self, tree: &TreeNode) -> Vec<FuzzyRule> {
        let mut rules = Vec::new();
        self.walk(tree, &[], &mut rules);
        let raw = rules.len();
        let rules = deduplicate(rules);
        tracing::debug!(brutas = raw, unicas = rules.len(), "regras extraídas da árvore");
        rules
    }

    fn walk(&self, node: &TreeNode, path: &[(Attribute, f64)], out: &mut Vec<FuzzyRule>) {
        match node {
            TreeNode::Leaf { category, confidence, samples } => {
                let conditions = path
                    .iter()
                    .map(|&(attribute, value)| Condition::from_crisp(attribute, value))
                    .collect();
                out.push(FuzzyRule {
                    conditions,
                    consequent: *category,
                    confidence: *confidence,
                    support: samples.len(),
                });
            }
            TreeNode::Internal { attribute, threshold, left, right, .. } => {
                let left_path = constrain(path, *attribute, *threshold);
                self.walk(left, &left_path, out);

                let right_path = constrain(path, *attribute, threshold + self.right_branch_nudge);
                self.walk(right, &right_path, out);
            }
        }
    }
}

/// Copia o caminho com a restrição `(attribute, value)` aplicada.
fn constrain(path: &[(Attribute, f64)], attribute: Attribute, value: f64) -> Vec<(Attribute, f64)> {
    let mut next = path.to_vec();
    match next.iter_mut().find(|(a, _)| *a == attribute) {
        Some(slot) => slot.1 = value,
        None => next.push((attribute, value)),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WineCategory;
    use crate::rules::Level;

    fn leaf(category: WineCategory, samples: Vec<usize>, confidence: f64) -> TreeNode {
        TreeNode::Leaf { category, confidence, samples }
    }

    fn extractor() -> RuleExtractor {
        RuleExtractor::new(&Config::default())
    }

    #[test]
    fn single_leaf_gives_unconditional_rule() {
        let rules = extractor().extract(&leaf(WineCategory::Medio, vec![0, 1], 0.5));
        assert_eq!(rules.len(), 1);
        assert!(rules[0].conditions.is_empty());
        assert_eq!(rules[0].support, 2);
    }

    #[test]
    fn right_branch_is_nudged_past_threshold() {
        // 6.95 → esquerda "medio"; direita 7.05 → "alto"
        let tree = TreeNode::Internal {
            attribute: Attribute::FlavorIntensity,
            threshold: 6.95,
            samples: vec![0, 1, 2, 3],
            left: Box::new(leaf(WineCategory::Medio, vec![0, 1], 1.0)),
            right: Box::new(leaf(WineCategory::Encorpado, vec![2, 3], 1.0)),
        };
        let rules = extractor().extract(&tree);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].conditions[0].level, Level::Medium);
        assert!((rules[0].conditions[0].value - 6.95).abs() < 1e-12);
        assert_eq!(rules[1].conditions[0].level, Level::High);
        assert!((rules[1].conditions[0].value - 7.05).abs() < 1e-12);
    }

    #[test]
    fn nudge_is_configurable() {
        let config = Config { right_branch_nudge: 0.0, ..Config::default() };
        let tree = TreeNode::Internal {
            attribute: Attribute::FlavorIntensity,
            threshold: 6.95,
            samples: vec![0, 1],
            left: Box::new(leaf(WineCategory::Medio, vec![0], 1.0)),
            right: Box::new(leaf(WineCategory::Encorpado, vec![1], 1.0)),
        };
        let rules = RuleExtractor::new(&config).extract(&tree);
        assert_eq!(rules[1].conditions[0].level, Level::Medium);
    }

    #[test]
    fn repeated_attribute_keeps_deepest_constraint() {
        let tree = TreeNode::Internal {
            attribute: Attribute::Fat,
            threshold: 8.0,
            samples: vec![0, 1, 2],
            left: Box::new(TreeNode::Internal {
                attribute: Attribute::Fat,
                threshold: 3.0,
                samples: vec![0, 1],
                left: Box::new(leaf(WineCategory::Leve, vec![0], 1.0)),
                right: Box::new(leaf(WineCategory::Medio, vec![1], 1.0)),
            }),
            right: Box::new(leaf(WineCategory::Encorpado, vec![2], 1.0)),
        };
        let rules = extractor().extract(&tree);
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].conditions.len(), 1);
        assert_eq!(rules[0].conditions[0].level, Level::Low);
        assert!((rules[1].conditions[0].value - 3.1).abs() < 1e-12);
        assert_eq!(rules[2].conditions[0].level, Level::High);
    }

    #[test]
    fn leaves_with_same_linguistic_path_are_merged() {
        // 7.5 e 7.5+0.1 caem ambos em "alto" com o mesmo consequente
        let tree = TreeNode::Internal {
            attribute: Attribute::Spice,
            threshold: 7.5,
            samples: vec![0, 1, 2, 3, 4],
            left: Box::new(leaf(WineCategory::Encorpado, vec![0, 1], 0.5)),
            right: Box::new(leaf(WineCategory::Encorpado, vec![2, 3, 4], 1.0)),
        };
        let rules = extractor().extract(&tree);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].support, 3);
        assert!((rules[0].confidence - 1.0).abs() < 1e-12);
    }

    #[test]
    fn confidence_and_support_come_from_leaf() {
        let tree = TreeNode::Internal {
            attribute: Attribute::Sweetness,
            threshold: 5.0,
            samples: (0..6).collect(),
            left: Box::new(leaf(WineCategory::Medio, vec![0, 1, 2, 3], 0.75)),
            right: Box::new(leaf(WineCategory::Encorpado, vec![4, 5], 1.0)),
        };
        let rules = extractor().extract(&tree);
        assert_eq!(rules[0].support, 4);
        assert!((rules[0].confidence - 0.75).abs() < 1e-12);
        assert_eq!(rules[0].to_text(), "SE dulcor é medio ENTÃO perfil=medio");
    }
}
