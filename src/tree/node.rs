//! # TreeNode — Nó da Árvore de Decisão
//!
//! A árvore é uma estrutura recursiva comum: cada nó interno **possui** seus
//! dois filhos (`Box`), sem ciclos nem referências compartilhadas.
//!
//! ```text
//! Internal { intensidade_sabor <= 6.50 }
//!   ├── Leaf { leve, conf 1.00, amostras [0, 1, 4] }      (valor <= 6.50)
//!   └── Internal { gordura <= 6.50 }                      (valor >  6.50)
//!         ├── Leaf { medio, ... }
//!         └── Leaf { encorpado, ... }
//! ```
//!
//! Todo nó (interno ou folha) guarda o conjunto exato de índices de amostras
//! usado para construí-lo. As folhas particionam a raiz: nenhum índice
//! aparece em duas folhas e a união das folhas é o conjunto da raiz.

use crate::core::{Attribute, FeatureVector, WineCategory};

/// Nó da árvore de decisão.
#[derive(Clone, Debug, PartialEq)]
pub enum TreeNode {
    /// Nó de divisão: `attribute <= threshold` vai para `left`, o resto para `right`.
    Internal {
        attribute: Attribute,
        threshold: f64,
        samples: Vec<usize>,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    /// Nó terminal com a categoria majoritária das suas amostras.
    Leaf {
        category: WineCategory,
        /// Fração das amostras da folha que pertencem a `category`.
        confidence: f64,
        samples: Vec<usize>,
    },
}

/// Resultado de percorrer a árvore com um vetor de características.
#[derive(Clone, Debug, PartialEq)]
pub struct TreePrediction {
    pub category: WineCategory,
    pub confidence: f64,
    pub support: usize,
}

impl TreeNode {
    #[cfg(test)]
    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    /// Índices das amostras que chegaram a este nó.
    #[cfg(test)]
    pub(crate) fn samples(&self) -> &[usize] {
        match self {
            TreeNode::Internal { samples, .. } | TreeNode::Leaf { samples, .. } => samples,
        }
    }

    /// Número de níveis de divisão abaixo deste nó (uma folha tem profundidade 0).
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Folhas em ordem esquerda → direita.
    pub fn leaves(&self) -> Vec<&TreeNode> {
        match self {
            TreeNode::Leaf { .. } => vec![self],
            TreeNode::Internal { left, right, .. } => {
                let mut leaves = left.leaves();
                leaves.extend(right.leaves());
                leaves
            }
        }
    }

    /// Desce a árvore até uma folha. Atributos ausentes valem 5.0.
    pub fn predict(&self, features: &FeatureVector) -> TreePrediction {
        let mut node = self;
        loop {
            match node {
                TreeNode::Internal { attribute, threshold, left, right, .. } => {
                    node = if features.get(*attribute) <= *threshold { left } else { right };
                }
                TreeNode::Leaf { category, confidence, samples } => {
                    return TreePrediction {
                        category: *category,
                        confidence: *confidence,
                        support: samples.len(),
                    };
                }
            }
        }
    }

    /// Visualização indentada da árvore.
    ///
    /// ```text
    /// ├─ intensidade_sabor <= 6.50
    ///   └─ FOLHA: LEVE (amostras: 7, conf: 1.00)
    /// └─ intensidade_sabor > 6.50
    ///   ...
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(0, &mut out);
        out
    }

    fn render_into(&self, level: usize, out: &mut String) {
        let indent = "  ".repeat(level);
        match self {
            TreeNode::Leaf { category, confidence, samples } => {
                out.push_str(&format!(
                    "{indent}└─ FOLHA: {} (amostras: {}, conf: {:.2})\n",
                    category.label().to_uppercase(),
                    samples.len(),
                    confidence
                ));
            }
            TreeNode::Internal { attribute, threshold, left, right, .. } => {
                out.push_str(&format!("{indent}├─ {attribute} <= {threshold:.2}\n"));
                left.render_into(level + 1, out);
                out.push_str(&format!("{indent}└─ {attribute} > {threshold:.2}\n"));
                right.render_into(level + 1, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(category: WineCategory, samples: Vec<usize>) -> TreeNode {
        TreeNode::Leaf { category, confidence: 1.0, samples }
    }

    fn two_level_tree() -> TreeNode {
        TreeNode::Internal {
            attribute: Attribute::FlavorIntensity,
            threshold: 5.5,
            samples: vec![0, 1, 2, 3],
            left: Box::new(leaf(WineCategory::Leve, vec![0, 1])),
            right: Box::new(TreeNode::Internal {
                attribute: Attribute::Fat,
                threshold: 6.5,
                samples: vec![2, 3],
                left: Box::new(leaf(WineCategory::Medio, vec![2])),
                right: Box::new(leaf(WineCategory::Encorpado, vec![3])),
            }),
        }
    }

    #[test]
    fn depth_counts_split_levels() {
        assert_eq!(leaf(WineCategory::Medio, vec![0]).depth(), 0);
        assert_eq!(two_level_tree().depth(), 2);
    }

    #[test]
    fn predict_follows_thresholds() {
        let tree = two_level_tree();
        let low = FeatureVector::new().with(Attribute::FlavorIntensity, 5.5);
        assert_eq!(tree.predict(&low).category, WineCategory::Leve);

        let rich = FeatureVector::new()
            .with(Attribute::FlavorIntensity, 8.0)
            .with(Attribute::Fat, 9.0);
        let prediction = tree.predict(&rich);
        assert_eq!(prediction.category, WineCategory::Encorpado);
        assert_eq!(prediction.support, 1);
    }

    #[test]
    fn missing_attribute_uses_midpoint() {
        // intensidade ausente → 5.0 <= 5.5 → esquerda
        let tree = two_level_tree();
        assert_eq!(tree.predict(&FeatureVector::new()).category, WineCategory::Leve);
    }

    #[test]
    fn render_lists_both_branches() {
        let text = two_level_tree().render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "├─ intensidade_sabor <= 5.50");
        assert_eq!(lines[1], "  └─ FOLHA: LEVE (amostras: 2, conf: 1.00)");
        assert_eq!(lines[2], "└─ intensidade_sabor > 5.50");
        assert_eq!(lines[3], "  ├─ gordura <= 6.50");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn leaves_in_order() {
        let tree = two_level_tree();
        let cats: Vec<_> = tree
            .leaves()
            .into_iter()
            .map(|n| match n {
                TreeNode::Leaf { category, .. } => *category,
                TreeNode::Internal { .. } => unreachable!(),
            })
            .collect();
        assert_eq!(cats, vec![WineCategory::Leve, WineCategory::Medio, WineCategory::Encorpado]);
    }
}
