//! # Módulo Tree — Indução da Árvore de Decisão
//!
//! Primeira etapa do aprendizado: a partir dos pratos rotulados, o
//! [`TreeInducer`] constrói uma árvore binária por impureza de Gini.
//! A árvore é depois lida pelo [`RuleExtractor`](crate::rules::RuleExtractor),
//! que converte cada caminho raiz → folha em uma regra linguística.
//!
//! | Tipo | Papel |
//! |------|-------|
//! | [`TreeNode`] | Nó interno (split) ou folha (categoria + confiança) |
//! | [`TreeInducer`] | Particionamento recursivo pelo maior ganho de Gini |
//! | [`FeatureImportance`] | Ganho acumulado por atributo (só para relatórios) |

/// Sub-módulo com [`TreeNode`] e a visualização textual.
pub mod node;

/// Sub-módulo com o indutor e as funções de impureza.
pub mod inducer;

pub use inducer::{FeatureImportance, TreeInducer};
pub use node::{TreeNode, TreePrediction};
