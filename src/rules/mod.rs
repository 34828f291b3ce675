//! # Módulo Rules — Regras Linguísticas Aprendidas
//!
//! Segunda etapa do aprendizado: cada caminho raiz → folha da árvore vira
//! uma regra `SE ... ENTÃO perfil=...` em vocabulário fuzzy.
//!
//! ```text
//! TreeNode ──RuleExtractor──▶ Vec<FuzzyRule> ──deduplicate──▶ regras únicas
//! ```
//!
//! Veja [`RuleExtractor`] para o percurso e [`crisp_to_term`](rule::crisp_to_term) para o
//! mapeamento numérico → termo.

/// Sub-módulo com [`FuzzyRule`], [`Condition`], [`Level`] e a deduplicação.
pub mod rule;

/// Sub-módulo com o [`RuleExtractor`].
pub mod extractor;

pub use extractor::RuleExtractor;
pub use rule::{FuzzyRule, Level};
