//! # Erros do Motor
//!
//! Taxonomia das falhas do aprendizado e da inferência. Quase todas são
//! **recuperadas localmente** — o chamador raramente as vê:
//!
//! | Variante | Classe | Quem recupera |
//! |----------|--------|---------------|
//! | `EmptyDataset` | dados indisponíveis | ninguém — o modelo fica "não treinado" |
//! | `UnknownAttribute`, `EmptyAntecedent` | falha de conversão | [`FuzzyEngine`](crate::fuzzy::FuzzyEngine) descarta a regra |
//! | `NoRuleFired`, `DegenerateOutput` | falha de inferência | [`FuzzyEngine::infer`](crate::fuzzy::FuzzyEngine::infer) usa a heurística |
//! | `InvalidConfig` | configuração | `main` volta aos defaults |

use thiserror::Error;

use crate::core::Attribute;

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("dataset de treinamento vazio ou ausente")]
    EmptyDataset,

    #[error("atributo `{0}` não existe no modelo de pertinência")]
    UnknownAttribute(Attribute),

    #[error("regra sem antecedentes não pode ser expressa")]
    EmptyAntecedent,

    #[error("nenhuma regra disparou para o vetor informado")]
    NoRuleFired,

    #[error("forma de saída agregada tem área nula")]
    DegenerateOutput,

    #[error("valor inválido para {key}: `{value}`")]
    InvalidConfig { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
