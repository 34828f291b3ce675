//! # Módulo Fuzzy — Raciocínio Aproximado sobre o Perfil do Vinho
//!
//! Parte de consulta do sistema: dado um prato, estima o corpo do vinho
//! ideal por inferência Mamdani sobre regras linguísticas.
//!
//! | Sub-módulo | Responsabilidade |
//! |------------|------------------|
//! | [`membership`] | Funções triangulares e variáveis linguísticas |
//! | [`baseline`] | As 14 regras fixas, sempre ativas |
//! | [`required`] | Quais entradas a base ativa exige |
//! | [`engine`] | União das bases, inferência, centroide e heurística |

/// Sub-módulo com [`Triangle`](membership::Triangle), [`MembershipVariable`](membership::MembershipVariable) e [`MembershipModel`](membership::MembershipModel).
pub mod membership;

/// Sub-módulo com a base de regras fixa.
pub mod baseline;

/// Sub-módulo com o detector de entradas obrigatórias.
pub mod required;

/// Sub-módulo com o [`FuzzyEngine`].
pub mod engine;

pub use engine::FuzzyEngine;
