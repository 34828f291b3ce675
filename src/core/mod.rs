//! # Módulo Core — Modelo de Dados do Domínio
//!
//! Tipos fundamentais sobre os quais todo o motor opera. Nenhum deles tem
//! lógica de aprendizado ou inferência — apenas dados e invariantes:
//!
//! - [`Attribute`] — os 10 atributos sensoriais de um prato
//! - [`FeatureVector`] — valores dos atributos de um prato, limitados a `[0, 10]`
//! - [`WineCategory`] — leve / medio / encorpado
//! - [`LabeledDataset`] — pratos rotulados, entrada do treinamento
//! - [`seed_dishes`] — cardápio de referência embutido
//!
//! ## Fluxo dos Dados
//!
//! ```text
//! DishSample (texto de harmonização)
//!   └── LabeledDataset::from_dishes
//!         └── (FeatureVector, WineCategory) por linha
//!               └── TreeInducer → RuleExtractor → FuzzyEngine
//! ```

/// Sub-módulo com [`Attribute`] e [`FeatureVector`].
pub mod feature;

/// Sub-módulo com [`WineCategory`] e o mapeamento de harmonizações.
pub mod category;

/// Sub-módulo com [`LabeledDataset`] e [`DishSample`](dataset::DishSample).
pub mod dataset;

/// Sub-módulo com o cardápio de referência.
pub mod seed;

pub use category::WineCategory;
pub use dataset::LabeledDataset;
pub use feature::{Attribute, FeatureVector, DOMAIN_MAX, DOMAIN_MIN};
pub use seed::seed_dishes;
