#![allow(rustdoc::broken_intra_doc_links)]
//! # Sommelier Fuzzy — Recomendação de Perfil de Vinho
//!
//! **Ponto de entrada** do motor de regras fuzzy. Aprende regras de
//! harmonização a partir de um cardápio de pratos rotulados e estima, para
//! um prato descrito por 10 atributos, o corpo do vinho ideal.
//!
//! ## Fluxo
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (RUST_LOG)
//!   ├── Lê Config do ambiente (SOMMELIER_*)
//!   ├── Monta o LabeledDataset a partir do cardápio embutido
//!   ├── RuleLearner::train → árvore + regras
//!   ├── Imprime regras, árvore e estatísticas (JSON)
//!   ├── Constrói o FuzzyEngine (baseline ∪ aprendidas)
//!   └── Infere o perfil:
//!       ├── do vetor JSON passado como argumento, se houver
//!       └── senão, de alguns pratos de demonstração
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! cargo run
//! cargo run -- '{"intensidade_sabor": 8, "acidez": 2, "gordura": 7, "dulcor": 1}'
//! RUST_LOG=debug SOMMELIER_MAX_DEPTH=3 cargo run
//! ```

/// Módulo `core` — atributos, vetor de características, categorias, dataset.
mod core;

/// Módulo `tree` — indução da árvore de decisão por Gini.
mod tree;

/// Módulo `rules` — regras linguísticas extraídas da árvore.
mod rules;

/// Módulo `fuzzy` — modelo de pertinência e motor Mamdani.
mod fuzzy;

/// Módulo `learner` — ciclo de treinamento e relatórios.
mod learner;

/// Módulo `config` — hiperparâmetros e overrides por ambiente.
mod config;

/// Módulo `error` — taxonomia de erros do motor.
mod error;

use std::collections::HashMap;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::core::{seed_dishes, FeatureVector, LabeledDataset};
use crate::fuzzy::FuzzyEngine;
use crate::learner::RuleLearner;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🍷 Sommelier Fuzzy — Starting...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Configuração inválida, usando valores padrão");
            Config::default()
        }
    };

    let dishes = seed_dishes();
    let dataset = LabeledDataset::from_dishes(&dishes);

    let mut learner = RuleLearner::new(config);
    if let Err(e) = learner.train(&dataset) {
        tracing::warn!(error = %e, "Modelo não treinado, apenas a base fixa será usada");
    }

    println!("{}", "=".repeat(70));
    println!("📜 REGRAS APRENDIDAS");
    println!("{}", "-".repeat(70));
    for line in learner.rules_text() {
        println!("  {line}");
    }

    println!("\n🌳 ÁRVORE DE DECISÃO");
    println!("{}", "-".repeat(70));
    print!("{}", learner.tree_visualization());

    println!("\n📊 ESTATÍSTICAS");
    println!("{}", "-".repeat(70));
    let stats = serde_json::to_string_pretty(&learner.statistics())
        .context("Falha ao serializar estatísticas")?;
    println!("{stats}");

    let engine = learner.engine();
    let inputs: Vec<&str> = engine.required_inputs().iter().map(|a| a.name()).collect();
    println!("\n⚙️  MOTOR FUZZY");
    println!("{}", "-".repeat(70));
    println!("  Regras ativas: {}", engine.rules().len());
    println!("  Entradas:      {}", inputs.join(", "));

    match std::env::args().nth(1) {
        Some(raw) => {
            let values: HashMap<String, f64> = serde_json::from_str(&raw)
                .context("Argumento deve ser um objeto JSON de atributos numéricos")?;
            let features =
                FeatureVector::from_named(values.iter().map(|(k, v)| (k.as_str(), *v)));
            report(&engine, &learner, "Prato informado", &features);
        }
        None => {
            for dish in dishes.iter().step_by(6) {
                report(&engine, &learner, &dish.name, &dish.features);
            }
        }
    }

    println!("{}", "=".repeat(70));
    Ok(())
}

/// Imprime o perfil fuzzy e a faixa de corpo para um prato.
fn report(engine: &FuzzyEngine, learner: &RuleLearner, name: &str, features: &FeatureVector) {
    let profile = engine.infer(features);
    let (body_min, body_max) = profile.category.body_range();

    println!("\n🔍 {name}");
    println!("{}", "-".repeat(70));
    println!("  Categoria: {}", profile.category.label().to_uppercase());
    println!("  Valor:     {:.2}/10", profile.score);
    println!("  Corpo:     {body_min:.0}–{body_max:.0}");
    if let Some(prediction) = learner.predict(features) {
        println!(
            "  Árvore:    {} (conf: {:.2}, {} pratos)",
            prediction.category, prediction.confidence, prediction.support
        );
    }
}
