//! # Configuração — Hiperparâmetros do Aprendizado e da Inferência
//!
//! Todos os valores ajustáveis do motor vivem em [`Config`]. Os defaults
//! reproduzem o comportamento de referência; cada campo pode ser
//! sobrescrito por variável de ambiente:
//!
//! | Campo | Default | Variável |
//! |-------|---------|----------|
//! | `max_depth` | 5 | `SOMMELIER_MAX_DEPTH` |
//! | `min_samples_split` | 3 | `SOMMELIER_MIN_SAMPLES` |
//! | `min_gain` | 0.01 | `SOMMELIER_MIN_GAIN` |
//! | `right_branch_nudge` | 0.1 | `SOMMELIER_RIGHT_NUDGE` |
//! | `defuzz_step` | 0.01 | `SOMMELIER_DEFUZZ_STEP` |
//!
//! ## Exemplo
//!
//! ```bash
//! SOMMELIER_MAX_DEPTH=3 RUST_LOG=debug cargo run
//! ```

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{EngineError, Result};

/// Passos de defuzzificação aceitos. Abaixo disso o centroide amostra
/// milhões de pontos por inferência.
pub const DEFUZZ_STEP_RANGE: RangeInclusive<f64> = 0.0001..=1.0;

/// Hiperparâmetros do motor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Config {
    /// Profundidade máxima da árvore (a raiz tem profundidade 0).
    pub max_depth: usize,
    /// Nós com menos amostras que isto viram folha.
    pub min_samples_split: usize,
    /// Ganho de Gini mínimo para aceitar um split.
    pub min_gain: f64,
    /// Deslocamento somado ao threshold no ramo direito (`valor > t`) antes
    /// de fuzzificar. Heurístico: perto das fronteiras 4/7 ele decide o termo.
    pub right_branch_nudge: f64,
    /// Passo de amostragem do domínio de saída na defuzzificação por centroide.
    pub defuzz_step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 5,
            min_samples_split: 3,
            min_gain: 0.01,
            right_branch_nudge: 0.1,
            defuzz_step: 0.01,
        }
    }
}

impl Config {
    /// Lê a configuração do ambiente, partindo dos defaults.
    ///
    /// # Erros
    ///
    /// [`EngineError::InvalidConfig`] se alguma variável existir mas não
    /// for um número válido, ou se o passo de defuzzificação estiver fora de
    /// [`DEFUZZ_STEP_RANGE`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Mesma lógica de [`from_env`](Config::from_env) sobre uma fonte arbitrária.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        override_with(&lookup, "SOMMELIER_MAX_DEPTH", &mut config.max_depth)?;
        override_with(&lookup, "SOMMELIER_MIN_SAMPLES", &mut config.min_samples_split)?;
        override_with(&lookup, "SOMMELIER_MIN_GAIN", &mut config.min_gain)?;
        override_with(&lookup, "SOMMELIER_RIGHT_NUDGE", &mut config.right_branch_nudge)?;
        override_with(&lookup, "SOMMELIER_DEFUZZ_STEP", &mut config.defuzz_step)?;

        if !DEFUZZ_STEP_RANGE.contains(&config.defuzz_step) {
            return Err(EngineError::InvalidConfig {
                key: "SOMMELIER_DEFUZZ_STEP",
                value: config.defuzz_step.to_string(),
            });
        }
        Ok(config)
    }
}

fn override_with<F, T>(lookup: &F, key: &'static str, slot: &mut T) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(key) {
        *slot = raw
            .trim()
            .parse()
            .map_err(|_| EngineError::InvalidConfig { key, value: raw.clone() })?;
        tracing::debug!(key, value = %raw, "override de configuração aplicado");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.min_samples_split, 3);
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(|key| match key {
            "SOMMELIER_MAX_DEPTH" => Some("3".to_string()),
            "SOMMELIER_RIGHT_NUDGE" => Some(" 0.25 ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.max_depth, 3);
        assert!((config.right_branch_nudge - 0.25).abs() < 1e-12);
        assert!((config.min_gain - 0.01).abs() < 1e-12);
    }

    #[test]
    fn invalid_value_is_reported() {
        let err = Config::from_lookup(|key| {
            (key == "SOMMELIER_MIN_GAIN").then(|| "muito".to_string())
        })
        .unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidConfig { key: "SOMMELIER_MIN_GAIN", value: "muito".to_string() }
        );
    }

    #[test]
    fn non_positive_step_is_rejected() {
        let result = Config::from_lookup(|key| {
            (key == "SOMMELIER_DEFUZZ_STEP").then(|| "0".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn tiny_step_is_rejected() {
        for raw in ["1e-300", "0.00001", "NaN"] {
            let err = Config::from_lookup(|key| {
                (key == "SOMMELIER_DEFUZZ_STEP").then(|| raw.to_string())
            })
            .unwrap_err();
            assert!(matches!(err, EngineError::InvalidConfig { key: "SOMMELIER_DEFUZZ_STEP", .. }));
        }
    }

    #[test]
    fn step_range_bounds_are_accepted() {
        for raw in ["0.0001", "1"] {
            let config = Config::from_lookup(|key| {
                (key == "SOMMELIER_DEFUZZ_STEP").then(|| raw.to_string())
            });
            assert!(config.is_ok(), "{raw}");
        }
        let too_coarse = Config::from_lookup(|key| {
            (key == "SOMMELIER_DEFUZZ_STEP").then(|| "2.5".to_string())
        });
        assert!(too_coarse.is_err());
    }
}
