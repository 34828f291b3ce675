//! # Motor de Inferência Fuzzy (Mamdani)
//!
//! O [`FuzzyEngine`] combina a base fixa com as regras aprendidas e calcula,
//! para um [`FeatureVector`], o **perfil de corpo** do vinho (score 0–10) e
//! sua categoria.
//!
//! ## Construção
//!
//! ```text
//! base ativa = baseline ∪ { regras aprendidas convertidas com sucesso }
//! entradas   = required_inputs(base ativa)
//! ```
//!
//! A conversão de uma regra aprendida falha quando ela referencia um
//! atributo fora do [`MembershipModel`] ou não tem antecedentes. A regra é
//! descartada individualmente; as demais seguem.
//!
//! ## Inferência
//!
//! ```text
//! 1. fuzzifica cada entrada obrigatória (ausente → 5.0)
//! 2. força de disparo da regra  = min dos graus dos antecedentes
//! 3. ativação do termo de saída = max das forças das regras que o concluem
//! 4. score = centroide de max_termo(min(ativação, μ_termo(x))) em [0, 10]
//! 5. categoria: < 4 leve, < 7 medio, senão encorpado
//! ```
//!
//! Se os passos 1–4 falharem (nenhuma regra dispara), o motor usa uma
//! heurística determinística ([`heuristic_score`]) — a falha nunca chega ao
//! chamador.
//!
//! ## Concorrência
//!
//! O motor é imutável depois de construído: `infer(&self)` pode ser chamado
//! de várias threads ao mesmo tempo.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::config::{Config, DEFUZZ_STEP_RANGE};
use crate::core::{Attribute, FeatureVector, WineCategory};
use crate::error::{EngineError, Result};
use crate::rules::{FuzzyRule, Level};

use super::baseline::baseline_rules;
use super::membership::MembershipModel;
use super::required::required_inputs;

/// Procedência de uma regra da base ativa.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleOrigin {
    Baseline,
    Learned,
}

/// Regra já expressa no vocabulário do [`MembershipModel`].
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveRule {
    pub antecedents: Vec<(Attribute, Level)>,
    pub consequent: WineCategory,
    pub origin: RuleOrigin,
}

impl ActiveRule {
    /// Converte uma regra aprendida.
    ///
    /// # Erros
    ///
    /// - [`EngineError::EmptyAntecedent`] — regra sem condições (árvore de uma folha só)
    /// - [`EngineError::UnknownAttribute`] — atributo sem variável no modelo
    pub fn from_learned(rule: &FuzzyRule, model: &MembershipModel) -> Result<Self> {
        if rule.conditions.is_empty() {
            return Err(EngineError::EmptyAntecedent);
        }
        let antecedents = rule
            .conditions
            .iter()
            .map(|c| {
                if model.has_input(c.attribute) {
                    Ok((c.attribute, c.level))
                } else {
                    Err(EngineError::UnknownAttribute(c.attribute))
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            antecedents,
            consequent: rule.consequent,
            origin: RuleOrigin::Learned,
        })
    }

    fn key(&self) -> (BTreeSet<(Attribute, Level)>, WineCategory) {
        (self.antecedents.iter().copied().collect(), self.consequent)
    }
}

/// Resultado da inferência.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WineProfile {
    pub score: f64,
    pub category: WineCategory,
}

impl WineProfile {
    fn from_score(score: f64) -> Self {
        Self {
            score,
            category: WineCategory::from_score(score),
        }
    }
}

/// Motor de inferência Mamdani (min / max / centroide).
pub struct FuzzyEngine {
    model: MembershipModel,
    rules: Vec<ActiveRule>,
    required: BTreeSet<Attribute>,
    defuzz_step: f64,
}

impl FuzzyEngine {
    /// Motor apenas com a base fixa.
    pub fn baseline(config: &Config) -> Self {
        Self::with_learned_rules(config, &[])
    }

    /// Motor com a base fixa unida às regras aprendidas.
    pub fn with_learned_rules(config: &Config, learned: &[FuzzyRule]) -> Self {
        let model = MembershipModel::standard();
        let mut rules = baseline_rules();
        let mut keys: BTreeSet<_> = rules.iter().map(ActiveRule::key).collect();
        let mut dropped = 0usize;

        for rule in learned {
            match ActiveRule::from_learned(rule, &model) {
                Ok(active) => {
                    if keys.insert(active.key()) {
                        rules.push(active);
                    }
                }
                Err(e) => {
                    dropped += 1;
                    tracing::warn!(regra = %rule.to_text(), error = %e, "regra aprendida descartada");
                }
            }
        }

        let defuzz_step = if DEFUZZ_STEP_RANGE.contains(&config.defuzz_step) {
            config.defuzz_step
        } else {
            let fallback = Config::default().defuzz_step;
            tracing::warn!(
                passo = config.defuzz_step,
                usado = fallback,
                "passo de defuzzificação fora da faixa"
            );
            fallback
        };

        let required = required_inputs(&rules);
        tracing::info!(
            regras = rules.len(),
            aprendidas = rules.iter().filter(|r| r.origin == RuleOrigin::Learned).count(),
            descartadas = dropped,
            entradas = required.len(),
            "Motor fuzzy construído"
        );

        Self {
            model,
            rules,
            required,
            defuzz_step,
        }
    }

    /// Base de regras ativa (fixas primeiro, depois as aprendidas).
    pub fn rules(&self) -> &[ActiveRule] {
        &self.rules
    }

    /// Entradas que a inferência fuzzifica.
    pub fn required_inputs(&self) -> &BTreeSet<Attribute> {
        &self.required
    }

    /// Calcula o perfil do vinho. Nunca falha: em caso de erro na
    /// computação fuzzy, devolve o resultado da heurística.
    pub fn infer(&self, features: &FeatureVector) -> WineProfile {
        match self.mamdani(features) {
            Ok(score) => WineProfile::from_score(score),
            Err(e) => {
                let score = heuristic_score(features);
                tracing::warn!(error = %e, score, "inferência fuzzy falhou, usando heurística");
                WineProfile::from_score(score)
            }
        }
    }

    /// Ativação de cada termo de saída (passos 1–3).
    pub fn activations(&self, features: &FeatureVector) -> Result<BTreeMap<WineCategory, f64>> {
        let mut degrees: BTreeMap<(Attribute, Level), f64> = BTreeMap::new();
        for &attribute in &self.required {
            let variable = self
                .model
                .input(attribute)
                .ok_or(EngineError::UnknownAttribute(attribute))?;
            for (level, degree) in variable.fuzzify(features.get(attribute)) {
                degrees.insert((attribute, level), degree);
            }
        }

        let mut activations: BTreeMap<WineCategory, f64> =
            WineCategory::ALL.into_iter().map(|c| (c, 0.0)).collect();
        for rule in &self.rules {
            let strength = rule
                .antecedents
                .iter()
                .map(|key| {
                    degrees
                        .get(key)
                        .copied()
                        .ok_or(EngineError::UnknownAttribute(key.0))
                })
                .try_fold(1.0_f64, |acc, d| d.map(|d| acc.min(d)))?;
            let slot = activations.entry(rule.consequent).or_insert(0.0);
            *slot = slot.max(strength);
        }
        Ok(activations)
    }

    /// Passos 1–4: score defuzzificado pelo centroide.
    pub fn mamdani(&self, features: &FeatureVector) -> Result<f64> {
        let activations = self.activations(features)?;
        if activations.values().all(|a| *a <= 0.0) {
            return Err(EngineError::NoRuleFired);
        }

        let output = self.model.output();
        let (lo, hi) = output.domain();
        let steps = ((hi - lo) / self.defuzz_step).round() as usize;

        let mut area = 0.0;
        let mut moment = 0.0;
        for i in 0..=steps {
            let x = (lo + i as f64 * self.defuzz_step).min(hi);
            let mu = output
                .terms()
                .iter()
                .map(|(term, triangle)| {
                    let activation = activations.get(term).copied().unwrap_or(0.0);
                    activation.min(triangle.degree(x))
                })
                .fold(0.0_f64, f64::max);
            area += mu;
            moment += mu * x;
        }

        if area <= 0.0 {
            return Err(EngineError::DegenerateOutput);
        }
        Ok((moment / area).clamp(lo, hi))
    }
}

/// Heurística determinística usada quando a inferência fuzzy falha.
///
/// ```text
/// dulcor > 7                         → 8.0
/// intensidade > 7 E gordura > 6      → 8.0
/// intensidade < 5 E gordura < 5      → 3.0
/// caso contrário                     → 5.0
/// ```
pub fn heuristic_score(features: &FeatureVector) -> f64 {
    let flavor = features.get(Attribute::FlavorIntensity);
    let fat = features.get(Attribute::Fat);
    if features.get(Attribute::Sweetness) > 7.0 {
        8.0
    } else if flavor > 7.0 && fat > 6.0 {
        8.0
    } else if flavor < 5.0 && fat < 5.0 {
        3.0
    } else {
        5.0
    }
}
