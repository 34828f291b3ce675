//! # Atributos do Prato e Vetor de Características
//!
//! Um prato é descrito por **10 atributos sensoriais** no intervalo `[0, 10]`,
//! normalmente produzidos por um analisador externo a partir de texto livre.
//!
//! | Atributo | Chave | Usado pelo aprendiz? |
//! |----------|-------|----------------------|
//! | Intensidade de sabor | `intensidade_sabor` | ✅ |
//! | Acidez | `acidez` | ✅ |
//! | Gordura | `gordura` | ✅ |
//! | Especiarias | `especiarias` | ✅ |
//! | Dulçor | `dulcor` | ✅ |
//! | Proteína | `proteina` | ✅ |
//! | Método de preparo | `metodo_preparo` | ✅ |
//! | Crocância | `crocancia` | — |
//! | Teor umami | `teor_umami` | — |
//! | Nível salgado | `nivel_salgado` | — |
//!
//! ## Defesa contra entradas externas
//!
//! O [`FeatureVector`] nunca confia no chamador: valores fora de `[0, 10]`
//! são limitados (clamped) na inserção e valores não finitos são descartados.
//! Atributos ausentes valem o ponto médio [`DEFAULT_VALUE`] (5.0).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Valor assumido para qualquer atributo não informado (ponto médio do domínio).
pub const DEFAULT_VALUE: f64 = 5.0;

/// Limite inferior do domínio de todos os atributos.
pub const DOMAIN_MIN: f64 = 0.0;

/// Limite superior do domínio de todos os atributos.
pub const DOMAIN_MAX: f64 = 10.0;

/// Atributo sensorial de um prato.
///
/// A ordem de declaração é significativa: é a ordem de iteração do indutor
/// de árvore, e portanto o critério de desempate entre splits com o mesmo ganho.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "intensidade_sabor")]
    FlavorIntensity,
    #[serde(rename = "acidez")]
    Acidity,
    #[serde(rename = "gordura")]
    Fat,
    #[serde(rename = "especiarias")]
    Spice,
    #[serde(rename = "dulcor")]
    Sweetness,
    #[serde(rename = "proteina")]
    Protein,
    #[serde(rename = "metodo_preparo")]
    CookingMethod,
    #[serde(rename = "crocancia")]
    Crunchiness,
    #[serde(rename = "teor_umami")]
    Umami,
    #[serde(rename = "nivel_salgado")]
    Saltiness,
}

impl Attribute {
    /// Todos os 10 atributos, na ordem canônica.
    pub const ALL: [Attribute; 10] = [
        Attribute::FlavorIntensity,
        Attribute::Acidity,
        Attribute::Fat,
        Attribute::Spice,
        Attribute::Sweetness,
        Attribute::Protein,
        Attribute::CookingMethod,
        Attribute::Crunchiness,
        Attribute::Umami,
        Attribute::Saltiness,
    ];

    /// Os 7 atributos considerados pelo indutor de árvore.
    pub const LEARNER: [Attribute; 7] = [
        Attribute::FlavorIntensity,
        Attribute::Acidity,
        Attribute::Fat,
        Attribute::Spice,
        Attribute::Sweetness,
        Attribute::Protein,
        Attribute::CookingMethod,
    ];

    /// Chave textual do atributo (a mesma usada pelo analisador externo).
    pub fn name(self) -> &'static str {
        match self {
            Attribute::FlavorIntensity => "intensidade_sabor",
            Attribute::Acidity => "acidez",
            Attribute::Fat => "gordura",
            Attribute::Spice => "especiarias",
            Attribute::Sweetness => "dulcor",
            Attribute::Protein => "proteina",
            Attribute::CookingMethod => "metodo_preparo",
            Attribute::Crunchiness => "crocancia",
            Attribute::Umami => "teor_umami",
            Attribute::Saltiness => "nivel_salgado",
        }
    }

    /// Busca um atributo pela chave textual. Retorna `None` para chaves desconhecidas.
    pub fn from_name(name: &str) -> Option<Attribute> {
        Attribute::ALL.into_iter().find(|a| a.name() == name)
    }

    /// `true` para atributos cujo vocabulário linguístico usa a forma feminina
    /// (`baixa`/`media`/`alta`): acidez, gordura e proteína.
    pub fn is_feminine(self) -> bool {
        matches!(
            self,
            Attribute::Acidity | Attribute::Fat | Attribute::Protein
        )
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Vetor de características de um prato — imutável depois de construído.
///
/// Construído por encadeamento ([`with`](FeatureVector::with)), que consome
/// o vetor e devolve uma nova versão. Não há métodos `&mut`. A desserialização
/// passa pelo mesmo caminho, então o JSON também é limitado ao domínio.
///
/// ```text
/// let prato = FeatureVector::new()
///     .with(Attribute::FlavorIntensity, 8.0)
///     .with(Attribute::Fat, 7.0);
/// assert_eq!(prato.get(Attribute::Acidity), 5.0); // ausente → ponto médio
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Attribute, f64>", into = "BTreeMap<Attribute, f64>")]
pub struct FeatureVector {
    values: BTreeMap<Attribute, f64>,
}

impl FeatureVector {
    /// Cria um vetor vazio — todos os atributos valem [`DEFAULT_VALUE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Define um atributo, limitando o valor ao domínio `[0, 10]`.
    ///
    /// Valores `NaN`/infinitos são ignorados: o atributo continua ausente
    /// e portanto assume o ponto médio.
    pub fn with(mut self, attribute: Attribute, value: f64) -> Self {
        if value.is_finite() {
            self.values
                .insert(attribute, value.clamp(DOMAIN_MIN, DOMAIN_MAX));
        } else {
            tracing::debug!(attribute = %attribute, "valor não finito descartado");
            self.values.remove(&attribute);
        }
        self
    }

    /// Constrói um vetor a partir de pares `(chave, valor)` textuais.
    ///
    /// Chaves desconhecidas são ignoradas (com log `debug`).
    pub fn from_named<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        pairs
            .into_iter()
            .fold(FeatureVector::new(), |fv, (name, value)| {
                match Attribute::from_name(name) {
                    Some(attribute) => fv.with(attribute, value),
                    None => {
                        tracing::debug!(key = name, "atributo desconhecido ignorado");
                        fv
                    }
                }
            })
    }

    /// Valor do atributo, ou [`DEFAULT_VALUE`] se ausente.
    pub fn get(&self, attribute: Attribute) -> f64 {
        self.values
            .get(&attribute)
            .copied()
            .unwrap_or(DEFAULT_VALUE)
    }
}

impl From<BTreeMap<Attribute, f64>> for FeatureVector {
    fn from(values: BTreeMap<Attribute, f64>) -> Self {
        values
            .into_iter()
            .fold(FeatureVector::new(), |fv, (attribute, value)| fv.with(attribute, value))
    }
}

impl From<FeatureVector> for BTreeMap<Attribute, f64> {
    fn from(features: FeatureVector) -> Self {
        features.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attribute_defaults_to_midpoint() {
        let fv = FeatureVector::new().with(Attribute::Fat, 2.0);
        assert_eq!(fv.get(Attribute::Fat), 2.0);
        assert_eq!(fv.get(Attribute::Acidity), DEFAULT_VALUE);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let fv = FeatureVector::new()
            .with(Attribute::Sweetness, 14.0)
            .with(Attribute::Spice, -3.0);
        assert_eq!(fv.get(Attribute::Sweetness), 10.0);
        assert_eq!(fv.get(Attribute::Spice), 0.0);
    }

    #[test]
    fn non_finite_values_fall_back_to_default() {
        let fv = FeatureVector::new()
            .with(Attribute::Protein, 9.0)
            .with(Attribute::Protein, f64::NAN);
        assert_eq!(fv.get(Attribute::Protein), DEFAULT_VALUE);
    }

    #[test]
    fn from_named_ignores_unknown_keys() {
        let fv = FeatureVector::from_named([("acidez", 3.0), ("taninos", 9.0)]);
        assert_eq!(fv.get(Attribute::Acidity), 3.0);
        assert_eq!(fv, FeatureVector::new().with(Attribute::Acidity, 3.0));
    }

    #[test]
    fn names_round_trip() {
        for attribute in Attribute::ALL {
            assert_eq!(Attribute::from_name(attribute.name()), Some(attribute));
        }
        assert_eq!(Attribute::from_name("corpo"), None);
    }

    #[test]
    fn serializes_with_portuguese_keys() {
        let fv = FeatureVector::new().with(Attribute::CookingMethod, 9.0);
        let json = serde_json::to_string(&fv).unwrap();
        assert_eq!(json, r#"{"metodo_preparo":9.0}"#);
    }

    #[test]
    fn deserialized_values_are_clamped() {
        let fv: FeatureVector =
            serde_json::from_str(r#"{"acidez": 50.0, "gordura": -3.0, "dulcor": 4.5}"#).unwrap();
        assert_eq!(fv.get(Attribute::Acidity), 10.0);
        assert_eq!(fv.get(Attribute::Fat), 0.0);
        assert_eq!(fv.get(Attribute::Sweetness), 4.5);
        assert_eq!(
            fv,
            FeatureVector::new()
                .with(Attribute::Acidity, 10.0)
                .with(Attribute::Fat, 0.0)
                .with(Attribute::Sweetness, 4.5)
        );
    }
}
