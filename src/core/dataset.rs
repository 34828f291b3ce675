//! # Dataset Rotulado de Pratos
//!
//! Sequência ordenada de pares `(FeatureVector, WineCategory)` — a entrada
//! do indutor de árvore. Cada linha tem **exatamente uma** categoria, derivada
//! do texto de harmonização no momento da construção.
//!
//! O índice de cada linha é a identidade da amostra na árvore: os nós
//! guardam conjuntos de índices, nunca cópias das amostras.

use std::collections::BTreeMap;

use super::category::WineCategory;
use super::feature::{Attribute, FeatureVector};

/// Prato conhecido, como chega do cadastro externo (já parseado).
#[derive(Clone, Debug)]
pub struct DishSample {
    /// Nome legível do prato.
    pub name: String,
    /// Atributos sensoriais do prato.
    pub features: FeatureVector,
    /// Texto livre de harmonização sugerida (ex: "Tinto encorpado").
    pub harmonization: String,
}

impl DishSample {
    /// Monta um prato a partir dos valores na ordem de [`Attribute::ALL`]
    /// (sabor, acidez, gordura, especiarias, dulçor, proteína, preparo,
    /// crocância, umami, salgado).
    pub fn new(name: &str, values: [f64; 10], harmonization: &str) -> Self {
        let features = Attribute::ALL
            .into_iter()
            .zip(values)
            .fold(FeatureVector::new(), |fv, (a, v)| fv.with(a, v));
        Self {
            name: name.to_string(),
            features,
            harmonization: harmonization.to_string(),
        }
    }
}

/// Linha do dataset rotulado.
#[derive(Clone, Debug)]
pub struct LabeledRow {
    pub features: FeatureVector,
    pub category: WineCategory,
}

/// Dataset rotulado — imutável depois de construído.
#[derive(Clone, Debug, Default)]
pub struct LabeledDataset {
    rows: Vec<LabeledRow>,
}

impl LabeledDataset {
    /// Constrói o dataset a partir de linhas já rotuladas.
    pub fn new(rows: Vec<LabeledRow>) -> Self {
        Self { rows }
    }

    /// Constrói o dataset a partir de pratos, mapeando cada texto de
    /// harmonização para uma categoria via [`WineCategory::from_harmonization`].
    pub fn from_dishes(dishes: &[DishSample]) -> Self {
        let rows = dishes
            .iter()
            .map(|dish| LabeledRow {
                features: dish.features.clone(),
                category: WineCategory::from_harmonization(&dish.harmonization),
            })
            .collect::<Vec<_>>();
        let dataset = Self::new(rows);
        tracing::info!(
            amostras = dataset.len(),
            distribuicao = ?dataset.distribution(),
            "Dataset rotulado construído"
        );
        dataset
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn rows(&self) -> &[LabeledRow] {
        &self.rows
    }

    /// Valor do atributo na amostra `index`.
    ///
    /// Panics se `index` estiver fora do dataset — os índices vêm sempre
    /// de `0..len()`.
    pub fn value(&self, index: usize, attribute: Attribute) -> f64 {
        self.rows[index].features.get(attribute)
    }

    /// Categoria da amostra `index`.
    pub fn category(&self, index: usize) -> WineCategory {
        self.rows[index].category
    }

    /// Contagem de amostras por categoria (categorias ausentes não aparecem).
    pub fn distribution(&self) -> BTreeMap<WineCategory, usize> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(row.category).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dishes_are_labeled_from_harmonization() {
        let dishes = vec![
            DishSample::new("Ceviche", [6.0, 9.0, 1.0, 3.0, 1.0, 6.0, 1.0, 2.0, 3.0, 5.0], "Vinho verde"),
            DishSample::new("Picanha", [8.0, 2.0, 8.0, 3.0, 1.0, 9.0, 9.0, 4.0, 8.0, 7.0], "Tinto encorpado"),
            DishSample::new("Risoto", [6.0, 4.0, 6.0, 2.0, 2.0, 4.0, 5.0, 1.0, 7.0, 5.0], "Branco com madeira"),
        ];
        let ds = LabeledDataset::from_dishes(&dishes);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.category(0), WineCategory::Leve);
        assert_eq!(ds.category(1), WineCategory::Encorpado);
        assert_eq!(ds.category(2), WineCategory::Medio);
        assert_eq!(ds.value(1, Attribute::Protein), 9.0);
        assert_eq!(ds.value(0, Attribute::Acidity), 9.0);
    }

    #[test]
    fn distribution_counts_each_category() {
        let ds = LabeledDataset::new(vec![
            LabeledRow { features: FeatureVector::new(), category: WineCategory::Medio },
            LabeledRow { features: FeatureVector::new(), category: WineCategory::Medio },
            LabeledRow { features: FeatureVector::new(), category: WineCategory::Leve },
        ]);
        let dist = ds.distribution();
        assert_eq!(dist.get(&WineCategory::Medio), Some(&2));
        assert_eq!(dist.get(&WineCategory::Leve), Some(&1));
        assert_eq!(dist.get(&WineCategory::Encorpado), None);
    }
}
