//! Detector de entradas obrigatórias.
//!
//! Só as variáveis referenciadas pela base de regras ativa podem ser
//! alimentadas na inferência. As cinco primeiras entradas são sempre exigidas.

use std::collections::BTreeSet;

use crate::core::Attribute;

use super::engine::ActiveRule;

/// Entradas exigidas em qualquer base de regras.
pub const ALWAYS_REQUIRED: [Attribute; 5] = [
    Attribute::FlavorIntensity,
    Attribute::Acidity,
    Attribute::Fat,
    Attribute::Spice,
    Attribute::Sweetness,
];

/// Atributos a fuzzificar: [`ALWAYS_REQUIRED`] mais todo atributo que
/// apareça em algum antecedente.
pub fn required_inputs(rules: &[ActiveRule]) -> BTreeSet<Attribute> {
    let mut required: BTreeSet<Attribute> = ALWAYS_REQUIRED.into_iter().collect();
    required.extend(
        rules
            .iter()
            .flat_map(|rule| rule.antecedents.iter().map(|(attribute, _)| *attribute)),
    );
    required
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WineCategory;
    use crate::fuzzy::baseline::baseline_rules;
    use crate::fuzzy::engine::RuleOrigin;
    use crate::rules::Level;

    #[test]
    fn empty_rule_base_still_requires_core_inputs() {
        let required = required_inputs(&[]);
        assert_eq!(required.len(), 5);
        assert!(ALWAYS_REQUIRED.iter().all(|a| required.contains(a)));
    }

    #[test]
    fn referenced_optional_inputs_are_added() {
        let rules = vec![ActiveRule {
            antecedents: vec![(Attribute::Protein, Level::High)],
            consequent: WineCategory::Encorpado,
            origin: RuleOrigin::Learned,
        }];
        let required = required_inputs(&rules);
        assert!(required.contains(&Attribute::Protein));
        assert!(!required.contains(&Attribute::CookingMethod));
        assert_eq!(required.len(), 6);
    }

    #[test]
    fn baseline_requires_all_seven_inputs() {
        assert_eq!(required_inputs(&baseline_rules()).len(), 7);
    }
}
