//! Base de regras fixa do sommelier.
//!
//! São 14 regras escritas à mão que referenciam **todas** as variáveis de
//! entrada e todos os termos de saída pelo menos uma vez. Elas entram sempre
//! na base ativa, com ou sem regras aprendidas: uma variável declarada mas
//! não referenciada por nenhuma regra invalida o sistema de inferência.

use crate::core::{Attribute, WineCategory};
use crate::rules::Level;

use super::engine::{ActiveRule, RuleOrigin};

use Attribute::{Acidity, CookingMethod, Fat, FlavorIntensity, Protein, Spice, Sweetness};
use Level::{High, Low, Medium};
use WineCategory::{Encorpado, Leve, Medio};

type Antecedent = &'static [(Attribute, Level)];

const BASELINE: [(Antecedent, WineCategory); 14] = [
    (&[(FlavorIntensity, Low), (Fat, Low)], Leve),
    (&[(FlavorIntensity, Low), (Acidity, High)], Leve),
    (&[(FlavorIntensity, Medium), (Fat, Medium)], Medio),
    (&[(FlavorIntensity, Medium), (Spice, Medium)], Medio),
    (&[(FlavorIntensity, High), (Fat, High)], Encorpado),
    (&[(FlavorIntensity, High), (Spice, High)], Encorpado),
    (&[(Fat, High), (Spice, High)], Encorpado),
    (&[(Fat, Low), (Acidity, High)], Leve),
    (&[(Acidity, Low), (FlavorIntensity, High)], Encorpado),
    (&[(Sweetness, High), (Acidity, Low)], Encorpado),
    (&[(Sweetness, Medium), (FlavorIntensity, Medium)], Medio),
    (&[(Protein, High), (CookingMethod, High)], Encorpado),
    (&[(Protein, Low), (FlavorIntensity, Low)], Leve),
    (&[(CookingMethod, Medium), (Fat, Medium)], Medio),
];

/// As 14 regras da base fixa.
pub fn baseline_rules() -> Vec<ActiveRule> {
    BASELINE
        .iter()
        .map(|(antecedents, consequent)| ActiveRule {
            antecedents: antecedents.to_vec(),
            consequent: *consequent,
            origin: RuleOrigin::Baseline,
        })
        .collect()
}
