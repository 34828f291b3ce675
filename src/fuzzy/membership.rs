//! # Modelo de Pertinência — Variáveis Linguísticas
//!
//! Cada variável (7 entradas + 1 saída) tem domínio `[0, 10]` e exatamente
//! três termos com função de pertinência **triangular** `(a, b, c)`:
//!
//! ```text
//!  1 ┤      b
//!    │     /\
//!    │    /  \
//!  0 ┼───a────c───
//! ```
//!
//! Com `a == b` (ou `b == c`) o triângulo vira um "ombro": pertinência 1 em
//! toda a borda do domínio.
//!
//! ## Breakpoints Padrão
//!
//! | Variável | baixo | medio | alto |
//! |----------|-------|-------|------|
//! | simétricas | (0,0,5) | (3,5,7) | (5,10,10) |
//! | dulcor | (0,0,4) | (3,5,7) | (6,10,10) |
//! | perfil_vinho (leve/medio/encorpado) | (0,0,5) | (3,5,7) | (5,10,10) |
//!
//! O dulçor é assimétrico para puxar valores intermediários para "medio".

use std::collections::BTreeMap;

use crate::core::{Attribute, WineCategory, DOMAIN_MAX, DOMAIN_MIN};
use crate::rules::Level;

/// Função de pertinência triangular.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Grau de pertinência de `x`, em `[0, 1]`.
    pub fn degree(&self, x: f64) -> f64 {
        let Triangle { a, b, c } = *self;
        if x == b {
            1.0
        } else if a < x && x < b {
            (x - a) / (b - a)
        } else if b < x && x < c {
            (c - x) / (c - b)
        } else {
            0.0
        }
    }
}

/// Variável linguística: domínio e termos nomeados.
#[derive(Clone, Debug)]
pub struct MembershipVariable<T> {
    domain: (f64, f64),
    terms: Vec<(T, Triangle)>,
}

impl<T: Copy> MembershipVariable<T> {
    pub fn new(terms: Vec<(T, Triangle)>) -> Self {
        Self {
            domain: (DOMAIN_MIN, DOMAIN_MAX),
            terms,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn terms(&self) -> &[(T, Triangle)] {
        &self.terms
    }

    /// Fuzzificação: grau de `x` em cada termo. `x` é limitado ao domínio.
    pub fn fuzzify(&self, x: f64) -> Vec<(T, f64)> {
        let x = x.clamp(self.domain.0, self.domain.1);
        self.terms
            .iter()
            .map(|(term, triangle)| (*term, triangle.degree(x)))
            .collect()
    }
}

/// Conjunto de variáveis do motor — definido na construção, nunca alterado.
#[derive(Clone, Debug)]
pub struct MembershipModel {
    inputs: BTreeMap<Attribute, MembershipVariable<Level>>,
    output: MembershipVariable<WineCategory>,
}

const LOW: Triangle = Triangle::new(0.0, 0.0, 5.0);
const MEDIUM: Triangle = Triangle::new(3.0, 5.0, 7.0);
const HIGH: Triangle = Triangle::new(5.0, 10.0, 10.0);

impl MembershipModel {
    /// Modelo padrão com os 7 atributos de aprendizado.
    pub fn standard() -> Self {
        let inputs = Attribute::LEARNER
            .into_iter()
            .map(|attribute| {
                let (low, high) = match attribute {
                    Attribute::Sweetness => {
                        (Triangle::new(0.0, 0.0, 4.0), Triangle::new(6.0, 10.0, 10.0))
                    }
                    _ => (LOW, HIGH),
                };
                let variable = MembershipVariable::new(
                    vec![(Level::Low, low), (Level::Medium, MEDIUM), (Level::High, high)],
                );
                (attribute, variable)
            })
            .collect();

        let output = MembershipVariable::new(
            vec![
                (WineCategory::Leve, LOW),
                (WineCategory::Medio, MEDIUM),
                (WineCategory::Encorpado, HIGH),
            ],
        );

        Self { inputs, output }
    }

    pub fn input(&self, attribute: Attribute) -> Option<&MembershipVariable<Level>> {
        self.inputs.get(&attribute)
    }

    pub fn has_input(&self, attribute: Attribute) -> bool {
        self.inputs.contains_key(&attribute)
    }

    pub fn output(&self) -> &MembershipVariable<WineCategory> {
        &self.output
    }
}
