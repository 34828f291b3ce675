//! # Categoria de Vinho — Leve, Médio, Encorpado
//!
//! A [`WineCategory`] é o rótulo de classe do sistema inteiro: é o alvo do
//! indutor de árvore, o consequente das regras fuzzy e a saída final da
//! inferência.
//!
//! ## Origem dos rótulos
//!
//! O dataset de pratos não traz a categoria pronta — traz um texto livre de
//! harmonização ("Tinto encorpado, Cabernet", "Espumante brut"...). O texto é
//! normalizado (NFD sem acentos, minúsculas) e mapeado por palavras-chave:
//!
//! ```text
//! contém leve | light | espumante | verde            → leve
//! contém encorpado | robusto | premium | doce | fortificado → encorpado
//! caso contrário                                      → medio
//! ```
//!
//! O conjunto `leve` é testado primeiro.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Categoria de corpo do vinho.
///
/// A ordem de declaração (leve < medio < encorpado) é usada em relatórios
/// e na contagem de Gini.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WineCategory {
    Leve,
    Medio,
    Encorpado,
}

impl WineCategory {
    /// As três categorias, na ordem canônica.
    pub const ALL: [WineCategory; 3] = [
        WineCategory::Leve,
        WineCategory::Medio,
        WineCategory::Encorpado,
    ];

    /// Rótulo textual (`"leve"`, `"medio"`, `"encorpado"`).
    pub fn label(self) -> &'static str {
        match self {
            WineCategory::Leve => "leve",
            WineCategory::Medio => "medio",
            WineCategory::Encorpado => "encorpado",
        }
    }

    /// Classifica um score de perfil (0–10).
    ///
    /// - `score < 4` → leve
    /// - `4 ≤ score < 7` → medio
    /// - `score ≥ 7` → encorpado
    pub fn from_score(score: f64) -> WineCategory {
        if score < 4.0 {
            WineCategory::Leve
        } else if score < 7.0 {
            WineCategory::Medio
        } else {
            WineCategory::Encorpado
        }
    }

    /// Mapeia um texto livre de harmonização para a categoria.
    pub fn from_harmonization(text: &str) -> WineCategory {
        let normalized = normalize(text);
        let (light, full) = keyword_patterns();
        if light.is_match(&normalized) {
            WineCategory::Leve
        } else if full.is_match(&normalized) {
            WineCategory::Encorpado
        } else {
            WineCategory::Medio
        }
    }

    /// Faixa de corpo `[min, max]` usada pelo seletor de vinhos para filtrar
    /// candidatos. As faixas se sobrepõem de propósito nas fronteiras.
    pub fn body_range(self) -> (f64, f64) {
        match self {
            WineCategory::Leve => (0.0, 5.0),
            WineCategory::Medio => (4.0, 7.0),
            WineCategory::Encorpado => (6.0, 10.0),
        }
    }
}

impl fmt::Display for WineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Regexes de palavras-chave, compiladas uma única vez.
fn keyword_patterns() -> &'static (Regex, Regex) {
    static PATTERNS: OnceLock<(Regex, Regex)> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        (
            Regex::new(r"leve|light|espumante|verde").expect("invalid regex"),
            Regex::new(r"encorpado|robusto|premium|doce|fortificado").expect("invalid regex"),
        )
    })
}

/// Remove acentos (NFD + descarte de marcas combinantes) e passa para minúsculas.
fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect::<String>()
        .to_lowercase()
}
