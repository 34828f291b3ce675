//! Cardápio de pratos conhecidos embutido no binário.
//!
//! Substitui o cadastro tabular externo: cada prato traz os 10 atributos
//! (ordem de [`Attribute::ALL`](super::Attribute::ALL)) e a harmonização
//! sugerida em texto livre.

use super::dataset::DishSample;

/// Retorna o cardápio de referência usado para treinar o modelo.
pub fn seed_dishes() -> Vec<DishSample> {
    // sabor, acidez, gordura, especiarias, dulcor, proteina, preparo, crocancia, umami, salgado
    vec![
        DishSample::new("Ceviche de peixe branco", [6.0, 9.0, 1.0, 4.0, 1.0, 6.0, 1.0, 2.0, 3.0, 5.0], "Vinho verde ou Sauvignon Blanc"),
        DishSample::new("Salada caprese", [3.0, 6.0, 4.0, 1.0, 2.0, 4.0, 1.0, 2.0, 4.0, 3.0], "Branco leve, Pinot Grigio"),
        DishSample::new("Ostras frescas", [4.0, 5.0, 2.0, 0.0, 1.0, 5.0, 0.0, 1.0, 6.0, 7.0], "Espumante brut"),
        DishSample::new("Sushi variado", [4.0, 5.0, 3.0, 2.0, 3.0, 6.0, 1.0, 2.0, 7.0, 5.0], "Espumante ou branco light"),
        DishSample::new("Linguado grelhado", [3.0, 4.0, 2.0, 1.0, 1.0, 7.0, 6.0, 3.0, 4.0, 4.0], "Branco leve, Albariño"),
        DishSample::new("Moqueca de peixe", [7.0, 5.0, 6.0, 6.0, 2.0, 7.0, 5.0, 1.0, 6.0, 5.0], "Branco com corpo, Chardonnay"),
        DishSample::new("Risoto de cogumelos", [6.0, 4.0, 6.0, 2.0, 2.0, 4.0, 5.0, 1.0, 8.0, 5.0], "Tinto médio, Pinot Noir"),
        DishSample::new("Frango assado com ervas", [5.0, 3.0, 5.0, 4.0, 1.0, 7.0, 7.0, 5.0, 5.0, 5.0], "Tinto médio ou branco com madeira"),
        DishSample::new("Pizza margherita", [5.0, 6.0, 5.0, 2.0, 2.0, 4.0, 7.0, 6.0, 6.0, 6.0], "Tinto jovem, Chianti"),
        DishSample::new("Lasanha à bolonhesa", [7.0, 6.0, 7.0, 3.0, 2.0, 6.0, 6.0, 3.0, 7.0, 6.0], "Tinto médio, Sangiovese"),
        DishSample::new("Feijoada completa", [9.0, 3.0, 9.0, 5.0, 1.0, 8.0, 5.0, 2.0, 8.0, 8.0], "Tinto encorpado, Tannat"),
        DishSample::new("Picanha na brasa", [8.0, 2.0, 8.0, 3.0, 1.0, 9.0, 9.0, 4.0, 8.0, 7.0], "Tinto encorpado, Malbec"),
        DishSample::new("Costela no bafo", [9.0, 2.0, 9.0, 4.0, 1.0, 9.0, 8.0, 2.0, 8.0, 7.0], "Tinto robusto, Cabernet Sauvignon"),
        DishSample::new("Cordeiro ao forno", [8.0, 3.0, 7.0, 5.0, 1.0, 9.0, 8.0, 3.0, 7.0, 6.0], "Tinto encorpado, Syrah"),
        DishSample::new("Javali ao molho de vinho", [9.0, 4.0, 7.0, 6.0, 2.0, 9.0, 7.0, 2.0, 8.0, 6.0], "Tinto premium de guarda"),
        DishSample::new("Curry de cordeiro", [9.0, 4.0, 7.0, 9.0, 3.0, 8.0, 6.0, 1.0, 6.0, 6.0], "Tinto robusto e frutado, Zinfandel"),
        DishSample::new("Queijos azuis", [9.0, 4.0, 9.0, 1.0, 2.0, 7.0, 0.0, 1.0, 9.0, 9.0], "Vinho fortificado, Porto"),
        DishSample::new("Pudim de leite", [6.0, 1.0, 6.0, 1.0, 9.0, 4.0, 6.0, 1.0, 1.0, 2.0], "Vinho doce, Sauternes"),
        DishSample::new("Torta de chocolate", [8.0, 2.0, 7.0, 1.0, 9.0, 3.0, 7.0, 3.0, 2.0, 2.0], "Fortificado, Porto Tawny"),
        DishSample::new("Salmão grelhado", [6.0, 4.0, 6.0, 2.0, 1.0, 8.0, 7.0, 3.0, 6.0, 5.0], "Rosé seco ou Pinot Noir"),
        DishSample::new("Bacalhau à Gomes de Sá", [7.0, 4.0, 7.0, 2.0, 1.0, 8.0, 6.0, 2.0, 7.0, 8.0], "Tinto médio do Douro"),
        DishSample::new("Tacos de porco", [7.0, 6.0, 6.0, 8.0, 3.0, 7.0, 6.0, 6.0, 6.0, 6.0], "Rosé ou tinto jovem, Grenache"),
        DishSample::new("Tempurá de legumes", [3.0, 3.0, 6.0, 1.0, 2.0, 2.0, 8.0, 9.0, 3.0, 4.0], "Espumante extra brut"),
        DishSample::new("Carpaccio", [5.0, 6.0, 3.0, 2.0, 1.0, 7.0, 0.0, 1.0, 6.0, 5.0], "Tinto leve, Beaujolais"),
    ]
}
