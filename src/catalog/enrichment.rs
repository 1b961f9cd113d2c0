use tracing::warn;

use super::models::{EnrichedIngredient, StoredIngredient};
use super::FoodCatalog;

/// Rejoins stored `(food_id, measure_id, quantity)` triples with the catalog.
///
/// An ingredient whose food is unknown is dropped. An unknown measure, or one
/// owned by a different food, leaves `measure` empty so the aggregator treats the
/// ingredient as incomplete.
pub fn enrich_ingredients(stored: &[StoredIngredient], catalog: &FoodCatalog) -> Vec<EnrichedIngredient> {
    stored
        .iter()
        .filter_map(|ingredient| {
            let Some(food) = catalog.food(ingredient.food_id) else {
                warn!(food_id = ingredient.food_id, "ingredient references unknown food");
                return None;
            };

            let measure = ingredient.measure_id.and_then(|measure_id| {
                let found = food.measure(measure_id).cloned();
                if found.is_none() {
                    warn!(
                        food_id = food.id,
                        measure_id, "measure does not belong to ingredient's food"
                    );
                }
                found
            });

            Some(EnrichedIngredient {
                food: food.clone(),
                quantity: ingredient.quantity,
                measure,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::{Food, HouseholdMeasure, NutrientRecord};

    fn catalog() -> FoodCatalog {
        [
            Food {
                id: 1,
                name: "Arroz cocido".to_string(),
                category: None,
                nutrients: vec![NutrientRecord::new("Energía", 130.0, "kcal")],
                household_measures: vec![HouseholdMeasure {
                    id: 10,
                    description: "1 taza".to_string(),
                    quantity_label: 1.0,
                    weight_grams: 150.0,
                }],
            },
            Food {
                id: 2,
                name: "Palta".to_string(),
                category: None,
                nutrients: vec![NutrientRecord::new("Grasas", 14.7, "g")],
                household_measures: vec![HouseholdMeasure {
                    id: 20,
                    description: "1 unidad".to_string(),
                    quantity_label: 1.0,
                    weight_grams: 200.0,
                }],
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_enrich_joins_food_and_measure() {
        let stored = vec![StoredIngredient { food_id: 1, measure_id: Some(10), quantity: Some(2.0) }];
        let enriched = enrich_ingredients(&stored, &catalog());

        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].food.name, "Arroz cocido");
        assert_eq!(enriched[0].quantity, Some(2.0));
        assert_eq!(enriched[0].measure.as_ref().map(|m| m.weight_grams), Some(150.0));
    }

    #[test]
    fn test_enrich_drops_unknown_food() {
        let stored = vec![
            StoredIngredient { food_id: 99, measure_id: Some(10), quantity: Some(1.0) },
            StoredIngredient { food_id: 2, measure_id: Some(20), quantity: Some(1.0) },
        ];
        let enriched = enrich_ingredients(&stored, &catalog());
        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].food.id, 2);
    }

    #[test]
    fn test_enrich_foreign_measure_is_incomplete() {
        // Measure 20 belongs to food 2, not food 1.
        let stored = vec![
            StoredIngredient { food_id: 1, measure_id: Some(20), quantity: Some(1.0) },
            StoredIngredient { food_id: 1, measure_id: None, quantity: Some(1.0) },
        ];
        let enriched = enrich_ingredients(&stored, &catalog());
        assert_eq!(enriched.len(), 2);
        assert!(enriched.iter().all(|i| i.measure.is_none()));
    }
}
