//! Macro summary of a single catalog food, outside any recipe.
//!
//! Nutrition detail screens treat every record measured in kcal as energy,
//! whatever its label ("Calorías", "Energía", ...). That looser rule lives here;
//! recipes keep the stricter name-and-unit rule.

use serde::{Deserialize, Serialize};

use crate::catalog::models::{Food, FoodId, MeasureId};
use crate::nutrition::mass_resolver::is_usable_factor;
use crate::nutrition::EnergyRule;
use crate::recipe_aggregator::{accumulate_nutrients, MacroSums, MacroTotals};

const REFERENCE_GRAMS: f64 = 100.0;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MeasureMacros {
    pub measure_id: MeasureId,
    pub description: String,
    pub quantity_label: f64,
    pub weight_grams: f64,
    pub macros: MacroTotals,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FoodMacroSummary {
    pub food_id: FoodId,
    pub food_name: String,
    pub per_100g: MacroTotals,
    /// One entry per household measure with a usable weight.
    pub per_measure: Vec<MeasureMacros>,
}

fn macros_for_grams(food: &Food, grams: f64) -> MacroTotals {
    let mut sums = MacroSums::default();
    accumulate_nutrients(&mut sums, &food.nutrients, grams, EnergyRule::UnitOnly);
    sums.rounded()
}

pub fn summarize_food(food: &Food) -> FoodMacroSummary {
    let per_measure = food
        .household_measures
        .iter()
        .filter(|m| is_usable_factor(m.weight_grams))
        .map(|m| MeasureMacros {
            measure_id: m.id,
            description: m.description.clone(),
            quantity_label: m.quantity_label,
            weight_grams: m.weight_grams,
            macros: macros_for_grams(food, m.weight_grams),
        })
        .collect();

    FoodMacroSummary {
        food_id: food.id,
        food_name: food.name.clone(),
        per_100g: macros_for_grams(food, REFERENCE_GRAMS),
        per_measure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::{HouseholdMeasure, NutrientRecord};

    fn measure(id: MeasureId, description: &str, weight_grams: f64) -> HouseholdMeasure {
        HouseholdMeasure {
            id,
            description: description.to_string(),
            quantity_label: 1.0,
            weight_grams,
        }
    }

    fn bread() -> Food {
        Food {
            id: 3,
            name: "Pan marraqueta".to_string(),
            category: Some("Productos horneados".to_string()),
            nutrients: vec![
                NutrientRecord::new("Calorias", 267.0, "kcal"),
                NutrientRecord::new("Carbohidratos", 55.0, "g"),
                NutrientRecord::new("Proteinas", 8.4, "g"),
                NutrientRecord::new("Sodio", 540.0, "mg"),
            ],
            household_measures: vec![measure(30, "1 unidad", 100.0), measure(31, "1/2 unidad", 50.0), measure(32, "sin peso", 0.0)],
        }
    }

    #[test]
    fn test_kcal_unit_alone_counts_as_energy() {
        let summary = summarize_food(&bread());
        assert_eq!(summary.per_100g.calories, 267.0);
        assert_eq!(summary.per_100g.carbs, 55.0);
        assert_eq!(summary.per_100g.protein, 8.4);
        assert_eq!(summary.per_100g.fat, 0.0);
    }

    #[test]
    fn test_per_measure_macros() {
        let summary = summarize_food(&bread());
        assert_eq!(summary.per_measure.len(), 2);

        let half = &summary.per_measure[1];
        assert_eq!(half.measure_id, 31);
        assert_eq!(half.macros.calories, 134.0); // 133.5 rounds up
        assert_eq!(half.macros.carbs, 27.5);
        assert_eq!(half.macros.protein, 4.2);
    }
}
