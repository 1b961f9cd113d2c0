use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::catalog::models::{EnrichedIngredient, NutrientRecord};
use crate::nutrition::{classify_with, resolve_mass, scale_checked, EnergyRule, MacroBucket};

/// Rounded macro totals: calories to the nearest integer, the rest to one decimal.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct MacroTotals {
    pub calories: f64,
    pub fat: f64,
    pub carbs: f64,
    pub protein: f64,
}

/// Unrounded running sums, one per bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroSums {
    pub calories: f64,
    pub fat: f64,
    pub carbs: f64,
    pub protein: f64,
}

impl MacroSums {
    /// Adds `value` to the bucket's sum. A value that would overflow the sum is dropped.
    pub fn add(&mut self, bucket: MacroBucket, value: f64) {
        let slot = match bucket {
            MacroBucket::Energy => &mut self.calories,
            MacroBucket::Fat => &mut self.fat,
            MacroBucket::Carbohydrate => &mut self.carbs,
            MacroBucket::Protein => &mut self.protein,
        };
        let next = *slot + value;
        if next.is_finite() {
            *slot = next;
        }
    }

    pub fn scaled(&self, factor: f64) -> MacroSums {
        MacroSums {
            calories: self.calories * factor,
            fat: self.fat * factor,
            carbs: self.carbs * factor,
            protein: self.protein * factor,
        }
    }

    pub fn merged(&self, other: &MacroSums) -> MacroSums {
        MacroSums {
            calories: self.calories + other.calories,
            fat: self.fat + other.fat,
            carbs: self.carbs + other.carbs,
            protein: self.protein + other.protein,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.calories.is_finite() && self.fat.is_finite() && self.carbs.is_finite() && self.protein.is_finite()
    }

    pub fn rounded(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories.round(),
            fat: round_one_decimal(self.fat),
            carbs: round_one_decimal(self.carbs),
            protein: round_one_decimal(self.protein),
        }
    }
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    let tenths = value * 10.0;
    // Values this large carry no fractional digits anyway.
    if !tenths.is_finite() {
        return value;
    }
    tenths.round() / 10.0
}

/// Adds every classified record, scaled to `grams`, into `sums`.
pub(crate) fn accumulate_nutrients(
    sums: &mut MacroSums,
    nutrients: &[NutrientRecord],
    grams: f64,
    rule: EnergyRule,
) {
    for record in nutrients {
        let Some(bucket) = classify_with(rule, &record.nutrient_name, &record.unit) else {
            continue;
        };
        if let Some(value) = scale_checked(record, grams) {
            sums.add(bucket, value);
        }
    }
}

/// Sums the raw macros of all complete ingredients and returns the consumed
/// mass alongside. Incomplete ingredients are skipped without partial credit,
/// and so is any ingredient that would push a sum or the mass past `f64` range.
pub fn sum_ingredients(ingredients: &[EnrichedIngredient]) -> (MacroSums, f64) {
    let mut sums = MacroSums::default();
    let mut total_mass_g = 0.0_f64;

    for ingredient in ingredients {
        let Some(grams) = resolve_mass(ingredient) else {
            trace!(food = %ingredient.food.name, "skipping incomplete ingredient");
            continue;
        };

        let mut contribution = MacroSums::default();
        accumulate_nutrients(&mut contribution, &ingredient.food.nutrients, grams, EnergyRule::NameAndUnit);

        let merged = sums.merged(&contribution);
        let mass = total_mass_g + grams;
        if !merged.is_finite() || !mass.is_finite() {
            warn!(food = %ingredient.food.name, "skipping ingredient whose totals overflow");
            continue;
        }
        sums = merged;
        total_mass_g = mass;
    }

    (sums, total_mass_g)
}

/// Total calories, fat, carbohydrate and protein of a recipe.
///
/// Pure and idempotent. Empty or fully incomplete input gives all zeros.
pub fn aggregate(ingredients: &[EnrichedIngredient]) -> MacroTotals {
    let (sums, _) = sum_ingredients(ingredients);
    sums.rounded()
}

/// Totals plus the derived per-portion and per-100g views.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RecipeMacroProfile {
    pub total_mass_g: Option<f64>,
    pub totals: MacroTotals,
    pub per_portion: Option<MacroTotals>,
    pub per_100g: Option<MacroTotals>,
}

pub fn calculate_macro_profile(
    ingredients: &[EnrichedIngredient],
    portions: Option<u32>,
) -> RecipeMacroProfile {
    let (sums, total_mass_g) = sum_ingredients(ingredients);

    let per_portion = portions
        .filter(|p| *p > 0)
        .map(|p| sums.scaled(1.0 / f64::from(p)).rounded());

    let per_100g = if total_mass_g > 0.0 {
        Some(sums.scaled(100.0 / total_mass_g))
            .filter(MacroSums::is_finite)
            .map(|per_100g| per_100g.rounded())
    } else {
        None
    };

    debug!(
        ingredients = ingredients.len(),
        total_mass_g,
        "calculated recipe macro profile"
    );

    RecipeMacroProfile {
        total_mass_g: (total_mass_g > 0.0).then(|| round_one_decimal(total_mass_g)),
        totals: sums.rounded(),
        per_portion,
        per_100g,
    }
}
