use crate::catalog::models::EnrichedIngredient;

/// A factor is usable when it is a finite, strictly positive number.
pub(crate) fn is_usable_factor(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Grams consumed for one ingredient: `quantity * measure.weight_grams`.
///
/// Returns `None` when the ingredient is incomplete (missing, zero, negative or
/// non-finite quantity or measure weight). Callers skip such ingredients.
pub fn resolve_mass(ingredient: &EnrichedIngredient) -> Option<f64> {
    let quantity = ingredient.quantity.filter(|q| is_usable_factor(*q))?;
    let weight_grams = ingredient
        .measure
        .as_ref()
        .map(|m| m.weight_grams)
        .filter(|w| is_usable_factor(*w))?;

    let grams = quantity * weight_grams;
    grams.is_finite().then_some(grams)
}
