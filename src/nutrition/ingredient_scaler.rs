use crate::catalog::models::NutrientRecord;

/// Scales a per-100 g value to `grams` (simple rule of three). No rounding here:
/// rounding is applied once, after all ingredients are summed.
pub fn scale(record: &NutrientRecord, grams: f64) -> f64 {
    (record.value_per_100g * grams) / 100.0
}

/// Like [`scale`], but rejects records whose value is negative or not finite,
/// and products that overflow, so they cannot leak NaN into the totals.
pub fn scale_checked(record: &NutrientRecord, grams: f64) -> Option<f64> {
    let value = record.value_per_100g;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let scaled = scale(record, grams);
    scaled.is_finite().then_some(scaled)
}
