use lazy_static::lazy_static;
use std::collections::HashMap;

/// The four headline macros tracked per recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroBucket {
    Energy,
    Fat,
    Carbohydrate,
    Protein,
}

/// Which records count as energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnergyRule {
    /// Name must be an energy alias and the unit must be kcal. Used for recipes.
    #[default]
    NameAndUnit,
    /// Any record measured in kcal is energy, whatever its name. Used when
    /// summarizing a single food's nutrition details.
    UnitOnly,
}

pub const ENERGY_UNIT: &str = "kcal";

// Normalized (trimmed, lower-cased) names. New locales are added here.
pub const NUTRIENT_ALIASES: &[(&str, MacroBucket)] = &[
    ("energía", MacroBucket::Energy),
    ("grasa total", MacroBucket::Fat),
    ("grasas", MacroBucket::Fat),
    ("lipidos", MacroBucket::Fat),
    ("carbohidratos totales", MacroBucket::Carbohydrate),
    ("carbohidratos", MacroBucket::Carbohydrate),
    ("hidratos de carbono", MacroBucket::Carbohydrate),
    ("proteínas", MacroBucket::Protein),
    ("proteinas", MacroBucket::Protein),
    ("protein", MacroBucket::Protein),
];

lazy_static! {
    static ref ALIAS_INDEX: HashMap<&'static str, MacroBucket> =
        NUTRIENT_ALIASES.iter().copied().collect();
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

fn is_energy_unit(unit: &str) -> bool {
    normalize(unit) == ENERGY_UNIT
}

/// Classifies a nutrient record by exact alias match on its name.
/// Energy additionally requires the kcal unit.
pub fn classify(nutrient_name: &str, unit: &str) -> Option<MacroBucket> {
    let bucket = *ALIAS_INDEX.get(normalize(nutrient_name).as_str())?;
    if bucket == MacroBucket::Energy && !is_energy_unit(unit) {
        return None;
    }
    Some(bucket)
}

pub fn classify_with(rule: EnergyRule, nutrient_name: &str, unit: &str) -> Option<MacroBucket> {
    match rule {
        EnergyRule::NameAndUnit => classify(nutrient_name, unit),
        EnergyRule::UnitOnly if is_energy_unit(unit) => Some(MacroBucket::Energy),
        EnergyRule::UnitOnly => classify(nutrient_name, unit),
    }
}
