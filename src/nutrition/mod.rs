pub mod ingredient_scaler;
pub mod mass_resolver;
pub mod nutrient_classifier;

pub use ingredient_scaler::{scale, scale_checked};
pub use mass_resolver::resolve_mass;
pub use nutrient_classifier::{classify, classify_with, EnergyRule, MacroBucket};
