pub mod data_loader;
pub mod enrichment;
pub mod models;

use std::collections::BTreeMap;

pub use data_loader::load_food_catalog;
pub use enrichment::enrich_ingredients;
pub use models::{
    EnrichedIngredient, Food, FoodId, HouseholdMeasure, MeasureId, NutrientRecord,
    StoredIngredient, StoredRecipe,
};

/// In-memory food catalog keyed by food id.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: BTreeMap<FoodId, Food>,
}

impl FoodCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a food, replacing any previous entry with the same id.
    pub fn insert(&mut self, food: Food) {
        self.foods.insert(food.id, food);
    }

    pub fn food(&self, food_id: FoodId) -> Option<&Food> {
        self.foods.get(&food_id)
    }

    pub(crate) fn food_mut(&mut self, food_id: FoodId) -> Option<&mut Food> {
        self.foods.get_mut(&food_id)
    }

    /// Looks up a measure only among the measures owned by `food_id`.
    pub fn measure(&self, food_id: FoodId, measure_id: MeasureId) -> Option<&HouseholdMeasure> {
        self.food(food_id)?.measure(measure_id)
    }

    /// Foods ordered by id.
    pub fn foods(&self) -> impl Iterator<Item = &Food> {
        self.foods.values()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl FromIterator<Food> for FoodCatalog {
    fn from_iter<I: IntoIterator<Item = Food>>(iter: I) -> Self {
        let mut catalog = FoodCatalog::new();
        for food in iter {
            catalog.insert(food);
        }
        catalog
    }
}
