use serde::{Deserialize, Serialize};

pub type FoodId = u32;
pub type MeasureId = u32;

/// One nutrient measurement of a food, always expressed per 100 g of it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NutrientRecord {
    pub nutrient_name: String,
    pub value_per_100g: f64,
    #[serde(default)]
    pub unit: String,
}

impl NutrientRecord {
    pub fn new(nutrient_name: &str, value_per_100g: f64, unit: &str) -> Self {
        Self {
            nutrient_name: nutrient_name.to_string(),
            value_per_100g,
            unit: unit.to_string(),
        }
    }
}

/// A colloquial serving unit ("1 taza" = 150 g) belonging to a single food.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HouseholdMeasure {
    pub id: MeasureId,
    pub description: String,
    pub quantity_label: f64,
    pub weight_grams: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub nutrients: Vec<NutrientRecord>,
    #[serde(default)]
    pub household_measures: Vec<HouseholdMeasure>,
}

impl Food {
    pub fn measure(&self, measure_id: MeasureId) -> Option<&HouseholdMeasure> {
        self.household_measures.iter().find(|m| m.id == measure_id)
    }
}

/// The persisted form of a recipe ingredient: only references and the quantity.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(try_from = "StoredIngredientRow")]
pub struct StoredIngredient {
    pub food_id: FoodId,
    pub measure_id: Option<MeasureId>,
    pub quantity: Option<f64>,
}

/// Every shape an ingredient row is stored in. Database rows carry their own
/// `id` next to `foodId`/`medidaId`; edit-form input uses `id` for the food and
/// `tipoMedida` for the measure.
#[derive(Debug, Deserialize)]
struct StoredIngredientRow {
    #[serde(default, alias = "foodId")]
    food_id: Option<FoodId>,
    #[serde(default)]
    id: Option<FoodId>,
    #[serde(default, alias = "medidaId")]
    measure_id: Option<MeasureId>,
    #[serde(default, rename = "tipoMedida")]
    tipo_medida: Option<MeasureId>,
    #[serde(default, alias = "cantidad")]
    quantity: Option<f64>,
}

impl TryFrom<StoredIngredientRow> for StoredIngredient {
    type Error = String;

    fn try_from(row: StoredIngredientRow) -> Result<Self, Self::Error> {
        // An explicit food id wins; a bare `id` only names the food when it is absent.
        let food_id = row
            .food_id
            .or(row.id)
            .ok_or_else(|| "ingredient is missing `food_id`".to_string())?;
        Ok(StoredIngredient {
            food_id,
            measure_id: row.measure_id.or(row.tipo_medida),
            quantity: row.quantity,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StoredRecipe {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub portions: Option<u32>,
    #[serde(default)]
    pub ingredients: Vec<StoredIngredient>,
}

/// A recipe ingredient joined with its food's nutrients and the chosen measure.
/// Built transiently for aggregation and never persisted in this form.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EnrichedIngredient {
    pub food: Food,
    pub quantity: Option<f64>,
    pub measure: Option<HouseholdMeasure>,
}
