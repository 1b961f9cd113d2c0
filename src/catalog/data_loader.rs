use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;
use tracing::{info, warn};

use super::models::{Food, FoodId, HouseholdMeasure, MeasureId, NutrientRecord};
use super::FoodCatalog;
use crate::error::CatalogError;

// Nutrients file: one row per (food, nutrient) pair.
const FOOD_ID_COL: &str = "food_id";
const FOOD_NAME_COL: &str = "food_name";
const CATEGORY_COL: &str = "category";
const NUTRIENT_COL: &str = "nutrient";
const VALUE_COL: &str = "value";
const UNIT_COL: &str = "unit";

// Measures file.
const MEASURE_ID_COL: &str = "measure_id";
const DESCRIPTION_COL: &str = "description";
const QUANTITY_COL: &str = "quantity";
const WEIGHT_COL: &str = "weight_grams";

fn parse_optional_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

fn column_index(headers: &StringRecord, name: &'static str) -> Result<usize, CatalogError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or(CatalogError::MissingColumn(name))
}

fn open_csv(path: &Path) -> Result<csv::Reader<File>, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(file))
}

fn field<'r>(record: &'r StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("").trim()
}

/// Reads the nutrients file into a catalog of foods without measures.
pub fn load_nutrients(csv_path: &Path) -> Result<FoodCatalog, CatalogError> {
    let mut rdr = open_csv(csv_path)?;
    let headers = rdr.headers()?.clone();

    let food_id_idx = column_index(&headers, FOOD_ID_COL)?;
    let food_name_idx = column_index(&headers, FOOD_NAME_COL)?;
    let category_idx = headers.iter().position(|h| h.trim() == CATEGORY_COL);
    let nutrient_idx = column_index(&headers, NUTRIENT_COL)?;
    let value_idx = column_index(&headers, VALUE_COL)?;
    let unit_idx = column_index(&headers, UNIT_COL)?;

    let mut catalog = FoodCatalog::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result?;

        let Ok(food_id) = field(&record, food_id_idx).parse::<FoodId>() else {
            warn!(row = row_index + 1, "skipping nutrient row with invalid food id");
            continue;
        };

        let nutrient_name = field(&record, nutrient_idx);
        if nutrient_name.is_empty() {
            warn!(row = row_index + 1, food_id, "skipping nutrient row with empty name");
            continue;
        }

        let raw_value = field(&record, value_idx);
        let value_per_100g = if raw_value.is_empty() {
            0.0
        } else if let Some(v) = parse_optional_f64(raw_value) {
            v
        } else {
            warn!(row = row_index + 1, food_id, value = raw_value, "skipping unparsable nutrient value");
            continue;
        };

        if catalog.food(food_id).is_none() {
            let category = category_idx
                .map(|idx| field(&record, idx))
                .filter(|c| !c.is_empty())
                .map(str::to_string);
            catalog.insert(Food {
                id: food_id,
                name: field(&record, food_name_idx).to_string(),
                category,
                nutrients: Vec::new(),
                household_measures: Vec::new(),
            });
        }
        if let Some(food) = catalog.food_mut(food_id) {
            food.nutrients.push(NutrientRecord::new(
                nutrient_name,
                value_per_100g,
                field(&record, unit_idx),
            ));
        }
    }

    if catalog.is_empty() {
        return Err(CatalogError::EmptyCatalog(csv_path.to_path_buf()));
    }
    Ok(catalog)
}

/// Attaches the measures file to an already loaded catalog. Returns how many
/// measures were attached.
pub fn load_measures(catalog: &mut FoodCatalog, csv_path: &Path) -> Result<usize, CatalogError> {
    let mut rdr = open_csv(csv_path)?;
    let headers = rdr.headers()?.clone();

    let measure_id_idx = column_index(&headers, MEASURE_ID_COL)?;
    let food_id_idx = column_index(&headers, FOOD_ID_COL)?;
    let description_idx = column_index(&headers, DESCRIPTION_COL)?;
    let quantity_idx = column_index(&headers, QUANTITY_COL)?;
    let weight_idx = column_index(&headers, WEIGHT_COL)?;

    let mut attached = 0;
    for (row_index, result) in rdr.records().enumerate() {
        let record = result?;

        let ids = (
            field(&record, measure_id_idx).parse::<MeasureId>(),
            field(&record, food_id_idx).parse::<FoodId>(),
        );
        let (Ok(measure_id), Ok(food_id)) = ids else {
            warn!(row = row_index + 1, "skipping measure row with invalid ids");
            continue;
        };

        let Some(weight_grams) = parse_optional_f64(field(&record, weight_idx)) else {
            warn!(row = row_index + 1, measure_id, "skipping measure with unparsable weight");
            continue;
        };

        let Some(food) = catalog.food_mut(food_id) else {
            warn!(measure_id, food_id, "skipping measure for unknown food");
            continue;
        };

        food.household_measures.push(HouseholdMeasure {
            id: measure_id,
            description: field(&record, description_idx).to_string(),
            quantity_label: parse_optional_f64(field(&record, quantity_idx)).unwrap_or(1.0),
            weight_grams,
        });
        attached += 1;
    }

    Ok(attached)
}

pub fn load_food_catalog(nutrients_csv: &Path, measures_csv: &Path) -> Result<FoodCatalog, CatalogError> {
    let mut catalog = load_nutrients(nutrients_csv)?;
    let measures = load_measures(&mut catalog, measures_csv)?;
    info!(foods = catalog.len(), measures, "food catalog loaded");
    Ok(catalog)
}
