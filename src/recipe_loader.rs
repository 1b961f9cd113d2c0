use std::path::Path;

use crate::catalog::models::StoredRecipe;
use crate::error::CatalogError;

pub fn parse_stored_recipe(json: &str) -> Result<StoredRecipe, CatalogError> {
    Ok(serde_json::from_str::<StoredRecipe>(json)?)
}

pub async fn load_stored_recipe(path: &Path) -> Result<StoredRecipe, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound(path.to_path_buf()));
    }
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_stored_recipe(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::StoredIngredient;

    #[test]
    fn test_parse_stored_recipe() {
        let json = r#"{
            "id": 4,
            "name": "Arroz con palta",
            "portions": 2,
            "ingredients": [
                { "food_id": 1, "measure_id": 10, "quantity": 1.5 },
                { "food_id": 2 }
            ]
        }"#;
        let recipe = parse_stored_recipe(json).unwrap();
        assert_eq!(recipe.id, Some(4));
        assert_eq!(recipe.portions, Some(2));
        assert_eq!(
            recipe.ingredients,
            vec![
                StoredIngredient { food_id: 1, measure_id: Some(10), quantity: Some(1.5) },
                StoredIngredient { food_id: 2, measure_id: None, quantity: None },
            ]
        );
    }

    #[test]
    fn test_parse_accepts_legacy_field_names() {
        let json = r#"{
            "name": "Ensalada",
            "ingredients": [
                { "id": 7, "tipoMedida": 70, "cantidad": 0.5 },
                { "foodId": 8, "medidaId": 80, "cantidad": null }
            ]
        }"#;
        let recipe = parse_stored_recipe(json).unwrap();
        assert_eq!(recipe.portions, None);
        assert_eq!(recipe.ingredients[0], StoredIngredient { food_id: 7, measure_id: Some(70), quantity: Some(0.5) });
        assert_eq!(recipe.ingredients[1], StoredIngredient { food_id: 8, measure_id: Some(80), quantity: None });
    }

    #[test]
    fn test_parse_database_rows_with_their_own_id() {
        let json = r#"{
            "name": "Guiso",
            "ingredients": [
                { "id": 3, "recipeDetailId": 1, "foodId": 8, "medidaId": 80, "cantidad": 1 },
                { "id": 4, "recipeDetailId": 1, "foodId": 9, "medidaId": 90, "cantidad": 2.5 }
            ]
        }"#;
        let recipe = parse_stored_recipe(json).unwrap();
        assert_eq!(
            recipe.ingredients,
            vec![
                StoredIngredient { food_id: 8, measure_id: Some(80), quantity: Some(1.0) },
                StoredIngredient { food_id: 9, measure_id: Some(90), quantity: Some(2.5) },
            ]
        );
    }

    #[test]
    fn test_parse_rejects_ingredient_without_food() {
        let json = r#"{ "name": "Vacía", "ingredients": [ { "medidaId": 80, "cantidad": 1 } ] }"#;
        let err = parse_stored_recipe(json).unwrap_err();
        assert!(err.to_string().contains("food_id"));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_stored_recipe("{ \"name\": ").unwrap_err();
        assert!(matches!(err, CatalogError::RecipeJson(_)));
    }

    #[tokio::test]
    async fn test_load_missing_recipe_file() {
        let err = load_stored_recipe(Path::new("no_such_recipe.json")).await.unwrap_err();
        assert!(matches!(err, CatalogError::FileNotFound(_)));
    }
}
