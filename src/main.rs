use anyhow::{anyhow, Context, Result};
use tracing::info;

use recipe_macros::catalog::{enrich_ingredients, load_food_catalog, FoodCatalog};
use recipe_macros::cli::{parse_args, CatalogArgs, Command};
use recipe_macros::config::AppConfig;
use recipe_macros::food_summary::{summarize_food, FoodMacroSummary};
use recipe_macros::logging::LoggingConfig;
use recipe_macros::recipe_aggregator::{calculate_macro_profile, MacroTotals, RecipeMacroProfile};
use recipe_macros::recipe_loader::load_stored_recipe;

fn load_catalog(args: &CatalogArgs) -> Result<FoodCatalog> {
    let config = AppConfig::from_env().with_overrides(args.nutrients_csv.clone(), args.measures_csv.clone());
    load_food_catalog(&config.nutrients_csv, &config.measures_csv).with_context(|| {
        format!(
            "Failed to load food catalog from '{}' and '{}'",
            config.nutrients_csv.display(),
            config.measures_csv.display()
        )
    })
}

fn format_totals(totals: &MacroTotals) -> String {
    format!(
        "{} kcal | grasas {} g | carbohidratos {} g | proteínas {} g",
        totals.calories, totals.fat, totals.carbs, totals.protein
    )
}

fn print_profile(name: &str, profile: &RecipeMacroProfile) {
    println!("Receta: {}", name);
    match profile.total_mass_g {
        Some(mass) => println!("  Masa total: {} g", mass),
        None => println!("  Sin ingredientes completos."),
    }
    println!("  Total:       {}", format_totals(&profile.totals));
    if let Some(per_portion) = &profile.per_portion {
        println!("  Por porción: {}", format_totals(per_portion));
    }
    if let Some(per_100g) = &profile.per_100g {
        println!("  Por 100 g:   {}", format_totals(per_100g));
    }
}

fn print_food_summary(summary: &FoodMacroSummary) {
    println!("Alimento: {} (#{})", summary.food_name, summary.food_id);
    println!("  Por 100 g: {}", format_totals(&summary.per_100g));
    for measure in &summary.per_measure {
        println!(
            "  {} ({} g): {}",
            measure.description,
            measure.weight_grams,
            format_totals(&measure.macros)
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    LoggingConfig::from_env().init()?;

    let cli = parse_args();
    match cli.command {
        Command::Recipe { recipe_file, catalog } => {
            let food_catalog = load_catalog(&catalog)?;
            let recipe = load_stored_recipe(&recipe_file)
                .await
                .with_context(|| format!("Failed to read recipe file '{}'", recipe_file.display()))?;
            info!(recipe = %recipe.name, ingredients = recipe.ingredients.len(), "recipe loaded");

            let enriched = enrich_ingredients(&recipe.ingredients, &food_catalog);
            let profile = calculate_macro_profile(&enriched, recipe.portions);

            if catalog.json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                print_profile(&recipe.name, &profile);
            }
        }
        Command::Food { food_id, catalog } => {
            let food_catalog = load_catalog(&catalog)?;
            let food = food_catalog
                .food(food_id)
                .ok_or_else(|| anyhow!("Food {} not found in catalog", food_id))?;
            let summary = summarize_food(food);

            if catalog.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_food_summary(&summary);
            }
        }
    }

    Ok(())
}
