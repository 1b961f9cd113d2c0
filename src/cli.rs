use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Macro-nutrient totals for recipes and foods", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute calories, fat, carbohydrate and protein of a stored recipe
    Recipe {
        /// Path to the recipe JSON file (food_id, measure_id, quantity per ingredient)
        #[arg(short, long)]
        recipe_file: PathBuf,

        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Show the macros of one catalog food per 100 g and per household measure
    Food {
        #[arg(short, long)]
        food_id: u32,

        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct CatalogArgs {
    /// Nutrients CSV (overrides RECIPE_MACROS_NUTRIENTS_CSV)
    #[arg(long)]
    pub nutrients_csv: Option<PathBuf>,

    /// Household measures CSV (overrides RECIPE_MACROS_MEASURES_CSV)
    #[arg(long)]
    pub measures_csv: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
