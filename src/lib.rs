pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod food_summary;
pub mod logging;
pub mod nutrition;
pub mod recipe_aggregator;
pub mod recipe_loader;

pub use recipe_aggregator::{aggregate, MacroTotals};
