use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading catalog and recipe inputs. The aggregation core
/// itself never fails.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found at: {0:?}")]
    FileNotFound(PathBuf),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column '{0}' not found")]
    MissingColumn(&'static str),

    #[error("No valid foods loaded from {0:?}")]
    EmptyCatalog(PathBuf),

    #[error("Invalid recipe JSON: {0}")]
    RecipeJson(#[from] serde_json::Error),
}
