use std::env;
use std::path::PathBuf;

pub const NUTRIENTS_CSV_ENV_VAR: &str = "RECIPE_MACROS_NUTRIENTS_CSV";
pub const MEASURES_CSV_ENV_VAR: &str = "RECIPE_MACROS_MEASURES_CSV";

const DEFAULT_NUTRIENTS_CSV: &str = "nutrients.csv";
const DEFAULT_MEASURES_CSV: &str = "measures.csv";

/// Where the food catalog is read from.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub nutrients_csv: PathBuf,
    pub measures_csv: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            nutrients_csv: PathBuf::from(DEFAULT_NUTRIENTS_CSV),
            measures_csv: PathBuf::from(DEFAULT_MEASURES_CSV),
        }
    }
}

impl AppConfig {
    /// Reads the catalog paths from the environment. `main` loads `.env` first.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            nutrients_csv: lookup(NUTRIENTS_CSV_ENV_VAR)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.nutrients_csv),
            measures_csv: lookup(MEASURES_CSV_ENV_VAR)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.measures_csv),
        }
    }

    /// Command-line paths take precedence over the environment.
    pub fn with_overrides(mut self, nutrients_csv: Option<PathBuf>, measures_csv: Option<PathBuf>) -> Self {
        if let Some(path) = nutrients_csv {
            self.nutrients_csv = path;
        }
        if let Some(path) = measures_csv {
            self.measures_csv = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_reads_paths_and_ignores_blank_values() {
        let vars: HashMap<&str, &str> = [
            (NUTRIENTS_CSV_ENV_VAR, "/data/nutrientes.csv"),
            (MEASURES_CSV_ENV_VAR, "  "),
        ]
        .into_iter()
        .collect();
        let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.nutrients_csv, PathBuf::from("/data/nutrientes.csv"));
        assert_eq!(config.measures_csv, PathBuf::from(DEFAULT_MEASURES_CSV));
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        env::set_var(MEASURES_CSV_ENV_VAR, "/tmp/medidas.csv");
        let config = AppConfig::from_env();
        env::remove_var(MEASURES_CSV_ENV_VAR);
        assert_eq!(config.measures_csv, PathBuf::from("/tmp/medidas.csv"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = AppConfig::default().with_overrides(None, Some(PathBuf::from("m.csv")));
        assert_eq!(config.nutrients_csv, PathBuf::from(DEFAULT_NUTRIENTS_CSV));
        assert_eq!(config.measures_csv, PathBuf::from("m.csv"));
    }
}
