use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A single spa listing in the directory.
///
/// `budget` is an ordinal price tier (1 = cheapest), not a currency amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub budget: Option<u8>,
    #[serde(default)]
    pub treatments: Vec<String>,
    #[serde(default)]
    pub opening_hour: Option<String>,
    #[serde(default)]
    pub closing_hour: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub spas: Vec<SpaRecord>,
}

/// Load and validate the spa catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog_file(path: &Path) -> Result<CatalogFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog_file: CatalogFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CatalogFileParse)?;

    validate_catalog(&catalog_file)?;

    Ok(catalog_file)
}

fn validate_catalog(catalog_file: &CatalogFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for spa in &catalog_file.spas {
        if spa.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "spa id must be non-empty".to_string(),
            ));
        }

        if !seen_ids.insert(spa.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate spa id: '{}'",
                spa.id
            )));
        }

        if spa.title.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "spa '{}' has an empty title",
                spa.id
            )));
        }

        if let Some(rating) = spa.rating {
            if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
                return Err(ConfigError::Validation(format!(
                    "spa '{}' has invalid rating {rating}; must be within 0-5",
                    spa.id
                )));
            }
        }

        if let Some(budget) = spa.budget {
            if !(1..=5).contains(&budget) {
                return Err(ConfigError::Validation(format!(
                    "spa '{}' has invalid budget tier {budget}; must be 1-5",
                    spa.id
                )));
            }
        }

        if spa.treatments.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "spa '{}' has an empty treatment entry",
                spa.id
            )));
        }
    }

    Ok(())
}
