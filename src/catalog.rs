//! Portfolio catalog and the variant options offered for each entry.

use crate::error::{Error, Result};
use crate::selection::DEFAULT_VARIANT;
use crate::utils::slugify;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

static BUNDLED: Lazy<Result<CatalogConfig>> =
    Lazy::new(|| CatalogConfig::from_json(BUNDLED_CATALOG));

/// One purchasable item shown in the portfolio grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub label: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
}

impl CatalogEntry {
    pub fn element_id(&self) -> String {
        format!("portfolio-{}", slugify(&self.label))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub entries: Vec<CatalogEntry>,
    #[serde(default = "default_variants")]
    pub variants: Vec<String>,
}

fn default_variants() -> Vec<String> {
    vec![DEFAULT_VARIANT.to_string(), "Premium".to_string()]
}

impl CatalogConfig {
    /// Parse and validate a catalog document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: CatalogConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The catalog embedded at build time, parsed on first access.
    pub fn bundled() -> std::result::Result<&'static CatalogConfig, &'static Error> {
        BUNDLED.as_ref()
    }

    fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.label.trim().is_empty() {
                return Err(Error::BlankLabel { index });
            }
            if !seen.insert(entry.label.as_str()) {
                return Err(Error::DuplicateLabel {
                    label: entry.label.clone(),
                });
            }
        }

        if !self.variants.iter().any(|v| v == DEFAULT_VARIANT) {
            return Err(Error::MissingDefaultVariant {
                expected: DEFAULT_VARIANT.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_is_valid() {
        let config = CatalogConfig::bundled().expect("bundled catalog should parse");
        assert!(config.entries.iter().any(|e| e.label == "Logo Design"));
        assert!(config.entries.iter().any(|e| e.label == "Poster"));
        assert_eq!(config.variants.first().map(String::as_str), Some("Standard"));
    }

    #[test]
    fn missing_variants_fall_back_to_defaults() {
        let config = CatalogConfig::from_json(r#"{"entries":[{"label":"Poster"}]}"#).unwrap();
        assert_eq!(config.variants, vec!["Standard", "Premium"]);
        assert_eq!(config.entries[0].category, None);
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = CatalogConfig::from_json(r#"{"entries":[]}"#).unwrap_err();
        assert!(matches!(err, Error::EmptyCatalog));
    }

    #[test]
    fn rejects_blank_and_duplicate_labels() {
        let err = CatalogConfig::from_json(r#"{"entries":[{"label":"A"},{"label":"  "}]}"#)
            .unwrap_err();
        assert!(matches!(err, Error::BlankLabel { index: 1 }));

        let err = CatalogConfig::from_json(r#"{"entries":[{"label":"A"},{"label":"A"}]}"#)
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateLabel { ref label } if label == "A"));
    }

    #[test]
    fn rejects_variants_without_default() {
        let err = CatalogConfig::from_json(
            r#"{"entries":[{"label":"A"}],"variants":["Premium","Deluxe"]}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "variant options must include 'Standard'");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = CatalogConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn element_id_is_slugified_label() {
        let entry = CatalogEntry {
            label: "Logo Design".to_string(),
            category: None,
            summary: None,
            accent: None,
        };
        assert_eq!(entry.element_id(), "portfolio-logo-design");
    }
}
