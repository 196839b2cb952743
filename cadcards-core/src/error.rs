use thiserror::Error;

use crate::catalog::Category;

#[derive(Error, Debug)]
pub enum CadcardsError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown sub-category '{sub_category}' for {category}")]
    UnknownSubCategory {
        category: Category,
        sub_category: String,
    },

    #[error("Unknown sidebar mode: {0}")]
    UnknownSidebarMode(String),

    #[error("Unknown sort mode: {0}")]
    UnknownSortMode(String),

    #[error("Invalid layer name part: {0}")]
    LayerPart(String),

    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },

    #[error("Catalog source error: {0}")]
    Source(String),

    #[error("Favorites store error: {0}")]
    Favorites(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CadcardsError>;
