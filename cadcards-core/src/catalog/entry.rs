//! Catalog entry model
//!
//! A [`CatalogEntry`] is one library item shown as a card. Entries are
//! immutable per fetch and replaced wholesale when the active category
//! changes; only `is_favorite` is rewritten afterwards, by the favorites
//! overlay.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CadcardsError;

/// Reserved wildcard sub-category value. Never a real sub-category.
pub const ALL_SUB_CATEGORIES: &str = "ALL";

/// Sub-category assigned when a source record carries none.
pub const DEFAULT_SUB_CATEGORY: &str = "GENERAL";

/// Top-level library category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[default]
    Layers,
    Macros,
    Symbols,
    Blocks,
    Details,
    Specifications,
}

impl Category {
    /// All categories in tab order
    pub const ALL: [Category; 6] = [
        Category::Details,
        Category::Blocks,
        Category::Symbols,
        Category::Layers,
        Category::Specifications,
        Category::Macros,
    ];

    /// Wire name, e.g. `"LAYERS"`
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Layers => "LAYERS",
            Category::Macros => "MACROS",
            Category::Symbols => "SYMBOLS",
            Category::Blocks => "BLOCKS",
            Category::Details => "DETAILS",
            Category::Specifications => "SPECIFICATIONS",
        }
    }

    /// Real sub-categories for this category, without the `ALL` wildcard
    pub fn sub_categories(&self) -> &'static [&'static str] {
        match self {
            Category::Layers => &["GENERAL", "EXISTING", "PROPOSED", "DETAIL"],
            Category::Macros => &["GENERAL", "DYNAMIC", "TOOLS"],
            Category::Symbols => &["GENERAL", "ANNOTATION", "ARROWS", "STAMPS", "LEGENDS"],
            Category::Blocks => &["GENERAL", "LANDSCAPE", "TRANSPORT", "UTILITIES", "STRUCTURES"],
            Category::Details => &["GENERAL", "STORM", "SEWER", "WATER", "ROADWAY"],
            Category::Specifications => &["GENERAL", "SITEWORK", "CONCRETE", "UTILITIES"],
        }
    }

    /// Resolve a user-supplied sub-category name against this category's vocabulary
    ///
    /// Matching is case-insensitive and returns the canonical spelling.
    /// The `ALL` wildcard is not a sub-category and is rejected here.
    pub fn resolve_sub_category(&self, name: &str) -> Result<&'static str, CadcardsError> {
        self.sub_categories()
            .iter()
            .find(|s| s.eq_ignore_ascii_case(name.trim()))
            .copied()
            .ok_or_else(|| CadcardsError::UnknownSubCategory {
                category: *self,
                sub_category: name.to_string(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CadcardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LAYERS" => Ok(Category::Layers),
            "MACROS" => Ok(Category::Macros),
            "SYMBOLS" => Ok(Category::Symbols),
            "BLOCKS" => Ok(Category::Blocks),
            "DETAILS" => Ok(Category::Details),
            "SPECIFICATIONS" | "SPECS" => Ok(Category::Specifications),
            _ => Err(CadcardsError::UnknownCategory(s.to_string())),
        }
    }
}

/// One library item (layer template, block, symbol, detail, spec or macro)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Opaque identifier, unique within a category's result set
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    pub category: Category,

    /// Drawn from `category.sub_categories()`
    pub sub_category: String,

    #[serde(default)]
    pub is_new: bool,

    /// Overlaid from the favorites store at read time, never part of the source record
    #[serde(default)]
    pub is_favorite: bool,

    /// Popularity, 0-100
    #[serde(default)]
    pub usage_score: u8,

    /// Drawing complexity, 0-10
    #[serde(default)]
    pub complexity: u8,

    /// Epoch milliseconds; absent entries sort as oldest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
}

impl CatalogEntry {
    /// Case-insensitive substring match on title or description
    ///
    /// `needle_lower` must already be lowercased; an empty needle matches.
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }

    /// Last-modified timestamp with the missing value treated as 0
    pub fn last_modified_or_zero(&self) -> i64 {
        self.last_modified.unwrap_or(0)
    }

    /// Last-modified as a UTC datetime, if present and in range
    pub fn last_modified_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.last_modified
            .and_then(chrono::DateTime::<chrono::Utc>::from_timestamp_millis)
    }
}
