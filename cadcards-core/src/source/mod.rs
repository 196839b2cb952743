//! Catalog data sources
//!
//! A source hands back the full entry list for one category. It may be slow;
//! callers show a loading state and guard against stale responses (see
//! [`crate::session`]). Favorite status is never part of a source record.

mod mock;
mod seed;

pub use mock::{shape_category, MockCatalogSource};
pub use seed::{records_for, SeedRecord, SEED_RECORDS};

use async_trait::async_trait;
use std::collections::HashMap;

use crate::catalog::{CatalogEntry, Category};
use crate::directory::{Employee, Project};
use crate::error::Result;

/// Where catalog entries come from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Every entry in `category`; no pagination
    async fn fetch_entries(&self, category: Category) -> Result<Vec<CatalogEntry>>;

    /// Source identifier for logging
    fn name(&self) -> &'static str;
}

/// Where the job board and staff roster come from
#[async_trait]
pub trait DirectorySource: Send + Sync {
    async fn fetch_projects(&self) -> Result<Vec<Project>>;

    async fn fetch_employees(&self) -> Result<Vec<Employee>>;
}

/// Fixed, pre-shaped entries with no latency
///
/// Useful for embedding a known catalog, and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    entries: HashMap<Category, Vec<CatalogEntry>>,
}

impl StaticCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group `entries` by their own category
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut source = Self::new();
        for entry in entries {
            source.entries.entry(entry.category).or_default().push(entry);
        }
        source
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_entries(&self, category: Category) -> Result<Vec<CatalogEntry>> {
        Ok(self.entries.get(&category).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
