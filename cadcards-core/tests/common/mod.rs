//! Test helper functions for integration tests
//!
//! Shared across test files using the tests/common/ pattern.

#![allow(dead_code)]

use cadcards_core::catalog::{CatalogEntry, Category};
use std::path::{Path, PathBuf};
use std::sync::Once;

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(false)
                    .with_thread_names(false),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn fixtures_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Minimal entry in `category`
pub fn entry(id: &str, title: &str, category: Category, sub_category: &str) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        category,
        sub_category: sub_category.to_string(),
        ..Default::default()
    }
}

/// The two-tree landscape catalog
pub fn oak_and_pine() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            usage_score: 10,
            ..entry("1", "Oak Tree", Category::Blocks, "LANDSCAPE")
        },
        CatalogEntry {
            usage_score: 90,
            is_favorite: true,
            ..entry("2", "Pine Tree", Category::Blocks, "LANDSCAPE")
        },
    ]
}
