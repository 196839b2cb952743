//! In-memory library with simulated latency
//!
//! Serves [`SEED_RECORDS`](super::SEED_RECORDS) shaped into entries. Short
//! categories are padded with numbered copies so every category fills a
//! page. Card statistics are derived from a SHA-256 of the entry id, so the
//! same id always reports the same usage, age and "new" badge.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use super::seed::{records_for, SeedRecord};
use super::{CatalogSource, DirectorySource};
use crate::catalog::{CatalogEntry, Category, DEFAULT_SUB_CATEGORY};
use crate::config::{LatencyRange, LibraryConfig};
use crate::directory::{seed_employees, seed_projects, Employee, Project};
use crate::error::Result;

/// 2024-06-01T00:00:00Z
const NEWEST_EDIT_MS: i64 = 1_717_200_000_000;
const EDIT_WINDOW_MS: u64 = 365 * 24 * 60 * 60 * 1000;

/// Roughly three in ten cards carry the "new" badge
const NEW_THRESHOLD: u8 = 178;

pub struct MockCatalogSource {
    latency: LatencyRange,
    pad_to: usize,
    requests: AtomicU64,
}

impl MockCatalogSource {
    pub fn new(latency: LatencyRange, pad_to: usize) -> Self {
        Self {
            latency,
            pad_to,
            requests: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &LibraryConfig) -> Self {
        Self::new(config.latency_ms, config.pad_to)
    }

    /// No simulated latency
    pub fn instant(pad_to: usize) -> Self {
        Self::new(LatencyRange::NONE, pad_to)
    }

    async fn simulate_latency(&self, label: &str) {
        let n = self.requests.fetch_add(1, Ordering::Relaxed);
        let seed = u64_from(&digest(&format!("{label}#{n}")), 0);
        let delay = self.latency.pick(seed);
        if !delay.is_zero() {
            debug!("Simulating {}ms latency for {label}", delay.as_millis());
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for MockCatalogSource {
    fn default() -> Self {
        Self::from_config(&LibraryConfig::default())
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn fetch_entries(&self, category: Category) -> Result<Vec<CatalogEntry>> {
        self.simulate_latency(category.as_str()).await;
        let entries = shape_category(category, self.pad_to);
        debug!("Mock source returned {} entries for {category}", entries.len());
        Ok(entries)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[async_trait]
impl DirectorySource for MockCatalogSource {
    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        self.simulate_latency("projects").await;
        Ok(seed_projects())
    }

    async fn fetch_employees(&self) -> Result<Vec<Employee>> {
        self.simulate_latency("employees").await;
        Ok(seed_employees())
    }
}

/// Entries for `category`, padded with copies up to `pad_to`
pub fn shape_category(category: Category, pad_to: usize) -> Vec<CatalogEntry> {
    let records = records_for(category);
    let mut entries: Vec<CatalogEntry> = records
        .iter()
        .map(|r| shape_record(r, r.id.to_string(), r.title.to_string()))
        .collect();

    if !records.is_empty() && records.len() < pad_to {
        for i in 0..pad_to - records.len() {
            let base = records[i % records.len()];
            entries.push(shape_record(
                base,
                format!("{}_copy_{i}", base.id),
                format!("{} {}", base.title, i + 2),
            ));
        }
    }

    entries
}

fn shape_record(record: &SeedRecord, id: String, title: String) -> CatalogEntry {
    let hash = digest(&id);
    let age = u64_from(&hash, 3) % EDIT_WINDOW_MS;

    CatalogEntry {
        title,
        description: record.description.to_string(),
        category: record.category,
        sub_category: record
            .sub_category
            .unwrap_or(DEFAULT_SUB_CATEGORY)
            .to_string(),
        is_new: hash[0] > NEW_THRESHOLD,
        is_favorite: false,
        usage_score: hash[1] % 100,
        complexity: hash[2] % 10,
        last_modified: Some(NEWEST_EDIT_MS - age as i64),
        filename: Some(record.filename.to_string()),
        full_path: Some(record.path.to_string()),
        id,
    }
}

fn digest(input: &str) -> [u8; 32] {
    Sha256::digest(input.as_bytes()).into()
}

fn u64_from(hash: &[u8; 32], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash[offset..offset + 8]);
    u64::from_be_bytes(bytes)
}
