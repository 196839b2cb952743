//! Catalog query engine
//!
//! A pure, synchronous function of `(entries, FilterState)`. It never fails:
//! an empty slice or a contradictory filter simply yields fewer matches.

use serde::Serialize;
use std::cmp::Ordering;

use super::compare::{compare_natural, compare_titles};
use super::entry::CatalogEntry;
use super::filter::{FilterState, SidebarMode, SortMode};
use crate::favorites::FavoriteSet;

/// Filtered, ordered view of the catalog
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome<'a> {
    pub entries: Vec<&'a CatalogEntry>,
    /// Entries passing the filter
    pub matched: usize,
    /// Entries before filtering
    pub total: usize,
}

impl<'a> QueryOutcome<'a> {
    /// Share of the catalog currently visible, 0-100
    pub fn visible_percent(&self) -> u8 {
        let ratio = self.matched as f64 / self.total.max(1) as f64;
        (ratio * 100.0).round() as u8
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether `entry` passes every clause of `filter`
///
/// `needle_lower` is the lowercased search term, computed once per query.
pub fn entry_matches(entry: &CatalogEntry, filter: &FilterState, needle_lower: &str) -> bool {
    let matches_search = entry.matches_search(needle_lower);
    let matches_sub_category = filter.sub_category().admits(&entry.sub_category);
    let matches_sidebar = match filter.sidebar_mode() {
        SidebarMode::New => entry.is_new,
        SidebarMode::Favorites => entry.is_favorite,
        SidebarMode::Frequent | SidebarMode::All => true,
    };

    matches_search && matches_sub_category && matches_sidebar
}

/// Order two entries under `sort`
pub fn compare_entries(a: &CatalogEntry, b: &CatalogEntry, sort: SortMode) -> Ordering {
    match sort {
        SortMode::NameAsc => compare_titles(&a.title, &b.title),
        SortMode::NameDesc => compare_titles(&b.title, &a.title),
        SortMode::IdAsc => compare_natural(&a.id, &b.id),
        SortMode::IdDesc => compare_natural(&b.id, &a.id),
        SortMode::UsageAsc => a.usage_score.cmp(&b.usage_score),
        SortMode::UsageDesc => b.usage_score.cmp(&a.usage_score),
        SortMode::DateAsc => a.last_modified_or_zero().cmp(&b.last_modified_or_zero()),
        SortMode::DateDesc => b.last_modified_or_zero().cmp(&a.last_modified_or_zero()),
    }
}

/// Filter then sort `entries` according to `filter`
pub fn run_query<'a>(entries: &'a [CatalogEntry], filter: &FilterState) -> QueryOutcome<'a> {
    let needle = filter.search_term().to_lowercase();

    let mut visible: Vec<&CatalogEntry> = entries
        .iter()
        .filter(|entry| entry_matches(entry, filter, &needle))
        .collect();

    let sort = filter.effective_sort();
    visible.sort_by(|a, b| compare_entries(a, b, sort));

    QueryOutcome {
        matched: visible.len(),
        total: entries.len(),
        entries: visible,
    }
}

/// Rewrite `is_favorite` on every entry from the current favorites set
pub fn overlay_favorites(entries: &mut [CatalogEntry], favorites: &FavoriteSet) {
    for entry in entries.iter_mut() {
        entry.is_favorite = favorites.contains(&entry.id);
    }
}
