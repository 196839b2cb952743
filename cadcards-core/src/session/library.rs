use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::history::RecentHistory;
use super::loading::loading_message;
use crate::catalog::{
    overlay_favorites, run_query, CatalogEntry, Category, FilterState, QueryOutcome, SortMode,
};
use crate::error::Result;
use crate::favorites::{FavoriteSet, FavoritesStore};
use crate::source::CatalogSource;

/// Identifies one in-flight fetch
///
/// Only the ticket from the most recent [`LibrarySession::begin_category_change`]
/// is accepted by [`LibrarySession::complete_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub category: Category,
    pub token: u64,
}

/// What happened to a fetch result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Entries replaced; holds the new entry count
    Applied(usize),
    /// A newer request superseded this one; result discarded
    Stale,
    /// The source failed; entries are now empty
    Failed,
}

/// Owns everything one user session reads and mutates
pub struct LibrarySession {
    category: Category,
    filter: FilterState,
    entries: Vec<CatalogEntry>,
    favorites: FavoriteSet,
    store: Arc<dyn FavoritesStore>,
    recent: RecentHistory,
    loading_since: Option<Instant>,
    latest_token: u64,
}

impl LibrarySession {
    /// Start a session, reading favorites once from `store`
    pub fn new(store: Arc<dyn FavoritesStore>) -> Self {
        Self::with_sort(store, SortMode::default())
    }

    pub fn with_sort(store: Arc<dyn FavoritesStore>, sort: SortMode) -> Self {
        let favorites = FavoriteSet::from_ids(store.load_favorite_ids());
        debug!("Session starting with {} favorites", favorites.len());
        Self {
            category: Category::default(),
            filter: FilterState::with_sort(sort),
            entries: Vec::new(),
            favorites,
            store,
            recent: RecentHistory::new(),
            loading_since: None,
            latest_token: 0,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Filter transitions; see [`FilterState`] for the exclusivity rules
    pub fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn recent(&self) -> &RecentHistory {
        &self.recent
    }

    pub fn is_loading(&self) -> bool {
        self.loading_since.is_some()
    }

    /// Cycling status label while a fetch is in flight
    pub fn loading_message(&self) -> Option<&'static str> {
        self.loading_since
            .map(|since| loading_message(since.elapsed()))
    }

    /// Switch to `category` and issue a ticket for its fetch
    ///
    /// Clears the current entries and resets search, sub-category and
    /// sidebar mode. The sort mode carries over.
    pub fn begin_category_change(&mut self, category: Category) -> FetchTicket {
        self.latest_token += 1;
        self.category = category;
        self.filter.reset_for_category();
        self.entries.clear();
        self.loading_since = Some(Instant::now());

        debug!("Fetch #{} requested for {category}", self.latest_token);
        FetchTicket {
            category,
            token: self.latest_token,
        }
    }

    /// Apply a fetch result if `ticket` is still the active request
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<CatalogEntry>>,
    ) -> FetchOutcome {
        if ticket.token != self.latest_token || ticket.category != self.category {
            warn!(
                "Discarding stale {} response (#{}, active #{} {})",
                ticket.category, ticket.token, self.latest_token, self.category
            );
            return FetchOutcome::Stale;
        }

        self.loading_since = None;
        match result {
            Ok(mut entries) => {
                overlay_favorites(&mut entries, &self.favorites);
                self.entries = entries;
                info!("Loaded {} {} entries", self.entries.len(), self.category);
                FetchOutcome::Applied(self.entries.len())
            }
            Err(e) => {
                warn!("Failed to fetch {} entries: {e}", self.category);
                self.entries.clear();
                FetchOutcome::Failed
            }
        }
    }

    /// Switch to `category` and fetch it from `source`
    pub async fn load(&mut self, source: &dyn CatalogSource, category: Category) -> FetchOutcome {
        let ticket = self.begin_category_change(category);
        debug!("Fetching {category} from {} source", source.name());
        let result = source.fetch_entries(category).await;
        self.complete_fetch(ticket, result)
    }

    /// Current filtered, ordered view
    pub fn view(&self) -> QueryOutcome<'_> {
        run_query(&self.entries, &self.filter)
    }

    /// Flip `id` in the favorites set, re-overlay and persist
    ///
    /// The in-memory state changes even if persisting fails; the error is
    /// returned so the caller can report it.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let starred = self.favorites.toggle(id);
        overlay_favorites(&mut self.entries, &self.favorites);
        debug!("Favorite {id} -> {starred}");

        self.store.save_favorite_ids(self.favorites.ids())?;
        Ok(starred)
    }

    /// Note that the user opened `id`
    pub fn record_view(&mut self, id: &str) {
        self.recent.record(id);
    }
}
