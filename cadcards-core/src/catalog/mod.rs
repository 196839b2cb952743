//! Cadcards Catalog - library entries and the query engine
//!
//! The catalog holds the cards shown for one category at a time and turns
//! them into a filtered, ordered view.
//!
//! # Overview
//!
//! Three orthogonal selectors narrow the view:
//! - a free-text search over title and description
//! - a sub-category pill from the toolbar
//! - a sidebar mode (`ALL`, `NEW`, `FAVORITES`, `FREQUENT`)
//!
//! Pills and sidebar modes are mutually exclusive; [`FilterState`] keeps
//! them that way. `FREQUENT` also locks the sort to usage descending.
//!
//! # Architecture
//!
//! ```text
//! CatalogSource::fetch_entries(category)
//!            │
//!            ▼
//!     Vec<CatalogEntry>  ← overlay_favorites(FavoriteSet)
//!            │
//!            ▼
//!     run_query(entries, FilterState)
//!            │
//!            ▼
//!     QueryOutcome { entries, matched, total }
//! ```

mod compare;
mod entry;
mod filter;
mod query;
mod theme;

pub use compare::{compare_natural, compare_titles};
pub use entry::{CatalogEntry, Category, ALL_SUB_CATEGORIES, DEFAULT_SUB_CATEGORY};
pub use filter::{
    FilterState, SidebarMode, SortField, SortMode, SubCategoryFilter, SubCategoryName,
    FAVORITES_PILL,
};
pub use query::{compare_entries, entry_matches, overlay_favorites, run_query, QueryOutcome};
pub use theme::{CategoryTheme, ThemeIcon};
