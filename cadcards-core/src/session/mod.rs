//! Library session
//!
//! [`LibrarySession`] owns the active category, the filter state, the
//! fetched entries and the favorites set. Fetching is split in two so that
//! a slow response for a category the user already left is dropped:
//!
//! ```text
//! begin_category_change(cat) ──► FetchTicket { cat, token }
//!                                      │
//!            CatalogSource::fetch_entries(cat).await
//!                                      │
//! complete_fetch(ticket, result) ──► Applied | Stale | Failed
//! ```
//!
//! Only the ticket carrying the latest token and the active category is
//! applied. Failures leave the session with an empty entry list.

mod history;
mod library;
mod loading;

pub use history::{RecentHistory, RECENT_HISTORY_LIMIT};
pub use library::{FetchOutcome, FetchTicket, LibrarySession};
pub use loading::{loading_message, CONNECTING_MESSAGE, LOADING_MESSAGES, LOADING_TICK};
