//! Favorites: which entries the user has starred
//!
//! Favorite status is a side channel. Sources never report it; the session
//! overlays it onto fetched entries from the current [`FavoriteSet`] and
//! re-applies it in place whenever the set changes.

mod set;
mod store;

pub use set::FavoriteSet;
pub use store::{FavoritesStore, FileFavoritesStore, MemoryFavoritesStore, FAVORITES_KEY};
