//! Catalog commands: browse, favorite, favorites

use anyhow::{bail, Result};
use tabled::Tabled;
use tracing::debug;

use cadcards_core::catalog::{CatalogEntry, Category, SidebarMode, SortField, SortMode};
use cadcards_core::config::LibraryConfig;
use cadcards_core::favorites::{FavoritesStore, FileFavoritesStore};
use cadcards_core::session::{FetchOutcome, LibrarySession, LOADING_TICK};
use cadcards_core::source::{CatalogSource, MockCatalogSource};

use crate::{open_session, print_table, truncate};

/// Filter flags for `cadcards browse`
#[derive(Debug, Default)]
pub struct BrowseQuery {
    pub search: Option<String>,
    pub sub: Option<String>,
    pub mode: Option<SidebarMode>,
    pub sort: Option<SortMode>,
    /// Column header clicks, applied in order
    pub columns: Vec<SortField>,
}

const SORT_LOCKED_NOTICE: &str = "Sort is locked to USAGE_DESC while FREQUENT is active";

impl BrowseQuery {
    /// Replay the flags as the user would click them
    fn apply(&self, session: &mut LibrarySession) -> Result<()> {
        let category = session.category();
        let filter = session.filter_mut();

        if let Some(sub) = &self.sub {
            filter.select_toolbar_pill(category, sub)?;
        }
        if let Some(mode) = self.mode {
            filter.select_sidebar_mode(mode);
        }
        if let Some(sort) = self.sort {
            if !filter.set_sort_mode(sort) {
                eprintln!("{SORT_LOCKED_NOTICE}");
            }
        }
        for column in &self.columns {
            if !filter.toggle_sort(*column) {
                eprintln!("{SORT_LOCKED_NOTICE}");
                break;
            }
        }
        if let Some(search) = &self.search {
            filter.set_search_term(search.trim());
        }
        Ok(())
    }
}

/// Table row for catalog entries
#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "")]
    star: &'static str,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Sub-Category")]
    sub_category: String,
    #[tabled(rename = "Usage")]
    usage: u8,
    #[tabled(rename = "Modified")]
    modified: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&CatalogEntry> for EntryRow {
    fn from(entry: &CatalogEntry) -> Self {
        let star = match (entry.is_favorite, entry.is_new) {
            (true, _) => "★",
            (false, true) => "NEW",
            (false, false) => "",
        };
        EntryRow {
            id: entry.id.clone(),
            star,
            title: entry.title.clone(),
            sub_category: entry.sub_category.clone(),
            usage: entry.usage_score,
            modified: entry
                .last_modified_at()
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            description: truncate(&entry.description, 48),
        }
    }
}

async fn load(config: &LibraryConfig, category: Category) -> Result<LibrarySession> {
    let mut session = open_session(config)?;
    let source = MockCatalogSource::from_config(config);

    let ticket = session.begin_category_change(category);
    debug!("Fetching {category} from {} source", source.name());
    let fetch = source.fetch_entries(category);
    tokio::pin!(fetch);

    // first tick fires immediately
    let mut ticker = tokio::time::interval(LOADING_TICK);
    let mut shown = None;
    let result = loop {
        tokio::select! {
            biased;
            _ = ticker.tick() => {
                let message = session.loading_message();
                if message != shown {
                    if let Some(message) = message {
                        eprintln!("{message}...");
                    }
                    shown = message;
                }
            }
            result = &mut fetch => break result,
        }
    };

    if session.complete_fetch(ticket, result) == FetchOutcome::Failed {
        eprintln!("Failed to reach the {category} library");
    }
    Ok(session)
}

pub async fn browse(
    config: &LibraryConfig,
    category: Category,
    query: BrowseQuery,
    json_output: bool,
) -> Result<()> {
    let mut session = load(config, category).await?;
    query.apply(&mut session)?;
    debug!("Browsing with filter {:?}", session.filter());

    let view = session.view();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let theme = category.theme();
    println!(
        "{} {}  {}/{} entries ({}%)  sort {}",
        theme.icon.glyph(),
        theme.label,
        view.matched,
        view.total,
        view.visible_percent(),
        session.filter().effective_sort().label()
    );

    if view.is_empty() {
        println!("\nNo entries match.");
        return Ok(());
    }

    let rows: Vec<EntryRow> = view.entries.iter().map(|e| EntryRow::from(*e)).collect();
    print_table(&rows);
    Ok(())
}

pub async fn favorite(config: &LibraryConfig, category: Category, id: &str) -> Result<()> {
    let mut session = load(config, category).await?;

    let Some(entry) = session.entries().iter().find(|e| e.id == id) else {
        bail!("No entry '{id}' in {category}");
    };
    let title = entry.title.clone();

    let starred = session.toggle_favorite(id)?;
    if starred {
        println!("★ {id} {title} added to favorites");
    } else {
        println!("  {id} {title} removed from favorites");
    }
    Ok(())
}

pub fn favorites(config: &LibraryConfig, json_output: bool) -> Result<()> {
    let store = FileFavoritesStore::new(config.resolved_favorites_path()?);
    let ids = store.load_favorite_ids();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&ids)?);
    } else if ids.is_empty() {
        println!("No favorites yet.");
    } else {
        for id in ids {
            println!("{id}");
        }
    }
    Ok(())
}
