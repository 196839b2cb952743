//! Filter state and its transitions
//!
//! Two UI surfaces narrow the catalog: the sidebar mode buttons
//! (All/New/Favorites/Frequent) and the toolbar sub-category pills. At most
//! one of them is non-default at a time. The transitions on [`FilterState`]
//! are the only place that rule is enforced.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::entry::{Category, ALL_SUB_CATEGORIES};
use crate::error::{CadcardsError, Result};

/// Toolbar pill label that routes to [`SidebarMode::Favorites`]
pub const FAVORITES_PILL: &str = "FAVORITES";

/// A sub-category name taken from a category's vocabulary
///
/// Only [`SubCategoryFilter::for_category`] builds one, so `FAVORITES` and
/// misspelled names never reach a [`FilterState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SubCategoryName(&'static str);

impl SubCategoryName {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Sub-category selector driven by the toolbar pills
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "camelCase")]
pub enum SubCategoryFilter {
    /// The `ALL` pill: every sub-category passes
    #[default]
    All,
    /// A single real sub-category
    Specific(SubCategoryName),
    /// No pill selected; the sidebar mode owns filtering
    DeferToSidebar,
}

impl SubCategoryFilter {
    /// Selector for `name` within `category`
    ///
    /// `ALL` maps to [`SubCategoryFilter::All`]. Anything else must resolve
    /// against the category's vocabulary (case-insensitive).
    pub fn for_category(category: Category, name: &str) -> Result<Self> {
        if name.trim().eq_ignore_ascii_case(ALL_SUB_CATEGORIES) {
            return Ok(SubCategoryFilter::All);
        }
        let resolved = category.resolve_sub_category(name)?;
        Ok(SubCategoryFilter::Specific(SubCategoryName(resolved)))
    }

    /// Whether an entry with `sub_category` passes this selector
    pub fn admits(&self, sub_category: &str) -> bool {
        match self {
            SubCategoryFilter::All | SubCategoryFilter::DeferToSidebar => true,
            SubCategoryFilter::Specific(name) => name.as_str() == sub_category,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, SubCategoryFilter::All)
    }
}

impl fmt::Display for SubCategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubCategoryFilter::All => f.write_str(ALL_SUB_CATEGORIES),
            SubCategoryFilter::Specific(name) => f.write_str(name.as_str()),
            SubCategoryFilter::DeferToSidebar => f.write_str("-"),
        }
    }
}

/// Coarse filter selected from the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SidebarMode {
    #[default]
    All,
    New,
    Favorites,
    /// Does not filter; forces usage-descending order
    Frequent,
}

impl SidebarMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarMode::All => "ALL",
            SidebarMode::New => "NEW",
            SidebarMode::Favorites => "FAVORITES",
            SidebarMode::Frequent => "FREQUENT",
        }
    }

    /// Sidebar button label
    pub fn label(&self) -> &'static str {
        match self {
            SidebarMode::All => "ALL",
            SidebarMode::New => "WHATS NEW",
            SidebarMode::Favorites => "FAVORITES",
            SidebarMode::Frequent => "FREQUENTLY USE",
        }
    }
}

impl fmt::Display for SidebarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SidebarMode {
    type Err = CadcardsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALL" => Ok(SidebarMode::All),
            "NEW" => Ok(SidebarMode::New),
            "FAVORITES" | "FAVOURITES" => Ok(SidebarMode::Favorites),
            "FREQUENT" => Ok(SidebarMode::Frequent),
            _ => Err(CadcardsError::UnknownSidebarMode(s.to_string())),
        }
    }
}

/// Sort order for the filtered view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortMode {
    #[default]
    NameAsc,
    NameDesc,
    UsageAsc,
    UsageDesc,
    IdAsc,
    IdDesc,
    DateAsc,
    DateDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 8] = [
        SortMode::NameAsc,
        SortMode::NameDesc,
        SortMode::IdAsc,
        SortMode::IdDesc,
        SortMode::UsageDesc,
        SortMode::UsageAsc,
        SortMode::DateDesc,
        SortMode::DateAsc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::NameAsc => "NAME_ASC",
            SortMode::NameDesc => "NAME_DESC",
            SortMode::UsageAsc => "USAGE_ASC",
            SortMode::UsageDesc => "USAGE_DESC",
            SortMode::IdAsc => "ID_ASC",
            SortMode::IdDesc => "ID_DESC",
            SortMode::DateAsc => "DATE_ASC",
            SortMode::DateDesc => "DATE_DESC",
        }
    }

    /// Sort menu label
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::NameAsc => "Name (A-Z)",
            SortMode::NameDesc => "Name (Z-A)",
            SortMode::IdAsc => "ID (Ascending)",
            SortMode::IdDesc => "ID (Descending)",
            SortMode::UsageDesc => "Usage (High)",
            SortMode::UsageAsc => "Usage (Low)",
            SortMode::DateDesc => "Newest First",
            SortMode::DateAsc => "Oldest First",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = CadcardsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| CadcardsError::UnknownSortMode(s.to_string()))
    }
}

/// List-view column whose header toggles the sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Usage,
}

impl FromStr for SortField {
    type Err = CadcardsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "name" | "title" => Ok(SortField::Name),
            "usage" => Ok(SortField::Usage),
            _ => Err(CadcardsError::UnknownValue {
                kind: "sort column",
                value: s.to_string(),
            }),
        }
    }
}

/// Session-scoped filter inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    search_term: String,
    sub_category: SubCategoryFilter,
    sidebar_mode: SidebarMode,
    sort_mode: SortMode,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from defaults with a given sort order
    pub fn with_sort(sort_mode: SortMode) -> Self {
        Self {
            sort_mode,
            ..Self::default()
        }
    }

    /// Build a state from raw parts without enforcing exclusivity
    ///
    /// When both `sub_category` and `sidebar_mode` are non-default the query
    /// applies both constraints.
    pub fn from_parts(
        search_term: impl Into<String>,
        sub_category: SubCategoryFilter,
        sidebar_mode: SidebarMode,
        sort_mode: SortMode,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            sub_category,
            sidebar_mode,
            sort_mode,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sub_category(&self) -> &SubCategoryFilter {
        &self.sub_category
    }

    pub fn sidebar_mode(&self) -> SidebarMode {
        self.sidebar_mode
    }

    /// The sort mode the user selected (may be overridden, see [`Self::effective_sort`])
    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// The sort order actually applied
    pub fn effective_sort(&self) -> SortMode {
        if self.sidebar_mode == SidebarMode::Frequent {
            SortMode::UsageDesc
        } else {
            self.sort_mode
        }
    }

    /// The sort control is disabled while the sidebar is in FREQUENT mode
    pub fn is_sort_locked(&self) -> bool {
        self.sidebar_mode == SidebarMode::Frequent
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Select a toolbar sub-category pill; resets the sidebar to ALL
    ///
    /// `name` is resolved against `category`'s vocabulary first. An unknown
    /// name, `FAVORITES` included, is an error and leaves the state as it was.
    pub fn select_sub_category(&mut self, category: Category, name: &str) -> Result<()> {
        let selector = SubCategoryFilter::for_category(category, name)?;
        debug!("Selecting sub-category {}", selector);
        self.sub_category = selector;
        self.sidebar_mode = SidebarMode::All;
        Ok(())
    }

    /// Select a sidebar mode
    ///
    /// Any mode other than ALL clears the toolbar selection; ALL restores the
    /// toolbar's ALL pill.
    pub fn select_sidebar_mode(&mut self, mode: SidebarMode) {
        debug!("Selecting sidebar mode {}", mode);
        self.sidebar_mode = mode;
        self.sub_category = if mode == SidebarMode::All {
            SubCategoryFilter::All
        } else {
            SubCategoryFilter::DeferToSidebar
        };
    }

    /// Handle a click on a toolbar pill by its label
    ///
    /// `ALL` selects every sub-category, `FAVORITES` routes to the sidebar's
    /// favorites mode, anything else must be a sub-category of `category`.
    pub fn select_toolbar_pill(&mut self, category: Category, label: &str) -> Result<()> {
        if label.trim().eq_ignore_ascii_case(FAVORITES_PILL) {
            self.select_sidebar_mode(SidebarMode::Favorites);
            return Ok(());
        }
        self.select_sub_category(category, label)
    }

    /// Change the sort order
    ///
    /// Returns `false` and leaves the state untouched while the sort control
    /// is locked by FREQUENT mode.
    pub fn set_sort_mode(&mut self, mode: SortMode) -> bool {
        if self.is_sort_locked() {
            debug!("Ignoring sort change to {} while FREQUENT is active", mode);
            return false;
        }
        self.sort_mode = mode;
        true
    }

    /// Flip the direction of a column sort, or switch to that column
    pub fn toggle_sort(&mut self, field: SortField) -> bool {
        let next = match field {
            SortField::Id if self.sort_mode == SortMode::IdAsc => SortMode::IdDesc,
            SortField::Id => SortMode::IdAsc,
            SortField::Name if self.sort_mode == SortMode::NameAsc => SortMode::NameDesc,
            SortField::Name => SortMode::NameAsc,
            SortField::Usage if self.sort_mode == SortMode::UsageDesc => SortMode::UsageAsc,
            SortField::Usage => SortMode::UsageDesc,
        };
        self.set_sort_mode(next)
    }

    /// Reset filter context after the top-level category changes; sort persists
    pub fn reset_for_category(&mut self) {
        self.search_term.clear();
        self.sub_category = SubCategoryFilter::All;
        self.sidebar_mode = SidebarMode::All;
    }
}
