//! Integration tests for the catalog query engine
//!
//! Exercises `run_query` through the public API: search, exclusivity of
//! the sub-category pills and sidebar modes, sort overrides and counts.

mod common;

use cadcards_core::catalog::{
    compare_entries, run_query, CatalogEntry, Category, FilterState, SidebarMode, SortMode,
    SubCategoryFilter,
};
use cadcards_core::source::shape_category;
use common::{entry, init_test_logging, oak_and_pine};
use pretty_assertions::assert_eq;

fn all_filter_states() -> Vec<FilterState> {
    let mut states = Vec::new();
    for sort in SortMode::ALL {
        for sidebar in [
            SidebarMode::All,
            SidebarMode::New,
            SidebarMode::Favorites,
            SidebarMode::Frequent,
        ] {
            for search in ["", "tree", "zzz"] {
                states.push(FilterState::from_parts(
                    search,
                    SubCategoryFilter::All,
                    sidebar,
                    sort,
                ));
            }
        }
    }
    states
}

#[test]
fn test_oak_and_pine_scenario() {
    init_test_logging();
    let entries = oak_and_pine();

    let mut filter = FilterState::with_sort(SortMode::UsageDesc);
    filter.set_search_term("tree");
    let outcome = run_query(&entries, &filter);
    assert_eq!(outcome.ids(), vec!["2", "1"]);
    assert_eq!((outcome.matched, outcome.total), (2, 2));

    filter.select_sidebar_mode(SidebarMode::Favorites);
    let outcome = run_query(&entries, &filter);
    assert_eq!(outcome.ids(), vec!["2"]);
    assert_eq!((outcome.matched, outcome.total), (1, 2));
    assert_eq!(outcome.visible_percent(), 50);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let entries = vec![entry("1063", "Fire Hydrant", Category::Blocks, "UTILITIES")];

    for term in ["hydrant", "HYDRANT", "Fire", "  "] {
        let mut filter = FilterState::new();
        filter.set_search_term(term.trim());
        assert_eq!(run_query(&entries, &filter).matched, 1, "term {term:?}");
    }

    let mut filter = FilterState::new();
    filter.set_search_term("Hydrnt");
    assert!(run_query(&entries, &filter).is_empty());
}

#[test]
fn test_search_reaches_description() {
    let mut target = entry("1199", "Yard Drain", Category::Details, "STORM");
    target.description = "SD - Yard Drain - Private".to_string();
    let entries = vec![target];

    let mut filter = FilterState::new();
    filter.set_search_term("private");
    assert_eq!(run_query(&entries, &filter).ids(), vec!["1199"]);
}

#[test]
fn test_sub_category_and_sidebar_are_exclusive() {
    let mut filter = FilterState::new();

    filter.select_sidebar_mode(SidebarMode::Favorites);
    assert_eq!(filter.sub_category(), &SubCategoryFilter::DeferToSidebar);

    filter
        .select_sub_category(Category::Blocks, "LANDSCAPE")
        .unwrap();
    assert_eq!(filter.sidebar_mode(), SidebarMode::All);

    filter.select_sidebar_mode(SidebarMode::New);
    assert_eq!(filter.sub_category(), &SubCategoryFilter::DeferToSidebar);

    filter.select_sidebar_mode(SidebarMode::All);
    assert_eq!(filter.sub_category(), &SubCategoryFilter::All);
}

#[test]
fn test_favorites_pill_routes_to_sidebar() {
    let entries = oak_and_pine();
    let mut filter = FilterState::new();

    filter
        .select_toolbar_pill(Category::Blocks, "FAVORITES")
        .unwrap();
    assert_eq!(filter.sidebar_mode(), SidebarMode::Favorites);
    assert_eq!(run_query(&entries, &filter).ids(), vec!["2"]);

    filter.select_toolbar_pill(Category::Blocks, "landscape").unwrap();
    assert_eq!(filter.sidebar_mode(), SidebarMode::All);
    assert_eq!(run_query(&entries, &filter).matched, 2);

    assert!(filter.select_toolbar_pill(Category::Blocks, "DYNAMIC").is_err());
}

#[test]
fn test_favorites_never_stored_as_sub_category() {
    let entries = oak_and_pine();
    let mut filter = FilterState::new();

    assert!(filter.select_sub_category(Category::Blocks, "FAVORITES").is_err());
    assert!(filter.select_sub_category(Category::Blocks, "landscape ").is_ok());
    assert_eq!(filter.sub_category().to_string(), "LANDSCAPE");
    assert_eq!(run_query(&entries, &filter).matched, 2);

    assert!(filter.select_sub_category(Category::Blocks, "DYNAMIC").is_err());
    assert_eq!(filter.sub_category().to_string(), "LANDSCAPE");
    assert_eq!(filter.sidebar_mode(), SidebarMode::All);
}

#[test]
fn test_frequent_overrides_every_sort() {
    let entries = shape_category(Category::Blocks, 8);

    for sort in SortMode::ALL {
        let filter = FilterState::from_parts(
            "",
            SubCategoryFilter::DeferToSidebar,
            SidebarMode::Frequent,
            sort,
        );
        let outcome = run_query(&entries, &filter);
        assert_eq!(outcome.matched, entries.len());

        let scores: Vec<u8> = outcome.entries.iter().map(|e| e.usage_score).collect();
        let mut expected = scores.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(scores, expected, "sort {sort}");
    }
}

#[test]
fn test_frequent_locks_sort_control() {
    let mut filter = FilterState::with_sort(SortMode::NameAsc);
    filter.select_sidebar_mode(SidebarMode::Frequent);

    assert!(!filter.set_sort_mode(SortMode::IdDesc));
    assert_eq!(filter.sort_mode(), SortMode::NameAsc);
    assert_eq!(filter.effective_sort(), SortMode::UsageDesc);

    filter.select_sidebar_mode(SidebarMode::All);
    assert!(filter.set_sort_mode(SortMode::IdDesc));
    assert_eq!(filter.effective_sort(), SortMode::IdDesc);
}

#[test]
fn test_numeric_id_ordering() {
    let entries: Vec<CatalogEntry> = ["9", "10", "2"]
        .into_iter()
        .map(|id| entry(id, "Item", Category::Symbols, "GENERAL"))
        .collect();

    let ascending = run_query(&entries, &FilterState::with_sort(SortMode::IdAsc));
    assert_eq!(ascending.ids(), vec!["2", "9", "10"]);

    let descending = run_query(&entries, &FilterState::with_sort(SortMode::IdDesc));
    assert_eq!(descending.ids(), vec!["10", "9", "2"]);
}

#[test]
fn test_mixed_ids_sort_naturally() {
    let entries: Vec<CatalogEntry> = ["spec-10", "spec-2", "1063", "42"]
        .into_iter()
        .map(|id| entry(id, "Item", Category::Specifications, "GENERAL"))
        .collect();

    let outcome = run_query(&entries, &FilterState::with_sort(SortMode::IdAsc));
    assert_eq!(outcome.ids(), vec!["42", "1063", "spec-2", "spec-10"]);
}

#[test]
fn test_sort_is_idempotent() {
    let entries = shape_category(Category::Details, 8);

    for sort in SortMode::ALL {
        let filter = FilterState::with_sort(sort);
        let once: Vec<CatalogEntry> = run_query(&entries, &filter)
            .entries
            .into_iter()
            .cloned()
            .collect();
        let twice = run_query(&once, &filter);

        for pair in twice.entries.windows(2) {
            assert!(
                compare_entries(pair[0], pair[1], sort).is_le(),
                "{sort}: {} before {}",
                pair[0].id,
                pair[1].id
            );
        }
        assert_eq!(twice.ids(), once.iter().map(|e| e.id.as_str()).collect::<Vec<_>>());
    }
}

#[test]
fn test_empty_input_is_safe_for_every_state() {
    let entries: Vec<CatalogEntry> = Vec::new();
    for filter in all_filter_states() {
        let outcome = run_query(&entries, &filter);
        assert!(outcome.is_empty());
        assert_eq!((outcome.matched, outcome.total), (0, 0));
        assert_eq!(outcome.visible_percent(), 0);
    }
}

#[test]
fn test_query_does_not_mutate_input() {
    let entries = oak_and_pine();
    let before = entries.clone();
    for filter in all_filter_states() {
        let _ = run_query(&entries, &filter);
    }
    assert_eq!(entries, before);
}
