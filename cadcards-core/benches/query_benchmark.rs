//! Performance benchmarks for the catalog query engine
//! Target: <1ms for a query over a few thousand entries

use cadcards_core::catalog::{
    run_query, CatalogEntry, Category, FilterState, SidebarMode, SortMode,
};
use cadcards_core::favorites::{FavoriteSet, MemoryFavoritesStore};
use cadcards_core::session::LibrarySession;
use cadcards_core::source::{shape_category, MockCatalogSource};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

/// Every category padded well past its seed size
fn large_catalog() -> Vec<CatalogEntry> {
    Category::ALL
        .into_iter()
        .flat_map(|category| shape_category(category, 500))
        .collect()
}

fn benchmark_sorts(c: &mut Criterion) {
    let entries = large_catalog();

    for sort in [SortMode::NameAsc, SortMode::IdAsc, SortMode::UsageDesc, SortMode::DateDesc] {
        let filter = FilterState::with_sort(sort);
        c.bench_function(&format!("query_sort_{}", sort.as_str().to_lowercase()), |b| {
            b.iter(|| run_query(black_box(&entries), black_box(&filter)).matched)
        });
    }
}

fn benchmark_search(c: &mut Criterion) {
    let entries = large_catalog();

    let mut filter = FilterState::new();
    filter.set_search_term("tree");
    c.bench_function("query_search_tree", |b| {
        b.iter(|| run_query(black_box(&entries), black_box(&filter)).matched)
    });

    let mut filter = FilterState::new();
    filter.select_sidebar_mode(SidebarMode::Frequent);
    c.bench_function("query_frequent", |b| {
        b.iter(|| run_query(black_box(&entries), black_box(&filter)).matched)
    });
}

fn benchmark_favorite_toggle(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let source = MockCatalogSource::instant(500);

    c.bench_function("toggle_favorite_and_requery", |b| {
        let mut session = LibrarySession::new(Arc::new(MemoryFavoritesStore::new()));
        runtime.block_on(session.load(&source, Category::Blocks));
        session
            .filter_mut()
            .select_sidebar_mode(SidebarMode::Favorites);

        b.iter(|| {
            session.toggle_favorite(black_box("1063")).unwrap();
            session.view().matched
        });
    });

    c.bench_function("favorite_set_from_ids", |b| {
        let ids: Vec<String> = (0..1000).map(|i| i.to_string()).collect();
        b.iter(|| FavoriteSet::from_ids(black_box(ids.clone())).len())
    });
}

criterion_group!(
    benches,
    benchmark_sorts,
    benchmark_search,
    benchmark_favorite_toggle
);
criterion_main!(benches);
