//! Integration tests for the file list query engine and search history.

mod helpers;

use proptest::prelude::*;

use cloudbox_core::config::browse::BrowseConfig;
use cloudbox_core::types::{FileSortKey, SortDirection};
use cloudbox_entity::file::{FileCategory, FileRecord};
use cloudbox_view::query::{CategoryFilter, ListQuery, SearchHistory};

fn names(files: &[&FileRecord]) -> Vec<String> {
    files.iter().map(|f| f.name.clone()).collect()
}

#[test]
fn test_name_and_size_scenarios() {
    let files = vec![FileRecord::new("1", "b.txt", 10), FileRecord::new("2", "a.txt", 20)];

    let by_name = ListQuery::new().sorted_by(FileSortKey::Name, SortDirection::Asc);
    assert_eq!(names(&by_name.apply(&files)), vec!["a.txt", "b.txt"]);

    let by_size = ListQuery::new().sorted_by(FileSortKey::Size, SortDirection::Desc);
    assert_eq!(names(&by_size.apply(&files)), vec!["a.txt", "b.txt"]);
}

#[test]
fn test_sort_by_dates() {
    let files = helpers::files();

    let newest_first = ListQuery::new().sorted_by(FileSortKey::CreatedAt, SortDirection::Desc);
    assert_eq!(
        names(&newest_first.apply(&files)),
        vec!["b.txt", "Holiday.JPG", "a.txt", "clip.mp4", "budget.csv"]
    );

    let updated = ListQuery::new().sorted_by(FileSortKey::UpdatedAt, SortDirection::Asc);
    let sorted = updated.apply(&files);
    assert_eq!(sorted.last().map(|f| f.name.as_str()), Some("a.txt"));
}

#[test]
fn test_category_filter_and_sort() {
    let files = helpers::files();
    let query = ListQuery::new()
        .with_category(CategoryFilter::Only(FileCategory::Document))
        .sorted_by(FileSortKey::Size, SortDirection::Asc);
    assert_eq!(names(&query.apply(&files)), vec!["b.txt", "a.txt"]);

    let by_type = ListQuery::new().sorted_by(FileSortKey::Category, SortDirection::Asc);
    assert_eq!(
        names(&by_type.apply(&files)),
        vec!["b.txt", "a.txt", "Holiday.JPG", "budget.csv", "clip.mp4"]
    );
}

#[test]
fn test_query_is_case_insensitive() {
    let files = helpers::files();
    let query = ListQuery::new().with_query("HOLI");
    assert_eq!(names(&query.apply(&files)), vec!["Holiday.JPG"]);
    assert!(ListQuery::new().with_query("zzz").apply(&files).is_empty());
}

#[test]
fn test_configured_default_sort() {
    let config = BrowseConfig {
        sort_key: FileSortKey::Size,
        sort_direction: SortDirection::Desc,
        ..BrowseConfig::default()
    };
    let mut query = ListQuery::from_config(&config);
    let files = helpers::files();
    assert_eq!(query.apply(&files)[0].name, "clip.mp4");

    query.toggle_sort(FileSortKey::Size);
    assert_eq!(query.apply(&files)[0].name, "b.txt");
}

#[test]
fn test_search_history_session() {
    let mut history = SearchHistory::from_config(&BrowseConfig::default());
    for query in ["report", "budget", "report ", "", "photos"] {
        history.record(query);
    }
    assert_eq!(history.entries(), ["photos", "report", "budget"]);

    let restored = SearchHistory::from_json(&history.to_json().unwrap(), 2);
    assert_eq!(restored.entries(), ["photos", "report"]);

    assert!(SearchHistory::from_json("not json at all", 10).is_empty());
}

fn file_strategy() -> impl Strategy<Value = FileRecord> {
    ("[a-zA-Z]{1,8}\\.(txt|png|csv|mp4|rs|zip)", 0u64..10_000)
        .prop_map(|(name, size)| FileRecord::new(name.as_str(), name.as_str(), size))
}

fn key_strategy() -> impl Strategy<Value = FileSortKey> {
    prop_oneof![
        Just(FileSortKey::Name),
        Just(FileSortKey::Size),
        Just(FileSortKey::Category),
        Just(FileSortKey::CreatedAt),
        Just(FileSortKey::UpdatedAt),
    ]
}

proptest! {
    #[test]
    fn prop_unfiltered_query_only_reorders(
        files in prop::collection::vec(file_strategy(), 0..30),
        key in key_strategy(),
        descending in any::<bool>(),
    ) {
        let direction = if descending { SortDirection::Desc } else { SortDirection::Asc };
        let query = ListQuery::new().sorted_by(key, direction);
        let result = query.apply(&files);

        prop_assert_eq!(result.len(), files.len());
        let mut before: Vec<&str> = files.iter().map(|f| f.id.as_str()).collect();
        let mut after: Vec<&str> = result.iter().map(|f| f.id.as_str()).collect();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);

        for pair in result.windows(2) {
            prop_assert_ne!(query.compare(pair[0], pair[1]), std::cmp::Ordering::Greater);
        }
    }

    #[test]
    fn prop_history_is_bounded_and_distinct(
        queries in prop::collection::vec("[a-c ]{0,3}", 0..50),
        limit in 0usize..12,
    ) {
        let mut history = SearchHistory::new(limit);
        for query in &queries {
            history.record(query);
        }
        prop_assert!(history.len() <= limit);
        let mut seen = std::collections::HashSet::new();
        for entry in history.entries() {
            prop_assert!(!entry.trim().is_empty());
            prop_assert!(seen.insert(entry.clone()));
        }
    }
}
