//! Integration tests for folder tree building and navigation.

mod helpers;

use std::collections::HashSet;

use proptest::prelude::*;

use cloudbox_core::types::FolderId;
use cloudbox_entity::folder::FolderTree;
use cloudbox_view::folder::{
    FolderNavigator, SelectionLabel, breadcrumbs, build_tree, descendant_ids, flatten_ids,
    is_valid_move_target, move_targets,
};

#[test]
fn test_chain_scenario() {
    let records = helpers::chain();
    let tree = build_tree(&records);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].id.as_str(), "a");
    assert_eq!(tree[0].children.len(), 1);
    assert_eq!(tree[0].children[0].id.as_str(), "b");
    assert_eq!(tree[0].children[0].children[0].id.as_str(), "c");

    let descendants = descendant_ids(&records, "a");
    let expected: HashSet<FolderId> = ["b", "c"].into_iter().map(FolderId::from).collect();
    assert_eq!(descendants, expected);

    let targets: Vec<&str> = move_targets(&records, "b")
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert!(targets.contains(&"a"));
    assert!(!targets.contains(&"b"));
    assert!(!targets.contains(&"c"));
}

#[test]
fn test_library_payload() {
    let records = helpers::library();
    let tree = FolderTree::from_roots(build_tree(&records));

    assert_eq!(tree.total_folders, 7);
    let roots: Vec<&str> = tree.roots.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(roots, vec!["docs", "pics", "stray"]);

    let work = tree.find("work").expect("work is in the tree");
    let kids: Vec<&str> = work.children.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(kids, vec!["Q1 Reports", "Q2 Reports"]);
}

#[test]
fn test_dangling_parent_is_movable_to_root() {
    let records = helpers::library();
    assert!(is_valid_move_target(&records, "stray", None));
    assert!(is_valid_move_target(&records, "stray", Some("docs")));
    assert!(!is_valid_move_target(&records, "docs", Some("pics")));
    assert!(!is_valid_move_target(&records, "work", Some("q1")));
}

#[test]
fn test_breadcrumbs_for_nested_folder() {
    let records = helpers::library();
    let names: Vec<&str> = breadcrumbs(&records, "q2")
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Documents", "Work", "Q2 Reports"]);

    let stray: Vec<&str> = breadcrumbs(&records, "stray")
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(stray, vec!["stray"]);
}

#[test]
fn test_navigator_sidebar_session() {
    let mut navigator = FolderNavigator::with_folders(helpers::library());

    let ids = |nav: &FolderNavigator| -> Vec<String> {
        nav.visible_rows()
            .into_iter()
            .map(|row| row.id.into_string())
            .collect()
    };
    assert_eq!(ids(&navigator), vec!["docs", "work", "pics", "trip", "stray"]);

    navigator.select(Some("q1"));
    navigator.expand_to("q1");
    let rows = navigator.visible_rows();
    let q1 = rows.iter().find(|row| row.id.as_str() == "q1").expect("q1 is revealed");
    assert_eq!(q1.depth, 2);
    assert!(q1.is_selected);
    assert_eq!(navigator.selected_label(), SelectionLabel::Folder("Q1 Reports"));

    let filtered = navigator.filter("trip");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id.as_str(), "pics");
    assert_eq!(filtered[0].children[0].id.as_str(), "trip");

    let without_q1 = helpers::library()
        .into_iter()
        .filter(|f| f.id.as_str() != "q1")
        .collect();
    navigator.load(without_q1);
    assert!(navigator.selected().is_none());
    assert!(!navigator.is_expanded("work"));
}

#[test]
fn test_selector_dialog_pick() {
    let mut navigator = FolderNavigator::with_folders(helpers::library());
    navigator.begin_pick();
    navigator.select(Some("trip"));
    assert_eq!(navigator.confirm().map(FolderId::into_string), Some("trip".to_string()));

    navigator.begin_pick();
    navigator.select(None);
    navigator.cancel();
    assert_eq!(navigator.selected_label(), SelectionLabel::Folder("Trip 2023"));
}

proptest! {
    #[test]
    fn prop_acyclic_round_trip(records in helpers::acyclic_folders()) {
        let mut flattened = flatten_ids(&build_tree(&records));
        let mut input: Vec<FolderId> = records.iter().map(|r| r.id.clone()).collect();
        flattened.sort();
        input.sort();
        prop_assert_eq!(flattened, input);
    }

    #[test]
    fn prop_every_id_placed_once_even_with_cycles(records in helpers::arbitrary_folders()) {
        let flattened = flatten_ids(&build_tree(&records));
        let unique: HashSet<&FolderId> = flattened.iter().collect();
        prop_assert_eq!(unique.len(), flattened.len());
        prop_assert_eq!(flattened.len(), records.len());
    }

    #[test]
    fn prop_descendants_exclude_self(records in helpers::arbitrary_folders(), pick in any::<prop::sample::Index>()) {
        let target = records[pick.index(records.len())].id.clone();
        let descendants = descendant_ids(&records, target.as_str());
        prop_assert!(!descendants.contains(&target));
        prop_assert!(descendants.len() < records.len());
    }

    #[test]
    fn prop_descendants_match_subtree(records in helpers::acyclic_folders(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!records.is_empty());
        let target = records[pick.index(records.len())].id.as_str();
        let tree = FolderTree::from_roots(build_tree(&records));
        let subtree: HashSet<FolderId> = tree
            .find(target)
            .expect("every id is in the tree")
            .iter()
            .skip(1)
            .map(|node| node.id.clone())
            .collect();
        prop_assert_eq!(descendant_ids(&records, target), subtree);
    }

    #[test]
    fn prop_move_targets_never_include_subtree(records in helpers::acyclic_folders(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!records.is_empty());
        let target = records[pick.index(records.len())].id.as_str();
        let excluded = descendant_ids(&records, target);
        for candidate in move_targets(&records, target) {
            prop_assert!(candidate.id.as_str() != target);
            prop_assert!(!excluded.contains(&candidate.id));
        }
    }
}
