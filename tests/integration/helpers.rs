//! Shared fixtures and strategies for integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use proptest::prelude::*;
use proptest::sample::Index;

use cloudbox_entity::file::FileRecord;
use cloudbox_entity::folder::FolderRecord;
use cloudbox_view::viewport::{CaptureId, PointerCapture};

/// A folder whose name equals its ID.
pub fn folder(id: &str, parent: Option<&str>) -> FolderRecord {
    FolderRecord::new(id, id, parent)
}

/// `a <- b <- c`
pub fn chain() -> Vec<FolderRecord> {
    vec![
        folder("a", None),
        folder("b", Some("a")),
        folder("c", Some("b")),
    ]
}

/// A small library tree decoded from a "list folders" payload.
pub fn library() -> Vec<FolderRecord> {
    serde_json::from_str(
        r#"[
            {"id": "docs", "name": "Documents", "parentId": null, "createdAt": "2024-01-01T00:00:00Z"},
            {"id": "work", "name": "Work", "parentId": "docs"},
            {"id": "q1", "name": "Q1 Reports", "parentId": "work"},
            {"id": "q2", "name": "Q2 Reports", "parentId": "work"},
            {"id": "pics", "name": "Pictures", "parentId": null},
            {"id": "trip", "name": "Trip 2023", "parentId": "pics"},
            {"id": "stray", "name": "Stray", "parentId": "deleted-folder"}
        ]"#,
    )
    .expect("fixture folders must decode")
}

/// A "list files" payload with mixed categories and dates.
pub fn files() -> Vec<FileRecord> {
    serde_json::from_str(
        r#"[
            {"id": "1", "name": "b.txt", "size": 10, "type": "document",
             "createdAt": "2024-03-01T00:00:00Z", "updatedAt": "2024-03-05T00:00:00Z"},
            {"id": "2", "name": "a.txt", "size": 20, "type": "document",
             "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-04-01T00:00:00Z"},
            {"id": "3", "name": "Holiday.JPG", "size": 4096, "type": "image",
             "createdAt": "2024-02-01T00:00:00Z"},
            {"id": "4", "name": "clip.mp4", "size": 100000, "type": "video",
             "uploadedAt": "2023-12-24T00:00:00Z"},
            {"id": "5", "name": "budget.csv", "size": 300, "type": "spreadsheet"}
        ]"#,
    )
    .expect("fixture files must decode")
}

/// Records every acquire and release.
#[derive(Default)]
pub struct RecordingCapture {
    log: Mutex<Vec<(bool, u64)>>,
}

impl RecordingCapture {
    /// Number of acquisitions so far.
    pub fn acquired(&self) -> usize {
        self.log.lock().unwrap().iter().filter(|(acquire, _)| *acquire).count()
    }

    /// Number of releases so far.
    pub fn released(&self) -> usize {
        self.log.lock().unwrap().iter().filter(|(acquire, _)| !*acquire).count()
    }

    /// Whether every acquired ID was released exactly once.
    pub fn balanced(&self) -> bool {
        let log = self.log.lock().unwrap();
        let mut open = Vec::new();
        for &(acquire, id) in log.iter() {
            if acquire {
                open.push(id);
            } else if let Some(pos) = open.iter().position(|&held| held == id) {
                open.remove(pos);
            } else {
                return false;
            }
        }
        open.is_empty()
    }
}

impl PointerCapture for RecordingCapture {
    fn acquire(&self) -> CaptureId {
        let mut log = self.log.lock().unwrap();
        let id = log.len() as u64;
        log.push((true, id));
        CaptureId(id)
    }

    fn release(&self, id: CaptureId) {
        self.log.lock().unwrap().push((false, id.0));
    }
}

fn records_from(parents: Vec<Option<usize>>) -> Vec<FolderRecord> {
    parents
        .into_iter()
        .enumerate()
        .map(|(i, parent)| {
            let id = format!("f{i}");
            let parent = parent.map(|p| format!("f{p}"));
            FolderRecord::new(id.as_str(), id.as_str(), parent.as_deref())
        })
        .collect()
}

/// Folder lists without parent cycles, in shuffled order.
pub fn acyclic_folders() -> impl Strategy<Value = Vec<FolderRecord>> {
    prop::collection::vec(prop::option::of(any::<Index>()), 0..40)
        .prop_map(|slots| {
            let parents = slots
                .into_iter()
                .enumerate()
                .map(|(i, slot)| match slot {
                    Some(index) if i > 0 => Some(index.index(i)),
                    _ => None,
                })
                .collect();
            records_from(parents)
        })
        .prop_shuffle()
}

/// Folder lists whose parents may point anywhere, including at themselves
/// or at missing IDs.
pub fn arbitrary_folders() -> impl Strategy<Value = Vec<FolderRecord>> {
    prop::collection::vec(prop::option::of(any::<Index>()), 1..40).prop_map(|slots| {
        let n = slots.len();
        let parents = slots
            .into_iter()
            .map(|slot| slot.map(|index| index.index(n + 2)))
            .collect();
        records_from(parents)
    })
}
