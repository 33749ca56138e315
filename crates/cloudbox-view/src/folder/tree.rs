//! Folder tree building, descendant enumeration, and move-target validation.
//!
//! Every function here is total: a dangling parent reference makes a folder
//! top-level, and a parent cycle is cut at the first revisited node. The
//! screens that call these have no recovery path for an error at render
//! time, so none is ever returned.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, warn};

use cloudbox_core::types::FolderId;
use cloudbox_entity::folder::{FolderNode, FolderRecord};

/// Builds a forest from a flat folder list.
///
/// Runs in O(n): one pass indexes records by ID, a second attaches each
/// record to its parent (or to the roots when the parent is null or
/// missing). Children keep their relative input order. Records that are
/// only reachable through a parent cycle are promoted to roots in input
/// order, so every distinct ID appears exactly once. Duplicate IDs keep
/// their first occurrence.
pub fn build_tree(records: &[FolderRecord]) -> Vec<FolderNode> {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        if index.contains_key(record.id.as_str()) {
            warn!(folder_id = %record.id, "Duplicate folder id ignored");
            continue;
        }
        index.insert(record.id.as_str(), i);
    }

    let is_canonical = |i: usize, record: &FolderRecord| index.get(record.id.as_str()) == Some(&i);

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
    let mut roots = Vec::new();
    for (i, record) in records.iter().enumerate() {
        if !is_canonical(i, record) {
            continue;
        }
        match record
            .parent_id
            .as_ref()
            .and_then(|parent| index.get(parent.as_str()))
        {
            Some(&parent) => children[parent].push(i),
            None => {
                if let Some(parent) = &record.parent_id {
                    debug!(folder_id = %record.id, parent_id = %parent, "Dangling parent, treating as root");
                }
                roots.push(i);
            }
        }
    }

    let mut placed = vec![false; records.len()];
    let mut forest = Vec::with_capacity(roots.len());
    for root in roots {
        assemble(records, &children, root, &mut placed, &mut forest);
    }

    for (i, record) in records.iter().enumerate() {
        if is_canonical(i, record) && !placed[i] {
            warn!(folder_id = %record.id, "Folder parent chain forms a cycle, promoting to root");
            assemble(records, &children, i, &mut placed, &mut forest);
        }
    }

    forest
}

struct Frame {
    idx: usize,
    next: usize,
    node: FolderNode,
}

impl Frame {
    fn new(records: &[FolderRecord], idx: usize) -> Self {
        Self {
            idx,
            next: 0,
            node: FolderNode::leaf(&records[idx]),
        }
    }
}

/// Builds the subtree under `root` depth-first on an explicit stack and
/// appends it to `forest`.
fn assemble(
    records: &[FolderRecord],
    children: &[Vec<usize>],
    root: usize,
    placed: &mut [bool],
    forest: &mut Vec<FolderNode>,
) {
    placed[root] = true;
    let mut stack = vec![Frame::new(records, root)];

    while let Some(mut frame) = stack.pop() {
        if let Some(&child) = children[frame.idx].get(frame.next) {
            frame.next += 1;
            stack.push(frame);
            // A placed child here means the parent graph looped back.
            if !placed[child] {
                placed[child] = true;
                stack.push(Frame::new(records, child));
            }
            continue;
        }
        match stack.last_mut() {
            Some(parent) => parent.node.children.push(frame.node),
            None => forest.push(frame.node),
        }
    }
}

/// Collects the IDs of every folder whose ancestor chain passes through
/// `folder_id`.
///
/// Breadth-first over the parent relation with a visited set, so a cyclic
/// input terminates after at most one visit per record. The result never
/// contains `folder_id` itself.
pub fn descendant_ids(records: &[FolderRecord], folder_id: &str) -> HashSet<FolderId> {
    let mut by_parent: HashMap<&str, Vec<&FolderId>> = HashMap::new();
    for record in records {
        if let Some(parent) = &record.parent_id {
            by_parent
                .entry(parent.as_str())
                .or_default()
                .push(&record.id);
        }
    }

    let mut visited: HashSet<&str> = HashSet::from([folder_id]);
    let mut queue: VecDeque<&str> = VecDeque::from([folder_id]);
    let mut descendants = HashSet::new();

    while let Some(current) = queue.pop_front() {
        let Some(kids) = by_parent.get(current) else {
            continue;
        };
        for &kid in kids {
            if !visited.insert(kid.as_str()) {
                continue;
            }
            descendants.insert(kid.clone());
            queue.push_back(kid.as_str());
        }
    }

    descendants
}

/// Whether a folder may be moved at all. Top-level folders may not.
pub fn can_move(record: &FolderRecord) -> bool {
    !record.is_root()
}

/// The folders `folder_id` could be moved under, in input order.
///
/// Excludes the folder itself and all of its descendants.
pub fn move_targets<'a>(records: &'a [FolderRecord], folder_id: &str) -> Vec<&'a FolderRecord> {
    let excluded = descendant_ids(records, folder_id);
    records
        .iter()
        .filter(|record| record.id.as_str() != folder_id && !excluded.contains(record.id.as_str()))
        .collect()
}

/// Checks a proposed move before it is offered to the user.
///
/// `target` of `None` means "move to the top level".
pub fn is_valid_move_target(
    records: &[FolderRecord],
    folder_id: &str,
    target: Option<&str>,
) -> bool {
    let Some(folder) = records.iter().find(|r| r.id.as_str() == folder_id) else {
        return false;
    };
    if !can_move(folder) {
        return false;
    }

    match target {
        None => true,
        Some(target) => {
            target != folder_id
                && records.iter().any(|r| r.id.as_str() == target)
                && !descendant_ids(records, folder_id).contains(target)
        }
    }
}

/// Ancestor chain from the top level down to `folder_id` (inclusive).
///
/// Stops at a null or dangling parent, or when the chain revisits a folder.
/// Returns an empty list when `folder_id` is unknown.
pub fn breadcrumbs<'a>(records: &'a [FolderRecord], folder_id: &str) -> Vec<&'a FolderRecord> {
    let mut lookup: HashMap<&str, &FolderRecord> = HashMap::with_capacity(records.len());
    for record in records {
        lookup.entry(record.id.as_str()).or_insert(record);
    }

    let mut trail = Vec::new();
    let mut seen = HashSet::new();
    let mut cursor = lookup.get(folder_id).copied();

    while let Some(record) = cursor {
        if !seen.insert(record.id.as_str()) {
            warn!(folder_id = %record.id, "Folder ancestry loops, truncating breadcrumbs");
            break;
        }
        trail.push(record);
        cursor = record
            .parent_id
            .as_ref()
            .and_then(|parent| lookup.get(parent.as_str()).copied());
    }

    trail.reverse();
    trail
}

/// Pre-order list of every ID in a forest.
pub fn flatten_ids(tree: &[FolderNode]) -> Vec<FolderId> {
    tree.iter()
        .flat_map(|root| root.iter())
        .map(|node| node.id.clone())
        .collect()
}
