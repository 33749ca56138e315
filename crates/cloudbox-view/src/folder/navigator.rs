//! Folder navigation state: expansion, selection, and filtered projections.
//!
//! One navigator is mounted per screen that browses or picks a folder (the
//! sidebar tree, selector dialogs, move dialogs). It owns the folder list it
//! was loaded with and the tree built from it.

use std::collections::HashSet;

use tracing::debug;

use cloudbox_core::types::{FolderId, NameFilter};
use cloudbox_entity::folder::{FolderNode, FolderRecord, FolderTree};

use super::tree::{breadcrumbs, build_tree};

/// What a folder picker shows on its trigger button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionLabel<'a> {
    /// Nothing selected: the top level.
    Root,
    /// The selected folder's name.
    Folder(&'a str),
    /// The selected ID is not in the loaded list.
    Unknown,
}

/// One line of a rendered folder tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRow {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Nesting level, 0 for top-level folders.
    pub depth: usize,
    /// Whether an expand toggle should be shown.
    pub has_children: bool,
    /// Whether the children are currently shown.
    pub is_expanded: bool,
    /// Whether this is the selected folder.
    pub is_selected: bool,
}

/// Tracks the folder tree, expanded set, and selection for one screen.
#[derive(Debug, Clone, Default)]
pub struct FolderNavigator {
    folders: Vec<FolderRecord>,
    tree: FolderTree,
    /// IDs that have at least one child in `tree`.
    parents: HashSet<FolderId>,
    expanded: HashSet<FolderId>,
    selected: Option<FolderId>,
    /// Committed selection saved by `begin_pick`.
    pick_snapshot: Option<Option<FolderId>>,
}

impl FolderNavigator {
    /// Create an empty navigator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a navigator already loaded with `folders`.
    pub fn with_folders(folders: Vec<FolderRecord>) -> Self {
        let mut navigator = Self::new();
        navigator.load(folders);
        navigator
    }

    /// Replace the folder list.
    ///
    /// Rebuilds the tree and resets expansion to the top-level folders. The
    /// selection survives unless its folder is gone.
    pub fn load(&mut self, folders: Vec<FolderRecord>) {
        self.tree = FolderTree::from_roots(build_tree(&folders));
        self.parents = self
            .tree
            .iter()
            .filter(|node| node.has_children())
            .map(|node| node.id.clone())
            .collect();
        self.expanded = folders
            .iter()
            .filter(|folder| folder.is_root())
            .map(|folder| folder.id.clone())
            .collect();

        if let Some(selected) = &self.selected {
            if !folders.iter().any(|folder| &folder.id == selected) {
                debug!(folder_id = %selected, "Selected folder no longer present, clearing selection");
                self.selected = None;
            }
        }

        debug!(
            folders = folders.len(),
            roots = self.tree.roots.len(),
            placed = self.tree.total_folders,
            "Folder tree rebuilt"
        );
        self.folders = folders;
    }

    /// The folder list the tree was built from.
    pub fn folders(&self) -> &[FolderRecord] {
        &self.folders
    }

    /// The current tree.
    pub fn tree(&self) -> &FolderTree {
        &self.tree
    }

    /// Flip whether `id` is expanded. Folders without children are ignored.
    pub fn toggle_expand(&mut self, id: &str) {
        if !self.parents.contains(id) {
            return;
        }
        if !self.expanded.remove(id) {
            self.expanded.insert(FolderId::from(id));
        }
    }

    /// Whether `id` is currently expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// The expanded set.
    pub fn expanded(&self) -> &HashSet<FolderId> {
        &self.expanded
    }

    /// Expand every folder that has children.
    pub fn expand_all(&mut self) {
        self.expanded.extend(self.parents.iter().cloned());
    }

    /// Collapse everything.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Expand every ancestor of `id` so that it becomes visible.
    pub fn expand_to(&mut self, id: &str) {
        let trail = breadcrumbs(&self.folders, id);
        let ancestors = trail.len().saturating_sub(1);
        for record in &trail[..ancestors] {
            if self.parents.contains(record.id.as_str()) {
                self.expanded.insert(record.id.clone());
            }
        }
    }

    /// Select a folder, or `None` for the top level.
    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.map(FolderId::from);
    }

    /// The selected folder ID.
    pub fn selected(&self) -> Option<&FolderId> {
        self.selected.as_ref()
    }

    /// The selected folder record, if it is in the loaded list.
    pub fn selected_folder(&self) -> Option<&FolderRecord> {
        let selected = self.selected.as_ref()?;
        self.folders.iter().find(|folder| &folder.id == selected)
    }

    /// Label for a picker trigger.
    pub fn selected_label(&self) -> SelectionLabel<'_> {
        match (&self.selected, self.selected_folder()) {
            (None, _) => SelectionLabel::Root,
            (Some(_), Some(folder)) => SelectionLabel::Folder(&folder.name),
            (Some(_), None) => SelectionLabel::Unknown,
        }
    }

    /// Start a pick: later `select` calls are tentative until `confirm`.
    pub fn begin_pick(&mut self) {
        self.pick_snapshot = Some(self.selected.clone());
    }

    /// Whether a pick is in progress.
    pub fn is_picking(&self) -> bool {
        self.pick_snapshot.is_some()
    }

    /// Commit the tentative selection and return it.
    pub fn confirm(&mut self) -> Option<FolderId> {
        self.pick_snapshot = None;
        self.selected.clone()
    }

    /// Abandon the pick and restore the selection from `begin_pick`.
    pub fn cancel(&mut self) {
        if let Some(previous) = self.pick_snapshot.take() {
            self.selected = previous;
        }
    }

    /// A pruned copy of the tree keeping folders whose name contains
    /// `query` (case-insensitively) and the ancestors of those folders.
    ///
    /// The stored tree is never modified.
    pub fn filter(&self, query: &str) -> Vec<FolderNode> {
        let filter = NameFilter::new(query);
        if filter.is_empty() {
            return self.tree.roots.clone();
        }
        prune(&self.tree.roots, &filter)
    }

    /// Rows to render, in pre-order, descending only into expanded folders.
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        let mut stack: Vec<(&FolderNode, usize)> =
            self.tree.roots.iter().rev().map(|node| (node, 0)).collect();

        while let Some((node, depth)) = stack.pop() {
            let is_expanded = node.has_children() && self.expanded.contains(&node.id);
            rows.push(VisibleRow {
                id: node.id.clone(),
                name: node.name.clone(),
                depth,
                has_children: node.has_children(),
                is_expanded,
                is_selected: self.selected.as_ref() == Some(&node.id),
            });
            if is_expanded {
                stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
            }
        }

        rows
    }
}

struct PruneFrame<'a> {
    node: &'a FolderNode,
    next: usize,
    kept: Vec<FolderNode>,
}

impl<'a> PruneFrame<'a> {
    fn new(node: &'a FolderNode) -> Self {
        Self {
            node,
            next: 0,
            kept: Vec::new(),
        }
    }
}

/// Post-order walk with an explicit stack, so chain depth is bounded only
/// by the heap.
fn prune(nodes: &[FolderNode], filter: &NameFilter) -> Vec<FolderNode> {
    let mut pruned = Vec::new();
    for root in nodes {
        let mut stack = vec![PruneFrame::new(root)];
        while let Some(mut frame) = stack.pop() {
            if let Some(child) = frame.node.children.get(frame.next) {
                frame.next += 1;
                stack.push(frame);
                stack.push(PruneFrame::new(child));
                continue;
            }
            if !filter.matches(&frame.node.name) && frame.kept.is_empty() {
                continue;
            }
            let node = FolderNode {
                id: frame.node.id.clone(),
                name: frame.node.name.clone(),
                parent_id: frame.node.parent_id.clone(),
                children: frame.kept,
            };
            match stack.last_mut() {
                Some(parent) => parent.kept.push(node),
                None => pruned.push(node),
            }
        }
    }
    pruned
}
