//! Static project file trees
//!
//! A tree is a list of `FileNode`s loaded from embedded JSON. Nodes are never
//! created, renamed or deleted at runtime; the only mutable thing is the
//! per-view `TreeViewState` recording which folders are open. Selecting a
//! file hands out a copy of its name and content.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ─────────────────────────────────────────────────────────────────────────────
// Data Model
// ─────────────────────────────────────────────────────────────────────────────

/// A named entry in a project tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    #[serde(flatten)]
    pub kind: FileNodeKind,
}

/// Files carry content and folders carry children, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileNodeKind {
    File {
        #[serde(default)]
        content: String,
    },
    Folder {
        #[serde(default)]
        children: Vec<FileNode>,
    },
}

impl FileNode {
    #[cfg(test)]
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FileNodeKind::File {
                content: content.into(),
            },
        }
    }

    #[cfg(test)]
    pub fn folder(name: impl Into<String>, children: Vec<FileNode>) -> Self {
        Self {
            name: name.into(),
            kind: FileNodeKind::Folder { children },
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, FileNodeKind::Folder { .. })
    }

    /// Children of a folder; empty for files.
    pub fn children(&self) -> &[FileNode] {
        match &self.kind {
            FileNodeKind::Folder { children } => children,
            FileNodeKind::File { .. } => &[],
        }
    }
}

/// Index path from the root list to a node, e.g. `[1, 0, 2]`.
pub type NodePath = Vec<usize>;

/// The file currently open in an editor: a copy, detached from the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content: String,
}

/// Look up the node at `path`.
pub fn find<'a>(nodes: &'a [FileNode], path: &[usize]) -> Option<&'a FileNode> {
    let (first, rest) = path.split_first()?;
    let node = nodes.get(*first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        find(node.children(), rest)
    }
}

/// Number of files (not folders) in the tree.
pub fn file_count(nodes: &[FileNode]) -> usize {
    nodes
        .iter()
        .map(|node| match &node.kind {
            FileNodeKind::File { .. } => 1,
            FileNodeKind::Folder { children } => file_count(children),
        })
        .sum()
}

/// Whether `node` gets the selection highlight.
///
/// Only names are compared, so every node sharing the selected file's name
/// is highlighted, wherever it sits in the tree.
pub fn is_selected(node: &FileNode, selected_name: Option<&str>) -> bool {
    selected_name == Some(node.name.as_str())
}

// ─────────────────────────────────────────────────────────────────────────────
// View State
// ─────────────────────────────────────────────────────────────────────────────

/// Open/closed state of the folders in one rendered tree.
///
/// Every folder starts closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeViewState {
    open: HashSet<NodePath>,
}

impl TreeViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, path: &[usize]) -> bool {
        self.open.contains(path)
    }

    /// Flip one folder. Closing a folder also forgets the state of the
    /// folders inside it, so they show closed when it is reopened.
    pub fn toggle(&mut self, path: &[usize]) {
        if self.open.remove(path) {
            self.open.retain(|open| !open.starts_with(path));
        } else {
            self.open.insert(path.to_vec());
        }
    }

    #[cfg(test)]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

/// One visible line of a rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow<'a> {
    pub path: NodePath,
    pub depth: usize,
    pub node: &'a FileNode,
    pub is_open: bool,
}

impl TreeRow<'_> {
    /// Left padding in pixels: 12 per level plus 8.
    pub fn indent(&self) -> f32 {
        self.depth as f32 * 12.0 + 8.0
    }
}

/// Depth-first list of the rows to draw; children appear only under open
/// folders.
pub fn visible_rows<'a>(nodes: &'a [FileNode], state: &TreeViewState) -> Vec<TreeRow<'a>> {
    let mut rows = Vec::new();
    let mut path = Vec::new();
    collect_rows(nodes, state, &mut path, &mut rows);
    rows
}

fn collect_rows<'a>(
    nodes: &'a [FileNode],
    state: &TreeViewState,
    path: &mut NodePath,
    rows: &mut Vec<TreeRow<'a>>,
) {
    for (index, node) in nodes.iter().enumerate() {
        path.push(index);
        let is_open = node.is_folder() && state.is_open(path);
        rows.push(TreeRow {
            path: path.clone(),
            depth: path.len() - 1,
            node,
            is_open,
        });
        if is_open {
            collect_rows(node.children(), state, path, rows);
        }
        path.pop();
    }
}

/// Handle a click on the row at `path`.
///
/// Folders toggle; files return a copy of their name and content. The tree
/// itself is never modified.
pub fn activate(
    nodes: &[FileNode],
    path: &[usize],
    state: &mut TreeViewState,
) -> Option<SelectedFile> {
    let node = find(nodes, path)?;
    match &node.kind {
        FileNodeKind::Folder { .. } => {
            state.toggle(path);
            None
        }
        FileNodeKind::File { content } => Some(SelectedFile {
            name: node.name.clone(),
            content: content.clone(),
        }),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<FileNode> {
        vec![
            FileNode::file("manifest.json", "{}"),
            FileNode::folder(
                "src",
                vec![
                    FileNode::folder("pages", vec![FileNode::file("popup.html", "<h1>Hi</h1>")]),
                    FileNode::folder("background", vec![FileNode::file("background.js", "")]),
                ],
            ),
            FileNode::folder("icons", vec![]),
        ]
    }

    fn names(rows: &[TreeRow<'_>]) -> Vec<String> {
        rows.iter().map(|r| r.node.name.clone()).collect()
    }

    #[test]
    fn test_deserialize_tagged_json() {
        let json = r#"[
            {"name": "a.js", "type": "file", "content": "x"},
            {"name": "lib", "type": "folder", "children": [{"name": "b.js", "type": "file"}]}
        ]"#;
        let nodes: Vec<FileNode> = serde_json::from_str(json).unwrap();
        assert_eq!(nodes[0], FileNode::file("a.js", "x"));
        assert_eq!(nodes[1], FileNode::folder("lib", vec![FileNode::file("b.js", "")]));
    }

    #[test]
    fn test_all_folders_start_closed() {
        let nodes = sample();
        let rows = visible_rows(&nodes, &TreeViewState::new());
        assert_eq!(names(&rows), ["manifest.json", "src", "icons"]);
        assert!(rows.iter().all(|r| !r.is_open));
    }

    #[test]
    fn test_open_folder_shows_children_with_depth() {
        let nodes = sample();
        let mut state = TreeViewState::new();
        state.toggle(&[1]);
        state.toggle(&[1, 0]);

        let rows = visible_rows(&nodes, &state);
        assert_eq!(
            names(&rows),
            ["manifest.json", "src", "pages", "popup.html", "background", "icons"]
        );
        assert_eq!(rows[3].depth, 2);
        assert_eq!(rows[3].path, vec![1, 0, 0]);
        assert_eq!(rows[3].indent(), 32.0);
    }

    #[test]
    fn test_toggle_does_not_affect_siblings() {
        let mut state = TreeViewState::new();
        state.toggle(&[1, 0]);
        state.toggle(&[1, 1]);
        state.toggle(&[1, 0]);

        assert!(!state.is_open(&[1, 0]));
        assert!(state.is_open(&[1, 1]));
        assert!(!state.is_open(&[2]));
    }

    #[test]
    fn test_closing_parent_forgets_nested_state() {
        let mut state = TreeViewState::new();
        state.toggle(&[1]);
        state.toggle(&[1, 0]);
        state.toggle(&[1]);
        assert_eq!(state.open_count(), 0);

        state.toggle(&[1]);
        assert!(!state.is_open(&[1, 0]));
    }

    #[test]
    fn test_activate_file_copies_without_mutating_tree() {
        let nodes = sample();
        let before = nodes.clone();
        let mut state = TreeViewState::new();

        let selected = activate(&nodes, &[1, 0, 0], &mut state).unwrap();
        assert_eq!(
            selected,
            SelectedFile {
                name: "popup.html".to_string(),
                content: "<h1>Hi</h1>".to_string(),
            }
        );
        assert_eq!(nodes, before);
        assert_eq!(state, TreeViewState::new());
    }

    #[test]
    fn test_activate_folder_toggles() {
        let nodes = sample();
        let mut state = TreeViewState::new();
        assert!(activate(&nodes, &[2], &mut state).is_none());
        assert!(state.is_open(&[2]));
        assert!(activate(&nodes, &[9], &mut state).is_none());
    }

    #[test]
    fn test_selection_compares_names_only() {
        let a = FileNode::file("index.js", "a");
        let b = FileNode::file("index.js", "b");
        assert!(is_selected(&a, Some("index.js")));
        assert!(is_selected(&b, Some("index.js")));
        assert!(!is_selected(&a, None));
        assert!(!is_selected(&a, Some("index.ts")));
    }

    #[test]
    fn test_find_and_file_count() {
        let nodes = sample();
        assert_eq!(find(&nodes, &[1, 1, 0]).map(|n| n.name.as_str()), Some("background.js"));
        assert!(find(&nodes, &[0, 0]).is_none());
        assert!(find(&nodes, &[]).is_none());
        assert_eq!(file_count(&nodes), 3);
    }
}
