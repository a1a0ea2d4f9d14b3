//! Path search over the scanned tree.
//!
//! This is the decision logic the report's viewer script runs on every
//! keystroke, expressed as a pure function so it can be tested here:
//!
//! - a row whose path contains the query (case-insensitively) is shown;
//! - a directory with at least one matching descendant is shown and opened;
//! - every other row is hidden;
//! - an empty query shows every row and forces nothing open.
//!
//! Paths are relative to the root, so the root's own name never matches and
//! the root itself is not a row.
use crate::model::{DirNode, Node};

/// Visibility of a single row after filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowState {
    /// Path relative to the root, segments joined by `/`.
    pub path: String,
    pub is_dir: bool,
    pub visible: bool,
    /// `true` if the row is a directory forced open to reveal a match.
    pub open: bool,
}

/// Every row of the tree with its visibility for one query.
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    /// Rows in pre-order.
    pub rows: Vec<RowState>,
}

impl FilterOutcome {
    /// Look up a row by its relative path.
    pub fn row(&self, path: &str) -> Option<&RowState> {
        self.rows.iter().find(|r| r.path == path)
    }

    /// `Some(true)` if the row at `path` is shown, `None` if there is no such row.
    pub fn is_visible(&self, path: &str) -> Option<bool> {
        self.row(path).map(|r| r.visible)
    }

    /// Relative paths of every shown row, in pre-order.
    pub fn visible_paths(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter(|r| r.visible)
            .map(|r| r.path.as_str())
    }
}

/// Apply `query` to every row below `root`.
pub fn filter_tree(root: &DirNode, query: &str) -> FilterOutcome {
    let query = query.to_lowercase();
    let mut outcome = FilterOutcome::default();
    for child in &root.children {
        visit(child, "", &query, &mut outcome.rows);
    }
    outcome
}

/// Record `node` and its descendants; returns `true` if anything at or below
/// `node` matches.
fn visit(node: &Node, prefix: &str, query: &str, rows: &mut Vec<RowState>) -> bool {
    let path = if prefix.is_empty() {
        node.name().to_string()
    } else {
        format!("{prefix}/{}", node.name())
    };
    let matches = query.is_empty() || path.to_lowercase().contains(query);

    let slot = rows.len();
    rows.push(RowState {
        path: path.clone(),
        is_dir: node.is_dir(),
        visible: matches,
        open: false,
    });

    let mut descendant_matches = false;
    for child in node.children() {
        // No short-circuit: every descendant needs its own row state.
        descendant_matches |= visit(child, &path, query, rows);
    }

    if !query.is_empty() && descendant_matches {
        let row = &mut rows[slot];
        row.visible = true;
        row.open = true;
    }
    matches || descendant_matches
}
