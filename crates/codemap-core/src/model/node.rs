//! A single file or directory in the scanned tree.
//!
//! The tree is owned and nested: each directory holds its children by value
//! and the whole structure is immutable once the scan returns.
use compact_str::CompactString;
use serde::Serialize;

/// Extension key used for files whose name has no usable suffix.
pub const NO_EXTENSION: &str = "(no ext)";

/// A file or directory in the tree.
///
/// Serialises untagged: directories as `{"name", "children", "size"}` and
/// files as `{"name", "size", "ext"}`. The embedded viewer script tells the
/// two apart by the presence of `children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Dir(DirNode),
    File(FileNode),
}

/// A directory and its surviving (non-ignored, non-empty) children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirNode {
    /// Last path segment only.
    pub name: CompactString,

    /// Children in scan order (lexicographic by name).
    pub children: Vec<Node>,

    /// Sum of all descendant file sizes, accumulated as children are pushed.
    pub size: u64,
}

/// A regular file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileNode {
    pub name: CompactString,

    /// Size in bytes as reported by the filesystem at scan time.
    pub size: u64,

    /// Lower-cased suffix with its leading dot, or [`NO_EXTENSION`].
    #[serde(rename = "ext")]
    pub extension: CompactString,
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Self::Dir(dir) => &dir.name,
            Self::File(file) => &file.name,
        }
    }

    pub fn size(&self) -> u64 {
        match self {
            Self::Dir(dir) => dir.size,
            Self::File(file) => file.size,
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Dir(_))
    }

    /// Children of a directory; empty for files.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Dir(dir) => &dir.children,
            Self::File(_) => &[],
        }
    }
}

impl DirNode {
    /// Create an empty directory node.
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            size: 0,
        }
    }

    /// Append a child and fold its size into this directory's total.
    pub fn push(&mut self, child: Node) {
        self.size += child.size();
        self.children.push(child);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Check the tree invariants below this directory.
    ///
    /// Every directory's size must equal the sum of its children's sizes and
    /// no directory other than `self` may be empty (empty subtrees are pruned
    /// during the scan). `self` is allowed to be empty because the scan root
    /// is never pruned.
    pub fn is_consistent(&self) -> bool {
        let sum: u64 = self.children.iter().map(Node::size).sum();
        sum == self.size
            && self.children.iter().all(|child| match child {
                Node::Dir(dir) => !dir.is_empty() && dir.is_consistent(),
                Node::File(_) => true,
            })
    }
}

impl FileNode {
    /// Create a file node, deriving the extension from `name`.
    pub fn new(name: impl Into<CompactString>, size: u64) -> Self {
        let name = name.into();
        let extension = extension_of(&name);
        Self {
            name,
            size,
            extension,
        }
    }
}

/// Classify a file name by its extension.
///
/// The extension is everything from the last `.` onwards, lower-cased. A dot
/// in first position (`.profile`) or last position (`notes.`) does not start
/// an extension, so such names fall back to [`NO_EXTENSION`].
pub fn extension_of(name: &str) -> CompactString {
    match name.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < name.len() => {
            CompactString::from(name[dot..].to_lowercase())
        }
        _ => CompactString::from(NO_EXTENSION),
    }
}
