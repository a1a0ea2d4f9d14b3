//! Data model for the codemap tree.
//!
//! Re-exports the nested node tree, scan statistics and size formatting.
pub mod node;
pub mod size;
pub mod stats;

pub use node::{extension_of, DirNode, FileNode, Node, NO_EXTENSION};
pub use stats::{ExtensionStats, ScanStats};
