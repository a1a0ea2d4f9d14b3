//! codemap core — scanning, aggregation and search.
//!
//! This crate contains all business logic with no rendering dependencies.
//!
//! # Modules
//!
//! - [`model`] — Nested node tree, scan statistics and size formatting.
//! - [`scanner`] — Depth-first directory walk with ignore rules.
//! - [`analysis`] — Extension ranking and path search over a finished scan.
pub mod analysis;
pub mod model;
pub mod scanner;

pub use model::{DirNode, FileNode, Node, ScanStats};
pub use scanner::{scan, scan_with, ScanOptions, ScanResult};
